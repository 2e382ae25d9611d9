//! Response envelope of the data API and conversion into portal records.

use std::collections::BTreeMap;

use anyhow::Context;
use common::case_record::{AnnotationHits, Bucket, CaseRecord};
use common::filters::FilterExpr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default)]
    pub warnings: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiHits<T> {
    pub hits: Vec<T>,
    #[serde(default)]
    pub pagination: ApiPagination,
    #[serde(default)]
    pub aggregations: Option<BTreeMap<String, ApiAggregation>>,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ApiPagination {
    pub total: u64,
    pub size: u64,
    pub from: u64,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct ApiAggregation {
    #[serde(default)]
    pub buckets: Vec<Bucket>,
}

impl<T> ApiHits<T> {
    pub fn aggregation_buckets(&self, facet: &str) -> Option<&[Bucket]> {
        self.aggregations
            .as_ref()
            .and_then(|aggs| aggs.get(facet))
            .map(|agg| agg.buckets.as_slice())
    }
}

#[derive(Debug, Deserialize)]
struct ApiAnnotation {
    annotation_id: String,
}

/// The API lists annotations as a flat array; the portal model wants a
/// `{total, edges}` connection.
pub fn case_from_api(mut value: serde_json::Value) -> anyhow::Result<CaseRecord> {
    let annotations = value
        .as_object_mut()
        .and_then(|obj| obj.remove("annotations"))
        .unwrap_or(serde_json::Value::Null);
    let annotations: Vec<ApiAnnotation> = match annotations {
        serde_json::Value::Null => Vec::new(),
        other => serde_json::from_value(other).context("malformed case annotations")?,
    };
    let mut case: CaseRecord = serde_json::from_value(value).context("malformed case record")?;
    case.annotations.hits = AnnotationHits::from_ids(annotations.into_iter().map(|a| a.annotation_id).collect());
    Ok(case)
}

/// Filter JSON for endpoints where cases are nested as `case.` rather than
/// `cases.` (the occurrence endpoints).
pub fn filter_for_case_entity(filter: &FilterExpr) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(filter)?;
    if let Some(content) = value.get_mut("content").and_then(|c| c.as_array_mut()) {
        for predicate in content {
            if let Some(field) = predicate.pointer_mut("/content/field") {
                if let Some(name) = field.as_str().and_then(|f| f.strip_prefix("cases.")) {
                    *field = serde_json::Value::String(format!("case.{name}"));
                }
            }
        }
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::filters::{FilterField, Predicate, make_filter};
    use pretty_assertions::assert_eq;

    #[test]
    fn annotations_become_a_connection() {
        let case = case_from_api(serde_json::json!({
            "case_id": "c1",
            "submitter_id": "TCGA-01",
            "project": {"project_id": "TCGA-LUAD", "program": {"name": "TCGA"}},
            "annotations": [{"annotation_id": "a"}, {"annotation_id": "b"}]
        }))
        .unwrap();
        assert_eq!(case.annotations.hits.total, 2);
        assert_eq!(case.annotations.hits.edges[1].node.annotation_id, "b");
        assert_eq!(case.project.program.name.as_deref(), Some("TCGA"));

        let bare = case_from_api(serde_json::json!({"case_id": "c2"})).unwrap();
        assert_eq!(bare.annotations.hits.total, 0);
    }

    #[test]
    fn case_fields_are_rebased_for_occurrences() {
        let filter = make_filter([
            Predicate::new(FilterField::ProjectId, "TCGA-LUAD"),
            Predicate::new(FilterField::ExperimentalStrategy, "WXS"),
        ])
        .unwrap();
        let value = filter_for_case_entity(&filter).unwrap();
        assert_eq!(value["content"][0]["content"]["field"], "case.project.project_id");
        assert_eq!(value["content"][1]["content"]["field"], "files.experimental_strategy");
    }

    #[test]
    fn aggregation_lookup_tolerates_missing_facets() {
        let hits: ApiHits<serde_json::Value> = serde_json::from_value(serde_json::json!({
            "hits": [],
            "aggregations": {"case.case_id": {"buckets": [{"key": "c1", "doc_count": 4}]}}
        }))
        .unwrap();
        assert_eq!(hits.aggregation_buckets("case.case_id").unwrap().len(), 1);
        assert!(hits.aggregation_buckets("other").is_none());
        assert_eq!(hits.pagination.total, 0);
    }
}
