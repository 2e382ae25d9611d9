use common::case_record::{CaseHits, Edge};
use common::filters::FilterExpr;

use crate::api_utils::api_types::{ApiHits, ApiResponse, case_from_api};
use crate::api_utils::gdc_client::{api_page_limit, gdc_post};

const EXPLORE_FIELDS: &str = "case_id,submitter_id,primary_site,disease_type,project.project_id,demographic.gender,summary.file_count";
const EXPLORE_EXPAND: &str = "summary.data_categories";

pub(crate) fn listing_body(
    filters: Option<&FilterExpr>,
    fields: &str,
    from: u64,
    size: u64,
    sort: Option<&str>,
) -> serde_json::Value {
    let mut body = serde_json::json!({
        "fields": fields,
        "from": from,
        "size": size.min(api_page_limit()),
    });
    if let Some(filters) = filters {
        body["filters"] = serde_json::json!(filters);
    }
    if let Some(sort) = sort.filter(|s| !s.is_empty()) {
        body["sort"] = serde_json::json!(sort);
    }
    body
}

pub async fn fetch_explore_cases(
    filters: Option<FilterExpr>,
    offset: u64,
    size: u64,
    sort: Option<String>,
) -> anyhow::Result<CaseHits> {
    let mut body = listing_body(filters.as_ref(), EXPLORE_FIELDS, offset, size, sort.as_deref());
    body["expand"] = serde_json::json!(EXPLORE_EXPAND);
    let response: ApiResponse<ApiHits<serde_json::Value>> = gdc_post("cases", &body).await?;
    let total = response.data.pagination.total;
    let edges = response
        .data
        .hits
        .into_iter()
        .map(|hit| case_from_api(hit).map(|node| Edge { node }))
        .collect::<anyhow::Result<Vec<_>>>()?;
    tracing::info!("fetch_explore_cases: {} of {} cases (offset {})", edges.len(), total, offset);
    Ok(CaseHits { total, edges })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::filters::{FilterField, Predicate, make_filter};

    #[test]
    fn listing_body_omits_absent_options() {
        let body = listing_body(None, "case_id", 20, 20, Some(""));
        assert_eq!(body["from"], 20);
        assert!(body.get("filters").is_none());
        assert!(body.get("sort").is_none());

        let filters = make_filter([Predicate::new(FilterField::PrimarySite, "Lung")]);
        let body = listing_body(filters.as_ref(), "case_id", 0, 20, Some("primary_site:asc"));
        assert_eq!(body["sort"], "primary_site:asc");
        assert_eq!(body["filters"]["op"], "and");
    }
}
