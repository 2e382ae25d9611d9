//! Case and file records as returned by the data API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseRecord {
    pub case_id: String,
    pub submitter_id: String,
    pub project: ProjectRef,
    pub disease_type: Option<String>,
    pub primary_site: Option<String>,
    pub summary: CaseSummary,
    pub annotations: AnnotationConnection,
    pub demographic: Option<Demographic>,
    pub diagnoses: Vec<Diagnosis>,
    pub samples: Vec<Sample>,
    pub available_variation_data: Vec<String>,
}

impl CaseRecord {
    /// Whether the case went through somatic-mutation calling.
    pub fn ssm_tested(&self) -> bool {
        self.available_variation_data.iter().any(|v| v == "ssm")
    }

    /// File count for a data category, zero when the case has none.
    pub fn data_category_count(&self, data_category: &str) -> u64 {
        self.summary
            .data_categories
            .iter()
            .find(|c| c.data_category == data_category)
            .map(|c| c.file_count)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRef {
    pub project_id: String,
    pub name: Option<String>,
    pub program: ProgramRef,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseSummary {
    pub file_count: u64,
    pub experimental_strategies: Vec<ExperimentalStrategyCount>,
    pub data_categories: Vec<DataCategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExperimentalStrategyCount {
    pub experimental_strategy: String,
    pub file_count: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataCategoryCount {
    pub data_category: String,
    pub file_count: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConnection {
    pub hits: AnnotationHits,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationHits {
    pub total: u64,
    pub edges: Vec<Edge<AnnotationNode>>,
}

impl AnnotationHits {
    pub fn from_ids(ids: Vec<String>) -> Self {
        Self {
            total: ids.len() as u64,
            edges: ids.into_iter().map(|annotation_id| Edge { node: AnnotationNode { annotation_id } }).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnnotationNode {
    pub annotation_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Demographic {
    pub gender: Option<String>,
    pub race: Option<String>,
    pub ethnicity: Option<String>,
    pub vital_status: Option<String>,
    pub days_to_death: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Diagnosis {
    pub diagnosis_id: String,
    pub primary_diagnosis: Option<String>,
    pub tumor_stage: Option<String>,
    pub age_at_diagnosis: Option<f64>,
    pub days_to_last_follow_up: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sample {
    pub sample_id: String,
    pub submitter_id: String,
    pub sample_type: Option<String>,
    pub tissue_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecord {
    pub file_id: String,
    pub file_name: String,
    pub file_size: u64,
    pub access: Option<String>,
    pub data_category: Option<String>,
}

/// Everything the case page needs, resolved in one server call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CasePageData {
    pub node: CaseRecord,
    pub files: Vec<FileRecord>,
    pub total_files: u64,
    pub ssm_tested: bool,
}

/// One page of the explore-cases listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CaseHits {
    pub total: u64,
    pub edges: Vec<Edge<CaseRecord>>,
}

/// Aggregation bucket: a key and how many documents carry it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bucket {
    pub key: String,
    pub doc_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_nested_fields_default() {
        let case: CaseRecord = serde_json::from_value(serde_json::json!({
            "case_id": "c1",
            "summary": {"data_categories": [{"data_category": "Clinical", "file_count": 3}]}
        }))
        .unwrap();
        assert_eq!(case.annotations.hits.total, 0);
        assert!(case.summary.experimental_strategies.is_empty());
        assert_eq!(case.data_category_count("Clinical"), 3);
        assert_eq!(case.data_category_count("Biospecimen"), 0);
        assert!(!case.ssm_tested());
    }

    #[test]
    fn ssm_tested_reads_variation_data() {
        let case = CaseRecord {
            available_variation_data: vec!["cnv".to_string(), "ssm".to_string()],
            ..Default::default()
        };
        assert!(case.ssm_tested());
    }
}
