use common::case_record::Bucket;

use crate::api_utils::api_types::{ApiHits, ApiResponse};
use crate::api_utils::gdc_client::gdc_post;

const CASE_FACET: &str = "case.case_id";

/// Somatic mutation occurrences per case, for the given cases only.
pub async fn fetch_ssm_case_counts(case_ids: Vec<String>) -> anyhow::Result<Vec<Bucket>> {
    if case_ids.is_empty() {
        return Ok(Vec::new());
    }
    let body = serde_json::json!({
        "filters": {
            "op": "in",
            "content": {"field": CASE_FACET, "value": case_ids},
        },
        "facets": CASE_FACET,
        "size": 0,
    });
    let response: ApiResponse<ApiHits<serde_json::Value>> = gdc_post("ssm_occurrences", &body).await?;
    let buckets = response.data.aggregation_buckets(CASE_FACET).unwrap_or_default().to_vec();
    tracing::info!("fetch_ssm_case_counts: {} buckets for {} cases", buckets.len(), case_ids.len());
    Ok(buckets)
}
