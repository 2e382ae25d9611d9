use common::case_record::Bucket;
use common::filters::FilterExpr;

use crate::api_utils::api_types::{ApiHits, ApiResponse, filter_for_case_entity};
use crate::api_utils::gdc_client::gdc_post;

const DNA_CHANGE_FACET: &str = "ssm.genomic_dna_change";

/// Most frequent mutations (by genomic DNA change) among occurrences
/// matching `filters`, highest count first.
pub async fn fetch_frequent_mutations(filters: Option<FilterExpr>, limit: usize) -> anyhow::Result<Vec<Bucket>> {
    let mut body = serde_json::json!({
        "facets": DNA_CHANGE_FACET,
        "size": 0,
    });
    if let Some(filters) = filters.as_ref() {
        body["filters"] = filter_for_case_entity(filters)?;
    }
    let response: ApiResponse<ApiHits<serde_json::Value>> = gdc_post("ssm_occurrences", &body).await?;
    let mut buckets = response.data.aggregation_buckets(DNA_CHANGE_FACET).unwrap_or_default().to_vec();
    Ok(top_buckets(&mut buckets, limit))
}

fn top_buckets(buckets: &mut Vec<Bucket>, limit: usize) -> Vec<Bucket> {
    buckets.retain(|b| b.key != "_missing");
    buckets.sort_by(|a, b| b.doc_count.cmp(&a.doc_count).then_with(|| a.key.cmp(&b.key)));
    buckets.truncate(limit);
    std::mem::take(buckets)
}
