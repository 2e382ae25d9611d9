//! Client API calls for case data.

use common::case_record::{Bucket, CaseHits, CasePageData};
use common::filters::FilterExpr;
use dioxus::prelude::*;

/// Mutations shown in the frequent-mutations chart and table.
pub const FREQUENT_MUTATIONS_LIMIT: usize = 20;

#[server]
pub async fn fetch_case_page(case_id: String) -> Result<CasePageData, ServerFnError> {
    let x = backend::api::cases::fetch_case_page(case_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn fetch_explore_cases(filters: Option<FilterExpr>, offset: u64, size: u64, sort: Option<String>) -> Result<CaseHits, ServerFnError> {
    let x = backend::api::cases::fetch_explore_cases(filters, offset, size, sort).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn fetch_ssm_case_counts(case_ids: Vec<String>) -> Result<Vec<Bucket>, ServerFnError> {
    let x = backend::api::mutations::fetch_ssm_case_counts(case_ids).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn fetch_frequent_mutations(filters: Option<FilterExpr>) -> Result<Vec<Bucket>, ServerFnError> {
    let x = backend::api::mutations::fetch_frequent_mutations(filters, FREQUENT_MUTATIONS_LIMIT).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
