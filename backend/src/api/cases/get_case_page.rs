use anyhow::Context;
use common::case_record::{CasePageData, FileRecord};
use common::filters::{FilterField, Predicate, make_filter};
use common::portal_const::MAX_CART_SIZE;

use crate::api_utils::api_types::{ApiHits, ApiResponse, case_from_api};
use crate::api_utils::gdc_client::{api_page_limit, gdc_post};

const CASE_EXPAND: &str = "project,project.program,summary,summary.experimental_strategies,summary.data_categories,demographic,diagnoses,samples,annotations";
const FILE_FIELDS: &str = "file_id,file_name,file_size,access,data_category";

pub async fn fetch_case_page(case_id: String) -> anyhow::Result<CasePageData> {
    tracing::info!("fetch_case_page: {}", case_id);
    let case_filter = make_filter([Predicate::new(FilterField::CaseId, vec![case_id.clone()])]);

    let case_body = serde_json::json!({
        "filters": case_filter,
        "expand": CASE_EXPAND,
        "fields": "case_id,submitter_id,disease_type,primary_site,available_variation_data",
        "size": 1,
    });
    let files_body = serde_json::json!({
        "filters": case_filter,
        "fields": FILE_FIELDS,
        "size": api_page_limit().min(MAX_CART_SIZE as u64),
    });

    let (cases, files) = futures::try_join!(
        gdc_post::<ApiResponse<ApiHits<serde_json::Value>>>("cases", &case_body),
        gdc_post::<ApiResponse<ApiHits<FileRecord>>>("files", &files_body),
    )?;

    let node = cases
        .data
        .hits
        .into_iter()
        .next()
        .with_context(|| format!("case {case_id} not found"))?;
    let node = case_from_api(node)?;
    let ssm_tested = node.ssm_tested();

    Ok(CasePageData {
        total_files: files.data.pagination.total,
        files: files.data.hits,
        ssm_tested,
        node,
    })
}
