use common::export::{ExportFormat, ExportRequest};
use common::portal_const::MAX_EXPORT_ROWS;

use crate::api::cases::list_explore_cases::listing_body;
use crate::api_utils::api_types::{ApiHits, ApiResponse};
use crate::api_utils::gdc_client::{gdc_post, gdc_post_text};

/// All cases matching the request, at most `MAX_EXPORT_ROWS` of them, in the requested format.
pub async fn export_cases(request: ExportRequest) -> anyhow::Result<String> {
    let filters = request.decode_filters()?;
    let fields = request.field_list();
    if fields.is_empty() {
        anyhow::bail!("no fields requested for export");
    }
    let mut body = listing_body(filters.as_ref(), &fields.join(","), 0, MAX_EXPORT_ROWS, request.sort.as_deref());
    tracing::info!("export_cases: {} fields as {}", fields.len(), request.format.as_str());

    match request.format {
        ExportFormat::Tsv => {
            body["format"] = serde_json::json!("TSV");
            gdc_post_text("cases", &body).await
        }
        ExportFormat::Json => {
            let response: ApiResponse<ApiHits<serde_json::Value>> = gdc_post("cases", &body).await?;
            Ok(serde_json::to_string_pretty(&response.data.hits)?)
        }
    }
}
