use axum::{body::Body, extract::Query, http::StatusCode, response::{IntoResponse, Response}};
use common::export::ExportRequest;

use crate::api::cases::export_cases as export_cases_body;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn today() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

async fn _export_cases(request: ExportRequest) -> anyhow::Result<Response> {
    let filename = request.filename(&today());
    tracing::info!("export_cases: sending {}", filename);
    let data = export_cases_body(request.clone()).await?;
    let headers: [(String, String); 2] = [
        ("Content-Type".to_string(), request.format.content_type().to_string()),
        ("Content-Disposition".to_string(), format!("attachment; filename=\"{}\"", filename)),
    ];
    Ok((headers, Body::from(data)).into_response())
}

pub async fn export_cases(Query(request): Query<ExportRequest>) -> Response {
    match _export_cases(request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("export_cases: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn export_filename_carries_todays_date() {
        let date = today();
        assert!(chrono::NaiveDate::parse_from_str(&date, DATE_FORMAT).is_ok(), "{date}");

        let request = ExportRequest::new(common::export::ExportFormat::Tsv, None, &["case_id".to_string()], None);
        assert_eq!(request.filename(&date), format!("cases.{date}.tsv"));
    }
}
