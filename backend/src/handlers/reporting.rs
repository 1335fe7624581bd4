//! Reporting handlers for pairing export

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use shared::PairingResult;

use crate::error::AppResult;
use crate::services::ReportService;
use crate::AppState;

/// Export a pairing result as a downloadable CSV, JSON or HTML file
pub async fn export_report(
    State(state): State<AppState>,
    Path(format): Path<String>,
    Json(result): Json<PairingResult>,
) -> AppResult<impl IntoResponse> {
    let service = ReportService::new(state.clock);
    let download = service.export(&format, &result)?;

    Ok((
        [
            (header::CONTENT_TYPE, download.content_type.to_string()),
            (header::CONTENT_DISPOSITION, download.content_disposition()),
        ],
        download.body,
    ))
}
