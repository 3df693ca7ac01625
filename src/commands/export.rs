//! PDF export command.
//!
//! Rendering is CPU-bound (image decoding, QR generation, PDF assembly),
//! so the record is snapshotted under the read lock and rendered on a
//! blocking worker thread. Edits made after the snapshot is taken do not
//! appear in the exported document.

use serde::Serialize;

use crate::commands::read_session;
use crate::error::AppError;
use crate::export::{self, payload};
use crate::models::WeekRecord;
use crate::state::AppState;

/// The rendered document together with its suggested filename. The
/// frontend pipes this into a save dialog.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfExport {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub(crate) fn export_snapshot(state: &AppState) -> Result<WeekRecord, AppError> {
    let session = read_session(state)?;
    session
        .record()
        .cloned()
        .ok_or_else(|| AppError::NotFound("no week loaded".to_string()))
}

/// Render the current week as a PDF.
#[tauri::command]
pub async fn export_week_pdf(state: tauri::State<'_, AppState>) -> Result<PdfExport, AppError> {
    let record = export_snapshot(&state)?;
    let config = state.config.clone();

    let file_name = payload::export_filename(
        &config.export.filename_prefix,
        &record.employee_name,
        record.year,
        record.iso_week,
    );

    let bytes = tokio::task::spawn_blocking(move || export::render_document(&record, &config))
        .await
        .map_err(|e| AppError::ExportFailed(format!("render task failed: {e}")))??;

    tracing::info!(%file_name, size = bytes.len(), "pdf rendered");
    Ok(PdfExport { file_name, bytes })
}
