//! PDF export pipeline: verification payload, QR code, document rendering.

pub mod payload;
pub mod pdf;
pub mod qr;

pub use payload::{build_payload, export_filename, ExportPayload};
pub use pdf::render_document;

/// Errors inside the export pipeline.
///
/// Only whole-pipeline failures surface as `Err`; cosmetic failures
/// (unreadable signature image, QR generation) are logged and the element
/// is omitted from the document instead.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("pdf rendering failed: {0}")]
    Pdf(String),

    #[error("verification payload failed: {0}")]
    Payload(String),

    #[error("qr code generation failed: {0}")]
    Qr(String),

    #[error("signature image unreadable: {0}")]
    Signature(String),
}
