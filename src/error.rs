//! Application-level error type returned by all Tauri command handlers.
//!
//! `AppError` is serialized to `{ kind, message }` JSON payloads so the
//! TypeScript frontend can pattern-match on a stable `kind` string.

use crate::export::ExportError;

/// Top-level error returned by Tauri command handlers.
///
/// Serialized with serde's adjacently-tagged representation:
/// `{ "kind": "<variant>", "message": "<human-readable text>" }`
///
/// The TypeScript counterpart is:
/// ```ts
/// type AppError = { kind: string; message: string };
/// ```
#[derive(Debug, thiserror::Error, serde::Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum AppError {
    /// The durable store failed its availability probe or cannot be opened.
    #[error("{0}")]
    StoreUnavailable(String),

    /// A generic I/O error; the inner [`std::io::Error`] is converted to a
    /// string at the system boundary so it remains serializable.
    #[error("{0}")]
    Io(String),

    /// An edit was attempted on a week that is locked or already signed by
    /// the employee. The record is left unchanged.
    #[error("week is locked and cannot be edited")]
    WeekLocked,

    /// A requested resource (week record, day index) was not found.
    #[error("{0}")]
    NotFound(String),

    /// A backup import was rejected before any key was applied.
    #[error("{0}")]
    InvalidBackup(String),

    /// The PDF export pipeline failed as a whole; no partial document is
    /// returned. The inner message comes from [`ExportError`].
    #[error("{0}")]
    ExportFailed(String),
}

impl From<std::io::Error> for AppError {
    /// Convert an [`std::io::Error`] into an [`AppError::Io`].
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<ExportError> for AppError {
    /// Convert an [`ExportError`] into an [`AppError::ExportFailed`].
    ///
    /// The export error is stringified here so that the enum variant stores
    /// a plain `String`, keeping the serialized shape as `{ kind, message }`.
    fn from(e: ExportError) -> Self {
        Self::ExportFailed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_serializes_to_kind_message() {
        let err = AppError::Io("disk full".to_string());
        let value = serde_json::to_value(&err).expect("serialize AppError::Io");
        assert_eq!(value["kind"], "Io");
        assert_eq!(value["message"], "disk full");
    }

    #[test]
    fn week_locked_serializes_with_kind() {
        let err = AppError::WeekLocked;
        let value = serde_json::to_value(&err).expect("serialize AppError::WeekLocked");
        assert_eq!(value["kind"], "WeekLocked");
    }

    #[test]
    fn store_unavailable_serializes_to_kind_message() {
        let err = AppError::StoreUnavailable("read-only filesystem".to_string());
        let value = serde_json::to_value(&err).expect("serialize");
        assert_eq!(value["kind"], "StoreUnavailable");
        assert_eq!(value["message"], "read-only filesystem");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let app_err = AppError::from(io_err);
        assert!(matches!(app_err, AppError::Io(_)));
        let value = serde_json::to_value(&app_err).expect("serialize");
        assert_eq!(value["kind"], "Io");
    }

    #[test]
    fn from_export_error_produces_export_failed_variant() {
        let export_err = ExportError::Pdf("font table corrupt".to_string());
        let app_err = AppError::from(export_err);
        assert!(matches!(app_err, AppError::ExportFailed(_)));
        let value = serde_json::to_value(&app_err).expect("serialize");
        assert_eq!(value["kind"], "ExportFailed");
    }

    #[test]
    fn app_error_display_is_human_readable() {
        assert_eq!(
            AppError::WeekLocked.to_string(),
            "week is locked and cannot be edited"
        );
        assert_eq!(
            AppError::Io("access denied".to_string()).to_string(),
            "access denied"
        );
        assert_eq!(
            AppError::NotFound("week 2025/3 not found".to_string()).to_string(),
            "week 2025/3 not found"
        );
    }
}
