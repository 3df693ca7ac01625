//! Backup export and import.
//!
//! A backup is a single JSON object mapping every store key to its raw
//! string value. Week records therefore appear as JSON-in-a-string, which
//! keeps the import path trivial and version-agnostic: whatever was stored
//! is restored byte for byte.

use serde_json::{Map, Value};

use crate::error::AppError;
use crate::store::{keys, Store};

impl Store {
    /// Serialize every application key into one pretty-printed JSON object.
    pub fn export_all(&self) -> Result<String, AppError> {
        let mut map = Map::new();
        let mut backed_up = self.all_keys();
        backed_up.sort_unstable();
        for key in backed_up {
            if !key.starts_with(keys::PREFIX) {
                continue;
            }
            if let Some(value) = self.get(&key) {
                map.insert(key, Value::String(value));
            }
        }
        serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|e| AppError::Io(format!("cannot serialize backup: {e}")))
    }

    /// Restore keys from a backup produced by [`Store::export_all`].
    ///
    /// Returns the number of keys applied. Only string values under the
    /// application prefix, with keys made of word characters as the app
    /// itself writes them, are applied; anything else in the object is
    /// skipped with a warning so a partially foreign file cannot corrupt
    /// the store or abort the import halfway.
    pub fn import_all(&self, backup: &str) -> Result<usize, AppError> {
        let parsed: Value = serde_json::from_str(backup)
            .map_err(|e| AppError::InvalidBackup(format!("not valid JSON: {e}")))?;
        let Value::Object(map) = parsed else {
            return Err(AppError::InvalidBackup(
                "top level must be a JSON object".to_string(),
            ));
        };

        let mut applied = 0;
        for (key, value) in map {
            if !key.starts_with(keys::PREFIX) {
                tracing::warn!(%key, "skipping foreign key in backup");
                continue;
            }
            // Keys name files under the store root, so anything beyond the
            // word characters the app itself writes is skipped.
            if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                tracing::warn!(%key, "skipping malformed key in backup");
                continue;
            }
            match value {
                Value::String(s) => {
                    self.set(&key, &s)?;
                    applied += 1;
                }
                other => {
                    tracing::warn!(%key, "skipping non-string backup value: {other}");
                }
            }
        }
        tracing::info!(applied, "backup imported");
        Ok(applied)
    }
}
