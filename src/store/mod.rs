//! File-backed key/value store.
//!
//! Each key is one UTF-8 file under the store root, named by the key
//! itself. Writes go through a temp-file-then-rename sequence so a crash
//! mid-write never leaves a truncated value behind. The store is probed on
//! open with a throwaway write/read/delete cycle; if the probe fails the
//! application refuses to start against that directory.

pub mod backup;
pub mod keys;

use std::fs;
use std::path::PathBuf;

use crate::error::AppError;
use crate::models::WeekRecord;
use crate::timesheet::calendar;

const PROBE_KEY: &str = "wpdl_storage_probe";

/// Directory-backed store holding one file per key.
#[derive(Debug)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open (and create if missing) a store rooted at `root`.
    ///
    /// Runs a write/read/delete probe and fails with
    /// [`AppError::StoreUnavailable`] when the directory is not usable.
    pub fn open(root: PathBuf) -> Result<Store, AppError> {
        fs::create_dir_all(&root)
            .map_err(|e| AppError::StoreUnavailable(format!("cannot create {root:?}: {e}")))?;

        let store = Store { root };
        store
            .set(PROBE_KEY, "ok")
            .map_err(|e| AppError::StoreUnavailable(format!("probe write failed: {e}")))?;
        match store.get(PROBE_KEY) {
            Some(v) if v == "ok" => {}
            other => {
                return Err(AppError::StoreUnavailable(format!(
                    "probe read returned {other:?}"
                )))
            }
        }
        store
            .remove(PROBE_KEY)
            .map_err(|e| AppError::StoreUnavailable(format!("probe delete failed: {e}")))?;

        tracing::info!(root = %store.root.display(), "store opened");
        Ok(store)
    }

    fn path_of(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Read the raw value of `key`, `None` when absent or unreadable.
    pub fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_of(key)).ok()
    }

    /// Write `value` under `key` atomically (temp file + rename).
    pub fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.path_of(key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Delete `key`. Deleting an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<(), AppError> {
        match fs::remove_file(self.path_of(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// All keys currently present, in unspecified order.
    pub fn all_keys(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return Vec::new();
        };
        entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|name| !name.ends_with(".tmp"))
            .collect()
    }

    // ── week records ──

    /// Load the record for `(year, week)`.
    ///
    /// A missing key yields `None`; so does a corrupt value, which is logged
    /// and treated as absent rather than failing the whole week view.
    pub fn load_week(&self, year: i32, week: u32) -> Option<WeekRecord> {
        let key = keys::week(year, week);
        let raw = self.get(&key)?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(%key, "corrupt week record ignored: {e}");
                None
            }
        }
    }

    /// Persist `record` under its `(year, iso_week)` key.
    pub fn save_week(&self, record: &WeekRecord) -> Result<(), AppError> {
        let key = keys::week(record.year, record.iso_week);
        let json = serde_json::to_string(record)
            .map_err(|e| AppError::Io(format!("cannot serialize week record: {e}")))?;
        self.set(&key, &json)
    }

    /// Delete the record for `(year, week)` if present.
    pub fn delete_week(&self, year: i32, week: u32) -> Result<(), AppError> {
        self.remove(&keys::week(year, week))
    }

    /// All stored `(year, week)` pairs, newest first. Keys that do not parse
    /// are skipped.
    pub fn list_weeks(&self) -> Vec<(i32, u32)> {
        let mut weeks: Vec<(i32, u32)> = self
            .all_keys()
            .into_iter()
            .filter_map(|key| {
                let rest = key.strip_prefix(keys::WEEK_PREFIX)?;
                calendar::parse_week_key(rest)
            })
            .collect();
        weeks.sort_unstable();
        weeks.reverse();
        weeks
    }

    /// Load every stored record, newest week first. Corrupt entries are
    /// skipped (logged by [`Store::load_week`]) so one bad value cannot
    /// break the whole listing.
    pub fn load_all_weeks(&self) -> Vec<WeekRecord> {
        self.list_weeks()
            .into_iter()
            .filter_map(|(year, week)| self.load_week(year, week))
            .collect()
    }

    // ── settings ──

    pub fn employee_name(&self) -> Option<String> {
        self.get(keys::EMPLOYEE_NAME)
    }

    pub fn set_employee_name(&self, name: &str) -> Result<(), AppError> {
        self.set(keys::EMPLOYEE_NAME, name)
    }

    /// UI language, defaulting to German.
    pub fn language(&self) -> String {
        self.get(keys::LANGUAGE).unwrap_or_else(|| "de".to_string())
    }

    pub fn set_language(&self, language: &str) -> Result<(), AppError> {
        self.set(keys::LANGUAGE, language)
    }

    pub fn has_consent(&self) -> bool {
        self.get(keys::CONSENT).as_deref() == Some("true")
    }

    pub fn set_consent(&self, given: bool) -> Result<(), AppError> {
        self.set(keys::CONSENT, if given { "true" } else { "false" })
    }

    // ── housekeeping timestamps ──

    pub fn last_backup_date(&self) -> Option<String> {
        self.get(keys::LAST_BACKUP_DATE)
    }

    /// Record "now" as the moment of the last successful backup.
    pub fn mark_backup_now(&self) -> Result<(), AppError> {
        self.set(keys::LAST_BACKUP_DATE, &now_rfc3339())
    }

    pub fn first_use_date(&self) -> Option<String> {
        self.get(keys::FIRST_USE_DATE)
    }

    /// Record the first application start. Later calls are no-ops.
    pub fn mark_first_use(&self) -> Result<(), AppError> {
        if self.first_use_date().is_some() {
            return Ok(());
        }
        self.set(keys::FIRST_USE_DATE, &now_rfc3339())
    }

    // ── bulk deletion ──

    /// Delete every application key (settings, weeks, timestamps).
    pub fn clear_all_data(&self) -> Result<(), AppError> {
        for key in self.all_keys() {
            if key.starts_with(keys::PREFIX) {
                self.remove(&key)?;
            }
        }
        Ok(())
    }

    /// Delete only week records, keeping settings and consent intact.
    pub fn clear_time_data(&self) -> Result<(), AppError> {
        for key in self.all_keys() {
            if key.starts_with(keys::WEEK_PREFIX) {
                self.remove(&key)?;
            }
        }
        Ok(())
    }
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}
