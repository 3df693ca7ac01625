//! Shared application state managed by Tauri.

use std::sync::RwLock;

use crate::config::AppConfig;
use crate::store::Store;
use crate::timesheet::engine::WeekSession;

/// State handed to every command handler via `tauri::State`.
///
/// The store is internally path-based and needs no lock; the session is
/// guarded by an `RwLock` because commands run on Tauri's async runtime
/// and may overlap.
pub struct AppState {
    pub store: Store,
    pub session: RwLock<WeekSession>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: Store, config: AppConfig) -> Self {
        Self {
            store,
            session: RwLock::new(WeekSession::new()),
            config,
        }
    }
}
