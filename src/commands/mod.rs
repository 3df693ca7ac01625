//! Tauri command handlers, grouped by concern:
//!
//! - [`week`]: week loading, navigation, day edits, shift templates
//! - [`signature`]: signing and unsigning
//! - [`storage`]: settings, consent, backup export/import
//! - [`export`]: PDF rendering
//!
//! Each command is a thin `#[tauri::command]` wrapper around a
//! `*_inner` function taking plain references, so the logic is testable
//! without a Tauri runtime.

pub mod export;
pub mod signature;
pub mod storage;
pub mod week;

use std::sync::{RwLockReadGuard, RwLockWriteGuard};

use crate::error::AppError;
use crate::state::AppState;
use crate::timesheet::engine::WeekSession;

/// Acquire the session read lock, mapping poisoning to an I/O error.
pub(crate) fn read_session(state: &AppState) -> Result<RwLockReadGuard<'_, WeekSession>, AppError> {
    state
        .session
        .read()
        .map_err(|_| AppError::Io("session lock poisoned".to_string()))
}

/// Acquire the session write lock, mapping poisoning to an I/O error.
pub(crate) fn write_session(
    state: &AppState,
) -> Result<RwLockWriteGuard<'_, WeekSession>, AppError> {
    state
        .session
        .write()
        .map_err(|_| AppError::Io("session lock poisoned".to_string()))
}
