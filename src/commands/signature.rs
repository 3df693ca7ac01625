//! Signature commands: signing and unsigning a week.

use crate::commands::week::{snapshot_of, WeekSnapshot};
use crate::commands::write_session;
use crate::error::AppError;
use crate::state::AppState;
use crate::timesheet::engine::SignatureRole;

pub(crate) fn add_signature_inner(
    state: &AppState,
    role: SignatureRole,
    image: &str,
    name: Option<&str>,
) -> Result<WeekSnapshot, AppError> {
    let mut session = write_session(state)?;
    session.add_signature(&state.store, role, image, name)?;
    Ok(snapshot_of(&session))
}

/// Attach a signature image (base64 PNG data URL) for `role`. Supplying a
/// name is only meaningful for the supervisor.
#[tauri::command]
pub async fn add_signature(
    state: tauri::State<'_, AppState>,
    role: SignatureRole,
    image: String,
    name: Option<String>,
) -> Result<WeekSnapshot, AppError> {
    add_signature_inner(&state, role, &image, name.as_deref())
}

pub(crate) fn clear_signature_inner(
    state: &AppState,
    role: SignatureRole,
) -> Result<WeekSnapshot, AppError> {
    let mut session = write_session(state)?;
    session.clear_signature(&state.store, role)?;
    Ok(snapshot_of(&session))
}

/// Remove the signature for `role`, unlocking the week.
#[tauri::command]
pub async fn clear_signature(
    state: tauri::State<'_, AppState>,
    role: SignatureRole,
) -> Result<WeekSnapshot, AppError> {
    clear_signature_inner(&state, role)
}
