//! Storage commands: settings, consent, and backup transfer.

use crate::error::AppError;
use crate::state::AppState;

#[tauri::command]
pub async fn get_employee_name(
    state: tauri::State<'_, AppState>,
) -> Result<Option<String>, AppError> {
    Ok(state.store.employee_name())
}

#[tauri::command]
pub async fn set_employee_name(
    state: tauri::State<'_, AppState>,
    name: String,
) -> Result<(), AppError> {
    state.store.set_employee_name(&name)
}

#[tauri::command]
pub async fn get_language(state: tauri::State<'_, AppState>) -> Result<String, AppError> {
    Ok(state.store.language())
}

#[tauri::command]
pub async fn set_language(
    state: tauri::State<'_, AppState>,
    language: String,
) -> Result<(), AppError> {
    state.store.set_language(&language)
}

#[tauri::command]
pub async fn get_consent(state: tauri::State<'_, AppState>) -> Result<bool, AppError> {
    Ok(state.store.has_consent())
}

#[tauri::command]
pub async fn set_consent(state: tauri::State<'_, AppState>, given: bool) -> Result<(), AppError> {
    state.store.set_consent(given)
}

/// Export every stored key as one JSON document and remember the backup
/// time.
#[tauri::command]
pub async fn export_backup(state: tauri::State<'_, AppState>) -> Result<String, AppError> {
    let backup = state.store.export_all()?;
    state.store.mark_backup_now()?;
    Ok(backup)
}

/// Restore keys from a backup document, returning how many were applied.
#[tauri::command]
pub async fn import_backup(
    state: tauri::State<'_, AppState>,
    backup: String,
) -> Result<usize, AppError> {
    state.store.import_all(&backup)
}

#[tauri::command]
pub async fn get_last_backup_date(
    state: tauri::State<'_, AppState>,
) -> Result<Option<String>, AppError> {
    Ok(state.store.last_backup_date())
}

#[tauri::command]
pub async fn get_first_use_date(
    state: tauri::State<'_, AppState>,
) -> Result<Option<String>, AppError> {
    Ok(state.store.first_use_date())
}

/// Delete only the week records, keeping settings.
#[tauri::command]
pub async fn clear_time_data(state: tauri::State<'_, AppState>) -> Result<(), AppError> {
    state.store.clear_time_data()
}

/// Delete everything the application has stored.
#[tauri::command]
pub async fn clear_all_data(state: tauri::State<'_, AppState>) -> Result<(), AppError> {
    state.store.clear_all_data()
}
