//! Week commands: loading, navigation, day edits, shift templates.

use serde::Serialize;

use crate::commands::{read_session, write_session};
use crate::error::AppError;
use crate::models::{ShiftModel, ShiftTemplate, TotalHours, WeekRecord};
use crate::state::AppState;
use crate::timesheet::calendar::WeekDirection;
use crate::timesheet::engine::{TimeField, WeekSession};

/// Everything the frontend needs to render the week view in one payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSnapshot {
    pub year: i32,
    pub week: u32,
    pub date_range: String,
    pub is_current_week: bool,
    pub record: Option<WeekRecord>,
    pub total: TotalHours,
    pub editable: bool,
    pub supervisor_can_sign: bool,
}

pub(crate) fn snapshot_of(session: &WeekSession) -> WeekSnapshot {
    let (year, week) = session.current().unwrap_or((0, 0));
    WeekSnapshot {
        year,
        week,
        date_range: session.date_range(),
        is_current_week: crate::timesheet::calendar::is_current_week(year, week),
        record: session.record().cloned(),
        total: session.total_hours(),
        editable: session.is_editable(),
        supervisor_can_sign: session.can_supervisor_sign(),
    }
}

pub(crate) fn initialize_week_inner(
    state: &AppState,
    year: Option<i32>,
    week: Option<u32>,
) -> Result<WeekSnapshot, AppError> {
    let mut session = write_session(state)?;
    session.initialize(&state.store, year, week)?;
    Ok(snapshot_of(&session))
}

/// Load (or create) a week and return its snapshot. Without arguments the
/// current calendar week is used.
#[tauri::command]
pub async fn initialize_week(
    state: tauri::State<'_, AppState>,
    year: Option<i32>,
    week: Option<u32>,
) -> Result<WeekSnapshot, AppError> {
    initialize_week_inner(&state, year, week)
}

pub(crate) fn navigate_week_inner(
    state: &AppState,
    direction: WeekDirection,
) -> Result<WeekSnapshot, AppError> {
    let mut session = write_session(state)?;
    session.navigate(&state.store, direction)?;
    Ok(snapshot_of(&session))
}

/// Move to the previous, next, or current calendar week.
#[tauri::command]
pub async fn navigate_week(
    state: tauri::State<'_, AppState>,
    direction: WeekDirection,
) -> Result<WeekSnapshot, AppError> {
    navigate_week_inner(&state, direction)
}

/// The current week snapshot without changing anything.
#[tauri::command]
pub async fn get_week_snapshot(
    state: tauri::State<'_, AppState>,
) -> Result<WeekSnapshot, AppError> {
    Ok(snapshot_of(&*read_session(&state)?))
}

pub(crate) fn update_day_time_inner(
    state: &AppState,
    day_index: usize,
    field: TimeField,
    value: &str,
) -> Result<WeekSnapshot, AppError> {
    let mut session = write_session(state)?;
    session.update_day_field(&state.store, day_index, field, value)?;
    Ok(snapshot_of(&session))
}

/// Set one time field of one day. The value is auto-formatted.
#[tauri::command]
pub async fn update_day_time(
    state: tauri::State<'_, AppState>,
    day_index: usize,
    field: TimeField,
    value: String,
) -> Result<WeekSnapshot, AppError> {
    update_day_time_inner(&state, day_index, field, &value)
}

pub(crate) fn apply_shift_template_inner(
    state: &AppState,
    model: ShiftModel,
    template: &ShiftTemplate,
    day_mask: [bool; 7],
) -> Result<WeekSnapshot, AppError> {
    let mut session = write_session(state)?;
    session.apply_shift_template(&state.store, model, template, day_mask)?;
    Ok(snapshot_of(&session))
}

/// Apply a shift template to the masked days and switch the shift model.
#[tauri::command]
pub async fn apply_shift_template(
    state: tauri::State<'_, AppState>,
    model: ShiftModel,
    template: ShiftTemplate,
    day_mask: [bool; 7],
) -> Result<WeekSnapshot, AppError> {
    apply_shift_template_inner(&state, model, &template, day_mask)
}

/// The builtin default template for a shift model.
#[tauri::command]
pub async fn get_shift_template(model: ShiftModel) -> Result<ShiftTemplate, AppError> {
    Ok(ShiftTemplate::builtin(model))
}

pub(crate) fn update_customer_inner(state: &AppState, name: &str) -> Result<WeekSnapshot, AppError> {
    let mut session = write_session(state)?;
    session.update_customer(&state.store, name)?;
    Ok(snapshot_of(&session))
}

#[tauri::command]
pub async fn update_customer(
    state: tauri::State<'_, AppState>,
    name: String,
) -> Result<WeekSnapshot, AppError> {
    update_customer_inner(&state, &name)
}

#[tauri::command]
pub async fn update_customer_email(
    state: tauri::State<'_, AppState>,
    email: String,
) -> Result<WeekSnapshot, AppError> {
    let mut session = write_session(&state)?;
    session.update_customer_email(&state.store, &email)?;
    Ok(snapshot_of(&session))
}

/// Switch the shift model without touching day times.
#[tauri::command]
pub async fn update_shift_model(
    state: tauri::State<'_, AppState>,
    model: ShiftModel,
) -> Result<WeekSnapshot, AppError> {
    let mut session = write_session(&state)?;
    session.update_shift_model(&state.store, model)?;
    Ok(snapshot_of(&session))
}

pub(crate) fn clear_week_inner(state: &AppState) -> Result<WeekSnapshot, AppError> {
    let mut session = write_session(state)?;
    session.clear_week(&state.store)?;
    Ok(snapshot_of(&session))
}

/// Reset the current week's times, signatures, and lock.
#[tauri::command]
pub async fn clear_week(state: tauri::State<'_, AppState>) -> Result<WeekSnapshot, AppError> {
    clear_week_inner(&state)
}

/// The current week's total as `HH:MM` and decimal hours.
#[tauri::command]
pub async fn get_total_hours(state: tauri::State<'_, AppState>) -> Result<TotalHours, AppError> {
    Ok(read_session(&state)?.total_hours())
}

/// All stored `(year, week)` pairs, newest first.
#[tauri::command]
pub async fn list_weeks(state: tauri::State<'_, AppState>) -> Result<Vec<(i32, u32)>, AppError> {
    Ok(state.store.list_weeks())
}

/// All stored records, newest week first, for the archive view.
#[tauri::command]
pub async fn list_week_records(
    state: tauri::State<'_, AppState>,
) -> Result<Vec<WeekRecord>, AppError> {
    Ok(state.store.load_all_weeks())
}

/// Delete one stored week record. The in-memory session is untouched.
#[tauri::command]
pub async fn delete_week(
    state: tauri::State<'_, AppState>,
    year: i32,
    week: u32,
) -> Result<(), AppError> {
    state.store.delete_week(year, week)
}

/// Per-day flags marking days over the configured daily maximum.
#[tauri::command]
pub async fn check_daily_max(state: tauri::State<'_, AppState>) -> Result<Vec<bool>, AppError> {
    let session = read_session(&state)?;
    Ok(session.days_over_limit(state.config.limits.max_daily_hours))
}
