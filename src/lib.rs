//! Stundenzettel: offline weekly timesheet tracking.
//!
//! Week records are keyed by ISO year and week, edited through a single
//! session state machine, signed by employee and supervisor, and exported
//! as a PDF carrying a QR verification payload. Everything is stored
//! locally; the app never talks to a network.

pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod state;
pub mod store;
pub mod timesheet;

use tauri::{Emitter, Manager};

use crate::config::AppConfig;
use crate::state::AppState;
use crate::store::Store;
use crate::timesheet::engine::SessionEvent;

/// Forward session events to the frontend as Tauri events.
fn forward_event(handle: &tauri::AppHandle, event: &SessionEvent) {
    let result = match event {
        SessionEvent::WeekDataChanged => handle.emit("week-data-changed", ()),
        SessionEvent::CurrentWeekChanged { year, week } => {
            handle.emit("current-week-changed", (*year, *week))
        }
        SessionEvent::LoadingChanged(loading) => handle.emit("loading-state-changed", *loading),
    };
    if let Err(e) = result {
        tracing::warn!("event emit failed: {e}");
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // ── Tracing setup (must happen before anything else) ────────────────────
    //
    // Logs go to a single file in the OS data dir next to the store and the
    // config; RUST_LOG controls the level, INFO by default.
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("stundenzettel");

    // Stdout logging only as fallback when the log dir is unusable.
    let _guard = match std::fs::create_dir_all(&data_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::never(&data_dir, "stundenzettel.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        Err(_) => {
            tracing_subscriber::fmt().init();
            None
        }
    };

    tracing::info!("Stundenzettel starting");

    // ── Configuration and durable store ─────────────────────────────────────
    let config = AppConfig::load(&data_dir.join("config.toml"));

    let store = Store::open(data_dir.join("store")).unwrap_or_else(|e| {
        tracing::error!("primary store unavailable, falling back to temp dir: {e}");
        Store::open(std::env::temp_dir().join("stundenzettel_store"))
            .expect("no writable store location")
    });
    if let Err(e) = store.mark_first_use() {
        tracing::warn!("cannot record first use: {e}");
    }

    // ── Tauri builder ────────────────────────────────────────────────────────
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .manage(AppState::new(store, config))
        .setup(|app| {
            let handle = app.handle().clone();
            let state = app.state::<AppState>();
            match state.session.write() {
                Ok(mut session) => {
                    session.subscribe(move |event| forward_event(&handle, event));
                }
                Err(_) => tracing::error!("session lock poisoned during setup"),
            }
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::week::initialize_week,
            commands::week::navigate_week,
            commands::week::get_week_snapshot,
            commands::week::update_day_time,
            commands::week::apply_shift_template,
            commands::week::get_shift_template,
            commands::week::update_customer,
            commands::week::update_customer_email,
            commands::week::update_shift_model,
            commands::week::clear_week,
            commands::week::get_total_hours,
            commands::week::list_weeks,
            commands::week::list_week_records,
            commands::week::delete_week,
            commands::week::check_daily_max,
            commands::signature::add_signature,
            commands::signature::clear_signature,
            commands::storage::get_employee_name,
            commands::storage::set_employee_name,
            commands::storage::get_language,
            commands::storage::set_language,
            commands::storage::get_consent,
            commands::storage::set_consent,
            commands::storage::export_backup,
            commands::storage::import_backup,
            commands::storage::get_last_backup_date,
            commands::storage::get_first_use_date,
            commands::storage::clear_time_data,
            commands::storage::clear_all_data,
            commands::export::export_week_pdf,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
