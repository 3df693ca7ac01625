//! PDF export pipeline from a stored week record to document bytes.

use stundenzettel_lib::config::AppConfig;
use stundenzettel_lib::export::{build_payload, export_filename, render_document};
use stundenzettel_lib::models::{ShiftModel, ShiftTemplate, WeekRecord};
use stundenzettel_lib::store::Store;
use stundenzettel_lib::timesheet::engine::{SignatureRole, WeekSession};

fn temp_store(tag: &str) -> Store {
    let root = std::env::temp_dir().join(format!(
        "stundenzettel_pdf_{tag}_{}_{}",
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));
    Store::open(root).expect("open temp store")
}

// A valid 1x1 white PNG.
const TINY_PNG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

fn signed_week(store: &Store) -> WeekRecord {
    store.set_employee_name("Max Muster").expect("set name");
    let mut session = WeekSession::new();
    session
        .initialize(store, Some(2025), Some(3))
        .expect("initialize");
    session
        .update_customer(store, "Baustelle Nord")
        .expect("customer");
    let template = ShiftTemplate::builtin(ShiftModel::Day);
    session
        .apply_shift_template(
            store,
            ShiftModel::Day,
            &template,
            [true, true, true, true, true, false, false],
        )
        .expect("apply template");
    session
        .add_signature(store, SignatureRole::Employee, TINY_PNG, None)
        .expect("employee signs");
    session
        .add_signature(store, SignatureRole::Supervisor, TINY_PNG, Some("Chef"))
        .expect("supervisor signs");
    session.record().expect("record").clone()
}

#[test]
fn signed_week_renders_to_pdf() {
    let store = temp_store("render");
    let record = signed_week(&store);
    let bytes = render_document(&record, &AppConfig::default()).expect("render");
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 1000);
}

#[test]
fn payload_matches_the_signed_week() {
    let store = temp_store("payload");
    let record = signed_week(&store);
    let payload = build_payload(&record);

    assert_eq!(payload.payload_type, "WPDL_TIMESHEET");
    assert_eq!(payload.employee.name, "Max Muster");
    assert_eq!(payload.supervisor.name.as_deref(), Some("Chef"));
    assert_eq!(payload.customer, "Baustelle Nord");
    assert_eq!(payload.period.week, 3);
    assert_eq!(payload.period.year, 2025);
    // Only the 5 worked days appear.
    assert_eq!(payload.days.len(), 5);
    assert!(payload.days.iter().all(|d| d.hours == "08:30"));
}

#[test]
fn filename_derives_from_record_identity() {
    let store = temp_store("filename");
    let record = signed_week(&store);
    let config = AppConfig::default();
    assert_eq!(
        export_filename(
            &config.export.filename_prefix,
            &record.employee_name,
            record.year,
            record.iso_week
        ),
        "WPDL_Max_Muster_2025_03.pdf"
    );
}

#[test]
fn unsigned_week_still_exports() {
    let record = WeekRecord::create(2025, 3, "Anna".to_string());
    let bytes = render_document(&record, &AppConfig::default()).expect("render");
    assert!(bytes.starts_with(b"%PDF"));
    let payload = build_payload(&record);
    assert!(payload.days.is_empty());
    assert!(payload.supervisor.name.is_none());
}
