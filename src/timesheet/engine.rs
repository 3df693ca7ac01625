//! Week session state engine.
//!
//! [`WeekSession`] owns the currently displayed week and funnels every
//! mutation through one place: load or create, edit, sign, lock, clear.
//! Each successful mutation persists the record and notifies subscribed
//! observers, so the UI layer only ever re-reads state, never computes it.
//!
//! Editability rules:
//! - a week locks when both signatures are present
//!   ([`crate::models::derive_locked`]),
//! - time fields are editable only while the week is unlocked and the
//!   employee has not yet signed,
//! - the supervisor can sign only after the employee, and
//! - clearing a signature always unlocks.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{ShiftModel, ShiftTemplate, TotalHours, WeekRecord};
use crate::store::Store;
use crate::timesheet::calendar::{self, WeekDirection};
use crate::timesheet::time;

/// State-change notifications emitted after successful mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The current record's content changed (edit, signature, clear).
    WeekDataChanged,
    /// The session moved to a different week.
    CurrentWeekChanged { year: i32, week: u32 },
    /// A load or create cycle started (`true`) or finished (`false`).
    LoadingChanged(bool),
}

/// Who a signature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureRole {
    Employee,
    Supervisor,
}

/// The editable time fields of a day entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeField {
    Start,
    End,
    Break1Start,
    Break1End,
    Break2Start,
    Break2End,
}

type Observer = Box<dyn Fn(&SessionEvent) + Send + Sync>;

/// The mutable session around one current week record.
pub struct WeekSession {
    current: Option<(i32, u32)>,
    record: Option<WeekRecord>,
    observers: Vec<Observer>,
}

impl Default for WeekSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WeekSession {
    pub fn new() -> Self {
        Self {
            current: None,
            record: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer for [`SessionEvent`]s.
    pub fn subscribe(&mut self, observer: impl Fn(&SessionEvent) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&self, event: SessionEvent) {
        for observer in &self.observers {
            observer(&event);
        }
    }

    /// The `(year, week)` currently shown, if any.
    pub fn current(&self) -> Option<(i32, u32)> {
        self.current
    }

    /// The record currently shown, if any.
    pub fn record(&self) -> Option<&WeekRecord> {
        self.record.as_ref()
    }

    fn record_mut(&mut self) -> Result<&mut WeekRecord, AppError> {
        self.record
            .as_mut()
            .ok_or_else(|| AppError::NotFound("no week loaded".to_string()))
    }

    fn require_record(&self) -> Result<&WeekRecord, AppError> {
        self.record
            .as_ref()
            .ok_or_else(|| AppError::NotFound("no week loaded".to_string()))
    }

    // ── loading and navigation ──

    /// Load the week for `(year, week)`, or the current calendar week when
    /// not given. A missing record is created, persisted, and becomes the
    /// current one. Exactly one record exists per week key: an existing
    /// record is loaded, never overwritten.
    pub fn initialize(
        &mut self,
        store: &Store,
        year: Option<i32>,
        week: Option<u32>,
    ) -> Result<(), AppError> {
        let (year, week) = match (year, week) {
            (Some(y), Some(w)) => (y, w),
            _ => calendar::current_week(),
        };

        self.notify(SessionEvent::LoadingChanged(true));

        let record = match store.load_week(year, week) {
            Some(existing) => existing,
            None => {
                let name = store.employee_name().unwrap_or_default();
                let fresh = WeekRecord::create(year, week, name);
                store.save_week(&fresh)?;
                tracing::info!(year, week, "created new week record");
                fresh
            }
        };

        self.current = Some((year, week));
        self.record = Some(record);
        self.notify(SessionEvent::CurrentWeekChanged { year, week });
        self.notify(SessionEvent::WeekDataChanged);
        self.notify(SessionEvent::LoadingChanged(false));
        Ok(())
    }

    /// Move to the previous, next, or current calendar week.
    pub fn navigate(&mut self, store: &Store, direction: WeekDirection) -> Result<(), AppError> {
        let (year, week) = self
            .current
            .map(|(y, w)| calendar::navigate(y, w, direction))
            .unwrap_or_else(calendar::current_week);
        self.initialize(store, Some(year), Some(week))
    }

    // ── editability ──

    /// Times are editable while the week is unlocked and unsigned by the
    /// employee.
    pub fn is_editable(&self) -> bool {
        self.record
            .as_ref()
            .map(|r| !r.locked && r.employee_signature.is_none())
            .unwrap_or(false)
    }

    /// The supervisor signs second: only once the employee has signed and
    /// the week is not yet locked.
    pub fn can_supervisor_sign(&self) -> bool {
        self.record
            .as_ref()
            .map(|r| r.employee_signature.is_some() && !r.locked)
            .unwrap_or(false)
    }

    fn require_editable(&self) -> Result<(), AppError> {
        if self.is_editable() {
            Ok(())
        } else {
            Err(AppError::WeekLocked)
        }
    }

    // ── day edits ──

    /// Set one time field of day `day_index` and recompute derived values.
    ///
    /// The value is auto-formatted (`"830"` becomes `"08:30"`); start/end
    /// edits also re-evaluate the night-shift flag.
    pub fn update_day_field(
        &mut self,
        store: &Store,
        day_index: usize,
        field: TimeField,
        value: &str,
    ) -> Result<(), AppError> {
        self.require_editable()?;
        let record = self.record_mut()?;
        let day = record
            .days
            .get_mut(day_index)
            .ok_or_else(|| AppError::NotFound(format!("no day at index {day_index}")))?;

        let value = time::parse_time_input(value);
        if !time::is_valid_time(&value) {
            tracing::warn!(day_index, ?field, %value, "storing unformattable time input as-is");
        }
        match field {
            TimeField::Start => day.start = value,
            TimeField::End => day.end = value,
            TimeField::Break1Start => day.break1_start = value,
            TimeField::Break1End => day.break1_end = value,
            TimeField::Break2Start => day.break2_start = value,
            TimeField::Break2End => day.break2_end = value,
        }
        if matches!(field, TimeField::Start | TimeField::End) {
            day.recompute_night_shift();
        }
        day.recompute_hours();

        store.save_week(record)?;
        self.notify(SessionEvent::WeekDataChanged);
        Ok(())
    }

    /// Apply `template` times to every day selected by `day_mask`, switch
    /// the record to `model`, and re-anchor the day dates if the model's
    /// anchor differs (times stay attached to their row position).
    pub fn apply_shift_template(
        &mut self,
        store: &Store,
        model: ShiftModel,
        template: &ShiftTemplate,
        day_mask: [bool; 7],
    ) -> Result<(), AppError> {
        self.require_editable()?;
        let record = self.record_mut()?;

        if record.shift_model.anchor() != model.anchor() {
            reanchor_days(record, model);
        }
        record.shift_model = model;

        for (day, selected) in record.days.iter_mut().zip(day_mask) {
            if !selected {
                continue;
            }
            day.start = template.start.clone();
            day.end = template.end.clone();
            day.break1_start = template.break1_start.clone();
            day.break1_end = template.break1_end.clone();
            day.break2_start = template.break2_start.clone();
            day.break2_end = template.break2_end.clone();
            day.recompute_night_shift();
            day.recompute_hours();
        }

        store.save_week(record)?;
        self.notify(SessionEvent::WeekDataChanged);
        Ok(())
    }

    // ── header fields ──

    /// Customer name is header metadata, editable regardless of lock state.
    pub fn update_customer(&mut self, store: &Store, name: &str) -> Result<(), AppError> {
        let record = self.record_mut()?;
        record.customer_name = name.to_string();
        store.save_week(record)?;
        self.notify(SessionEvent::WeekDataChanged);
        Ok(())
    }

    pub fn update_customer_email(&mut self, store: &Store, email: &str) -> Result<(), AppError> {
        let record = self.record_mut()?;
        record.customer_email = if email.is_empty() {
            None
        } else {
            Some(email.to_string())
        };
        store.save_week(record)?;
        self.notify(SessionEvent::WeekDataChanged);
        Ok(())
    }

    /// Switch the shift model without applying template times.
    pub fn update_shift_model(&mut self, store: &Store, model: ShiftModel) -> Result<(), AppError> {
        self.require_editable()?;
        let record = self.record_mut()?;
        if record.shift_model.anchor() != model.anchor() {
            reanchor_days(record, model);
        }
        record.shift_model = model;
        store.save_week(record)?;
        self.notify(SessionEvent::WeekDataChanged);
        Ok(())
    }

    // ── signatures ──

    /// Attach a signature image. The employee signs first; the supervisor
    /// only while [`Self::can_supervisor_sign`]. Locking follows from both
    /// signatures being present.
    pub fn add_signature(
        &mut self,
        store: &Store,
        role: SignatureRole,
        image: &str,
        signer_name: Option<&str>,
    ) -> Result<(), AppError> {
        match role {
            SignatureRole::Employee => {
                self.require_editable()?;
                let record = self.record_mut()?;
                record.employee_signature = Some(image.to_string());
                record.refresh_lock();
            }
            SignatureRole::Supervisor => {
                if !self.can_supervisor_sign() {
                    return Err(AppError::WeekLocked);
                }
                let record = self.record_mut()?;
                record.supervisor_signature = Some(image.to_string());
                if let Some(name) = signer_name {
                    record.supervisor_name = Some(name.to_string());
                }
                record.refresh_lock();
            }
        }
        let record = self.require_record()?;
        store.save_week(record)?;
        tracing::info!(?role, locked = record.locked, "signature added");
        self.notify(SessionEvent::WeekDataChanged);
        Ok(())
    }

    /// Remove a signature. Always unlocks, even when the other signature
    /// remains, so a signed-off week can be reopened for correction.
    pub fn clear_signature(&mut self, store: &Store, role: SignatureRole) -> Result<(), AppError> {
        let record = self.record_mut()?;
        match role {
            SignatureRole::Employee => record.employee_signature = None,
            SignatureRole::Supervisor => {
                record.supervisor_signature = None;
                record.supervisor_name = None;
            }
        }
        record.locked = false;
        store.save_week(record)?;
        tracing::info!(?role, "signature cleared");
        self.notify(SessionEvent::WeekDataChanged);
        Ok(())
    }

    // ── clearing and totals ──

    /// Reset the whole week: all day times, both signatures, the lock.
    /// Header fields (customer, shift model) survive.
    pub fn clear_week(&mut self, store: &Store) -> Result<(), AppError> {
        let record = self.record_mut()?;
        for day in &mut record.days {
            day.clear_times();
        }
        record.employee_signature = None;
        record.supervisor_signature = None;
        record.supervisor_name = None;
        record.locked = false;
        store.save_week(record)?;
        self.notify(SessionEvent::WeekDataChanged);
        Ok(())
    }

    /// Week total, re-summed from the day time fields on every call rather
    /// than read from the stored derived values.
    pub fn total_hours(&self) -> TotalHours {
        let minutes: u32 = self
            .record
            .as_ref()
            .map(|r| r.days.iter().map(time::compute_worked_minutes).sum())
            .unwrap_or(0);
        TotalHours {
            hours: time::to_time_string(minutes),
            decimal: time::decimal_hours(minutes),
        }
    }

    /// Human-readable date range of the current week.
    pub fn date_range(&self) -> String {
        match (&self.record, self.current) {
            (Some(record), Some((year, week))) => {
                calendar::date_range_label(year, week, record.shift_model.anchor())
            }
            _ => String::new(),
        }
    }

    /// Days whose worked time exceeds `max_hours`, as a per-day flag list.
    pub fn days_over_limit(&self, max_hours: f64) -> Vec<bool> {
        self.record
            .as_ref()
            .map(|r| {
                r.days
                    .iter()
                    .map(|d| time::exceeds_daily_max(d, max_hours))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Re-date the record's days for `model`'s anchor, keeping each row's times
/// where they are. Night-shift derivations are refreshed because the dates
/// under them changed.
fn reanchor_days(record: &mut WeekRecord, model: ShiftModel) {
    let dates = calendar::days_of(record.year, record.iso_week, model.anchor());
    for (day, date) in record.days.iter_mut().zip(dates) {
        day.date = calendar::to_iso_date(date);
        day.recompute_night_shift();
        day.recompute_hours();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn temp_store(tag: &str) -> Store {
        let root = std::env::temp_dir().join(format!(
            "stundenzettel_engine_{tag}_{}_{}",
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        Store::open(root).expect("open temp store")
    }

    fn session_with_week(store: &Store) -> WeekSession {
        let mut session = WeekSession::new();
        session
            .initialize(store, Some(2025), Some(3))
            .expect("initialize");
        session
    }

    const PNG: &str = "data:image/png;base64,AAAA";

    // ── loading ──

    #[test]
    fn initialize_creates_and_persists_a_missing_week() {
        let store = temp_store("init");
        store.set_employee_name("Anna Muster").expect("set name");
        let session = session_with_week(&store);

        let record = session.record().expect("record");
        assert_eq!(record.employee_name, "Anna Muster");
        assert_eq!((record.year, record.iso_week), (2025, 3));
        assert!(store.load_week(2025, 3).is_some());
    }

    #[test]
    fn initialize_loads_instead_of_overwriting() {
        let store = temp_store("reload");
        let mut session = session_with_week(&store);
        session
            .update_day_field(&store, 0, TimeField::Start, "08:00")
            .expect("edit");

        let mut second = WeekSession::new();
        second
            .initialize(&store, Some(2025), Some(3))
            .expect("initialize");
        assert_eq!(second.record().expect("record").days[0].start, "08:00");
    }

    #[test]
    fn navigate_moves_and_creates_records() {
        let store = temp_store("nav");
        let mut session = session_with_week(&store);
        session.navigate(&store, WeekDirection::Next).expect("next");
        assert_eq!(session.current(), Some((2025, 4)));
        session.navigate(&store, WeekDirection::Prev).expect("prev");
        session.navigate(&store, WeekDirection::Prev).expect("prev");
        assert_eq!(session.current(), Some((2025, 2)));
    }

    // ── editing ──

    #[test]
    fn update_day_field_formats_input_and_recomputes() {
        let store = temp_store("edit");
        let mut session = session_with_week(&store);
        session
            .update_day_field(&store, 0, TimeField::Start, "8")
            .expect("start");
        session
            .update_day_field(&store, 0, TimeField::End, "1700")
            .expect("end");

        let day = &session.record().expect("record").days[0];
        assert_eq!(day.start, "08:00");
        assert_eq!(day.end, "17:00");
        assert_eq!(day.worked_minutes, 540);
    }

    #[test]
    fn night_shift_flag_follows_start_end_edits() {
        let store = temp_store("night");
        let mut session = session_with_week(&store);
        session
            .update_day_field(&store, 0, TimeField::Start, "22:00")
            .expect("start");
        session
            .update_day_field(&store, 0, TimeField::End, "06:00")
            .expect("end");
        let day = &session.record().expect("record").days[0];
        assert!(day.is_night_shift);
        assert_eq!(day.night_shift_end_date.as_deref(), Some("2025-01-14"));
        assert_eq!(day.worked_minutes, 480);
    }

    #[test]
    fn update_day_field_rejects_bad_index() {
        let store = temp_store("index");
        let mut session = session_with_week(&store);
        assert!(matches!(
            session.update_day_field(&store, 7, TimeField::Start, "08:00"),
            Err(AppError::NotFound(_))
        ));
    }

    // ── lock state machine ──

    #[test]
    fn lock_requires_both_signatures_and_gates_edits() {
        let store = temp_store("lock");
        let mut session = session_with_week(&store);
        assert!(session.is_editable());
        assert!(!session.can_supervisor_sign());

        session
            .add_signature(&store, SignatureRole::Employee, PNG, None)
            .expect("employee signs");
        assert!(!session.is_editable());
        assert!(session.can_supervisor_sign());
        assert!(!session.record().expect("record").locked);
        assert!(matches!(
            session.update_day_field(&store, 0, TimeField::Start, "08:00"),
            Err(AppError::WeekLocked)
        ));

        session
            .add_signature(&store, SignatureRole::Supervisor, PNG, Some("Chef"))
            .expect("supervisor signs");
        let record = session.record().expect("record");
        assert!(record.locked);
        assert_eq!(record.supervisor_name.as_deref(), Some("Chef"));
        assert!(!session.can_supervisor_sign());
    }

    #[test]
    fn supervisor_cannot_sign_first() {
        let store = temp_store("order");
        let mut session = session_with_week(&store);
        assert!(matches!(
            session.add_signature(&store, SignatureRole::Supervisor, PNG, None),
            Err(AppError::WeekLocked)
        ));
    }

    #[test]
    fn employee_cannot_sign_twice() {
        let store = temp_store("twice");
        let mut session = session_with_week(&store);
        session
            .add_signature(&store, SignatureRole::Employee, PNG, None)
            .expect("first");
        assert!(matches!(
            session.add_signature(&store, SignatureRole::Employee, PNG, None),
            Err(AppError::WeekLocked)
        ));
    }

    #[test]
    fn clearing_a_signature_always_unlocks() {
        let store = temp_store("unlock");
        let mut session = session_with_week(&store);
        session
            .add_signature(&store, SignatureRole::Employee, PNG, None)
            .expect("sign");
        session
            .add_signature(&store, SignatureRole::Supervisor, PNG, Some("Chef"))
            .expect("sign");
        assert!(session.record().expect("record").locked);

        session
            .clear_signature(&store, SignatureRole::Employee)
            .expect("clear");
        let record = session.record().expect("record");
        assert!(!record.locked);
        assert!(record.employee_signature.is_none());
        // The supervisor signature stays as it was.
        assert!(record.supervisor_signature.is_some());
    }

    #[test]
    fn clearing_supervisor_signature_clears_the_name_too() {
        let store = temp_store("supname");
        let mut session = session_with_week(&store);
        session
            .add_signature(&store, SignatureRole::Employee, PNG, None)
            .expect("sign");
        session
            .add_signature(&store, SignatureRole::Supervisor, PNG, Some("Chef"))
            .expect("sign");
        session
            .clear_signature(&store, SignatureRole::Supervisor)
            .expect("clear");
        let record = session.record().expect("record");
        assert!(record.supervisor_signature.is_none());
        assert!(record.supervisor_name.is_none());
    }

    // ── header fields ──

    #[test]
    fn customer_fields_are_editable_even_when_locked() {
        let store = temp_store("customer");
        let mut session = session_with_week(&store);
        session
            .add_signature(&store, SignatureRole::Employee, PNG, None)
            .expect("sign");
        session
            .add_signature(&store, SignatureRole::Supervisor, PNG, None)
            .expect("sign");

        session
            .update_customer(&store, "Baustelle Nord")
            .expect("customer");
        session
            .update_customer_email(&store, "dispo@example.com")
            .expect("email");
        let record = session.record().expect("record");
        assert_eq!(record.customer_name, "Baustelle Nord");
        assert_eq!(record.customer_email.as_deref(), Some("dispo@example.com"));
    }

    #[test]
    fn empty_customer_email_clears_the_field() {
        let store = temp_store("email");
        let mut session = session_with_week(&store);
        session
            .update_customer_email(&store, "dispo@example.com")
            .expect("set");
        session.update_customer_email(&store, "").expect("clear");
        assert!(session.record().expect("record").customer_email.is_none());
    }

    // ── shift templates ──

    #[test]
    fn apply_template_fills_masked_days_only() {
        let store = temp_store("template");
        let mut session = session_with_week(&store);
        let template = ShiftTemplate::builtin(ShiftModel::Day);
        let mask = [true, true, true, true, true, false, false];
        session
            .apply_shift_template(&store, ShiftModel::Day, &template, mask)
            .expect("apply");

        let record = session.record().expect("record");
        assert_eq!(record.days[0].start, "08:00");
        assert_eq!(record.days[0].worked_minutes, 510);
        assert!(record.days[5].start.is_empty());
        assert!(record.days[6].start.is_empty());
    }

    #[test]
    fn night_model_reanchors_week_to_sunday() {
        let store = temp_store("reanchor");
        let mut session = session_with_week(&store);
        let template = ShiftTemplate::builtin(ShiftModel::Night);
        session
            .apply_shift_template(&store, ShiftModel::Night, &template, [true; 7])
            .expect("apply");

        let record = session.record().expect("record");
        assert_eq!(record.shift_model, ShiftModel::Night);
        assert_eq!(record.days[0].date, "2025-01-12");
        assert_eq!(record.days[6].date, "2025-01-18");
        assert!(record.days[0].is_night_shift);
        assert_eq!(
            record.days[0].night_shift_end_date.as_deref(),
            Some("2025-01-13")
        );
    }

    #[test]
    fn switching_back_to_day_model_restores_monday_dates() {
        let store = temp_store("back");
        let mut session = session_with_week(&store);
        session
            .update_shift_model(&store, ShiftModel::Night)
            .expect("to night");
        session
            .update_shift_model(&store, ShiftModel::Day)
            .expect("to day");
        let record = session.record().expect("record");
        assert_eq!(record.days[0].date, "2025-01-13");
    }

    // ── totals and clearing ──

    #[test]
    fn total_hours_sums_all_days_from_time_fields() {
        let store = temp_store("total");
        let mut session = session_with_week(&store);
        for (i, (start, end)) in [("08:00", "17:00"), ("22:00", "06:00")].iter().enumerate() {
            session
                .update_day_field(&store, i, TimeField::Start, start)
                .expect("start");
            session
                .update_day_field(&store, i, TimeField::End, end)
                .expect("end");
        }
        let total = session.total_hours();
        // 9:00 + 8:00 = 17:00.
        assert_eq!(total.hours, "17:00");
        assert_eq!(total.decimal, "17.00");
    }

    #[test]
    fn clear_week_resets_times_signatures_and_lock() {
        let store = temp_store("clear");
        let mut session = session_with_week(&store);
        session
            .update_day_field(&store, 0, TimeField::Start, "08:00")
            .expect("edit");
        session.update_customer(&store, "Kunde").expect("customer");
        session
            .add_signature(&store, SignatureRole::Employee, PNG, None)
            .expect("sign");
        session
            .add_signature(&store, SignatureRole::Supervisor, PNG, None)
            .expect("sign");

        session.clear_week(&store).expect("clear");
        let record = session.record().expect("record");
        assert!(record.days.iter().all(|d| d.start.is_empty()));
        assert!(record.employee_signature.is_none());
        assert!(record.supervisor_signature.is_none());
        assert!(!record.locked);
        assert_eq!(record.customer_name, "Kunde");
        assert!(session.is_editable());
    }

    #[test]
    fn days_over_limit_flags_long_days() {
        let store = temp_store("limit");
        let mut session = session_with_week(&store);
        session
            .update_day_field(&store, 0, TimeField::Start, "06:00")
            .expect("start");
        session
            .update_day_field(&store, 0, TimeField::End, "19:00")
            .expect("end");
        let flags = session.days_over_limit(12.0);
        assert_eq!(flags.len(), 7);
        assert!(flags[0]);
        assert!(!flags[1]);
    }

    // ── observers ──

    #[test]
    fn observers_receive_mutation_events() {
        let store = temp_store("events");
        let mut session = WeekSession::new();
        let data_changes = Arc::new(AtomicUsize::new(0));
        let week_changes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&data_changes);
        let weeks = Arc::clone(&week_changes);
        session.subscribe(move |event| match event {
            SessionEvent::WeekDataChanged => {
                counter.fetch_add(1, Ordering::SeqCst);
            }
            SessionEvent::CurrentWeekChanged { .. } => {
                weeks.fetch_add(1, Ordering::SeqCst);
            }
            SessionEvent::LoadingChanged(_) => {}
        });

        session
            .initialize(&store, Some(2025), Some(3))
            .expect("initialize");
        session
            .update_day_field(&store, 0, TimeField::Start, "08:00")
            .expect("edit");
        session.navigate(&store, WeekDirection::Next).expect("next");

        assert_eq!(week_changes.load(Ordering::SeqCst), 2);
        assert_eq!(data_changes.load(Ordering::SeqCst), 3);
    }
}
