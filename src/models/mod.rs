//! Data models shared between the engine, the store, and the frontend.

pub mod day;
pub mod shift;
pub mod week;

pub use day::DayEntry;
pub use shift::ShiftTemplate;
pub use week::{derive_locked, ShiftModel, TotalHours, WeekRecord};
