//! Time-accounting core: arithmetic, calendar, and the week state engine.

pub mod calendar;
pub mod engine;
pub mod time;
