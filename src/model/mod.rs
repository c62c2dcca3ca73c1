// File: ./src/model/mod.rs
pub mod entry;
pub mod parser;

pub use entry::{ScheduleEntry, SessionKind, Weekday};
