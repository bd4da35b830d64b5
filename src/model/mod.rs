// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod event;
pub mod normalize;
pub mod parser;

// Re-export types so callers can use `crate::model::DayDate` directly
pub use event::{DayDate, DayEvent, Event, EventSpec};
pub use normalize::normalize;
pub use parser::parse_instant;
