// File: ./src/model/parser.rs
// Handles event date-string parsing
use crate::model::event::{Event, EventSpec};
use chrono::{NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a date or datetime string into an instant.
///
/// Date-only input maps to midnight. No timezone conversion happens here or
/// anywhere else; only the local calendar fields of the result are compared
/// downstream.
pub fn parse_instant(value: &str) -> Result<NaiveDateTime, String> {
    let trimmed = value.trim();
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        && let Some(dt) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(dt);
    }
    Err(format!(
        "unrecognized date `{}` (expected e.g. 2024-02-10 or 2024-02-10T14:30:00)",
        trimmed
    ))
}

impl EventSpec {
    /// Parses both instants. Fails construction of the calendar rather than
    /// letting an invalid instant through.
    pub fn parse(&self) -> Result<Event, String> {
        let start = parse_instant(&self.start)
            .map_err(|e| format!("event `{}`: start: {}", self.name, e))?;
        let end = parse_instant(&self.end)
            .map_err(|e| format!("event `{}`: end: {}", self.name, e))?;
        Ok(Event {
            name: self.name.clone(),
            description: self.description.clone(),
            start,
            end,
            color: self.color.clone(),
        })
    }
}
