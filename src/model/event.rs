// File: ./src/model/event.rs
// Core calendar value types
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar-day identity: year, zero-based month and day-of-month.
///
/// Two instants fall on the same day iff their `DayDate` projections are
/// equal. This field equality is the only "same day" relation used anywhere,
/// both for event lookups and for the "is today" check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayDate {
    pub year: i32,
    /// 0 = January .. 11 = December.
    pub month0: u32,
    pub day: u32,
}

impl DayDate {
    pub fn new(year: i32, month0: u32, day: u32) -> Self {
        Self { year, month0, day }
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
            day: date.day(),
        }
    }

    pub fn from_instant(instant: &NaiveDateTime) -> Self {
        Self::from_naive(instant.date())
    }

    /// Back to a chrono date. `None` only for fields that never came from a
    /// real date (e.g. day 31 in a 30-day month).
    pub fn as_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, self.day)
    }

    pub fn first_of_month(&self) -> Self {
        Self { day: 1, ..*self }
    }
}

impl From<NaiveDate> for DayDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}

impl fmt::Display for DayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month0 + 1, self.day)
    }
}

/// An event exactly as configured by the caller, before any date parsing.
/// `start`/`end` are date or datetime strings (see `parser`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSpec {
    pub name: String,
    pub description: String,
    pub start: String,
    pub end: String,
    /// Hex color (`#f00` / `#ff0000`), applied verbatim to the event's
    /// markers. A deterministic color is generated from `name` when unset.
    pub color: Option<String>,
}

/// A configured event with its instants parsed. May still span several days;
/// `normalize` splits it into per-day `DayEvent` records.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: Option<String>,
}

/// A normalized event record covering exactly one calendar day. The store
/// only ever holds these, so a multi-day record is unrepresentable there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEvent {
    pub day: DayDate,
    pub name: String,
    pub description: String,
    pub color: Option<String>,
}
