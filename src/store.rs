use crate::model::{DayDate, DayEvent};

/// Flat, read-only store of normalized events.
///
/// Built once at calendar construction and queried once per rendered cell
/// per build, plus once per day activation. Records keep the order they were
/// produced in by `model::normalize`.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<DayEvent>,
}

impl EventStore {
    pub fn new(events: Vec<DayEvent>) -> Self {
        Self { events }
    }

    /// All records on `day`, in store order. Empty when nothing matches.
    pub fn events_on(&self, day: DayDate) -> Vec<DayEvent> {
        self.events
            .iter()
            .filter(|e| e.day == day)
            .cloned()
            .collect()
    }

    pub fn all(&self) -> &[DayEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
