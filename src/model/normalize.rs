// File: ./src/model/normalize.rs
// Expands date-range events into single-day records
use crate::model::event::{DayDate, DayEvent, Event};
use chrono::Duration;

/// Expands every event into one `DayEvent` per covered calendar day.
///
/// A three-day event (Feb 10 - Feb 12) becomes three records, one each for
/// the 10th, 11th and 12th, all carrying the original name, description and
/// color. Input order is preserved, with each event's expansion inserted
/// contiguously in ascending day order.
///
/// The day count comes from `NaiveDate` subtraction, which counts whole
/// calendar days. Dividing a raw timestamp span by 24h instead would drift
/// across daylight-saving transitions.
pub fn normalize(events: &[Event]) -> Result<Vec<DayEvent>, String> {
    let mut out = Vec::with_capacity(events.len());
    for event in events {
        let start_day = event.start.date();
        let end_day = event.end.date();
        let span = (end_day - start_day).num_days();
        if span < 0 {
            return Err(format!(
                "event `{}` ends ({}) before it starts ({})",
                event.name, end_day, start_day
            ));
        }
        for offset in 0..=span {
            let day = start_day + Duration::days(offset);
            out.push(DayEvent {
                day: DayDate::from_naive(day),
                name: event.name.clone(),
                description: event.description.clone(),
                color: event.color.clone(),
            });
        }
    }
    Ok(out)
}
