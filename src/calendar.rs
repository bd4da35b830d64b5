//! Calendar controller: owns the options snapshot, the normalized event
//! store and the current-month pointer, and hands rendering-ready month
//! views to whichever frontend consumes them.

use crate::config::CalendarOptions;
use crate::grid::{self, DayCell, WeekStart};
use crate::model::{self, DayDate, DayEvent, parse_instant};
use crate::store::EventStore;
use chrono::{Local, NaiveDate};
use log::{debug, info};

/// Called with the activated day and its events: on every day activation,
/// and once for today at construction.
pub type DayClickCallback = Box<dyn FnMut(DayDate, Vec<DayEvent>)>;

struct CalendarState {
    /// Fixed at construction.
    today: DayDate,
    /// Only year and month matter; the day is pinned to 1 by `navigate`.
    current: DayDate,
}

/// Everything a renderer needs for one month, rebuilt on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    /// "March, 2024" using the configured long month names.
    pub title: String,
    pub year: i32,
    pub month0: u32,
    /// Short weekday labels in grid-column order.
    pub weekday_labels: Vec<String>,
    pub cells: Vec<DayCell>,
}

pub struct Calendar {
    options: CalendarOptions,
    week_start: WeekStart,
    store: EventStore,
    state: CalendarState,
    on_day_click: Option<DayClickCallback>,
}

impl std::fmt::Debug for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calendar")
            .field("week_start", &self.week_start)
            .field("today", &self.state.today)
            .field("current", &self.state.current)
            .field("has_callback", &self.on_day_click.is_some())
            .finish_non_exhaustive()
    }
}

impl Calendar {
    pub fn new(options: CalendarOptions) -> Result<Self, String> {
        Self::new_with(options, None, Local::now().date_naive())
    }

    pub fn with_callback(
        options: CalendarOptions,
        on_day_click: DayClickCallback,
    ) -> Result<Self, String> {
        Self::new_with(options, Some(on_day_click), Local::now().date_naive())
    }

    /// Full constructor with an explicit clock, for embedders and tests.
    ///
    /// Parses and normalizes the configured events, snapshots the options
    /// (caller-owned data is never touched again) and reports today's events
    /// to the callback before any interaction happens.
    pub fn new_with(
        options: CalendarOptions,
        on_day_click: Option<DayClickCallback>,
        today: NaiveDate,
    ) -> Result<Self, String> {
        options.validate()?;

        let events = options
            .events
            .iter()
            .map(|spec| spec.parse())
            .collect::<Result<Vec<_>, _>>()?;
        let store = EventStore::new(model::normalize(&events)?);
        info!(
            "calendar ready: {} configured events, {} day records",
            events.len(),
            store.len()
        );

        let today = DayDate::from_naive(today);
        let current = match &options.start_date {
            Some(raw) => {
                let instant =
                    parse_instant(raw).map_err(|e| format!("start_date: {}", e))?;
                DayDate::from_instant(&instant)
            }
            None => today,
        };

        let week_start = if options.starts_on_monday {
            WeekStart::Monday
        } else {
            WeekStart::Sunday
        };
        let mut calendar = Self {
            options,
            week_start,
            store,
            state: CalendarState {
                today,
                // Pin the day to 1 so month arithmetic can never overflow
                // into the month after (Jan 31 + 1 month).
                current: current.first_of_month(),
            },
            on_day_click,
        };

        // The callback always receives an initial view for today, as if
        // today's cell had been activated.
        calendar.activate_day(today);
        Ok(calendar)
    }

    /// Moves the shown month by `month_delta` (±1 for the navigation
    /// buttons, any amount for jumps). Works on a linear month index, so
    /// repeated navigation can never drift.
    pub fn navigate(&mut self, month_delta: i32) {
        let index = self.state.current.year as i64 * 12
            + self.state.current.month0 as i64
            + month_delta as i64;
        self.state.current = DayDate::new(
            index.div_euclid(12) as i32,
            index.rem_euclid(12) as u32,
            1,
        );
        debug!(
            "navigated {:+} months to {}-{:02}",
            month_delta,
            self.state.current.year,
            self.state.current.month0 + 1
        );
    }

    /// Jumps back to the month containing today.
    pub fn go_to_today(&mut self) {
        let delta = (self.state.today.year as i64 * 12 + self.state.today.month0 as i64)
            - (self.state.current.year as i64 * 12 + self.state.current.month0 as i64);
        self.navigate(delta as i32);
    }

    /// Reports `day` and its events to the configured callback. Invoked by
    /// the rendering layer whenever a day cell is activated. A missing
    /// callback makes this a no-op, which is a valid configuration.
    pub fn activate_day(&mut self, day: DayDate) {
        let events = self.store.events_on(day);
        debug!("day {} activated with {} events", day, events.len());
        if let Some(callback) = self.on_day_click.as_mut() {
            callback(day, events);
        }
    }

    /// Builds the rendering-facing view of the current month.
    pub fn month_view(&self) -> MonthView {
        let current = self.state.current;
        MonthView {
            title: format!(
                "{}, {}",
                self.options.months_long[current.month0 as usize], current.year
            ),
            year: current.year,
            month0: current.month0,
            weekday_labels: grid::header_labels(&self.options.weekdays_short, self.week_start),
            cells: grid::month_cells(current, self.week_start, self.state.today, &self.store),
        }
    }

    /// All events on the given day, in configuration order. Can be empty.
    pub fn events_for_date(&self, day: DayDate) -> Vec<DayEvent> {
        self.store.events_on(day)
    }

    /// The full normalized store: one record per event per covered day.
    pub fn all_events(&self) -> &[DayEvent] {
        self.store.all()
    }

    pub fn today(&self) -> DayDate {
        self.state.today
    }

    pub fn current_month(&self) -> DayDate {
        self.state.current
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }
}
