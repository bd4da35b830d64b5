//! Month grid layout: leading offset, day cells and weekday headers.

use crate::model::{DayDate, DayEvent};
use crate::store::EventStore;
use chrono::{Datelike, Duration, NaiveDate};

/// First day of the rendered week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Grid column (0..=6) of `date`'s weekday under this convention.
    /// Sunday-start uses the native Sunday=0 index; Monday-start shifts it
    /// so that Monday=0 and Sunday lands on column 6.
    pub fn column_of(&self, date: NaiveDate) -> u32 {
        let native = date.weekday().num_days_from_sunday();
        match self {
            WeekStart::Sunday => native,
            WeekStart::Monday => (native + 6) % 7,
        }
    }
}

/// One grid position, produced fresh on every build.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: DayDate,
    /// False for the leading filler days taken from the previous month.
    pub in_month: bool,
    pub today: bool,
    pub events: Vec<DayEvent>,
}

/// Number of days in a month, via "day zero of the next month": the last
/// valid day regardless of month length or leap years.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month0) = if month0 == 11 {
        (year + 1, 0)
    } else {
        (year, month0 + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month0 + 1, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Count of previous-month filler cells before the 1st: the 1st's own grid
/// column. Zero exactly when the month starts on the configured week start.
pub fn leading_offset(first_of_month: NaiveDate, week_start: WeekStart) -> u32 {
    week_start.column_of(first_of_month)
}

/// Short weekday labels in grid-column order. The Sunday-first input is
/// rotated by one for Monday-start weeks; this must stay in lock-step with
/// `WeekStart::column_of` or headers misalign with the cells below them.
pub fn header_labels(weekdays_short: &[String], week_start: WeekStart) -> Vec<String> {
    let mut labels = weekdays_short.to_vec();
    if week_start == WeekStart::Monday && !labels.is_empty() {
        labels.rotate_left(1);
    }
    labels
}

/// Builds the ordered cell sequence for the month containing `current`.
///
/// Layout is `leading_offset` previous-month cells (ascending, ending the
/// day before the 1st) followed by one cell per day of the month. No
/// trailing filler is emitted, so the grid height varies by month. Filler
/// cells still carry their day's events; the renderer merely dims them.
pub fn month_cells(
    current: DayDate,
    week_start: WeekStart,
    today: DayDate,
    store: &EventStore,
) -> Vec<DayCell> {
    let Some(first) = current.first_of_month().as_naive() else {
        return Vec::new();
    };
    let offset = leading_offset(first, week_start);
    let day_count = days_in_month(current.year, current.month0);
    let mut cells = Vec::with_capacity((offset + day_count) as usize);

    for i in 0..offset {
        let date = first - Duration::days((offset - i) as i64);
        cells.push(make_cell(date, false, today, store));
    }
    for day in 1..=day_count {
        if let Some(date) = NaiveDate::from_ymd_opt(current.year, current.month0 + 1, day) {
            cells.push(make_cell(date, true, today, store));
        }
    }
    cells
}

fn make_cell(date: NaiveDate, in_month: bool, today: DayDate, store: &EventStore) -> DayCell {
    let day = DayDate::from_naive(date);
    DayCell {
        date: day,
        in_month,
        today: day == today,
        events: store.events_on(day),
    }
}

#[cfg(test)]
mod tests {
    use super::{WeekStart, days_in_month, header_labels, leading_offset, month_cells};
    use crate::model::DayDate;
    use crate::store::EventStore;
    use chrono::{Datelike, NaiveDate};

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

    #[test]
    fn days_in_month_handles_lengths_and_leap_years() {
        assert_eq!(days_in_month(2024, 0), 31);
        assert_eq!(days_in_month(2024, 1), 29); // leap year
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2024, 3), 30);
        assert_eq!(days_in_month(2024, 11), 31); // December rolls the year
    }

    #[test]
    fn march_2024_sunday_start_offset_and_cell_count() {
        // March 1st 2024 is a Friday, native weekday index 5.
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(leading_offset(first, WeekStart::Sunday), 5);

        let cells = month_cells(
            DayDate::new(2024, 2, 15),
            WeekStart::Sunday,
            DayDate::new(2024, 2, 15),
            &EventStore::default(),
        );
        assert_eq!(cells.len(), 36); // 5 filler + 31 days
    }

    #[test]
    fn monday_start_shifts_offset() {
        // Friday: column 5 Sunday-start, column 4 Monday-start.
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(leading_offset(first, WeekStart::Monday), 4);
        // Sunday maps to the last column under Monday start.
        let sunday = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        assert_eq!(leading_offset(sunday, WeekStart::Monday), 6);
        assert_eq!(leading_offset(sunday, WeekStart::Sunday), 0);
    }

    #[test]
    fn offset_is_zero_iff_month_starts_on_week_start() {
        // April 1st 2024 is a Monday.
        let first = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert_eq!(leading_offset(first, WeekStart::Monday), 0);
        assert_eq!(leading_offset(first, WeekStart::Sunday), 1);
    }

    #[test]
    fn filler_cells_are_ascending_previous_month_dates() {
        let cells = month_cells(
            DayDate::new(2024, 2, 1),
            WeekStart::Sunday,
            DayDate::new(2024, 2, 1),
            &EventStore::default(),
        );
        // March 2024 fillers: Feb 25 .. Feb 29.
        let fillers: Vec<&super::DayCell> = cells.iter().filter(|c| !c.in_month).collect();
        assert_eq!(fillers.len(), 5);
        for (i, cell) in fillers.iter().enumerate() {
            assert_eq!(cell.date, DayDate::new(2024, 1, 25 + i as u32));
        }
        // Grid continues seamlessly with March 1st.
        assert_eq!(cells[5].date, DayDate::new(2024, 2, 1));
        assert!(cells[5].in_month);
    }

    #[test]
    fn today_is_marked_by_day_equality_only() {
        let today = DayDate::new(2024, 2, 15);
        let cells = month_cells(today, WeekStart::Sunday, today, &EventStore::default());
        let marked: Vec<&super::DayCell> = cells.iter().filter(|c| c.today).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].date, today);

        // Viewing another month: no cell is today.
        let cells = month_cells(
            DayDate::new(2024, 3, 1),
            WeekStart::Sunday,
            today,
            &EventStore::default(),
        );
        assert!(cells.iter().all(|c| !c.today));
    }

    #[test]
    fn header_rotation_matches_offset_convention() {
        let weekdays = labels(&WEEKDAYS);
        assert_eq!(header_labels(&weekdays, WeekStart::Sunday)[0], "Sun");
        let rotated = header_labels(&weekdays, WeekStart::Monday);
        assert_eq!(rotated[0], "Mon");
        assert_eq!(rotated[6], "Sun");

        // Column 0 of the grid always holds the first header's weekday:
        // April 1st 2024 (a Monday) gets offset 0 under Monday start.
        let first = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert_eq!(leading_offset(first, WeekStart::Monday), 0);
    }

    #[test]
    fn monday_start_never_increases_filler_count() {
        for month0 in 0..12 {
            let first = NaiveDate::from_ymd_opt(2024, month0 + 1, 1).unwrap();
            let sunday = leading_offset(first, WeekStart::Sunday);
            let monday = leading_offset(first, WeekStart::Monday);
            // Shifting the week start back by one column can only shrink the
            // offset, except when the 1st is a Sunday and it wraps to 6.
            if first.weekday() == chrono::Weekday::Sun {
                assert_eq!(monday, 6);
            } else {
                assert_eq!(monday, sunday - 1);
            }
        }
    }
}
