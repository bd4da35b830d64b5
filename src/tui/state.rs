use crate::calendar::{Calendar, MonthView};
use crate::model::{DayDate, DayEvent};
use chrono::Datelike;
use ratatui::layout::Rect;

pub struct AppState {
    pub calendar: Calendar,
    /// View of the month currently shown; rebuilt after every navigation.
    pub view: MonthView,
    /// Index of the selected cell in `view.cells`.
    pub selected: usize,
    /// Last activated day and its events, shown in the details pane.
    pub activated: Option<(DayDate, Vec<DayEvent>)>,
    pub message: String,
    /// Cell hit boxes recorded by the last draw, for mouse clicks.
    pub cell_areas: Vec<(Rect, usize)>,
}

impl AppState {
    pub fn new(calendar: Calendar) -> Self {
        let view = calendar.month_view();
        // Start on today's cell when it is part of the shown month.
        let selected = view
            .cells
            .iter()
            .position(|c| c.today)
            .or_else(|| view.cells.iter().position(|c| c.in_month))
            .unwrap_or(0);
        let today = calendar.today();
        let events = calendar.events_for_date(today);
        Self {
            calendar,
            view,
            selected,
            activated: Some((today, events)),
            message: "←→↑↓: Day | n/p: Month | t: Today | Enter/Click: Select | q: Quit"
                .to_string(),
            cell_areas: Vec::new(),
        }
    }

    fn rebuild(&mut self) {
        self.view = self.calendar.month_view();
        self.selected = self
            .view
            .cells
            .iter()
            .position(|c| c.today)
            .or_else(|| self.view.cells.iter().position(|c| c.in_month))
            .unwrap_or(0);
    }

    pub fn change_month(&mut self, delta: i32) {
        self.calendar.navigate(delta);
        self.rebuild();
        self.message = format!(" {} ", self.view.title);
    }

    pub fn go_to_today(&mut self) {
        self.calendar.go_to_today();
        self.rebuild();
    }

    /// Moves the selection by `delta` cells (±1 for days, ±7 for weeks),
    /// clamped to the grid.
    pub fn move_selection(&mut self, delta: i32) {
        if self.view.cells.is_empty() {
            return;
        }
        let last = self.view.cells.len() as i32 - 1;
        self.selected = (self.selected as i32 + delta).clamp(0, last) as usize;
    }

    /// Activates the selected cell, as if it had been clicked.
    pub fn activate_selected(&mut self) {
        let Some(cell) = self.view.cells.get(self.selected) else {
            return;
        };
        let date = cell.date;
        self.calendar.activate_day(date);
        let events = self.calendar.events_for_date(date);
        let options = self.calendar.options();
        self.message = format!(
            "{} {} {}: {} event(s)",
            date.day,
            options.months_short[date.month0 as usize],
            date.year,
            events.len()
        );
        self.activated = Some((date, events));
    }

    /// Resolves a terminal position to a day cell and activates it.
    pub fn click_at(&mut self, column: u16, row: u16) {
        let hit = self.cell_areas.iter().find(|(area, _)| {
            column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        });
        if let Some(&(_, index)) = hit {
            self.selected = index;
            self.activate_selected();
        }
    }

    /// "Friday, March 1 2024" for the selected cell, using the configured
    /// long label sets.
    pub fn selected_date_label(&self) -> String {
        let Some(cell) = self.view.cells.get(self.selected) else {
            return String::new();
        };
        let date = cell.date;
        let options = self.calendar.options();
        let weekday = match date.as_naive() {
            Some(naive) => {
                let index = naive.weekday().num_days_from_sunday() as usize;
                format!("{}, ", options.weekdays_long[index])
            }
            None => String::new(),
        };
        format!(
            "{}{} {} {}",
            weekday, options.months_long[date.month0 as usize], date.day, date.year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::calendar::Calendar;
    use crate::config::CalendarOptions;
    use crate::model::{DayDate, EventSpec};
    use chrono::NaiveDate;

    fn app() -> AppState {
        let options = CalendarOptions {
            start_date: Some("2024-03-15".to_string()),
            events: vec![EventSpec {
                name: "Fair".to_string(),
                start: "2024-03-02".to_string(),
                end: "2024-03-04".to_string(),
                color: Some("#0f0".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        AppState::new(Calendar::new_with(options, None, today).unwrap())
    }

    #[test]
    fn starts_selected_on_today() {
        let state = app();
        assert_eq!(
            state.view.cells[state.selected].date,
            DayDate::new(2024, 2, 15)
        );
        // Construction counts as an activation of today.
        let (day, events) = state.activated.as_ref().unwrap();
        assert_eq!(*day, DayDate::new(2024, 2, 15));
        assert!(events.is_empty());
    }

    #[test]
    fn selection_is_clamped_to_the_grid() {
        let mut state = app();
        state.selected = 0;
        state.move_selection(-7);
        assert_eq!(state.selected, 0);
        state.selected = state.view.cells.len() - 1;
        state.move_selection(7);
        assert_eq!(state.selected, state.view.cells.len() - 1);
    }

    #[test]
    fn activation_updates_details_and_status() {
        let mut state = app();
        // March 2024 Sunday-start: offset 5, so March 2nd is cell 6.
        state.selected = 6;
        state.activate_selected();
        let (day, events) = state.activated.as_ref().unwrap();
        assert_eq!(*day, DayDate::new(2024, 2, 2));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Fair");
        assert!(state.message.contains("Mar"));
        assert!(state.message.contains("1 event"));
    }

    #[test]
    fn month_change_rebuilds_the_view() {
        let mut state = app();
        let cells_before = state.view.cells.len();
        state.change_month(1);
        assert_eq!(state.view.title, "April, 2024");
        assert_ne!(state.view.cells.len(), cells_before);
        // Today is not in April; selection falls back to the 1st.
        assert!(state.view.cells[state.selected].in_month);
        state.go_to_today();
        assert_eq!(state.view.title, "March, 2024");
    }

    #[test]
    fn selected_date_label_uses_long_names() {
        let state = app();
        assert_eq!(state.selected_date_label(), "Friday, March 15 2024");
    }
}
