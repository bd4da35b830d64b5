use crate::color_utils::{event_color, is_dark};
use crate::tui::state::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(6),
                Constraint::Length(8),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.area());

    draw_header(f, state, chunks[0]);
    draw_weekday_row(f, state, chunks[1]);
    draw_grid(f, state, chunks[2]);
    draw_details(f, state, chunks[3]);
    draw_footer(f, state, chunks[4]);
}

fn draw_header(f: &mut Frame, state: &AppState, area: Rect) {
    let title = Line::from(vec![
        Span::styled("‹ p ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.view.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" n ›", Style::default().fg(Color::DarkGray)),
    ]);
    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_weekday_row(f: &mut Frame, state: &AppState, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); 7])
        .split(area);
    for (label, column) in state.view.weekday_labels.iter().zip(columns.iter()) {
        let header = Paragraph::new(label.as_str())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(header, *column);
    }
}

fn draw_grid(f: &mut Frame, state: &mut AppState, area: Rect) {
    let cells = &state.view.cells;
    if cells.is_empty() {
        state.cell_areas.clear();
        return;
    }
    let mut cell_areas = Vec::with_capacity(cells.len());
    let row_count = cells.len().div_ceil(7) as u32;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count); row_count as usize])
        .split(area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 7); 7])
            .split(*row_area);
        for (col_index, cell_area) in columns.iter().enumerate() {
            let index = row_index * 7 + col_index;
            let Some(cell) = cells.get(index) else {
                continue;
            };
            cell_areas.push((*cell_area, index));

            let mut day_style = if cell.in_month {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if cell.today {
                day_style = day_style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }

            // One dot per event, colored like the original's markers.
            let mut markers: Vec<Span> = Vec::new();
            for event in cell
                .events
                .iter()
                .take((cell_area.width as usize).saturating_sub(1) / 2)
            {
                let (r, g, b) = event_color(&event.name, event.color.as_deref());
                markers.push(Span::styled("● ", Style::default().fg(Color::Rgb(r, g, b))));
            }

            let mut widget = Paragraph::new(vec![
                Line::from(Span::styled(format!(" {}", cell.date.day), day_style)),
                Line::from(markers),
            ]);
            if index == state.selected {
                widget = widget.style(
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .bg(Color::DarkGray),
                );
            }
            f.render_widget(widget, *cell_area);
        }
    }
    state.cell_areas = cell_areas;
}

fn draw_details(f: &mut Frame, state: &AppState, area: Rect) {
    let Some(cell) = state.view.cells.get(state.selected) else {
        return;
    };
    let mut lines: Vec<Line> = Vec::new();
    if cell.events.is_empty() {
        lines.push(Line::from(Span::styled(
            "No events.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for event in &cell.events {
        let (r, g, b) = event_color(&event.name, event.color.as_deref());
        let name_fg = if is_dark(r, g, b) {
            Color::White
        } else {
            Color::Black
        };
        let mut spans = vec![Span::styled(
            format!(" {} ", event.name),
            Style::default().fg(name_fg).bg(Color::Rgb(r, g, b)),
        )];
        if !event.description.is_empty() {
            spans.push(Span::raw(" "));
            spans.push(Span::raw(event.description.clone()));
        }
        lines.push(Line::from(spans));
    }

    let details = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", state.selected_date_label())),
    );
    f.render_widget(details, area);
}

fn draw_footer(f: &mut Frame, state: &AppState, area: Rect) {
    let f_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let status = Paragraph::new(state.message.clone())
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );
    let help_text = "n/p: Month | t: Today | Enter: Select | q: Quit";
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );
    f.render_widget(status, f_chunks[0]);
    f.render_widget(help, f_chunks[1]);
}
