use ratatui::widgets::{Cell, Row, Table};

use super::*;

pub fn render_schedule_panel(frame: &mut Frame, app: &mut App, body: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(body);

    render_schedule_table(frame, app, columns[0]);
    render_readiness_table(frame, app, columns[1]);
}

fn render_schedule_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["Tel", "Instrument", "Start - End", "Program", "Institution", "PI"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .schedule
        .iter()
        .map(|item| {
            Row::new(vec![
                Cell::from(format!("K{}", item.tel_nr.as_deref().unwrap_or("?"))),
                Cell::from(item.instrument.clone()),
                Cell::from(format!("{} - {}", item.start_time, item.end_time)),
                Cell::from(item.proj_code.clone()),
                Cell::from(item.institution.clone()),
                Cell::from(item.principal.clone()),
            ])
        })
        .collect();

    let empty = rows.is_empty();
    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Length(9),
            Constraint::Min(12),
            Constraint::Min(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Schedule {} ", app.obs_date))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(table, area);

    if empty {
        let notice = Paragraph::new("No scheduled programs for this date")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        let inner = utils::centered_rect(area.width.saturating_sub(4), 1, area);
        frame.render_widget(notice, inner);
    }
}

fn render_readiness_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["ToO ready?", "Instrument", "Tel"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    // Rows arrive pre-sorted: ready instruments first.
    let rows: Vec<Row> = app
        .instrument_status
        .iter()
        .map(|(name, status)| {
            let (ready, style) = if status.is_too_ready() {
                ("Yes", Style::default().fg(Color::Green))
            } else {
                ("No", Style::default().fg(Color::Red))
            };
            Row::new(vec![
                Cell::from(Span::styled(ready, style)),
                Cell::from(name.clone()),
                Cell::from(
                    status
                        .tel_nr
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(10),
            Constraint::Length(4),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Instrument ToO readiness ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(table, area);
}
