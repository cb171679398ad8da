use crate::app::DraftField;

use super::*;

pub fn render_request_form(frame: &mut Frame, app: &mut App, body: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(body);

    render_fields(frame, app, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .split(columns[1]);
    render_program_info(frame, app, right[0]);
    render_actions(frame, app, right[1]);
}

fn render_fields(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = DraftField::ALL
        .iter()
        .map(|field| {
            let focused = *field == app.focused_field;
            let label_style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let value = field_value(app, *field);
            let value_span = if focused {
                if let Some(input) = &app.field_input {
                    let (before, after) = input.split_at_cursor();
                    return Line::from(vec![
                        Span::styled(format!("{:>20}: ", field.label()), label_style),
                        Span::styled(before.to_string(), Style::default().fg(Color::White)),
                        Span::styled("|", Style::default().fg(Color::Yellow)),
                        Span::styled(after.to_string(), Style::default().fg(Color::White)),
                    ]);
                }
                Span::styled(
                    value,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(value, Style::default().fg(Color::White))
            };

            Line::from(vec![
                Span::styled(format!("{:>20}: ", field.label()), label_style),
                value_span,
            ])
        })
        .collect();

    let state = app.draft.state();
    let title = match &app.draft.tooid {
        Some(id) => format!(" Request {} [{}] ", id, state.label()),
        None => format!(" New request [{}] ", state.label()),
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding::new(1, 1, 1, 0)),
    );
    frame.render_widget(paragraph, area);
}

fn field_value(app: &App, field: DraftField) -> String {
    match field {
        DraftField::Program => app.draft.projcode.clone(),
        DraftField::Instrument => app.draft.instrument.clone(),
        DraftField::InterruptType => app.draft.interrupt_type_label().to_string(),
        DraftField::InterruptProj => app.draft.interruptproj.clone(),
        _ => app.draft.text_field(field).to_string(),
    }
}

/// Hour budgets and interruptable institutions for the active catalog entry.
fn render_program_info(frame: &mut Frame, app: &App, area: Rect) {
    let lines = match app.active_program() {
        Some(program) => vec![
            Line::from(format!("PI: {}", program.pi_name())),
            Line::from(format!(
                "Remaining institution hours: {}",
                program.hours_remain_institution
            )),
            Line::from(format!(
                "Remaining partner hours: {}",
                program.hours_remain_partner
            )),
            Line::from(format!(
                "Can interrupt institutions: {}",
                if program.interrupt_list.is_empty() {
                    "-"
                } else {
                    program.interrupt_list.as_str()
                }
            )),
            Line::from(format!(
                "ToO instruments: {}",
                if program.instrument_list.is_empty() {
                    "-"
                } else {
                    program.instrument_list.as_str()
                }
            )),
        ],
        None => vec![Line::from(Span::styled(
            "No ToO program available",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let title = match &app.selected_program {
        Some(code) => format!(" Program {} ", code),
        None => " Program ".to_string(),
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}

/// Action hints, greyed out while their preconditions are unmet.
fn render_actions(frame: &mut Frame, app: &App, area: Rect) {
    let enabled = Style::default().fg(Color::Green);
    let disabled = Style::default().fg(Color::DarkGray);

    let action = |label: &str, ok: bool| -> Line {
        Line::from(Span::styled(
            label.to_string(),
            if ok { enabled } else { disabled },
        ))
    };

    let lines = vec![
        action("^S save draft", app.draft.can_save()),
        action("^U submit", app.draft.can_submit()),
        action(" v validate interrupt", app.draft.can_validate()),
        action(" c cancel request", app.draft.can_cancel()),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Actions ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(paragraph, area);
}
