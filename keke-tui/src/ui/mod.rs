use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

mod cancel_dialog;
mod interrupt_dialog;
mod request_form;
mod schedule_panel;
mod selection_views;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Schedule => schedule_panel::render_schedule_panel(frame, app, body),
        View::RequestForm => request_form::render_request_form(frame, app, body),
        View::SelectProgram
        | View::SelectInstrument
        | View::SelectInterruptProj
        | View::SelectRequest => selection_views::render_selection(frame, app, body),
        View::InterruptDialog => {
            request_form::render_request_form(frame, app, body);
            interrupt_dialog::render_interrupt_dialog(frame, app);
        }
        View::ConfirmCancel => {
            request_form::render_request_form(frame, app, body);
            cancel_dialog::render_cancel_confirm_dialog(frame, app);
        }
    }

    render_status_line(frame, root[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let mut spans = vec![
        Span::styled(
            " Keck ToO requests ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "| {} (#{}) | {} HST | semester {} ",
            app.observer.full_name(),
            app.observer.id,
            app.obs_date,
            app.semester,
        )),
    ];
    if app.is_loading {
        spans.push(Span::styled("~ loading", Style::default().fg(Color::Yellow)));
    }
    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);

    if app.is_loading {
        let throbber = throbber_widgets_tui::Throbber::default();
        let spinner_area = Rect {
            x: area.right().saturating_sub(2),
            y: area.y,
            width: 1,
            height: 1,
        };
        frame.render_stateful_widget(throbber, spinner_area, &mut app.throbber_state);
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match &app.status_message {
        Some(msg) => (msg.clone(), Style::default().fg(Color::Yellow)),
        None => (contextual_hint(app).to_string(), Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn contextual_hint(app: &App) -> &'static str {
    match app.current_view {
        View::Schedule => "←/→: change date  t: today  Enter: request form  q: quit",
        View::RequestForm => {
            if app.field_input.is_some() {
                "Enter: apply  Esc: discard"
            } else {
                "↑/↓: field  Enter: edit  ^S: save  ^U: submit  v: validate  c: cancel  r: requests  n: new  q: quit"
            }
        }
        View::SelectProgram | View::SelectInstrument | View::SelectInterruptProj
        | View::SelectRequest => "↑/↓: move  Enter: select  Esc: back",
        View::InterruptDialog => "Esc: close",
        View::ConfirmCancel => "y: cancel request  n: keep it",
    }
}
