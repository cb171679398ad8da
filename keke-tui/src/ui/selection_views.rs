use keck::domain::TooAction;

use super::utils::centered_rect;
use super::*;

fn action_label(action: TooAction) -> &'static str {
    match action {
        TooAction::Draft => "draft",
        TooAction::Edit => "edit",
        TooAction::Submit => "submitted",
    }
}

pub fn render_selection(frame: &mut Frame, app: &mut App, body: Rect) {
    let (title, items) = match app.current_view {
        View::SelectProgram => (
            " Select ToO program ",
            app.programs
                .iter()
                .map(|p| {
                    format!(
                        "{}  ({:.1}h inst / {:.1}h partner)",
                        p.proj_code, p.hours_remain_institution, p.hours_remain_partner
                    )
                })
                .collect::<Vec<_>>(),
        ),
        View::SelectInstrument => (" Select instrument ", app.instrument_options()),
        View::SelectInterruptProj => (
            " Select program to interrupt ",
            app.interruptable_programs(),
        ),
        View::SelectRequest => (
            " Select request ",
            app.requests
                .iter()
                .map(|r| {
                    format!(
                        "{}  {} {} {} [{}]",
                        r.tooid.as_deref().unwrap_or("-"),
                        r.projcode,
                        r.obsdate,
                        r.instrument,
                        action_label(r.action),
                    )
                })
                .collect::<Vec<_>>(),
        ),
        _ => return,
    };

    let height = (items.len() as u16 + 2).max(3).min(body.height.max(3));
    let area = centered_rect(56, height, body);
    frame.render_widget(Clear, area);

    if items.is_empty() {
        let notice = Paragraph::new("Nothing to select")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(notice, area);
        return;
    }

    let list_items: Vec<ListItem> = items.into_iter().map(ListItem::new).collect();
    let list = List::new(list_items)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::horizontal(1)),
        );

    let mut state = ListState::default();
    state.select(Some(app.list_index));
    frame.render_stateful_widget(list, area, &mut state);
}
