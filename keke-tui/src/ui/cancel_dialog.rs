use super::utils::centered_rect;
use super::*;

pub fn render_cancel_confirm_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(54, 7, frame.area());
    frame.render_widget(Clear, area);

    let tooid = app.draft.tooid.as_deref().unwrap_or("?");
    let lines = vec![
        Line::from(""),
        Line::from(format!("Cancel ToO request {}?", tooid)),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Color::Yellow)),
            Span::raw(": cancel the request  "),
            Span::styled("n", Style::default().fg(Color::Yellow)),
            Span::raw(": keep it"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Cancel request "),
        );
    frame.render_widget(paragraph, area);
}
