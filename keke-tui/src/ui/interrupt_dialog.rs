use super::utils::centered_rect;
use super::*;

/// The eligibility verdict dialog. Three cases: still waiting on the server,
/// interrupt allowed (list the affected programs with reasons), interrupt
/// refused.
pub fn render_interrupt_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(74, 18, frame.area());
    frame.render_widget(Clear, area);

    let lines = match &app.eligibility.result {
        None => vec![Line::from("Loading...")],
        Some(result) => {
            if let Some(msg) = result.error.message() {
                vec![Line::from(Span::styled(
                    format!("Server error: {}", msg),
                    Style::default().fg(Color::Red),
                ))]
            } else if result.error.is_error() {
                vec![Line::from(Span::styled(
                    "Server error during eligibility check",
                    Style::default().fg(Color::Red),
                ))]
            } else if result.can_interrupt {
                let mut lines = vec![
                    Line::from(Span::styled(
                        "This ToO can interrupt the following programs:",
                        Style::default().fg(Color::Green),
                    )),
                    Line::from(""),
                ];
                for program in &result.programs {
                    lines.push(Line::from(format!(
                        "{} | {} | {} | {} - {}",
                        program.proj_code,
                        program.instrument,
                        program.date,
                        program.start_time,
                        program.end_time,
                    )));
                    if program.institution_interrupt {
                        lines.push(Line::from(Span::styled(
                            format!(
                                "  Institution interrupt: {}",
                                program.institution_reason.join(", ")
                            ),
                            Style::default().fg(Color::Red),
                        )));
                    }
                    if program.partner_interrupt {
                        lines.push(Line::from(Span::styled(
                            format!("  Partner interrupt: {}", program.partner_reason.join(", ")),
                            Style::default().fg(Color::Red),
                        )));
                    }
                    if program.is_switch {
                        lines.push(Line::from(Span::styled(
                            "  (This is a switch)",
                            Style::default().fg(Color::Cyan),
                        )));
                    }
                }
                if !result.check_time_hst.is_empty() {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        format!("Checked at {} HST", result.check_time_hst),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                lines
            } else {
                vec![Line::from(Span::styled(
                    "This ToO cannot interrupt any scheduled programs.",
                    Style::default().fg(Color::Red),
                ))]
            }
        }
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Can ToO interrupt? ")
            .padding(Padding::new(2, 2, 1, 1)),
    );
    frame.render_widget(paragraph, area);
}
