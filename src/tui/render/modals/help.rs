//! Help overlay rendering

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::render::colors;

use super::centered_rect_absolute;

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {key:<7}"),
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(description, Style::default().fg(colors::TEXT_DIM)),
    ])
}

/// Render the help overlay.
pub fn render_help_overlay(frame: &mut Frame<'_>) {
    let lines = vec![
        Line::from(Span::styled(
            "Keys",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        key_line("Tab 1 2", "switch section"),
        key_line("r", "refresh the active section"),
        key_line("j/k", "scroll the agent roster"),
        key_line("b", "trigger a calling batch (dashboard)"),
        key_line("f", "choose a CSV of leads (campaign)"),
        key_line("a", "choose an agent (campaign)"),
        key_line("Enter", "launch the campaign"),
        key_line("q", "quit"),
        Line::from(""),
        Line::from(Span::styled(
            "CSV columns: name and phone_number are required;",
            Style::default().fg(colors::TEXT_MUTED),
        )),
        Line::from(Span::styled(
            "email, company or organization are optional.",
            Style::default().fg(colors::TEXT_MUTED),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(colors::TEXT_MUTED),
        )),
    ];

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect_absolute(50, height, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
