//! Selector overlays: the CSV file picker and the agent selector.

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::tui::render::colors;

use super::centered_rect_absolute;

/// Rows of entries shown at once in a selector overlay.
const VISIBLE_ROWS: usize = 8;

/// Render the CSV file picker overlay.
pub fn render_file_picker_overlay(frame: &mut Frame<'_>, app: &App) {
    let picker = &app.file_picker;
    let mut lines = Vec::new();

    if let Some(error) = &picker.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(colors::MODAL_BORDER_ERROR),
        )));
    } else if picker.entries.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No .csv files in {}", picker.dir.display()),
            Style::default().fg(colors::TEXT_DIM),
        )));
    } else {
        let skip = picker.cursor.saturating_sub(VISIBLE_ROWS - 1);
        for (index, entry) in picker
            .entries
            .iter()
            .enumerate()
            .skip(skip)
            .take(VISIBLE_ROWS)
        {
            let name = entry.file_name().map_or_else(
                || entry.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            );
            let style = if index == picker.cursor {
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .bg(colors::SURFACE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::TEXT_PRIMARY)
            };
            lines.push(Line::from(Span::styled(format!("  {name}  "), style)));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down move - Enter select - Esc cancel",
        Style::default().fg(colors::TEXT_MUTED),
    )));

    render_selector(frame, " Select CSV ", lines);
}

/// Render the agent selector overlay.
///
/// The entries are the roster snapshot taken when the overlay opened, so
/// only loaded ids are ever offered.
pub fn render_agent_selector_overlay(frame: &mut Frame<'_>, app: &App) {
    let selector = &app.agent_selector;
    let mut lines = Vec::new();

    if selector.agents.is_empty() {
        lines.push(Line::from(Span::styled(
            "No agents configured.",
            Style::default().fg(colors::TEXT_DIM),
        )));
    } else {
        let skip = selector.cursor.saturating_sub(VISIBLE_ROWS - 1);
        for (index, agent) in selector
            .agents
            .iter()
            .enumerate()
            .skip(skip)
            .take(VISIBLE_ROWS)
        {
            let style = if index == selector.cursor {
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .bg(colors::SURFACE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::TEXT_PRIMARY)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {}  ", agent.display_label()), style),
                Span::styled(
                    format!("({})", agent.id),
                    Style::default().fg(colors::TEXT_DIM),
                ),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down move - Enter select - Esc cancel",
        Style::default().fg(colors::TEXT_MUTED),
    )));

    render_selector(frame, " Select Agent ", lines);
}

fn render_selector(frame: &mut Frame<'_>, title: &str, lines: Vec<Line<'_>>) {
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect_absolute(60, height, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
