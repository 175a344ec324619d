//! Campaign creation form rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{App, LoadState, Outcome, SubmitStatus};

use super::colors;

/// Render the campaign creation section.
pub fn render(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if let Some(outcome) = &app.campaign.outcome {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);
        render_form(frame, app, chunks[0]);
        render_outcome(frame, outcome, chunks[1]);
    } else {
        render_form(frame, app, area);
    }
}

fn render_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let file_span = app.campaign.selected_file.as_ref().map_or_else(
        || {
            Span::styled(
                "none - press f to choose",
                Style::default().fg(colors::TEXT_DIM),
            )
        },
        |path| {
            let name = path.file_name().map_or_else(
                || path.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            );
            Span::styled(name, Style::default().fg(colors::TEXT_PRIMARY))
        },
    );

    // A selected agent survives roster reloads; show its label (or raw id)
    // even when the selector itself is unavailable.
    let agent_span = app.campaign.selected_agent_id.as_ref().map_or_else(
        || match &app.campaign.agents {
            LoadState::Loading => Span::styled(
                "loading agents...",
                Style::default().fg(colors::TEXT_DIM),
            ),
            LoadState::Failed(message) => Span::styled(
                message.clone(),
                Style::default().fg(colors::ACCENT_NEGATIVE),
            ),
            LoadState::Loaded(_) => Span::styled(
                "none - press a to choose",
                Style::default().fg(colors::TEXT_DIM),
            ),
        },
        |id| Span::styled(agent_label(app, id), Style::default().fg(colors::TEXT_PRIMARY)),
    );

    let submit_line = match app.campaign.submit {
        SubmitStatus::Submitting => Line::from(Span::styled(
            "  Submitting...",
            Style::default()
                .fg(colors::ACCENT_WARNING)
                .add_modifier(Modifier::BOLD),
        )),
        SubmitStatus::Idle => {
            let style = if app.campaign.can_submit() {
                Style::default()
                    .fg(colors::ACCENT_POSITIVE)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::TEXT_MUTED)
            };
            Line::from(Span::styled("  Press Enter to launch the campaign", style))
        }
    };

    let label_style = Style::default().fg(colors::TEXT_DIM);
    let text = vec![
        Line::from(""),
        Line::from(vec![Span::styled("  CSV file:  ", label_style), file_span]),
        Line::from(vec![Span::styled("  Agent:     ", label_style), agent_span]),
        Line::from(""),
        Line::from(Span::styled(
            "  CSV columns: name and phone_number required;",
            Style::default().fg(colors::TEXT_MUTED),
        )),
        Line::from(Span::styled(
            "               email, company or organization optional",
            Style::default().fg(colors::TEXT_MUTED),
        )),
        Line::from(""),
        submit_line,
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .title(" New Campaign ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER)),
    );
    frame.render_widget(paragraph, area);
}

/// Display label for a selected agent id, looked up in this view's roster.
fn agent_label(app: &App, id: &str) -> String {
    app.campaign
        .agents
        .loaded()
        .and_then(|agents| agents.iter().find(|agent| agent.id == id))
        .map_or_else(|| id.to_string(), |agent| agent.display_label().to_string())
}

fn render_outcome(frame: &mut Frame<'_>, outcome: &Outcome, area: Rect) {
    let (title, color) = if outcome.is_success() {
        (" Success ", colors::ACCENT_POSITIVE)
    } else {
        (" Error ", colors::MODAL_BORDER_ERROR)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        outcome.text.clone(),
        Style::default().fg(color),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(paragraph, area);
}
