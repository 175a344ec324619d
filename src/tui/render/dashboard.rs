//! Dashboard rendering: campaign activity and the agent roster cards.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::api::Agent;
use crate::app::{App, LoadState};

use super::colors;

/// Render the dashboard section.
pub fn render(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    render_activity(frame, app, chunks[0]);
    render_roster(frame, app, chunks[1]);
}

fn render_activity(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let stats_line = match &app.roster.stats {
        LoadState::Loading => Line::from(Span::styled(
            "loading stats...",
            Style::default().fg(colors::TEXT_MUTED),
        )),
        LoadState::Failed(message) => Line::from(Span::styled(
            format!("stats unavailable: {message}"),
            Style::default().fg(colors::TEXT_MUTED),
        )),
        LoadState::Loaded(stats) => Line::from(vec![
            Span::styled(
                format!("leads {}", stats.total_leads),
                Style::default().fg(colors::TEXT_PRIMARY),
            ),
            Span::styled(
                format!("  new {}", stats.new_calls),
                Style::default().fg(colors::TEXT_DIM),
            ),
            Span::styled(
                format!("  retry {}", stats.retry_calls),
                Style::default().fg(colors::TEXT_DIM),
            ),
            Span::styled(
                format!("  callback {}", stats.callback_calls),
                Style::default().fg(colors::TEXT_DIM),
            ),
            Span::styled(
                format!("  completed {}", stats.completed_calls),
                Style::default().fg(colors::ACCENT_POSITIVE),
            ),
            Span::styled(
                format!("  failed {}", stats.failed_calls),
                Style::default().fg(colors::ACCENT_NEGATIVE),
            ),
        ]),
    };

    let mut second_line = vec![match &app.roster.concurrency {
        LoadState::Loaded(info) => Span::styled(
            format!(
                "active calls {}/{}",
                info.current_concurrency, info.concurrency_limit
            ),
            Style::default().fg(colors::TEXT_PRIMARY),
        ),
        LoadState::Failed(_) => Span::styled(
            "active calls unavailable",
            Style::default().fg(colors::TEXT_MUTED),
        ),
        LoadState::Loading => {
            Span::styled("active calls ...", Style::default().fg(colors::TEXT_MUTED))
        }
    }];
    if let Some(refreshed_at) = app.roster.refreshed_at {
        second_line.push(Span::styled(
            format!("  refreshed {}", refreshed_at.format("%H:%M:%S")),
            Style::default().fg(colors::TEXT_MUTED),
        ));
    }

    let paragraph = Paragraph::new(vec![stats_line, Line::from(second_line)]).block(
        Block::default()
            .title(" Campaign Activity ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER)),
    );
    frame.render_widget(paragraph, area);
}

fn roster_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
}

fn render_roster(frame: &mut Frame<'_>, app: &App, area: Rect) {
    match &app.roster.agents {
        LoadState::Loading => {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "Loading agents...",
                Style::default().fg(colors::TEXT_DIM),
            )))
            .block(roster_block(" Voice Agents ".to_string()));
            frame.render_widget(paragraph, area);
        }
        LoadState::Failed(message) => {
            let text = vec![
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(colors::ACCENT_NEGATIVE),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press r to retry.",
                    Style::default().fg(colors::TEXT_MUTED),
                )),
            ];
            let paragraph = Paragraph::new(text).block(roster_block(" Voice Agents ".to_string()));
            frame.render_widget(paragraph, area);
        }
        LoadState::Loaded(agents) if agents.is_empty() => {
            let text = vec![
                Line::from(Span::styled(
                    "No agents configured.",
                    Style::default().fg(colors::TEXT_PRIMARY),
                )),
                Line::from(Span::styled(
                    "Agents are provisioned on the backend.",
                    Style::default().fg(colors::TEXT_MUTED),
                )),
            ];
            let paragraph =
                Paragraph::new(text).block(roster_block(" Voice Agents (0) ".to_string()));
            frame.render_widget(paragraph, area);
        }
        LoadState::Loaded(agents) => {
            let items: Vec<ListItem<'_>> = agents
                .iter()
                .skip(app.roster.scroll)
                .map(agent_card)
                .collect();
            let list = List::new(items)
                .block(roster_block(format!(" Voice Agents ({}) ", agents.len())));
            frame.render_widget(list, area);
        }
    }
}

fn agent_card(agent: &Agent) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled("* ", Style::default().fg(colors::SELECTED)),
            Span::styled(
                agent.display_label().to_string(),
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("  id: {}", agent.id),
            Style::default().fg(colors::TEXT_DIM),
        )),
        Line::from(""),
    ])
}
