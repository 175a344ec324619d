//! TUI rendering
//!
//! This module contains all rendering logic for the TUI, organized into:
//! - `colors`: Color palette definitions
//! - `dashboard` / `campaign`: the two section layouts
//! - `modals`: Modal/overlay rendering

pub mod colors;

mod campaign;
mod dashboard;
mod modals;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, LoadState, Mode, Section};

/// Render the full application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    match app.section {
        Section::Dashboard => dashboard::render(frame, app, chunks[1]),
        Section::CreateCampaign => campaign::render(frame, app, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);

    match app.mode {
        Mode::Normal => {}
        Mode::FilePicker => modals::render_file_picker_overlay(frame, app),
        Mode::AgentSelector => modals::render_agent_selector_overlay(frame, app),
        Mode::ConfirmBatch => modals::render_confirm_batch_overlay(frame),
        Mode::Help => modals::render_help_overlay(frame),
    }
}

fn render_tabs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        " dialout ",
        Style::default()
            .fg(colors::SELECTED)
            .add_modifier(Modifier::BOLD),
    )];

    for (index, section) in [Section::Dashboard, Section::CreateCampaign]
        .into_iter()
        .enumerate()
    {
        spans.push(Span::styled(" | ", Style::default().fg(colors::TEXT_MUTED)));
        let style = if app.section == section {
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::TEXT_DIM)
        };
        spans.push(Span::styled(format!("[{}] {section}", index + 1), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let health = match &app.health {
        LoadState::Loaded(health) => Span::styled(
            format!(" backend {} ", health.status),
            Style::default().fg(colors::ACCENT_POSITIVE),
        ),
        LoadState::Failed(_) => Span::styled(
            " backend unreachable ",
            Style::default().fg(colors::ACCENT_NEGATIVE),
        ),
        LoadState::Loading => {
            Span::styled(" backend ... ", Style::default().fg(colors::TEXT_MUTED))
        }
    };

    let hints = app.status_message.clone().unwrap_or_else(|| match app.section {
        Section::Dashboard => {
            "[Tab] section  [r]efresh  [b]atch call  [?] help  [q]uit".to_string()
        }
        Section::CreateCampaign => {
            "[f]ile  [a]gent  [Enter] launch  [r]efresh  [?] help  [q]uit".to_string()
        }
    });

    let line = Line::from(vec![
        health,
        Span::styled("| ", Style::default().fg(colors::TEXT_MUTED)),
        Span::styled(hints, Style::default().fg(colors::TEXT_DIM)),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(colors::SURFACE)),
        area,
    );
}
