//! Terminal user interface for dialout.

pub mod render;

use std::io;
use std::sync::Arc;
use std::sync::mpsc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::api::ApiClient;
use crate::app::{Actions, App, Event, Handler, Mode, NetEvent, Section};

/// Run the TUI application until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or polled.
pub fn run(mut app: App, api: ApiClient) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let actions = Actions::new(Arc::new(api), tx);
    let event_handler = Handler::new(app.config.poll_interval_ms);

    let result = run_loop(&mut terminal, &mut app, &event_handler, &actions, &rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &Handler,
    actions: &Actions,
    net_events: &mpsc::Receiver<NetEvent>,
) -> Result<()> {
    let start_section = app.section;
    actions.activate_section(app, start_section);

    loop {
        // Drain completed background work before every draw so the UI never
        // waits a full tick to reflect a finished request.
        while let Ok(event) = net_events.try_recv() {
            app.apply_net_event(event);
        }

        terminal.draw(|frame| render::render(frame, app))?;

        match event_handler.next()? {
            Event::Key(key) => handle_key(app, actions, key),
            Event::Tick | Event::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, actions: &Actions, key: KeyEvent) {
    match app.mode {
        Mode::Help => app.close_overlay(),
        Mode::ConfirmBatch => match key.code {
            KeyCode::Char('y' | 'Y') => actions.trigger_call_batch(app),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => app.close_overlay(),
            _ => {}
        },
        Mode::FilePicker => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.file_picker.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.file_picker.move_down(),
            KeyCode::Enter => app.confirm_file_selection(),
            KeyCode::Esc => app.close_overlay(),
            _ => {}
        },
        Mode::AgentSelector => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.agent_selector.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.agent_selector.move_down(),
            KeyCode::Enter => app.confirm_agent_selection(),
            KeyCode::Esc => app.close_overlay(),
            _ => {}
        },
        Mode::Normal => handle_normal_key(app, actions, key),
    }
}

fn handle_normal_key(app: &mut App, actions: &Actions, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.mode = Mode::Help,
        KeyCode::Tab => actions.activate_section(app, app.section.toggled()),
        KeyCode::Char('1') => actions.activate_section(app, Section::Dashboard),
        KeyCode::Char('2') => actions.activate_section(app, Section::CreateCampaign),
        KeyCode::Char('r') => actions.refresh(app),
        _ => match app.section {
            Section::Dashboard => match key.code {
                KeyCode::Down | KeyCode::Char('j') => app.roster.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.roster.scroll_up(),
                KeyCode::Char('b') => app.mode = Mode::ConfirmBatch,
                _ => {}
            },
            Section::CreateCampaign => match key.code {
                KeyCode::Char('f') => app.open_file_picker(),
                KeyCode::Char('a') => app.open_agent_selector(),
                KeyCode::Enter => actions.submit_campaign(app),
                _ => {}
            },
        },
    }
}
