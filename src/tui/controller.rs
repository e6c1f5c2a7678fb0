use crate::game::ActionType;
use crate::tui::app::{AppState, InputAction};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Table hotkey for a betting action.
pub fn action_for_key(key: char) -> Option<ActionType> {
    let action = match key.to_ascii_lowercase() {
        'f' => ActionType::Fold,
        'k' => ActionType::Check,
        'c' => ActionType::Call,
        'b' => ActionType::Bet,
        'r' => ActionType::Raise,
        _ => return None,
    };
    Some(action)
}

/// Map a key press to an input. Returns true when the user asked to quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    let input = if app.help_open() {
        match code {
            KeyCode::Esc | KeyCode::Char('?') => Some(InputAction::ToggleHelp),
            _ => None,
        }
    } else if app.history_open() {
        match code {
            KeyCode::Up => Some(InputAction::HistoryUp),
            KeyCode::Down => Some(InputAction::HistoryDown),
            KeyCode::Esc | KeyCode::Char('h' | 'H') => Some(InputAction::ToggleHistory),
            _ => None,
        }
    } else {
        match code {
            KeyCode::Char('q' | 'Q') => return true,
            KeyCode::Char('?') => Some(InputAction::ToggleHelp),
            KeyCode::Char('h' | 'H') => Some(InputAction::ToggleHistory),
            KeyCode::Char(' ') => Some(InputAction::NewHand),
            KeyCode::Char(c) => action_for_key(c).map(InputAction::Act),
            _ => None,
        }
    };
    if let Some(input) = input {
        let _ = app.handle_input(input);
    }
    false
}
