//! Key handling for the interactive card.
//!
//! A dedicated thread polls crossterm for events and forwards mapped
//! [`Action`]s over a channel, so the async loop never blocks on the terminal.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use super::settings;
use crate::joke::Category;
use crate::widget::JokeWidget;

/// User intent decoded from one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PreviousCategory,
    NextCategory,
    SelectCategory(Category),
    GetAnother,
    Copy,
    ToggleTheme,
    /// Terminal was resized; repaint only.
    Redraw,
    Quit,
}

/// Map one key event to an action, ignoring releases and unbound keys.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(Action::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PreviousCategory),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextCategory),
        KeyCode::Char(ch @ '1'..='9') => {
            let idx = ch.to_digit(10)? as usize - 1;
            Category::from_index(idx).map(Action::SelectCategory)
        }
        KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Enter => Some(Action::GetAnother),
        KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::Copy),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Apply one action to the widget. Returns `false` once the user quits.
pub fn apply_action(widget: &mut JokeWidget, action: Action) -> bool {
    match action {
        Action::PreviousCategory => {
            widget.previous_category();
        }
        Action::NextCategory => {
            widget.next_category();
        }
        Action::SelectCategory(category) => {
            widget.select_category(category);
        }
        Action::GetAnother => {
            widget.request_another();
        }
        Action::Copy => {
            widget.copy_joke();
        }
        Action::ToggleTheme => widget.toggle_theme(),
        Action::Redraw => {}
        Action::Quit => return false,
    }
    true
}

/// Background key reader; stops when dropped.
pub struct KeyReader {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl KeyReader {
    /// Start reading terminal events and forwarding actions to `tx`.
    pub fn spawn(tx: UnboundedSender<Action>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            if let Err(err) = read_loop(&tx, &thread_stop) {
                warn!(%err, "key reader failed");
                let _ = tx.send(Action::Quit);
            }
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }
}

impl Drop for KeyReader {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn read_loop(tx: &UnboundedSender<Action>, stop: &AtomicBool) -> io::Result<()> {
    while !stop.load(Ordering::SeqCst) {
        if !event::poll(Duration::from_millis(settings::EVENT_POLL_MS))? {
            continue;
        }
        let action = match event::read()? {
            Event::Key(key) => action_for_key(key),
            Event::Resize(_, _) => Some(Action::Redraw),
            _ => None,
        };
        if let Some(action) = action {
            if tx.send(action).is_err() {
                break;
            }
        }
    }
    Ok(())
}

/// Raw mode lifetime guard so terminal state is restored on any return path.
pub struct RawModeGuard;

impl RawModeGuard {
    /// Enable terminal raw mode and return a guard that disables it on drop.
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
