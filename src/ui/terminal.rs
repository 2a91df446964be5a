//! Full-screen terminal session for the card.

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};
use std::io::{self, Stdout, Write};

use super::input::RawModeGuard;
use super::settings;

/// Alternate-screen session; restores the terminal on drop.
pub struct TerminalSession {
    out: Stdout,
    _raw: RawModeGuard,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        let raw = RawModeGuard::acquire()?;
        let mut out = io::stdout();
        out.execute(EnterAlternateScreen)?;
        out.execute(Hide)?;
        Ok(Self { out, _raw: raw })
    }

    /// Current terminal width in columns.
    pub fn columns(&self) -> usize {
        terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(settings::FALLBACK_COLUMNS)
    }

    /// Replace the screen contents with `rows`.
    pub fn draw(&mut self, rows: &[String]) -> io::Result<()> {
        self.out.queue(MoveTo(0, 0))?;
        self.out.queue(Clear(ClearType::All))?;
        self.out.queue(Print("\r\n"))?;
        for row in rows {
            self.out.queue(Print(row))?;
            self.out.queue(Print("\r\n"))?;
        }
        self.out.flush()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.out.execute(Show);
        let _ = self.out.execute(LeaveAlternateScreen);
    }
}
