use std::{io::{stdout, Stdout, Write}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{poll, read, Event, KeyEvent, KeyEventKind};
use log::{error, info};

use crate::error::SnekError;
use crate::screen::Screen;

/// Owns the terminal for the length of a session. Raw mode and the
/// alternate screen are undone when this is dropped, so every way out of
/// the game (including a panic) leaves the terminal usable.
pub struct TermManager {
    stdout: Stdout,
    active: bool,
}

impl TermManager {
    /// Fails if the terminal is smaller than `needed` (columns, rows).
    pub fn check_size(needed: (u16, u16)) -> Result<(), SnekError> {
        let actual = terminal::size()?;
        if actual.0 < needed.0 || actual.1 < needed.1 {
            return Err(SnekError::TerminalTooSmall { needed, actual });
        }
        Ok(())
    }

    pub fn setup() -> Result<Self, SnekError> {
        let mut term = TermManager { stdout: stdout(), active: true };

        // From here on Drop restores whatever was already switched on
        execute!(term.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(term.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))?;

        info!("terminal set up");
        Ok(term)
    }

    pub fn restore(&mut self) -> Result<(), SnekError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;

        info!("terminal restored");
        Ok(())
    }

    /// Next pending key press, without waiting.
    pub fn poll_key(&self) -> Result<Option<KeyEvent>, SnekError> {
        while poll(Duration::ZERO)? {
            match read()? {
                Event::Key(ev) if ev.kind != KeyEventKind::Release => return Ok(Some(ev)),
                _ => {}
            }
        }
        Ok(None)
    }

    pub fn read_key_blocking(&self) -> Result<KeyEvent, SnekError> {
        loop {
            if let Event::Key(ev) = read()? {
                if ev.kind != KeyEventKind::Release {
                    return Ok(ev);
                }
            }
        }
    }

    /// Throws away input typed so far.
    pub fn drain_keys(&self) -> Result<(), SnekError> {
        while poll(Duration::ZERO)? {
            read()?;
        }
        Ok(())
    }

    /// Draws the screens in order, later ones on top, and flushes.
    pub fn present(&mut self, screens: &[&Screen]) -> Result<(), SnekError> {
        for screen in screens {
            let origin = screen.origin();
            for (i, row) in screen.rows().enumerate() {
                let y = (origin.y + i as i32).max(0) as u16;
                let x = origin.x.max(0) as u16;
                queue!(self.stdout, cursor::MoveTo(x, y), style::Print(row))?;
            }
        }

        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            error!("could not restore the terminal: {}", e);
        }
    }
}
