//! Terminal session for the az host loop.
//!
//! While an editing session runs the terminal is in raw mode on the
//! alternate screen with mouse reporting on and the hardware cursor hidden
//! (the renderer shows it at the right cell each frame). `ScreenGuard`
//! owns the backend for the length of the session and puts the terminal
//! back the way it found it when dropped, including during unwinding.
//!
//! Event decoding into `core-events` lives in `input`.

use anyhow::Result;
use crossterm::{
    cursor, event, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use std::io::{Write, stdout};

pub mod input;
pub use input::{convert_event, read_event};

/// Screen setup and teardown seen by the host loop.
pub trait TerminalBackend {
    /// Switch into the editing screen. Calling it twice is a no-op.
    fn enter(&mut self) -> Result<()>;
    /// Restore the shell screen. Calling it when not entered is a no-op.
    fn leave(&mut self) -> Result<()>;
    /// Current size as (columns, rows).
    fn size(&self) -> Result<(u16, u16)>;
}

/// crossterm on stdout.
#[derive(Debug)]
pub struct CrosstermBackend {
    title: String,
    on_screen: bool,
}

impl CrosstermBackend {
    /// `title` is set as the window title on entering.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            on_screen: false,
        }
    }

    fn setup(&self, out: &mut impl Write) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            out,
            EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide,
            SetTitle(&self.title)
        )?;
        Ok(())
    }

    fn teardown(out: &mut impl Write) -> Result<()> {
        // Raw mode goes off after the shell screen is back.
        execute!(out, event::DisableMouseCapture, LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if self.on_screen {
            return Ok(());
        }
        self.setup(&mut stdout())?;
        self.on_screen = true;
        tracing::debug!(target: "terminal", title = %self.title, "enter_screen");
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if !self.on_screen {
            return Ok(());
        }
        self.on_screen = false;
        Self::teardown(&mut stdout())?;
        tracing::debug!(target: "terminal", "leave_screen");
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }
}

/// Owns a backend for one editing session; leaves the screen on drop.
pub struct ScreenGuard<B: TerminalBackend> {
    backend: B,
}

impl<B: TerminalBackend> ScreenGuard<B> {
    pub fn enter(mut backend: B) -> Result<Self> {
        backend.enter()?;
        Ok(Self { backend })
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: TerminalBackend> Drop for ScreenGuard<B> {
    fn drop(&mut self) {
        if let Err(e) = self.backend.leave() {
            tracing::error!(target: "terminal", error = %e, "restore_failed");
        }
    }
}
