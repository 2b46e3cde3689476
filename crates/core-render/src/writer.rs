//! Terminal writer abstraction.
//!
//! Collects primitive terminal operations for one frame and queues them in
//! order on flush. Positions are absolute with a (0,0) origin; the caller
//! ensures bounds.

use crate::CellFlags;
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Print, SetAttribute},
};
use std::io::{Write, stdout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveTo(u16, u16),
    /// Reset attributes, then apply the given set.
    Style(CellFlags),
    Print(String),
    ShowCursor(u16, u16),
    HideCursor,
}

#[derive(Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn style(&mut self, flags: CellFlags) {
        self.cmds.push(Command::Style(flags));
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }
    pub fn show_cursor(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::ShowCursor(x, y));
    }
    pub fn hide_cursor(&mut self) {
        self.cmds.push(Command::HideCursor);
    }
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    pub fn flush(self) -> Result<()> {
        let mut out = stdout();
        self.flush_to(&mut out)
    }

    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::MoveTo(x, y) => queue!(out, MoveTo(x, y))?,
                Command::Style(flags) => {
                    queue!(out, SetAttribute(Attribute::Reset))?;
                    if flags.contains(CellFlags::REVERSE) {
                        queue!(out, SetAttribute(Attribute::Reverse))?;
                    }
                    if flags.contains(CellFlags::BOLD) {
                        queue!(out, SetAttribute(Attribute::Bold))?;
                    }
                    if flags.contains(CellFlags::DIM) {
                        queue!(out, SetAttribute(Attribute::Dim))?;
                    }
                }
                Command::Print(s) => queue!(out, Print(s))?,
                Command::ShowCursor(x, y) => queue!(out, MoveTo(x, y), Show)?,
                Command::HideCursor => queue!(out, Hide)?,
            }
        }
        out.flush()?;
        Ok(())
    }
}
