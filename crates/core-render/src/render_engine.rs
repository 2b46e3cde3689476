//! Full-frame render engine.
//!
//! Every dispatch that reports `dirty` triggers one full frame: scroll
//! offsets are updated to follow the cursor, the frame is composed from the
//! session, and emitted row by row (MoveTo per row, one style change per
//! run of equal flags). Buffer replacement resets the scroll offsets.

use crate::layout::{HitTarget, Layout, SIDEBAR_WIDTH};
use crate::status::{message_line, status_line};
use crate::viewport::Viewport;
use crate::writer::Writer;
use crate::{CellFlags, Frame, char_width};
use anyhow::Result;
use core_state::{EditorState, Mode};
use core_text::Position;
use std::io::Write;

/// Where a pointer event landed, resolved against the current scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Document position (unclamped).
    Text(Position),
    /// Index into the browser listing.
    Entry(usize),
    None,
}

#[derive(Debug, Default)]
pub struct RenderEngine {
    viewport: Viewport,
    /// First listing entry shown in the browser pane.
    browser_first: usize,
    frames: u64,
}

impl RenderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Forget scroll positions (document replaced).
    pub fn reset(&mut self) {
        self.viewport = Viewport::default();
        self.browser_first = 0;
    }

    pub fn layout(state: &EditorState, size: (u16, u16)) -> Layout {
        Layout::compute(size.0, size.1, state.browser.visible)
    }

    /// Resolve a screen cell for pointer handling.
    pub fn pointer_target(&self, state: &EditorState, size: (u16, u16), x: u16, y: u16) -> PointerTarget {
        let layout = Self::layout(state, size);
        match layout.hit(x, y) {
            HitTarget::Text { x, y } => {
                PointerTarget::Text(self.viewport.to_document(&state.document, x, y))
            }
            HitTarget::Sidebar(row) => {
                let idx = self.browser_first + row as usize;
                if idx < state.browser.entries().len() {
                    PointerTarget::Entry(idx)
                } else {
                    PointerTarget::None
                }
            }
            HitTarget::Gutter | HitTarget::Bars => PointerTarget::None,
        }
    }

    /// Compose the frame for `state` and return it with the terminal cursor cell.
    pub fn build_frame(&mut self, state: &EditorState, size: (u16, u16)) -> (Frame, Option<(u16, u16)>) {
        let layout = Self::layout(state, size);
        let rows = layout.text_rows as usize;
        self.viewport
            .follow(&state.document, state.cursor, rows, layout.text_width() as usize);
        self.follow_browser(state, rows);

        let mut frame = Frame::new(layout.width, layout.height);
        self.draw_text(state, &layout, &mut frame);
        if layout.sidebar > 0 {
            self.draw_browser(state, &layout, &mut frame);
        }
        draw_bars(state, &layout, &mut frame);
        let cursor = self.cursor_cell(state, &layout);
        (frame, cursor)
    }

    pub fn render(&mut self, state: &EditorState, size: (u16, u16)) -> Result<()> {
        let mut out = std::io::stdout();
        self.render_to(state, size, &mut out)
    }

    pub fn render_to<W: Write>(&mut self, state: &EditorState, size: (u16, u16), out: &mut W) -> Result<()> {
        let (frame, cursor) = self.build_frame(state, size);
        let mut w = Writer::new();
        w.hide_cursor();
        for y in 0..frame.height {
            emit_row(&frame, y, &mut w);
        }
        w.style(CellFlags::empty());
        if let Some((x, y)) = cursor {
            w.show_cursor(x, y);
        }
        w.flush_to(out)?;
        self.frames += 1;
        tracing::trace!(
            target: "render",
            frame = self.frames,
            first_line = self.viewport.first_line,
            first_col = self.viewport.first_col,
            "frame"
        );
        Ok(())
    }

    fn follow_browser(&mut self, state: &EditorState, rows: usize) {
        let selected = state.browser.selected_index();
        if rows == 0 {
            return;
        }
        if selected < self.browser_first {
            self.browser_first = selected;
        } else if selected >= self.browser_first + rows {
            self.browser_first = selected + 1 - rows;
        }
        let max_first = state.browser.entries().len().saturating_sub(1);
        self.browser_first = self.browser_first.min(max_first);
    }

    fn draw_text(&self, state: &EditorState, layout: &Layout, frame: &mut Frame) {
        let doc = &state.document;
        let text_x = layout.text_x();
        for y in 0..layout.text_rows {
            let row = self.viewport.first_line + y as usize;
            let Some(line) = doc.line(row) else {
                frame.put_str(layout.gutter_x(), y, "    ~ ", layout.width, CellFlags::DIM);
                continue;
            };
            let number_flags = if row == state.cursor.row {
                CellFlags::BOLD
            } else {
                CellFlags::empty()
            };
            let number = format!("{:>5} ", row + 1);
            frame.put_str(layout.gutter_x(), y, &number, text_x, number_flags);

            let mut x = text_x;
            for (col, ch) in line.chars().enumerate().skip(self.viewport.first_col) {
                if x >= layout.width {
                    break;
                }
                let flags = if state.selection.contains(row, col) {
                    CellFlags::REVERSE
                } else {
                    CellFlags::empty()
                };
                let used = frame.set_char(x, y, ch, flags);
                if used == 0 {
                    break;
                }
                x += used;
            }
        }
    }

    fn draw_browser(&self, state: &EditorState, layout: &Layout, frame: &mut Frame) {
        let focused = matches!(state.mode, Mode::Browse);
        let pane = layout.sidebar.saturating_sub(1);
        let entries = state.browser.entries();
        for y in 0..layout.text_rows {
            let idx = self.browser_first + y as usize;
            frame.fill(0, y, pane, CellFlags::empty());
            if let Some(entry) = entries.get(idx) {
                let mut flags = if entry.is_dir {
                    CellFlags::BOLD
                } else {
                    CellFlags::empty()
                };
                if idx == state.browser.selected_index() {
                    flags |= if focused {
                        CellFlags::REVERSE
                    } else {
                        CellFlags::REVERSE | CellFlags::DIM
                    };
                    frame.fill(0, y, pane, flags);
                }
                let label = if entry.is_dir {
                    format!(" [{}]", entry.name)
                } else {
                    format!("  {}", entry.name)
                };
                frame.put_str(0, y, &label, pane.min(SIDEBAR_WIDTH - 2), flags);
            }
            frame.set_char(pane, y, '|', CellFlags::empty());
        }
    }

    fn cursor_cell(&self, state: &EditorState, layout: &Layout) -> Option<(u16, u16)> {
        match &state.mode {
            Mode::Command(input) | Mode::Search(input) => {
                let x = 1 + input.as_str().chars().map(char_width).sum::<u16>();
                Some((x.min(layout.width.saturating_sub(1)), layout.message_row()))
            }
            Mode::Browse => {
                let row = state.browser.selected_index().checked_sub(self.browser_first)?;
                (row < layout.text_rows as usize).then_some((1, row as u16))
            }
            Mode::Normal { .. } | Mode::Insert => {
                let row = state.cursor.row.checked_sub(self.viewport.first_line)?;
                if row >= layout.text_rows as usize {
                    return None;
                }
                let x = self.viewport.cursor_x(&state.document, state.cursor);
                let x = layout.text_x() as usize + x;
                (x < layout.width as usize).then_some((x as u16, row as u16))
            }
        }
    }
}

fn draw_bars(state: &EditorState, layout: &Layout, frame: &mut Frame) {
    let status_row = layout.status_row();
    if status_row < layout.height {
        frame.fill(0, status_row, layout.width, CellFlags::REVERSE);
        frame.put_str(0, status_row, &status_line(state), layout.width, CellFlags::REVERSE);
    }
    let message_row = layout.message_row();
    if message_row < layout.height {
        frame.put_str(0, message_row, &message_line(state), layout.width, CellFlags::empty());
    }
}

/// Emit one row: a MoveTo, then one style change per run of equal flags.
fn emit_row(frame: &Frame, y: u16, w: &mut Writer) {
    w.move_to(0, y);
    let mut run = String::new();
    let mut run_flags: Option<CellFlags> = None;
    for x in 0..frame.width {
        let Some(cell) = frame.cell(x, y) else { break };
        if !cell.is_leader() {
            continue;
        }
        if run_flags != Some(cell.flags) {
            if let Some(flags) = run_flags {
                w.style(flags);
                w.print(std::mem::take(&mut run));
            }
            run_flags = Some(cell.flags);
        }
        run.push(cell.ch);
    }
    if let Some(flags) = run_flags {
        w.style(flags);
        w.print(run);
    }
}
