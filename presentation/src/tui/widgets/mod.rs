//! TUI widgets: ratatui components for the form screen
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Form: description, fields, submit line (13) ───┤
//! ├── Outcome panel (flex) ──────────────────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod form;
pub mod header;
pub mod outcome;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows needed by the form: description, eight fields, a blank line, the submit line, borders
const FORM_HEIGHT: u16 = 1 + 8 + 1 + 1 + 2;

/// Compute the main layout regions from a terminal area
pub struct FormLayout {
    pub header: Rect,
    pub form: Rect,
    pub outcome: Rect,
    pub status_bar: Rect,
}

impl FormLayout {
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(FORM_HEIGHT),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            form: vertical[1],
            outcome: vertical[2],
            status_bar: vertical[3],
        }
    }
}

#[cfg(test)]
pub(crate) fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
