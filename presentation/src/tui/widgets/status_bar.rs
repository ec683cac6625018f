//! Status bar widget: focused field, range warning and key hints

use crate::tui::state::FormState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const HINTS: &str = "Tab/↓:next  Shift+Tab/↑:prev  Ctrl+U:clear  Enter:submit  Esc:quit";

pub struct StatusBarWidget<'a> {
    state: &'a FormState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let (indicator, color) = if self.state.is_pending() {
            ("SENDING".to_string(), Color::Yellow)
        } else {
            (self.state.focused_metric().key().to_string(), Color::Cyan)
        };
        let indicator_line = Line::from(Span::styled(
            format!(" {} ", indicator),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ));
        let indicator_width = indicator.chars().count() as u16 + 2;
        buf.set_line(area.x, area.y, &indicator_line, indicator_width);

        // Out-of-range values are submitted anyway; only flag them
        let outside = self.state.input.out_of_range();
        let mut left_width = indicator_width;
        if let Some(first) = outside.first() {
            let warning = if outside.len() == 1 {
                format!(" ! {} outside {} ", first.spec().label, first.spec().range_hint())
            } else {
                format!(" ! {} fields outside typical range ", outside.len())
            };
            let warning_width = warning.chars().count() as u16;
            let warning_line = Line::from(Span::styled(
                warning,
                Style::default().fg(Color::Yellow).bg(Color::DarkGray),
            ));
            let available = area.width.saturating_sub(indicator_width);
            buf.set_line(
                area.x + indicator_width,
                area.y,
                &warning_line,
                warning_width.min(available),
            );
            left_width += warning_width;
        }

        // Key hints, right-aligned
        let hints_width = HINTS.chars().count() as u16;
        let hints_x = area.right().saturating_sub(hints_width + 1);
        if hints_x > area.x + left_width {
            let hints_line = Line::from(Span::styled(
                HINTS,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            buf.set_line(hints_x, area.y, &hints_line, hints_width + 1);
        }
    }
}
