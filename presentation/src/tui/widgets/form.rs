//! Form widget: the eight metric fields and the submit line

use crate::tui::state::FormState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use sugar_signal_domain::Metric;

const DESCRIPTION: &str =
    "Please provide accurate health information for the most reliable diabetes risk assessment";
const SUBMIT_LABEL: &str = "[ Get Diabetes Risk Assessment ]";
const PENDING_LABEL: &str = "[ Analyzing Your Health Data... ]";

pub struct FormWidget<'a> {
    state: &'a FormState,
}

impl<'a> FormWidget<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }

    fn field_line(&self, metric: Metric) -> Line<'a> {
        let spec = metric.spec();
        let focused = self.state.focused_metric() == metric;
        let in_range = spec.in_range(self.state.input.get(metric));

        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut value_style = if in_range {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };
        if focused {
            value_style = value_style.add_modifier(Modifier::REVERSED);
        }

        let cursor = if focused { "_" } else { " " };
        let text = self.state.text(metric);

        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{:<28}", spec.label), label_style),
            Span::styled(format!(" {:<10}{}", text, cursor), value_style),
            Span::styled(
                format!("  {:<12}", spec.range_hint()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(spec.description, Style::default().fg(Color::DarkGray)),
        ])
    }

    fn submit_line(&self) -> Line<'a> {
        if self.state.is_pending() {
            Line::from(Span::styled(
                format!("  {}", PENDING_LABEL),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(Span::styled(
                format!("  {}", SUBMIT_LABEL),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
        }
    }
}

impl<'a> Widget for FormWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(Span::styled(
            DESCRIPTION,
            Style::default().fg(Color::DarkGray),
        ))];
        lines.extend(Metric::ALL.iter().map(|m| self.field_line(*m)));
        lines.push(Line::from(""));
        lines.push(self.submit_line());

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Health Assessment Form ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
