//! Outcome panel: risk result, retry message or idle hint

use crate::tui::state::{FormState, SubmissionStatus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use sugar_signal_domain::RiskLevel;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct OutcomeWidget<'a> {
    state: &'a FormState,
    tick: u64,
}

impl<'a> OutcomeWidget<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state, tick: 0 }
    }

    pub fn with_tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn risk_lines(level: RiskLevel) -> (Color, Vec<Line<'static>>) {
        let outcome = level.outcome();
        let color = if level.is_elevated() {
            Color::Red
        } else {
            Color::Green
        };

        let mut lines = vec![
            Line::from(Span::styled(
                outcome.title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                outcome.headline,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(outcome.message),
            Line::from(""),
        ];
        lines.extend(outcome.guidance.iter().map(|item| {
            Line::from(vec![
                Span::styled("  • ", Style::default().fg(color)),
                Span::raw(*item),
            ])
        }));
        (color, lines)
    }
}

impl<'a> Widget for OutcomeWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_color, lines) = match &self.state.status {
            SubmissionStatus::Idle => (
                Color::DarkGray,
                vec![Line::from(Span::styled(
                    "Fill in your health information and press Enter to get your assessment.",
                    Style::default().fg(Color::DarkGray),
                ))],
            ),
            SubmissionStatus::Pending => {
                let frame = SPINNER[(self.tick % SPINNER.len() as u64) as usize];
                (
                    Color::Yellow,
                    vec![Line::from(Span::styled(
                        format!("{} Analyzing Your Health Data...", frame),
                        Style::default().fg(Color::Yellow),
                    ))],
                )
            }
            SubmissionStatus::Succeeded(prediction) => Self::risk_lines(prediction.risk_level()),
            SubmissionStatus::Failed(message) => (
                Color::Red,
                vec![Line::from(Span::styled(
                    *message,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ))],
            ),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Assessment ")
            .border_style(Style::default().fg(border_color));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
