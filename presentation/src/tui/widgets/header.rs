//! Header widget: app title, tagline and proxy endpoint

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const TAGLINE: &str =
    "Advanced AI-powered diabetes risk assessment tool to help you understand your health better";

pub struct HeaderWidget<'a> {
    endpoint: &'a str,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(endpoint: &'a str) -> Self {
        Self { endpoint }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(Color::Green)),
            Span::styled(TAGLINE, Style::default().fg(Color::Cyan)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::styled(
                " Sugar Signal ",
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title(Line::from(format!(" {} ", self.endpoint)).right_aligned())
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_lines;

    #[test]
    fn test_header_shows_title_and_endpoint() {
        let area = Rect::new(0, 0, 160, 3);
        let mut buf = Buffer::empty(area);
        HeaderWidget::new("http://127.0.0.1:3000/api/predict").render(area, &mut buf);

        let lines = buffer_lines(&buf);
        assert!(lines[0].contains("Sugar Signal"));
        assert!(lines[0].contains("http://127.0.0.1:3000/api/predict"));
        assert!(lines[1].contains(
            "Advanced AI-powered diabetes risk assessment tool to help you understand your health better"
        ));
    }
}
