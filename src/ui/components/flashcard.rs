use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

use lettr::alphabet::LetterRecord;

use crate::ui::theme::Theme;

pub struct Flashcard<'a> {
    record: &'a LetterRecord,
    theme: &'a Theme,
}

impl<'a> Flashcard<'a> {
    pub fn new(record: &'a LetterRecord, theme: &'a Theme) -> Self {
        Self { record, theme }
    }
}

impl Widget for Flashcard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.card_bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let letter_style = Style::default()
            .fg(colors.card_fg())
            .add_modifier(Modifier::BOLD);
        let pair = format!("{}  {}", self.record.upper, self.record.lower);

        // Vertically center the letter pair.
        let top_pad = inner.height.saturating_sub(1) / 2;
        let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
        lines.push(Line::from(Span::styled(pair, letter_style)));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
