use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Widget};

use lettr::session::Feedback;

use crate::ui::theme::Theme;

pub struct FeedbackBanner<'a> {
    feedback: Feedback,
    next_round_in: Option<Duration>,
    theme: &'a Theme,
}

impl<'a> FeedbackBanner<'a> {
    pub fn new(feedback: Feedback, theme: &'a Theme) -> Self {
        Self {
            feedback,
            next_round_in: None,
            theme,
        }
    }

    pub fn countdown(mut self, next_round_in: Option<Duration>) -> Self {
        self.next_round_in = next_round_in;
        self
    }

    fn text(&self) -> String {
        match self.next_round_in {
            Some(left) => format!(
                "{}   (next in {:.1}s)",
                self.feedback.message(),
                left.as_secs_f64()
            ),
            None => self.feedback.message(),
        }
    }
}

impl Widget for FeedbackBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let (fg, bg) = if self.feedback.is_correct() {
            (colors.success(), colors.success_bg())
        } else {
            (colors.warning(), colors.warning_bg())
        };

        Paragraph::new(self.text())
            .alignment(Alignment::Center)
            .style(Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD))
            .block(Block::bordered().border_style(Style::default().fg(fg)))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_with_countdown() {
        let theme = Theme::default();
        let banner = FeedbackBanner::new(Feedback::Incorrect { expected: 'k' }, &theme)
            .countdown(Some(Duration::from_millis(1300)));
        assert_eq!(banner.text(), "Try again! The answer is k   (next in 1.3s)");

        let banner = FeedbackBanner::new(Feedback::Correct, &theme);
        assert_eq!(banner.text(), "Great job! That's right!");
    }
}
