use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use lettr::session::Mode;

use crate::ui::theme::Theme;

const TITLE: &str = " lettr ";
const TITLE_WIDTH: u16 = TITLE.len() as u16;
const LEARN_LABEL: &str = "Learn";
const GAME_LABEL: &str = "Game";

/// Title bar with the two mode tabs and, in Game mode, the score.
pub struct Header<'a> {
    mode: Mode,
    score: u32,
    attempts: u32,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(mode: Mode, score: u32, attempts: u32, theme: &'a Theme) -> Self {
        Self {
            mode,
            score,
            attempts,
            theme,
        }
    }

    /// Screen areas of the Learn and Game tabs, for mouse hit-testing.
    pub fn tab_areas(area: Rect) -> [Rect; 2] {
        // Inside the border: " lettr " and a space precede the tabs.
        let x = area.x + 1 + TITLE_WIDTH + 1;
        let y = area.y + 1;
        let learn_w = LEARN_LABEL.len() as u16 + 2;
        let game_w = GAME_LABEL.len() as u16 + 2;
        [
            Rect::new(x, y, learn_w, 1),
            Rect::new(x + learn_w + 1, y, game_w, 1),
        ]
    }

    fn tab(&self, label: &'static str, mode: Mode) -> Span<'static> {
        let colors = &self.theme.colors;
        if self.mode == mode {
            Span::styled(
                format!(" {label} "),
                Style::default()
                    .fg(colors.header_bg())
                    .bg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                format!(" {label} "),
                Style::default().fg(colors.text_muted()).bg(colors.accent_dim()),
            )
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.header_bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![
            Span::styled(
                TITLE,
                Style::default()
                    .fg(colors.header_fg())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            self.tab(LEARN_LABEL, Mode::Learn),
            Span::raw(" "),
            self.tab(GAME_LABEL, Mode::Game),
        ];

        if self.mode == Mode::Game {
            spans.push(Span::styled(
                format!("   Score {} / {}", self.score, self.attempts),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
