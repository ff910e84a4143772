use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Widget};

use lettr::alphabet;

use crate::ui::theme::Theme;

/// All 26 uppercase letters, the current card highlighted. Cell geometry
/// comes from `LearnLayout::strip_cells` so mouse hit-testing agrees with
/// what is drawn.
pub struct LetterStrip<'a> {
    cells: &'a [Rect],
    selected: usize,
    bordered: bool,
    theme: &'a Theme,
}

impl<'a> LetterStrip<'a> {
    pub fn new(cells: &'a [Rect], selected: usize, bordered: bool, theme: &'a Theme) -> Self {
        Self {
            cells,
            selected,
            bordered,
            theme,
        }
    }
}

impl Widget for LetterStrip<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        for (i, (record, &cell)) in alphabet::records().iter().zip(self.cells).enumerate() {
            if cell.width == 0 || cell.height == 0 {
                continue;
            }
            let is_selected = i == self.selected;
            let style = if is_selected {
                Style::default()
                    .fg(colors.card_fg())
                    .bg(colors.card_bg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg()).bg(colors.accent_dim())
            };

            let label = Paragraph::new(record.upper.to_string())
                .alignment(Alignment::Center)
                .style(style);
            if self.bordered {
                let border_color = if is_selected {
                    colors.border_focused()
                } else {
                    colors.border()
                };
                label
                    .block(Block::bordered().border_style(Style::default().fg(border_color)))
                    .render(cell, buf);
            } else {
                label.render(cell, buf);
            }
        }
    }
}
