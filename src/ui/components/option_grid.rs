use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

use lettr::session::{OPTION_COUNT, Round};

use crate::ui::theme::Theme;

/// The four answer cards. While feedback is showing the cards are drawn
/// disabled, except that the correct one is marked.
pub struct OptionGrid<'a> {
    round: &'a Round,
    cells: &'a [Rect; OPTION_COUNT],
    highlighted: usize,
    locked: bool,
    theme: &'a Theme,
}

impl<'a> OptionGrid<'a> {
    pub fn new(
        round: &'a Round,
        cells: &'a [Rect; OPTION_COUNT],
        highlighted: usize,
        locked: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            round,
            cells,
            highlighted,
            locked,
            theme,
        }
    }
}

impl Widget for OptionGrid<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let answer_slot = self.round.correct_slot();

        for (slot, (&option, &cell)) in self.round.options.iter().zip(self.cells).enumerate() {
            if cell.width < 2 || cell.height < 2 {
                continue;
            }
            let (bg, border) = if self.locked {
                if slot == answer_slot {
                    (colors.success_bg(), colors.success())
                } else {
                    (colors.option_disabled_bg(), colors.border())
                }
            } else if slot == self.highlighted {
                (colors.option_selected_bg(), colors.border_focused())
            } else {
                (colors.option_bg(), colors.border())
            };

            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .title(format!(" {} ", slot + 1))
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(bg));
            let inner = block.inner(cell);
            block.render(cell, buf);

            let top_pad = inner.height.saturating_sub(1) / 2;
            let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
            lines.push(Line::from(option.to_string()));
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(colors.option_fg())
                        .add_modifier(Modifier::BOLD),
                )
                .render(inner, buf);
        }
    }
}
