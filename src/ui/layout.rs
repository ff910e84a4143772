use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use lettr::alphabet;
use lettr::session::OPTION_COUNT;

const STRIP_COLUMNS: u16 = 13;
const STRIP_ROWS: u16 = 2;
const OPTION_COLUMNS: u16 = 2;
const MAX_OPTION_GRID_WIDTH: u16 = 48;
const MAX_CARD_WIDTH: u16 = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Full,    // ≥24 rows: bordered strip cells and tall option cards
    Compact, // <24 rows: single-line strip cells, short option cards
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.height >= 24 {
            LayoutTier::Full
        } else {
            LayoutTier::Compact
        }
    }

    pub fn strip_cell_height(self) -> u16 {
        match self {
            LayoutTier::Full => 3,
            LayoutTier::Compact => 1,
        }
    }

    pub fn bordered_cells(self) -> bool {
        self == LayoutTier::Full
    }
}

pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    pub fn new(area: Rect, footer_lines: u16) -> Self {
        let tier = LayoutTier::from_area(area);
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(footer_lines),
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            footer: vertical[2],
            tier,
        }
    }
}

pub struct LearnLayout {
    pub card: Rect,
    pub word: Rect,
    pub strip: Rect,
}

impl LearnLayout {
    pub fn new(main: Rect, tier: LayoutTier) -> Self {
        let strip_height = tier.strip_cell_height() * STRIP_ROWS;
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),
                Constraint::Length(2),
                Constraint::Length(strip_height),
            ])
            .split(main);

        let card_width = MAX_CARD_WIDTH.min(vertical[0].width);
        let card = Rect::new(
            vertical[0].x + (vertical[0].width - card_width) / 2,
            vertical[0].y,
            card_width,
            vertical[0].height,
        );

        Self {
            card,
            word: vertical[1],
            strip: vertical[2],
        }
    }

    /// One cell per letter, two rows of thirteen.
    pub fn strip_cells(&self, tier: LayoutTier) -> Vec<Rect> {
        let cell_h = tier.strip_cell_height();
        let cell_w = (self.strip.width / STRIP_COLUMNS).max(1);
        let left = self.strip.x + (self.strip.width.saturating_sub(cell_w * STRIP_COLUMNS)) / 2;

        (0..alphabet::LEN as u16)
            .map(|i| {
                let col = i % STRIP_COLUMNS;
                let row = i / STRIP_COLUMNS;
                Rect::new(left + col * cell_w, self.strip.y + row * cell_h, cell_w, cell_h)
                    .intersection(self.strip)
            })
            .collect()
    }
}

pub struct GameLayout {
    pub prompt: Rect,
    pub options: Rect,
    pub feedback: Rect,
}

impl GameLayout {
    pub fn new(main: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(3),
            ])
            .split(main);

        Self {
            prompt: vertical[0],
            options: vertical[1],
            feedback: vertical[2],
        }
    }

    /// Option cards in a 2x2 grid, centered horizontally.
    pub fn option_cells(&self) -> [Rect; OPTION_COUNT] {
        let width = MAX_OPTION_GRID_WIDTH.min(self.options.width);
        let left = self.options.x + (self.options.width - width) / 2;
        let cell_w = width / OPTION_COLUMNS;
        let rows = OPTION_COUNT as u16 / OPTION_COLUMNS;
        let cell_h = self.options.height / rows;

        std::array::from_fn(|i| {
            let i = i as u16;
            Rect::new(
                left + (i % OPTION_COLUMNS) * cell_w,
                self.options.y + (i / OPTION_COLUMNS) * cell_h,
                cell_w,
                cell_h,
            )
        })
    }
}

/// Index of the first cell containing the given terminal position.
pub fn hit_test(cells: &[Rect], column: u16, row: u16) -> Option<usize> {
    let pos = Position::new(column, row);
    cells.iter().position(|cell| cell.contains(pos))
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = "  ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}
