// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Board (fill)                                      |
// |                                                   |
// +--------------------------------------------------+
// | Clue Panel (6 rows)                               |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: load phase and reveal progress.
    pub status_bar: Rect,
    /// Middle: the category/clue grid (or the loading/error view).
    pub board: Rect,
    /// Below the board: full text of the cursor cell's clue.
    pub clue_panel: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the screen layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(8),    // board
            Constraint::Length(6), // clue panel
            Constraint::Length(1), // help bar
        ])
        .split(area);

    AppLayout {
        status_bar: vertical[0],
        board: vertical[1],
        clue_panel: vertical[2],
        help_bar: vertical[3],
    }
}

// ---------------------------------------------------------------------------
// Board geometry
// ---------------------------------------------------------------------------

/// Column widths for the board table: an equal split of the inner width,
/// with the division remainder absorbed by the last column.
///
/// Mouse hit-testing uses the same arithmetic, so rendered cell boundaries
/// and click targets always agree.
pub fn column_widths(inner_width: u16, columns: usize) -> Vec<u16> {
    if columns == 0 {
        return Vec::new();
    }
    let cols = columns as u16;
    let base = inner_width / cols;
    let remainder = inner_width % cols;
    (0..columns)
        .map(|i| {
            if i + 1 == columns {
                base + remainder
            } else {
                base
            }
        })
        .collect()
}

/// Map a terminal coordinate to a board cell (column, row index).
///
/// `board_area` is the outer board zone including its block border; the
/// first inner row is the category header and is not a cell. Returns `None`
/// for clicks on the border, the header, or outside the populated grid.
pub fn board_hit_test(
    board_area: Rect,
    columns: usize,
    rows: usize,
    x: u16,
    y: u16,
) -> Option<(usize, usize)> {
    if columns == 0 || rows == 0 {
        return None;
    }
    if board_area.width <= 2 || board_area.height <= 2 {
        return None;
    }

    // Inner area inside the block border.
    let inner = Rect::new(
        board_area.x + 1,
        board_area.y + 1,
        board_area.width - 2,
        board_area.height - 2,
    );
    if x < inner.x || x >= inner.x + inner.width || y < inner.y || y >= inner.y + inner.height {
        return None;
    }

    // First inner row is the header.
    let rel_y = y - inner.y;
    if rel_y == 0 {
        return None;
    }
    let row = (rel_y - 1) as usize;
    if row >= rows {
        return None;
    }

    let mut col_start = inner.x;
    for (col, width) in column_widths(inner.width, columns).into_iter().enumerate() {
        if x < col_start + width {
            return Some((col, row));
        }
        col_start += width;
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
