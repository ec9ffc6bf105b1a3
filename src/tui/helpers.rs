use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows taken by the table border and column header above the first entry
const TABLE_CHROME_TOP: u16 = 2;

/// Splits the screen into header, table and footer
pub fn layout_chunks(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Heading and current path
            Constraint::Min(0),    // Entry table
            Constraint::Length(3), // Buttons
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Centered rect with a fixed height, clamped to the available area
pub fn centered_rect_fixed_height(percent_x: u16, height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    let y = r.y + (r.height - height) / 2;
    let horizontal = centered_rect(percent_x, 100, r);

    Rect::new(horizontal.x, y, horizontal.width, height)
}

/// Maps a screen row inside the bordered table to an entry index.
///
/// Returns `None` for the border, the column header and rows past the end.
pub fn row_at(table_area: Rect, offset: usize, len: usize, column: u16, row: u16) -> Option<usize> {
    let first_row = table_area.y + TABLE_CHROME_TOP;
    let last_row = (table_area.y + table_area.height).saturating_sub(1);
    let inside_x = column > table_area.x && column + 1 < table_area.x + table_area.width;

    if !inside_x || row < first_row || row >= last_row {
        return None;
    }

    let index = offset + (row - first_row) as usize;
    (index < len).then_some(index)
}
