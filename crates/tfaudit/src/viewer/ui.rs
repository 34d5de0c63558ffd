//! Frame rendering for the viewer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table},
};

use super::app::{COLUMN_COUNT, COLUMN_TITLES, Viewer, row_cells};

/// Help text shown above the table.
pub const HELP_BANNER: &str = "Use arrow keys to scroll | Press ESC to exit";

/// Foreground colour per column.
const COLUMN_COLORS: [Color; COLUMN_COUNT] = [
    Color::Gray,
    Color::Magenta,
    Color::Cyan,
    Color::Yellow,
    Color::LightCyan,
    Color::Blue,
    Color::Green,
];

/// Draws the banner and the table.
pub fn draw(f: &mut Frame, viewer: &mut Viewer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Banner
            Constraint::Min(0),    // Table
        ])
        .split(f.size());

    f.render_widget(Paragraph::new(HELP_BANNER), chunks[0]);
    draw_table(f, chunks[1], viewer);
}

fn draw_table(f: &mut Frame, area: Rect, viewer: &mut Viewer) {
    // One line goes to the header.
    viewer.set_page_height(usize::from(area.height.saturating_sub(1)));

    let header = Row::new(COLUMN_TITLES).style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = viewer
        .visible()
        .map(|(number, event)| {
            let cells = row_cells(number, event)
                .into_iter()
                .zip(COLUMN_COLORS)
                .map(|(text, color)| Cell::from(text).style(Style::default().fg(color)));
            Row::new(cells)
        })
        .collect();

    let widths = viewer.column_widths().map(Constraint::Length);
    let table = Table::new(rows, widths).header(header).column_spacing(1);

    f.render_widget(table, area);
}
