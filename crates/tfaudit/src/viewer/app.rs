//! Viewer state: the borrowed event list and the scroll position.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::AuditEvent;

/// Number of table columns.
pub const COLUMN_COUNT: usize = 7;

/// Column titles, in display order.
pub const COLUMN_TITLES: [&str; COLUMN_COUNT] = [
    "#",
    "Timestamp",
    "Type",
    "ID",
    "Auth",
    "Resource",
    "Action",
];

/// Cell text for one row. `number` is 1-based.
pub fn row_cells(number: usize, event: &AuditEvent) -> [String; COLUMN_COUNT] {
    [
        number.to_string(),
        event.timestamp.to_string(),
        event.kind.clone(),
        event.id.clone(),
        event.auth.description.clone(),
        event.resource.kind.clone(),
        event.resource.action.clone(),
    ]
}

/// Interactive table state.
pub struct Viewer<'a> {
    events: &'a [AuditEvent],
    /// Index of the first visible row.
    offset: usize,
    /// Rows that fit on screen, as of the last draw.
    page_height: usize,
    /// Widest cell per column, header included.
    column_widths: [u16; COLUMN_COUNT],
    exit: bool,
}

impl<'a> Viewer<'a> {
    /// Creates a viewer over `events`, scrolled to the top.
    pub fn new(events: &'a [AuditEvent]) -> Self {
        let mut column_widths = COLUMN_TITLES.map(display_width);
        for (index, event) in events.iter().enumerate() {
            for (width, cell) in column_widths.iter_mut().zip(row_cells(index + 1, event)) {
                *width = (*width).max(display_width(&cell));
            }
        }

        Self {
            events,
            offset: 0,
            page_height: 0,
            column_widths,
            exit: false,
        }
    }

    /// Applies a key press.
    ///
    /// Bindings: `Esc` or `Ctrl-C` exits; `Up`/`k` and `Down`/`j` move one
    /// row; `PageUp`/`PageDown` move one screen; `Home`/`g` and `End`/`G`
    /// jump to either end.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => self.exit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(self.page_step()),
            KeyCode::PageDown => self.scroll_down(self.page_step()),
            KeyCode::Home | KeyCode::Char('g') => self.offset = 0,
            KeyCode::End | KeyCode::Char('G') => self.offset = self.max_offset(),
            _ => {}
        }
    }

    /// Scrolls towards the first row.
    pub fn scroll_up(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows);
    }

    /// Scrolls towards the last row, stopping once the last page is full.
    pub fn scroll_down(&mut self, rows: usize) {
        self.offset = self.offset.saturating_add(rows).min(self.max_offset());
    }

    /// Records how many rows the table area can show.
    ///
    /// Called on every draw so resizes keep the offset in range.
    pub fn set_page_height(&mut self, rows: usize) {
        self.page_height = rows;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Rows currently on screen, paired with their 1-based row numbers.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &'a AuditEvent)> {
        let events = self.events;
        events
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.page_height)
            .map(|(index, event)| (index + 1, event))
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn column_widths(&self) -> [u16; COLUMN_COUNT] {
        self.column_widths
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    fn max_offset(&self) -> usize {
        self.events.len().saturating_sub(self.page_height)
    }

    fn page_step(&self) -> usize {
        self.page_height.max(1)
    }
}

fn display_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}
