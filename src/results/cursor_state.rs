use ratatui::widgets::ListState;

/// Selection cursor over the story rows.
///
/// Wraps the list widget state so every movement stays clamped to the
/// current row count, which shrinks on dismissal and grows on paging.
#[derive(Debug, Default)]
pub struct CursorState {
    list: ListState,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            list: ListState::default(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list.selected()
    }

    /// Mutable widget state for stateful rendering.
    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list
    }

    /// Moves the cursor down one row, stopping at the last row. The first
    /// movement on an unselected list lands on row zero.
    pub fn select_next(&mut self, row_count: usize) {
        if row_count == 0 {
            self.list.select(None);
            return;
        }
        let next = match self.list.selected() {
            Some(index) => (index + 1).min(row_count - 1),
            None => 0,
        };
        self.list.select(Some(next));
    }

    /// Moves the cursor up one row, stopping at row zero.
    pub fn select_previous(&mut self, row_count: usize) {
        if row_count == 0 {
            self.list.select(None);
            return;
        }
        let previous = match self.list.selected() {
            Some(index) => index.saturating_sub(1),
            None => 0,
        };
        self.list.select(Some(previous));
    }

    /// Keeps the selection inside the row range after rows are removed or
    /// replaced. An empty list clears the selection.
    pub fn clamp(&mut self, row_count: usize) {
        if let Some(index) = self.list.selected() {
            if row_count == 0 {
                self.list.select(None);
            } else if index >= row_count {
                self.list.select(Some(row_count - 1));
            }
        }
    }
}

#[cfg(test)]
#[path = "cursor_state_tests.rs"]
mod cursor_state_tests;
