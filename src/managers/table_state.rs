//! Table state for LedgerDesk list views.
//!
//! Pure bookkeeping for pagination, sorting, and filtering. The table
//! widgets own the rows; this tracks which slice of them is on screen
//! and how it is ordered.

use crate::types::table::{SortDirection, SortState};

/// Default rows-per-page for list views.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Trait defining table state operations.
pub trait TableStateTrait {
    fn set_total(&mut self, total: usize);
    fn set_page(&mut self, page: usize);
    fn next_page(&mut self);
    fn prev_page(&mut self);
    fn set_page_size(&mut self, size: usize);
    fn toggle_sort(&mut self, column: &str);
    fn set_filter(&mut self, filter: &str);
    fn clear_filter(&mut self);
    fn page(&self) -> usize;
    fn page_count(&self) -> usize;
    fn offset(&self) -> usize;
    fn limit(&self) -> usize;
    fn sort(&self) -> Option<&SortState>;
    fn filter(&self) -> &str;
}

/// Pagination, sorting, and filter state for one table.
pub struct TableState {
    page: usize,
    page_size: usize,
    total: usize,
    sort: Option<SortState>,
    filter: String,
}

impl TableState {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            total: 0,
            sort: None,
            filter: String::new(),
        }
    }

    /// Pulls the current page back into range after the total or page size changed.
    fn clamp_page(&mut self) {
        let max_page = self.page_count().saturating_sub(1);
        if self.page > max_page {
            self.page = max_page;
        }
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}

impl TableStateTrait for TableState {
    /// Updates the total row count reported by the server and clamps the
    /// current page into the new range.
    fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clamp_page();
    }

    /// Jumps to `page`, clamped to the last available page.
    fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Changes the rows-per-page. A size of zero is ignored.
    fn set_page_size(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        self.page_size = size;
        self.clamp_page();
    }

    /// Cycles the sort on `column`: ascending, then descending, then none.
    /// Toggling a different column restarts at ascending.
    fn toggle_sort(&mut self, column: &str) {
        self.sort = match self.sort.take() {
            Some(s) if s.column == column => match s.direction {
                SortDirection::Ascending => Some(SortState {
                    column: column.to_string(),
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortState {
                column: column.to_string(),
                direction: SortDirection::Ascending,
            }),
        };
    }

    /// Replaces the filter text and returns to the first page.
    fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
        self.page = 0;
    }

    fn clear_filter(&mut self) {
        self.set_filter("");
    }

    fn page(&self) -> usize {
        self.page
    }

    /// Number of pages the current total spans (0 when the table is empty).
    fn page_count(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            (self.total + self.page_size - 1) / self.page_size
        }
    }

    /// Row offset of the current page, for a limit/offset query.
    fn offset(&self) -> usize {
        self.page * self.page_size
    }

    fn limit(&self) -> usize {
        self.page_size
    }

    fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    fn filter(&self) -> &str {
        &self.filter
    }
}
