//! Table view state: search, sort, pagination.

use std::collections::HashSet;

use log::warn;

use crate::error::SpecError;
use crate::model::{Record, Value};

use super::events::{TableEvent, TableEventHandler};
use super::spec::ColumnSpec;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Resolved sort state: which column, which direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub column: String,
    pub direction: SortDirection,
}

/// Search/sort/pagination state over a supplied record collection.
///
/// All mutations are synchronous; each one ends by re-clamping the current
/// page so the invariant `1 <= current_page <= max(1, total_pages())` holds
/// after every state change. Derived reads ([`visible_page`](Self::visible_page),
/// [`total_pages`](Self::total_pages)) are pure recomputations from the
/// current state.
pub struct TableView {
    columns: Vec<ColumnSpec>,
    rows: Vec<Record>,
    search_term: String,
    current_page: usize,
    page_size: usize,
    sort: Option<SortOrder>,
    handlers: Vec<TableEventHandler>,
}

impl TableView {
    /// Creates a view with no rows.
    ///
    /// Fails fast on malformed column specs: empty or duplicate keys.
    pub fn new(columns: Vec<ColumnSpec>) -> Result<Self, SpecError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if column.key.is_empty() {
                return Err(SpecError::EmptyKey);
            }
            if !seen.insert(column.key.as_str()) {
                return Err(SpecError::duplicate(&column.key));
            }
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
            handlers: Vec::new(),
        })
    }

    /// Creates a view over an initial collection.
    pub fn with_rows(columns: Vec<ColumnSpec>, rows: Vec<Record>) -> Result<Self, SpecError> {
        let mut view = Self::new(columns)?;
        view.rows = rows;
        Ok(view)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The column specs this view was built with.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// The full, unfiltered row collection.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current sort state, if any column is sorted.
    pub fn sort(&self) -> Option<&SortOrder> {
        self.sort.as_ref()
    }

    /// Registers an event handler. Handlers fire synchronously, in
    /// registration order, within the mutating call that emits the event.
    pub fn on_event(&mut self, handler: impl FnMut(&TableEvent) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Sets the search term and resets to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Sets the page size and resets to the first page.
    ///
    /// A zero page size is rejected: the call logs a warning and leaves the
    /// state untouched.
    pub fn set_page_size(&mut self, size: usize) {
        if size == 0 {
            warn!("ignoring zero page size");
            return;
        }
        self.page_size = size;
        self.current_page = 1;
    }

    /// Moves to a page, clamped into `[1, max(1, total_pages())]`.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.page_cap());
    }

    /// Toggles sorting on a column.
    ///
    /// Unknown or non-sortable columns are a no-op returning `None`. Toggling
    /// the current sort column flips its direction; any other column becomes
    /// the sort column, ascending. Emits [`TableEvent::SortChanged`] with the
    /// resolved order.
    pub fn toggle_sort(&mut self, column: &str) -> Option<SortOrder> {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.key == column && c.sortable);
        if !sortable {
            return None;
        }

        let direction = match &self.sort {
            Some(order) if order.column == column => order.direction.flipped(),
            _ => SortDirection::Asc,
        };
        let order = SortOrder {
            column: column.to_string(),
            direction,
        };
        self.sort = Some(order.clone());
        self.emit(TableEvent::SortChanged {
            column: order.column.clone(),
            direction: order.direction,
        });
        Some(order)
    }

    /// Replaces the row collection in a single assignment.
    ///
    /// Search, sort and page survive the refresh; no derived view can ever
    /// observe a mix of old and new rows. The page is then clamped against
    /// the new filtered count.
    pub fn replace_rows(&mut self, rows: Vec<Record>) {
        self.rows = rows;
        self.current_page = self.current_page.clamp(1, self.page_cap());
    }

    /// Forwards an edit intent for a record of the visible page.
    ///
    /// `index` addresses the visible page, not the raw collection.
    /// Out-of-range indexes are ignored.
    pub fn request_edit(&mut self, index: usize) {
        if let Some(record) = self.visible_page().get(index).map(|r| (*r).clone()) {
            self.emit(TableEvent::EditRequested(record));
        }
    }

    /// Forwards a delete intent for a record of the visible page.
    pub fn request_delete(&mut self, index: usize) {
        if let Some(record) = self.visible_page().get(index).map(|r| (*r).clone()) {
            self.emit(TableEvent::DeleteRequested(record));
        }
    }

    // -------------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------------

    /// Number of rows passing the current search term.
    pub fn filtered_count(&self) -> usize {
        self.filtered_indices().len()
    }

    /// Number of pages: `ceil(filtered_count / page_size)`.
    ///
    /// An empty filtered set yields 0 pages while `current_page` stays
    /// floored at 1.
    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(self.page_size)
    }

    /// The records of the current page, after filtering and sorting.
    pub fn visible_page(&self) -> Vec<&Record> {
        let ordered = self.filtered_indices();
        let start = (self.current_page - 1) * self.page_size;
        ordered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .map(|i| &self.rows[i])
            .collect()
    }

    /// `(current_page, total_pages)` for a pagination footer.
    pub fn page_info(&self) -> (usize, usize) {
        (self.current_page, self.total_pages())
    }

    /// Filtered row indexes in display order (search applied, then sort).
    fn filtered_indices(&self) -> Vec<usize> {
        let term = self.search_term.to_lowercase();
        let mut indices: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| term.is_empty() || Self::row_matches(row, &term))
            .map(|(i, _)| i)
            .collect();

        if let Some(order) = &self.sort {
            let key = order.column.as_str();
            // Stable sort: non-comparable pairs keep their input order.
            indices.sort_by(|&a, &b| {
                let left = self.rows[a].get(key).unwrap_or(&Value::Null);
                let right = self.rows[b].get(key).unwrap_or(&Value::Null);
                let ordering = left.compare(right);
                match order.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        indices
    }

    /// A row passes when any of its values, stringified and lower-cased,
    /// contains the lower-cased term as a substring.
    fn row_matches(row: &Record, term: &str) -> bool {
        row.values()
            .any(|value| value.to_string().to_lowercase().contains(term))
    }

    /// Upper clamp for the current page; never below 1.
    fn page_cap(&self) -> usize {
        self.total_pages().max(1)
    }

    fn emit(&mut self, event: TableEvent) {
        for handler in &mut self.handlers {
            handler(&event);
        }
    }
}
