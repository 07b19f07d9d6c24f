//! Tabular view engine: search, sort and pagination over opaque records.
//!
//! [`TableView`] owns the view state for one collection. Every mutation is a
//! synchronous, immediate recomputation of derived state; the visible page
//! and page count are pure derivations of the current state.
//!
//! # Example
//!
//! ```
//! use gridform::table::{ColumnSpec, TableView};
//! use gridform::model::Record;
//!
//! let columns = vec![
//!     ColumnSpec::new("name", "Name").sortable(),
//!     ColumnSpec::new("status", "Status"),
//! ];
//! let rows = vec![
//!     Record::new().set("name", "North Hub").set("status", "ACTIVE"),
//!     Record::new().set("name", "Airport Desk").set("status", "CLOSED"),
//! ];
//! let mut view = TableView::with_rows(columns, rows).unwrap();
//! view.set_search_term("hub");
//! assert_eq!(view.filtered_count(), 1);
//! ```

mod events;
mod spec;
mod state;

pub use events::TableEvent;
pub use spec::{CellFormatter, ColumnSpec};
pub use state::{SortDirection, SortOrder, TableView, DEFAULT_PAGE_SIZE};
