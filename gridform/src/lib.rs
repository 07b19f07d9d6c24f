//! Metadata-driven presentation engines.
//!
//! Two independent, purely synchronous components shared by every entity
//! screen of an administration UI:
//!
//! - [`table::TableView`] turns an in-memory collection of opaque records
//!   into a searched, sorted, paginated view.
//! - [`form::Form`] compiles a declarative field specification into
//!   live-validated input state and gates submission on overall validity.
//!
//! Both operate on [`model::Record`] / [`model::Value`] and declarative
//! specs rather than fixed entity types; consumers supply data and specs
//! and receive derived views plus user-intent events.

pub mod error;
pub mod form;
pub mod model;
pub mod table;

pub mod prelude {
    pub use crate::error::SpecError;
    pub use crate::form::{
        ErrorKind, FieldError, FieldKind, FieldSpec, Form, FormEvent, KindHandler, RuleSet,
        SelectOption,
    };
    pub use crate::model::{Record, Value};
    pub use crate::table::{
        CellFormatter, ColumnSpec, SortDirection, SortOrder, TableEvent, TableView,
    };
}
