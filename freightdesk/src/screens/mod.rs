//! Page glue: generic list and form controllers.
//!
//! Every entity page reduces to one of these two controllers wired with that
//! entity's column/field set. They own an engine and a client, and receive
//! the caller's [`AdminContext`](crate::context::AdminContext) by `&mut` on
//! each call.

mod form;
mod list;

pub use form::{FormScreen, SubmitOutcome};
pub use list::ListScreen;
