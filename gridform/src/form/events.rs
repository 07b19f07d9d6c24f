//! Form engine events.

use std::collections::HashMap;

use crate::model::Value;

/// Notifications emitted by [`Form`](super::Form).
#[derive(Debug, Clone)]
pub enum FormEvent {
    /// A submit attempt passed validation; carries the value snapshot.
    Submitted(HashMap<String, Value>),
    /// The form was dismissed without submitting.
    Cancelled,
}

/// Registered callback. Handlers run synchronously, in registration order,
/// inside the call that produced the event.
pub(super) type FormEventHandler = Box<dyn FnMut(&FormEvent)>;
