//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of items that can be added and
//! toggled. The list is a persistent value: every transition produces a new
//! list that shares untouched items with the previous one, so the previous
//! value stays valid and callers can detect change by reference equality.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TodoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, fixed at creation
    pub id: TodoId,
    /// What needs doing, fixed at creation
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not yet completed item
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Returns a copy with `completed` flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Ordered sequence of todo items, in creation order
///
/// Cloning is cheap and shares storage. Equality (`==`) compares content;
/// [`TodoList::ptr_eq`] compares identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoList {
    items: Arc<[Arc<TodoItem>]>,
}

impl TodoList {
    /// Creates an empty list
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    /// Returns the number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items in creation order
    pub fn iter(&self) -> impl Iterator<Item = &TodoItem> {
        self.items.iter().map(|item| &**item)
    }

    /// Returns the first item with the given id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.iter().find(|item| item.id == id)
    }

    /// Returns the number of completed items
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.iter().filter(|item| item.completed).count()
    }

    /// The shared item handles, for identity comparisons between lists
    #[must_use]
    pub fn as_slice(&self) -> &[Arc<TodoItem>] {
        &self.items
    }

    /// Checks whether two lists are the same value (not merely equal content)
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.items, &b.items)
    }

    /// New list with `item` appended; existing items are shared
    #[must_use]
    pub(crate) fn appended(&self, item: TodoItem) -> Self {
        self.items
            .iter()
            .cloned()
            .chain(std::iter::once(Arc::new(item)))
            .collect()
    }

    /// New list with every item carrying `id` toggled; other items are shared
    #[must_use]
    pub(crate) fn toggled(&self, id: TodoId) -> Self {
        self.items
            .iter()
            .map(|item| {
                if item.id == id {
                    Arc::new(item.toggled())
                } else {
                    Arc::clone(item)
                }
            })
            .collect()
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Arc<TodoItem>> for TodoList {
    fn from_iter<I: IntoIterator<Item = Arc<TodoItem>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<TodoItem> for TodoList {
    fn from_iter<I: IntoIterator<Item = TodoItem>>(iter: I) -> Self {
        iter.into_iter().map(Arc::new).collect()
    }
}

/// Opaque display-mode token
///
/// The items reducer never interprets it. The view layer understands
/// [`SHOW_ALL`](Self::SHOW_ALL), [`SHOW_COMPLETED`](Self::SHOW_COMPLETED) and
/// [`SHOW_ACTIVE`](Self::SHOW_ACTIVE); any other token is carried as-is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilityFilter(String);

impl VisibilityFilter {
    /// Token for showing every item
    pub const SHOW_ALL: &'static str = "SHOW_ALL";
    /// Token for showing completed items only
    pub const SHOW_COMPLETED: &'static str = "SHOW_COMPLETED";
    /// Token for showing items not yet completed
    pub const SHOW_ACTIVE: &'static str = "SHOW_ACTIVE";

    /// Wraps an arbitrary token
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VisibilityFilter {
    fn default() -> Self {
        Self::new(Self::SHOW_ALL)
    }
}

impl std::fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Actions describing a user intent
///
/// Serialized as internally tagged JSON (`{"type":"ADD_TODO","id":0,"text":"..."}`).
/// Any unrecognised `type` deserializes to [`TodoAction::Unknown`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a new item
    AddTodo {
        /// Identity of the new item
        id: TodoId,
        /// Text of the new item
        text: String,
    },

    /// Flip the completion flag of an item
    ToggleTodo {
        /// Item to toggle
        id: TodoId,
    },

    /// Change which items the view shows
    SetVisibilityFilter {
        /// New filter token
        filter: VisibilityFilter,
    },

    /// An action kind this build does not recognise
    #[serde(other)]
    Unknown,
}

impl TodoAction {
    /// Stable name of the action kind, as used on the wire
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddTodo { .. } => "ADD_TODO",
            Self::ToggleTodo { .. } => "TOGGLE_TODO",
            Self::SetVisibilityFilter { .. } => "SET_VISIBILITY_FILTER",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Decodes an action received from outside the process
    ///
    /// Objects whose kind is unrecognised, or whose payload does not match
    /// their kind, become [`TodoAction::Unknown`] so that applying them is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ActionDecodeError`] if `json` is not valid JSON or not a
    /// JSON object.
    pub fn from_json(json: &str) -> Result<Self, ActionDecodeError> {
        let value: serde_json::Value = serde_json::from_str(json)?;

        if !value.is_object() {
            return Err(ActionDecodeError::NotAnObject(json_type_name(&value)));
        }

        match serde_json::from_value(value) {
            Ok(action) => Ok(action),
            Err(error) => {
                tracing::warn!(%error, "Malformed action payload, treating as unknown");
                Ok(Self::Unknown)
            },
        }
    }
}

/// Errors decoding an action from JSON
#[derive(Error, Debug)]
pub enum ActionDecodeError {
    /// Input is not valid JSON
    #[error("invalid action JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Input is JSON but not an object
    #[error("action must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
