//! Action factory: the only way callers create actions.
//!
//! Item identity is assigned here, from an injected [`IdGenerator`], so ids
//! stay unique however many callers share the factory.

use crate::types::{TodoAction, TodoId, VisibilityFilter};
use composable_todos_core::environment::IdGenerator;
use std::sync::Arc;

/// Builds [`TodoAction`]s from user intents
///
/// Construct one per process and share it (it is cheap to clone).
#[derive(Clone)]
pub struct ActionFactory {
    ids: Arc<dyn IdGenerator>,
}

impl ActionFactory {
    /// Creates a factory drawing item ids from `ids`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// Creates an `AddTodo` action with a fresh id
    ///
    /// The text is not validated; see [`crate::input::AddTodoForm`].
    #[must_use]
    pub fn add_todo(&self, text: impl Into<String>) -> TodoAction {
        let id = TodoId::new(self.ids.next());
        let text = text.into();
        tracing::debug!(%id, text = %text, "action: ADD_TODO");
        TodoAction::AddTodo { id, text }
    }

    /// Creates a `ToggleTodo` action
    ///
    /// `id` is not checked against any state.
    #[must_use]
    pub fn toggle_todo(&self, id: TodoId) -> TodoAction {
        tracing::debug!(%id, "action: TOGGLE_TODO");
        TodoAction::ToggleTodo { id }
    }

    /// Creates a `SetVisibilityFilter` action
    ///
    /// Any token is accepted.
    #[must_use]
    pub fn set_visibility_filter(&self, filter: VisibilityFilter) -> TodoAction {
        tracing::debug!(%filter, "action: SET_VISIBILITY_FILTER");
        TodoAction::SetVisibilityFilter { filter }
    }
}

impl std::fmt::Debug for ActionFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionFactory").finish_non_exhaustive()
    }
}
