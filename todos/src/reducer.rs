//! Reducer logic for the todo items.
//!
//! [`reduce`] is the pure transition function. [`TodosReducer`] adapts it to
//! the [`Reducer`] trait so a store can own the list.

use crate::types::{TodoAction, TodoItem, TodoList};
use composable_todos_core::{effect::Effect, reducer::Reducer, SmallVec};

/// Computes the next list from the previous list and an action
///
/// | Action | Result |
/// |---|---|
/// | `AddTodo` | new list with the item appended, not completed |
/// | `ToggleTodo` | new list with matching items flipped (content-equal if none match) |
/// | `SetVisibilityFilter`, `Unknown` | `state` itself ([`TodoList::ptr_eq`] holds) |
///
/// `state` and `action` are never modified.
#[must_use]
pub fn reduce(state: &TodoList, action: &TodoAction) -> TodoList {
    tracing::trace!(kind = action.kind(), "reduce todos");

    match action {
        TodoAction::AddTodo { id, text } => state.appended(TodoItem::new(*id, text.clone())),
        TodoAction::ToggleTodo { id } => state.toggled(*id),
        // Filter state belongs to the visibility filter reducer
        TodoAction::SetVisibilityFilter { .. } | TodoAction::Unknown => state.clone(),
    }
}

/// Reducer owning a [`TodoList`]
#[derive(Clone, Copy, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodosReducer {
    type State = TodoList;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        *state = reduce(state, &action);
        SmallVec::new()
    }
}
