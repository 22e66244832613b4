//! Application state: the items and the visibility filter, side by side.
//!
//! Each slice has its own reducer; [`app_reducer`] scopes them onto
//! [`AppState`] and combines them so every action reaches both.

use crate::reducer::TodosReducer;
use crate::types::{TodoAction, TodoList, VisibilityFilter};
use crate::visibility::VisibilityFilterReducer;
use composable_todos_core::composition::{combine_reducers, scope_reducer, CombinedReducer};
use composable_todos_runtime::Store;

/// Whole-application state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// Todo items, in creation order
    pub todos: TodoList,
    /// Current display filter
    pub visibility_filter: VisibilityFilter,
}

impl AppState {
    /// Empty list shown through `filter`
    #[must_use]
    pub fn with_filter(filter: VisibilityFilter) -> Self {
        Self {
            todos: TodoList::new(),
            visibility_filter: filter,
        }
    }
}

/// The composed application reducer
pub type AppReducer = CombinedReducer<AppState, TodoAction, ()>;

/// Store holding the application state
pub type TodosStore = Store<AppState, TodoAction, (), AppReducer>;

/// Builds the application reducer from the two slice reducers
#[must_use]
pub fn app_reducer() -> AppReducer {
    combine_reducers(vec![
        Box::new(scope_reducer(
            TodosReducer::new(),
            |app: &AppState| &app.todos,
            |app: &mut AppState, todos| app.todos = todos,
        )),
        Box::new(scope_reducer(
            VisibilityFilterReducer::new(),
            |app: &AppState| &app.visibility_filter,
            |app: &mut AppState, filter| app.visibility_filter = filter,
        )),
    ])
}

/// Creates a store seeded with `initial` and driven by [`app_reducer`]
///
/// # Panics
///
/// Panics if `broadcast_capacity` is 0.
#[must_use]
pub fn store(initial: AppState, broadcast_capacity: usize) -> TodosStore {
    Store::with_broadcast_capacity(initial, app_reducer(), (), broadcast_capacity)
}
