//! Todo list state core.
//!
//! A todo list driven by unidirectional data flow:
//!
//! - [`ActionFactory`] turns user intents into [`TodoAction`]s, assigning
//!   ids from an injected id generator
//! - [`reduce`] is the pure `(list, action) -> list` transition
//! - [`VisibilityFilterReducer`] owns the display filter
//! - [`app`] composes both into one store-backed application
//! - [`view`] projects state for display
//!
//! # Quick Start
//!
//! ```
//! use composable_todos_core::environment::AtomicIdGenerator;
//! use std::sync::Arc;
//! use todos::{reduce, ActionFactory, TodoList};
//!
//! let factory = ActionFactory::new(Arc::new(AtomicIdGenerator::new()));
//!
//! let list = TodoList::new();
//! let list = reduce(&list, &factory.add_todo("buy milk"));
//! let list = reduce(&list, &factory.add_todo("walk dog"));
//! let list = reduce(&list, &factory.toggle_todo(todos::TodoId::new(0)));
//!
//! let done: Vec<_> = list.iter().map(|t| (t.text.as_str(), t.completed)).collect();
//! assert_eq!(done, vec![("buy milk", true), ("walk dog", false)]);
//! ```

pub mod actions;
pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod reducer;
pub mod types;
pub mod view;
pub mod visibility;

// Re-export commonly used types
pub use actions::ActionFactory;
pub use app::{AppState, TodosStore};
pub use reducer::{reduce, TodosReducer};
pub use types::{ActionDecodeError, TodoAction, TodoId, TodoItem, TodoList, VisibilityFilter};
pub use visibility::VisibilityFilterReducer;
