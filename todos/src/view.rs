//! Read-only projections of the state for display.

use crate::app::AppState;
use crate::types::{TodoItem, TodoList, VisibilityFilter};
use std::fmt::Write as _;

/// How a visibility filter token is interpreted for display
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    /// Every item
    All,
    /// Completed items only
    Completed,
    /// Items not yet completed
    Active,
}

impl FilterMode {
    /// Interprets a filter token; unrecognised tokens show everything
    #[must_use]
    pub fn from_filter(filter: &VisibilityFilter) -> Self {
        match filter.as_str() {
            VisibilityFilter::SHOW_COMPLETED => Self::Completed,
            VisibilityFilter::SHOW_ACTIVE => Self::Active,
            VisibilityFilter::SHOW_ALL => Self::All,
            other => {
                tracing::debug!(filter = other, "unrecognised visibility filter, showing all");
                Self::All
            },
        }
    }

    /// Whether `item` is shown in this mode
    #[must_use]
    pub const fn shows(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Completed => item.completed,
            Self::Active => !item.completed,
        }
    }
}

/// Items shown under `filter`, in creation order
#[must_use]
pub fn visible_todos<'a>(todos: &'a TodoList, filter: &VisibilityFilter) -> Vec<&'a TodoItem> {
    let mode = FilterMode::from_filter(filter);
    todos.iter().filter(|item| mode.shows(item)).collect()
}

/// One line for an item: `[x] #0 buy milk`
#[must_use]
pub fn render_item(item: &TodoItem) -> String {
    let mark = if item.completed { 'x' } else { ' ' };
    format!("[{mark}] #{} {}", item.id, item.text)
}

/// The visible list followed by a filter footer
#[must_use]
pub fn render(state: &AppState) -> String {
    let mut out = String::new();

    let visible = visible_todos(&state.todos, &state.visibility_filter);
    if visible.is_empty() {
        out.push_str("(nothing to show)\n");
    }
    for item in visible {
        out.push_str(&render_item(item));
        out.push('\n');
    }

    let _ = write!(
        out,
        "{}/{} completed | Show: ",
        state.todos.completed_count(),
        state.todos.len()
    );
    let current = FilterMode::from_filter(&state.visibility_filter);
    let links = [
        (FilterMode::All, "All"),
        (FilterMode::Active, "Active"),
        (FilterMode::Completed, "Completed"),
    ]
    .map(|(mode, label)| {
        if mode == current {
            format!("[{label}]")
        } else {
            label.to_string()
        }
    });
    out.push_str(&links.join(" "));

    out
}
