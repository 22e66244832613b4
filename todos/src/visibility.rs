//! Reducer for the visibility filter.
//!
//! Independent of the items reducer: it owns only the filter token and
//! reacts only to `SetVisibilityFilter`.

use crate::types::{TodoAction, VisibilityFilter};
use composable_todos_core::{effect::Effect, reducer::Reducer, SmallVec};

/// Reducer owning the current [`VisibilityFilter`]
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityFilterReducer;

impl VisibilityFilterReducer {
    /// Creates a new `VisibilityFilterReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for VisibilityFilterReducer {
    type State = VisibilityFilter;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        if let TodoAction::SetVisibilityFilter { filter } = action {
            tracing::trace!(%filter, "visibility filter changed");
            *state = filter;
        }
        SmallVec::new()
    }
}
