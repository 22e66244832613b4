//! Reducer composition utilities
//!
//! - **`combine_reducers`**: Run several reducers over the same state and action
//! - **`scope_reducer`**: Focus a reducer on one slice of a larger state
//!
//! Together they let independent feature reducers (each owning its own slice)
//! be assembled into one application reducer, every reducer seeing every action.
//!
//! # Example
//!
//! ```
//! use composable_todos_core::composition::{combine_reducers, scope_reducer};
//! use composable_todos_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! #[derive(Clone, Debug)]
//! enum Msg {
//!     Push(u32),
//!     Rename(String),
//! }
//!
//! #[derive(Clone, Default)]
//! struct App {
//!     values: Vec<u32>,
//!     label: String,
//! }
//!
//! struct ValuesReducer;
//!
//! impl Reducer for ValuesReducer {
//!     type State = Vec<u32>;
//!     type Action = Msg;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut Vec<u32>, action: Msg, _env: &()) -> SmallVec<[Effect<Msg>; 4]> {
//!         if let Msg::Push(value) = action {
//!             state.push(value);
//!         }
//!         SmallVec::new()
//!     }
//! }
//!
//! struct LabelReducer;
//!
//! impl Reducer for LabelReducer {
//!     type State = String;
//!     type Action = Msg;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut String, action: Msg, _env: &()) -> SmallVec<[Effect<Msg>; 4]> {
//!         if let Msg::Rename(label) = action {
//!             *state = label;
//!         }
//!         SmallVec::new()
//!     }
//! }
//!
//! let app = combine_reducers(vec![
//!     Box::new(scope_reducer(
//!         ValuesReducer,
//!         |app: &App| &app.values,
//!         |app: &mut App, values| app.values = values,
//!     )),
//!     Box::new(scope_reducer(
//!         LabelReducer,
//!         |app: &App| &app.label,
//!         |app: &mut App, label| app.label = label,
//!     )),
//! ]);
//!
//! let mut state = App::default();
//! let _ = app.reduce(&mut state, Msg::Push(7), &());
//! let _ = app.reduce(&mut state, Msg::Rename("week".to_string()), &());
//! assert_eq!(state.values, vec![7]);
//! assert_eq!(state.label, "week");
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// Boxed reducer over a shared state, action and environment.
pub type BoxedReducer<S, A, E> = Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in order, and all effects are collected and concatenated.
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    /// Number of reducers combined
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Whether no reducers were combined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// The child state is cloned out, reduced, and written back, so child
/// states should be cheap to clone.
pub fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<fn() -> (A, E)>,
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut sub_state = (self.get_state)(state).clone();

        let effects = self.reducer.reduce(&mut sub_state, action, env);

        (self.set_state)(state, sub_state);

        effects
    }
}
