//! Ergonomic testing utilities for reducers
//!
//! A fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use composable_todos_core::{effect::Effect, reducer::Reducer};

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S, &S)>;

/// Type alias for effect assertion functions
type EffectAssertion<A> = Box<dyn FnOnce(&[Effect<A>])>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// Several actions may be queued with repeated `when_action` calls; they are
/// applied in order and the effects of all of them are collected.
///
/// # Example
///
/// ```ignore
/// use composable_todos_testing::ReducerTest;
///
/// ReducerTest::new(TodosReducer::new())
///     .with_env(())
///     .given_state(TodoList::new())
///     .when_action(TodoAction::AddTodo { id: TodoId::new(0), text: "buy milk".into() })
///     .then_state(|list| assert_eq!(list.len(), 1))
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    actions: Vec<A>,
    state_assertions: Vec<StateAssertion<S>>,
    effect_assertions: Vec<EffectAssertion<A>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    S: Clone,
    A: Clone,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Queue an action to apply (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions
            .push(Box::new(move |_before, after| assertion(after)));
        self
    }

    /// Add an assertion comparing the initial state with the resulting state (Then)
    ///
    /// The closure receives `(before, after)`.
    #[must_use]
    pub fn then_compare<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S, &S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the resulting effects (Then)
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Effect<A>]) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state, an action, or environment is not set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let before = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        assert!(
            !self.actions.is_empty(),
            "At least one action must be set with when_action()"
        );

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        let mut state = before.clone();
        let mut effects = Vec::new();
        for action in self.actions {
            effects.extend(self.reducer.reduce(&mut state, action, &env));
        }

        for assertion in self.state_assertions {
            assertion(&before, &state);
        }

        for assertion in self.effect_assertions {
            assertion(&effects);
        }
    }
}

/// Helper assertions for effects
pub mod assertions {
    use composable_todos_core::effect::Effect;

    /// Assert that there are no effects
    ///
    /// # Panics
    ///
    /// Panics if any effect other than `Effect::None` is present.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().all(|e| matches!(e, Effect::None)),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert the number of effects
    ///
    /// # Panics
    ///
    /// Panics if the number of effects doesn't match expected.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A>(effects: &[Effect<A>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}",
            expected,
            effects.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composable_todos_core::{smallvec, SmallVec};

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        books: Vec<String>,
    }

    #[derive(Clone, Debug)]
    enum ShelfAction {
        Shelve(String),
        Lend,
        Notify,
    }

    struct ShelfReducer;

    impl Reducer for ShelfReducer {
        type State = Shelf;
        type Action = ShelfAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                ShelfAction::Shelve(title) => {
                    state.books.push(title);
                    SmallVec::new()
                },
                ShelfAction::Lend => {
                    state.books.pop();
                    smallvec![Effect::None]
                },
                ShelfAction::Notify => smallvec![Effect::future(async { None })],
            }
        }
    }

    fn empty_shelf() -> Shelf {
        Shelf { books: Vec::new() }
    }

    #[test]
    fn test_single_action() {
        ReducerTest::new(ShelfReducer)
            .with_env(())
            .given_state(empty_shelf())
            .when_action(ShelfAction::Shelve("Dune".to_string()))
            .then_state(|state| {
                assert_eq!(state.books, vec!["Dune".to_string()]);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_actions_apply_in_order() {
        ReducerTest::new(ShelfReducer)
            .with_env(())
            .given_state(empty_shelf())
            .when_action(ShelfAction::Shelve("Emma".to_string()))
            .when_action(ShelfAction::Shelve("Ulysses".to_string()))
            .when_action(ShelfAction::Lend)
            .then_state(|state| {
                assert_eq!(state.books, vec!["Emma".to_string()]);
            })
            .then_effects(|effects| assertions::assert_effects_count(effects, 1))
            .run();
    }

    #[test]
    fn test_compare_sees_untouched_initial_state() {
        ReducerTest::new(ShelfReducer)
            .with_env(())
            .given_state(Shelf {
                books: vec!["Beloved".to_string()],
            })
            .when_action(ShelfAction::Lend)
            .then_compare(|before, after| {
                assert_eq!(before.books.len(), 1);
                assert!(after.books.is_empty());
            })
            .run();
    }

    #[test]
    #[should_panic(expected = "Expected no effects")]
    fn test_assert_no_effects_rejects_future() {
        ReducerTest::new(ShelfReducer)
            .with_env(())
            .given_state(empty_shelf())
            .when_action(ShelfAction::Notify)
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_assertions_no_effects() {
        assertions::assert_no_effects::<ShelfAction>(&[Effect::None]);
        assertions::assert_no_effects::<ShelfAction>(&[]);
    }
}
