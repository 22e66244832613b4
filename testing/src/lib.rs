//! # Composable Todos Testing
//!
//! Testing utilities and helpers for the composable todos architecture.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - The [`ReducerTest`] Given-When-Then harness
//! - Assertion helpers for reducer effects
//!
//! ## Example
//!
//! ```ignore
//! use composable_todos_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(TodosReducer::new())
//!     .with_env(())
//!     .given_state(TodoList::new())
//!     .when_action(TodoAction::ToggleTodo { id: TodoId::new(0) })
//!     .then_state(|list| assert!(list.is_empty()))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use composable_todos_core::environment::IdGenerator;

/// Given-When-Then harness for reducers
pub mod reducer_test;

/// Mock implementations of Environment traits
pub mod mocks {
    use super::IdGenerator;
    use std::sync::Mutex;

    /// Id generator handing out a predictable sequence
    ///
    /// Starts at a chosen value and counts up by one, like the production
    /// generator, but lets tests inspect how many ids were taken.
    ///
    /// # Example
    ///
    /// ```
    /// use composable_todos_testing::mocks::SequentialIdGenerator;
    /// use composable_todos_core::environment::IdGenerator;
    ///
    /// let ids = SequentialIdGenerator::starting_at(10);
    /// assert_eq!(ids.next(), 10);
    /// assert_eq!(ids.next(), 11);
    /// assert_eq!(ids.issued(), vec![10, 11]);
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        issued: Mutex<Vec<u64>>,
        first: u64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is 0
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(0)
        }

        /// Create a generator whose first id is `first`
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self {
                issued: Mutex::new(Vec::new()),
                first,
            }
        }

        /// Every id handed out so far, in order
        #[must_use]
        pub fn issued(&self) -> Vec<u64> {
            self.issued
                .lock()
                .map(|ids| ids.clone())
                .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next(&self) -> u64 {
            let mut issued = self
                .issued
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            let id = issued.last().map_or(self.first, |last| last + 1);
            issued.push(id);
            id
        }
    }

    /// Id generator that always returns the same id
    ///
    /// Useful for exercising code paths that must cope with duplicate ids
    /// arriving from outside the action factory.
    #[derive(Debug, Clone, Copy)]
    pub struct FixedIdGenerator(pub u64);

    impl IdGenerator for FixedIdGenerator {
        fn next(&self) -> u64 {
            self.0
        }
    }
}

// Re-export commonly used items
pub use mocks::{FixedIdGenerator, SequentialIdGenerator};
pub use reducer_test::{assertions, ReducerTest};
