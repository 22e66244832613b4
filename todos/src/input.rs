//! Caller-side validation for new todos.
//!
//! Neither the action factory nor the reducer rejects empty text; the form
//! that collects the text does.

use crate::actions::ActionFactory;
use crate::types::TodoAction;
use thiserror::Error;

/// Errors from submitting user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Text is empty or whitespace only
    #[error("todo text cannot be empty")]
    EmptyText,
}

/// The "add todo" input field
///
/// Holds what the user typed until it is submitted.
#[derive(Debug, Clone, Default)]
pub struct AddTodoForm {
    value: String,
}

impl AddTodoForm {
    /// Creates an empty form
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: String::new(),
        }
    }

    /// Replaces the field contents
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Current field contents
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Turns the field contents into an `AddTodo` action and clears the field
    ///
    /// The text is passed on exactly as typed; it is only required to contain
    /// something other than whitespace. On error the field is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::EmptyText`] if the field is blank.
    pub fn submit(&mut self, factory: &ActionFactory) -> Result<TodoAction, InputError> {
        if self.value.trim().is_empty() {
            return Err(InputError::EmptyText);
        }

        let text = std::mem::take(&mut self.value);
        Ok(factory.add_todo(text))
    }
}
