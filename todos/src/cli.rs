//! Line commands understood by the interactive demo.

use crate::types::{TodoId, VisibilityFilter};
use thiserror::Error;

/// Usage text printed by `help`
pub const HELP: &str = "\
commands:
  add <text>         add a todo
  toggle <id>        toggle a todo
  filter <token>     SHOW_ALL | SHOW_ACTIVE | SHOW_COMPLETED (any token accepted)
  json <action>      dispatch a raw JSON action, e.g. {\"type\":\"TOGGLE_TODO\",\"id\":0}
  list               show the todos
  help               show this text
  quit               exit";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit text through the add form
    Add(String),
    /// Toggle an item
    Toggle(TodoId),
    /// Change the visibility filter
    Filter(VisibilityFilter),
    /// Dispatch a raw JSON action
    Json(String),
    /// Show the current list
    List,
    /// Show usage
    Help,
    /// Exit
    Quit,
}

/// Errors parsing an input line
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing but whitespace
    #[error("empty command")]
    Empty,

    /// First word is not a command
    #[error("unknown command {0:?} (try `help`)")]
    Unknown(String),

    /// Command needs an argument
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    /// `toggle` argument is not an id
    #[error("invalid todo id {0:?}")]
    InvalidId(String),
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));

        match word {
            "" => Err(CommandError::Empty),
            // Add text is passed on untrimmed; the form decides what is blank
            "add" => Ok(Self::Add(rest.to_string())),
            "toggle" => {
                let arg = required(rest, "toggle")?;
                arg.parse()
                    .map(Self::Toggle)
                    .map_err(|_| CommandError::InvalidId(arg.to_string()))
            },
            "filter" => required(rest, "filter").map(|token| Self::Filter(VisibilityFilter::new(token))),
            "json" => required(rest, "json").map(|json| Self::Json(json.to_string())),
            "list" | "ls" => Ok(Self::List),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    let arg = rest.trim();
    if arg.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(arg)
    }
}
