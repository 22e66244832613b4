//! Interactive todo list on the terminal.
//!
//! Reads commands from stdin, dispatches actions through the store and
//! re-renders the list after every change.

use composable_todos_core::environment::AtomicIdGenerator;
use std::sync::Arc;
use std::time::Duration;
use todos::cli::{Command, HELP};
use todos::config::Config;
use todos::input::AddTodoForm;
use todos::{view, ActionFactory, AppState, TodoAction, TodosStore};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(?config, "starting todos");

    let factory = ActionFactory::new(Arc::new(AtomicIdGenerator::new()));
    let store = todos::app::store(
        AppState::with_filter(config.initial_filter.clone()),
        config.broadcast_capacity,
    );
    let mut form = AddTodoForm::new();

    println!("{HELP}\n");
    println!("{}", store.state(view::render).await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(todos::cli::CommandError::Empty) => continue,
            Err(error) => {
                println!("{error}");
                continue;
            },
        };

        let action = match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            },
            Command::List => {
                println!("{}", store.state(view::render).await);
                continue;
            },
            Command::Add(text) => {
                form.set_value(text);
                match form.submit(&factory) {
                    Ok(action) => action,
                    Err(error) => {
                        println!("{error}");
                        continue;
                    },
                }
            },
            Command::Toggle(id) => factory.toggle_todo(id),
            Command::Filter(filter) => factory.set_visibility_filter(filter),
            Command::Json(json) => match TodoAction::from_json(&json) {
                Ok(action) => action,
                Err(error) => {
                    println!("{error}");
                    continue;
                },
            },
        };

        dispatch(&store, action).await?;
    }

    store.shutdown(Duration::from_secs(1)).await?;
    Ok(())
}

/// Sends `action` and re-renders
async fn dispatch(store: &TodosStore, action: TodoAction) -> anyhow::Result<()> {
    let before = store.state(|s| s.clone()).await;
    store.send(action).await?;
    let after = store.state(|s| s.clone()).await;

    if before.visibility_filter == after.visibility_filter
        && todos::TodoList::ptr_eq(&before.todos, &after.todos)
    {
        println!("(no change)");
    } else {
        println!("{}", view::render(&after));
    }
    Ok(())
}
