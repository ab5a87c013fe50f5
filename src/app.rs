use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::greeting::{greet_user, say_goodbye};
use crate::source::{FileSource, TodoSource, DEFAULT_TODO_FILE};
use crate::todos::display_todos;

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub todo_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            todo_file: PathBuf::from(DEFAULT_TODO_FILE),
        }
    }
}

impl Config {
    pub fn source(&self) -> FileSource {
        FileSource::new(&self.todo_file)
    }
}

/// Greet, show the todos from `source`, say goodbye.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails
pub fn run<S, W>(source: &S, out: &mut W) -> Result<()>
where
    S: TodoSource + ?Sized,
    W: Write,
{
    debug!(source = %source.describe(), "starting");

    greet_user(out).context("failed to write greeting")?;
    display_todos(source, out).context("failed to write todos")?;
    say_goodbye(out).context("failed to write farewell")?;
    out.flush().context("failed to flush output")?;

    Ok(())
}
