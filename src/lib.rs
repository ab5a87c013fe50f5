//! hello-todo: greets the user and lists the todos kept in a text file
//!
//! The todo file is optional; a missing file is reported as a fresh start.

/// Run configuration and the top level sequence
pub mod app;

/// Command line arguments
pub mod cli;

/// Fixed greeting and farewell lines
pub mod greeting;

/// Tracing subscriber setup
pub mod logging;

/// Where todo text is read from
pub mod source;

/// Parsing and printing the todo list
pub mod todos;

pub use app::{run, Config};
pub use source::{FileSource, MemorySource, SourceError, TodoSource};
pub use todos::{TodoList, TodoView};
