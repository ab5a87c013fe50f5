use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::app::Config;
use crate::source::DEFAULT_TODO_FILE;

/// Greets you and lists the todos kept in a plain text file
#[derive(Parser, Debug)]
#[command(name = "hello-todo", author, version, about)]
pub struct Cli {
    /// Todo file to display, one item per line
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        default_value = DEFAULT_TODO_FILE
    )]
    pub file: PathBuf,

    /// Log more on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            todo_file: self.file.clone(),
        }
    }
}
