use std::io::Write;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::source::TodoSource;

pub const TODOS_HEADER: &str = "Your current todos:";
pub const STARTING_FRESH: &str = "No todos found. Starting fresh!";

/// Non-blank, trimmed lines of a todo file in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<String>,
}

impl TodoList {
    /// Returns `None` when the content is empty after trimming.
    pub fn parse(content: &str) -> Option<Self> {
        if content.trim().is_empty() {
            return None;
        }

        let items = content
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        Some(Self { items })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{TODOS_HEADER}")?;
        for item in &self.items {
            writeln!(out, "  {item}")?;
        }
        writeln!(out)
    }
}

/// What the todo section of the output shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoView {
    List(TodoList),
    StartingFresh,
    /// File present but blank; nothing is printed
    Blank,
}

impl TodoView {
    pub fn load<S: TodoSource + ?Sized>(source: &S) -> Self {
        let content = match source.read() {
            Ok(Some(content)) => content,
            Ok(None) => {
                info!(source = %source.describe(), "no todo file, starting fresh");
                return TodoView::StartingFresh;
            }
            Err(err) => {
                warn!(source = %source.describe(), "{err}");
                return TodoView::StartingFresh;
            }
        };

        match TodoList::parse(&content) {
            Some(list) => {
                info!(source = %source.describe(), count = list.len(), "loaded todos");
                TodoView::List(list)
            }
            None => {
                debug!(source = %source.describe(), "todo file is blank");
                TodoView::Blank
            }
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self {
            TodoView::List(list) => list.write_to(out),
            TodoView::StartingFresh => {
                writeln!(out, "{STARTING_FRESH}")?;
                writeln!(out)
            }
            TodoView::Blank => Ok(()),
        }
    }
}

/// Load todos from `source` and print them
pub fn display_todos<S, W>(source: &S, out: &mut W) -> Result<()>
where
    S: TodoSource + ?Sized,
    W: Write,
{
    TodoView::load(source).write_to(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{MemorySource, SourceError};

    struct FailingSource;

    impl TodoSource for FailingSource {
        fn read(&self) -> Result<Option<String>, SourceError> {
            Err(SourceError::InvalidUtf8 {
                path: "test".into(),
            })
        }

        fn describe(&self) -> String {
            "test".to_string()
        }
    }

    fn render(source: &dyn TodoSource) -> String {
        let mut out = Vec::new();
        display_todos(source, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_skips_blank_lines_and_trims() {
        let list = TodoList::parse("  buy milk \n\n\t\nwalk dog\r\n").unwrap();
        assert_eq!(list.items(), ["buy milk", "walk dog"]);
    }

    #[test]
    fn parse_blank_content_is_none() {
        assert_eq!(TodoList::parse(""), None);
        assert_eq!(TodoList::parse(" \n\t\n  \n"), None);
    }

    #[test]
    fn lists_todos_under_header() {
        let out = render(&MemorySource::new("buy milk\nwalk dog"));
        assert_eq!(out, "Your current todos:\n  buy milk\n  walk dog\n\n");
    }

    #[test]
    fn missing_source_starts_fresh() {
        let out = render(&MemorySource::missing());
        assert_eq!(out, "No todos found. Starting fresh!\n\n");
    }

    #[test]
    fn blank_source_prints_nothing() {
        let out = render(&MemorySource::new("\n   \n\t"));
        assert!(out.is_empty());
    }

    #[test]
    fn unreadable_source_starts_fresh() {
        let out = render(&FailingSource);
        assert_eq!(out, "No todos found. Starting fresh!\n\n");
    }
}
