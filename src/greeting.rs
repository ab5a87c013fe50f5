use std::io::{self, Write};

pub const GREETING: &str = "hi";
pub const WELCOME: &str = "Welcome to Todo2 - Your simple todo manager!";
pub const FAREWELL: &str = "Have a great day! 👋";

/// Greeting, welcome sentence and a blank line
pub fn greet_user<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{GREETING}")?;
    writeln!(out, "{WELCOME}")?;
    writeln!(out)
}

pub fn say_goodbye<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{FAREWELL}")
}
