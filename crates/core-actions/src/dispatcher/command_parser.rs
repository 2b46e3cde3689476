//! Command line parsing.
//!
//! Converts the text typed after `:` into a `ParsedCommand`. Pure
//! classification with no side effects; the command handler performs IO and
//! state changes.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// Blank command line.
    Empty,
    Quit,
    ForceQuit,
    /// `w` or `w <name>`.
    Write(Option<PathBuf>),
    /// `wq` / `x`.
    WriteQuit,
    Edit(PathBuf),
    Help,
    /// 1-based line number.
    GotoLine(usize),
    Unknown(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &str) -> ParsedCommand {
        let body = raw.trim();
        match body {
            "" => return ParsedCommand::Empty,
            "q" => return ParsedCommand::Quit,
            "q!" => return ParsedCommand::ForceQuit,
            "w" => return ParsedCommand::Write(None),
            "wq" | "x" => return ParsedCommand::WriteQuit,
            "help" => return ParsedCommand::Help,
            _ => {}
        }
        if let Some(name) = argument(body, "w") {
            return ParsedCommand::Write(Some(PathBuf::from(name)));
        }
        if let Some(name) = argument(body, "e") {
            return ParsedCommand::Edit(PathBuf::from(name));
        }
        if let Some(line) = leading_number(body) {
            return ParsedCommand::GotoLine(line);
        }
        ParsedCommand::Unknown(body.to_string())
    }
}

/// `<cmd> <arg>` with at least one space; returns the trimmed argument.
fn argument<'a>(body: &'a str, cmd: &str) -> Option<&'a str> {
    let rest = body.strip_prefix(cmd)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let arg = rest.trim();
    (!arg.is_empty()).then_some(arg)
}

/// Leading decimal digits (`"12abc"` -> 12). Saturates on overflow.
fn leading_number(body: &str) -> Option<usize> {
    let digits: &str = &body[..body
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(body.len())];
    if digits.is_empty() {
        return None;
    }
    Some(
        digits
            .bytes()
            .fold(0usize, |n, d| n.saturating_mul(10).saturating_add((d - b'0') as usize)),
    )
}
