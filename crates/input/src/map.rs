//! Mapping from raw menu lines to menu actions.

use crate::types::MenuAction;

/// Result of interpreting one line of menu input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    /// A recognised menu code
    Action(MenuAction),
    /// Anything else; carries the trimmed line for reporting
    Invalid(String),
}

/// Map one input line to a menu choice.
///
/// Surrounding whitespace is ignored and the remainder must be a single
/// integer (`+`/`-` sign allowed). `"1"`, `" 2 "` and `"+0"` are actions;
/// `""`, `"x"`, `"1 2"` and `"9"` are invalid.
pub fn parse_menu_line(line: &str) -> MenuChoice {
    let trimmed = line.trim();
    match trimmed.parse::<i64>().ok().and_then(MenuAction::from_code) {
        Some(action) => MenuChoice::Action(action),
        None => MenuChoice::Invalid(trimmed.to_string()),
    }
}
