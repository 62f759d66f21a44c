//! Menu input module (engine-facing).
//!
//! This module is intentionally independent of any terminal library. It maps
//! raw input lines into [`crate::types::MenuAction`] and provides a line-based
//! reader over any `BufRead` source.

pub mod map;
pub mod reader;

pub use tetris_stack_types as types;

pub use map::{parse_menu_line, MenuChoice};
pub use reader::MenuReader;
