//! Terminal text module.
//!
//! A small rendering layer for the line-based queue menu. Views build styled
//! lines without touching the terminal; the renderer encodes them with
//! crossterm and flushes them to any writer.
//!
//! Goals:
//! - Keep `core` free of I/O
//! - Make console text testable as plain strings
//! - Color each piece tag by its shape

pub mod renderer;
pub mod style;
pub mod view;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use renderer::{encode_line_into, ConsoleRenderer};
pub use style::{piece_color, Rgb, TextStyle};
pub use view::{Line, QueueView, Span, SEPARATOR_WIDTH};
