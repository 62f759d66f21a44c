//! Tetris Stack (workspace facade crate).
//!
//! This package exposes `tetris_stack::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`, plus the menu
//! [`driver`] used by the binary.

pub mod driver;

pub use tetris_stack_core as core;
pub use tetris_stack_engine as engine;
pub use tetris_stack_input as input;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;

pub use driver::Driver;
