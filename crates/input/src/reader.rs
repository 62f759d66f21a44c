//! Line-based menu reader.
//!
//! Reads one whole line per prompt, so stray characters never leak into the
//! next prompt. Lines are read as raw bytes; bytes that are not UTF-8 make the
//! line an invalid choice rather than a read error.

use std::io::BufRead;

use anyhow::Result;

use crate::map::{parse_menu_line, MenuChoice};
use crate::types::MenuAction;

/// Pulls menu choices from any buffered reader (stdin in the binary, byte
/// slices in tests).
#[derive(Debug)]
pub struct MenuReader<R> {
    inner: R,
    line: Vec<u8>,
}

impl<R: BufRead> MenuReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: Vec::with_capacity(64),
        }
    }

    /// Read the next choice.
    ///
    /// End of input is reported as [`MenuAction::Exit`].
    pub fn next_choice(&mut self) -> Result<MenuChoice> {
        self.line.clear();
        let n = self.inner.read_until(b'\n', &mut self.line)?;
        if n == 0 {
            return Ok(MenuChoice::Action(MenuAction::Exit));
        }
        Ok(parse_menu_line(&String::from_utf8_lossy(&self.line)))
    }
}
