//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (queue logic, console rendering, input mapping).
//!
//! # Preview Buffer
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PREVIEW_CAPACITY` | 5 | Number of upcoming pieces held in the queue |
//! | `PIECE_KIND_COUNT` | 7 | Number of distinct tetromino shapes |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{MenuAction, Piece, PieceKind, PREVIEW_CAPACITY};
//!
//! // Shapes in selection order
//! let kind = PieceKind::from_index(2);
//! assert_eq!(kind, PieceKind::T);
//!
//! // Pieces pair a shape with a generation id
//! let piece = Piece::new(kind, 3);
//! assert_eq!(piece.to_string(), "[T 3]");
//!
//! // Menu codes
//! assert_eq!(MenuAction::from_code(1), Some(MenuAction::Play));
//!
//! assert_eq!(PREVIEW_CAPACITY, 5);
//! ```

use std::fmt;

/// Number of upcoming pieces held in the preview queue
pub const PREVIEW_CAPACITY: usize = 5;

/// Number of distinct piece kinds
pub const PIECE_KIND_COUNT: usize = 7;

/// The seven tetromino piece kinds
///
/// Declaration order is the selection order used by the piece factory:
/// I, O, T, L, J, S, Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceKind {
    #[default]
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in selection order.
    pub const ALL: [PieceKind; PIECE_KIND_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Map an index in `0..7` to a kind (wraps for larger values).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % PIECE_KIND_COUNT]
    }

    /// Uppercase letter used on the console.
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }

    /// Uppercase string representation (for logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An upcoming piece: a shape plus its generation id.
///
/// Ids are assigned by the piece factory and never repeat within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.as_char(), self.id)
    }
}

/// Actions offered by the interactive menu
///
/// Numeric codes follow the menu: `1` play, `2` insert, `0` exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Consume the front piece (dequeue)
    Play,
    /// Generate a new piece and append it (enqueue)
    Insert,
    /// Leave the menu loop
    Exit,
}

impl MenuAction {
    /// Parse a numeric menu code
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::MenuAction;
    ///
    /// assert_eq!(MenuAction::from_code(2), Some(MenuAction::Insert));
    /// assert_eq!(MenuAction::from_code(0), Some(MenuAction::Exit));
    /// assert_eq!(MenuAction::from_code(7), None);
    /// ```
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(MenuAction::Play),
            2 => Some(MenuAction::Insert),
            0 => Some(MenuAction::Exit),
            _ => None,
        }
    }
}
