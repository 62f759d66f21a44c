//! QueueView: maps queue contents and session outcomes into styled text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::PieceQueue;
use crate::style::{piece_color, TextStyle, DIM_COLOR, ERROR_COLOR, WARNING_COLOR};
use crate::types::Piece;

/// Width of the separator printed after every menu round.
pub const SEPARATOR_WIDTH: usize = 51;

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: TextStyle,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::PLAIN,
        }
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// `[T 3]` in the piece's color.
    pub fn piece(piece: Piece) -> Self {
        Self::styled(piece.to_string(), TextStyle::fg(piece_color(piece.kind)).bold())
    }
}

/// One console line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![Span::plain(text)])
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self::new(vec![Span::styled(text, style)])
    }

    /// Concatenated text without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Text layout for the queue menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueueView;

impl QueueView {
    /// `Piece queue: [I 0] [O 1] ...` or `Piece queue: [ EMPTY ]`.
    pub fn queue_line<const N: usize>(&self, queue: &PieceQueue<N>) -> Line {
        let mut spans = vec![Span::plain("Piece queue: ")];
        let pieces = queue.snapshot();
        if pieces.is_empty() {
            spans.push(Span::styled("[ EMPTY ]", TextStyle::fg(DIM_COLOR)));
            return Line::new(spans);
        }

        for (i, &piece) in pieces.iter().enumerate() {
            if i > 0 {
                spans.push(Span::plain(" "));
            }
            spans.push(Span::piece(piece));
        }
        Line::new(spans)
    }

    pub fn menu_lines(&self) -> [Line; 4] {
        [
            Line::plain("Actions:"),
            Line::plain("1 - Play piece (dequeue)"),
            Line::plain("2 - Insert new piece (enqueue)"),
            Line::plain("0 - Exit"),
        ]
    }

    /// Printed without a trailing newline.
    pub fn prompt(&self) -> Line {
        Line::plain("Choose: ")
    }

    pub fn played_line(&self, piece: Piece) -> Line {
        Line::new(vec![
            Span::plain(">>> You played piece: "),
            Span::piece(piece),
            Span::plain(" <<<"),
        ])
    }

    pub fn queue_empty_line(&self) -> Line {
        Line::styled(
            "[ERROR] There are no pieces in the queue to play!",
            TextStyle::fg(ERROR_COLOR).bold(),
        )
    }

    pub fn queue_full_line(&self) -> Line {
        Line::styled(
            "[WARNING] The piece queue is full! Cannot add more.",
            TextStyle::fg(WARNING_COLOR).bold(),
        )
    }

    pub fn invalid_option_line(&self) -> Line {
        Line::styled("[!] Invalid option! Try again.", TextStyle::fg(WARNING_COLOR))
    }

    pub fn startup_line(&self) -> Line {
        Line::plain("Initializing Tetris Stack...")
    }

    pub fn exit_line(&self) -> Line {
        Line::plain("Exiting Tetris Stack. Goodbye!")
    }

    pub fn separator_line(&self) -> Line {
        Line::styled("-".repeat(SEPARATOR_WIDTH), TextStyle::fg(DIM_COLOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn empty_queue_line() {
        let q: PieceQueue = PieceQueue::new();
        assert_eq!(QueueView.queue_line(&q).text(), "Piece queue: [ EMPTY ]");
    }

    #[test]
    fn queue_line_lists_front_to_back() {
        let mut q: PieceQueue = PieceQueue::new();
        q.enqueue(Piece::new(PieceKind::I, 0)).unwrap();
        q.enqueue(Piece::new(PieceKind::O, 1)).unwrap();
        q.enqueue(Piece::new(PieceKind::T, 2)).unwrap();
        let _ = q.dequeue();

        let line = QueueView.queue_line(&q);
        assert_eq!(line.text(), "Piece queue: [O 1] [T 2]");
        assert_eq!(line.spans[1].style.fg, Some(piece_color(PieceKind::O)));
    }

    #[test]
    fn played_line_text() {
        let line = QueueView.played_line(Piece::new(PieceKind::L, 7));
        assert_eq!(line.text(), ">>> You played piece: [L 7] <<<");
    }

    #[test]
    fn separator_width() {
        assert_eq!(QueueView.separator_line().text().len(), SEPARATOR_WIDTH);
    }
}
