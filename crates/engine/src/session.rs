//! Session: one preview queue plus the factory that feeds it, driven by menu
//! actions.

use crate::core::{PieceFactory, PieceQueue};
use crate::types::{MenuAction, Piece, PREVIEW_CAPACITY};

/// What a menu action did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The front piece was removed.
    Played(Piece),
    /// Play was requested on an empty queue.
    NothingToPlay,
    /// A new piece was appended.
    Inserted(Piece),
    /// A new piece was generated but the queue was full; the piece is gone.
    QueueFull(Piece),
    /// The caller should leave its loop.
    Exit,
}

impl Outcome {
    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit)
    }

    /// True when the action was refused (nothing changed in the queue).
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::NothingToPlay | Outcome::QueueFull(_))
    }
}

#[derive(Debug, Clone)]
pub struct Session<const N: usize = PREVIEW_CAPACITY> {
    queue: PieceQueue<N>,
    factory: PieceFactory,
}

impl<const N: usize> Session<N> {
    /// Empty queue, factory seeded once with `seed`.
    pub fn new(seed: u32) -> Self {
        Self {
            queue: PieceQueue::new(),
            factory: PieceFactory::new(seed),
        }
    }

    /// Generate pieces until the queue is full.
    ///
    /// Returns the number inserted: `N` on a fresh session, 0 when already full.
    pub fn prefill(&mut self) -> usize {
        let mut inserted = 0;
        while !self.queue.is_full() {
            if self.queue.enqueue(self.factory.generate()).is_err() {
                break;
            }
            inserted += 1;
        }
        inserted
    }

    pub fn apply(&mut self, action: MenuAction) -> Outcome {
        match action {
            MenuAction::Play => self.play(),
            MenuAction::Insert => self.insert(),
            MenuAction::Exit => Outcome::Exit,
        }
    }

    fn play(&mut self) -> Outcome {
        match self.queue.dequeue() {
            Ok(piece) => Outcome::Played(piece),
            Err(_) => Outcome::NothingToPlay,
        }
    }

    fn insert(&mut self) -> Outcome {
        let piece = self.factory.generate();
        match self.queue.enqueue(piece) {
            Ok(()) => Outcome::Inserted(piece),
            Err(e) => Outcome::QueueFull(e.into_piece().unwrap_or(piece)),
        }
    }

    pub fn queue(&self) -> &PieceQueue<N> {
        &self.queue
    }

    pub fn factory(&self) -> &PieceFactory {
        &self.factory
    }
}
