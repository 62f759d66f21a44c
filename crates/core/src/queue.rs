//! Piece queue - fixed-capacity circular FIFO of upcoming pieces
//!
//! Storage is a flat `[Piece; N]` addressed modulo `N`. `head` is the front
//! slot, `tail` the next insertion slot, and `count` the number of live pieces.
//! The live range is `head, head + 1, ..., head + count - 1` (mod `N`); every
//! other slot holds stale data and is never read.
//!
//! Full and empty are ordinary outcomes, returned as [`QueueError`] values.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{Piece, PREVIEW_CAPACITY};

/// Rejected queue operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Enqueue on a full queue. Carries the rejected piece back to the caller.
    #[error("piece queue is full, discarded {0}")]
    Full(Piece),
    /// Dequeue on an empty queue.
    #[error("piece queue is empty")]
    Empty,
}

impl QueueError {
    /// The piece that was turned away, if any.
    pub fn into_piece(self) -> Option<Piece> {
        match self {
            QueueError::Full(piece) => Some(piece),
            QueueError::Empty => None,
        }
    }
}

/// Occupancy state, derived from `count` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueState {
    Empty,
    Partial,
    Full,
}

/// Bounded FIFO of upcoming pieces.
#[derive(Debug, Clone)]
pub struct PieceQueue<const N: usize = PREVIEW_CAPACITY> {
    slots: [Piece; N],
    head: usize,
    tail: usize,
    count: usize,
}

impl<const N: usize> PieceQueue<N> {
    /// Create an empty queue (`head = tail = count = 0`).
    pub fn new() -> Self {
        Self {
            slots: [Piece::default(); N],
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    pub fn is_full(&self) -> bool {
        self.count == N
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn state(&self) -> QueueState {
        if self.is_empty() {
            QueueState::Empty
        } else if self.is_full() {
            QueueState::Full
        } else {
            QueueState::Partial
        }
    }

    /// Append `piece` at the back.
    ///
    /// On a full queue nothing changes and the piece comes back inside
    /// [`QueueError::Full`].
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full(piece));
        }

        self.slots[self.tail] = piece;
        self.tail = (self.tail + 1) % N;
        self.count += 1;
        Ok(())
    }

    /// Remove and return the front piece.
    pub fn dequeue(&mut self) -> Result<Piece, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        let piece = self.slots[self.head];
        self.head = (self.head + 1) % N;
        self.count -= 1;
        Ok(piece)
    }

    /// Front piece without removing it.
    pub fn peek(&self) -> Option<Piece> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots[self.head])
        }
    }

    /// Front-to-back copy of the live pieces.
    ///
    /// This is stack-only and does not allocate. The result is computed on
    /// every call and does not track later mutations.
    pub fn snapshot(&self) -> ArrayVec<Piece, N> {
        let mut out = ArrayVec::new();
        for offset in 0..self.count {
            out.push(self.slots[(self.head + offset) % N]);
        }
        out
    }

    /// Slot index of the front piece (for diagnostics and tests).
    pub fn head(&self) -> usize {
        self.head
    }

    /// Slot index the next enqueue writes to.
    pub fn tail(&self) -> usize {
        self.tail
    }
}

impl<const N: usize> Default for PieceQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn piece(id: u64) -> Piece {
        Piece::new(PieceKind::from_index(id as usize), id)
    }

    fn ids<const N: usize>(q: &PieceQueue<N>) -> Vec<u64> {
        q.snapshot().iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_new_queue_is_empty() {
        let q: PieceQueue = PieceQueue::new();
        assert!(q.is_empty());
        assert!(!q.is_full());
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), PREVIEW_CAPACITY);
        assert_eq!(q.state(), QueueState::Empty);
        assert_eq!((q.head(), q.tail()), (0, 0));
        assert!(q.snapshot().is_empty());
    }

    #[test]
    fn test_enqueue_advances_tail() {
        let mut q: PieceQueue = PieceQueue::new();
        q.enqueue(piece(0)).unwrap();
        q.enqueue(piece(1)).unwrap();
        assert_eq!(q.tail(), 2);
        assert_eq!(q.head(), 0);
        assert_eq!(q.state(), QueueState::Partial);
        assert_eq!(q.peek(), Some(piece(0)));
    }

    #[test]
    fn test_full_rejects_and_returns_piece() {
        let mut q: PieceQueue = PieceQueue::new();
        for id in 0..5 {
            q.enqueue(piece(id)).unwrap();
        }
        assert_eq!(q.state(), QueueState::Full);

        let err = q.enqueue(piece(99)).unwrap_err();
        assert_eq!(err, QueueError::Full(piece(99)));
        assert_eq!(err.into_piece(), Some(piece(99)));
        assert_eq!(ids(&q), vec![0, 1, 2, 3, 4]);
        assert_eq!(q.tail(), 0);
    }

    #[test]
    fn test_empty_dequeue_leaves_state() {
        let mut q: PieceQueue = PieceQueue::new();
        assert_eq!(q.dequeue(), Err(QueueError::Empty));
        assert_eq!((q.head(), q.tail(), q.len()), (0, 0, 0));
        assert_eq!(QueueError::Empty.into_piece(), None);
    }

    #[test]
    fn test_wraparound_order() {
        let mut q: PieceQueue = PieceQueue::new();
        for id in 0..5 {
            q.enqueue(piece(id)).unwrap();
        }
        for expected in 0..3 {
            assert_eq!(q.dequeue().unwrap().id, expected);
        }
        for id in 5..8 {
            q.enqueue(piece(id)).unwrap();
        }

        assert_eq!(q.head(), 3);
        assert_eq!(q.tail(), 3);
        assert_eq!(ids(&q), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_drain_after_wrap() {
        let mut q: PieceQueue<3> = PieceQueue::new();
        let mut next = 0;
        let mut out = Vec::new();
        for _ in 0..4 {
            while q.enqueue(piece(next)).is_ok() {
                next += 1;
            }
            out.push(q.dequeue().unwrap().id);
            out.push(q.dequeue().unwrap().id);
        }
        while let Ok(p) = q.dequeue() {
            out.push(p.id);
        }
        assert_eq!(out, (0..next).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_capacity_is_full_and_empty() {
        let mut q: PieceQueue<0> = PieceQueue::new();
        assert!(q.is_full());
        assert!(q.is_empty());
        assert_eq!(q.enqueue(piece(0)), Err(QueueError::Full(piece(0))));
        assert_eq!(q.dequeue(), Err(QueueError::Empty));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(QueueError::Empty.to_string(), "piece queue is empty");
        assert_eq!(
            QueueError::Full(Piece::new(PieceKind::S, 4)).to_string(),
            "piece queue is full, discarded [S 4]"
        );
    }
}
