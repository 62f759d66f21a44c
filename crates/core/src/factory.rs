//! Piece factory - shapes from the RNG, ids from an owned counter.

use crate::rng::SimpleRng;
use crate::types::{Piece, PieceKind, PIECE_KIND_COUNT};

/// Generates upcoming pieces.
///
/// Each call picks one of the seven shapes uniformly and stamps it with the
/// next id. The counter lives in the factory, so two factories never share a counter
/// and a fresh factory always starts at 0. Ids are `u64`; the counter cannot
/// wrap within any realistic session, so ids never repeat.
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: SimpleRng,
    next_id: u64,
}

impl PieceFactory {
    /// Create a factory whose RNG is seeded once with `seed`.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 0,
        }
    }

    /// Generate the next piece.
    pub fn generate(&mut self) -> Piece {
        let kind = PieceKind::from_index(self.rng.next_range(PIECE_KIND_COUNT as u32) as usize);
        let id = self.next_id;
        self.next_id += 1;
        Piece::new(kind, id)
    }

    /// Id the next generated piece will carry.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new(1)
    }
}
