//! Property tests for the piece queue.
//!
//! Random enqueue/dequeue scripts run against both the circular queue and a
//! `VecDeque` model with the same capacity.
//!
//! Invariants covered:
//! - `len()` stays within `0..=capacity`.
//! - Full and empty are never reported together.
//! - Dequeue order equals enqueue order.
//! - Rejected operations leave the snapshot unchanged.
//! - Two snapshots without a mutation in between are equal.

use std::collections::VecDeque;

use proptest::prelude::*;
use tetris_stack::core::{PieceFactory, PieceQueue, QueueError};
use tetris_stack::types::{Piece, PREVIEW_CAPACITY};

#[derive(Debug, Clone, Copy)]
enum Op {
    Enqueue,
    Dequeue,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Enqueue), Just(Op::Dequeue)]
}

fn as_vec(queue: &PieceQueue) -> Vec<Piece> {
    queue.snapshot().to_vec()
}

proptest! {
    #[test]
    fn queue_matches_model(seed in any::<u32>(), ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut factory = PieceFactory::new(seed);
        let mut queue: PieceQueue = PieceQueue::new();
        let mut model: VecDeque<Piece> = VecDeque::with_capacity(PREVIEW_CAPACITY);

        for op in ops {
            let before = as_vec(&queue);
            match op {
                Op::Enqueue => {
                    let piece = factory.generate();
                    let result = queue.enqueue(piece);
                    if model.len() == PREVIEW_CAPACITY {
                        prop_assert_eq!(result, Err(QueueError::Full(piece)));
                        prop_assert_eq!(as_vec(&queue), before);
                    } else {
                        prop_assert_eq!(result, Ok(()));
                        model.push_back(piece);
                    }
                }
                Op::Dequeue => {
                    let result = queue.dequeue();
                    match model.pop_front() {
                        Some(expected) => prop_assert_eq!(result, Ok(expected)),
                        None => {
                            prop_assert_eq!(result, Err(QueueError::Empty));
                            prop_assert_eq!(as_vec(&queue), before);
                        }
                    }
                }
            }

            prop_assert!(queue.len() <= PREVIEW_CAPACITY);
            prop_assert!(!(queue.is_full() && queue.is_empty()));
            prop_assert!(queue.head() < PREVIEW_CAPACITY && queue.tail() < PREVIEW_CAPACITY);
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(as_vec(&queue), model.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(queue.snapshot(), queue.snapshot());
        }
    }

    #[test]
    fn generated_ids_are_sequential(seed in any::<u32>(), n in 1usize..500) {
        let mut factory = PieceFactory::new(seed);
        for expected in 0..n as u64 {
            prop_assert_eq!(factory.generate().id, expected);
        }
    }
}
