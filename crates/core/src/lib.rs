//! Core queue logic - pure, deterministic, and testable
//!
//! This crate holds the "next pieces" preview buffer and the generator that
//! feeds it. It has **zero dependencies** on terminals or files, making it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Every queue transition is covered by unit tests
//! - **Allocation-free**: Storage and snapshots live on the stack
//!
//! # Module Structure
//!
//! - [`queue`]: fixed-capacity circular FIFO with wraparound indices
//! - [`factory`]: piece generation with a monotonic id counter
//! - [`rng`]: seeded LCG used by the factory
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{PieceFactory, PieceQueue, QueueError};
//!
//! let mut factory = PieceFactory::new(12345);
//! let mut queue: PieceQueue = PieceQueue::new();
//!
//! // Pre-fill to capacity
//! while !queue.is_full() {
//!     queue.enqueue(factory.generate()).unwrap();
//! }
//!
//! // One more is turned away
//! let extra = factory.generate();
//! assert_eq!(queue.enqueue(extra), Err(QueueError::Full(extra)));
//!
//! // Play the front piece
//! assert_eq!(queue.dequeue().unwrap().id, 0);
//! assert_eq!(queue.len(), 4);
//! ```

pub mod factory;
pub mod queue;
pub mod rng;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use factory::PieceFactory;
pub use queue::{PieceQueue, QueueError, QueueState};
pub use rng::SimpleRng;
