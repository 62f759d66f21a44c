//! Session engine.
//!
//! Ties one [`PieceQueue`](crate::core::PieceQueue) to one
//! [`PieceFactory`](crate::core::PieceFactory) and turns menu actions into
//! [`Outcome`]s. Configuration comes from the environment and events can be
//! appended to a JSON-lines log.
//!
//! # Example
//!
//! ```
//! use tetris_stack_engine::{Outcome, Session};
//! use tetris_stack_types::MenuAction;
//!
//! let mut session: Session = Session::new(7);
//! session.prefill();
//!
//! assert!(matches!(session.apply(MenuAction::Play), Outcome::Played(p) if p.id == 0));
//! assert!(matches!(session.apply(MenuAction::Insert), Outcome::Inserted(p) if p.id == 5));
//! ```

pub mod config;
pub mod log;
pub mod session;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use config::{time_seed, SessionConfig};
pub use log::{EventLog, LogEvent};
pub use session::{Outcome, Session};
