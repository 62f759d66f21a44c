//! JSON-lines event log.
//!
//! Each session event becomes one JSON object on its own line. The log is
//! optional; a disabled log accepts and drops every record.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::Result;
use serde::Serialize;

use crate::session::Outcome;
use crate::types::Piece;

/// One log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent {
    Prefill { count: usize },
    Played { shape: &'static str, id: u64 },
    Inserted { shape: &'static str, id: u64 },
    QueueFull { shape: &'static str, id: u64 },
    QueueEmpty,
    InvalidInput { input: String },
    Exit,
}

impl LogEvent {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        let fields = |p: &Piece| (p.kind.as_str(), p.id);
        match outcome {
            Outcome::Played(p) => {
                let (shape, id) = fields(p);
                LogEvent::Played { shape, id }
            }
            Outcome::Inserted(p) => {
                let (shape, id) = fields(p);
                LogEvent::Inserted { shape, id }
            }
            Outcome::QueueFull(p) => {
                let (shape, id) = fields(p);
                LogEvent::QueueFull { shape, id }
            }
            Outcome::NothingToPlay => LogEvent::QueueEmpty,
            Outcome::Exit => LogEvent::Exit,
        }
    }
}

pub struct EventLog<W: Write = BufWriter<File>> {
    sink: Option<W>,
    buf: Vec<u8>,
}

impl EventLog<BufWriter<File>> {
    /// Open (append) the log at `path`, or a disabled log for `None`.
    ///
    /// A file that cannot be opened disables logging with a warning on stderr.
    pub fn open(path: Option<&str>) -> Self {
        let Some(path) = path else {
            return Self::disabled();
        };
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self::to_writer(BufWriter::new(file)),
            Err(e) => {
                eprintln!("[Stack] event log disabled, cannot open {}: {}", path, e);
                Self::disabled()
            }
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn to_writer(sink: W) -> Self {
        Self {
            sink: Some(sink),
            buf: Vec::with_capacity(128),
        }
    }

    pub fn disabled() -> Self {
        Self {
            sink: None,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn record(&mut self, event: &LogEvent) -> Result<()> {
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, event)?;
        self.buf.push(b'\n');
        sink.write_all(&self.buf)?;
        sink.flush()?;
        Ok(())
    }

    pub fn record_outcome(&mut self, outcome: &Outcome) -> Result<()> {
        self.record(&LogEvent::from_outcome(outcome))
    }

    pub fn into_inner(self) -> Option<W> {
        self.sink
    }
}
