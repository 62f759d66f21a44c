//! Tetris Stack runner (default binary).
//!
//! Interactive menu over the "next pieces" queue: play the front piece,
//! insert a new one, or exit. Reads one line per choice from stdin.

use std::io;

use anyhow::Result;

use tetris_stack::engine::{EventLog, Session, SessionConfig};
use tetris_stack::input::MenuReader;
use tetris_stack::term::ConsoleRenderer;
use tetris_stack::Driver;

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    eprintln!("[Stack] seed {}", config.seed);

    let mut driver = Driver::new(
        MenuReader::new(io::stdin().lock()),
        ConsoleRenderer::stdout(config.color),
        EventLog::open(config.log_path.as_deref()),
    );

    let result = run(&mut driver, config.seed);

    // Always try to restore terminal style.
    let _ = driver.console.reset();
    result
}

fn run<R: io::BufRead>(
    driver: &mut Driver<R, io::Stdout, io::BufWriter<std::fs::File>>,
    seed: u32,
) -> Result<()> {
    let mut session: Session = Session::new(seed);
    driver.start(&mut session)?;
    driver.run(&mut session)
}
