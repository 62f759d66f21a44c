//! Menu loop: renders the queue, reads a choice, applies it, reports back.
//!
//! Generic over the input reader, console writer and log sink so the whole
//! interactive flow runs in tests against byte buffers.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::engine::{EventLog, LogEvent, Outcome, Session};
use crate::input::{MenuChoice, MenuReader};
use crate::term::{ConsoleRenderer, QueueView};

/// Everything the loop touches besides the session.
pub struct Driver<R, W: Write, L: Write> {
    pub reader: MenuReader<R>,
    pub console: ConsoleRenderer<W>,
    pub log: EventLog<L>,
    view: QueueView,
}

impl<R: BufRead, W: Write, L: Write> Driver<R, W, L> {
    pub fn new(reader: MenuReader<R>, console: ConsoleRenderer<W>, log: EventLog<L>) -> Self {
        Self {
            reader,
            console,
            log,
            view: QueueView,
        }
    }

    /// Announce startup and pre-fill the queue.
    pub fn start<const N: usize>(&mut self, session: &mut Session<N>) -> Result<()> {
        self.console.draw_line(&self.view.startup_line())?;
        let count = session.prefill();
        self.log.record(&LogEvent::Prefill { count })?;
        Ok(())
    }

    /// Run menu rounds until exit (or end of input).
    pub fn run<const N: usize>(&mut self, session: &mut Session<N>) -> Result<()> {
        while self.round(session)? {}
        Ok(())
    }

    /// One menu round. Returns `false` once the user chose to exit.
    pub fn round<const N: usize>(&mut self, session: &mut Session<N>) -> Result<bool> {
        self.console.blank()?;
        self.console.draw_line(&self.view.queue_line(session.queue()))?;
        self.console.blank()?;
        self.console.draw_lines(&self.view.menu_lines())?;
        self.console.prompt(&self.view.prompt())?;

        let keep_going = match self.reader.next_choice()? {
            MenuChoice::Action(action) => {
                let outcome = session.apply(action);
                self.report(&outcome)?;
                self.log.record_outcome(&outcome)?;
                !outcome.is_exit()
            }
            MenuChoice::Invalid(input) => {
                self.console.blank()?;
                self.console.draw_line(&self.view.invalid_option_line())?;
                self.log.record(&LogEvent::InvalidInput { input })?;
                true
            }
        };

        self.console.blank()?;
        self.console.draw_line(&self.view.separator_line())?;
        Ok(keep_going)
    }

    fn report(&mut self, outcome: &Outcome) -> Result<()> {
        let line = match *outcome {
            Outcome::Played(piece) => self.view.played_line(piece),
            Outcome::NothingToPlay => self.view.queue_empty_line(),
            Outcome::QueueFull(_) => self.view.queue_full_line(),
            Outcome::Exit => self.view.exit_line(),
            Outcome::Inserted(_) => return Ok(()),
        };
        self.console.blank()?;
        self.console.draw_line(&line)
    }

    pub fn into_parts(self) -> (MenuReader<R>, ConsoleRenderer<W>, EventLog<L>) {
        (self.reader, self.console, self.log)
    }
}
