//! Line-driven recruitment session.
//!
//! [`CliApp`] reads one command per line, runs it against the
//! [`RecruitmentDesk`] and then prints every event the command queued.

use std::io::{BufRead, Write};

use anyhow::Result;
use guild_core::NegotiationError;
use guild_runtime::{RecruitmentDesk, RuntimeError};

use crate::input::{Command, HELP, parse_command};
use crate::presentation;

/// Whether the session should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct CliApp {
    desk: RecruitmentDesk,
    json_events: bool,
}

impl CliApp {
    pub fn new(desk: RecruitmentDesk, json_events: bool) -> Self {
        Self { desk, json_events }
    }

    pub fn desk(&self) -> &RecruitmentDesk {
        &self.desk
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        writeln!(
            out,
            "Guild recruitment desk, {}. Type 'help' for commands.",
            self.desk.turn()
        )?;
        prompt(out)?;

        for line in input.lines() {
            let line = line?;
            let flow = match parse_command(&line) {
                Ok(None) => Flow::Continue,
                Ok(Some(command)) => self.dispatch(command, out)?,
                Err(err) => {
                    tracing::debug!("Unparseable input {:?}: {}", line, err);
                    writeln!(out, "! {err}")?;
                    Flow::Continue
                }
            };
            self.flush_events(out)?;
            if flow == Flow::Exit {
                break;
            }
            prompt(out)?;
        }

        tracing::info!("Session ended on {}", self.desk.turn());
        Ok(())
    }

    /// Executes one command. Desk rejections are printed, not returned.
    pub fn dispatch(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        match self.execute(command, out) {
            Ok(flow) => Ok(flow),
            Err(CommandError::Desk(err)) => {
                tracing::warn!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "Command {:?} rejected: {}",
                    command,
                    err
                );
                writeln!(out, "! {}: {}", err.error_code(), err)?;
                Ok(Flow::Continue)
            }
            Err(CommandError::Io(err)) => Err(err.into()),
        }
    }

    fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow, CommandError> {
        let turn = self.desk.turn();
        match command {
            Command::List => {
                writeln!(out, "pool:")?;
                for hero in self.desk.pool() {
                    writeln!(out, "  {}", presentation::hero_line(hero))?;
                }
                writeln!(out, "roster:")?;
                for hero in self.desk.roster() {
                    writeln!(out, "  {}", presentation::hero_line(hero))?;
                }
            }
            Command::Quote(id) => {
                let quote = self.desk.quote(id)?;
                for line in presentation::quote_lines(&quote) {
                    writeln!(out, "{line}")?;
                }
            }
            Command::Open(id) => {
                let tension = self.desk.open_negotiation(id, turn)?;
                writeln!(out, "#{} is listening (tension {tension})", id.0)?;
            }
            Command::Offer { hero, offer } => {
                let report = self.desk.propose(hero, offer, turn)?;
                writeln!(out, "{}", presentation::round_line(&report))?;
            }
            Command::Accept { hero, offer } => {
                let contract = self.desk.accept(hero, offer, turn)?;
                if let Some(signed) = self.desk.hero(hero) {
                    writeln!(out, "{}", presentation::contract_line(signed, &contract))?;
                }
            }
            Command::Turn => {
                let report = self.desk.advance_turn(turn.next())?;
                writeln!(out, "{}", presentation::turn_line(&report))?;
            }
            Command::Refresh => {
                let cleared = self.desk.seasonal_refresh()?;
                writeln!(out, "new season: {} hero(es) back on the market", cleared.len())?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn flush_events(&mut self, out: &mut impl Write) -> Result<()> {
        for event in self.desk.drain_events() {
            if self.json_events {
                writeln!(out, "{}", serde_json::to_string(&event)?)?;
            } else {
                writeln!(out, "  * {}", presentation::event_line(&event))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
enum CommandError {
    #[error(transparent)]
    Desk(#[from] RuntimeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn prompt(out: &mut impl Write) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
