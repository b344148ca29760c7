//! Input processing for the terminal client.
//!
//! This module owns the line-to-command mapping so the rest of the
//! application can remain agnostic about the concrete command syntax.

use guild_core::{ContractOffer, HeroId, OfferError};

/// A parsed REPL command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// List the recruitment pool and roster.
    List,
    Quote(HeroId),
    Open(HeroId),
    Offer { hero: HeroId, offer: ContractOffer },
    Accept { hero: HeroId, offer: ContractOffer },
    /// Advance the calendar by one turn.
    Turn,
    /// Seasonal reset of every walk-away.
    Refresh,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{value}' is not a valid {what}")]
    InvalidNumber { what: &'static str, value: String },

    #[error(transparent)]
    InvalidOffer(#[from] OfferError),
}

const OFFER_USAGE: &str = "offer <hero> <signing bonus> <salary per turn> <years>";
const ACCEPT_USAGE: &str = "accept <hero> <signing bonus> <salary per turn> <years>";

/// Parses one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    if head.starts_with('#') {
        return Ok(None);
    }
    let args: Vec<&str> = words.collect();

    let command = match head.to_ascii_lowercase().as_str() {
        "list" | "ls" => no_args(&args, "list", Command::List)?,
        "quote" | "q" => Command::Quote(single_hero(&args, "quote <hero>")?),
        "open" => Command::Open(single_hero(&args, "open <hero>")?),
        "offer" => {
            let (hero, offer) = hero_and_offer(&args, OFFER_USAGE)?;
            Command::Offer { hero, offer }
        }
        "accept" | "sign" => {
            let (hero, offer) = hero_and_offer(&args, ACCEPT_USAGE)?;
            Command::Accept { hero, offer }
        }
        "turn" | "next" => no_args(&args, "turn", Command::Turn)?,
        "refresh" => no_args(&args, "refresh", Command::Refresh)?,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

pub const HELP: &str = "\
commands:
  list                                  show the pool and the roster
  quote <hero>                          expected value and ideal offers
  open <hero>                           start negotiating
  offer <hero> <bonus> <salary> <years> submit an offer
  accept <hero> <bonus> <salary> <years> close on an offer
  turn                                  advance the calendar one turn
  refresh                               seasonal reset of walk-aways
  quit";

fn no_args(args: &[&str], usage: &'static str, command: Command) -> Result<Command, InputError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(InputError::Usage(usage))
    }
}

fn single_hero(args: &[&str], usage: &'static str) -> Result<HeroId, InputError> {
    match args {
        [id] => hero_id(id),
        _ => Err(InputError::Usage(usage)),
    }
}

fn hero_and_offer(args: &[&str], usage: &'static str) -> Result<(HeroId, ContractOffer), InputError> {
    let [id, bonus, salary, years] = args else {
        return Err(InputError::Usage(usage));
    };
    let hero = hero_id(id)?;
    let offer = ContractOffer::from_raw(
        number(bonus, "signing bonus")?,
        number(salary, "salary")?,
        number(years, "contract length")?,
    )?;
    Ok((hero, offer))
}

fn hero_id(raw: &str) -> Result<HeroId, InputError> {
    raw.trim_start_matches('#')
        .parse()
        .map(HeroId)
        .map_err(|_| InputError::InvalidNumber {
            what: "hero id",
            value: raw.to_string(),
        })
}

fn number(raw: &str, what: &'static str) -> Result<f64, InputError> {
    raw.parse().map_err(|_| InputError::InvalidNumber {
        what,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use guild_core::OfferField;

    #[test]
    fn blank_and_comment_lines_are_ignored() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command("# opening moves"), Ok(None));
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_command("list"), Ok(Some(Command::List)));
        assert_eq!(parse_command("QUOTE 3"), Ok(Some(Command::Quote(HeroId(3)))));
        assert_eq!(parse_command("open #4"), Ok(Some(Command::Open(HeroId(4)))));
        assert_eq!(parse_command("turn"), Ok(Some(Command::Turn)));
        assert_eq!(parse_command("refresh"), Ok(Some(Command::Refresh)));
        assert_eq!(parse_command("exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn parses_offers_and_clamps_length() {
        assert_eq!(
            parse_command("offer 1 100 25 2"),
            Ok(Some(Command::Offer {
                hero: HeroId(1),
                offer: ContractOffer::new(100, 25, 2),
            }))
        );
        assert_eq!(
            parse_command("accept 1 100.9 25 9"),
            Ok(Some(Command::Accept {
                hero: HeroId(1),
                offer: ContractOffer::new(100, 25, 5),
            }))
        );
    }

    #[test]
    fn rejects_invalid_offers() {
        assert_eq!(
            parse_command("offer 1 -5 25 2"),
            Err(InputError::InvalidOffer(OfferError::Negative {
                field: OfferField::SigningBonus
            }))
        );
        assert_eq!(
            parse_command("offer 1 5 inf 2"),
            Err(InputError::InvalidOffer(OfferError::NonFinite {
                field: OfferField::SalaryPerTurn
            }))
        );
        assert!(matches!(
            parse_command("offer 1 five 25 2"),
            Err(InputError::InvalidNumber { what: "signing bonus", .. })
        ));
    }

    #[test]
    fn reports_usage_and_unknown_commands() {
        assert_eq!(parse_command("offer 1 100"), Err(InputError::Usage(OFFER_USAGE)));
        assert_eq!(parse_command("list everything"), Err(InputError::Usage("list")));
        assert_eq!(
            parse_command("haggle 1"),
            Err(InputError::UnknownCommand("haggle".to_string()))
        );
    }
}
