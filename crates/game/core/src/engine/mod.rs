//! Negotiation execution pipeline.
//!
//! The [`NegotiationEngine`] is the only writer of a hero's negotiation state.
//! Every action runs through the transition phases, and each success appends
//! the matching [`NegotiationEvent`]s to the caller's [`EventQueue`].

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::events::{EventQueue, NegotiationEvent};
use crate::hero::{Hero, Tension, Turn};
use crate::negotiation::TensionOutcome;
use crate::transition::{AcceptOutcome, NegotiationAction, NegotiationEnv};

/// Result of a successfully executed action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NegotiationOutcome {
    Opened { starting_tension: Tension },
    Round(TensionOutcome),
    Accept(AcceptOutcome),
    WalkAwayReset { cleared: bool },
    LockoutReleased { released: bool },
}

impl NegotiationOutcome {
    /// The scored round, for offer submissions and acceptance attempts.
    pub fn round(&self) -> Option<&TensionOutcome> {
        match self {
            Self::Round(round) => Some(round),
            Self::Accept(outcome) => Some(outcome.round()),
            _ => None,
        }
    }

    pub fn walked_away(&self) -> bool {
        self.round().is_some_and(|round| round.walked_away)
    }
}

/// Executes negotiation actions against one hero.
pub struct NegotiationEngine<'a> {
    hero: &'a mut Hero,
    events: &'a mut EventQueue,
}

impl<'a> NegotiationEngine<'a> {
    pub fn new(hero: &'a mut Hero, events: &'a mut EventQueue) -> Self {
        Self { hero, events }
    }

    /// Runs `action` through the transition pipeline.
    ///
    /// Nothing is queued when the action fails.
    pub fn execute(
        &mut self,
        env: NegotiationEnv<'_>,
        action: &NegotiationAction,
    ) -> Result<NegotiationOutcome, ExecuteError> {
        let outcome = transition::execute_transition(action, self.hero, &env)?;
        self.emit(&env, action, &outcome);
        Ok(outcome)
    }

    fn emit(
        &mut self,
        env: &NegotiationEnv<'_>,
        action: &NegotiationAction,
        outcome: &NegotiationOutcome,
    ) {
        let hero = self.hero.id;
        let turn = env.turn;

        if let (Some(round), Some(offer)) = (outcome.round(), action.offer()) {
            let breakdown = &round.breakdown;
            self.events.push(NegotiationEvent::OfferEvaluated {
                hero,
                turn,
                offer,
                expected_value: breakdown.expected_value,
                offer_value: breakdown.offer_value,
                delta: breakdown.delta,
                tension: round.tension,
                preference: breakdown.preference,
                preference_violated: breakdown.preference_violated,
            });
            if round.walked_away {
                self.events.push(NegotiationEvent::HeroWalkedAway {
                    hero,
                    turn,
                    eligible_at: Turn(turn.0.saturating_add(env.config.lockout_turns)),
                });
            }
        }

        match *outcome {
            NegotiationOutcome::Opened { starting_tension } => {
                self.events.push(NegotiationEvent::NegotiationOpened {
                    hero,
                    turn,
                    starting_tension,
                });
            }
            NegotiationOutcome::Accept(AcceptOutcome::Signed { contract, .. }) => {
                self.events.push(NegotiationEvent::ContractSigned {
                    hero,
                    turn,
                    contract,
                });
            }
            NegotiationOutcome::WalkAwayReset { cleared: true } => {
                self.events.push(NegotiationEvent::WalkAwayReset { hero });
            }
            NegotiationOutcome::LockoutReleased { released: true } => {
                self.events.push(NegotiationEvent::LockoutReleased { hero, turn });
            }
            _ => {}
        }
    }
}
