//! Outbound negotiation events.
//!
//! The engine appends events as transitions succeed; the turn controller
//! drains them in order after each command.

use std::collections::VecDeque;

use crate::hero::{HeroId, Tension, Turn};
use crate::negotiation::FinalizedContract;
use crate::offer::ContractOffer;
use crate::traits::PaymentPreference;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum NegotiationEvent {
    NegotiationOpened {
        hero: HeroId,
        turn: Turn,
        starting_tension: Tension,
    },

    /// A round was scored, whether or not the hero walked away.
    OfferEvaluated {
        hero: HeroId,
        turn: Turn,
        offer: ContractOffer,
        expected_value: u64,
        offer_value: u64,
        delta: i64,
        tension: Tension,
        preference: PaymentPreference,
        preference_violated: bool,
    },

    HeroWalkedAway {
        hero: HeroId,
        turn: Turn,
        eligible_at: Turn,
    },

    ContractSigned {
        hero: HeroId,
        turn: Turn,
        contract: FinalizedContract,
    },

    WalkAwayReset {
        hero: HeroId,
    },

    LockoutReleased {
        hero: HeroId,
        turn: Turn,
    },

    ContractExpired {
        hero: HeroId,
        turn: Turn,
    },
}

impl NegotiationEvent {
    pub fn hero(&self) -> HeroId {
        match *self {
            Self::NegotiationOpened { hero, .. }
            | Self::OfferEvaluated { hero, .. }
            | Self::HeroWalkedAway { hero, .. }
            | Self::ContractSigned { hero, .. }
            | Self::WalkAwayReset { hero }
            | Self::LockoutReleased { hero, .. }
            | Self::ContractExpired { hero, .. } => hero,
        }
    }

    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Self::NegotiationOpened { .. } => "negotiation_opened",
            Self::OfferEvaluated { .. } => "offer_evaluated",
            Self::HeroWalkedAway { .. } => "hero_walked_away",
            Self::ContractSigned { .. } => "contract_signed",
            Self::WalkAwayReset { .. } => "walk_away_reset",
            Self::LockoutReleased { .. } => "lockout_released",
            Self::ContractExpired { .. } => "contract_expired",
        }
    }
}

/// FIFO buffer of events awaiting the turn controller.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: VecDeque<NegotiationEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: NegotiationEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NegotiationEvent> {
        self.events.iter()
    }

    /// Removes and yields every queued event, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = NegotiationEvent> + '_ {
        self.events.drain(..)
    }
}

impl Extend<NegotiationEvent> for EventQueue {
    fn extend<I: IntoIterator<Item = NegotiationEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_push_order() {
        let mut queue = EventQueue::new();
        queue.push(NegotiationEvent::WalkAwayReset { hero: HeroId(2) });
        queue.push(NegotiationEvent::LockoutReleased {
            hero: HeroId(1),
            turn: Turn(8),
        });
        assert_eq!(queue.len(), 2);

        let drained: Vec<_> = queue.drain().map(|e| e.hero()).collect();
        assert_eq!(drained, vec![HeroId(2), HeroId(1)]);
        assert!(queue.is_empty());
    }
}
