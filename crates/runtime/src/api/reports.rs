//! Read-only summaries returned by the recruitment desk.

use serde::Serialize;

use guild_core::{
    ContractOffer, HeroId, NegotiationStatus, PaymentPreference, Tension, TensionOutcome, Turn,
    ValueBreakdown,
};

/// Outcome of one offer submitted through the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub hero: HeroId,
    pub turn: Turn,
    pub round: TensionOutcome,
    /// Set when the hero walked away during this round.
    pub eligible_at: Option<Turn>,
}

impl RoundReport {
    pub fn tension(&self) -> Tension {
        self.round.tension
    }

    pub fn walked_away(&self) -> bool {
        self.round.walked_away
    }
}

/// What a hero expects, priced for every contract length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub hero: HeroId,
    pub name: String,
    pub status: NegotiationStatus,
    pub tension: Tension,
    pub value: ValueBreakdown,
    pub preference: PaymentPreference,
    /// One ideal offer per contract length, shortest first.
    pub ideal_offers: Vec<ContractOffer>,
    /// Turns left before a walked-away hero can be approached again.
    pub lockout_remaining: u64,
}

impl Quote {
    pub fn expected_value(&self) -> u64 {
        self.value.expected_value
    }
}

/// Bookkeeping performed when the calendar moves forward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    pub turn: Turn,
    /// Heroes whose contracts ran out and who rejoined the pool.
    pub expired: Vec<HeroId>,
    /// Heroes whose walk-away lockout elapsed.
    pub released: Vec<HeroId>,
}
