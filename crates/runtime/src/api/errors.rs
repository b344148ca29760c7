//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the negotiation engine and desk bookkeeping so clients
//! can bubble them up with consistent context.
use thiserror::Error;

use guild_core::{
    ConfigError, ErrorSeverity, ExecuteError, HeroId, NegotiationError, Tension, Turn,
};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("no hero with id {id} is known to the desk")]
    UnknownHero { id: HeroId },

    #[error("hero {id} is already enlisted")]
    AlreadyEnlisted { id: HeroId },

    #[error("hero {id} is under contract for {turns_remaining} more turns")]
    UnderContract { id: HeroId, turns_remaining: u32 },

    #[error("hero {id} walked away at tension {tension}; eligible again on {eligible_at}")]
    WalkedAway {
        id: HeroId,
        tension: Tension,
        eligible_at: Turn,
    },

    #[error("{requested} is before the current {current}")]
    TurnRewind { current: Turn, requested: Turn },

    #[error("hero {id}: {action} produced an unexpected outcome")]
    UnexpectedOutcome { id: HeroId, action: &'static str },

    #[error("desk configuration rejected")]
    InvalidConfig(#[source] ConfigError),

    #[error(transparent)]
    Negotiation(#[from] ExecuteError),
}

impl NegotiationError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownHero { .. }
            | Self::AlreadyEnlisted { .. }
            | Self::UnderContract { .. }
            | Self::TurnRewind { .. } => ErrorSeverity::Validation,
            Self::WalkedAway { .. } => ErrorSeverity::Recoverable,
            Self::UnexpectedOutcome { .. } => ErrorSeverity::Internal,
            Self::InvalidConfig(_) => ErrorSeverity::Fatal,
            Self::Negotiation(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownHero { .. } => "DESK_UNKNOWN_HERO",
            Self::AlreadyEnlisted { .. } => "DESK_ALREADY_ENLISTED",
            Self::UnderContract { .. } => "DESK_UNDER_CONTRACT",
            Self::WalkedAway { .. } => "DESK_HERO_WALKED_AWAY",
            Self::TurnRewind { .. } => "DESK_TURN_REWIND",
            Self::UnexpectedOutcome { .. } => "DESK_UNEXPECTED_OUTCOME",
            Self::InvalidConfig(e) => e.error_code(),
            Self::Negotiation(e) => e.error_code(),
        }
    }
}
