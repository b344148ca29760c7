use core::fmt;

/// Game turn counter supplied by the calendar collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Turn(pub u64);

impl Turn {
    pub const ZERO: Self = Self(0);

    /// Turns elapsed since `earlier`, or 0 if `earlier` is in the future.
    pub fn since(self, earlier: Turn) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    pub fn next(self) -> Turn {
        Turn(self.0.saturating_add(1))
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "turn {}", self.0)
    }
}

/// Cumulative dissatisfaction, always within `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Tension(u8);

impl Tension {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Clamps any signed value into the tension range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, i64::from(Self::MAX.0)) as u8)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Tension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}

/// Per-hero negotiation state machine for one season.
///
/// ```text
/// Uninitialized ──open──▶ Negotiating ──offer──▶ Negotiating
///       ▲                      │
///       │                      ├──accept──▶ Accepted
///       └──lockout expiry──────┴──tension ≥ threshold──▶ WalkedAway
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NegotiationState {
    #[default]
    Uninitialized,
    Negotiating {
        tension: Tension,
    },
    Accepted {
        tension: Tension,
    },
    WalkedAway {
        tension: Tension,
        walk_away_turn: Turn,
    },
}

impl NegotiationState {
    pub fn tension(&self) -> Tension {
        match *self {
            Self::Uninitialized => Tension::ZERO,
            Self::Negotiating { tension }
            | Self::Accepted { tension }
            | Self::WalkedAway { tension, .. } => tension,
        }
    }

    pub fn has_walked_away(&self) -> bool {
        matches!(self, Self::WalkedAway { .. })
    }

    pub fn walk_away_turn(&self) -> Option<Turn> {
        match *self {
            Self::WalkedAway { walk_away_turn, .. } => Some(walk_away_turn),
            _ => None,
        }
    }

    /// A walked-away hero stays locked until the lockout is released.
    pub fn is_locked(&self) -> bool {
        self.has_walked_away()
    }

    pub fn status(&self) -> NegotiationStatus {
        match self {
            Self::Uninitialized => NegotiationStatus::Uninitialized,
            Self::Negotiating { .. } => NegotiationStatus::Negotiating,
            Self::Accepted { .. } => NegotiationStatus::Accepted,
            Self::WalkedAway { .. } => NegotiationStatus::WalkedAway,
        }
    }
}

/// Payload-free view of [`NegotiationState`] for labels and error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum NegotiationStatus {
    Uninitialized,
    Negotiating,
    Accepted,
    WalkedAway,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tension_is_clamped() {
        assert_eq!(Tension::clamped(-40), Tension::ZERO);
        assert_eq!(Tension::clamped(250), Tension::MAX);
        assert_eq!(Tension::clamped(42).value(), 42);
    }

    #[test]
    fn turn_since_saturates() {
        assert_eq!(Turn(14).since(Turn(10)), 4);
        assert_eq!(Turn(3).since(Turn(10)), 0);
    }

    #[test]
    fn derived_flags_follow_state() {
        let state = NegotiationState::WalkedAway {
            tension: Tension::MAX,
            walk_away_turn: Turn(10),
        };
        assert!(state.has_walked_away());
        assert!(state.is_locked());
        assert_eq!(state.walk_away_turn(), Some(Turn(10)));
        assert_eq!(state.status().to_string(), "walked_away");

        let state = NegotiationState::Negotiating {
            tension: Tension::clamped(12),
        };
        assert!(!state.has_walked_away());
        assert_eq!(state.walk_away_turn(), None);
        assert_eq!(state.tension().value(), 12);
        assert_eq!(NegotiationState::default().tension(), Tension::ZERO);
    }
}
