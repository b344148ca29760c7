use core::convert::Infallible;

use crate::hero::Hero;
use crate::negotiation::RecruitmentLockoutTracker;

use super::{NegotiationEnv, NegotiationTransition};

/// Seasonal refresh: forgets a walk-away regardless of the lockout and
/// zeroes tension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetWalkAway;

impl NegotiationTransition for ResetWalkAway {
    type Error = Infallible;
    /// Whether anything was reset.
    type Result = bool;

    fn apply(&self, hero: &mut Hero, env: &NegotiationEnv<'_>) -> Result<bool, Self::Error> {
        Ok(RecruitmentLockoutTracker::new(env.config).reset_walk_away(&mut hero.profile))
    }
}

/// Lockout expiry: returns a walked-away hero to the pool once eligible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReleaseLockout;

impl NegotiationTransition for ReleaseLockout {
    type Error = Infallible;
    /// Whether the hero was released.
    type Result = bool;

    fn apply(&self, hero: &mut Hero, env: &NegotiationEnv<'_>) -> Result<bool, Self::Error> {
        Ok(RecruitmentLockoutTracker::new(env.config).release_if_expired(&mut hero.profile, env.turn))
    }
}
