//! Walk-away lockout bookkeeping.

use crate::config::NegotiationConfig;
use crate::hero::{HeroNegotiationProfile, NegotiationState, Tension, Turn};

/// Tracks when a walked-away hero may be approached again.
///
/// A hero that walked away on turn `w` becomes eligible on turn
/// `w + lockout_turns`. Heroes that never walked away are always eligible.
pub struct RecruitmentLockoutTracker<'a> {
    config: &'a NegotiationConfig,
}

impl<'a> RecruitmentLockoutTracker<'a> {
    pub fn new(config: &'a NegotiationConfig) -> Self {
        Self { config }
    }

    /// Records a walk-away at `turn`, keeping the hero's current tension.
    pub fn mark_walked_away(&self, profile: &mut HeroNegotiationProfile, turn: Turn) {
        profile.state = NegotiationState::WalkedAway {
            tension: profile.tension(),
            walk_away_turn: turn,
        };
    }

    pub fn can_re_recruit(&self, profile: &HeroNegotiationProfile, current: Turn) -> bool {
        self.can_re_recruit_with(profile, current, self.config.lockout_turns)
    }

    /// Same as [`can_re_recruit`](Self::can_re_recruit) with an explicit lockout.
    pub fn can_re_recruit_with(
        &self,
        profile: &HeroNegotiationProfile,
        current: Turn,
        lockout_turns: u64,
    ) -> bool {
        match profile.walk_away_turn() {
            Some(walked) => current.since(walked) >= lockout_turns,
            None => true,
        }
    }

    /// Turns left before the hero is eligible again; 0 when already eligible.
    pub fn turns_until_eligible(&self, profile: &HeroNegotiationProfile, current: Turn) -> u64 {
        match profile.walk_away_turn() {
            Some(walked) => self.config.lockout_turns.saturating_sub(current.since(walked)),
            None => 0,
        }
    }

    /// Season reset: clears any walk-away, ignoring the lockout, and zeroes
    /// tension. An open negotiation stays open at zero tension.
    ///
    /// Returns true if the state changed.
    pub fn reset_walk_away(&self, profile: &mut HeroNegotiationProfile) -> bool {
        let reset = match profile.state {
            NegotiationState::Uninitialized | NegotiationState::WalkedAway { .. } => {
                NegotiationState::Uninitialized
            }
            NegotiationState::Negotiating { .. } => NegotiationState::Negotiating {
                tension: Tension::ZERO,
            },
            NegotiationState::Accepted { .. } => NegotiationState::Accepted {
                tension: Tension::ZERO,
            },
        };
        let changed = reset != profile.state;
        profile.state = reset;
        changed
    }

    /// Clears walk-away status once the lockout has elapsed.
    ///
    /// Returns true if the hero was released.
    pub fn release_if_expired(&self, profile: &mut HeroNegotiationProfile, current: Turn) -> bool {
        if profile.has_walked_away() && self.can_re_recruit(profile, current) {
            profile.state = NegotiationState::Uninitialized;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::NegotiationStatus;

    fn walked_at(turn: u64) -> HeroNegotiationProfile {
        let mut profile = HeroNegotiationProfile::default();
        profile.state = NegotiationState::Negotiating {
            tension: Tension::clamped(100),
        };
        let config = NegotiationConfig::default();
        RecruitmentLockoutTracker::new(&config).mark_walked_away(&mut profile, Turn(turn));
        profile
    }

    #[test]
    fn lockout_lasts_four_turns() {
        let config = NegotiationConfig::default();
        let tracker = RecruitmentLockoutTracker::new(&config);
        let profile = walked_at(10);

        assert!(profile.is_locked());
        assert_eq!(profile.tension(), Tension::MAX);
        assert!(!tracker.can_re_recruit(&profile, Turn(10)));
        assert!(!tracker.can_re_recruit(&profile, Turn(13)));
        assert!(tracker.can_re_recruit(&profile, Turn(14)));
        assert_eq!(tracker.turns_until_eligible(&profile, Turn(11)), 3);
        assert_eq!(tracker.turns_until_eligible(&profile, Turn(20)), 0);
    }

    #[test]
    fn earlier_turns_stay_locked() {
        let config = NegotiationConfig::default();
        let tracker = RecruitmentLockoutTracker::new(&config);
        let profile = walked_at(10);
        assert!(!tracker.can_re_recruit(&profile, Turn(2)));
    }

    #[test]
    fn explicit_lockout_overrides_config() {
        let config = NegotiationConfig::default();
        let tracker = RecruitmentLockoutTracker::new(&config);
        let profile = walked_at(10);

        assert!(tracker.can_re_recruit_with(&profile, Turn(11), 1));
        assert!(tracker.can_re_recruit_with(&profile, Turn(10), 0));
        assert!(!tracker.can_re_recruit_with(&profile, Turn(15), 8));
    }

    #[test]
    fn never_walked_is_always_eligible() {
        let config = NegotiationConfig::default();
        let tracker = RecruitmentLockoutTracker::new(&config);
        let profile = HeroNegotiationProfile::default();
        assert!(tracker.can_re_recruit(&profile, Turn::ZERO));
        assert_eq!(tracker.turns_until_eligible(&profile, Turn::ZERO), 0);
    }

    #[test]
    fn release_only_after_expiry() {
        let config = NegotiationConfig::default();
        let tracker = RecruitmentLockoutTracker::new(&config);
        let mut profile = walked_at(10);

        assert!(!tracker.release_if_expired(&mut profile, Turn(12)));
        assert!(profile.is_locked());

        assert!(tracker.release_if_expired(&mut profile, Turn(14)));
        assert_eq!(profile.state.status(), NegotiationStatus::Uninitialized);
        assert!(!profile.is_locked());
        assert!(!tracker.release_if_expired(&mut profile, Turn(20)));
    }

    #[test]
    fn reset_clears_lockout_immediately() {
        let config = NegotiationConfig::default();
        let tracker = RecruitmentLockoutTracker::new(&config);
        let mut profile = walked_at(10);

        assert!(tracker.reset_walk_away(&mut profile));
        assert!(!profile.has_walked_away());
        assert_eq!(profile.walk_away_turn(), None);
        assert_eq!(profile.tension(), Tension::ZERO);
        assert!(tracker.can_re_recruit(&profile, Turn(10)));
    }

    #[test]
    fn reset_zeroes_tension_of_open_negotiations() {
        let config = NegotiationConfig::default();
        let tracker = RecruitmentLockoutTracker::new(&config);
        let mut profile = HeroNegotiationProfile::default();
        profile.state = NegotiationState::Negotiating {
            tension: Tension::clamped(60),
        };

        assert!(tracker.reset_walk_away(&mut profile));
        assert_eq!(profile.state.status(), NegotiationStatus::Negotiating);
        assert_eq!(profile.tension(), Tension::ZERO);

        // Already at rest.
        assert!(!tracker.reset_walk_away(&mut profile));
        let mut fresh = HeroNegotiationProfile::default();
        assert!(!tracker.reset_walk_away(&mut fresh));
    }
}
