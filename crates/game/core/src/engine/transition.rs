//! Action dispatch and the three-phase driver.

use crate::hero::Hero;
use crate::transition::{NegotiationAction, NegotiationEnv, NegotiationTransition};

use super::NegotiationOutcome;
use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Runs a transition through `pre_validate → apply → post_validate`.
#[inline]
fn drive_transition<T>(
    transition: &T,
    hero: &mut Hero,
    env: &NegotiationEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: NegotiationTransition,
{
    transition
        .pre_validate(hero, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(hero, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(hero, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

pub(super) fn execute_transition(
    action: &NegotiationAction,
    hero: &mut Hero,
    env: &NegotiationEnv<'_>,
) -> Result<NegotiationOutcome, ExecuteError> {
    match action {
        NegotiationAction::Initialize(transition) => {
            let starting_tension =
                drive_transition(transition, hero, env).map_err(ExecuteError::Initialize)?;
            Ok(NegotiationOutcome::Opened { starting_tension })
        }
        NegotiationAction::SubmitOffer(transition) => {
            let round =
                drive_transition(transition, hero, env).map_err(ExecuteError::SubmitOffer)?;
            Ok(NegotiationOutcome::Round(round))
        }
        NegotiationAction::AcceptOffer(transition) => {
            let outcome =
                drive_transition(transition, hero, env).map_err(ExecuteError::AcceptOffer)?;
            Ok(NegotiationOutcome::Accept(outcome))
        }
        NegotiationAction::ResetWalkAway(transition) => {
            let cleared = drive_transition(transition, hero, env)
                .map_err(|e| -> ExecuteError { match e.error {} })?;
            Ok(NegotiationOutcome::WalkAwayReset { cleared })
        }
        NegotiationAction::ReleaseLockout(transition) => {
            let released = drive_transition(transition, hero, env)
                .map_err(|e| -> ExecuteError { match e.error {} })?;
            Ok(NegotiationOutcome::LockoutReleased { released })
        }
    }
}
