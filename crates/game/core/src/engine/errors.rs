//! Error types for the negotiation pipeline.

use crate::error::{ErrorSeverity, NegotiationError};
use crate::transition::{AcceptOfferError, InitializeNegotiationError, SubmitOfferError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

impl<E: NegotiationError> NegotiationError for TransitionPhaseError<E> {
    /// A broken post-condition is an engine bug, whatever the inner error says.
    fn severity(&self) -> ErrorSeverity {
        match self.phase {
            TransitionPhase::PostValidate => ErrorSeverity::Internal,
            _ => self.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        self.error.error_code()
    }
}

/// Errors surfaced while executing a negotiation action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("initialize negotiation failed: {0}")]
    Initialize(TransitionPhaseError<InitializeNegotiationError>),

    #[error("submit offer failed: {0}")]
    SubmitOffer(TransitionPhaseError<SubmitOfferError>),

    #[error("accept offer failed: {0}")]
    AcceptOffer(TransitionPhaseError<AcceptOfferError>),
}

impl ExecuteError {
    pub fn phase(&self) -> TransitionPhase {
        match self {
            Self::Initialize(e) => e.phase,
            Self::SubmitOffer(e) => e.phase,
            Self::AcceptOffer(e) => e.phase,
        }
    }
}

impl NegotiationError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Initialize(e) => e.severity(),
            Self::SubmitOffer(e) => e.severity(),
            Self::AcceptOffer(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Initialize(e) => e.error_code(),
            Self::SubmitOffer(e) => e.error_code(),
            Self::AcceptOffer(e) => e.error_code(),
        }
    }
}
