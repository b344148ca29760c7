//! Common error infrastructure for guild-core.
//!
//! Domain-specific errors (e.g. `OfferError`, `ContractError`) live next to the
//! operations that produce them. This module only provides the shared
//! classification used by the runtime to decide how to surface a failure.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Local**: No failure in the engine is fatal to the surrounding game

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The player can retry with a different offer or later turn
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unusable configuration; negotiations cannot run at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative command.
    ///
    /// Examples: hero still locked out, negotiation not open yet
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: negative signing bonus, hero already under contract
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: tension escaped its bounds after a transition
    Internal,

    /// Fatal error - configuration unusable.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all guild-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait NegotiationError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
