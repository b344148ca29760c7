//! Public runtime API surface.
//!
//! This module gathers the error type and report structures that clients use
//! to drive the recruitment desk.
mod errors;
mod reports;

pub use errors::{Result, RuntimeError};
pub use reports::{Quote, RoundReport, TurnReport};
