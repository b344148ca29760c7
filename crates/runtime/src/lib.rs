//! Runtime orchestration for hero recruitment.
//!
//! This crate wires the pure negotiation engine from `guild-core` to the
//! content loaded by `guild-content` and keeps the bookkeeping the engine
//! deliberately leaves out: which heroes are free agents, which are under
//! contract, and what turn it is. Consumers construct a [`RecruitmentDesk`]
//! once per campaign and drive it from their game loop.
//!
//! Modules are organized by responsibility:
//! - [`desk`] hosts the recruitment service and its builder
//! - [`api`] exposes the error and report types downstream clients interact with
pub mod api;
pub mod desk;

pub use api::{Quote, Result, RoundReport, RuntimeError, TurnReport};
pub use desk::{DeskBuilder, RecruitmentDesk};
