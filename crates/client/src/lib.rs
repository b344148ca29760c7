//! Terminal client for the recruitment desk.
//!
//! ```text
//! main
//!   ├─→ CliConfig (environment, `.env`)
//!   ├─→ logging (file + stderr)
//!   ├─→ ContentFactory → RecruitmentDesk
//!   └─→ CliApp (line-driven REPL over stdin/stdout)
//! ```
//!
//! The binary is a thin composition root; everything it wires together is
//! exposed here so sessions can be scripted in tests.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::{CliApp, Flow};
pub use config::CliConfig;
pub use input::{Command, InputError, parse_command};
