//! System orchestration, startup, and shutdown logic.

pub mod config;
pub mod error;
pub mod ledger_system;
pub mod telemetry;

pub use config::*;
pub use error::*;
pub use ledger_system::*;
pub use telemetry::*;
