//! SmartCredit portfolio core.
//!
//! Synthetic borrower and loan generation for the credit-risk demo
//! dashboard, plus the pure metrics the dashboard computes over them.
//!
//! Nothing runs on import. Call [`init`] once during setup to announce
//! the core through the `log` facade.

pub mod borrower_generator;
pub mod clock;
pub mod config;
pub mod error;
pub mod loan_generator;
pub mod metrics;
pub mod name_generator;
pub mod portfolio;
pub mod rng;
pub mod sampling;
pub mod session;
pub mod snapshot;
pub mod types;

pub use error::{CreditError, CreditResult};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Explicit setup step. Emits the initialisation message.
pub fn init() {
    log::info!("Initializing SmartCredit core v{VERSION}");
}
