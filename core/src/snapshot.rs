//! Snapshot serialization — full session state to/from JSON.
//!
//! A snapshot captures everything needed to resume a session
//! without regenerating: the seed, the clock, the config and both tables.

use crate::{
    borrower_generator::Borrower, clock::GenerationClock, config::GeneratorConfig,
    error::CreditResult, loan_generator::Loan,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub seed: u64,
    pub clock: GenerationClock,
    pub config: GeneratorConfig,
    pub borrowers: Vec<Borrower>,
    pub loans: Vec<Loan>,
}

impl PortfolioSnapshot {
    pub fn to_json(&self) -> CreditResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> CreditResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
