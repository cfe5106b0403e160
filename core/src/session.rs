//! The portfolio session — one in-memory generated portfolio.
//!
//! RULES:
//!   - Borrowers and loans are generated together and never edited.
//!   - A refresh regenerates both tables wholesale at the next generation.
//!   - All randomness flows through the RngBank.

use crate::{
    borrower_generator::{generate_borrowers, Borrower},
    clock::GenerationClock,
    config::GeneratorConfig,
    error::{CreditError, CreditResult},
    loan_generator::{generate_loans, Loan},
    portfolio::{generate_portfolio_summary, PortfolioSummary},
    rng::{GeneratorSlot, RngBank},
    snapshot::PortfolioSnapshot,
};
use chrono::{DateTime, TimeZone, Utc};

pub struct PortfolioSession {
    pub clock: GenerationClock,
    pub rng_bank: RngBank,
    config: GeneratorConfig,
    borrowers: Vec<Borrower>,
    loans: Vec<Loan>,
}

impl PortfolioSession {
    /// Validate the config and generate the initial portfolio.
    pub fn build(seed: u64, config: GeneratorConfig, as_of: DateTime<Utc>) -> CreditResult<Self> {
        config.validate()?;
        let mut session = Self {
            clock: GenerationClock::new(as_of),
            rng_bank: RngBank::new(seed),
            config,
            borrowers: Vec::new(),
            loans: Vec::new(),
        };
        session.regenerate()?;
        Ok(session)
    }

    /// Small, fully reproducible session for tests.
    pub fn build_test(seed: u64) -> CreditResult<Self> {
        let as_of = Utc
            .with_ymd_and_hms(2024, 6, 30, 0, 0, 0)
            .single()
            .ok_or_else(|| CreditError::invalid("as_of", "fixed test date is ambiguous"))?;
        Self::build(seed, GeneratorConfig::default_test(), as_of)
    }

    /// Load the config from `data_dir` and generate the initial portfolio.
    pub fn load(seed: u64, data_dir: &str, as_of: DateTime<Utc>) -> CreditResult<Self> {
        let config = GeneratorConfig::load(data_dir)?;
        Self::build(seed, config, as_of)
    }

    /// Rebuild a session from a snapshot without regenerating.
    /// The tables must match the counts in the snapshot's config.
    pub fn restore(snapshot: PortfolioSnapshot) -> CreditResult<Self> {
        snapshot.config.validate()?;
        if snapshot.borrowers.len() != snapshot.config.borrower_count {
            return Err(CreditError::invalid(
                "snapshot",
                format!(
                    "{} borrowers but config expects {}",
                    snapshot.borrowers.len(),
                    snapshot.config.borrower_count
                ),
            ));
        }
        if snapshot.loans.len() != snapshot.config.loan_count {
            return Err(CreditError::invalid(
                "snapshot",
                format!(
                    "{} loans but config expects {}",
                    snapshot.loans.len(),
                    snapshot.config.loan_count
                ),
            ));
        }
        Ok(Self {
            clock: snapshot.clock,
            rng_bank: RngBank::new(snapshot.seed),
            config: snapshot.config,
            borrowers: snapshot.borrowers,
            loans: snapshot.loans,
        })
    }

    /// Advance to the next generation and regenerate everything.
    pub fn refresh(&mut self) -> CreditResult<()> {
        self.clock.advance();
        self.regenerate()
    }

    fn regenerate(&mut self) -> CreditResult<()> {
        let generation = self.clock.generation;
        let mut borrower_rng = self
            .rng_bank
            .for_slot_at_generation(GeneratorSlot::Borrower, generation);
        let mut loan_rng = self
            .rng_bank
            .for_slot_at_generation(GeneratorSlot::Loan, generation);

        let borrowers = generate_borrowers(
            self.config.borrower_count,
            self.config.registration_backdate_days,
            &mut borrower_rng,
            &self.clock,
        )?;
        let loans = generate_loans(self.config.loan_count, &self.config, &mut loan_rng, &self.clock)?;

        // Swap only once both tables are built.
        self.borrowers = borrowers;
        self.loans = loans;
        log::info!(
            "generation={generation} session: {} borrowers, {} loans",
            self.borrowers.len(),
            self.loans.len()
        );
        Ok(())
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn borrowers(&self) -> &[Borrower] {
        &self.borrowers
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn summary(&self) -> PortfolioSummary {
        generate_portfolio_summary(&self.loans)
    }

    pub fn snapshot(&self) -> PortfolioSnapshot {
        PortfolioSnapshot {
            seed: self.rng_bank.master_seed(),
            clock: self.clock.clone(),
            config: self.config.clone(),
            borrowers: self.borrowers.clone(),
            loans: self.loans.clone(),
        }
    }
}
