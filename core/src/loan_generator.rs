//! Synthetic loan book generation.
//!
//! Status and risk band are drawn independently from their weight tables;
//! a loan's risk band carries no relationship to its arrears.

use crate::{
    borrower_generator::borrower_id,
    clock::GenerationClock,
    config::GeneratorConfig,
    error::{CreditError, CreditResult},
    rng::GeneratorRng,
    types::{EntityId, LoanStatus, ProductType, RiskBand},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const LOAN_AMOUNT_MIN: f64 = 50_000.0;
pub const LOAN_AMOUNT_MAX: f64 = 5_000_000.0;
pub const INTEREST_RATE_MIN: f64 = 8.0;
pub const INTEREST_RATE_MAX: f64 = 25.0;
pub const TERM_CHOICES: [u32; 5] = [12, 24, 36, 48, 60];
/// Arrears for delinquent/restructured loans are drawn from [0, this).
pub const MAX_DAYS_PAST_DUE: i64 = 120;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub loan_id: EntityId,
    pub borrower_id: EntityId,
    pub product_type: ProductType,
    pub loan_amount: f64,
    pub outstanding_balance: f64,
    pub interest_rate: f64,
    pub term_months: u32,
    pub days_past_due: u32,
    pub status: LoanStatus,
    pub risk_band: RiskBand,
    pub collateral_value: f64,
    pub origination_date: DateTime<Utc>,
}

impl Loan {
    /// Collateral cover as a multiple of the original amount.
    pub fn collateral_cover(&self) -> f64 {
        self.collateral_value / self.loan_amount
    }
}

pub fn loan_id(sequence: u64) -> EntityId {
    format!("LOAN{sequence:03}")
}

/// Generate `count` loans with sequential ids `LOAN001..`.
///
/// Borrower references are drawn from `1..=config.borrower_reference_range`
/// and are not checked against any generated borrower table.
pub fn generate_loans(
    count: usize,
    config: &GeneratorConfig,
    rng: &mut GeneratorRng,
    clock: &GenerationClock,
) -> CreditResult<Vec<Loan>> {
    if count == 0 {
        return Err(CreditError::invalid("count", "loan count must be >= 1"));
    }
    if config.borrower_reference_range == 0 {
        return Err(CreditError::invalid("borrower_reference_range", "must be >= 1"));
    }
    if config.origination_backdate_days < 2 {
        return Err(CreditError::invalid("origination_backdate_days", "must be >= 2"));
    }
    let statuses = config.status_table()?;
    let risk_bands = config.risk_band_table()?;

    let mut loans = Vec::with_capacity(count);
    for i in 1..=count {
        let loan_amount = rng.uniform(LOAN_AMOUNT_MIN, LOAN_AMOUNT_MAX);
        let status = statuses.sample(rng);
        let borrower_seq = rng.int_between(1, config.borrower_reference_range as i64 + 1);
        let product_type = *rng.pick(ProductType::ALL);
        let outstanding_balance = loan_amount * rng.uniform(0.1, 1.0);
        let interest_rate = rng.uniform(INTEREST_RATE_MIN, INTEREST_RATE_MAX);
        let term_months = *rng.pick(&TERM_CHOICES);
        let days_past_due = if status.accrues_arrears() {
            rng.int_between(0, MAX_DAYS_PAST_DUE) as u32
        } else {
            0
        };
        let risk_band = risk_bands.sample(rng);
        let collateral_value = loan_amount * rng.uniform(0.5, 1.5);
        let origination_date =
            clock.days_ago(rng.int_between(1, config.origination_backdate_days as i64));

        loans.push(Loan {
            loan_id: loan_id(i as u64),
            borrower_id: borrower_id(borrower_seq as u64),
            product_type,
            loan_amount,
            outstanding_balance,
            interest_rate,
            term_months,
            days_past_due,
            status,
            risk_band,
            collateral_value,
            origination_date,
        });
    }

    log::debug!("{}: generated {count} loans", rng.name);
    Ok(loans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::WeightEntry;
    use chrono::TimeZone;

    fn clock() -> GenerationClock {
        GenerationClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn only_arrears_statuses_have_days_past_due() {
        let mut rng = GeneratorRng::seeded(3);
        let loans = generate_loans(500, &GeneratorConfig::default(), &mut rng, &clock()).unwrap();
        for loan in &loans {
            if loan.status.accrues_arrears() {
                assert!(loan.days_past_due < 120, "{} dpd {}", loan.loan_id, loan.days_past_due);
            } else {
                assert_eq!(loan.days_past_due, 0, "{} is {}", loan.loan_id, loan.status);
            }
        }
    }

    #[test]
    fn single_weight_tables_pin_the_draw() {
        let config = GeneratorConfig {
            status_weights: vec![WeightEntry::new(LoanStatus::Delinquent, 1.0)],
            risk_band_weights: vec![WeightEntry::new(RiskBand::Critical, 1.0)],
            ..GeneratorConfig::default_test()
        };
        let mut rng = GeneratorRng::seeded(9);
        let loans = generate_loans(50, &config, &mut rng, &clock()).unwrap();
        assert!(loans.iter().all(|l| l.status == LoanStatus::Delinquent));
        assert!(loans.iter().all(|l| l.risk_band == RiskBand::Critical));
    }

    #[test]
    fn borrower_references_stay_in_fixed_range() {
        let mut rng = GeneratorRng::seeded(21);
        let loans = generate_loans(400, &GeneratorConfig::default(), &mut rng, &clock()).unwrap();
        for loan in &loans {
            let n: u32 = loan.borrower_id.trim_start_matches("BORR").parse().unwrap();
            assert!((1..=100).contains(&n), "reference {}", loan.borrower_id);
        }
    }
}
