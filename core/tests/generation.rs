//! Borrower and loan generation properties.

use chrono::{TimeZone, Utc};
use smartcredit_core::{
    borrower_generator::{generate_borrowers, CREDIT_SCORE_MAX, CREDIT_SCORE_MIN},
    clock::GenerationClock,
    config::GeneratorConfig,
    error::CreditError,
    loan_generator::{generate_loans, TERM_CHOICES},
    rng::GeneratorRng,
};
use std::collections::HashSet;

fn clock() -> GenerationClock {
    GenerationClock::new(Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap())
}

#[test]
fn borrower_batches_have_exact_count_and_unique_ids() {
    for count in [1usize, 2, 37, 250] {
        let mut rng = GeneratorRng::seeded(count as u64);
        let borrowers = generate_borrowers(count, 1000, &mut rng, &clock()).unwrap();
        assert_eq!(borrowers.len(), count);
        let ids: HashSet<_> = borrowers.iter().map(|b| b.borrower_id.clone()).collect();
        assert_eq!(ids.len(), count, "Duplicate borrower ids in batch of {count}");
    }
}

#[test]
fn loan_batches_have_exact_count_and_unique_ids() {
    let config = GeneratorConfig::default();
    for count in [1usize, 5, 200] {
        let mut rng = GeneratorRng::seeded(100 + count as u64);
        let loans = generate_loans(count, &config, &mut rng, &clock()).unwrap();
        assert_eq!(loans.len(), count);
        let ids: HashSet<_> = loans.iter().map(|l| l.loan_id.clone()).collect();
        assert_eq!(ids.len(), count, "Duplicate loan ids in batch of {count}");
    }
}

#[test]
fn monthly_income_stays_inside_income_band() {
    let mut rng = GeneratorRng::seeded(42);
    let borrowers = generate_borrowers(1_000, 1000, &mut rng, &clock()).unwrap();
    for b in &borrowers {
        assert!(
            b.income_band.contains(b.monthly_income),
            "{} earns {} outside {}",
            b.borrower_id,
            b.monthly_income,
            b.income_band
        );
        assert!(
            (CREDIT_SCORE_MIN..CREDIT_SCORE_MAX).contains(&b.credit_score),
            "credit score {} out of range",
            b.credit_score
        );
    }
}

#[test]
fn loan_amounts_balances_and_collateral_are_bounded() {
    let mut rng = GeneratorRng::seeded(7);
    let loans = generate_loans(1_000, &GeneratorConfig::default(), &mut rng, &clock()).unwrap();
    for loan in &loans {
        assert!((50_000.0..5_000_000.0).contains(&loan.loan_amount));
        assert!(
            loan.outstanding_balance <= loan.loan_amount,
            "{} outstanding {} > amount {}",
            loan.loan_id,
            loan.outstanding_balance,
            loan.loan_amount
        );
        let cover = loan.collateral_cover();
        assert!(
            (0.5..=1.5).contains(&cover),
            "{} collateral cover {cover}",
            loan.loan_id
        );
        assert!((8.0..25.0).contains(&loan.interest_rate));
        assert!(TERM_CHOICES.contains(&loan.term_months));
        let age = (clock().as_of - loan.origination_date).num_days();
        assert!((1..1095).contains(&age), "originated {age} days ago");
    }
}

#[test]
fn zero_count_is_rejected_by_both_generators() {
    let mut rng = GeneratorRng::seeded(1);
    assert!(matches!(
        generate_borrowers(0, 1000, &mut rng, &clock()),
        Err(CreditError::InvalidArgument { .. })
    ));
    assert!(matches!(
        generate_loans(0, &GeneratorConfig::default(), &mut rng, &clock()),
        Err(CreditError::InvalidArgument { .. })
    ));
}

#[test]
fn status_mix_roughly_follows_weights() {
    use smartcredit_core::types::LoanStatus;

    let mut rng = GeneratorRng::seeded(2023);
    let loans = generate_loans(10_000, &GeneratorConfig::default(), &mut rng, &clock()).unwrap();
    let active = loans.iter().filter(|l| l.status == LoanStatus::Active).count();
    let share = active as f64 / loans.len() as f64;
    assert!(
        (share - 0.75).abs() < 0.03,
        "Expected ~75% active loans, got {:.1}%",
        share * 100.0
    );
}

#[test]
fn risk_band_mix_roughly_follows_weights() {
    use smartcredit_core::types::RiskBand;

    let mut rng = GeneratorRng::seeded(2025);
    let loans = generate_loans(10_000, &GeneratorConfig::default(), &mut rng, &clock()).unwrap();
    let share = |band: RiskBand| {
        loans.iter().filter(|l| l.risk_band == band).count() as f64 / loans.len() as f64
    };

    let low = share(RiskBand::Low);
    assert!((low - 0.60).abs() < 0.03, "Expected ~60% low-risk loans, got {:.1}%", low * 100.0);
    let critical = share(RiskBand::Critical);
    assert!(
        (critical - 0.05).abs() < 0.02,
        "Expected ~5% critical loans, got {:.1}%",
        critical * 100.0
    );
}
