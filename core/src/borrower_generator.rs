//! Synthetic borrower generation.

use crate::{
    clock::GenerationClock,
    error::{CreditError, CreditResult},
    name_generator::NameGenerator,
    rng::GeneratorRng,
    types::{EmploymentType, EntityId, IncomeBand, Region, Segment},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CREDIT_SCORE_MIN: i64 = 300;
pub const CREDIT_SCORE_MAX: i64 = 850;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Borrower {
    pub borrower_id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub segment: Segment,
    pub employment_type: EmploymentType,
    pub income_band: IncomeBand,
    pub monthly_income: i64,
    pub region: Region,
    pub credit_score: i64,
    pub registration_date: DateTime<Utc>,
}

pub fn borrower_id(sequence: u64) -> EntityId {
    format!("BORR{sequence:03}")
}

/// Generate `count` borrowers with sequential ids `BORR001..`.
///
/// `backdate_days` bounds how far back registration dates reach;
/// dates fall between 1 and `backdate_days - 1` days before `clock.as_of`.
pub fn generate_borrowers(
    count: usize,
    backdate_days: u32,
    rng: &mut GeneratorRng,
    clock: &GenerationClock,
) -> CreditResult<Vec<Borrower>> {
    if count == 0 {
        return Err(CreditError::invalid("count", "borrower count must be >= 1"));
    }
    if backdate_days < 2 {
        return Err(CreditError::invalid("backdate_days", "must be >= 2"));
    }

    let mut borrowers = Vec::with_capacity(count);
    for i in 1..=count {
        let income_band = *rng.pick(IncomeBand::ALL);
        let (lo, hi) = income_band.income_range();
        let monthly_income = rng.int_between(lo, hi);

        borrowers.push(Borrower {
            borrower_id: borrower_id(i as u64),
            first_name: NameGenerator::generate_first_name(rng).into(),
            last_name: NameGenerator::generate_last_name(rng).into(),
            email: NameGenerator::email_for(i),
            phone: NameGenerator::generate_phone(rng),
            segment: *rng.pick(Segment::ALL),
            employment_type: *rng.pick(EmploymentType::ALL),
            income_band,
            monthly_income,
            region: *rng.pick(Region::ALL),
            credit_score: rng.int_between(CREDIT_SCORE_MIN, CREDIT_SCORE_MAX),
            registration_date: clock.days_ago(rng.int_between(1, backdate_days as i64)),
        });
    }

    log::debug!("{}: generated {count} borrowers", rng.name);
    Ok(borrowers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn clock() -> GenerationClock {
        GenerationClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn ids_are_sequential_and_padded() {
        let mut rng = GeneratorRng::seeded(1);
        let borrowers = generate_borrowers(3, 1000, &mut rng, &clock()).unwrap();
        let ids: Vec<_> = borrowers.iter().map(|b| b.borrower_id.as_str()).collect();
        assert_eq!(ids, ["BORR001", "BORR002", "BORR003"]);
        assert_eq!(borrowers[2].email, "borrower3@kcb.com");
        assert_eq!(borrower_id(1000), "BORR1000");
    }

    #[test]
    fn zero_count_is_invalid() {
        let mut rng = GeneratorRng::seeded(1);
        let err = generate_borrowers(0, 1000, &mut rng, &clock()).unwrap_err();
        assert!(matches!(err, CreditError::InvalidArgument { argument: "count", .. }));
    }

    #[test]
    fn registration_dates_fall_inside_backdate_window() {
        let clock = clock();
        let mut rng = GeneratorRng::seeded(11);
        for b in generate_borrowers(300, 1000, &mut rng, &clock).unwrap() {
            let age = (clock.as_of - b.registration_date).num_days();
            assert!((1..1000).contains(&age), "registration {age} days ago");
        }
    }
}
