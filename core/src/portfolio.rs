//! Portfolio-level summary statistics over a loan table.

use crate::{
    loan_generator::Loan,
    types::{ProductType, RiskBand},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A loan is non-performing once arrears strictly exceed this many days.
pub const NPL_DAYS_PAST_DUE: u32 = 90;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_loans: usize,
    pub total_outstanding: f64,
    pub average_loan_size: f64,
    pub npl_count: usize,
    pub npl_ratio: f64,
    pub risk_distribution: BTreeMap<RiskBand, usize>,
    pub product_distribution: BTreeMap<ProductType, usize>,
}

pub fn is_non_performing(loan: &Loan) -> bool {
    loan.days_past_due > NPL_DAYS_PAST_DUE
}

/// Summarise a loan table. An empty table yields zero totals and a
/// zero NPL ratio rather than a division fault.
pub fn generate_portfolio_summary(loans: &[Loan]) -> PortfolioSummary {
    let total_loans = loans.len();
    let total_outstanding: f64 = loans.iter().map(|l| l.outstanding_balance).sum();
    let npl_count = loans.iter().filter(|l| is_non_performing(l)).count();

    let (average_loan_size, npl_ratio) = if total_loans > 0 {
        (
            total_outstanding / total_loans as f64,
            npl_count as f64 / total_loans as f64 * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    let mut risk_distribution = BTreeMap::new();
    let mut product_distribution = BTreeMap::new();
    for loan in loans {
        *risk_distribution.entry(loan.risk_band).or_insert(0) += 1;
        *product_distribution.entry(loan.product_type).or_insert(0) += 1;
    }

    PortfolioSummary {
        total_loans,
        total_outstanding,
        average_loan_size,
        npl_count,
        npl_ratio,
        risk_distribution,
        product_distribution,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NplTrendPoint {
    pub month: NaiveDate,
    pub npl_ratio: f64,
    /// Portfolio value in KES billions.
    pub portfolio_value: f64,
}

const TREND_NPL: [f64; 12] = [8.5, 8.2, 7.9, 7.7, 7.8, 8.1, 8.4, 8.6, 8.3, 8.0, 7.8, 7.6];
const TREND_VALUE: [f64; 12] = [
    200.0, 210.0, 215.0, 220.0, 225.0, 230.0, 235.0, 238.0, 240.0, 242.0, 244.0, 245.7,
];

/// Fixed twelve-month NPL trend, one point per 2023 month end.
pub fn sample_npl_trend() -> Vec<NplTrendPoint> {
    (1..=12u32)
        .zip(TREND_NPL.iter().zip(TREND_VALUE.iter()))
        .filter_map(|(month, (&npl_ratio, &portfolio_value))| {
            Some(NplTrendPoint {
                month: month_end(2023, month)?,
                npl_ratio,
                portfolio_value,
            })
        })
        .collect()
}

fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
