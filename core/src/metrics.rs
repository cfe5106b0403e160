//! Credit metrics — stateless functions over scalar inputs.
//!
//! Nothing here allocates shared state or touches the RNG; every
//! function returns the same output for the same input.

use crate::{
    config::DEFAULT_CURRENCY,
    error::{CreditError, CreditResult},
    types::RiskBand,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// DTI above this percentage is rejected outright.
pub const MAX_DTI_PERCENT: f64 = 60.0;
/// Loan amount may not exceed this many months of income.
pub const MAX_INCOME_MULTIPLE: f64 = 12.0;
pub const MAX_TERM_MONTHS: u32 = 60;
pub const DEFAULT_TERM_MONTHS: u32 = 12;
/// Ratio reported when there is no disposable income to divide by.
pub const AFFORDABILITY_FALLBACK_RATIO: f64 = 100.0;

// ── Risk banding ──────────────────────────────────────────────────

/// Map a 0-100 risk score to a band. Lower bounds are inclusive.
pub fn calculate_risk_band(score: f64) -> RiskBand {
    if score >= 80.0 {
        RiskBand::Critical
    } else if score >= 60.0 {
        RiskBand::High
    } else if score >= 40.0 {
        RiskBand::Medium
    } else {
        RiskBand::Low
    }
}

// ── Currency formatting ───────────────────────────────────────────

/// Compact currency display: millions to 2dp, thousands to 1dp,
/// otherwise whole units with thousands separators.
pub fn format_currency(amount: f64, currency: &str) -> String {
    if amount >= 1_000_000.0 {
        format!("{currency} {:.2}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("{currency} {:.1}K", amount / 1_000.0)
    } else {
        format!("{currency} {}", group_thousands(&format!("{amount:.0}")))
    }
}

pub fn format_kes(amount: f64) -> String {
    format_currency(amount, DEFAULT_CURRENCY)
}

/// Insert `,` every three digits of the integer part.
fn group_thousands(digits: &str) -> String {
    let (sign, body) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    if !body.chars().all(|c| c.is_ascii_digit()) {
        return digits.to_string();
    }
    let mut out = String::with_capacity(body.len() + body.len() / 3);
    for (i, c) in body.chars().enumerate() {
        if i > 0 && (body.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("{sign}{out}")
}

// ── Debt-to-income ────────────────────────────────────────────────

/// Monthly debt as a percentage of monthly income.
/// Zero income yields `f64::INFINITY` instead of a division fault.
pub fn calculate_debt_to_income(monthly_debt: f64, monthly_income: f64) -> f64 {
    if monthly_income == 0.0 {
        return f64::INFINITY;
    }
    monthly_debt / monthly_income * 100.0
}

// ── Loan parameter validation ─────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub loan_amount: f64,
    pub income: f64,
    #[serde(default)]
    pub existing_debt: f64,
    #[serde(default = "default_term")]
    pub term_months: u32,
}

fn default_term() -> u32 {
    DEFAULT_TERM_MONTHS
}

impl LoanRequest {
    pub fn new(loan_amount: f64, income: f64) -> Self {
        Self {
            loan_amount,
            income,
            existing_debt: 0.0,
            term_months: DEFAULT_TERM_MONTHS,
        }
    }

    pub fn with_existing_debt(mut self, existing_debt: f64) -> Self {
        self.existing_debt = existing_debt;
        self
    }

    pub fn with_term(mut self, term_months: u32) -> Self {
        self.term_months = term_months;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionReason {
    #[serde(rename = "Debt-to-income ratio too high")]
    DebtToIncomeTooHigh,
    #[serde(rename = "Loan amount exceeds annual income")]
    AmountExceedsAnnualIncome,
    #[serde(rename = "Loan term too long")]
    TermTooLong,
}

impl RejectionReason {
    pub fn message(&self) -> &'static str {
        match self {
            Self::DebtToIncomeTooHigh => "Debt-to-income ratio too high",
            Self::AmountExceedsAnnualIncome => "Loan amount exceeds annual income",
            Self::TermTooLong => "Loan term too long",
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::DebtToIncomeTooHigh => "Reduce loan amount or increase income",
            Self::AmountExceedsAnnualIncome => "Reduce loan amount",
            Self::TermTooLong => "Maximum term is 60 months",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoanDecision {
    Approved {
        dti_ratio: f64,
        message: String,
    },
    Rejected {
        reason: RejectionReason,
        suggestion: String,
        /// Present only when the DTI check was the one that failed.
        dti_ratio: Option<f64>,
    },
}

impl LoanDecision {
    fn rejected(reason: RejectionReason, dti_ratio: Option<f64>) -> Self {
        Self::Rejected {
            reason,
            suggestion: reason.suggestion().into(),
            dti_ratio,
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved { .. })
    }

    pub fn reason(&self) -> Option<RejectionReason> {
        match self {
            Self::Approved { .. } => None,
            Self::Rejected { reason, .. } => Some(*reason),
        }
    }

    /// DTI rendered the way the dashboard shows it, e.g. `166.7%`.
    pub fn dti_display(&self) -> Option<String> {
        let dti = match self {
            Self::Approved { dti_ratio, .. } => Some(*dti_ratio),
            Self::Rejected { dti_ratio, .. } => *dti_ratio,
        };
        dti.map(|d| format!("{d:.1}%"))
    }
}

/// Check a loan request against the lending rules.
///
/// Rules are evaluated in order and the first failure is reported:
/// DTI above 60%, then amount above twelve months' income, then a term
/// longer than 60 months.
pub fn validate_loan_parameters(request: &LoanRequest) -> CreditResult<LoanDecision> {
    if request.term_months == 0 {
        return Err(CreditError::invalid("term_months", "must be >= 1"));
    }

    let monthly_obligation =
        request.existing_debt + request.loan_amount / request.term_months as f64;
    let dti = calculate_debt_to_income(monthly_obligation, request.income);

    let decision = if dti > MAX_DTI_PERCENT {
        LoanDecision::rejected(RejectionReason::DebtToIncomeTooHigh, Some(dti))
    } else if request.loan_amount > request.income * MAX_INCOME_MULTIPLE {
        LoanDecision::rejected(RejectionReason::AmountExceedsAnnualIncome, None)
    } else if request.term_months > MAX_TERM_MONTHS {
        LoanDecision::rejected(RejectionReason::TermTooLong, None)
    } else {
        LoanDecision::Approved {
            dti_ratio: dti,
            message: "Loan parameters are acceptable".into(),
        }
    };
    Ok(decision)
}

// ── Affordability ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffordabilityBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl AffordabilityBand {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Excellent => "green",
            Self::Good => "blue",
            Self::Fair => "orange",
            Self::Poor => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityResult {
    pub disposable_income: f64,
    pub affordability_ratio: f64,
    pub status: AffordabilityBand,
}

pub fn calculate_affordability(
    monthly_income: f64,
    monthly_expenses: f64,
    proposed_payment: f64,
) -> AffordabilityResult {
    let disposable_income = monthly_income - monthly_expenses;
    let affordability_ratio = if disposable_income > 0.0 {
        proposed_payment / disposable_income * 100.0
    } else {
        AFFORDABILITY_FALLBACK_RATIO
    };

    let status = if affordability_ratio <= 30.0 {
        AffordabilityBand::Excellent
    } else if affordability_ratio <= 50.0 {
        AffordabilityBand::Good
    } else if affordability_ratio <= 70.0 {
        AffordabilityBand::Fair
    } else {
        AffordabilityBand::Poor
    };

    AffordabilityResult {
        disposable_income,
        affordability_ratio,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("-1234567"), "-1,234,567");
        assert_eq!(group_thousands("NaN"), "NaN");
    }

    #[test]
    fn negative_amounts_fall_to_plain_tier() {
        assert_eq!(format_kes(-5_000.0), "KES -5,000");
    }

    #[test]
    fn dti_display_rounds_to_one_place() {
        let d = validate_loan_parameters(&LoanRequest::new(2_000_000.0, 100_000.0)).unwrap();
        assert_eq!(d.dti_display().as_deref(), Some("166.7%"));
    }
}
