//! Shared primitive types used across the portfolio core.
//!
//! Every categorical field is a closed enum. The display label is the
//! exact string the dashboard shows and the one serde reads and writes.

use crate::error::CreditError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A stable, unique identifier for a generated record (`BORR001`, `LOAN042`).
pub type EntityId = String;

macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.label())
            }
        }

        impl FromStr for $name {
            type Err = CreditError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok(Self::$variant),)+
                    other => Err(CreditError::invalid(
                        stringify!($name),
                        format!("unknown label '{other}'"),
                    )),
                }
            }
        }
    };
}

labelled_enum! {
    /// Business segment a borrower is booked under.
    pub enum Segment {
        Sme => "SME",
        Consumer => "Consumer",
        Agriculture => "Agriculture",
        Corporate => "Corporate",
    }
}

labelled_enum! {
    pub enum EmploymentType {
        Salaried => "Salaried",
        BusinessOwner => "Business Owner",
        SelfEmployed => "Self-Employed",
        Contractor => "Contractor",
    }
}

labelled_enum! {
    /// Ordered income bands. Each maps to a half-open monthly income range.
    pub enum IncomeBand {
        Low => "Low (<50K)",
        Medium => "Medium (50K-150K)",
        High => "High (150K-500K)",
        VeryHigh => "Very High (>500K)",
    }
}

impl IncomeBand {
    /// Monthly income range `[lo, hi)` for the band.
    pub fn income_range(&self) -> (i64, i64) {
        match self {
            Self::Low => (20_000, 50_000),
            Self::Medium => (50_000, 150_000),
            Self::High => (150_000, 500_000),
            Self::VeryHigh => (500_000, 1_000_000),
        }
    }

    pub fn contains(&self, monthly_income: i64) -> bool {
        let (lo, hi) = self.income_range();
        (lo..hi).contains(&monthly_income)
    }
}

labelled_enum! {
    pub enum Region {
        Nairobi => "Nairobi",
        Coast => "Coast",
        Central => "Central",
        RiftValley => "Rift Valley",
        Western => "Western",
        Eastern => "Eastern",
    }
}

labelled_enum! {
    pub enum ProductType {
        PersonalLoan => "Personal Loan",
        BusinessLoan => "Business Loan",
        Mortgage => "Mortgage",
        AutoLoan => "Auto Loan",
        SmeCredit => "SME Credit",
        EmergencyLoan => "Emergency Loan",
    }
}

labelled_enum! {
    pub enum LoanStatus {
        Active => "Active",
        Delinquent => "Delinquent",
        Restructured => "Restructured",
        Closed => "Closed",
        WrittenOff => "Written Off",
    }
}

impl LoanStatus {
    /// Only delinquent and restructured loans carry arrears.
    pub fn accrues_arrears(&self) -> bool {
        matches!(self, Self::Delinquent | Self::Restructured)
    }
}

labelled_enum! {
    /// Coarse ordinal risk classification, lowest first.
    pub enum RiskBand {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Critical => "Critical",
    }
}

/// Colour for labels that are not a known risk band.
pub const UNKNOWN_RISK_COLOR: &str = "#6c757d";

impl RiskBand {
    /// Hex colour used by the dashboard for this band.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => "#28a745",
            Self::Medium => "#ffc107",
            Self::High => "#fd7e14",
            Self::Critical => "#dc3545",
        }
    }
}

/// Colour for a free-form risk band label, grey when unrecognised.
pub fn risk_color(label: &str) -> &'static str {
    label
        .parse::<RiskBand>()
        .map(|band| band.color())
        .unwrap_or(UNKNOWN_RISK_COLOR)
}
