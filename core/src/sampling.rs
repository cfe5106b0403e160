//! Weighted categorical sampling over an explicit cumulative-weight table.
//!
//! One uniform draw per sample: roll in [0, total), return the first
//! entry whose running weight exceeds the roll.

use crate::{
    error::{CreditError, CreditResult},
    rng::GeneratorRng,
};
use serde::{Deserialize, Serialize};

/// A single `(value, weight)` row as it appears in config files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry<T> {
    pub value: T,
    pub weight: f64,
}

impl<T> WeightEntry<T> {
    pub fn new(value: T, weight: f64) -> Self {
        Self { value, weight }
    }
}

#[derive(Debug, Clone)]
pub struct CumulativeWeights<T> {
    values: Vec<T>,
    cumulative: Vec<f64>,
}

impl<T: Clone> CumulativeWeights<T> {
    pub fn from_entries(table: &'static str, entries: &[WeightEntry<T>]) -> CreditResult<Self> {
        if entries.is_empty() {
            return Err(CreditError::invalid(table, "weight table is empty"));
        }

        let mut values = Vec::with_capacity(entries.len());
        let mut cumulative = Vec::with_capacity(entries.len());
        let mut total = 0.0;
        for entry in entries {
            if !entry.weight.is_finite() || entry.weight < 0.0 {
                return Err(CreditError::invalid(
                    table,
                    format!("weight {} is not a finite non-negative number", entry.weight),
                ));
            }
            total += entry.weight;
            values.push(entry.value.clone());
            cumulative.push(total);
        }

        if total <= 0.0 {
            return Err(CreditError::invalid(table, "weights sum to zero"));
        }

        Ok(Self { values, cumulative })
    }

    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn sample(&self, rng: &mut GeneratorRng) -> T {
        let roll = rng.next_f64() * self.total();
        self.values_at(roll)
    }

    /// Value selected by a roll already scaled to [0, total).
    fn values_at(&self, roll: f64) -> T {
        for (value, cum) in self.values.iter().zip(self.cumulative.iter()) {
            if roll < *cum {
                return value.clone();
            }
        }
        // Rounding can leave the roll at exactly `total`.
        self.values[self.values.len() - 1].clone()
    }
}
