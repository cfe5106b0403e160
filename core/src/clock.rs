//! Generation clock — owns the as-of timestamp and the refresh counter.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationClock {
    /// Reference instant all backdated timestamps are measured from.
    pub as_of: DateTime<Utc>,
    /// Number of wholesale regenerations since the session was built.
    pub generation: u64,
}

impl GenerationClock {
    pub fn new(as_of: DateTime<Utc>) -> Self {
        Self { as_of, generation: 0 }
    }

    /// Advance one generation. Returns the new generation number.
    pub fn advance(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn days_ago(&self, days: i64) -> DateTime<Utc> {
        self.as_of - Duration::days(days)
    }
}
