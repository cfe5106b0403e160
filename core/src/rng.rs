//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through GeneratorRng instances derived
//! from the single master seed held by the session.
//!
//! Each generator gets its own RNG stream, seeded from
//! (master_seed, slot, generation). This means:
//!   - Adding a new slot never changes existing slots' streams.
//!   - Borrowers and loans are reproducible in isolation.
//!   - A refresh (new generation) yields a fresh but reproducible batch.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single generator.
pub struct GeneratorRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl GeneratorRng {
    /// Create an RNG from an explicit seed. Tests that exercise a single
    /// generator without a bank use this directly.
    pub fn seeded(seed: u64) -> Self {
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Float drawn uniformly from [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Integer drawn uniformly from [lo, hi). `hi` must exceed `lo`.
    pub fn int_between(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(hi > lo, "empty range {lo}..{hi}");
        lo + self.next_u64_below((hi - lo) as u64) as i64
    }

    /// Pick one element uniformly.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_u64_below(items.len() as u64) as usize]
    }
}

/// All generator RNGs for a single session, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// RNG for a slot at generation 0.
    pub fn for_slot(&self, slot: GeneratorSlot) -> GeneratorRng {
        self.for_slot_at_generation(slot, 0)
    }

    /// RNG for a slot at a given generation. Each refresh of a session
    /// bumps the generation, so every batch gets a distinct stream.
    pub fn for_slot_at_generation(&self, slot: GeneratorSlot, generation: u64) -> GeneratorRng {
        let derived_seed = self.master_seed
            ^ (slot as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15)
            ^ generation.wrapping_mul(0xbf58_476d_1ce4_e5b9);
        GeneratorRng::seeded(derived_seed).with_name(slot.name())
    }
}

/// Stable slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every generator's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum GeneratorSlot {
    Borrower = 0,
    Loan = 1,
    // Add new generators here — append only.
}

impl GeneratorSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Borrower => "borrower",
            Self::Loan => "loan",
        }
    }
}
