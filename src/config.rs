//! Module for the persisted seed record that anchors reproducible generation.
//!
//! A run's randomness is fully determined by a single integer seed stored in
//! a small TOML document next to the fixture folder. Alongside the seed the
//! document stores a `check` value: one draw taken from a fresh stream
//! seeded with the seed itself. Recomputing that draw and comparing it with
//! the persisted value detects a hand-edited or corrupted record without
//! having to store any generator state.

use std::ops::RangeInclusive;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Stream;
use crate::error::{Error, config_corrupt};

/// Range the seed (and its check fingerprint) are drawn from.
pub(crate) const SEED_RANGE: RangeInclusive<u64> = 1..=1_000_000;

/// Default name of the persisted config document, usually a sibling of the
/// fixture folder.
pub const DEFAULT_CONFIG: &str = "testgen.toml";

/// The persisted `{seed, check}` pair. Never mutated in place: a mismatch
/// produces a whole new record, and only with explicit confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecord {
    seed: u64,
    check: u64,
}

impl SeedRecord {
    /// Draws a fresh seed from an unseeded OS-backed source and fingerprints it.
    pub fn generate() -> Self {
        let seed = rand::thread_rng().gen_range(SEED_RANGE);
        Self::from_seed(seed)
    }

    /// Builds the record for a known seed. Useful to pin a seed in CI.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            check: derive_check(seed),
        }
    }

    /// Reads a persisted record.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ConfigMissing { path: path.into() }
            } else {
                Error::Io(e)
            }
        })?;
        toml::from_str(&raw).map_err(|e| config_corrupt(path, e.to_string()))
    }

    /// Writes `{seed, check}` to `path`, overwriting any existing record.
    pub fn persist(&self, path: &Path) -> Result<(), Error> {
        let doc = toml::to_string(self).expect("a seed record always serializes");
        std::fs::write(path, doc)?;
        Ok(())
    }

    /// Recomputes the check from the seed and compares. Pure, no side effects.
    pub fn check_seed(&self) -> bool {
        derive_check(self.seed) == self.check
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// Fingerprint of a seed: exactly one draw from a second, independently
/// seeded stream. No arithmetic shortcut relates neighbouring seeds.
pub(crate) fn derive_check(seed: u64) -> u64 {
    Stream::new(seed).draw_in_seed_range()
}
