//! Core data types: the seeded draw primitive and driver configuration.

use crate::error::*;
use std::fmt;

/// Seed used by the one-shot convenience drivers.
pub const DEFAULT_SEED: u64 = 42;

/// Upper bound accepted by [`Config::validate`] for driver counts.
pub const MAX_DRAW_CAP: usize = 1_000_000;

/// Environment variable read by [`Config::from_env`].
pub const SEED_ENV_VAR: &str = "SEEDGEN_SEED";

/// Immutable state of a SplitMix64 pseudo-random stream.
///
/// Every draw consumes a seed by value and hands back its successor, so the
/// same seed always produces the same draw. Seeds are `Copy`; keeping an old
/// one around and drawing from it again replays the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed(pub u64, pub u64);

impl Seed {
    /// Create a new seed from a single value.
    pub fn from_u64(value: u64) -> Self {
        let state = splitmix64_mix(value);
        let gamma = mix_gamma(state);
        Seed(state, gamma)
    }

    /// Generate the next random value and advance the seed.
    pub fn next_u64(self) -> (u64, Self) {
        let Seed(state, gamma) = self;
        let new_state = state.wrapping_add(gamma);
        let output = splitmix64_mix(new_state);
        (output, Seed(new_state, gamma))
    }

    /// Generate a bounded random value in `[0, bound)`.
    pub fn next_bounded(self, bound: u64) -> (u64, Self) {
        let (value, new_seed) = self.next_u64();
        (((value as u128 * bound as u128) >> 64) as u64, new_seed)
    }

    /// Draw a uniformly distributed boolean.
    pub fn draw_bool(self) -> (bool, Self) {
        let (value, new_seed) = self.next_u64();
        (value & 1 == 1, new_seed)
    }

    /// Draw an integer uniformly from the inclusive range `[low, high]`.
    ///
    /// Reversed bounds are swapped.
    pub fn draw_int(self, low: i64, high: i64) -> (i64, Self) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let span = high as i128 - low as i128 + 1;

        if span > u64::MAX as i128 {
            let (value, new_seed) = self.next_u64();
            return (value as i64, new_seed);
        }

        let (offset, new_seed) = self.next_bounded(span as u64);
        ((low as i128 + offset as i128) as i64, new_seed)
    }

    /// Draw a float from `[low, high]`. Reversed bounds are swapped.
    pub fn draw_float(self, low: f64, high: f64) -> (f64, Self) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let (value, new_seed) = self.next_u64();
        // 53 high bits give every representable step of a unit f64.
        let unit = (value >> 11) as f64 * (1.0 / (1u64 << 53) as f64);
        (low + unit * (high - low), new_seed)
    }

    /// Generate a random seed from thread-local entropy.
    pub fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        Seed::from_u64(rng.gen())
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed::from_u64(DEFAULT_SEED)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed::from_u64(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({}, {})", self.0, self.1)
    }
}

/// Configuration for the convenience drivers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed the drivers start from.
    pub seed: u64,

    /// Number of values produced by [`Config::generate_n`].
    pub sample_count: usize,

    /// Draw budget for [`Config::capped_until`].
    pub draw_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: DEFAULT_SEED,
            sample_count: 10,
            draw_cap: 100,
        }
    }
}

impl Config {
    /// Build a config from the defaults, overriding the seed with
    /// `SEEDGEN_SEED` when it is set.
    pub fn from_env() -> Result<Self> {
        match std::env::var(SEED_ENV_VAR) {
            Ok(raw) => Config::default().with_seed_str(&raw),
            Err(std::env::VarError::NotPresent) => Ok(Config::default()),
            Err(std::env::VarError::NotUnicode(_)) => Err(SeedgenError::InvalidConfig {
                message: format!("{SEED_ENV_VAR} is not valid unicode"),
            }),
        }
    }

    /// Parse a decimal seed, as found in `SEEDGEN_SEED`.
    pub fn with_seed_str(self, raw: &str) -> Result<Self> {
        let seed = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| SeedgenError::InvalidConfig {
                message: format!("{SEED_ENV_VAR}={raw:?}: {e}"),
            })?;
        Ok(self.with_seed(seed))
    }

    /// Use the given seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use the given sample count.
    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }

    /// Use the given draw cap.
    pub fn with_draw_cap(mut self, cap: usize) -> Self {
        self.draw_cap = cap;
        self
    }

    /// Check that the driver counts stay bounded.
    pub fn validate(&self) -> Result<()> {
        if self.sample_count > MAX_DRAW_CAP {
            return Err(SeedgenError::InvalidConfig {
                message: format!(
                    "sample_count {} exceeds the maximum of {MAX_DRAW_CAP}",
                    self.sample_count
                ),
            });
        }
        if self.draw_cap > MAX_DRAW_CAP {
            return Err(SeedgenError::InvalidConfig {
                message: format!(
                    "draw_cap {} exceeds the maximum of {MAX_DRAW_CAP}",
                    self.draw_cap
                ),
            });
        }
        Ok(())
    }

    /// The seed the drivers start from.
    pub fn initial_seed(&self) -> Seed {
        Seed::from_u64(self.seed)
    }
}

/// SplitMix64 mixing function for high-quality output.
fn splitmix64_mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Derive an odd gamma so the stream has maximal period.
fn mix_gamma(z: u64) -> u64 {
    (splitmix64_mix(z) | 1).wrapping_mul(0x9e3779b97f4a7c15)
}
