//! Sampling loops that turn a generator and a seed into materialized values.
//!
//! The loops differ only in when they stop. [`generate_such_that`] and
//! [`generate_until`] have no bound and rely on the caller to guarantee that
//! the predicate eventually flips; [`capped_generate_until`] trades
//! completeness for a fixed draw budget. All loops are iterative, so the
//! number of rejections never affects stack depth.

use crate::{data::*, gen::*};
use tracing::{debug, trace};

/// Draw exactly `count` values, threading the seed through each draw.
pub fn generate_n<T>(count: usize, gen: &Gen<T>, seed: Seed) -> (Vec<T>, Seed) {
    let mut values = Vec::with_capacity(count);
    let mut seed = seed;
    for _ in 0..count {
        let (value, next) = gen.run(seed);
        values.push(value);
        seed = next;
    }
    (values, seed)
}

/// Draw until a value satisfies `predicate` and return it.
///
/// Unbounded: never returns if `predicate` cannot hold for `gen`'s output.
pub fn generate_such_that<T, P>(predicate: P, gen: &Gen<T>, seed: Seed) -> (T, Seed)
where
    P: Fn(&T) -> bool,
{
    let mut seed = seed;
    let mut rejections = 0usize;
    loop {
        let (value, next) = gen.run(seed);
        if predicate(&value) {
            if rejections > 0 {
                trace!(rejections, "accepted value after rejections");
            }
            return (value, next);
        }
        rejections += 1;
        seed = next;
    }
}

/// Collect values while `predicate` holds.
///
/// The first failing value ends the run and is not included. The returned
/// seed follows that final draw. Unbounded: never returns if `predicate`
/// holds for every value `gen` can produce.
pub fn generate_until<T, P>(predicate: P, gen: &Gen<T>, seed: Seed) -> (Vec<T>, Seed)
where
    P: Fn(&T) -> bool,
{
    let mut values = Vec::new();
    let mut seed = seed;
    loop {
        let (value, next) = gen.run(seed);
        seed = next;
        if !predicate(&value) {
            return (values, seed);
        }
        values.push(value);
    }
}

/// Bounded [`generate_until`]: stops at the first failing value or after
/// `max_count` draws, whichever comes first.
pub fn capped_generate_until<T, P>(
    max_count: usize,
    predicate: P,
    gen: &Gen<T>,
    seed: Seed,
) -> (Vec<T>, Seed)
where
    P: Fn(&T) -> bool,
{
    let mut values = Vec::new();
    let mut seed = seed;
    for _ in 0..max_count {
        let (value, next) = gen.run(seed);
        seed = next;
        if !predicate(&value) {
            return (values, seed);
        }
        values.push(value);
    }

    debug!(
        max_count,
        accepted = values.len(),
        "draw budget exhausted before predicate failed"
    );
    (values, seed)
}

/// Run [`generate_until`] for each index in `0..max_length` and concatenate
/// the results.
///
/// Every index starts from the same `seed`: the per-index runs are
/// independent explorations, not one continued stream. Each run inherits
/// the non-termination hazard of [`generate_until`].
pub fn generate_iteratively_until<T, P, F>(
    max_length: usize,
    predicate: P,
    index_to_gen: F,
    seed: Seed,
) -> Vec<T>
where
    P: Fn(&T) -> bool,
    F: Fn(usize) -> Gen<T>,
{
    let mut values = Vec::new();
    for index in 0..max_length {
        let (batch, _) = generate_until(&predicate, &index_to_gen(index), seed);
        values.extend(batch);
    }

    debug!(max_length, produced = values.len(), "iterative generation finished");
    values
}

/// [`generate_iteratively_until`] with the predicate negated: each index
/// collects values until one satisfies `predicate`.
pub fn generate_iteratively_such_that<T, P, F>(
    max_length: usize,
    predicate: P,
    index_to_gen: F,
    seed: Seed,
) -> Vec<T>
where
    P: Fn(&T) -> bool,
    F: Fn(usize) -> Gen<T>,
{
    generate_iteratively_until(max_length, |value: &T| !predicate(value), index_to_gen, seed)
}

/// Generate one value from [`DEFAULT_SEED`].
///
/// Handy for poking at a generator; every call returns the same value.
pub fn quick_generate<T>(gen: &Gen<T>) -> T {
    gen.run(Seed::from_u64(DEFAULT_SEED)).0
}

/// Generate `count` values from [`DEFAULT_SEED`].
pub fn quick_generate_n<T>(count: usize, gen: &Gen<T>) -> Vec<T> {
    generate_n(count, gen, Seed::from_u64(DEFAULT_SEED)).0
}

/// Drivers that take their seed and counts from a [`Config`].
impl Config {
    /// Generate one value from the configured seed.
    pub fn generate<T>(&self, gen: &Gen<T>) -> T {
        gen.run(self.initial_seed()).0
    }

    /// Generate `sample_count` values from the configured seed.
    pub fn generate_n<T>(&self, gen: &Gen<T>) -> Vec<T> {
        generate_n(self.sample_count, gen, self.initial_seed()).0
    }

    /// [`capped_generate_until`] with `draw_cap` as the budget.
    pub fn capped_until<T, P>(&self, predicate: P, gen: &Gen<T>) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        capped_generate_until(self.draw_cap, predicate, gen, self.initial_seed()).0
    }
}
