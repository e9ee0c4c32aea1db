//! Bounded sampling properties
//!
//! Termination, output bounds and seed handling of the sampling loops.

use crate::{arbitrary_seed, sample_seeds};
use seedgen::*;

fn die() -> Gen<i32> {
    Gen::int_range(1, 6)
}

/// Property: capped sampling returns within its budget whatever the predicate
pub fn test_capped_termination() {
    let caps = Gen::<Vec<usize>>::list(20, Gen::int_range(0, 200).map(|n| n as usize));
    let cases = zip2(caps, arbitrary_seed());

    let ((caps, seed), _) = cases.run(Seed::from_u64(2024));
    for cap in caps {
        let (always, _) = capped_generate_until(cap, |_| true, &die(), seed);
        assert_eq!(always.len(), cap);

        let (never, _) = capped_generate_until(cap, |_| false, &die(), seed);
        assert!(never.is_empty());

        let (some, _) = capped_generate_until(cap, |&v| v != 6, &die(), seed);
        assert!(some.len() <= cap);
        assert!(some.iter().all(|&v| v != 6));
    }
}

/// Property: The die scenario is stable from `Seed::from_u64(1)`
pub fn test_die_scenario() {
    let (rolls, _) = generate_n(3, &die(), Seed::from_u64(1));
    let (again, _) = generate_n(3, &die(), Seed::from_u64(1));
    assert_eq!(rolls, again);
    assert_eq!(rolls.len(), 3);
    assert!(rolls.iter().all(|r| (1..=6).contains(r)));

    let (until_six, _) = capped_generate_until(100, |&v| v != 6, &die(), Seed::from_u64(1));
    assert!(until_six.len() <= 100);
    assert!(until_six.iter().all(|&v| v != 6));

    // Stopped early only because a 6 came up right after the accepted rolls.
    if until_six.len() < 100 {
        let (_, after) = generate_n(until_six.len(), &die(), Seed::from_u64(1));
        assert_eq!(die().run(after).0, 6);
    }
}

/// Property: generate_n returns exactly n values for every n
pub fn test_generate_n_lengths() {
    for (n, seed) in sample_seeds(25).into_iter().enumerate() {
        let (values, _) = generate_n(n, &Gen::bool(), seed);
        assert_eq!(values.len(), n);
    }
}

/// Property: Unbounded loops terminate when the predicate is guaranteed to flip
pub fn test_unbounded_loops_with_satisfiable_predicates() {
    for seed in sample_seeds(30) {
        let (value, _) = generate_such_that(|&v| v == 1, &die(), seed);
        assert_eq!(value, 1);

        let (values, _) = generate_until(|&v| v < 6, &die(), seed);
        assert!(values.iter().all(|&v| v < 6));
    }
}

/// Property: A rarely satisfied predicate does not grow the stack
pub fn test_deep_rejection_is_iterative() {
    let needle = Gen::int_range(0, 199_999);
    let (value, _) = generate_such_that(|&v| v == 7, &needle, Seed::from_u64(5));
    assert_eq!(value, 7);

    let (found, _) = needle.keep_if(|&v| v == 11).run(Seed::from_u64(6));
    assert_eq!(found, 11);
}

/// Property: Iterative generation explores every index from one seed
pub fn test_iterative_generation() {
    let seed = Seed::from_u64(77);
    let values = generate_iteratively_until(
        5,
        |&(_, v): &(usize, i32)| v != 6,
        |index| die().map(move |v| (index, v)),
        seed,
    );

    assert!(values.iter().all(|&(index, v)| index < 5 && v != 6));

    // Indices appear in order and each batch has the same length.
    let per_index: Vec<usize> = (0..5)
        .map(|i| values.iter().filter(|(index, _)| *index == i).count())
        .collect();
    assert!(per_index.windows(2).all(|w| w[0] == w[1]));
    assert!(values.windows(2).all(|w| w[0].0 <= w[1].0));

    // Each index collects values until one exceeds 3; wider ranges for
    // later indices keep that reachable.
    let below = generate_iteratively_such_that(
        3,
        |&v| v > 3,
        |index| Gen::int_range(0, 4 + index as i32),
        seed,
    );
    assert!(below.iter().all(|&v| v <= 3));
}

/// Property: Convenience drivers are fixed unless the config changes
pub fn test_convenience_drivers() {
    assert_eq!(quick_generate(&die()), quick_generate(&die()));
    assert_eq!(quick_generate_n(10, &die()), Config::default().generate_n(&die()));

    let config = Config::default().with_seed(123);
    assert_eq!(config.generate(&die()), die().run(Seed::from_u64(123)).0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_sampling_property_tests() {
        test_capped_termination();
        test_die_scenario();
        test_generate_n_lengths();
        test_unbounded_loops_with_satisfiable_predicates();
        test_deep_rejection_is_iterative();
        test_iterative_generation();
        test_convenience_drivers();
    }
}
