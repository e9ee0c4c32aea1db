//! seedgen: composable, seeded pseudo-random generators.
//!
//! This is the main entry point for the library. It re-exports
//! `seedgen-core`, so property tests only need `use seedgen::*;`.
//!
//! ```rust
//! use seedgen::*;
//!
//! let die = Gen::int_range(1, 6);
//! let (rolls, _next) = generate_n(3, &die, Seed::from_u64(1));
//! assert_eq!(rolls.len(), 3);
//! assert!(rolls.iter().all(|r| (1..=6).contains(r)));
//! ```

pub use seedgen_core::*;
