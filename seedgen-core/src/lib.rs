//! Core functionality for seedgen.
//!
//! This crate provides the building blocks for deterministic, seeded value
//! generation: the [`Seed`] draw primitive, the [`Gen`] generator type and
//! its combinators, and the sampling loops that turn generators into values.

pub mod combinators;
pub mod data;
pub mod error;
pub mod gen;
pub mod sample;

// Re-export the main types
pub use combinators::*;
pub use data::*;
pub use error::*;
pub use gen::*;
pub use sample::*;
