//! # vose_alias
//!
//! Weighted random selection of an index in constant time.
//!
//! This crate implements
//! [Vose's alias method](https://en.wikipedia.org/wiki/Alias_method):
//! one linear pass turns a list of non-negative weights into a pair of
//! tables, and every draw after that costs two random numbers and one branch.
//!
//! ## Quick start
//!
//! ```rust
//! use vose_alias::AliasSampler;
//!
//! # fn main() -> Result<(), vose_alias::WeightError> {
//! // Weights need not sum to one.
//! let sampler = AliasSampler::new(&[15.0, 85.0])?;
//! let variant = sampler.next(); // 0 about 15% of the time
//! assert!(variant < 2);
//! # Ok(()) }
//! ```
//!
//! ## Reproducible draws
//!
//! Samplers draw from a [`SharedSource`]. Hand in a seeded one to replay a
//! sequence, or clone one handle into several samplers so they share a
//! single generator.
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use vose_alias::{AliasSampler, SharedSource};
//!
//! # fn main() -> Result<(), vose_alias::WeightError> {
//! let src: SharedSource<StdRng> = SharedSource::seeded(7);
//! let colors = AliasSampler::new_with_rng(&[0.5, 0.5], src.clone())?;
//! let layouts = AliasSampler::new_with_rng(&[0.2, 0.3, 0.5], src)?;
//! let _ = (colors.next(), layouts.next());
//! # Ok(()) }
//! ```
//!
//! ## Performance
//! * **Build**: O(n) time, O(n) scratch space (a working copy and one index buffer).
//! * **Sample**: O(1) per draw, allocation-free.
//! * **Space**: 2 vectors of length `n` (f64 + usize).
//!
//! ## Gotchas
//! * Weights must be non-negative and finite; `NaN`/∞ are rejected.
//! * All-zero weights are accepted and sample uniformly.
//! * Tables are fixed. To change the distribution, build a new sampler.

mod choice;
mod error;
mod random;
mod sampler;
mod vose;

pub use choice::WeightedChoice;
pub use error::WeightError;
pub use random::{RandomSource, SharedSource};
pub use sampler::{AliasSampler, DefaultSource};
pub use vose::AliasTable;
