use rand::rngs::StdRng;

use crate::error::WeightError;
use crate::random::{RandomSource, SharedSource};
use crate::vose::AliasTable;

/// Generator used when the caller does not supply one.
pub type DefaultSource = StdRng;

/// An [`AliasTable`] bundled with the generator it draws from.
///
/// The sampler owns its table exclusively and holds a [`SharedSource`]
/// handle, so one generator can feed many samplers. The table is never
/// mutated after construction; only the generator advances.
#[derive(Debug, Clone)]
pub struct AliasSampler<R = DefaultSource> {
    table: AliasTable,
    source: SharedSource<R>,
}

impl AliasSampler<DefaultSource> {
    /// Build a sampler backed by a fresh OS-seeded [`DefaultSource`].
    ///
    /// # Errors
    /// See [`AliasTable::new`].
    pub fn new(weights: &[f64]) -> Result<Self, WeightError> {
        Self::new_with_rng(weights, SharedSource::from_os_rng())
    }
}

impl<R: RandomSource> AliasSampler<R> {
    /// Build a sampler that draws from a caller-supplied generator.
    ///
    /// Pass a [`SharedSource::seeded`] handle for reproducible draws.
    ///
    /// # Errors
    /// See [`AliasTable::new`].
    pub fn new_with_rng(weights: &[f64], rng: SharedSource<R>) -> Result<Self, WeightError> {
        Ok(Self::from_table(AliasTable::new(weights)?, rng))
    }

    pub fn from_table(table: AliasTable, rng: SharedSource<R>) -> Self {
        Self { table, source: rng }
    }

    /// Draw one outcome index in `0..len()`.
    ///
    /// Infallible for any constructed sampler. Only the generator's state
    /// changes; the tables are read-only.
    #[inline]
    pub fn next(&self) -> usize {
        self.source.with(|rng| self.table.sample_index(rng))
    }

    /// Endless stream of draws.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::repeat_with(move || self.next())
    }

    pub fn table(&self) -> &AliasTable {
        &self.table
    }

    pub fn source(&self) -> &SharedSource<R> {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
