use crate::error::WeightError;
use crate::random::RandomSource;
use crate::vose::AliasTable;

/// Items labelled with weights, sampled through an internal [`AliasTable`].
///
/// Build it from any iterator of `(item, weight)` where `weight >= 0`.
#[derive(Debug, Clone)]
pub struct WeightedChoice<T> {
    table: AliasTable,
    items: Vec<T>,
}

impl<T> WeightedChoice<T> {
    /// Build from any `(item, weight)` iterator.
    ///
    /// # Errors
    /// Same as [`AliasTable::new`] on the collected weights.
    ///
    /// # Complexity
    /// O(n) time / O(n) space.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, WeightError>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let (items, weights): (Vec<T>, Vec<f64>) = pairs.into_iter().unzip();
        let table = AliasTable::new(&weights)?;
        Ok(Self { table, items })
    }

    /// Sample an item **by reference** (no `Clone` bound).
    pub fn sample<'a, R: RandomSource + ?Sized>(&'a self, rng: &mut R) -> &'a T {
        &self.items[self.table.sample_index(rng)]
    }

    /// Sample an item **by value** (clones the chosen element).
    pub fn sample_owned<R: RandomSource + ?Sized>(&self, rng: &mut R) -> T
    where
        T: Clone,
    {
        self.sample(rng).clone()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn table(&self) -> &AliasTable {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
