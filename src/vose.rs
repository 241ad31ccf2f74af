//! Vose's alias method for O(1) sampling from a discrete distribution.

use std::str::FromStr;

use log::debug;

use crate::error::WeightError;
use crate::random::RandomSource;

/// Immutable probability and alias columns for a fixed distribution.
///
/// Column `i` resolves to outcome `i` with probability `probabilities()[i]`
/// and to `aliases()[i]` otherwise. Built once by [`AliasTable::new`]; there
/// is no way to reweigh it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    prob: Vec<f64>,
    alias: Vec<usize>,
}

impl AliasTable {
    /// Construct an alias table from non-negative weights. O(n).
    ///
    /// Weights need not sum to one; they are normalized on a private working
    /// copy. If every weight is zero the table samples uniformly.
    ///
    /// # Errors
    /// * [`WeightError::Empty`] if `weights` is empty.
    /// * [`WeightError::NonFinite`] for a NaN or infinite weight.
    /// * [`WeightError::Negative`] for a weight below zero.
    /// * [`WeightError::TooManyOutcomes`] if the length does not fit in a `u32`.
    pub fn new(weights: &[f64]) -> Result<Self, WeightError> {
        let n = weights.len();
        if n == 0 {
            return Err(WeightError::Empty);
        }
        if u32::try_from(n).is_err() {
            return Err(WeightError::TooManyOutcomes { len: n });
        }

        let mut max = 0.0f64;
        for (index, &value) in weights.iter().enumerate() {
            if !value.is_finite() {
                return Err(WeightError::NonFinite { index, value });
            }
            if value < 0.0 {
                return Err(WeightError::Negative { index, value });
            }
            max = max.max(value);
        }
        if max == 0.0 {
            debug!("alias table: all {n} weights are zero, sampling uniformly");
            return Ok(Self::uniform(n));
        }

        // Dividing by the maximum first keeps the sum finite for huge weights.
        let mut work: Vec<f64> = weights.iter().map(|&w| w / max).collect();
        let sum: f64 = work.iter().sum();
        for w in &mut work {
            *w /= sum;
        }

        let scale = n as f64;
        let average = 1.0 / scale;

        let mut prob = vec![0.0f64; n];
        let mut alias = (0..n).collect::<Vec<_>>();
        let mut lists = Worklists::new(n);

        for (i, &p) in work.iter().enumerate() {
            if p < average {
                lists.push_small(i);
            } else {
                lists.push_large(i);
            }
        }

        let mut paired = 0usize;
        while let Some((less, more)) = lists.pop_pair() {
            prob[less] = (work[less] * scale).clamp(0.0, 1.0);
            alias[less] = more;

            work[more] = (work[more] + work[less]) - average;

            if work[more] < average {
                lists.push_small(more);
            } else {
                lists.push_large(more);
            }
            paired += 1;
        }

        // Rounding can strand entries in either list; they keep their own column.
        let mut drained = 0usize;
        for i in lists.remaining() {
            prob[i] = 1.0;
            alias[i] = i;
            drained += 1;
        }

        debug!("alias table: n={n} paired={paired} drained={drained}");
        Ok(Self { prob, alias })
    }

    fn uniform(n: usize) -> Self {
        Self {
            prob: vec![1.0; n],
            alias: (0..n).collect(),
        }
    }

    /// Draw a single outcome index in O(1).
    ///
    /// Consumes one bounded integer (the column) and then one real (the coin)
    /// from `rng`. Never fails and always returns a value in `0..len()`.
    #[inline]
    pub fn sample_index<R: RandomSource + ?Sized>(&self, rng: &mut R) -> usize {
        // `new` guarantees the length fits in a u32.
        let column = rng.next_u32_bounded(self.prob.len() as u32) as usize;
        let u = rng.next_f64();
        if u < self.prob[column] {
            column
        } else {
            self.alias[column]
        }
    }

    /// Draw `draws` samples, returning counts per index.
    pub fn sample_counts<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        draws: usize,
    ) -> Vec<usize> {
        let mut counts = vec![0usize; self.prob.len()];
        for _ in 0..draws {
            counts[self.sample_index(rng)] += 1;
        }
        counts
    }

    /// The normalized distribution this table samples from.
    pub fn outcome_probabilities(&self) -> Vec<f64> {
        let n = self.prob.len() as f64;
        let mut out = vec![0.0f64; self.prob.len()];
        for (column, (&p, &a)) in self.prob.iter().zip(&self.alias).enumerate() {
            out[column] += p / n;
            out[a] += (1.0 - p) / n;
        }
        out
    }

    /// Per-column probability of keeping the column's own outcome.
    pub fn probabilities(&self) -> &[f64] {
        &self.prob
    }

    /// Per-column fallback outcome.
    pub fn aliases(&self) -> &[usize] {
        &self.alias
    }

    pub fn len(&self) -> usize {
        self.prob.len()
    }

    /// Always `false`: construction rejects empty weight lists.
    pub fn is_empty(&self) -> bool {
        self.prob.is_empty()
    }
}

/// Parses a weight list such as `"0.15, 0.85"` or `"1 2 3"`.
impl FromStr for AliasTable {
    type Err = WeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let weights = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<f64>().map_err(|_| WeightError::Parse {
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&weights)
    }
}

/// The `small` and `large` worklists packed into one buffer of length n.
///
/// `small` grows up from the front and `large` down from the back. An index
/// sits in at most one list, so the two never collide.
struct Worklists {
    buf: Vec<usize>,
    small_len: usize,
    large_start: usize,
}

impl Worklists {
    fn new(n: usize) -> Self {
        Self {
            buf: vec![0; n],
            small_len: 0,
            large_start: n,
        }
    }

    fn push_small(&mut self, i: usize) {
        self.buf[self.small_len] = i;
        self.small_len += 1;
    }

    fn push_large(&mut self, i: usize) {
        self.large_start -= 1;
        self.buf[self.large_start] = i;
    }

    /// Pops one entry from each list, or nothing if either is empty.
    fn pop_pair(&mut self) -> Option<(usize, usize)> {
        if self.small_len == 0 || self.large_start == self.buf.len() {
            return None;
        }
        self.small_len -= 1;
        let less = self.buf[self.small_len];
        let more = self.buf[self.large_start];
        self.large_start += 1;
        Some((less, more))
    }

    fn remaining(&self) -> impl Iterator<Item = usize> + '_ {
        self.buf[..self.small_len]
            .iter()
            .chain(&self.buf[self.large_start..])
            .copied()
    }
}
