//! Magnitude extrema, weighted moments and uniqueness.
//!
//! Weighted mean is `Σ(w·x) / Σw` and weighted standard deviation is
//! `sqrt(Σ w·(x − mean)² / (Σw + correction))`, both computed in the element
//! type (integer arrays truncate). A zero weight sum, or a non-positive
//! denominator, yields zero instead of dividing.

use std::cmp::Ordering;

use num::One;

use crate::engine::statistics::extremum;
use crate::error::{empty_selection, Result};
use crate::narray::numeric::Numeric;
use crate::vectorizer::{check, All, Operand, Selection, Vectorizer};

pub trait Moments: Vectorizer<Value: Numeric> {
    /// Smallest absolute value.
    fn amin(&self) -> Result<Self::Value> {
        self.amin_masked(&All)
    }

    /// Largest absolute value.
    fn amax(&self) -> Result<Self::Value> {
        self.amax_masked(&All)
    }

    fn amin_masked<M: Selection>(&self, mask: &M) -> Result<Self::Value> {
        check(self, mask)?;
        extremum(self.as_slice(), mask, |a, b| a.magnitude() < b.magnitude())
            .map(Numeric::magnitude)
            .ok_or(empty_selection("amin"))
    }

    fn amax_masked<M: Selection>(&self, mask: &M) -> Result<Self::Value> {
        check(self, mask)?;
        extremum(self.as_slice(), mask, |a, b| a.magnitude() > b.magnitude())
            .map(Numeric::magnitude)
            .ok_or(empty_selection("amax"))
    }

    fn mean(&self) -> Self::Value {
        weighted_mean(self.as_slice(), &Self::Value::one(), &All)
    }

    fn mean_masked<M: Selection>(&self, mask: &M) -> Result<Self::Value> {
        self.mean_with(&Self::Value::one(), mask)
    }

    /// Mean weighted by `weights`, a container or a broadcast coefficient.
    fn mean_with<W, M>(&self, weights: &W, mask: &M) -> Result<Self::Value>
    where
        W: Operand<Self::Value>,
        M: Selection,
    {
        check(self, weights)?;
        check(self, mask)?;
        Ok(weighted_mean(self.as_slice(), weights, mask))
    }

    /// Standard deviation; `correction` is added to the weight sum, so zero
    /// gives the population deviation.
    fn sigma(&self, correction: Self::Value) -> Self::Value {
        weighted_sigma(self.as_slice(), &Self::Value::one(), &All, correction)
    }

    fn sigma_masked<M: Selection>(&self, mask: &M, correction: Self::Value) -> Result<Self::Value> {
        self.sigma_with(&Self::Value::one(), mask, correction)
    }

    fn sigma_with<W, M>(&self, weights: &W, mask: &M, correction: Self::Value) -> Result<Self::Value>
    where
        W: Operand<Self::Value>,
        M: Selection,
    {
        check(self, weights)?;
        check(self, mask)?;
        Ok(weighted_sigma(self.as_slice(), weights, mask, correction))
    }

    /// Whether all elements are pairwise different.
    fn unicity(&self) -> bool {
        runs(selection(self.as_slice(), &All), |a, b| a == b) == self.size()
    }

    /// Whether no two selected elements are equivalent under `eqv`.
    fn unicity_by<F, M>(&self, eqv: F, mask: &M) -> Result<bool>
    where
        F: FnMut(&Self::Value, &Self::Value) -> bool,
        M: Selection,
    {
        check(self, mask)?;
        let selected = selection(self.as_slice(), mask);
        let total = selected.len();
        Ok(runs(selected, eqv) == total)
    }

    /// Number of distinct values.
    fn distinct(&self) -> usize {
        runs(selection(self.as_slice(), &All), |a, b| a == b)
    }

    /// Number of equivalence classes of the selected elements under `eqv`.
    fn distinct_by<F, M>(&self, eqv: F, mask: &M) -> Result<usize>
    where
        F: FnMut(&Self::Value, &Self::Value) -> bool,
        M: Selection,
    {
        check(self, mask)?;
        Ok(runs(selection(self.as_slice(), mask), eqv))
    }
}

impl<V> Moments for V where V: Vectorizer<Value: Numeric> {}

fn weighted_mean<T, W, M>(elements: &[T], weights: &W, mask: &M) -> T
where
    T: Numeric,
    W: Operand<T>,
    M: Selection,
{
    let mut sum = T::zero();
    let mut total = T::zero();
    for (i, &x) in elements.iter().enumerate() {
        if mask.selected(i) {
            let w = weights.get(i);
            sum = sum + w * x;
            total = total + w;
        }
    }
    if total.is_zero() {
        T::zero()
    } else {
        sum / total
    }
}

fn weighted_sigma<T, W, M>(elements: &[T], weights: &W, mask: &M, correction: T) -> T
where
    T: Numeric,
    W: Operand<T>,
    M: Selection,
{
    let mean = weighted_mean(elements, weights, mask);
    let mut sum = T::zero();
    let mut total = T::zero();
    for (i, &x) in elements.iter().enumerate() {
        if mask.selected(i) {
            let w = weights.get(i);
            let deviation = x.spread(mean);
            sum = sum + w * deviation * deviation;
            total = total + w;
        }
    }
    let denominator = total + correction;
    if total.is_zero() || denominator <= T::zero() {
        T::zero()
    } else {
        (sum / denominator).sqrt()
    }
}

/// Sorted copy of the selected elements.
fn selection<T: Numeric, M: Selection>(elements: &[T], mask: &M) -> Vec<T> {
    let mut selected: Vec<T> = elements
        .iter()
        .enumerate()
        .filter(|&(i, _)| mask.selected(i))
        .map(|(_, &x)| x)
        .collect();
    selected.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    selected
}

/// Number of maximal runs of adjacent equivalent elements.
fn runs<T, F: FnMut(&T, &T) -> bool>(sorted: Vec<T>, mut eqv: F) -> usize {
    if sorted.is_empty() {
        return 0;
    }
    1 + sorted.windows(2).filter(|pair| !eqv(&pair[0], &pair[1])).count()
}
