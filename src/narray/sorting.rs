//! Sort family with companion-index support.
//!
//! Without a companion and without a mask the contiguous storage is sorted
//! directly. Otherwise the selected `(value, key)` pairs are extracted,
//! stably sorted on the value alone and written back into the selected
//! positions, so unselected elements and keys stay where they were.
//!
//! A companion initialized to `0..N` records, after a sort, the original
//! position of every element; [`Sorting::rearrange`] replays that
//! permutation on another array.

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::narray::numeric::Numeric;
use crate::vectorizer::{check, Companion, Selection, Vectorizer};

pub trait Sorting: Vectorizer<Value: Numeric> {
    /// Ascending in-place sort.
    fn arrange(&mut self) -> &mut Self {
        self.arrange_by(ascending)
    }

    fn arrange_by<F>(&mut self, cmp: F) -> &mut Self
    where
        F: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        self.as_mut_slice().sort_by(cmp);
        self
    }

    /// In-place sort permuting `companion` in lock-step and touching only
    /// the selected positions.
    fn arrange_with<F, C, M>(&mut self, cmp: F, companion: &mut C, mask: &M) -> Result<&mut Self>
    where
        F: FnMut(&Self::Value, &Self::Value) -> Ordering,
        C: Companion,
        M: Selection,
    {
        check(&*self, &*companion)?;
        check(&*self, mask)?;
        if !C::ENABLED && !M::ENABLED {
            return Ok(self.arrange_by(cmp));
        }
        tracing::trace!(
            size = self.size(),
            companion = C::ENABLED,
            masked = M::ENABLED,
            "sorting selected pairs"
        );
        sort_pairs(self.as_mut_slice(), cmp, companion, mask);
        Ok(self)
    }

    /// Ascending sorted copy.
    fn sort(&self) -> Self {
        let mut result = self.clone();
        result.arrange();
        result
    }

    fn sort_by<F>(&self, cmp: F) -> Self
    where
        F: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        let mut result = self.clone();
        result.arrange_by(cmp);
        result
    }

    fn sort_with<F, C, M>(&self, cmp: F, companion: &mut C, mask: &M) -> Result<Self>
    where
        F: FnMut(&Self::Value, &Self::Value) -> Ordering,
        C: Companion,
        M: Selection,
    {
        let mut result = self.clone();
        result.arrange_with(cmp, companion, mask)?;
        Ok(result)
    }

    /// In-place sort by ascending absolute value.
    fn aarrange(&mut self) -> &mut Self {
        self.arrange_by(by_magnitude)
    }

    fn aarrange_with<C, M>(&mut self, companion: &mut C, mask: &M) -> Result<&mut Self>
    where
        C: Companion,
        M: Selection,
    {
        self.arrange_with(by_magnitude, companion, mask)
    }

    fn asort(&self) -> Self {
        self.sort_by(by_magnitude)
    }

    fn asort_with<C, M>(&self, companion: &mut C, mask: &M) -> Result<Self>
    where
        C: Companion,
        M: Selection,
    {
        self.sort_with(by_magnitude, companion, mask)
    }

    /// Replays the permutation recorded in `indexes`: the element at
    /// position `k` moves to the position holding the `k`-th smallest key.
    ///
    /// Without a real index container the elements are shuffled with the
    /// thread-local generator instead.
    fn rearrange<C>(&mut self, indexes: &C) -> Result<&mut Self>
    where
        C: Companion<Key: PartialOrd>,
    {
        check(&*self, indexes)?;
        if !C::ENABLED {
            tracing::trace!(size = self.size(), "no index container, shuffling");
            return Ok(self.shuffle(&mut rand::rng()));
        }
        let mut order: Vec<(C::Key, usize)> = (0..self.size())
            .filter_map(|position| indexes.key(position).map(|key| (key, position)))
            .collect();
        order.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        let original = self.clone();
        let slice = self.as_mut_slice();
        for (&(_, position), &x) in order.iter().zip(original.as_slice()) {
            slice[position] = x;
        }
        Ok(self)
    }

    /// Copy-returning [`rearrange`](Sorting::rearrange).
    fn resort<C>(&self, indexes: &C) -> Result<Self>
    where
        C: Companion<Key: PartialOrd>,
    {
        let mut result = self.clone();
        result.rearrange(indexes)?;
        Ok(result)
    }

    /// Uniform random permutation driven by `rng`.
    fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        SliceRandom::shuffle(self.as_mut_slice(), rng);
        self
    }
}

impl<V> Sorting for V where V: Vectorizer<Value: Numeric> {}

#[inline]
fn ascending<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

#[inline]
fn by_magnitude<T: Numeric>(a: &T, b: &T) -> Ordering {
    ascending(&a.magnitude(), &b.magnitude())
}

fn sort_pairs<T, F, C, M>(elements: &mut [T], mut cmp: F, companion: &mut C, mask: &M)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
    C: Companion,
    M: Selection,
{
    let positions: Vec<usize> = (0..elements.len()).filter(|&i| mask.selected(i)).collect();
    let mut pairs: Vec<(T, Option<C::Key>)> = positions
        .iter()
        .map(|&i| (elements[i], companion.key(i)))
        .collect();
    pairs.sort_by(|a, b| cmp(&a.0, &b.0));
    for (&position, (value, key)) in positions.iter().zip(pairs) {
        elements[position] = value;
        if let Some(key) = key {
            companion.set_key(position, key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::StaticVector;
    use crate::vectorizer::NoCompanion;

    #[test]
    fn test_fast_path_and_pair_path_agree() {
        let v = StaticVector::new([5i32, -1, 3, 3, 0]);
        let fast = v.sort();
        let paired = v
            .sort_with(ascending, &mut NoCompanion, &StaticVector::<bool, 5>::splat(true))
            .unwrap();
        assert_eq!(fast, paired);
        assert_eq!(fast.into_array(), [-1, 0, 3, 3, 5]);
    }

    #[test]
    fn test_masked_sort_keeps_unselected_positions() {
        let mut v = StaticVector::new([9i32, 4, 7, 1, 8]);
        let mask = StaticVector::new([true, false, true, false, true]);
        v.arrange_with(ascending, &mut NoCompanion, &mask).unwrap();
        assert_eq!(v.into_array(), [7, 4, 8, 1, 9]);
    }
}
