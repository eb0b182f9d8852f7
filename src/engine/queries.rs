//! Counting and predicate queries.
//!
//! Every query exists in a compare-to-reference form (`count`, `all`, ...),
//! where the reference is a broadcast value or another container, and in a
//! predicate form (`count_if`, `all_if`, ...). Over an empty scanned region
//! `all` and `none` hold and `any` does not.

use crate::error::Result;
use crate::vectorizer::{check, All, Operand, Selection, Vectorizer};

pub trait Queries: Vectorizer {
    /// Number of elements equal to `reference`.
    fn count<R: Operand<Self::Value>>(&self, reference: &R) -> Result<usize>
    where
        Self::Value: PartialEq,
    {
        self.count_masked(reference, &All)
    }

    fn count_masked<R, M>(&self, reference: &R, mask: &M) -> Result<usize>
    where
        Self::Value: PartialEq,
        R: Operand<Self::Value>,
        M: Selection,
    {
        check(self, reference)?;
        check(self, mask)?;
        Ok(scan(self.as_slice(), mask)
            .filter(|&(i, x)| *x == reference.get(i))
            .count())
    }

    fn count_if<F: FnMut(&Self::Value) -> bool>(&self, mut f: F) -> usize {
        self.as_slice().iter().filter(|x| f(x)).count()
    }

    fn count_if_masked<F, M>(&self, mut f: F, mask: &M) -> Result<usize>
    where
        F: FnMut(&Self::Value) -> bool,
        M: Selection,
    {
        check(self, mask)?;
        Ok(scan(self.as_slice(), mask).filter(|&(_, x)| f(x)).count())
    }

    /// Whether every element equals `reference`.
    fn all<R: Operand<Self::Value>>(&self, reference: &R) -> Result<bool>
    where
        Self::Value: PartialEq,
    {
        self.all_masked(reference, &All)
    }

    fn all_masked<R, M>(&self, reference: &R, mask: &M) -> Result<bool>
    where
        Self::Value: PartialEq,
        R: Operand<Self::Value>,
        M: Selection,
    {
        check(self, reference)?;
        check(self, mask)?;
        Ok(scan(self.as_slice(), mask).all(|(i, x)| *x == reference.get(i)))
    }

    fn all_if<F: FnMut(&Self::Value) -> bool>(&self, f: F) -> bool {
        self.as_slice().iter().all(f)
    }

    fn all_if_masked<F, M>(&self, mut f: F, mask: &M) -> Result<bool>
    where
        F: FnMut(&Self::Value) -> bool,
        M: Selection,
    {
        check(self, mask)?;
        Ok(scan(self.as_slice(), mask).all(|(_, x)| f(x)))
    }

    /// Whether at least one element equals `reference`.
    fn any<R: Operand<Self::Value>>(&self, reference: &R) -> Result<bool>
    where
        Self::Value: PartialEq,
    {
        self.any_masked(reference, &All)
    }

    fn any_masked<R, M>(&self, reference: &R, mask: &M) -> Result<bool>
    where
        Self::Value: PartialEq,
        R: Operand<Self::Value>,
        M: Selection,
    {
        check(self, reference)?;
        check(self, mask)?;
        Ok(scan(self.as_slice(), mask).any(|(i, x)| *x == reference.get(i)))
    }

    fn any_if<F: FnMut(&Self::Value) -> bool>(&self, f: F) -> bool {
        self.as_slice().iter().any(f)
    }

    fn any_if_masked<F, M>(&self, mut f: F, mask: &M) -> Result<bool>
    where
        F: FnMut(&Self::Value) -> bool,
        M: Selection,
    {
        check(self, mask)?;
        Ok(scan(self.as_slice(), mask).any(|(_, x)| f(x)))
    }

    /// Whether no element equals `reference`.
    fn none<R: Operand<Self::Value>>(&self, reference: &R) -> Result<bool>
    where
        Self::Value: PartialEq,
    {
        self.none_masked(reference, &All)
    }

    fn none_masked<R, M>(&self, reference: &R, mask: &M) -> Result<bool>
    where
        Self::Value: PartialEq,
        R: Operand<Self::Value>,
        M: Selection,
    {
        Ok(!self.any_masked(reference, mask)?)
    }

    fn none_if<F: FnMut(&Self::Value) -> bool>(&self, f: F) -> bool {
        !self.any_if(f)
    }

    fn none_if_masked<F, M>(&self, f: F, mask: &M) -> Result<bool>
    where
        F: FnMut(&Self::Value) -> bool,
        M: Selection,
    {
        Ok(!self.any_if_masked(f, mask)?)
    }
}

impl<V: Vectorizer> Queries for V {}

fn scan<'a, T, M: Selection>(elements: &'a [T], mask: &'a M) -> impl Iterator<Item = (usize, &'a T)> + 'a {
    elements
        .iter()
        .enumerate()
        .filter(move |&(i, _)| mask.selected(i))
}
