//! Partial assignment family.
//!
//! | family    | receiver   | reinitializes first |
//! |-----------|------------|---------------------|
//! | `assign`  | in place   | yes                 |
//! | `fill`    | in place   | no                  |
//! | `replace` | copy       | no                  |
//! | `put`     | in place   | no (windowed)       |
//! | `change`  | copy       | no (windowed)       |
//!
//! Every method delegates to the `set` primitives of the capability contract
//! and accepts the same position/count/mask parameterizations.

use crate::error::{out_of_range, Result};
use crate::vectorizer::{
    set, set_iter, set_iter_masked, set_list, set_list_masked, set_masked, set_span,
    set_span_masked, Operand, Selection, Vectorizer,
};

pub trait Assignment: Vectorizer {
    /// Reinitializes, then copies `source` (container or broadcast scalar).
    fn assign<S: Operand<Self::Value>>(&mut self, source: &S) -> Result<&mut Self> {
        *self = Self::default();
        set(self, source)?;
        Ok(self)
    }

    fn assign_list(&mut self, list: &[Self::Value]) -> &mut Self {
        *self = Self::default();
        set_list(self, list);
        self
    }

    fn assign_iter<I>(&mut self, items: I, limit: usize) -> &mut Self
    where
        I: IntoIterator<Item = Self::Value>,
    {
        *self = Self::default();
        set_iter(self, items, limit);
        self
    }

    fn assign_masked<S, M>(&mut self, source: &S, mask: &M) -> Result<&mut Self>
    where
        S: Operand<Self::Value>,
        M: Selection,
    {
        *self = Self::default();
        set_masked(self, source, mask)?;
        Ok(self)
    }

    fn assign_list_masked<M: Selection>(&mut self, list: &[Self::Value], mask: &M) -> Result<&mut Self> {
        *self = Self::default();
        set_list_masked(self, list, mask)?;
        Ok(self)
    }

    /// Copies `source` without reinitializing.
    fn fill<S: Operand<Self::Value>>(&mut self, source: &S) -> Result<&mut Self> {
        set(self, source)?;
        Ok(self)
    }

    fn fill_list(&mut self, list: &[Self::Value]) -> &mut Self {
        set_list(self, list);
        self
    }

    fn fill_iter<I>(&mut self, items: I, limit: usize) -> &mut Self
    where
        I: IntoIterator<Item = Self::Value>,
    {
        set_iter(self, items, limit);
        self
    }

    fn fill_span<S: Operand<Self::Value>>(&mut self, position: usize, count: usize, source: &S) -> Result<&mut Self> {
        set_span(self, position, count, source)?;
        Ok(self)
    }

    fn fill_masked<S, M>(&mut self, source: &S, mask: &M) -> Result<&mut Self>
    where
        S: Operand<Self::Value>,
        M: Selection,
    {
        set_masked(self, source, mask)?;
        Ok(self)
    }

    fn fill_list_masked<M: Selection>(&mut self, list: &[Self::Value], mask: &M) -> Result<&mut Self> {
        set_list_masked(self, list, mask)?;
        Ok(self)
    }

    fn fill_iter_masked<I, M>(&mut self, items: I, limit: usize, mask: &M) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Self::Value>,
        M: Selection,
    {
        set_iter_masked(self, items, limit, mask)?;
        Ok(self)
    }

    fn fill_span_masked<S, M>(&mut self, position: usize, count: usize, source: &S, mask: &M) -> Result<&mut Self>
    where
        S: Operand<Self::Value>,
        M: Selection,
    {
        set_span_masked(self, position, count, source, mask)?;
        Ok(self)
    }

    /// Like [`fill`](Assignment::fill) on a copy; the receiver is untouched.
    fn replace<S: Operand<Self::Value>>(&self, source: &S) -> Result<Self> {
        let mut result = self.clone();
        set(&mut result, source)?;
        Ok(result)
    }

    fn replace_list(&self, list: &[Self::Value]) -> Self {
        let mut result = self.clone();
        set_list(&mut result, list);
        result
    }

    fn replace_iter<I>(&self, items: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = Self::Value>,
    {
        let mut result = self.clone();
        set_iter(&mut result, items, limit);
        result
    }

    fn replace_masked<S, M>(&self, source: &S, mask: &M) -> Result<Self>
    where
        S: Operand<Self::Value>,
        M: Selection,
    {
        let mut result = self.clone();
        set_masked(&mut result, source, mask)?;
        Ok(result)
    }

    fn replace_list_masked<M: Selection>(&self, list: &[Self::Value], mask: &M) -> Result<Self> {
        let mut result = self.clone();
        set_list_masked(&mut result, list, mask)?;
        Ok(result)
    }

    /// Writes a single element.
    fn put(&mut self, position: usize, value: Self::Value) -> Result<&mut Self> {
        let size = self.size();
        let slot = self
            .as_mut_slice()
            .get_mut(position)
            .ok_or(out_of_range(position, size))?;
        *slot = value;
        Ok(self)
    }

    /// Writes `count` consecutive elements starting at `position`, taking
    /// the values from `source` at the same positions.
    fn put_span<S: Operand<Self::Value>>(&mut self, position: usize, count: usize, source: &S) -> Result<&mut Self> {
        set_span(self, position, count, source)?;
        Ok(self)
    }

    /// Copy-returning [`put`](Assignment::put).
    fn change(&self, position: usize, value: Self::Value) -> Result<Self> {
        let mut result = self.clone();
        result.put(position, value)?;
        Ok(result)
    }

    fn change_span<S: Operand<Self::Value>>(&self, position: usize, count: usize, source: &S) -> Result<Self> {
        let mut result = self.clone();
        set_span(&mut result, position, count, source)?;
        Ok(result)
    }
}

impl<V: Vectorizer> Assignment for V {}
