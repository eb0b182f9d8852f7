//! Elementwise application, reduction and transversal combination.
//!
//! Masked variants leave unselected positions at their original value
//! (`modify`/`apply`) or exclude them from the aggregate (`reduce`).
//! `_with` variants pass a companion operand (container or broadcast scalar)
//! as the second argument of the function.

use crate::error::Result;
use crate::vectorizer::{check, All, Operand, Selection, Vectorizer};

pub trait Application: Vectorizer {
    fn modify<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(Self::Value) -> Self::Value,
    {
        for x in self.as_mut_slice().iter_mut() {
            *x = f(x.clone());
        }
        self
    }

    fn modify_masked<F, M>(&mut self, mut f: F, mask: &M) -> Result<&mut Self>
    where
        F: FnMut(Self::Value) -> Self::Value,
        M: Selection,
    {
        check(&*self, mask)?;
        for (i, x) in self.as_mut_slice().iter_mut().enumerate() {
            if mask.selected(i) {
                *x = f(x.clone());
            }
        }
        Ok(self)
    }

    fn modify_with<U, O, F>(&mut self, operand: &O, f: F) -> Result<&mut Self>
    where
        O: Operand<U>,
        F: FnMut(Self::Value, U) -> Self::Value,
    {
        self.modify_with_masked(operand, f, &All)
    }

    fn modify_with_masked<U, O, F, M>(&mut self, operand: &O, mut f: F, mask: &M) -> Result<&mut Self>
    where
        O: Operand<U>,
        F: FnMut(Self::Value, U) -> Self::Value,
        M: Selection,
    {
        check(&*self, operand)?;
        check(&*self, mask)?;
        for (i, x) in self.as_mut_slice().iter_mut().enumerate() {
            if mask.selected(i) {
                *x = f(x.clone(), operand.get(i));
            }
        }
        Ok(self)
    }

    /// Copy-returning [`modify`](Application::modify).
    fn apply<F>(&self, f: F) -> Self
    where
        F: FnMut(Self::Value) -> Self::Value,
    {
        let mut result = self.clone();
        result.modify(f);
        result
    }

    fn apply_masked<F, M>(&self, f: F, mask: &M) -> Result<Self>
    where
        F: FnMut(Self::Value) -> Self::Value,
        M: Selection,
    {
        let mut result = self.clone();
        result.modify_masked(f, mask)?;
        Ok(result)
    }

    fn apply_with<U, O, F>(&self, operand: &O, f: F) -> Result<Self>
    where
        O: Operand<U>,
        F: FnMut(Self::Value, U) -> Self::Value,
    {
        let mut result = self.clone();
        result.modify_with(operand, f)?;
        Ok(result)
    }

    fn apply_with_masked<U, O, F, M>(&self, operand: &O, f: F, mask: &M) -> Result<Self>
    where
        O: Operand<U>,
        F: FnMut(Self::Value, U) -> Self::Value,
        M: Selection,
    {
        let mut result = self.clone();
        result.modify_with_masked(operand, f, mask)?;
        Ok(result)
    }

    /// Same-shape container of `f` applied to every element.
    fn map<U, F>(&self, mut f: F) -> Self::Rebind<U>
    where
        U: Clone + Default + 'static,
        F: FnMut(Self::Value) -> U,
    {
        let mut result = <Self::Rebind<U>>::default();
        for (y, x) in result.as_mut_slice().iter_mut().zip(self.as_slice()) {
            *y = f(x.clone());
        }
        result
    }

    /// Left fold of every element into `init`.
    fn reduce<R, F>(&self, f: F, init: R) -> R
    where
        F: FnMut(R, Self::Value) -> R,
    {
        self.as_slice().iter().cloned().fold(init, f)
    }

    /// Left fold of the selected elements; an empty selection yields `init`.
    fn reduce_masked<R, F, M>(&self, mut f: F, init: R, mask: &M) -> Result<R>
    where
        F: FnMut(R, Self::Value) -> R,
        M: Selection,
    {
        check(self, mask)?;
        let mut accumulator = init;
        for (i, x) in self.as_slice().iter().enumerate() {
            if mask.selected(i) {
                accumulator = f(accumulator, x.clone());
            }
        }
        Ok(accumulator)
    }

    /// Positionwise fold across several operands:
    /// `result[i] = f(...f(f(self[i], others[0][i]), others[1][i])...)`.
    fn combine<O, F>(&self, f: F, others: &[O]) -> Result<Self>
    where
        O: Operand<Self::Value>,
        F: FnMut(Self::Value, Self::Value) -> Self::Value,
    {
        self.combine_masked(f, others, &All)
    }

    fn combine_masked<O, F, M>(&self, mut f: F, others: &[O], mask: &M) -> Result<Self>
    where
        O: Operand<Self::Value>,
        F: FnMut(Self::Value, Self::Value) -> Self::Value,
        M: Selection,
    {
        check(self, mask)?;
        for other in others {
            check(self, other)?;
        }
        let mut result = self.clone();
        for (i, x) in result.as_mut_slice().iter_mut().enumerate() {
            if mask.selected(i) {
                *x = others
                    .iter()
                    .fold(x.clone(), |accumulator, other| f(accumulator, other.get(i)));
            }
        }
        Ok(result)
    }
}

impl<V: Vectorizer> Application for V {}
