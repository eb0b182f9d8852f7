use num::Zero;

use crate::error::Result;
use crate::narray::numeric::Numeric;
use crate::vectorizer::{check, Operand, Vectorizer};

/// Equality up to an absolute tolerance.
pub trait Approximate: Vectorizer<Value: Numeric> {
    /// Whether every element lies within `tolerance` of zero.
    fn approx_null(&self, tolerance: Self::Value) -> bool {
        self.as_slice()
            .iter()
            .all(|&x| x.spread(Self::Value::zero()) <= tolerance)
    }

    /// Whether every element lies within `tolerance` of its counterpart.
    fn approx_eq<R: Operand<Self::Value>>(&self, other: &R, tolerance: Self::Value) -> Result<bool> {
        check(self, other)?;
        Ok(self
            .as_slice()
            .iter()
            .enumerate()
            .all(|(i, &x)| x.spread(other.get(i)) <= tolerance))
    }

    /// Whether at least one element is farther than `tolerance` from its
    /// counterpart.
    fn approx_ne<R: Operand<Self::Value>>(&self, other: &R, tolerance: Self::Value) -> Result<bool> {
        check(self, other)?;
        Ok(self
            .as_slice()
            .iter()
            .enumerate()
            .any(|(i, &x)| x.spread(other.get(i)) > tolerance))
    }
}

impl<V> Approximate for V where V: Vectorizer<Value: Numeric> {}
