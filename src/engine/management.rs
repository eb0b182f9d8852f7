use num::{NumCast, ToPrimitive};

use crate::error::{domain_error, Result};
use crate::vectorizer::{check, Selection, Vectorizer};

/// Resetting, exchanging, copying and converting whole containers.
pub trait Management: Vectorizer {
    /// Resets every element to the default value.
    fn nullify(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    /// Resets `[position, position + count)`, clamped to the bounds.
    fn nullify_span(&mut self, position: usize, count: usize) -> &mut Self {
        let end = position.saturating_add(count).min(self.size());
        for x in self.as_mut_slice().iter_mut().take(end).skip(position) {
            *x = Self::default_value();
        }
        self
    }

    fn nullify_masked<M: Selection>(&mut self, mask: &M) -> Result<&mut Self> {
        check(&*self, mask)?;
        for (i, x) in self.as_mut_slice().iter_mut().enumerate() {
            if mask.selected(i) {
                *x = Self::default_value();
            }
        }
        Ok(self)
    }

    /// Exchanges contents by value; there is no storage to swap by reference.
    fn swap(&mut self, other: &mut Self) -> &mut Self {
        std::mem::swap(self, other);
        self
    }

    fn swap_span(&mut self, other: &mut Self, position: usize, count: usize) -> &mut Self {
        let end = position.saturating_add(count).min(self.size());
        let lhs = self.as_mut_slice();
        let rhs = other.as_mut_slice();
        for i in position..end {
            std::mem::swap(&mut lhs[i], &mut rhs[i]);
        }
        self
    }

    fn swap_masked<M: Selection>(&mut self, other: &mut Self, mask: &M) -> Result<&mut Self> {
        check(&*self, mask)?;
        let lhs = self.as_mut_slice();
        let rhs = other.as_mut_slice();
        for (i, (x, y)) in lhs.iter_mut().zip(rhs.iter_mut()).enumerate() {
            if mask.selected(i) {
                std::mem::swap(x, y);
            }
        }
        Ok(self)
    }

    #[inline]
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Numeric conversion to another element type; fails if a value is not
    /// representable in the target type.
    fn cast<U>(&self) -> Result<Self::Rebind<U>>
    where
        Self::Value: ToPrimitive,
        U: NumCast + Clone + Default + 'static,
    {
        let mut result = <Self::Rebind<U>>::default();
        for (i, (y, x)) in result.as_mut_slice().iter_mut().zip(self.as_slice()).enumerate() {
            *y = <U as NumCast>::from(x.clone()).ok_or_else(|| {
                domain_error(format!("element at position {i} is not representable in the target type"))
            })?;
        }
        Ok(result)
    }

    /// Lossless conversion to another element type.
    fn convert<U>(&self) -> Self::Rebind<U>
    where
        U: From<Self::Value> + Clone + Default + 'static,
    {
        let mut result = <Self::Rebind<U>>::default();
        for (y, x) in result.as_mut_slice().iter_mut().zip(self.as_slice()) {
            *y = <U as From<Self::Value>>::from(x.clone());
        }
        result
    }
}

impl<V: Vectorizer> Management for V {}
