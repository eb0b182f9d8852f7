use num::One;

use crate::error::Result;
use crate::vectorizer::{check, Operand, Truth, Vectorizer};

/// Elementwise comparison and logical operators producing boolean masks,
/// and the increment/decrement family.
///
/// The arithmetic and bitwise operators live on the concrete containers as
/// `std::ops` implementations; everything here only needs the capability
/// contract.
pub trait Elementwise: Vectorizer {
    fn eq_elements<R: Operand<Self::Value>>(&self, other: &R) -> Result<Self::Rebind<bool>>
    where
        Self::Value: PartialEq,
    {
        compare(self, other, |x, y| x == y)
    }

    fn ne_elements<R: Operand<Self::Value>>(&self, other: &R) -> Result<Self::Rebind<bool>>
    where
        Self::Value: PartialEq,
    {
        compare(self, other, |x, y| x != y)
    }

    fn lt_elements<R: Operand<Self::Value>>(&self, other: &R) -> Result<Self::Rebind<bool>>
    where
        Self::Value: PartialOrd,
    {
        compare(self, other, |x, y| x < y)
    }

    fn le_elements<R: Operand<Self::Value>>(&self, other: &R) -> Result<Self::Rebind<bool>>
    where
        Self::Value: PartialOrd,
    {
        compare(self, other, |x, y| x <= y)
    }

    fn gt_elements<R: Operand<Self::Value>>(&self, other: &R) -> Result<Self::Rebind<bool>>
    where
        Self::Value: PartialOrd,
    {
        compare(self, other, |x, y| x > y)
    }

    fn ge_elements<R: Operand<Self::Value>>(&self, other: &R) -> Result<Self::Rebind<bool>>
    where
        Self::Value: PartialOrd,
    {
        compare(self, other, |x, y| x >= y)
    }

    /// Logical `&&` of the truth values of both operands.
    fn and_elements<R: Operand<Self::Value>>(&self, other: &R) -> Result<Self::Rebind<bool>>
    where
        Self::Value: Truth,
    {
        compare(self, other, |x, y| x.truth() && y.truth())
    }

    /// Logical `||` of the truth values of both operands.
    fn or_elements<R: Operand<Self::Value>>(&self, other: &R) -> Result<Self::Rebind<bool>>
    where
        Self::Value: Truth,
    {
        compare(self, other, |x, y| x.truth() || y.truth())
    }

    /// Adds one to every element in place.
    fn increment(&mut self) -> &mut Self
    where
        Self::Value: One + std::ops::Add<Output = Self::Value>,
    {
        for x in self.as_mut_slice().iter_mut() {
            *x = x.clone() + Self::Value::one();
        }
        self
    }

    /// Subtracts one from every element in place.
    fn decrement(&mut self) -> &mut Self
    where
        Self::Value: One + std::ops::Sub<Output = Self::Value>,
    {
        for x in self.as_mut_slice().iter_mut() {
            *x = x.clone() - Self::Value::one();
        }
        self
    }

    /// Increments in place and returns the previous contents.
    fn post_increment(&mut self) -> Self
    where
        Self::Value: One + std::ops::Add<Output = Self::Value>,
    {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// Decrements in place and returns the previous contents.
    fn post_decrement(&mut self) -> Self
    where
        Self::Value: One + std::ops::Sub<Output = Self::Value>,
    {
        let previous = self.clone();
        self.decrement();
        previous
    }

    /// Unary plus: an unchanged copy.
    #[inline]
    fn plus(&self) -> Self {
        self.clone()
    }
}

impl<V: Vectorizer> Elementwise for V {}

fn compare<V, R, F>(lhs: &V, rhs: &R, mut f: F) -> Result<V::Rebind<bool>>
where
    V: Vectorizer,
    R: Operand<V::Value>,
    F: FnMut(&V::Value, &V::Value) -> bool,
{
    check(lhs, rhs)?;
    let mut result = <V::Rebind<bool>>::default();
    for (i, (y, x)) in result.as_mut_slice().iter_mut().zip(lhs.as_slice()).enumerate() {
        *y = f(x, &rhs.get(i));
    }
    Ok(result)
}
