//! Elementwise math with compile-time exponent, degree and base dispatch.
//!
//! | call          | 0     | 1        | 2       | 3       | other `k > 0`   | `k < 0`              |
//! |---------------|-------|----------|---------|---------|-----------------|----------------------|
//! | `pow::<k>`    | one   | identity | `x * x` | `x³`    | `powi(k)`       | `powi(k)`            |
//! | `rt::<k>`     | one   | identity | `sqrt`  | `cbrt`  | `powf(1 / k)`   | reciprocal of `rt::<-k>` |
//! | `log::<k>`    | `ln`  | invalid  | `log2`  | base 3  | base `k`        | n/a                  |
//!
//! Integer arrays compute `log` exactly (floor of the real logarithm) and
//! reject non-positive elements; a failing `log` leaves the array unchanged.

use crate::error::Result;
use crate::narray::numeric::Numeric;
use crate::vectorizer::{check, All, Selection, Vectorizer};

pub trait MathFunctions: Vectorizer<Value: Numeric> {
    fn abs(&mut self) -> &mut Self {
        for x in self.as_mut_slice().iter_mut() {
            *x = x.magnitude();
        }
        self
    }

    fn abs_masked<M: Selection>(&mut self, mask: &M) -> Result<&mut Self> {
        transform(self, mask, Numeric::magnitude)?;
        Ok(self)
    }

    /// Raises every element to the constant power `E`.
    fn pow<const E: i32>(&mut self) -> &mut Self {
        for x in self.as_mut_slice().iter_mut() {
            *x = power::<_, E>(*x);
        }
        self
    }

    fn pow_masked<const E: i32, M: Selection>(&mut self, mask: &M) -> Result<&mut Self> {
        transform(self, mask, power::<_, E>)?;
        Ok(self)
    }

    /// Raises every element to a run-time real exponent.
    fn powf(&mut self, exponent: f64) -> &mut Self {
        for x in self.as_mut_slice().iter_mut() {
            *x = x.powf(exponent);
        }
        self
    }

    /// Replaces every element by its root of constant degree `D`.
    fn rt<const D: i32>(&mut self) -> &mut Self {
        for x in self.as_mut_slice().iter_mut() {
            *x = radical(*x, D);
        }
        self
    }

    fn rt_masked<const D: i32, M: Selection>(&mut self, mask: &M) -> Result<&mut Self> {
        transform(self, mask, |x| radical(x, D))?;
        Ok(self)
    }

    /// Root of run-time real degree.
    fn root(&mut self, degree: f64) -> &mut Self {
        self.powf(degree.recip())
    }

    /// Logarithm in the constant base `B` (`0` for the natural logarithm).
    fn log<const B: u32>(&mut self) -> Result<&mut Self> {
        self.log_masked::<B, All>(&All)
    }

    fn log_masked<const B: u32, M: Selection>(&mut self, mask: &M) -> Result<&mut Self> {
        check(&*self, mask)?;
        let mut result = self.clone();
        for (i, x) in result.as_mut_slice().iter_mut().enumerate() {
            if mask.selected(i) {
                *x = x.log(B).inspect_err(|e| {
                    tracing::warn!(position = i, base = B, error = %e, "logarithm failed");
                })?;
            }
        }
        *self = result;
        Ok(self)
    }
}

impl<V> MathFunctions for V where V: Vectorizer<Value: Numeric> {}

fn transform<V, M, F>(vector: &mut V, mask: &M, mut f: F) -> Result<()>
where
    V: Vectorizer<Value: Numeric>,
    M: Selection,
    F: FnMut(V::Value) -> V::Value,
{
    check(&*vector, mask)?;
    for (i, x) in vector.as_mut_slice().iter_mut().enumerate() {
        if mask.selected(i) {
            *x = f(*x);
        }
    }
    Ok(())
}

#[inline]
fn power<T: Numeric, const E: i32>(x: T) -> T {
    match E {
        0 => T::one(),
        1 => x,
        2 => x.saturating_mul(x),
        3 => x.saturating_mul(x).saturating_mul(x),
        _ => x.powi(E),
    }
}

fn radical<T: Numeric>(x: T, degree: i32) -> T {
    match degree {
        0 => T::one(),
        1 => x,
        2 => x.sqrt(),
        3 => x.cbrt(),
        d if d < 0 => radical(x, d.saturating_neg()).recip(),
        d => x.powf(f64::from(d).recip()),
    }
}
