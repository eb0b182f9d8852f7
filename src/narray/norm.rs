use num::Zero;

use crate::error::{domain_error, Result};
use crate::narray::numeric::Numeric;
use crate::vectorizer::{check, All, Selection, Vectorizer};

/// p-norms and normalization.
///
/// `D = 0` is the infinity norm (largest magnitude), `D = 1` the sum of
/// magnitudes, `D = 2` the Euclidean norm and any other `D` the general
/// `(Σ|x|^D)^(1/D)`. Masked variants only consider, and only rescale, the
/// selected elements.
pub trait Norms: Vectorizer<Value: Numeric> {
    fn norm<const D: u32>(&self) -> Self::Value {
        p_norm::<_, _, D>(self.as_slice(), &All)
    }

    fn norm_masked<const D: u32, M: Selection>(&self, mask: &M) -> Result<Self::Value> {
        check(self, mask)?;
        Ok(p_norm::<_, _, D>(self.as_slice(), mask))
    }

    /// Divides in place by the norm, which must be positive and finite.
    fn renormalize<const D: u32>(&mut self) -> Result<&mut Self> {
        self.renormalize_masked::<D, All>(&All)
    }

    fn renormalize_masked<const D: u32, M: Selection>(&mut self, mask: &M) -> Result<&mut Self> {
        let norm = self.norm_masked::<D, M>(mask)?;
        if !(norm > Self::Value::zero() && norm.is_finite()) {
            tracing::debug!(degree = D, %norm, "cannot renormalize by a degenerate norm");
            return Err(domain_error(format!("cannot normalize by degenerate norm {norm}")));
        }
        for (i, x) in self.as_mut_slice().iter_mut().enumerate() {
            if mask.selected(i) {
                *x = *x / norm;
            }
        }
        Ok(self)
    }

    /// Copy-returning [`renormalize`](Norms::renormalize).
    fn normalize<const D: u32>(&self) -> Result<Self> {
        let mut result = self.clone();
        result.renormalize::<D>()?;
        Ok(result)
    }

    fn normalize_masked<const D: u32, M: Selection>(&self, mask: &M) -> Result<Self> {
        let mut result = self.clone();
        result.renormalize_masked::<D, M>(mask)?;
        Ok(result)
    }
}

impl<V> Norms for V where V: Vectorizer<Value: Numeric> {}

fn p_norm<T, M, const D: u32>(elements: &[T], mask: &M) -> T
where
    T: Numeric,
    M: Selection,
{
    let selected = elements
        .iter()
        .enumerate()
        .filter(|&(i, _)| mask.selected(i))
        .map(|(_, x)| x.magnitude());
    match D {
        0 => selected.fold(T::zero(), |best, x| if x > best { x } else { best }),
        1 => selected.fold(T::zero(), |sum, x| sum.saturating_add(x)),
        2 => selected
            .fold(T::zero(), |sum, x| sum.saturating_add(x.saturating_mul(x)))
            .sqrt(),
        _ => {
            let degree = f64::from(D);
            selected
                .fold(T::zero(), |sum, x| sum.saturating_add(x.powf(degree)))
                .powf(degree.recip())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::StaticVector;

    #[test]
    fn test_norm_degrees() {
        let v = StaticVector::new([3.0f64, -4.0]);
        assert_eq!(v.norm::<0>(), 4.0);
        assert_eq!(v.norm::<1>(), 7.0);
        assert_eq!(v.norm::<2>(), 5.0);
        assert!((v.norm::<3>() - 91.0f64.cbrt()).abs() < 1e-12);
    }

    #[test]
    fn test_integer_euclidean_norm() {
        assert_eq!(StaticVector::new([3i32, 4]).norm::<2>(), 5);
    }

    #[test]
    fn test_zero_vector_cannot_be_normalized() {
        let v = StaticVector::new([0.0f64; 3]);
        assert!(v.normalize::<2>().is_err());
    }
}
