//! Predefined constructors.
//!
//! Masked constructors leave unselected positions at zero. Random
//! constructors either draw from the thread-local generator or take an
//! explicit generator and distribution, which is what reproducible code
//! should use.

use num::{Float, One, Zero};
use rand::distr::uniform::SampleUniform;
use rand::distr::{Distribution, Uniform};
use rand::Rng;
use rand_distr::{Normal, StandardNormal};

use crate::error::{domain_error, Result};
use crate::narray::numeric::Numeric;
use crate::vectorizer::{check, All, Selection, Vectorizer};

pub trait Generators: Vectorizer<Value: Numeric> {
    fn zero() -> Self {
        Self::value(<Self::Value as Zero>::zero())
    }

    fn one() -> Self {
        Self::value(<Self::Value as One>::one())
    }

    /// Every element set to `value`.
    fn value(value: Self::Value) -> Self {
        Self::from_fn(|_| value)
    }

    fn value_masked<M: Selection>(value: Self::Value, mask: &M) -> Result<Self> {
        masked(mask, |_| value)
    }

    /// Uniform draws from `[low, high]` with the thread-local generator.
    fn random(low: Self::Value, high: Self::Value) -> Result<Self>
    where
        Self::Value: SampleUniform,
    {
        Self::random_masked(low, high, &All)
    }

    fn random_masked<M: Selection>(low: Self::Value, high: Self::Value, mask: &M) -> Result<Self>
    where
        Self::Value: SampleUniform,
    {
        let distribution = Uniform::<Self::Value>::new_inclusive(low, high)
            .map_err(|e| domain_error(format!("invalid uniform range [{low}, {high}]: {e}")))?;
        tracing::trace!(%low, %high, "uniform draw from the thread-local engine");
        Self::random_with_masked(&mut rand::rng(), &distribution, mask)
    }

    /// Draws every element from `distribution` using `rng`.
    fn random_with<R, D>(rng: &mut R, distribution: &D) -> Self
    where
        R: Rng + ?Sized,
        D: Distribution<Self::Value>,
    {
        Self::from_fn(|_| distribution.sample(rng))
    }

    fn random_with_masked<R, D, M>(rng: &mut R, distribution: &D, mask: &M) -> Result<Self>
    where
        R: Rng + ?Sized,
        D: Distribution<Self::Value>,
        M: Selection,
    {
        masked(mask, |_| distribution.sample(rng))
    }

    /// Normal draws with the given mean and standard deviation.
    fn gaussian<R>(rng: &mut R, mean: Self::Value, sigma: Self::Value) -> Result<Self>
    where
        R: Rng + ?Sized,
        Self::Value: Float,
        StandardNormal: Distribution<Self::Value>,
    {
        if !(sigma >= <Self::Value as Zero>::zero() && Float::is_finite(sigma)) {
            tracing::warn!(%sigma, "rejecting normal deviation");
            return Err(domain_error(format!("invalid normal deviation {sigma}")));
        }
        let distribution = Normal::new(mean, sigma)
            .map_err(|e| domain_error(format!("invalid normal distribution: {e}")))?;
        Ok(Self::random_with(rng, &distribution))
    }

    /// Element `i` is `f(i)`.
    fn indexed<F: FnMut(usize) -> Self::Value>(f: F) -> Self {
        Self::from_fn(f)
    }

    /// Recurrence: element `0` is `init` and element `i` is
    /// `f(element[i - 1], step)`.
    fn progressive<F>(init: Self::Value, step: Self::Value, f: F) -> Self
    where
        F: FnMut(Self::Value, Self::Value) -> Self::Value,
    {
        let mut result = Self::default();
        fill_progression(result.as_mut_slice(), init, step, f, &All);
        result
    }

    /// Recurrence advancing over the selected positions only.
    fn progressive_masked<F, M>(init: Self::Value, step: Self::Value, f: F, mask: &M) -> Result<Self>
    where
        F: FnMut(Self::Value, Self::Value) -> Self::Value,
        M: Selection,
    {
        let mut result = Self::default();
        check(&result, mask)?;
        fill_progression(result.as_mut_slice(), init, step, f, mask);
        Ok(result)
    }
}

impl<V> Generators for V where V: Vectorizer<Value: Numeric> {}

fn masked<V, M, F>(mask: &M, mut f: F) -> Result<V>
where
    V: Vectorizer<Value: Numeric>,
    M: Selection,
    F: FnMut(usize) -> V::Value,
{
    let mut result = V::default();
    check(&result, mask)?;
    for (i, x) in result.as_mut_slice().iter_mut().enumerate() {
        if mask.selected(i) {
            *x = f(i);
        }
    }
    Ok(result)
}

fn fill_progression<T, F, M>(elements: &mut [T], init: T, step: T, mut f: F, mask: &M)
where
    T: Numeric,
    F: FnMut(T, T) -> T,
    M: Selection,
{
    let mut current = None;
    for (i, x) in elements.iter_mut().enumerate() {
        if !mask.selected(i) {
            continue;
        }
        let next = match current {
            None => init,
            Some(previous) => f(previous, step),
        };
        *x = next;
        current = Some(next);
    }
}
