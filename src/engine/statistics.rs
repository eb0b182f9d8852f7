use crate::error::{empty_selection, Result};
use crate::vectorizer::{check, All, Selection, Vectorizer};

/// Minimum and maximum, over the whole container or a masked subset.
///
/// An empty selection has no extremum and is reported as
/// [`EmptySelection`](crate::error::VectorizerError::EmptySelection).
pub trait Extrema: Vectorizer {
    fn min(&self) -> Result<Self::Value>
    where
        Self::Value: PartialOrd,
    {
        self.min_masked(&All)
    }

    fn max(&self) -> Result<Self::Value>
    where
        Self::Value: PartialOrd,
    {
        self.max_masked(&All)
    }

    fn min_masked<M: Selection>(&self, mask: &M) -> Result<Self::Value>
    where
        Self::Value: PartialOrd,
    {
        check(self, mask)?;
        extremum(self.as_slice(), mask, |candidate, best| candidate < best)
            .ok_or(empty_selection("min"))
    }

    fn max_masked<M: Selection>(&self, mask: &M) -> Result<Self::Value>
    where
        Self::Value: PartialOrd,
    {
        check(self, mask)?;
        extremum(self.as_slice(), mask, |candidate, best| candidate > best)
            .ok_or(empty_selection("max"))
    }
}

impl<V: Vectorizer> Extrema for V {}

/// First selected element that `better` prefers over every other one.
pub(crate) fn extremum<T, M, F>(elements: &[T], mask: &M, mut better: F) -> Option<T>
where
    T: Clone,
    M: Selection,
    F: FnMut(&T, &T) -> bool,
{
    let mut best: Option<&T> = None;
    for (i, x) in elements.iter().enumerate() {
        if !mask.selected(i) {
            continue;
        }
        best = match best {
            Some(current) if !better(x, current) => Some(current),
            _ => Some(x),
        };
    }
    best.cloned()
}
