use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use ndarray::{Array1, ArrayView1};

use crate::engine::io::{format_elements, parse_elements};
use crate::error::{length_mismatch, VectorizerError};
use crate::vectorizer::Vectorizer;

/// Fixed-size vector of `N` elements stored inline.
///
/// The size never changes after construction. All algorithms come from the
/// engine and numeric traits through the [`Vectorizer`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaticVector<T, const N: usize> {
    pub(crate) data: [T; N],
}

/// Per-element boolean selector aligned with a `StaticVector<_, N>`.
pub type Mask<const N: usize> = StaticVector<bool, N>;

impl<T, const N: usize> StaticVector<T, N> {
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T: Clone, const N: usize> StaticVector<T, N> {
    /// Broadcasts `value` to every element.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self {
            data: std::array::from_fn(|_| value.clone()),
        }
    }
}

impl<T: Clone + Default, const N: usize> StaticVector<T, N> {
    /// List initialization: missing trailing elements are default-initialized
    /// and excess elements are dropped.
    pub fn from_list(list: &[T]) -> Self {
        Self {
            data: std::array::from_fn(|i| list.get(i).cloned().unwrap_or_default()),
        }
    }
}

impl<T: Default, const N: usize> Default for StaticVector<T, N> {
    fn default() -> Self {
        Self {
            data: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Clone + Default + 'static, const N: usize> Vectorizer for StaticVector<T, N> {
    type Value = T;
    type Rebind<U: Clone + Default + 'static> = StaticVector<U, N>;

    const SIZE: usize = N;

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T, const N: usize> From<[T; N]> for StaticVector<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<StaticVector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: StaticVector<T, N>) -> Self {
        vector.data
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for StaticVector<T, N> {
    type Error = VectorizerError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        if slice.len() != N {
            return Err(length_mismatch(N, slice.len()));
        }
        Ok(Self {
            data: std::array::from_fn(|i| slice[i].clone()),
        })
    }
}

impl<T: Clone, const N: usize> TryFrom<ArrayView1<'_, T>> for StaticVector<T, N> {
    type Error = VectorizerError;

    fn try_from(view: ArrayView1<'_, T>) -> Result<Self, Self::Error> {
        if view.len() != N {
            return Err(length_mismatch(N, view.len()));
        }
        Ok(Self {
            data: std::array::from_fn(|i| view[i].clone()),
        })
    }
}

impl<T, const N: usize> From<StaticVector<T, N>> for Array1<T> {
    fn from(vector: StaticVector<T, N>) -> Self {
        Array1::from_iter(vector.data)
    }
}

impl<T: Default, const N: usize> FromIterator<T> for StaticVector<T, N> {
    /// Takes the first `N` items; missing ones are default-initialized.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items = iter.into_iter();
        Self {
            data: std::array::from_fn(|_| items.next().unwrap_or_default()),
        }
    }
}

impl<T, const N: usize> IntoIterator for StaticVector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StaticVector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut StaticVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T, const N: usize> Index<usize> for StaticVector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for StaticVector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for StaticVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_elements(f, &self.data)
    }
}

impl<T, const N: usize> FromStr for StaticVector<T, N>
where
    T: Clone + Default + FromStr + 'static,
{
    type Err = VectorizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_elements(s, ' ')
    }
}
