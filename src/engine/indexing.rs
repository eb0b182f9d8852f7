use crate::error::{out_of_range, Result};
use crate::vectorizer::Vectorizer;

/// Access modes beyond plain `[]` indexing.
///
/// `front`, `back` and `cycle` are unchecked: an offset past the end panics
/// like slice indexing, and `cycle` on an empty container divides by zero.
pub trait Indexing: Vectorizer {
    /// Range-checked access.
    fn at(&self, index: usize) -> Result<&Self::Value> {
        let size = self.size();
        self.as_slice().get(index).ok_or(out_of_range(index, size))
    }

    fn at_mut(&mut self, index: usize) -> Result<&mut Self::Value> {
        let size = self.size();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(out_of_range(index, size))
    }

    /// Element `offset` positions after the first one.
    #[inline]
    fn front(&self, offset: usize) -> &Self::Value {
        &self.as_slice()[offset]
    }

    #[inline]
    fn front_mut(&mut self, offset: usize) -> &mut Self::Value {
        &mut self.as_mut_slice()[offset]
    }

    /// Element `offset` positions before the last one.
    #[inline]
    fn back(&self, offset: usize) -> &Self::Value {
        let last = self.size() - 1;
        &self.as_slice()[last - offset]
    }

    #[inline]
    fn back_mut(&mut self, offset: usize) -> &mut Self::Value {
        let last = self.size() - 1;
        &mut self.as_mut_slice()[last - offset]
    }

    /// Wraparound access: any index, including negative ones, is mapped into
    /// `[0, size)`.
    #[inline]
    fn cycle(&self, index: isize) -> &Self::Value {
        &self.as_slice()[cyclic(index, self.size())]
    }

    #[inline]
    fn cycle_mut(&mut self, index: isize) -> &mut Self::Value {
        let position = cyclic(index, self.size());
        &mut self.as_mut_slice()[position]
    }
}

impl<V: Vectorizer> Indexing for V {}

#[inline]
fn cyclic(index: isize, size: usize) -> usize {
    index.rem_euclid(size as isize) as usize
}
