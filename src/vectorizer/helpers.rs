//! Free generic helpers of the capability contract.
//!
//! These work uniformly on vectorized containers and broadcast scalars, so the
//! engine can treat "vector op vector", "vector op scalar" and
//! "scalar op vector" with a single code path.

use crate::error::{length_mismatch, Result};
use crate::vectorizer::traits::{Operand, Selection, Shape, Vectorizer};

/// Returns element `index` of a container, or the scalar itself.
#[inline]
pub fn get<T, O: Operand<T>>(operand: &O, index: usize) -> T {
    operand.get(index)
}

/// Validates that two operands are size-compatible.
///
/// When both sizes are compile-time constants a disagreement is a compile
/// error; when at least one is only known at run time the mismatch is a
/// [`LengthMismatch`](crate::error::VectorizerError::LengthMismatch). Broadcast
/// operands are always compatible.
#[inline]
pub fn check<A: Shape + ?Sized, B: Shape + ?Sized>(a: &A, b: &B) -> Result<()> {
    const {
        if let (Some(x), Some(y)) = (A::STATIC_LEN, B::STATIC_LEN) {
            assert!(x == y, "vectorized operands must have the same size");
        }
    }
    match (a.extent(), b.extent()) {
        (Some(expected), Some(found)) if expected != found => {
            Err(length_mismatch(expected, found))
        }
        _ => Ok(()),
    }
}

/// Copies `source` into every position of `destination`.
pub fn set<D, S>(destination: &mut D, source: &S) -> Result<()>
where
    D: Vectorizer,
    S: Operand<D::Value>,
{
    check(&*destination, source)?;
    for (i, x) in destination.as_mut_slice().iter_mut().enumerate() {
        *x = source.get(i);
    }
    Ok(())
}

/// Copies `source` into `[position, position + count)`, clamped to the
/// destination bounds.
pub fn set_span<D, S>(destination: &mut D, position: usize, count: usize, source: &S) -> Result<()>
where
    D: Vectorizer,
    S: Operand<D::Value>,
{
    check(&*destination, source)?;
    let end = position.saturating_add(count).min(destination.size());
    let slice = destination.as_mut_slice();
    for i in position..end {
        slice[i] = source.get(i);
    }
    Ok(())
}

/// Copies a literal list: missing trailing elements are default-initialized,
/// excess elements are ignored.
pub fn set_list<D: Vectorizer>(destination: &mut D, list: &[D::Value]) {
    for (i, x) in destination.as_mut_slice().iter_mut().enumerate() {
        *x = list.get(i).cloned().unwrap_or_default();
    }
}

/// Copies at most `limit` items, stopping at whichever of the destination
/// capacity, the limit or the source runs out first.
pub fn set_iter<D, I>(destination: &mut D, items: I, limit: usize)
where
    D: Vectorizer,
    I: IntoIterator<Item = D::Value>,
{
    for (x, item) in destination.as_mut_slice().iter_mut().take(limit).zip(items) {
        *x = item;
    }
}

/// Copies `source` into the selected positions only.
pub fn set_masked<D, S, M>(destination: &mut D, source: &S, mask: &M) -> Result<()>
where
    D: Vectorizer,
    S: Operand<D::Value>,
    M: Selection,
{
    set_span_masked(destination, 0, usize::MAX, source, mask)
}

/// Copies `source` into the selected positions of a clamped window.
pub fn set_span_masked<D, S, M>(
    destination: &mut D,
    position: usize,
    count: usize,
    source: &S,
    mask: &M,
) -> Result<()>
where
    D: Vectorizer,
    S: Operand<D::Value>,
    M: Selection,
{
    check(&*destination, source)?;
    check(&*destination, mask)?;
    let end = position.saturating_add(count).min(destination.size());
    let slice = destination.as_mut_slice();
    for i in (position..end).filter(|&i| mask.selected(i)) {
        slice[i] = source.get(i);
    }
    Ok(())
}

/// The n-th list element fills the n-th selected position; selected
/// positions past the end of the list are default-initialized.
pub fn set_list_masked<D, M>(destination: &mut D, list: &[D::Value], mask: &M) -> Result<()>
where
    D: Vectorizer,
    M: Selection,
{
    check(&*destination, mask)?;
    let mut items = list.iter();
    for (i, x) in destination.as_mut_slice().iter_mut().enumerate() {
        if mask.selected(i) {
            *x = items.next().cloned().unwrap_or_default();
        }
    }
    Ok(())
}

/// The n-th item fills the n-th selected position, consuming at most `limit`
/// items; selected positions left once the items run out are untouched.
pub fn set_iter_masked<D, I, M>(destination: &mut D, items: I, limit: usize, mask: &M) -> Result<()>
where
    D: Vectorizer,
    I: IntoIterator<Item = D::Value>,
    M: Selection,
{
    check(&*destination, mask)?;
    let mut items = items.into_iter().take(limit);
    for (i, x) in destination.as_mut_slice().iter_mut().enumerate() {
        if !mask.selected(i) {
            continue;
        }
        match items.next() {
            Some(item) => *x = item,
            None => break,
        }
    }
    Ok(())
}
