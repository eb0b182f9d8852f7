//! Capability contract of fixed-size vectorized containers.
//!
//! A container becomes usable by the whole engine by implementing
//! [`Vectorizer`]: indexed access through a slice view plus static size
//! information. The free helpers [`get`], [`check`] and the `set` family work
//! on both vectorized and broadcast (scalar) operands.

pub mod helpers;
pub mod traits;

pub use helpers::{
    check, get, set, set_iter, set_iter_masked, set_list, set_list_masked, set_masked, set_span,
    set_span_masked,
};
pub use traits::{All, Companion, NoCompanion, Operand, Selection, Shape, Truth, Vectorizer};
