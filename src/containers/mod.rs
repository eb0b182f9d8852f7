//! Concrete fixed-capacity containers.
//!
//! Containers only provide storage; every algorithm is inherited from the
//! engine and numeric traits through the [`Vectorizer`](crate::Vectorizer)
//! implementation.

pub mod operators;
pub mod static_vector;

pub use static_vector::{Mask, StaticVector};
