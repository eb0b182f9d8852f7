//! Numeric specialization of the engine for arithmetic element types.
//!
//! Every trait here requires `Vectorizer<Value: Numeric>`, so the bound on
//! the element type is implied wherever one of them is used.

pub mod comparison;
pub mod generators;
pub mod math;
pub mod norm;
pub mod numeric;
pub mod sorting;
pub mod statistics;

pub use comparison::Approximate;
pub use generators::Generators;
pub use math::MathFunctions;
pub use norm::Norms;
pub use numeric::Numeric;
pub use sorting::Sorting;
pub use statistics::Moments;

use crate::engine::StaticVectorizer;
use crate::vectorizer::Vectorizer;

/// Numeric array: the element-agnostic engine plus every numeric algorithm.
pub trait NumericArray:
    StaticVectorizer + Approximate + Generators + MathFunctions + Moments + Norms + Sorting
{
}

impl<V> NumericArray for V where V: Vectorizer<Value: Numeric> {}
