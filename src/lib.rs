//! Generic fixed-size vector engine.
//!
//! The crate is layered:
//!
//! * [`vectorizer`]: the capability contract. A type implementing
//!   [`Vectorizer`] exposes its elements as a slice and its size as a
//!   constant.
//! * [`engine`]: element-type agnostic algorithms (assignment, indexing,
//!   masking, reduction, queries, text I/O) available on every vectorizer.
//! * [`narray`]: algorithms for arithmetic element types (approximate
//!   comparison, weighted statistics, sorting with companion indexes, math
//!   functions, norms, generators).
//! * [`containers`]: [`StaticVector`], an inline `[T; N]` with the full
//!   operator set.
//!
//! ```
//! use vectorizer::prelude::*;
//!
//! let v = StaticVector::new([4i32, 8, 15, 16, 23, 42]);
//! assert_eq!(v.mean(), 18);
//! assert_eq!(v.sigma(0), 12);
//!
//! let mask = StaticVector::new([1i32, 1, 0, 1, 0, 1]);
//! assert_eq!(v.count_if_masked(|x| x.truth(), &mask).unwrap(), 4);
//! ```

pub mod containers;
pub mod engine;
pub mod error;
pub mod narray;
pub mod vectorizer;

pub use containers::{Mask, StaticVector};
pub use error::{Result, VectorizerError};
pub use vectorizer::Vectorizer;

/// Everything needed to use the containers and their algorithms.
pub mod prelude {
    pub use crate::containers::{Mask, StaticVector};
    pub use crate::engine::{
        Application, Assignment, Elementwise, Extrema, Formatted, Indexing, Management, Queries,
        StaticVectorizer,
    };
    pub use crate::error::{Result, VectorizerError};
    pub use crate::narray::{
        Approximate, Generators, MathFunctions, Moments, Norms, Numeric, NumericArray, Sorting,
    };
    pub use crate::vectorizer::{
        All, Companion, NoCompanion, Operand, Selection, Shape, Truth, Vectorizer,
    };
}
