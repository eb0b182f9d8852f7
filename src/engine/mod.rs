//! Generic operator and algorithm layer over the capability contract.
//!
//! Each concern is one trait with default methods, blanket-implemented for
//! every [`Vectorizer`]. [`StaticVectorizer`] gathers them so generic code
//! can ask for the whole vocabulary with a single bound.

pub mod application;
pub mod assignment;
pub mod indexing;
pub mod io;
pub mod management;
pub mod ops;
pub mod queries;
pub mod statistics;

pub use application::Application;
pub use assignment::Assignment;
pub use indexing::Indexing;
pub use io::{format_elements, parse_elements, Elements, Formatted};
pub use management::Management;
pub use ops::Elementwise;
pub use queries::Queries;
pub use statistics::Extrema;

use crate::vectorizer::Vectorizer;

/// Element-type agnostic engine: everything a fixed-size container gets from
/// implementing [`Vectorizer`].
pub trait StaticVectorizer:
    Vectorizer
    + Application
    + Assignment
    + Elementwise
    + Extrema
    + Formatted
    + Indexing
    + Management
    + Queries
{
}

impl<V: Vectorizer> StaticVectorizer for V {}
