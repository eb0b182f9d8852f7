//! Text representation of fixed-size containers.
//!
//! Output writes the elements in order separated by the formatter's fill
//! character (a space unless overridden, e.g. `{:,<}`), with no trailing
//! separator. Element formatting options such as precision are forwarded.
//! Input reads exactly `SIZE` tokens separated by whitespace or the fill
//! character. The whole string must be consumed: unlike a stream, which
//! would stop after `SIZE` tokens and leave the rest for the next read,
//! trailing tokens are a parse error.

use std::fmt;
use std::str::FromStr;

use crate::error::{parse_error, Result};
use crate::vectorizer::Vectorizer;

/// Writes `elements` separated by the fill character of `f`.
pub fn format_elements<T: fmt::Display>(f: &mut fmt::Formatter<'_>, elements: &[T]) -> fmt::Result {
    let separator = f.fill();
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            write!(f, "{separator}")?;
        }
        fmt::Display::fmt(element, f)?;
    }
    Ok(())
}

/// Reads a container from tokens separated by whitespace or `fill`.
pub fn parse_elements<V>(s: &str, fill: char) -> Result<V>
where
    V: Vectorizer,
    V::Value: FromStr,
{
    let mut tokens = s
        .split(|c: char| c.is_whitespace() || c == fill)
        .filter(|token| !token.is_empty());
    let mut result = V::default();
    let size = result.size();
    for (i, x) in result.as_mut_slice().iter_mut().enumerate() {
        let token = tokens
            .next()
            .ok_or_else(|| parse_error(format!("expected {size} elements, found {i}")))?;
        *x = token
            .parse()
            .map_err(|_| parse_error(format!("invalid element {token:?} at position {i}")))?;
    }
    if let Some(token) = tokens.next() {
        return Err(parse_error(format!("unexpected trailing element {token:?}")));
    }
    Ok(result)
}

/// Display adapter for any vectorized container.
pub struct Elements<'a, V>(&'a V);

impl<V> fmt::Display for Elements<'_, V>
where
    V: Vectorizer,
    V::Value: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_elements(f, self.0.as_slice())
    }
}

/// Stream-like text I/O for every vectorized container.
pub trait Formatted: Vectorizer {
    fn display(&self) -> Elements<'_, Self> {
        Elements(self)
    }

    fn parse_text(s: &str, fill: char) -> Result<Self>
    where
        Self::Value: FromStr,
    {
        parse_elements(s, fill)
    }
}

impl<V: Vectorizer> Formatted for V {}
