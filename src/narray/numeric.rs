use std::fmt;

use num::{Num, NumCast};

use crate::error::{domain_error, Result};
use crate::vectorizer::{Operand, Truth};

/// Arithmetic element type of numeric arrays.
///
/// Integer types route their non-closed operations (roots, fractional powers,
/// reciprocals) through `f64` and truncate the result back.
pub trait Numeric:
    Copy
    + Default
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Num
    + NumCast
    + Truth
    + Operand<Self>
    + Send
    + Sync
    + 'static
{
    const INTEGRAL: bool;

    /// Absolute value, saturating for the minimum of signed integers.
    fn magnitude(self) -> Self;

    /// `|self - other|` without unsigned underflow or signed overflow.
    fn spread(self, other: Self) -> Self;

    /// Sum clamped to the representable range for integers.
    fn saturating_add(self, other: Self) -> Self;

    /// Product clamped to the representable range for integers.
    fn saturating_mul(self, other: Self) -> Self;

    fn sqrt(self) -> Self;

    fn cbrt(self) -> Self;

    fn powi(self, exponent: i32) -> Self;

    fn powf(self, exponent: f64) -> Self;

    fn recip(self) -> Self;

    /// Logarithm in `base`; base `0` is the natural logarithm.
    ///
    /// Base `1` is rejected. Integers compute the exact floor logarithm and
    /// reject non-positive arguments. Floats follow IEEE semantics except
    /// that negative arguments are rejected.
    fn log(self, base: u32) -> Result<Self>;

    fn is_finite(self) -> bool;
}

fn integer_log(value: u128, base: u128) -> u32 {
    let mut exponent = 0;
    let mut power = base;
    while power <= value {
        exponent += 1;
        match power.checked_mul(base) {
            Some(next) => power = next,
            None => break,
        }
    }
    exponent
}

macro_rules! impl_integer_common {
    ($t:ty) => {
        const INTEGRAL: bool = true;

        #[inline]
        fn saturating_add(self, other: Self) -> Self {
            <$t>::saturating_add(self, other)
        }

        #[inline]
        fn saturating_mul(self, other: Self) -> Self {
            <$t>::saturating_mul(self, other)
        }

        #[inline]
        fn sqrt(self) -> Self {
            (self as f64).sqrt() as $t
        }

        #[inline]
        fn cbrt(self) -> Self {
            (self as f64).cbrt() as $t
        }

        #[inline]
        fn powi(self, exponent: i32) -> Self {
            if exponent >= 0 {
                self.saturating_pow(exponent.unsigned_abs())
            } else {
                (self as f64).powi(exponent) as $t
            }
        }

        #[inline]
        fn powf(self, exponent: f64) -> Self {
            (self as f64).powf(exponent) as $t
        }

        #[inline]
        fn recip(self) -> Self {
            (self as f64).recip() as $t
        }

        fn log(self, base: u32) -> Result<Self> {
            if self <= 0 {
                return Err(domain_error(format!("logarithm of non-positive value {self}")));
            }
            match base {
                0 => Ok((self as f64).ln() as $t),
                1 => Err(domain_error("logarithm in base 1")),
                _ => Ok(integer_log(self as u128, base as u128) as $t),
            }
        }

        #[inline]
        fn is_finite(self) -> bool {
            true
        }
    };
}

macro_rules! impl_signed {
    ($($t:ty),* $(,)?) => {$(
        impl Numeric for $t {
            impl_integer_common!($t);

            #[inline]
            fn magnitude(self) -> Self {
                self.saturating_abs()
            }

            #[inline]
            fn spread(self, other: Self) -> Self {
                self.checked_sub(other).map_or(<$t>::MAX, <$t>::saturating_abs)
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl Numeric for $t {
            impl_integer_common!($t);

            #[inline]
            fn magnitude(self) -> Self {
                self
            }

            #[inline]
            fn spread(self, other: Self) -> Self {
                self.abs_diff(other)
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {$(
        impl Numeric for $t {
            const INTEGRAL: bool = false;

            #[inline]
            fn saturating_add(self, other: Self) -> Self {
                self + other
            }

            #[inline]
            fn saturating_mul(self, other: Self) -> Self {
                self * other
            }

            #[inline]
            fn magnitude(self) -> Self {
                self.abs()
            }

            #[inline]
            fn spread(self, other: Self) -> Self {
                (self - other).abs()
            }

            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            #[inline]
            fn cbrt(self) -> Self {
                <$t>::cbrt(self)
            }

            #[inline]
            fn powi(self, exponent: i32) -> Self {
                <$t>::powi(self, exponent)
            }

            #[inline]
            fn powf(self, exponent: f64) -> Self {
                <$t>::powf(self, exponent as $t)
            }

            #[inline]
            fn recip(self) -> Self {
                <$t>::recip(self)
            }

            fn log(self, base: u32) -> Result<Self> {
                if self < 0.0 {
                    return Err(domain_error(format!("logarithm of negative value {self}")));
                }
                match base {
                    0 => Ok(self.ln()),
                    1 => Err(domain_error("logarithm in base 1")),
                    2 => Ok(self.log2()),
                    10 => Ok(self.log10()),
                    _ => Ok(self.ln() / (base as $t).ln()),
                }
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);
