//! Elementwise operators of [`StaticVector`].
//!
//! Vector-vector operators are generic over both element types and infer the
//! output element type from the scalar operator; both operands share the
//! const parameter `N`, so a size mismatch does not compile. Vector-scalar
//! and scalar-vector operators broadcast the primitive operand.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::containers::StaticVector;

#[inline]
fn zip_map<A, B, C, F, const N: usize>(lhs: [A; N], rhs: [B; N], mut f: F) -> [C; N]
where
    F: FnMut(A, B) -> C,
{
    let mut rhs = rhs.into_iter();
    lhs.map(|x| match rhs.next() {
        Some(y) => f(x, y),
        None => unreachable!("both arrays hold N elements"),
    })
}

macro_rules! vector_operator {
    ($($Trait:ident::$method:ident, $AssignTrait:ident::$assign:ident;)*) => {$(
        impl<T, U, const N: usize> $Trait<StaticVector<U, N>> for StaticVector<T, N>
        where
            T: $Trait<U>,
        {
            type Output = StaticVector<<T as $Trait<U>>::Output, N>;

            #[inline]
            fn $method(self, rhs: StaticVector<U, N>) -> Self::Output {
                StaticVector::new(zip_map(self.data, rhs.data, |x, y| $Trait::$method(x, y)))
            }
        }

        impl<T, U, const N: usize> $AssignTrait<StaticVector<U, N>> for StaticVector<T, N>
        where
            T: $AssignTrait<U>,
        {
            #[inline]
            fn $assign(&mut self, rhs: StaticVector<U, N>) {
                for (x, y) in self.data.iter_mut().zip(rhs.data) {
                    $AssignTrait::$assign(x, y);
                }
            }
        }
    )*};
}

vector_operator! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
    Rem::rem, RemAssign::rem_assign;
    BitAnd::bitand, BitAndAssign::bitand_assign;
    BitOr::bitor, BitOrAssign::bitor_assign;
    BitXor::bitxor, BitXorAssign::bitxor_assign;
    Shl::shl, ShlAssign::shl_assign;
    Shr::shr, ShrAssign::shr_assign;
}

macro_rules! scalar_operator {
    ($Trait:ident::$method:ident, $AssignTrait:ident::$assign:ident; $($t:ty),* $(,)?) => {$(
        impl<const N: usize> $Trait<$t> for StaticVector<$t, N> {
            type Output = StaticVector<$t, N>;

            #[inline]
            fn $method(self, rhs: $t) -> Self::Output {
                StaticVector::new(self.data.map(|x| $Trait::$method(x, rhs)))
            }
        }

        impl<const N: usize> $Trait<StaticVector<$t, N>> for $t {
            type Output = StaticVector<$t, N>;

            #[inline]
            fn $method(self, rhs: StaticVector<$t, N>) -> Self::Output {
                StaticVector::new(rhs.data.map(|x| $Trait::$method(self, x)))
            }
        }

        impl<const N: usize> $AssignTrait<$t> for StaticVector<$t, N> {
            #[inline]
            fn $assign(&mut self, rhs: $t) {
                for x in self.data.iter_mut() {
                    $AssignTrait::$assign(x, rhs);
                }
            }
        }
    )*};
}

macro_rules! arithmetic_scalar_operators {
    ($($t:ty),* $(,)?) => {
        scalar_operator!(Add::add, AddAssign::add_assign; $($t),*);
        scalar_operator!(Sub::sub, SubAssign::sub_assign; $($t),*);
        scalar_operator!(Mul::mul, MulAssign::mul_assign; $($t),*);
        scalar_operator!(Div::div, DivAssign::div_assign; $($t),*);
        scalar_operator!(Rem::rem, RemAssign::rem_assign; $($t),*);
    };
}

macro_rules! bitwise_scalar_operators {
    ($($t:ty),* $(,)?) => {
        scalar_operator!(BitAnd::bitand, BitAndAssign::bitand_assign; $($t),*);
        scalar_operator!(BitOr::bitor, BitOrAssign::bitor_assign; $($t),*);
        scalar_operator!(BitXor::bitxor, BitXorAssign::bitxor_assign; $($t),*);
    };
}

macro_rules! shift_scalar_operators {
    ($($t:ty),* $(,)?) => {
        scalar_operator!(Shl::shl, ShlAssign::shl_assign; $($t),*);
        scalar_operator!(Shr::shr, ShrAssign::shr_assign; $($t),*);
    };
}

arithmetic_scalar_operators!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
bitwise_scalar_operators!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
shift_scalar_operators!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Neg, const N: usize> Neg for StaticVector<T, N> {
    type Output = StaticVector<T::Output, N>;

    #[inline]
    fn neg(self) -> Self::Output {
        StaticVector::new(self.data.map(Neg::neg))
    }
}

/// Logical negation for `bool` elements, bitwise complement for integers.
impl<T: Not, const N: usize> Not for StaticVector<T, N> {
    type Output = StaticVector<T::Output, N>;

    #[inline]
    fn not(self) -> Self::Output {
        StaticVector::new(self.data.map(Not::not))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_vector_arithmetic() {
        let a = StaticVector::new([4i32, 8, 15, 16]);
        let b = StaticVector::new([1i32, 2, 3, 4]);
        assert_eq!((a + b).into_array(), [5, 10, 18, 20]);
        assert_eq!((a - b).into_array(), [3, 6, 12, 12]);
        assert_eq!((a * b).into_array(), [4, 16, 45, 64]);
        assert_eq!((a / b).into_array(), [4, 4, 5, 4]);
        assert_eq!((a % b).into_array(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_broadcast_both_sides() {
        let a = StaticVector::new([1.0f64, 2.0, 4.0]);
        assert_eq!((a * 2.0).into_array(), [2.0, 4.0, 8.0]);
        assert_eq!((8.0 / a).into_array(), [8.0, 4.0, 2.0]);
        assert_eq!((1.0 - a).into_array(), [0.0, -1.0, -3.0]);
    }

    #[test]
    fn test_compound_assignment() {
        let mut a = StaticVector::new([1u32, 2, 3]);
        a += StaticVector::new([1u32, 1, 1]);
        a *= 3;
        a <<= 1;
        assert_eq!(a.into_array(), [12, 18, 24]);
    }

    #[test]
    fn test_bitwise_and_unary() {
        let a = StaticVector::new([0b1100u8, 0b1010]);
        let b = StaticVector::new([0b1010u8, 0b0110]);
        assert_eq!((a & b).into_array(), [0b1000, 0b0010]);
        assert_eq!((a | b).into_array(), [0b1110, 0b1110]);
        assert_eq!((a ^ b).into_array(), [0b0110, 0b1100]);
        assert_eq!((!a).into_array(), [!0b1100u8, !0b1010u8]);

        let mask = StaticVector::new([true, false]);
        assert_eq!((!mask).into_array(), [false, true]);
        assert_eq!((mask & true).into_array(), [true, false]);
        assert_eq!((-StaticVector::new([1i32, -2])).into_array(), [-1, 2]);
    }
}
