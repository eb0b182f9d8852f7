use std::any::TypeId;

use crate::error::{unsupported_resize, Result};

/// Minimal capability set of a fixed-size vectorized container.
///
/// Implementors only provide element storage; every algorithm of the engine
/// and numeric layers is a default method of a trait blanket-implemented for
/// all `Vectorizer`s.
pub trait Vectorizer: Clone + Default {
    /// Element type.
    type Value: Clone + Default + 'static;

    /// Container of the same shape holding another element type.
    type Rebind<U: Clone + Default + 'static>: Vectorizer<Value = U>;

    /// Number of elements, known without an instance.
    const SIZE: usize;

    /// Whether the size is a compile-time constant.
    const CONSTANT_SIZE: bool = true;

    fn as_slice(&self) -> &[Self::Value];

    fn as_mut_slice(&mut self) -> &mut [Self::Value];

    /// Number of elements of this instance.
    #[inline]
    fn size(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether the element type is `bool`.
    #[inline]
    fn boolean() -> bool {
        TypeId::of::<Self::Value>() == TypeId::of::<bool>()
    }

    /// Value that fresh elements are initialized with.
    #[inline]
    fn default_value() -> Self::Value {
        Self::Value::default()
    }

    /// Compile-time shape parameters.
    fn shape() -> Vec<usize> {
        vec![Self::SIZE]
    }

    /// Builds a container whose element `i` is `f(i)`.
    fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize) -> Self::Value,
    {
        let mut result = Self::default();
        for (i, x) in result.as_mut_slice().iter_mut().enumerate() {
            *x = f(i);
        }
        result
    }

    /// Accepts only the current size: fixed containers never reallocate.
    fn resize(&mut self, size: usize) -> Result<()> {
        ensure_fixed("resize", size, self.size())
    }

    /// Accepts only the current size.
    fn reserve(&mut self, capacity: usize) -> Result<()> {
        ensure_fixed("reserve", capacity, self.size())
    }

    /// Succeeds only on empty containers.
    fn clear(&mut self) -> Result<()> {
        ensure_fixed("clear", 0, self.size())
    }
}

fn ensure_fixed(operation: &'static str, requested: usize, size: usize) -> Result<()> {
    if requested == size {
        Ok(())
    } else {
        tracing::warn!(operation, requested, size, "refusing to change a fixed size");
        Err(unsupported_resize(operation, requested, size))
    }
}

/// Size information shared by vectorized and broadcast operands.
pub trait Shape {
    /// `true` for containers, `false` for broadcast scalars and markers.
    const VECTORIZED: bool;

    /// Size known at compile time, if any.
    const STATIC_LEN: Option<usize>;

    /// Size known at run time, `None` for broadcast operands.
    fn extent(&self) -> Option<usize>;
}

impl<V: Vectorizer> Shape for V {
    const VECTORIZED: bool = true;
    const STATIC_LEN: Option<usize> = if V::CONSTANT_SIZE {
        Some(V::SIZE)
    } else {
        None
    };

    #[inline]
    fn extent(&self) -> Option<usize> {
        Some(self.size())
    }
}

/// An operand usable at any index: element `i` of a container, or a scalar
/// broadcast to every index.
pub trait Operand<T>: Shape {
    fn get(&self, index: usize) -> T;
}

impl<V: Vectorizer> Operand<V::Value> for V {
    #[inline]
    fn get(&self, index: usize) -> V::Value {
        self.as_slice()[index].clone()
    }
}

/// Truth value of an element when used as a mask: `true` or nonzero.
pub trait Truth {
    fn truth(&self) -> bool;
}

impl Truth for bool {
    #[inline]
    fn truth(&self) -> bool {
        *self
    }
}

/// Per-element selector of masked operations.
pub trait Selection: Shape {
    /// `false` only for [`All`].
    const ENABLED: bool;

    fn selected(&self, index: usize) -> bool;
}

impl<V> Selection for V
where
    V: Vectorizer,
    V::Value: Truth,
{
    const ENABLED: bool = true;

    #[inline]
    fn selected(&self, index: usize) -> bool {
        self.as_slice()[index].truth()
    }
}

/// Selects every element; stands for "no mask".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct All;

impl Shape for All {
    const VECTORIZED: bool = false;
    const STATIC_LEN: Option<usize> = None;

    #[inline]
    fn extent(&self) -> Option<usize> {
        None
    }
}

impl Selection for All {
    const ENABLED: bool = false;

    #[inline]
    fn selected(&self, _index: usize) -> bool {
        true
    }
}

/// Auxiliary container permuted in lock-step with a sorted one.
pub trait Companion: Shape {
    type Key: Clone;

    /// `false` only for [`NoCompanion`].
    const ENABLED: bool;

    fn key(&self, index: usize) -> Option<Self::Key>;

    fn set_key(&mut self, index: usize, key: Self::Key);
}

impl<V: Vectorizer> Companion for V {
    type Key = V::Value;

    const ENABLED: bool = true;

    #[inline]
    fn key(&self, index: usize) -> Option<V::Value> {
        Some(self.as_slice()[index].clone())
    }

    #[inline]
    fn set_key(&mut self, index: usize, key: V::Value) {
        self.as_mut_slice()[index] = key;
    }
}

/// Stands for "no companion index container".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoCompanion;

impl Shape for NoCompanion {
    const VECTORIZED: bool = false;
    const STATIC_LEN: Option<usize> = None;

    #[inline]
    fn extent(&self) -> Option<usize> {
        None
    }
}

impl Companion for NoCompanion {
    type Key = ();

    const ENABLED: bool = false;

    #[inline]
    fn key(&self, _index: usize) -> Option<()> {
        None
    }

    #[inline]
    fn set_key(&mut self, _index: usize, _key: ()) {}
}

macro_rules! impl_scalar_operand {
    ($($t:ty),* $(,)?) => {$(
        impl Shape for $t {
            const VECTORIZED: bool = false;
            const STATIC_LEN: Option<usize> = None;

            #[inline]
            fn extent(&self) -> Option<usize> {
                None
            }
        }

        impl Operand<$t> for $t {
            #[inline]
            fn get(&self, _index: usize) -> $t {
                *self
            }
        }
    )*};
}

impl_scalar_operand!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

macro_rules! impl_integer_truth {
    ($($t:ty),* $(,)?) => {$(
        impl Truth for $t {
            #[inline]
            fn truth(&self) -> bool {
                *self != 0
            }
        }
    )*};
}

impl_integer_truth!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truth for f32 {
    #[inline]
    fn truth(&self) -> bool {
        *self != 0.0
    }
}

impl Truth for f64 {
    #[inline]
    fn truth(&self) -> bool {
        *self != 0.0
    }
}
