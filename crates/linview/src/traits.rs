use std::{fmt, ops};

use crate::approx::{ApproxEq, DefaultTolerances};

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the sine and cosine of the angle `self` (in radians) at once.
    fn sin_cos(self) -> (Self, Self);
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support computing their absolute value.
pub trait Abs {
    fn abs(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). [`i32`] implements it in terms of [`Ord::min`] and
/// [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + PartialOrd
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + PartialOrd
        + Copy
{
}

/// Element types that can live in a tuple or matrix storage.
///
/// This is implemented for [`f32`], [`f64`] and [`i32`], the three element families the library
/// supports.
pub trait Element:
    Number
    + Abs
    + MinMax
    + ApproxEq<Tolerance = Self>
    + DefaultTolerances
    + fmt::Debug
    + fmt::Display
    + 'static
{
    /// Returns the raw bit pattern of `self`, widened to 64 bits.
    ///
    /// Exact (`==`) comparison and hashing of tuples are defined in terms of these bits, which
    /// makes them consistent with each other (`-0.0` and `0.0` are different, a `NaN` equals
    /// itself).
    fn to_bits(self) -> u64;
}

/// Floating-point element types.
pub trait Float: Element + Sqrt + Trig {
    /// Converts an `f64` constant to `Self`, rounding if necessary.
    fn from_f64(v: f64) -> Self;
}

impl Element for f32 {
    #[inline]
    fn to_bits(self) -> u64 {
        f32::to_bits(self).into()
    }
}

impl Element for f64 {
    #[inline]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }
}

impl Element for i32 {
    #[inline]
    fn to_bits(self) -> u64 {
        u64::from(self as u32)
    }
}

impl Float for f32 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl Float for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

impl Zero for f32 {
    const ZERO: Self = 0.0;
}
impl Zero for f64 {
    const ZERO: Self = 0.0;
}
impl Zero for i32 {
    const ZERO: Self = 0;
}

impl One for f32 {
    const ONE: Self = 1.0;
}
impl One for f64 {
    const ONE: Self = 1.0;
}
impl One for i32 {
    const ONE: Self = 1;
}

impl MinMax for i32 {
    fn min(self, other: Self) -> Self {
        Ord::min(self, other)
    }

    fn max(self, other: Self) -> Self {
        Ord::max(self, other)
    }
}

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Abs for $types {
                #[inline]
                fn abs(self) -> Self {
                    self.abs()
                }
            }

            impl Sqrt for $types {
                #[inline]
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }
            }
        )+
    };
}
float_impls!(f32, f64);

impl Abs for i32 {
    #[inline]
    fn abs(self) -> Self {
        self.abs()
    }
}
