// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar abstractions shared by the matrix and generator code.
//!
//! [`Scalar`] is the minimal surface needed for component-wise arithmetic and
//! matrix products; it is implemented for `f32`, `f64`, `i32` and `i64`.
//! [`Real`] adds what Gauss-Jordan elimination and real-valued sampling need
//! (absolute value, reciprocal, and the largest value below one) and is only
//! implemented for the two IEEE float widths.
//!
//! Rounding contract:
//! - Every operation rounds exactly as the primitive type does; no fused
//!   multiply-add or extended precision is introduced here.
//! - [`Real::from_u32_unit`] converts to the float type first and then scales
//!   by 2⁻³², which is exact because the scale is a power of two.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Arithmetic element type of a [`Matrix4x4`](crate::Matrix4x4).
///
/// Arithmetic operators are required via the standard operator traits so that
/// generic code can use `+`, `-`, `*` and `/` directly.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Returns the additive identity (zero).
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    fn one() -> Self;
}

/// Floating-point scalars: the element types that support inversion.
pub trait Real: Scalar + Neg<Output = Self> {
    /// Largest representable value strictly less than one.
    const ONE_MINUS_EPSILON: Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Reciprocal (`1 / self`), rounded once.
    fn recip(self) -> Self;

    /// Maps a 32-bit draw onto `[0, 1]` as `value * 2^-32`.
    ///
    /// The result may round up to exactly `1.0` for `f32`; callers that need a
    /// half-open interval clamp against [`Real::ONE_MINUS_EPSILON`].
    fn from_u32_unit(value: u32) -> Self;

    /// Largest representable value strictly less than `self`.
    fn next_down(self) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty => $zero:expr, $one:expr);* $(;)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn zero() -> Self {
                    $zero
                }

                #[inline]
                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_scalar! {
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
    i32 => 0, 1;
    i64 => 0, 1;
}

/// 2⁻³² as `f32` (biased exponent 95).
const F32_TWO_POW_NEG_32: f32 = f32::from_bits(0x2f80_0000);
/// 2⁻³² as `f64` (biased exponent 991).
const F64_TWO_POW_NEG_32: f64 = f64::from_bits(0x3df0_0000_0000_0000);

impl Real for f32 {
    const ONE_MINUS_EPSILON: Self = f32::from_bits(0x3f7f_ffff);

    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }

    #[inline]
    fn recip(self) -> Self {
        1.0 / self
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn from_u32_unit(value: u32) -> Self {
        value as f32 * F32_TWO_POW_NEG_32
    }

    #[inline]
    fn next_down(self) -> Self {
        f32::next_down(self)
    }
}

impl Real for f64 {
    const ONE_MINUS_EPSILON: Self = f64::from_bits(0x3fef_ffff_ffff_ffff);

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn recip(self) -> Self {
        1.0 / self
    }

    #[inline]
    fn from_u32_unit(value: u32) -> Self {
        f64::from(value) * F64_TWO_POW_NEG_32
    }

    #[inline]
    fn next_down(self) -> Self {
        f64::next_down(self)
    }
}
