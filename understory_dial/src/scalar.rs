// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric abstraction for dial values.

use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Sub};

/// Floating-point-like scalar used for dial values, bounds, and steps.
///
/// The dial only needs subtraction, division, multiplication by an index, and
/// ordering, plus a couple of conversions for rounding. Rounding is done through
/// integer casts so the crate stays usable without `std` or `libm`.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Machine epsilon of the scalar type, widened to `f64`.
    ///
    /// Bounds the rounding error of steps such as `0.1` that have no exact
    /// binary representation.
    const EPSILON: f64;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Converts a tick index into the scalar type.
    fn from_usize(n: usize) -> Self;

    /// Widens the scalar to `f64`.
    fn to_f64(self) -> f64;

    /// Returns `true` if the value is neither infinite nor NaN.
    fn is_finite(self) -> bool;
}

impl Scalar for f32 {
    const EPSILON: f64 = f32::EPSILON as f64;

    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    #[allow(
        clippy::cast_precision_loss,
        reason = "Tick counts stay far below the f32 mantissa limit in practice"
    )]
    fn from_usize(n: usize) -> Self {
        n as Self
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }
}

impl Scalar for f64 {
    const EPSILON: f64 = f64::EPSILON;

    #[inline(always)]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    #[allow(
        clippy::cast_precision_loss,
        reason = "Tick counts stay far below the f64 mantissa limit"
    )]
    fn from_usize(n: usize) -> Self {
        n as Self
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }
}

/// Rounds toward negative infinity, saturating at the `isize` bounds.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Saturating float-to-int casts are the intended behavior"
)]
pub(crate) fn floor_to_isize(x: f64) -> isize {
    if x.is_nan() {
        return 0;
    }
    let i = x as isize;
    if (i as f64) > x { i.saturating_sub(1) } else { i }
}

/// Rounds half away from zero, saturating at the `isize` bounds.
pub(crate) fn round_to_isize(x: f64) -> isize {
    if x < 0.0 {
        floor_to_isize(-x + 0.5).saturating_neg()
    } else {
        floor_to_isize(x + 0.5)
    }
}

/// Rounds toward positive infinity, saturating at the `isize` bounds.
pub(crate) fn ceil_to_isize(x: f64) -> isize {
    floor_to_isize(-x).saturating_neg()
}
