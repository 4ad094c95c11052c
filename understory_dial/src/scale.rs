// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range and step of a dial, and the mapping between tick indices and values.

use crate::scalar::{floor_to_isize, round_to_isize};
use crate::{DialError, Scalar};

/// A closed value range `[lower, upper]` divided into ticks `step` apart.
///
/// Tick `i` maps to `lower + i * step`, for `i` in `0..total_ticks()`.
/// The mapping is exact under real arithmetic; in floating point, converting a
/// tick's value back to an index always yields the same tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialScale<S: Scalar> {
    lower: S,
    upper: S,
    step: S,
    total_ticks: usize,
}

impl<S: Scalar> DialScale<S> {
    /// Creates a scale over `[lower, upper]` with ticks `step` apart.
    ///
    /// `step > 0` and `lower <= upper` are preconditions. They are checked in
    /// debug builds only; a violating scale has zero ticks.
    /// Use [`DialScale::try_new`] to validate caller input instead.
    #[must_use]
    pub fn new(lower: S, upper: S, step: S) -> Self {
        debug_assert!(step > S::zero(), "dial step must be positive; got {step:?}");
        debug_assert!(
            lower <= upper,
            "dial range must not be inverted; got {lower:?}..={upper:?}"
        );
        Self {
            lower,
            upper,
            step,
            total_ticks: tick_count(lower, upper, step),
        }
    }

    /// Creates a scale, rejecting inverted ranges, non-finite bounds, and
    /// non-positive steps.
    pub fn try_new(lower: S, upper: S, step: S) -> Result<Self, DialError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(DialError::NonFiniteBounds);
        }
        if !step.is_finite() || step <= S::zero() {
            return Err(DialError::InvalidStep {
                step: step.to_f64(),
            });
        }
        if lower > upper {
            return Err(DialError::InvertedRange {
                lower: lower.to_f64(),
                upper: upper.to_f64(),
            });
        }
        Ok(Self::new(lower, upper, step))
    }

    /// Builds a scale without checking preconditions.
    #[cfg(test)]
    pub(crate) fn unchecked(lower: S, upper: S, step: S) -> Self {
        Self {
            lower,
            upper,
            step,
            total_ticks: tick_count(lower, upper, step),
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn lower(&self) -> S {
        self.lower
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn upper(&self) -> S {
        self.upper
    }

    /// Returns the step between adjacent ticks.
    #[must_use]
    pub const fn step(&self) -> S {
        self.step
    }

    /// Number of ticks: `floor((upper - lower) / step) + 1`, or zero for a
    /// degenerate scale.
    #[must_use]
    pub const fn total_ticks(&self) -> usize {
        self.total_ticks
    }

    /// Returns `true` if the scale has no ticks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_ticks == 0
    }

    /// Index of the last tick, if any.
    #[must_use]
    pub const fn last_index(&self) -> Option<usize> {
        self.total_ticks.checked_sub(1)
    }

    /// Returns `true` if `value` lies within `[lower, upper]`.
    #[must_use]
    pub fn contains(&self, value: S) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Tick index nearest to `value`: `round((value - lower) / step)`.
    ///
    /// The result is not clamped and may be negative or past the last tick for
    /// out-of-range values.
    #[must_use]
    pub fn index_from_value(&self, value: S) -> isize {
        round_to_isize(((value - self.lower) / self.step).to_f64())
    }

    /// Tick index nearest to `value`, clamped to `0..total_ticks()`.
    ///
    /// Returns `None` when the scale has no ticks.
    #[must_use]
    pub fn clamped_index_from_value(&self, value: S) -> Option<usize> {
        self.clamp_index(self.index_from_value(value))
    }

    /// Clamps a signed tick index to `0..total_ticks()`.
    #[must_use]
    pub fn clamp_index(&self, index: isize) -> Option<usize> {
        let last = self.last_index()?;
        Some(usize::try_from(index).map_or(0, |i| i.min(last)))
    }

    /// Value of tick `index`: `lower + index * step`.
    ///
    /// Indices past the last tick are not clamped.
    #[must_use]
    pub fn value_from_index(&self, index: usize) -> S {
        self.lower + S::from_usize(index) * self.step
    }

    /// Value of tick `index` after clamping it to the scale.
    #[must_use]
    pub fn clamped_value_from_index(&self, index: usize) -> Option<S> {
        let last = self.last_index()?;
        Some(self.value_from_index(index.min(last)))
    }
}

/// Machine epsilons of slack allowed for the rounding of bounds, step, and ratio.
const ROUNDING_ULPS: f64 = 4.0;

/// `floor((upper - lower) / step) + 1`, snapping ratios that are a rounding
/// error away from a whole number onto it.
///
/// A ratio is only rounded up when the resulting last tick does not land past
/// `upper` by more than rounding error.
#[allow(
    clippy::neg_cmp_op_on_partial_ord,
    reason = "NaN steps and bounds must count as degenerate"
)]
fn tick_count<S: Scalar>(lower: S, upper: S, step: S) -> usize {
    if !(step > S::zero()) || !(lower <= upper) {
        return 0;
    }
    let ratio = ((upper - lower) / step).to_f64();
    if !ratio.is_finite() {
        return 0;
    }
    let magnitude = lower.to_f64().abs().max(upper.to_f64().abs());
    // Error in the bounds is relative to their magnitude, not to their distance.
    let tolerance = ROUNDING_ULPS * S::EPSILON * ratio.max(magnitude / step.to_f64()).max(1.0);
    let nearest = round_to_isize(ratio);
    #[allow(
        clippy::cast_precision_loss,
        reason = "Comparison only; the ratio is already a float"
    )]
    let distance = ratio - nearest as f64;
    let floored = floor_to_isize(ratio);
    let whole = if distance.abs() <= tolerance
        && (nearest <= floored || !overshoots(lower, upper, step, nearest, magnitude))
    {
        nearest
    } else {
        floored
    };
    usize::try_from(whole).map_or(0, |n| n.saturating_add(1))
}

/// Whether tick `index` lies past `upper` by more than rounding error.
fn overshoots<S: Scalar>(lower: S, upper: S, step: S, index: isize, magnitude: f64) -> bool {
    let Ok(index) = usize::try_from(index) else {
        return false;
    };
    let last = (lower + S::from_usize(index) * step).to_f64();
    last - upper.to_f64() > ROUNDING_ULPS * S::EPSILON * magnitude.max(1.0)
}
