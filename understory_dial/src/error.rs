// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by checked dial construction.

/// Reasons a range/step pair cannot describe a dial scale.
///
/// Only [`DialScale::try_new`](crate::DialScale::try_new) reports these.
/// [`DialScale::new`](crate::DialScale::new) treats them as caller contract
/// violations and tolerates the result without panicking in release builds.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum DialError {
    /// The step is zero, negative, or not finite.
    #[error("dial step must be positive and finite, got {step}")]
    InvalidStep {
        /// The rejected step, widened to `f64`.
        step: f64,
    },
    /// The lower bound is greater than the upper bound.
    #[error("dial range is inverted: lower bound {lower} exceeds upper bound {upper}")]
    InvertedRange {
        /// Lower bound, widened to `f64`.
        lower: f64,
        /// Upper bound, widened to `f64`.
        upper: f64,
    },
    /// One of the bounds is infinite or NaN.
    #[error("dial bounds must be finite")]
    NonFiniteBounds,
}
