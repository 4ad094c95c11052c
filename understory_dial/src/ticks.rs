// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick descriptors produced for the host renderer.

use alloc::format;
use alloc::string::String;
use core::ops::Range;

use crate::{DialColor, DialScale, DialStyle, Scalar, TickStrip};

bitflags::bitflags! {
    /// Rendering flags for a single tick.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TickFlags: u8 {
        /// Tick falls on a segment boundary: drawn taller and bold.
        const SEGMENT    = 0b0000_0001;
        /// Tick is the currently selected (centered) one.
        const EMPHASIZED = 0b0000_0010;
    }
}

/// One tick of the dial ruler, ready to be drawn by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick<S: Scalar> {
    /// Tick index in `0..total_ticks`.
    pub index: usize,
    /// Value this tick represents.
    pub value: S,
    /// Content-space x position of the tick's center line.
    pub x: f64,
    /// Segment/emphasis flags.
    pub flags: TickFlags,
    /// Formatted value for labeled segment ticks.
    pub label: Option<String>,
}

impl<S: Scalar> Tick<S> {
    /// Returns `true` for segment ticks.
    #[must_use]
    pub const fn is_segment(&self) -> bool {
        self.flags.contains(TickFlags::SEGMENT)
    }

    /// Returns `true` for the selected tick.
    #[must_use]
    pub const fn is_emphasized(&self) -> bool {
        self.flags.contains(TickFlags::EMPHASIZED)
    }

    /// Stroke color for this tick.
    #[must_use]
    pub fn color(&self, style: &DialStyle) -> DialColor {
        if self.is_emphasized() {
            style.selected_color
        } else {
            style.tick_color
        }
    }

    /// Scale factor for this tick.
    #[must_use]
    pub fn scale(&self, style: &DialStyle) -> f64 {
        if self.is_emphasized() {
            style.emphasis_scale
        } else {
            1.0
        }
    }

    /// Unscaled height: full for segment ticks, reduced for minor ones.
    #[must_use]
    pub fn height(&self, style: &DialStyle) -> f64 {
        if self.is_segment() {
            style.tick_height
        } else {
            style.tick_height * style.minor_height_ratio
        }
    }
}

/// Returns `true` if tick `index` is a segment tick for the given stride.
///
/// A stride of `0` is treated as `1`, making every tick a segment tick.
#[must_use]
pub fn is_segment(index: usize, stride: usize) -> bool {
    index % stride.max(1) == 0
}

/// Formats a tick value with `precision` decimal places.
///
/// Negative values that round to zero are printed without a sign.
#[must_use]
pub fn format_label<S: Scalar>(value: S, precision: usize) -> String {
    let label = format!("{value:.precision$}");
    match label.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => String::from(rest),
        _ => label,
    }
}

/// Iterator over a range of ticks.
///
/// Produced by [`Dial::ticks`](crate::Dial::ticks) and
/// [`Dial::visible_ticks`](crate::Dial::visible_ticks).
#[derive(Debug)]
pub struct TickIter<'a, S: Scalar> {
    scale: &'a DialScale<S>,
    style: &'a DialStyle,
    strip: &'a TickStrip,
    selected: Option<usize>,
    indices: Range<usize>,
}

impl<'a, S: Scalar> TickIter<'a, S> {
    /// Creates an iterator over `indices`, clamped to the scale's tick count.
    #[must_use]
    pub fn new(
        scale: &'a DialScale<S>,
        style: &'a DialStyle,
        strip: &'a TickStrip,
        selected: Option<usize>,
        indices: Range<usize>,
    ) -> Self {
        let end = indices.end.min(scale.total_ticks());
        let start = indices.start.min(end);
        Self {
            scale,
            style,
            strip,
            selected,
            indices: start..end,
        }
    }

    fn tick(&self, index: usize) -> Tick<S> {
        let value = self.scale.value_from_index(index);
        let mut flags = TickFlags::empty();
        let segment = is_segment(index, self.style.effective_stride());
        flags.set(TickFlags::SEGMENT, segment);
        flags.set(TickFlags::EMPHASIZED, self.selected == Some(index));
        let label = (segment && self.style.show_segment_labels)
            .then(|| format_label(value, self.style.label_precision));
        Tick {
            index,
            value,
            x: self.strip.tick_x(index),
            flags,
            label,
        }
    }
}

impl<S: Scalar> Iterator for TickIter<'_, S> {
    type Item = Tick<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        Some(self.tick(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<S: Scalar> DoubleEndedIterator for TickIter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.indices.next_back()?;
        Some(self.tick(index))
    }
}

impl<S: Scalar> ExactSizeIterator for TickIter<'_, S> {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{TickFlags, TickIter, format_label, is_segment};
    use crate::{DialScale, DialStyle, TickStrip};

    #[test]
    fn segment_marking_follows_stride() {
        assert!(is_segment(0, 10));
        assert!(is_segment(100, 10));
        assert!(!is_segment(105, 10));
        assert!(is_segment(7, 1));
        assert!(is_segment(7, 0));
    }

    #[test]
    fn labels_use_requested_precision() {
        assert_eq!(format_label(10.0_f64, 0), "10");
        assert_eq!(format_label(74.26_f64, 1), "74.3");
        assert_eq!(format_label(3.0_f32, 2), "3.00");
        assert_eq!(format_label(-0.2_f64, 0), "0");
        assert_eq!(format_label(-1.0_f64, 0), "-1");
    }

    #[test]
    fn segment_ticks_are_labeled_and_minor_ticks_are_not() {
        let scale = DialScale::new(0.0, 800.0, 0.1);
        let style = DialStyle::default();
        let strip = TickStrip::new(scale.total_ticks(), style.tick_spacing);

        let ticks: Vec<_> = TickIter::new(&scale, &style, &strip, None, 100..106).collect();
        assert_eq!(ticks.len(), 6);

        let segment = &ticks[0];
        assert_eq!(segment.index, 100);
        assert!(segment.is_segment());
        assert_eq!(segment.label.as_deref(), Some("10"));
        assert_eq!(segment.height(&style), 24.0);

        let minor = &ticks[5];
        assert_eq!(minor.index, 105);
        assert!(!minor.is_segment());
        assert_eq!(minor.label, None);
        assert_eq!(minor.height(&style), 12.0);
    }

    #[test]
    fn only_selected_tick_is_emphasized() {
        let scale = DialScale::new(0.0, 5.0, 1.0);
        let style = DialStyle::default();
        let strip = TickStrip::new(scale.total_ticks(), style.tick_spacing);

        let emphasized: Vec<_> = TickIter::new(&scale, &style, &strip, Some(3), 0..6)
            .filter(|t| t.flags.contains(TickFlags::EMPHASIZED))
            .map(|t| t.index)
            .collect();
        assert_eq!(emphasized, [3]);

        let tick = TickIter::new(&scale, &style, &strip, Some(3), 3..4)
            .next()
            .unwrap();
        assert_eq!(tick.color(&style), style.selected_color);
        assert_eq!(tick.scale(&style), style.emphasis_scale);

        let none = TickIter::new(&scale, &style, &strip, None, 0..6)
            .filter(|t| t.is_emphasized())
            .count();
        assert_eq!(none, 0);
    }

    #[test]
    fn zero_stride_and_custom_shape() {
        let scale = DialScale::new(0.0, 5.0, 1.0);
        let style = DialStyle::default()
            .with_segment_stride(0)
            .with_tick_height(40.0)
            .with_minor_height_ratio(0.25)
            .with_emphasis_scale(2.0);
        let strip = TickStrip::new(scale.total_ticks(), style.tick_spacing);

        let ticks: Vec<_> = TickIter::new(&scale, &style, &strip, Some(2), 0..6).collect();
        assert!(ticks.iter().all(|t| t.is_segment() && t.label.is_some()));
        assert!(ticks.iter().all(|t| t.height(&style) == 40.0));
        assert_eq!(ticks[2].scale(&style), 2.0);
        assert_eq!(ticks[3].scale(&style), 1.0);

        let style = style.with_segment_stride(4);
        let minor = TickIter::new(&scale, &style, &strip, None, 1..2)
            .next()
            .unwrap();
        assert_eq!(minor.height(&style), 10.0);
    }

    #[test]
    fn hidden_labels_and_out_of_range_indices() {
        let scale = DialScale::new(0.0, 5.0, 1.0);
        let style = DialStyle::default().with_segment_labels(false);
        let strip = TickStrip::new(scale.total_ticks(), style.tick_spacing);

        let ticks: Vec<_> = TickIter::new(&scale, &style, &strip, None, 4..50).collect();
        assert_eq!(ticks.iter().map(|t| t.index).collect::<Vec<_>>(), [4, 5]);
        assert!(ticks.iter().all(|t| t.label.is_none()));

        let rev: Vec<_> = TickIter::new(&scale, &style, &strip, None, 0..3)
            .rev()
            .map(|t| t.index)
            .collect();
        assert_eq!(rev, [2, 1, 0]);
    }
}
