// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal tick strip geometry: centering padding, tick positions, and
//! the visible tick range.

use core::ops::Range;

use kurbo::Size;

use crate::scalar::{ceil_to_isize, floor_to_isize, round_to_isize};

/// Geometry of a horizontally scrolling strip of evenly spaced ticks.
///
/// Ticks are points: tick `i` sits at content x `padding + i * spacing`, where
/// `padding` is half the measured viewport width. With that padding on both
/// ends the first and last tick can reach the viewport's center, and the
/// scroll offset that centers tick `i` is simply `i * spacing`.
///
/// This type only tracks the viewport, the scroll offset, and overscan. It
/// does not know about values; see [`DialScale`](crate::DialScale) for that.
#[derive(Clone, Debug)]
pub struct TickStrip {
    len: usize,
    spacing: f64,
    viewport: Option<Size>,
    scroll_offset: f64,
    overscan: f64,
}

impl TickStrip {
    /// Creates a strip of `len` ticks `spacing` apart with no measured viewport.
    #[must_use]
    pub fn new(len: usize, spacing: f64) -> Self {
        Self {
            len,
            spacing: sanitize(spacing),
            viewport: None,
            scroll_offset: 0.0,
            overscan: 0.0,
        }
    }

    /// Number of ticks in the strip.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the strip has no ticks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets the number of ticks, keeping the scroll offset within the new content.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.set_scroll_offset(self.scroll_offset);
    }

    /// Distance between adjacent ticks.
    #[must_use]
    pub const fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Sets the distance between adjacent ticks.
    pub fn set_spacing(&mut self, spacing: f64) {
        debug_assert!(
            spacing.is_finite(),
            "TickStrip spacing must be finite; got {spacing:?}"
        );
        self.spacing = sanitize(spacing);
        self.set_scroll_offset(self.scroll_offset);
    }

    /// Last measured viewport size, if any.
    #[must_use]
    pub const fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    /// Records a viewport measurement. Returns `true` if the size changed.
    ///
    /// Non-finite or negative dimensions are clamped to zero.
    pub fn set_viewport(&mut self, size: Size) -> bool {
        let size = Size::new(sanitize(size.width), sanitize(size.height));
        if self.viewport == Some(size) {
            return false;
        }
        self.viewport = Some(size);
        true
    }

    /// Overscan applied on both sides of the viewport by [`TickStrip::visible_range`].
    #[must_use]
    pub const fn overscan(&self) -> f64 {
        self.overscan
    }

    /// Sets the overscan distance.
    pub fn set_overscan(&mut self, overscan: f64) {
        self.overscan = sanitize(overscan);
    }

    /// Padding before the first and after the last tick: half the viewport width.
    ///
    /// Zero until a viewport has been measured.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.viewport.map_or(0.0, |size| size.width / 2.0)
    }

    /// Total content width, including padding on both ends.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        2.0 * self.padding() + self.max_scroll_offset()
    }

    /// Largest scroll offset: the one that centers the last tick.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f64 {
        #[allow(
            clippy::cast_precision_loss,
            reason = "Tick counts stay far below the f64 mantissa limit"
        )]
        let gaps = self.len.saturating_sub(1) as f64;
        gaps * self.spacing
    }

    /// Content-space x position of tick `index`.
    #[must_use]
    pub fn tick_x(&self, index: usize) -> f64 {
        #[allow(
            clippy::cast_precision_loss,
            reason = "Tick counts stay far below the f64 mantissa limit"
        )]
        let i = index as f64;
        self.padding() + i * self.spacing
    }

    /// Scroll offset that centers tick `index`, clamping `index` to the strip.
    ///
    /// Returns zero for an empty strip.
    #[must_use]
    pub fn offset_for_index(&self, index: usize) -> f64 {
        let Some(last) = self.len.checked_sub(1) else {
            return 0.0;
        };
        #[allow(
            clippy::cast_precision_loss,
            reason = "Tick counts stay far below the f64 mantissa limit"
        )]
        let i = index.min(last) as f64;
        i * self.spacing
    }

    /// Tick nearest to the viewport center at scroll offset `offset`.
    ///
    /// Returns `None` for an empty strip.
    #[must_use]
    pub fn nearest_index(&self, offset: f64) -> Option<usize> {
        let last = self.len.checked_sub(1)?;
        if self.spacing <= 0.0 {
            return Some(0);
        }
        let i = round_to_isize(offset / self.spacing);
        Some(usize::try_from(i).map_or(0, |i| i.min(last)))
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Sets the scroll offset, clamped to `0..=max_scroll_offset()`.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        let offset = if offset.is_nan() { 0.0 } else { offset };
        self.scroll_offset = offset.clamp(0.0, self.max_scroll_offset());
    }

    /// Tick currently nearest to the viewport center.
    #[must_use]
    pub fn centered_index(&self) -> Option<usize> {
        self.nearest_index(self.scroll_offset)
    }

    /// Indices of ticks inside the viewport, widened by the overscan distance.
    ///
    /// Empty until a viewport has been measured, or when the strip is empty.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let Some(viewport) = self.viewport else {
            return 0..0;
        };
        if self.len == 0 {
            return 0..0;
        }
        if self.spacing <= 0.0 {
            // Every tick collapses onto the center.
            return 0..self.len;
        }
        // Viewport covers content x in [offset, offset + width]; tick i sits at
        // padding + i * spacing.
        let padding = self.padding();
        let min = self.scroll_offset - self.overscan - padding;
        let max = self.scroll_offset + viewport.width + self.overscan - padding;
        let start = ceil_to_isize(min / self.spacing).max(0);
        let end = floor_to_isize(max / self.spacing).saturating_add(1);
        let start = usize::try_from(start).unwrap_or(0).min(self.len);
        let end = usize::try_from(end).unwrap_or(0).min(self.len);
        if end <= start { start..start } else { start..end }
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::TickStrip;

    #[test]
    fn padding_tracks_viewport_width() {
        let mut strip = TickStrip::new(101, 8.0);
        assert_eq!(strip.padding(), 0.0);
        assert!(strip.visible_range().is_empty());

        assert!(strip.set_viewport(Size::new(200.0, 40.0)));
        assert_eq!(strip.padding(), 100.0);
        assert!(!strip.set_viewport(Size::new(200.0, 40.0)));
        assert!(strip.set_viewport(Size::new(320.0, 40.0)));
        assert_eq!(strip.padding(), 160.0);
        assert_eq!(strip.content_width(), 320.0 + 800.0);
    }

    #[test]
    fn centering_offsets_and_nearest_ticks() {
        let mut strip = TickStrip::new(11, 10.0);
        strip.set_viewport(Size::new(100.0, 20.0));

        assert_eq!(strip.offset_for_index(0), 0.0);
        assert_eq!(strip.offset_for_index(4), 40.0);
        // Clamped to the last tick.
        assert_eq!(strip.offset_for_index(99), 100.0);

        // Centered tick x minus half the viewport is the offset.
        assert_eq!(strip.tick_x(4) - 50.0, strip.offset_for_index(4));

        assert_eq!(strip.nearest_index(44.9), Some(4));
        assert_eq!(strip.nearest_index(45.0), Some(5));
        assert_eq!(strip.nearest_index(-30.0), Some(0));
        assert_eq!(strip.nearest_index(1e9), Some(10));
    }

    #[test]
    fn scroll_offset_is_clamped_to_content() {
        let mut strip = TickStrip::new(5, 10.0);
        strip.set_scroll_offset(100.0);
        assert_eq!(strip.scroll_offset(), 40.0);
        strip.set_scroll_offset(-5.0);
        assert_eq!(strip.scroll_offset(), 0.0);
        strip.set_scroll_offset(25.0);
        assert_eq!(strip.centered_index(), Some(3));

        strip.set_len(2);
        assert_eq!(strip.scroll_offset(), 10.0);
    }

    #[test]
    fn visible_range_spans_viewport_plus_overscan() {
        let mut strip = TickStrip::new(1000, 10.0);
        strip.set_viewport(Size::new(100.0, 20.0));

        // Centered on tick 0: x in [0, 100] with padding 50 covers ticks 0..=5.
        assert_eq!(strip.visible_range(), 0..6);

        // Centered on tick 20: ticks 15..=25.
        strip.set_scroll_offset(200.0);
        assert_eq!(strip.visible_range(), 15..26);

        strip.set_overscan(20.0);
        assert_eq!(strip.visible_range(), 13..28);

        // At the end, the range stops at the last tick.
        strip.set_scroll_offset(9990.0);
        assert_eq!(strip.visible_range(), 992..1000);
    }

    #[test]
    fn empty_strip_is_inert() {
        let mut strip = TickStrip::new(0, 8.0);
        strip.set_viewport(Size::new(100.0, 20.0));
        assert_eq!(strip.nearest_index(10.0), None);
        assert_eq!(strip.offset_for_index(3), 0.0);
        assert!(strip.visible_range().is_empty());
        strip.set_scroll_offset(50.0);
        assert_eq!(strip.scroll_offset(), 0.0);
    }
}
