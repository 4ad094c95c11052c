// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance configuration: colors, spacing, segment labels, and snapping.
//!
//! None of these options affect the value mapping; they only shape what the
//! host draws and how it reports scroll settling.

/// An 8-bit sRGB color with alpha.
///
/// Hosts convert this into their own color type when painting ticks and labels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, `255` is opaque.
    pub a: u8,
}

impl DialColor {
    /// Highlight used for the selected tick by default.
    pub const WARNING: Self = Self::rgb8(255, 149, 0);
    /// Neutral color used for unselected ticks by default.
    pub const GRAY: Self = Self::rgb8(142, 142, 147);
    /// Secondary label color used for segment labels by default.
    pub const SECONDARY: Self = Self::rgba8(60, 60, 67, 153);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with explicit alpha.
    #[must_use]
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the channels as `[r, g, b, a]`.
    #[must_use]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// How the host scroll view reports where it came to rest.
///
/// Chosen once when the dial is built, typically from the platform's
/// capabilities, and never switched per frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapStrategy {
    /// The scroll view snaps to tick children itself and reports the index of
    /// the centered tick via [`Dial::on_scroll_settled`](crate::Dial::on_scroll_settled).
    #[default]
    ViewAligned,
    /// The scroll view only reports its resting offset via
    /// [`Dial::on_scroll_end`](crate::Dial::on_scroll_end); the dial picks the
    /// nearest tick and asks the host to snap to it.
    Manual,
}

impl SnapStrategy {
    /// Picks [`SnapStrategy::ViewAligned`] when the host scroll view can snap to
    /// children, [`SnapStrategy::Manual`] otherwise.
    #[must_use]
    pub const fn resolve(host_snaps_to_children: bool) -> Self {
        if host_snaps_to_children {
            Self::ViewAligned
        } else {
            Self::Manual
        }
    }
}

/// Rendering options for a [`Dial`](crate::Dial).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DialStyle {
    /// Color of the emphasized (selected) tick.
    pub selected_color: DialColor,
    /// Color of every other tick.
    pub tick_color: DialColor,
    /// Color of segment labels.
    pub label_color: DialColor,
    /// Distance between adjacent ticks, in the host's layout units.
    pub tick_spacing: f64,
    /// Every `segment_stride`-th tick is a segment tick. `0` behaves like `1`.
    pub segment_stride: usize,
    /// Whether segment ticks carry a value label.
    pub show_segment_labels: bool,
    /// Number of decimal places in segment labels.
    pub label_precision: usize,
    /// Height of a segment tick.
    pub tick_height: f64,
    /// Height of a minor tick relative to a segment tick.
    pub minor_height_ratio: f64,
    /// Scale factor applied to the emphasized tick.
    pub emphasis_scale: f64,
}

impl Default for DialStyle {
    fn default() -> Self {
        Self {
            selected_color: DialColor::WARNING,
            tick_color: DialColor::GRAY,
            label_color: DialColor::SECONDARY,
            tick_spacing: 8.0,
            segment_stride: 10,
            show_segment_labels: true,
            label_precision: 0,
            tick_height: 24.0,
            minor_height_ratio: 0.5,
            emphasis_scale: 1.5,
        }
    }
}

impl DialStyle {
    /// Sets the selected-tick color.
    #[must_use]
    pub fn with_selected_color(mut self, color: DialColor) -> Self {
        self.selected_color = color;
        self
    }

    /// Sets the color of unselected ticks.
    #[must_use]
    pub fn with_tick_color(mut self, color: DialColor) -> Self {
        self.tick_color = color;
        self
    }

    /// Sets the segment label color.
    #[must_use]
    pub fn with_label_color(mut self, color: DialColor) -> Self {
        self.label_color = color;
        self
    }

    /// Sets the spacing between ticks. Negative or non-finite values fall back to zero.
    #[must_use]
    pub fn with_tick_spacing(mut self, spacing: f64) -> Self {
        self.tick_spacing = if spacing.is_finite() {
            spacing.max(0.0)
        } else {
            0.0
        };
        self
    }

    /// Sets the segment stride.
    #[must_use]
    pub fn with_segment_stride(mut self, stride: usize) -> Self {
        self.segment_stride = stride;
        self
    }

    /// Shows or hides segment labels.
    #[must_use]
    pub fn with_segment_labels(mut self, show: bool) -> Self {
        self.show_segment_labels = show;
        self
    }

    /// Sets the number of decimal places in segment labels.
    #[must_use]
    pub fn with_label_precision(mut self, precision: usize) -> Self {
        self.label_precision = precision;
        self
    }

    /// Sets the height of segment ticks.
    #[must_use]
    pub fn with_tick_height(mut self, height: f64) -> Self {
        self.tick_height = height;
        self
    }

    /// Sets the height of minor ticks relative to segment ticks.
    #[must_use]
    pub fn with_minor_height_ratio(mut self, ratio: f64) -> Self {
        self.minor_height_ratio = ratio;
        self
    }

    /// Sets the scale factor of the emphasized tick.
    #[must_use]
    pub fn with_emphasis_scale(mut self, scale: f64) -> Self {
        self.emphasis_scale = scale;
        self
    }

    /// Segment stride with `0` treated as `1`.
    #[must_use]
    pub fn effective_stride(&self) -> usize {
        self.segment_stride.max(1)
    }
}
