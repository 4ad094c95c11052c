// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dial controller: keeps a bound value, the centered tick, and the
//! scroll view in agreement.

use kurbo::Size;

use crate::{
    DialScale, DialStyle, GuardPhase, InitGuard, NoFeedback, SelectionFeedback, SettleTimer,
    SnapStrategy, TickIter, TickStrip, TimerToken, ValueBinding,
};

/// Instruction for the host scroll view to center a tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollRequest {
    /// Tick to center.
    pub index: usize,
    /// Scroll offset that centers it.
    pub offset: f64,
    /// Whether the host should animate the move.
    pub animated: bool,
}

/// Result of a layout pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutUpdate {
    /// Padding to place before the first and after the last tick.
    pub padding: f64,
    /// Total content width including padding.
    pub content_width: f64,
    /// Initial positioning, issued once on the first measurement.
    pub scroll: Option<ScrollRequest>,
    /// Settle timer to schedule, issued once on the first measurement.
    pub timer: Option<SettleTimer>,
}

/// A horizontally scrolling dial picker bound to a host-owned value.
///
/// The dial owns the derived state of the control: the centered tick
/// ("scroll position"), the measured viewport, and the initialization guard.
/// The host feeds it layout measurements, scroll events, and timer callbacks,
/// and applies the [`ScrollRequest`]s it returns.
///
/// Value and scroll position are kept in sync in both directions:
/// - an external write to the binding is picked up by [`Dial::sync`] and
///   re-centers the strip;
/// - a user scroll settling on a tick ([`Dial::on_scroll_settled`] or
///   [`Dial::on_scroll_end`]) writes that tick's value back to the binding.
///
/// The dial remembers the last value it observed or wrote, so its own write
/// never comes back through [`Dial::sync`] as an external change.
#[derive(Debug)]
pub struct Dial<B: ValueBinding, F = NoFeedback> {
    binding: B,
    feedback: F,
    scale: DialScale<B::Value>,
    style: DialStyle,
    snap: SnapStrategy,
    strip: TickStrip,
    guard: InitGuard,
    scroll_position: Option<usize>,
    observed: Option<B::Value>,
}

impl<B: ValueBinding> Dial<B> {
    /// Creates a dial over `scale` bound to `binding`, with default style,
    /// view-aligned snapping, and no feedback.
    #[must_use]
    pub fn new(binding: B, scale: DialScale<B::Value>) -> Self {
        let style = DialStyle::default();
        Self {
            binding,
            feedback: NoFeedback,
            strip: TickStrip::new(scale.total_ticks(), style.tick_spacing),
            scale,
            style,
            snap: SnapStrategy::default(),
            guard: InitGuard::default(),
            scroll_position: None,
            observed: None,
        }
    }
}

impl<B: ValueBinding, F: SelectionFeedback> Dial<B, F> {
    /// Replaces the style.
    #[must_use]
    pub fn with_style(mut self, style: DialStyle) -> Self {
        self.strip.set_spacing(style.tick_spacing);
        self.style = style;
        self
    }

    /// Sets the snapping strategy.
    #[must_use]
    pub fn with_snap(mut self, snap: SnapStrategy) -> Self {
        self.snap = snap;
        self
    }

    /// Sets the settling delay of the initialization guard.
    #[must_use]
    pub fn with_settle_delay(mut self, delay_ms: u64) -> Self {
        self.guard = InitGuard::new(delay_ms);
        self
    }

    /// Sets the overscan used by [`Dial::visible_ticks`].
    #[must_use]
    pub fn with_overscan(mut self, overscan: f64) -> Self {
        self.strip.set_overscan(overscan);
        self
    }

    /// Installs a selection feedback sink.
    #[must_use]
    pub fn with_feedback<G: SelectionFeedback>(self, feedback: G) -> Dial<B, G> {
        Dial {
            binding: self.binding,
            feedback,
            scale: self.scale,
            style: self.style,
            snap: self.snap,
            strip: self.strip,
            guard: self.guard,
            scroll_position: self.scroll_position,
            observed: self.observed,
        }
    }

    /// The bound value.
    #[must_use]
    pub fn binding(&self) -> &B {
        &self.binding
    }

    /// The feedback sink.
    #[must_use]
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Range and step.
    #[must_use]
    pub fn scale(&self) -> &DialScale<B::Value> {
        &self.scale
    }

    /// Rendering options.
    #[must_use]
    pub fn style(&self) -> &DialStyle {
        &self.style
    }

    /// Snapping strategy.
    #[must_use]
    pub fn snap(&self) -> SnapStrategy {
        self.snap
    }

    /// Strip geometry.
    #[must_use]
    pub fn strip(&self) -> &TickStrip {
        &self.strip
    }

    /// Initialization guard phase.
    #[must_use]
    pub fn phase(&self) -> GuardPhase {
        self.guard.phase()
    }

    /// Index of the centered tick, `None` before the first layout.
    #[must_use]
    pub fn scroll_position(&self) -> Option<usize> {
        self.scroll_position
    }

    /// Value of the centered tick.
    #[must_use]
    pub fn selected_value(&self) -> Option<B::Value> {
        self.scroll_position
            .map(|index| self.scale.value_from_index(index))
    }

    /// Padding before the first and after the last tick.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.strip.padding()
    }

    /// Total content width including padding.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.strip.content_width()
    }

    /// Handles a viewport measurement from the host's layout pass.
    ///
    /// The first non-empty measurement positions the strip on the bound value
    /// and starts the settle timer. Later measurements only update padding.
    pub fn on_layout(&mut self, size: Size, now: u64) -> LayoutUpdate {
        if self.strip.set_viewport(size) {
            tracing::trace!(width = size.width, "dial viewport measured");
        }
        let mut update = LayoutUpdate {
            padding: self.strip.padding(),
            content_width: self.strip.content_width(),
            scroll: None,
            timer: None,
        };
        let measured = self.strip.viewport().is_some_and(|s| s.width > 0.0);
        if !measured {
            return update;
        }
        if let Some(timer) = self.guard.on_viewport_measured(now) {
            update.timer = Some(timer);
            update.scroll = self.recenter(false);
        }
        update
    }

    /// Reflects an external write to the binding.
    ///
    /// Call whenever the host's value may have changed. Returns a request to
    /// re-center when the value maps to a different tick. Out-of-range values
    /// are left untouched in the binding; only the scroll target is clamped.
    pub fn sync(&mut self) -> Option<ScrollRequest> {
        if self.guard.phase() == GuardPhase::Uninitialized {
            return None;
        }
        let value = self.binding.get();
        if self.observed == Some(value) {
            return None;
        }
        self.observed = Some(value);
        let index = self.scale.clamped_index_from_value(value)?;
        if self.scroll_position == Some(index) {
            return None;
        }
        tracing::trace!(?value, index, "dial value changed externally");
        self.move_to(index);
        Some(self.request(index, self.guard.feedback_enabled()))
    }

    /// Tracks the live scroll offset while the user drags.
    ///
    /// Only affects [`Dial::visible_ticks`]; the selection changes when the
    /// scroll settles.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.strip.set_scroll_offset(offset);
    }

    /// Handles the scroll view settling on tick `index`.
    ///
    /// Writes the tick's value to the binding if the centered tick changed.
    /// Returns a corrective request if `index` was past the last tick.
    pub fn on_scroll_settled(&mut self, index: usize) -> Option<ScrollRequest> {
        if self.guard.phase() == GuardPhase::Uninitialized {
            return None;
        }
        let last = self.scale.last_index()?;
        let clamped = index.min(last);
        self.commit(clamped);
        (clamped != index).then(|| self.request(clamped, true))
    }

    /// Handles the scroll view coming to rest at `offset`.
    ///
    /// Selects the nearest tick. With [`SnapStrategy::Manual`], also returns a
    /// request to snap onto it when the resting offset is off-center; with
    /// [`SnapStrategy::ViewAligned`] the scroll view snaps by itself.
    pub fn on_scroll_end(&mut self, offset: f64) -> Option<ScrollRequest> {
        if self.guard.phase() == GuardPhase::Uninitialized {
            return None;
        }
        let index = self.strip.nearest_index(offset)?;
        self.commit(index);
        let target = self.strip.offset_for_index(index);
        let off_center = (offset - target).abs() > f64::EPSILON;
        (self.snap == SnapStrategy::Manual && off_center).then(|| self.request(index, true))
    }

    /// Delivers the settle timer handed out by [`Dial::on_layout`].
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        self.guard.on_timer(token)
    }

    /// Polling alternative to [`Dial::on_timer`].
    pub fn poll(&mut self, now: u64) -> bool {
        self.guard.poll(now)
    }

    /// Replaces range and step, re-centering on the bound value.
    pub fn set_scale(&mut self, scale: DialScale<B::Value>) -> Option<ScrollRequest> {
        if scale == self.scale {
            return None;
        }
        tracing::debug!(
            lower = ?scale.lower(),
            upper = ?scale.upper(),
            step = ?scale.step(),
            ticks = scale.total_ticks(),
            "dial scale changed"
        );
        self.scale = scale;
        self.strip.set_len(scale.total_ticks());
        if self.guard.phase() == GuardPhase::Uninitialized {
            return None;
        }
        let value = self.binding.get();
        self.observed = Some(value);
        let Some(index) = self.scale.clamped_index_from_value(value) else {
            self.scroll_position = None;
            return None;
        };
        self.move_to(index)
            .then(|| self.request(index, self.guard.feedback_enabled()))
    }

    /// Drops derived state and invalidates the pending settle timer.
    ///
    /// Call when the control leaves the view hierarchy. A later layout starts
    /// initialization over.
    pub fn teardown(&mut self) {
        tracing::debug!("dial torn down");
        self.guard.reset();
        let overscan = self.strip.overscan();
        self.strip = TickStrip::new(self.scale.total_ticks(), self.style.tick_spacing);
        self.strip.set_overscan(overscan);
        self.scroll_position = None;
        self.observed = None;
    }

    /// All ticks of the dial.
    pub fn ticks(&self) -> TickIter<'_, B::Value> {
        TickIter::new(
            &self.scale,
            &self.style,
            &self.strip,
            self.scroll_position,
            0..self.scale.total_ticks(),
        )
    }

    /// Ticks inside the viewport (plus overscan) at the current scroll offset.
    pub fn visible_ticks(&self) -> TickIter<'_, B::Value> {
        TickIter::new(
            &self.scale,
            &self.style,
            &self.strip,
            self.scroll_position,
            self.strip.visible_range(),
        )
    }

    /// Positions the strip on the bound value.
    fn recenter(&mut self, animated: bool) -> Option<ScrollRequest> {
        let value = self.binding.get();
        self.observed = Some(value);
        let index = self.scale.clamped_index_from_value(value)?;
        self.move_to(index);
        Some(self.request(index, animated))
    }

    /// Selects tick `index` as the user's choice and writes its value back.
    fn commit(&mut self, index: usize) {
        if !self.move_to(index) {
            return;
        }
        let value = self.scale.value_from_index(index);
        if self.binding.get() != value {
            self.binding.set(value);
        }
        // Whatever the binding holds now is ours, even if it normalized the write.
        self.observed = Some(self.binding.get());
        tracing::trace!(index, ?value, "dial settled");
    }

    /// Centers tick `index`. Returns `true` if the centered tick changed.
    fn move_to(&mut self, index: usize) -> bool {
        self.strip
            .set_scroll_offset(self.strip.offset_for_index(index));
        if self.scroll_position == Some(index) {
            return false;
        }
        self.scroll_position = Some(index);
        if self.guard.feedback_enabled() {
            self.feedback.selection_changed(index);
        }
        true
    }

    fn request(&self, index: usize, animated: bool) -> ScrollRequest {
        ScrollRequest {
            index,
            offset: self.strip.offset_for_index(index),
            animated,
        }
    }
}
