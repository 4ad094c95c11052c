// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dial --heading-base-level=0

//! Understory Dial: a headless dial picker.
//!
//! A dial is a horizontally scrolling ruler of tick marks. The user scrolls it,
//! it snaps to the nearest tick, and the value under the center line becomes
//! the selection. This crate provides the renderer-agnostic core of such a
//! control, meant to be wrapped by a widget in any UI stack.
//!
//! The core concepts are:
//!
//! - [`DialScale`]: a closed range and a step. It owns the tick count and the
//!   mapping between tick indices and values.
//! - [`TickStrip`]: the strip geometry. Half the viewport width is used as
//!   padding on both ends so the first and last tick can reach the center.
//! - [`InitGuard`]: a three-phase guard that keeps selection feedback quiet
//!   while the initial scroll settles.
//! - [`ValueBinding`] and [`SelectionFeedback`]: the seams to the host's value
//!   store and its haptics/audio service.
//! - [`Dial`]: the controller tying these together. It keeps the bound value
//!   and the centered tick in agreement in both directions, and produces
//!   [`Tick`] descriptors for rendering.
//!
//! This crate deliberately does **not** know about widgets, scroll physics, or
//! painting. Host frameworks are responsible for:
//!
//! - Measuring the viewport and calling [`Dial::on_layout`].
//! - Scheduling the returned [`SettleTimer`] and calling [`Dial::on_timer`].
//! - Reporting where scrolling came to rest via [`Dial::on_scroll_settled`]
//!   or [`Dial::on_scroll_end`], depending on the [`SnapStrategy`].
//! - Calling [`Dial::sync`] when the bound value may have changed elsewhere.
//! - Applying each [`ScrollRequest`] and drawing [`Dial::visible_ticks`].
//!
//! ## Minimal example
//!
//! A body-weight picker from 70 to 234 in steps of 0.1:
//!
//! ```rust
//! use core::cell::Cell;
//! use kurbo::Size;
//! use understory_dial::{Dial, DialScale, FnFeedback, GuardPhase};
//!
//! let weight = Cell::new(74.0);
//! let mut clicks = 0;
//! let mut dial = Dial::new(&weight, DialScale::new(70.0, 234.0, 0.1))
//!     .with_feedback(FnFeedback(|_index: usize| clicks += 1));
//! assert_eq!(dial.scale().total_ticks(), 1641);
//!
//! // First layout: center on the bound value and schedule the settle timer.
//! let update = dial.on_layout(Size::new(320.0, 48.0), 0);
//! assert_eq!(update.scroll.map(|r| r.index), Some(40));
//! let timer = update.timer.unwrap();
//!
//! // Host timer fires after `timer.delay` milliseconds.
//! dial.on_timer(timer.token);
//! assert_eq!(dial.phase(), GuardPhase::Initialized);
//!
//! // The user scrolls one segment to the right and the view settles.
//! dial.on_scroll_settled(50);
//! assert!((weight.get() - 75.0_f64).abs() < 1e-9);
//!
//! // Something else writes the value; the dial asks to re-center.
//! weight.set(80.0);
//! let request = dial.sync().unwrap();
//! assert_eq!(request.index, 100);
//! drop(dial);
//! assert_eq!(clicks, 2);
//! ```
//!
//! ## Rendering
//!
//! [`Dial::visible_ticks`] yields one [`Tick`] per tick inside the viewport.
//! Every `segment_stride`-th tick is a segment tick (taller, optionally
//! labeled); the centered tick is emphasized:
//!
//! ```rust
//! use core::cell::Cell;
//! use kurbo::Size;
//! use understory_dial::{Dial, DialScale};
//!
//! let value = Cell::new(10.0);
//! let mut dial = Dial::new(&value, DialScale::new(0.0, 800.0, 0.1));
//! dial.on_layout(Size::new(320.0, 48.0), 0);
//!
//! for tick in dial.visible_ticks() {
//!     let color = tick.color(dial.style());
//!     let height = tick.height(dial.style()) * tick.scale(dial.style());
//!     // Host draws a line at `tick.x` in content space, and `tick.label` if any.
//!     # let _ = (color, height);
//! }
//!
//! let centered = dial.visible_ticks().find(|t| t.is_emphasized()).unwrap();
//! assert_eq!(centered.index, 100);
//! assert_eq!(centered.label.as_deref(), Some("10"));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math in dependencies.
//! - `serde`: derives `Serialize`/`Deserialize` for [`DialStyle`],
//!   [`DialColor`], and [`SnapStrategy`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod dial;
mod error;
mod feedback;
mod guard;
mod scalar;
mod scale;
mod strip;
mod style;
mod ticks;

pub use binding::{FnBinding, ValueBinding};
pub use dial::{Dial, LayoutUpdate, ScrollRequest};
pub use error::DialError;
pub use feedback::{FnFeedback, NoFeedback, SelectionFeedback};
pub use guard::{DEFAULT_SETTLE_DELAY_MS, GuardPhase, InitGuard, SettleTimer, TimerToken};
pub use scalar::Scalar;
pub use scale::DialScale;
pub use strip::TickStrip;
pub use style::{DialColor, DialStyle, SnapStrategy};
pub use ticks::{Tick, TickFlags, TickIter, format_label, is_segment};
