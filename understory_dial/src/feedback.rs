// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection feedback hook (haptics, audio clicks).

use core::fmt;

/// Platform feedback service notified when the centered tick changes.
///
/// The dial only calls this after its [initialization guard](crate::InitGuard)
/// has settled, once per change of the centered tick.
pub trait SelectionFeedback {
    /// The centered tick changed to `index`.
    fn selection_changed(&mut self, index: usize);
}

impl<T: SelectionFeedback + ?Sized> SelectionFeedback for &mut T {
    fn selection_changed(&mut self, index: usize) {
        (**self).selection_changed(index);
    }
}

/// Feedback sink that does nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoFeedback;

impl SelectionFeedback for NoFeedback {
    fn selection_changed(&mut self, _index: usize) {}
}

/// Adapts a closure into a [`SelectionFeedback`].
pub struct FnFeedback<F>(pub F);

impl<F> fmt::Debug for FnFeedback<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FnFeedback").finish_non_exhaustive()
    }
}

impl<F: FnMut(usize)> SelectionFeedback for FnFeedback<F> {
    fn selection_changed(&mut self, index: usize) {
        (self.0)(index);
    }
}
