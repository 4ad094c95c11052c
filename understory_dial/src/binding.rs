// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-way binding to a host-owned value.

use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use crate::Scalar;

/// A host-owned value the dial reads and writes.
///
/// Both methods take `&self`: like a reactive store, the binding is shared
/// between the host and the dial and mutates through interior mutability.
/// Implementations should make [`ValueBinding::get`] cheap; the dial calls it on
/// every [`Dial::sync`](crate::Dial::sync).
pub trait ValueBinding {
    /// Numeric type of the bound value.
    type Value: Scalar;

    /// Reads the current value.
    fn get(&self) -> Self::Value;

    /// Writes a new value.
    fn set(&self, value: Self::Value);
}

impl<S: Scalar> ValueBinding for Cell<S> {
    type Value = S;

    fn get(&self) -> S {
        Self::get(self)
    }

    fn set(&self, value: S) {
        Self::set(self, value);
    }
}

impl<B: ValueBinding + ?Sized> ValueBinding for &B {
    type Value = B::Value;

    fn get(&self) -> Self::Value {
        (**self).get()
    }

    fn set(&self, value: Self::Value) {
        (**self).set(value);
    }
}

impl<B: ValueBinding + ?Sized> ValueBinding for Rc<B> {
    type Value = B::Value;

    fn get(&self) -> Self::Value {
        (**self).get()
    }

    fn set(&self, value: Self::Value) {
        (**self).set(value);
    }
}

/// A binding built from a getter/setter closure pair.
///
/// ```
/// use std::cell::RefCell;
/// use understory_dial::{FnBinding, ValueBinding};
///
/// let store = RefCell::new(vec![1.0_f64]);
/// let binding = FnBinding::new(
///     || store.borrow()[0],
///     |v: f64| store.borrow_mut()[0] = v,
/// );
/// binding.set(2.5);
/// assert_eq!(binding.get(), 2.5);
/// ```
pub struct FnBinding<G, W> {
    getter: G,
    setter: W,
}

impl<G, W> FnBinding<G, W> {
    /// Wraps a getter and a setter.
    pub const fn new(getter: G, setter: W) -> Self {
        Self { getter, setter }
    }
}

impl<G, W> fmt::Debug for FnBinding<G, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnBinding").finish_non_exhaustive()
    }
}

impl<S, G, W> ValueBinding for FnBinding<G, W>
where
    S: Scalar,
    G: Fn() -> S,
    W: Fn(S),
{
    type Value = S;

    fn get(&self) -> S {
        (self.getter)()
    }

    fn set(&self, value: S) {
        (self.setter)(value);
    }
}
