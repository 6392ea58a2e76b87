// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Callback handles and their identity

use crate::error::CallbackError;
use std::fmt;
use std::sync::Arc;

/// Outcome of a single callback invocation
pub type CallbackResult = Result<(), CallbackError>;

type CallbackFn<P> = dyn Fn(&P) -> CallbackResult + Send + Sync;

/// A registered unit of behavior, compared by identity
///
/// Cloning a handle yields the same callback: clones are interchangeable for
/// `register`/`unregister`. Two handles built from separate `new` calls are
/// always distinct, even when they wrap identical closures.
pub struct Callback<P> {
    inner: Arc<CallbackFn<P>>,
}

impl<P: 'static> Callback<P> {
    /// Wrap a closure that cannot fail
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&P) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(move |payload: &P| {
                f(payload);
                Ok(())
            }),
        }
    }

    /// Wrap a closure whose error is reported back to the emitter
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&P) -> CallbackResult + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }
}

impl<P> Callback<P> {
    /// Invoke the callback with a borrowed payload
    pub fn call(&self, payload: &P) -> CallbackResult {
        (self.inner)(payload)
    }

    /// True when both handles refer to the same callback
    pub fn ptr_eq(&self, other: &Self) -> bool {
        // Compare data pointers only; vtable addresses are not stable across codegen units.
        std::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
    }
}

impl<P> Clone for Callback<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> PartialEq for Callback<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<P> Eq for Callback<P> {}

impl<P> fmt::Debug for Callback<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callback")
            .field(&Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}

#[cfg(test)]
#[path = "callback_tests.rs"]
mod tests;
