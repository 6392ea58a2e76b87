// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for integration tests

use std::sync::{Arc, Mutex};
use switchboard_core::Callback;

/// Mock callback recording the address of each payload it receives
pub struct MockFn<P> {
    pub callback: Callback<P>,
    calls: Arc<Mutex<Vec<usize>>>,
}

impl<P: 'static> MockFn<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// True when the `n`th call received exactly this payload
    pub fn called_with(&self, n: usize, payload: &P) -> bool {
        self.calls.lock().unwrap().get(n).copied() == Some(payload as *const P as usize)
    }
}

impl<P: 'static> Default for MockFn<P> {
    fn default() -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let callback = Callback::new(move |payload: &P| {
            sink.lock().unwrap().push(payload as *const P as usize);
        });
        Self { callback, calls }
    }
}

pub fn mocks<P: 'static>(n: usize) -> Vec<MockFn<P>> {
    (0..n).map(|_| MockFn::new()).collect()
}
