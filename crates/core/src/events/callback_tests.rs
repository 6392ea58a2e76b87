// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn clones_share_identity() {
    let callback = Callback::new(|_: &u32| {});
    let clone = callback.clone();
    assert!(callback.ptr_eq(&clone));
    assert_eq!(callback, clone);
}

#[test]
fn identical_closures_are_distinct() {
    let first = Callback::new(|_: &u32| {});
    let second = Callback::new(|_: &u32| {});
    assert!(!first.ptr_eq(&second));
    assert_ne!(first, second);
}

#[test]
fn call_passes_payload_through() {
    let seen = std::sync::Arc::new(AtomicUsize::new(0));
    let sink = std::sync::Arc::clone(&seen);
    let callback = Callback::new(move |value: &usize| {
        sink.store(*value, Ordering::SeqCst);
    });

    callback.call(&42).unwrap();
    assert_eq!(seen.load(Ordering::SeqCst), 42);
}

#[test]
fn fallible_callback_returns_error() {
    let callback = Callback::fallible(|value: &i32| {
        if *value < 0 {
            return Err("negative".into());
        }
        Ok(())
    });

    assert!(callback.call(&1).is_ok());
    let err = callback.call(&-1).unwrap_err();
    assert_eq!(err.to_string(), "negative");
}

#[test]
fn debug_shows_handle() {
    let callback = Callback::new(|_: &()| {});
    assert!(format!("{callback:?}").starts_with("Callback("));
}
