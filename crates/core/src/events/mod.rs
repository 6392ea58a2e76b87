// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Callback registration and synchronous emission
//!
//! This module provides:
//! - `Registry` - Map categories to ordered callbacks and deliver payloads
//! - `Callback` - Identity-compared handle used to register and unregister
//! - `WeakRegistry` - Non-owning handle for callbacks that call back into their registry

mod callback;
mod registry;

pub use callback::{Callback, CallbackResult};
pub use registry::{Registry, WeakRegistry};
