// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! switchboard-core: synchronous publish/subscribe registry
//!
//! This crate provides:
//! - A registry mapping event categories to ordered, identity-unique callbacks
//! - Synchronous, in-order emission over a snapshot of the current callbacks
//! - Configurable handling of failing callbacks (fail fast or collect)
//! - Typed browser-style event categories and payloads
//!
//! ```
//! use switchboard_core::{Callback, Registry};
//!
//! let registry = Registry::new();
//! let greet = Callback::new(|name: &String| println!("hello {name}"));
//! registry.register("greet", greet.clone());
//! registry.emit(&"greet", &"world".to_string()).unwrap();
//! registry.unregister(&"greet", &greet);
//! assert!(registry.all_event_types().is_empty());
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod events;

// Re-exports
pub use config::{DeliveryPolicy, RegistryConfig};
pub use dom::{DomRegistry, EventPayload, EventType};
pub use error::{CallbackError, CallbackFailure, ConfigError, EmitError};
pub use events::{Callback, CallbackResult, Registry, WeakRegistry};
