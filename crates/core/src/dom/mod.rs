// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed browser-style events
//!
//! A closed set of event categories, each paired by convention with one
//! payload shape. The registry itself stays payload-agnostic; these types
//! only give callers exhaustive matching over the known shapes.

mod kind;
mod payload;

pub use kind::{EventType, ParseEventTypeError};
pub use payload::{
    EventPayload, KeyPressPayload, MouseClickPayload, PageScrollPayload, WindowResizePayload,
};

use crate::error::EmitError;
use crate::events::Registry;

/// Registry keyed by [`EventType`] carrying [`EventPayload`]s
pub type DomRegistry = Registry<EventType, EventPayload>;

impl Registry<EventType, EventPayload> {
    /// Emit a payload on the category its variant belongs to
    pub fn dispatch(&self, payload: &EventPayload) -> Result<(), EmitError> {
        self.emit(&payload.event_type(), payload)
    }
}
