// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Conventional payload shapes, one per [`EventType`]

use super::kind::EventType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouseClickPayload {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPressPayload {
    pub key_code: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageScrollPayload {
    pub origin: f64,
    pub delta: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowResizePayload {
    pub width: f64,
    pub height: f64,
}

/// Any of the known payloads, tagged with its event type on the wire
///
/// ```json
/// {"type": "mouseClick", "x": 10.0, "y": 20.0}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventPayload {
    MouseClick(MouseClickPayload),
    KeyPress(KeyPressPayload),
    PageScroll(PageScrollPayload),
    WindowResize(WindowResizePayload),
}

impl EventPayload {
    /// The category this payload is emitted on
    pub fn event_type(&self) -> EventType {
        match self {
            EventPayload::MouseClick(_) => EventType::MouseClick,
            EventPayload::KeyPress(_) => EventType::KeyPress,
            EventPayload::PageScroll(_) => EventType::PageScroll,
            EventPayload::WindowResize(_) => EventType::WindowResize,
        }
    }
}

impl From<MouseClickPayload> for EventPayload {
    fn from(payload: MouseClickPayload) -> Self {
        EventPayload::MouseClick(payload)
    }
}

impl From<KeyPressPayload> for EventPayload {
    fn from(payload: KeyPressPayload) -> Self {
        EventPayload::KeyPress(payload)
    }
}

impl From<PageScrollPayload> for EventPayload {
    fn from(payload: PageScrollPayload) -> Self {
        EventPayload::PageScroll(payload)
    }
}

impl From<WindowResizePayload> for EventPayload {
    fn from(payload: WindowResizePayload) -> Self {
        EventPayload::WindowResize(payload)
    }
}
