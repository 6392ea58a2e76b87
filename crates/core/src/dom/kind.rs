// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The known event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    MouseClick,
    KeyPress,
    PageScroll,
    WindowResize,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::MouseClick,
        EventType::KeyPress,
        EventType::PageScroll,
        EventType::WindowResize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::MouseClick => "mouseClick",
            EventType::KeyPress => "keyPress",
            EventType::PageScroll => "pageScroll",
            EventType::WindowResize => "windowResize",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event type: {0}")]
pub struct ParseEventTypeError(pub String);

impl FromStr for EventType {
    type Err = ParseEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseEventTypeError(s.to_string()))
    }
}
