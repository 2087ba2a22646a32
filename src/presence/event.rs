use serde::{Deserialize, Serialize};

use crate::presence::location::{classify, Location};

/// What the tracking service observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// A device was seen for the first time.
    Appearance,
    /// A known device is now strongest at a different receiver.
    Displacement,
    /// A device has not been seen for long enough to be considered gone.
    Disappearance,
    /// Periodic "still here" for a device that hasn't moved.
    KeepAlive,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Appearance,
        EventKind::Displacement,
        EventKind::Disappearance,
        EventKind::KeepAlive,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            EventKind::Appearance => "appearance",
            EventKind::Displacement => "displacement",
            EventKind::Disappearance => "disappearance",
            EventKind::KeepAlive => "keep-alive",
        }
    }

    /// Keep-alives carry no occupancy change.
    pub const fn changes_occupancy(self) -> bool {
        !matches!(self, EventKind::KeepAlive)
    }
}

/// A presence event as delivered by the tracking service.
///
/// ```json
/// { "event": "appearance", "deviceId": "001bc50940810000", "receiverDirectory": "notman:first:west" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceEvent {
    #[serde(rename = "event")]
    pub kind: EventKind,
    #[serde(rename = "receiverDirectory", default)]
    pub receiver_directory: String,
    #[serde(rename = "deviceId", default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

impl PresenceEvent {
    pub fn new(kind: EventKind, receiver_directory: impl Into<String>) -> Self {
        Self {
            kind,
            receiver_directory: receiver_directory.into(),
            device_id: None,
        }
    }

    pub fn with_device(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    pub fn appearance(receiver_directory: impl Into<String>) -> Self {
        Self::new(EventKind::Appearance, receiver_directory)
    }

    pub fn displacement(receiver_directory: impl Into<String>) -> Self {
        Self::new(EventKind::Displacement, receiver_directory)
    }

    pub fn disappearance(receiver_directory: impl Into<String>) -> Self {
        Self::new(EventKind::Disappearance, receiver_directory)
    }

    pub fn keep_alive(receiver_directory: impl Into<String>) -> Self {
        Self::new(EventKind::KeepAlive, receiver_directory)
    }

    pub fn location(&self) -> Location {
        classify(&self.receiver_directory)
    }
}
