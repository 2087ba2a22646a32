use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::presence::{
    event::{EventKind, PresenceEvent},
    snapshot::DirectorySnapshot,
};

/// Live directory → devices map, kept up to date from the event stream.
///
/// This is the only writer of the snapshot. It must see each event before the
/// dispatcher does, so that counts read after an appearance include the new
/// device.
#[derive(Debug, Default)]
pub struct DirectoryTracker {
    directories: HashMap<String, HashSet<String>>,
    /// Where each device was last seen.
    devices: HashMap<String, String>,
}

impl DirectoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the directory map.
    ///
    /// Events without a device id can't be attributed and are ignored here;
    /// they are still dispatched.
    pub fn apply(&mut self, event: &PresenceEvent) {
        let Some(device) = event.device_id.as_deref() else {
            return;
        };

        match event.kind {
            EventKind::Appearance | EventKind::Displacement | EventKind::KeepAlive => {
                self.place(device, &event.receiver_directory);
            }
            EventKind::Disappearance => self.remove(device),
        }
    }

    fn place(&mut self, device: &str, directory: &str) {
        if self.devices.get(device).map(String::as_str) == Some(directory) {
            return;
        }

        self.remove(device);
        self.directories
            .entry(directory.to_string())
            .or_default()
            .insert(device.to_string());
        self.devices.insert(device.to_string(), directory.to_string());
        trace!(device, directory, "device placed");
    }

    fn remove(&mut self, device: &str) {
        let Some(previous) = self.devices.remove(device) else {
            return;
        };

        if let Some(set) = self.directories.get_mut(&previous) {
            set.remove(device);
            if set.is_empty() {
                self.directories.remove(&previous);
            }
        }
    }

    /// Directory a device was last seen in.
    pub fn directory_of(&self, device: &str) -> Option<&str> {
        self.devices.get(device).map(String::as_str)
    }

    /// Number of devices currently tracked anywhere.
    pub fn device_total(&self) -> usize {
        self.devices.len()
    }

    pub fn directories(&self) -> &HashMap<String, HashSet<String>> {
        &self.directories
    }
}

impl DirectorySnapshot for DirectoryTracker {
    fn device_count(&self, directory: &str) -> usize {
        self.directories.device_count(directory)
    }
}
