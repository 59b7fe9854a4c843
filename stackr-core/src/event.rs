//! Events fed into the state machine
//!
//! Everything that can change UI state arrives here as one tagged variant:
//! mapped key presses, terminal resizes, and the results of dispatched
//! gateway commands. The render loop never mutates state directly.

use crate::model::{ContainerInspection, ContainerSummary, ResourceStats};

/// A key press after terminal-specific mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Up,
    Down,
    PageUp,
    PageDown,
    Enter,
    Back,
    Stop,
    Start,
    Restart,
    Delete,
    Refresh,
    Quit,
}

#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyAction),
    Resize {
        width: u16,
        height: u16,
    },
    /// A list fetch completed; replaces the container set wholesale.
    ContainersLoaded {
        containers: Vec<ContainerSummary>,
    },
    /// A detail fetch completed. Stats are optional: a failed stats call
    /// degrades to `None` rather than surfacing an error.
    DetailLoaded {
        inspection: ContainerInspection,
        stats: Option<ResourceStats>,
    },
    /// A stop/start/restart/remove call returned, success or failure.
    ActionDone,
    /// A list or inspect fetch failed.
    FetchFailed {
        message: String,
    },
}
