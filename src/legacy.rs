//! Legacy interface lookup tables.
//!
//! The "incompatible" side of the adapter: a handful of pure functions that
//! map a component kind (and sometimes a connection state) to a fixed rate
//! or label. The adapter is the only caller in the crate.
//!
//! The enums are closed, so every match is exhaustive and there is no
//! fallback value for an unknown kind or state.

use crate::core::{ComponentKind, ConnectionState};

/// Message header reported for any kind while the connection is not enabled.
pub const NO_ACTIVE_CONNECTION: &str = "No active connection";

/// Data transfer rate for a component, in Mb/s.
pub fn transfer_rate(kind: ComponentKind) -> f64 {
    match kind {
        ComponentKind::CerebralCortex => 2458.33,
        ComponentKind::Temporal => 999.878,
        ComponentKind::Frontal => 698.336,
    }
}

/// Average packets per second for a component in the given state.
///
/// A connection that is not enabled receives nothing.
pub fn average_packets(kind: ComponentKind, state: ConnectionState) -> f64 {
    match (state, kind) {
        (ConnectionState::NotEnabled, _) => 0.0,
        (ConnectionState::Enabled, ComponentKind::CerebralCortex) => 512.88,
        (ConnectionState::Enabled, ComponentKind::Temporal) => 726.91,
        (ConnectionState::Enabled, ComponentKind::Frontal) => 100.3,
    }
}

/// Header text describing the channel a component opens.
pub fn message_header(kind: ComponentKind, state: ConnectionState) -> &'static str {
    match (state, kind) {
        (ConnectionState::NotEnabled, _) => NO_ACTIVE_CONNECTION,
        (ConnectionState::Enabled, ComponentKind::CerebralCortex) => {
            "Cerebral cortex link established: higher cognition channel open"
        }
        (ConnectionState::Enabled, ComponentKind::Temporal) => {
            "Temporal link established: auditory memory channel open"
        }
        (ConnectionState::Enabled, ComponentKind::Frontal) => {
            "Frontal link established: executive function channel open"
        }
    }
}

/// Name of the physical patch used for a component.
pub fn patch_label(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::CerebralCortex => "Cortical mesh patch",
        ComponentKind::Temporal => "Temporal lobe patch",
        ComponentKind::Frontal => "Prefrontal patch",
    }
}
