//! The fixed identifier sets: component kinds, connection states and the
//! phases of a scripted connection.

crate::tag_enum! {
    /// Simulated interface patch the adapter connects to.
    pub enum ComponentKind {
        CerebralCortex => "Cerebral Cortex",
        Temporal => "Temporal",
        Frontal => "Frontal",
    }
}

crate::tag_enum! {
    /// Whether a simulated connection is active.
    pub enum ConnectionState {
        Enabled => "Enabled",
        NotEnabled => "Not Enabled",
    }
}

crate::tag_enum! {
    /// Position of a connection in its scripted life cycle.
    ///
    /// Phases are recorded for inspection only; nothing gates on them.
    pub enum ConnectionPhase {
        Idle => "Idle",
        Handshake => "Handshake",
        Linking => "Linking",
        Receiving => "Receiving",
        Terminated => "Terminated",
    }
}
