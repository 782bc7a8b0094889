//! Outcome of one adapted connection.

use crate::connection::error::ReportError;
use crate::core::{ComponentKind, PhaseHistory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Values gathered during a single [`Adapter::connect`](super::Adapter::connect).
///
/// Built fresh per call and never shared between connections.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConnectionRecord {
    /// Unique connection identifier
    pub id: Uuid,

    /// Component the adapter was built for
    pub kind: ComponentKind,

    /// Transfer rate in Mb/s
    pub transfer_rate: f64,

    /// Average packets per second
    pub average_packets: f64,

    /// Channel description from the legacy header table
    pub message_header: String,

    /// When connect was entered
    pub started_at: DateTime<Utc>,

    /// When the duration was measured
    pub finished_at: DateTime<Utc>,

    /// Wall-clock time from `started_at` to `finished_at`
    pub duration: Duration,

    /// Phases the connection moved through
    pub phases: PhaseHistory,
}

impl ConnectionRecord {
    /// Whether two records carry the same looked-up values.
    ///
    /// Identifiers, timestamps and durations are ignored since they differ
    /// on every run.
    pub fn same_readings(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.transfer_rate == other.transfer_rate
            && self.average_packets == other.average_packets
            && self.message_header == other.message_header
    }
}

/// Render records as a pretty-printed JSON array.
pub fn render_report(records: &[ConnectionRecord]) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(records)?)
}
