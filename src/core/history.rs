//! Phase history of a single connection.
//!
//! Immutable, timestamped tracking of the phases a connection passes
//! through. Recording returns a new history and leaves the old one intact.

use super::kinds::ConnectionPhase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single phase change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// The phase being left
    pub from: ConnectionPhase,
    /// The phase being entered
    pub to: ConnectionPhase,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of phase changes.
///
/// # Example
///
/// ```rust
/// use neural_adapter::core::{ConnectionPhase, PhaseHistory, PhaseTransition};
/// use chrono::Utc;
///
/// let history = PhaseHistory::new();
/// let history = history.record(PhaseTransition {
///     from: ConnectionPhase::Idle,
///     to: ConnectionPhase::Handshake,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(
///     history.path(),
///     vec![&ConnectionPhase::Idle, &ConnectionPhase::Handshake]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseHistory {
    transitions: Vec<PhaseTransition>,
}

impl PhaseHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This does not mutate the existing history.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Record a move from the current phase to `to`, stamped now.
    ///
    /// The source phase is the `to` of the last transition, or
    /// [`ConnectionPhase::Idle`] for an empty history.
    pub fn advance(&self, to: ConnectionPhase) -> Self {
        self.record(PhaseTransition {
            from: self.current(),
            to,
            timestamp: Utc::now(),
        })
    }

    /// The phase the connection is currently in.
    pub fn current(&self) -> ConnectionPhase {
        self.transitions
            .last()
            .map(|t| t.to)
            .unwrap_or(ConnectionPhase::Idle)
    }

    /// Phases traversed: the first `from`, then every `to` in order.
    pub fn path(&self) -> Vec<&ConnectionPhase> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }
}
