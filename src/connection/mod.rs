//! Scripted connections: the "imperative shell" around the pure lookups.
//!
//! Console output goes through any [`std::io::Write`] and every pause goes
//! through a [`Pacer`], so the same code drives the interactive binary and
//! the tests.
//!
//! # Example
//!
//! ```rust
//! use neural_adapter::config::PacingConfig;
//! use neural_adapter::connection::{Adapter, RecordingPacer};
//! use neural_adapter::core::ComponentKind;
//!
//! let adapter = Adapter::with_pacing(ComponentKind::Frontal, PacingConfig::instant());
//! let mut out = Vec::new();
//! let record = adapter.connect(&mut out, &mut RecordingPacer::new()).unwrap();
//!
//! assert_eq!(record.transfer_rate, 698.336);
//! assert!(String::from_utf8(out).unwrap().contains("Receiving packets from Frontal..."));
//! ```

mod error;
mod pacer;
mod record;
mod target;

pub use error::{ConnectError, ReportError};
pub use pacer::{Pacer, RecordingPacer, ThreadPacer};
pub use record::{render_report, ConnectionRecord};
pub use target::{Adapter, Connector, TargetInterface};

use crate::config::PacingConfig;
use crate::core::ComponentKind;
use std::io::Write;

/// Connect an adapter for each kind in turn.
///
/// Each adapter is built fresh and dropped after its connection; nothing is
/// shared between runs. Stops at the first output failure.
pub fn connect_all<W, P>(
    kinds: &[ComponentKind],
    pacing: PacingConfig,
    out: &mut W,
    pacer: &mut P,
) -> Result<Vec<ConnectionRecord>, ConnectError>
where
    W: Write + ?Sized,
    P: Pacer + ?Sized,
{
    kinds
        .iter()
        .map(|kind| Adapter::with_pacing(*kind, pacing).connect(out, pacer))
        .collect()
}
