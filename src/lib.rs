//! Neural Adapter: the Adapter pattern as a scripted console connection
//!
//! A target interface knows how to perform a handshake but has no data of its
//! own. A set of legacy lookup tables holds rates and headers per component,
//! behind an API the target knows nothing about. The [`Adapter`] bridges the
//! two: it runs the target's handshake, fills a [`ConnectionRecord`] from the
//! legacy tables and reports it.
//!
//! # Modules
//!
//! - [`core`]: closed identifier enums and phase history (pure)
//! - [`legacy`]: the lookup tables being adapted (pure)
//! - [`connection`]: target interface, adapter and pacing (console I/O)
//! - [`config`]: pause timings
//!
//! # Example
//!
//! ```rust
//! use neural_adapter::config::PacingConfig;
//! use neural_adapter::connection::{connect_all, RecordingPacer};
//! use neural_adapter::core::ComponentKind;
//!
//! let mut out = Vec::new();
//! let mut pacer = RecordingPacer::new();
//! let records = connect_all(
//!     ComponentKind::ALL,
//!     PacingConfig::instant(),
//!     &mut out,
//!     &mut pacer,
//! )
//! .unwrap();
//!
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[0].average_packets, 512.88);
//! ```

pub mod config;
pub mod connection;
pub mod core;
pub mod legacy;

// Re-export commonly used types
pub use self::config::PacingConfig;
pub use self::connection::{Adapter, ConnectionRecord, Connector, TargetInterface};
pub use self::core::{ComponentKind, ConnectionState, Tag};
