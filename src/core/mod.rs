//! Core identifier types and phase tracking.
//!
//! Everything in this module is pure: closed tag enums, the `Tag` trait they
//! share, and the immutable phase history of a connection.

mod history;
mod kinds;
mod macros;
mod tag;

pub use history::{PhaseHistory, PhaseTransition};
pub use kinds::{ComponentKind, ConnectionPhase, ConnectionState};
pub use tag::Tag;
