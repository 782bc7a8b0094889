//! Connection error types.

use std::io;
use thiserror::Error;

/// Errors that can occur while running a scripted connection
#[derive(Debug, Error)]
pub enum ConnectError {
    /// Writing a status line to the console failed
    #[error("Failed to write connection status: {0}")]
    Output(#[from] io::Error),
}

/// Errors that can occur while rendering a connection report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Records could not be serialized to JSON
    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
