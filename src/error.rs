//! Error types for JIG protocol operations.

use thiserror::Error;

/// Result type alias for JIG protocol operations.
pub type Result<T> = std::result::Result<T, JigError>;

/// Error types for JIG fixture communication.
#[derive(Error, Debug)]
pub enum JigError {
    /// Serial port communication error
    #[error("Serial port error: {0}")]
    SerialPort(#[from] serialport::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame had the wrong length or a missing start/end sentinel
    #[error("Malformed frame: {0}")]
    MalformedFrame(String),

    /// A fixed-width numeric field contained non-decimal characters
    #[error("Invalid {field} field: {value:?}")]
    InvalidField {
        /// Name of the offending field
        field: &'static str,
        /// The raw field contents as received
        value: String,
    },

    /// Command byte outside the vocabulary this client understands
    #[error("Unrecognized command byte: {0:#04x}")]
    UnrecognizedCommand(u8),

    /// UI item layout file could not be parsed
    #[error("Layout parse error: {0}")]
    Layout(#[from] serde_json::Error),
}
