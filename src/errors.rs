/*!
 * Error types for the ttmlconv application.
 *
 * The conversion pipeline reports failures through `ConversionError`, defined
 * with the thiserror crate. The binary wraps these in anyhow with file context.
 */

use thiserror::Error;

/// Errors that can occur while converting a cue document
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// The document is missing the structure the converter expects
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The requested output path has an extension no writer handles
    #[error("Unsupported output format: {0}")]
    UnsupportedOutputFormat(String),

    /// A cue time attribute is not a non-negative decimal number
    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// A scaling descriptor dimension is zero, negative or not finite
    #[error("Invalid scaling: {0}")]
    InvalidScaling(String),
}

/// Result alias for the conversion pipeline
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;
