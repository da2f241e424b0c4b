//! Error type shared by every stage of the Huffman text codec.
//!
//! All failures are local and recoverable. Nothing in the library panics on bad input;
//! the caller decides how to present the error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HufError {
    /// Zero-symbol input where a caller asked for a tree. The codec itself never returns this
    /// from `compress`: empty text produces the empty artifact instead.
    #[error("input contains no symbols")]
    EmptyInput,

    /// A symbol in the text has no entry in the code table used to encode it.
    #[error("symbol {symbol:?} has no code in the table")]
    Encoding { symbol: char },

    /// A caller-supplied table handed to the encoder is not a usable prefix code.
    #[error("invalid code table: {0}")]
    InvalidTable(String),

    /// Malformed metadata or a bitstream that does not resolve into whole codes.
    #[error("decoding failed: {0}")]
    Decoding(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata could not be read from or written to JSON.
    #[error("metadata JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HufError {
    pub(crate) fn decoding(msg: impl Into<String>) -> Self {
        HufError::Decoding(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, HufError>;
