//! The two things a compression produces: the packed bytes, and the metadata needed to read them
//! back. Callers persist them side by side; the metadata travels as JSON of the form
//! `{"codes": {"a": "0", ...}, "padding": 4}`.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::huffman_coding::code_table::CodeTable;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub codes: CodeTable,
    /// Zero bits appended to the final byte. Checked against 0-7 when decoding.
    pub padding: u8,
}

impl Metadata {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Output of one encode. Immutable once produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompressedArtifact {
    pub bytes: Vec<u8>,
    pub metadata: Metadata,
}

impl CompressedArtifact {
    /// Number of code bits in `bytes`, i.e. without the padding.
    pub fn bit_len(&self) -> usize {
        (self.bytes.len() * 8).saturating_sub(self.metadata.padding as usize)
    }

    /// Packed size over the UTF-8 size of the original text. 0.0 for empty input.
    pub fn ratio(&self, original_len: usize) -> f64 {
        if original_len == 0 {
            return 0.0;
        }
        self.bytes.len() as f64 / original_len as f64
    }
}
