//! Codec options. These are the only knobs the library itself exposes; the command line
//! options in `cli` wrap them.

use serde::{Deserialize, Serialize};

/// How to code an input made of a single distinct symbol, where the merge step never runs and
/// the tree is a lone leaf.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SingleSymbol {
    /// The symbol gets the one-bit code "0", so the repeat count survives the round trip.
    #[default]
    OneBit,
    /// The symbol gets the empty code. Output is zero bytes with padding 0, which matches
    /// artifacts written by older tools but cannot be decoded back to more than "".
    EmptyCode,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecOptions {
    #[serde(default)]
    pub single_symbol: SingleSymbol,
}

impl CodecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that reproduce the empty-code behaviour for single-symbol inputs.
    pub fn legacy() -> Self {
        Self {
            single_symbol: SingleSymbol::EmptyCode,
        }
    }
}
