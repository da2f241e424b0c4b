//! Huffman compression for text.
//!
//! Version 0.1.0
//!
//! Builds an optimal prefix code from the character frequencies of one input, packs the coded
//! text into bytes and hands back the code table and padding count needed to reverse it.
//! Symbols are Unicode scalar values, not bytes.
//!
//! Each call builds its own tree and table; there is no shared state, so independent calls may
//! run on different threads.
//!
//! ```
//! let artifact = hufcodec::compress("aaab")?;
//! assert_eq!(artifact.bytes, [0b1110_0000]);
//! assert_eq!(artifact.metadata.padding, 4);
//! let json = artifact.metadata.to_json()?;
//! let metadata = hufcodec::Metadata::from_json(&json)?;
//! assert_eq!(hufcodec::decompress(&artifact.bytes, &metadata)?, "aaab");
//! # Ok::<(), hufcodec::HufError>(())
//! ```
//!
//! From the command line, `$> hufcodec -z notes.txt` writes `notes.txt.huf` and
//! `metadata_notes.txt`; `$> hufcodec -d notes.txt.huf` prints the text again.
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::artifact::{CompressedArtifact, Metadata};
pub use compression::compress::{compress, compress_with, encode_with_table};
pub use compression::decompress::{decompress, decompress_with};
pub use error::{HufError, Result};
pub use huffman_coding::code_table::CodeTable;
pub use tools::options::{CodecOptions, SingleSymbol};
