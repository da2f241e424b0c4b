//! The compression module manages both directions of the codec.
//!
//! Compression happens in the following steps:
//! - Frequency count: count each character of the input.
//! - Tree build: merge the two lightest nodes until one root remains.
//! - Code table: walk the tree, '0' for left and '1' for right.
//! - Packing: write every character's code in order, then pad the last byte with zeros.
//!
//! Decompression follows the inverse: unpack the bits, drop the padding, and match bits against
//! the inverted code table until every bit is consumed.
//!
//! The file helpers store `name.huf` beside `metadata_name`. Both are needed to decompress.
//!

pub mod artifact;
pub mod compress;
pub mod decompress;
