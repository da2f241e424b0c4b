//! The bitstream module packs code bits into bytes and reads them back.
//!
//! Bits are stored most significant first. The final byte is filled out with zero bits and the
//! number of those padding bits travels in the metadata, so the reader can stop exactly where
//! the codes end.
//!
pub mod bitpacker;
pub mod bitreader;
