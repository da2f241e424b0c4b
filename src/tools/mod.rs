//! The tools module provides helpers around the codec.
//!
//! The tools are:
//! - cli: Command line interface for the hufcodec binary.
//! - freq_count: Frequency count of the symbols of an input.
//! - options: Codec options shared by the library and the command line.
//!
pub mod cli;
pub mod freq_count;
pub mod options;
