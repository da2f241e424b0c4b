//! The huffman module builds the prefix code for one input.
//!
//! `huffman` turns a frequency table into a tree by repeatedly merging the two lightest nodes.
//! `code_table` walks that tree into a symbol to code map and checks maps read back from
//! metadata before the decoder trusts them.
//!
//! Building the tree and walking it are inherently sequential and do not benefit from
//! multithreading.
//!
pub mod code_table;
pub mod huffman;
