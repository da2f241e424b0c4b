use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::artifact::{CompressedArtifact, Metadata};
use crate::bitstream::bitpacker::BitPacker;
use crate::error::{HufError, Result};
use crate::huffman_coding::code_table::{derive_codes, validate, CodeTable};
use crate::huffman_coding::huffman::build_tree;
use crate::tools::freq_count::freqs;
use crate::tools::options::CodecOptions;

/// Suffix of the packed byte file written next to the source.
pub const COMPRESSED_SUFFIX: &str = ".huf";
/// Prefix of the JSON metadata file written next to the source.
pub const METADATA_PREFIX: &str = "metadata_";

/// Frequencies, tree and code table for `text`. Fails with `EmptyInput` when there is nothing
/// to build a tree from.
pub fn build_code_table(text: &str, opts: &CodecOptions) -> Result<CodeTable> {
    let freqs = freqs(text);
    let root = build_tree(&freqs).ok_or(HufError::EmptyInput)?;
    let table = derive_codes(&root, opts.single_symbol);
    debug!(
        "{} symbols, {} distinct, longest code {} bits",
        freqs.total(),
        table.len(),
        table.values().map(String::len).max().unwrap_or(0)
    );
    Ok(table)
}

/// Compress `text` with the default options.
pub fn compress(text: &str) -> Result<CompressedArtifact> {
    compress_with(text, &CodecOptions::default())
}

/// Compress `text`. Empty text yields no bytes, an empty table and padding 0.
pub fn compress_with(text: &str, opts: &CodecOptions) -> Result<CompressedArtifact> {
    if text.is_empty() {
        debug!("Empty input, nothing to encode.");
        return Ok(CompressedArtifact::default());
    }
    let table = build_code_table(text, opts)?;
    encode_with_table(text, table, opts)
}

/// Encode `text` with an existing code table. Every symbol of `text` must have a code.
pub fn encode_with_table(
    text: &str,
    table: CodeTable,
    opts: &CodecOptions,
) -> Result<CompressedArtifact> {
    validate(&table, opts.single_symbol).map_err(HufError::InvalidTable)?;

    let mut bp = BitPacker::new(text.len() / 2);
    for sym in text.chars() {
        match table.get(&sym) {
            Some(code) => bp.out_code(code),
            None => return Err(HufError::Encoding { symbol: sym }),
        }
    }
    let padding = bp.flush();
    debug!(
        "Encoded {} code bits into {} bytes, {} bits of padding",
        bp.bit_count(),
        bp.output.len(),
        padding
    );

    Ok(CompressedArtifact {
        bytes: bp.output,
        metadata: Metadata {
            codes: table,
            padding,
        },
    })
}

/// Paths of the packed file and the metadata file for a source file.
/// `dir/name` maps to `dir/name.huf` and `dir/metadata_name`.
pub fn artifact_paths(source: &Path) -> Result<(PathBuf, PathBuf)> {
    let name = source
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} has no usable file name", source.display()),
            )
        })?;
    let dir = source.parent().unwrap_or_else(|| Path::new(""));
    Ok((
        dir.join(format!("{}{}", name, COMPRESSED_SUFFIX)),
        dir.join(format!("{}{}", METADATA_PREFIX, name)),
    ))
}

/// Compress a UTF-8 text file, writing the packed bytes and the metadata next to it.
/// Existing outputs are only replaced when `force` is set. Returns the two paths written.
pub fn compress_file(
    source: &Path,
    opts: &CodecOptions,
    force: bool,
) -> Result<(PathBuf, PathBuf)> {
    let text = fs::read_to_string(source)?;
    let (huf_path, meta_path) = artifact_paths(source)?;

    for path in [&huf_path, &meta_path] {
        if path.exists() {
            if !force {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    format!("{} already exists", path.display()),
                )
                .into());
            }
            warn!("Overwriting {}", path.display());
        }
    }

    let artifact = compress_with(&text, opts)?;
    fs::write(&huf_path, &artifact.bytes)?;
    fs::write(&meta_path, artifact.metadata.to_json()?)?;

    info!(
        "{}: {} bytes in, {} bytes out ({:.3}), {} codes",
        source.display(),
        text.len(),
        artifact.bytes.len(),
        artifact.ratio(text.len()),
        artifact.metadata.codes.len()
    );
    Ok((huf_path, meta_path))
}
