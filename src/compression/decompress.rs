use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info, trace, warn};

use super::artifact::Metadata;
use super::compress::{COMPRESSED_SUFFIX, METADATA_PREFIX};
use crate::bitstream::bitreader::BitReader;
use crate::error::{HufError, Result};
use crate::huffman_coding::code_table::{invert, is_empty_code_table};
use crate::tools::options::{CodecOptions, SingleSymbol};

/// Decompress with the default options.
pub fn decompress(bytes: &[u8], metadata: &Metadata) -> Result<String> {
    decompress_with(bytes, metadata, &CodecOptions::default())
}

/// Rebuild the text from packed bytes and their metadata.
///
/// Bits are consumed greedily: they collect into a candidate code until it matches an entry of
/// the table, which emits that symbol and starts a new candidate. Bits left over at the end mean
/// the bytes and metadata do not belong together.
pub fn decompress_with(bytes: &[u8], metadata: &Metadata, opts: &CodecOptions) -> Result<String> {
    let result = decode(bytes, metadata, opts);
    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}

fn decode(bytes: &[u8], metadata: &Metadata, opts: &CodecOptions) -> Result<String> {
    if metadata.padding > 7 {
        return Err(HufError::decoding(format!(
            "padding {} is outside 0-7",
            metadata.padding
        )));
    }
    let br = BitReader::new(bytes, metadata.padding as usize).ok_or_else(|| {
        HufError::decoding(format!(
            "padding {} is longer than the {} bits of data",
            metadata.padding,
            bytes.len() * 8
        ))
    })?;

    if metadata.codes.is_empty() {
        if br.remaining() > 0 {
            return Err(HufError::decoding("data present but the code table is empty"));
        }
        return Ok(String::new());
    }

    let reverse = invert(&metadata.codes, opts.single_symbol)?;

    if is_empty_code_table(&metadata.codes) {
        // Only reachable under SingleSymbol::EmptyCode; the repeat count was never stored.
        debug_assert_eq!(opts.single_symbol, SingleSymbol::EmptyCode);
        if br.remaining() > 0 {
            return Err(HufError::decoding(
                "data present but the only code is empty",
            ));
        }
        warn!("Single-symbol table with an empty code: repeat count is not recoverable.");
        return Ok(String::new());
    }

    let longest = metadata.codes.values().map(String::len).max().unwrap_or(0);
    let mut text = String::with_capacity(br.remaining() / longest.max(1));
    let mut candidate = String::with_capacity(longest);
    for bit in br {
        candidate.push(bit);
        if let Some(&sym) = reverse.get(&candidate) {
            text.push(sym);
            candidate.clear();
        } else if candidate.len() >= longest {
            return Err(HufError::decoding(format!(
                "bits {} match no code after {} symbols",
                candidate,
                text.chars().count()
            )));
        }
    }
    if !candidate.is_empty() {
        return Err(HufError::decoding(format!(
            "{} trailing bits ({}) do not form a complete code",
            candidate.len(),
            candidate
        )));
    }
    trace!("Decoded {} symbols", text.chars().count());
    Ok(text)
}

/// For `dir/name.huf`, returns `dir/metadata_name`.
pub fn metadata_path(huf: &Path) -> Result<PathBuf> {
    let stem = huf
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(COMPRESSED_SUFFIX))
        .filter(|n| !n.is_empty())
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a {} file", huf.display(), COMPRESSED_SUFFIX),
            )
        })?;
    let dir = huf.parent().unwrap_or_else(|| Path::new(""));
    Ok(dir.join(format!("{}{}", METADATA_PREFIX, stem)))
}

/// Read a `.huf` file and its sibling metadata and return the decoded text.
pub fn decompress_file(huf: &Path, opts: &CodecOptions) -> Result<String> {
    let meta_path = metadata_path(huf)?;
    let bytes = fs::read(huf)?;
    let metadata = Metadata::from_json(&fs::read_to_string(&meta_path)?)?;
    let text = decompress_with(&bytes, &metadata, opts)?;
    info!(
        "{}: {} bytes in, {} bytes out",
        huf.display(),
        bytes.len(),
        text.len()
    );
    Ok(text)
}
