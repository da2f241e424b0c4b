//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::{
    fs,
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use hufcodec::compression::compress::{compress_file, compress_with};
use hufcodec::compression::decompress::{decompress_file, decompress_with};
use hufcodec::error::{HufError, Result};
use hufcodec::tools::cli::{hufopts_init, HufOpts, Mode, Output};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> ExitCode {
    // Log to stderr so decompressed text on stdout stays clean. The level is lowered after the
    // command line is read.
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Could not start the logger.");
    }

    let options = hufopts_init();

    //----- Figure how what we need to do and go do it
    let mut failed = false;
    for name in &options.files {
        let result = match options.op_mode {
            Mode::Zip => zip(name, &options),
            Mode::Unzip => unzip(name, &options),
            Mode::Test => test(name, &options),
        };
        if let Err(e) = result {
            error!("{}: {}", name, e);
            failed = true;
        }
    }

    info!("Done.");
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn zip(name: &str, opts: &HufOpts) -> Result<()> {
    let (huf, meta) = compress_file(Path::new(name), &opts.codec, opts.force_overwrite)?;
    info!("Wrote {} and {}", huf.display(), meta.display());
    Ok(())
}

fn unzip(name: &str, opts: &HufOpts) -> Result<()> {
    let text = decompress_file(Path::new(name), &opts.codec)?;
    match &opts.output {
        Output::Stdout => {
            let mut out = io::stdout().lock();
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
        Output::File(path) => {
            if Path::new(path).exists() && !opts.force_overwrite {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} already exists", path),
                )
                .into());
            }
            fs::write(path, text)?;
            info!("Wrote {}", path);
        }
    }
    Ok(())
}

/// Round trip the file in memory without writing anything.
fn test(name: &str, opts: &HufOpts) -> Result<()> {
    let text = fs::read_to_string(name)?;
    let artifact = compress_with(&text, &opts.codec)?;
    let back = decompress_with(&artifact.bytes, &artifact.metadata, &opts.codec)?;
    if back != text {
        return Err(HufError::Decoding(format!(
            "round trip mismatch: {} chars in, {} chars out",
            text.chars().count(),
            back.chars().count()
        )));
    }
    info!(
        "{}: ok, {} bytes -> {} bytes ({:.3})",
        name,
        text.len(),
        artifact.bytes.len(),
        artifact.ratio(text.len())
    );
    Ok(())
}
