use clap::{CommandFactory, ErrorKind, Parser};
use log::{info, LevelFilter};
use std::{fmt::Display, fmt::Formatter};

use super::options::{CodecOptions, SingleSymbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Zip, Unzip, Test
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where decoded text goes
pub enum Output {
    Stdout,
    File(String),
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Stdout => write!(f, "stdout"),
            Output::File(name) => write!(f, "{}", name),
        }
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman text compressor",
    long_about = "
    Compresses UTF-8 text files with a per-file Huffman code. FILE is stored as
    FILE.huf beside a JSON metadata file, metadata_FILE, holding the code table
    and the number of padding bits. Both files are needed to decompress."
)]
pub struct Args {
    /// Files to process
    #[clap(required = true)]
    files: Vec<String>,

    /// Compress the input files (default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Decompress the input .huf files
    #[clap(short = 'd', long = "decompress", conflicts_with = "compress")]
    decompress: bool,

    /// Compress and decompress in memory and check the result
    #[clap(short = 't', long = "test", conflicts_with_all = &["compress", "decompress"])]
    test: bool,

    /// Overwrite existing output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Send decompressed text to the terminal (default when decompressing)
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Write decompressed text to this file instead of stdout
    #[clap(short = 'o', long = "output", conflicts_with = "stdout")]
    output: Option<String>,

    /// Be verbose (repeat for more)
    #[clap(short = 'v', parse(from_occurrences))]
    verbose: u8,

    /// Suppress all messages
    #[clap(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,

    /// Give single-symbol inputs an empty code, as older tools did
    #[clap(long = "legacy-empty-code")]
    legacy_empty_code: bool,
}

/// Runtime options for the binary
#[derive(Debug)]
pub struct HufOpts {
    /// Vec of names of files to read for input
    pub files: Vec<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Location where decompressed text is sent
    pub output: Output,
    /// Log level
    pub log_level: LevelFilter,
    /// Codec settings passed to the library
    pub codec: CodecOptions,
}

impl HufOpts {
    pub fn new() -> Self {
        Self {
            files: vec![],
            force_overwrite: false,
            op_mode: Mode::Zip,
            output: Output::Stdout,
            log_level: LevelFilter::Error,
            codec: CodecOptions::default(),
        }
    }
}

impl HufOpts {
    /// Combinations clap cannot express: one output file cannot hold several inputs.
    pub fn check(&self) -> Result<(), String> {
        if let Output::File(name) = &self.output {
            if self.files.len() > 1 {
                return Err(format!(
                    "--output {} given with {} input files; use one input per output file",
                    name,
                    self.files.len()
                ));
            }
        }
        Ok(())
    }
}

impl Default for HufOpts {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Args> for HufOpts {
    fn from(args: Args) -> Self {
        let mut opts = HufOpts::new();
        opts.files = args.files;
        opts.force_overwrite = args.force;

        if args.decompress {
            opts.op_mode = Mode::Unzip
        } else if args.test {
            opts.op_mode = Mode::Test
        };

        if args.stdout {
            opts.output = Output::Stdout
        } else if let Some(name) = args.output {
            opts.output = Output::File(name)
        };

        opts.log_level = match (args.quiet, args.verbose) {
            (true, _) => LevelFilter::Off,
            (_, 0) => LevelFilter::Error,
            (_, 1) => LevelFilter::Warn,
            (_, 2) => LevelFilter::Info,
            (_, 3) => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        if args.legacy_empty_code {
            opts.codec.single_symbol = SingleSymbol::EmptyCode
        };
        opts
    }
}

/// Parse the command line into HufOpts and apply the log level.
pub fn hufopts_init() -> HufOpts {
    let opts = HufOpts::from(Args::parse());
    if let Err(msg) = opts.check() {
        Args::command().error(ErrorKind::ArgumentConflict, msg).exit();
    }
    log::set_max_level(opts.log_level);

    info!("---- Initialization ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    if opts.op_mode == Mode::Unzip {
        info!("Sending output to {}", opts.output);
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if opts.codec.single_symbol == SingleSymbol::EmptyCode {
        info!("Using empty codes for single-symbol input")
    };
    opts
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(argv: &[&str]) -> HufOpts {
        HufOpts::from(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn defaults_test() {
        let opts = parse(&["hufcodec", "notes.txt"]);
        assert_eq!(opts.op_mode, Mode::Zip);
        assert_eq!(opts.files, vec!["notes.txt".to_string()]);
        assert_eq!(opts.output, Output::Stdout);
        assert_eq!(opts.log_level, LevelFilter::Error);
        assert_eq!(opts.codec, CodecOptions::default());
        assert!(!opts.force_overwrite);
    }

    #[test]
    fn decompress_to_file_test() {
        let opts = parse(&["hufcodec", "-d", "-o", "out.txt", "-vv", "notes.txt.huf"]);
        assert_eq!(opts.op_mode, Mode::Unzip);
        assert_eq!(opts.output, Output::File("out.txt".to_string()));
        assert_eq!(opts.log_level, LevelFilter::Warn);
        assert!(opts.check().is_ok());
    }

    #[test]
    fn verbosity_levels_test() {
        let levels = [
            ("notes.txt", LevelFilter::Error),
            ("-v", LevelFilter::Warn),
            ("-vv", LevelFilter::Info),
            ("-vvv", LevelFilter::Debug),
            ("-vvvv", LevelFilter::Trace),
            ("-vvvvvv", LevelFilter::Trace),
        ];
        for (flag, level) in levels {
            let opts = parse(&["hufcodec", flag, "notes.txt"]);
            assert_eq!(opts.log_level, level, "{}", flag);
        }
    }

    #[test]
    fn stdout_flag_test() {
        let opts = parse(&["hufcodec", "-d", "-c", "notes.txt.huf"]);
        assert_eq!(opts.output, Output::Stdout);
    }

    #[test]
    fn one_output_many_inputs_test() {
        let opts = parse(&["hufcodec", "-d", "-o", "out.txt", "a.huf", "b.huf"]);
        assert!(opts.check().is_err());
        let opts = parse(&["hufcodec", "-d", "a.huf", "b.huf"]);
        assert!(opts.check().is_ok());
    }

    #[test]
    fn flags_test() {
        let opts = parse(&["hufcodec", "-tf", "--legacy-empty-code", "-q", "a", "b"]);
        assert_eq!(opts.op_mode, Mode::Test);
        assert!(opts.force_overwrite);
        assert_eq!(opts.codec.single_symbol, SingleSymbol::EmptyCode);
        assert_eq!(opts.log_level, LevelFilter::Off);
        assert_eq!(opts.files.len(), 2);
    }

    #[test]
    fn conflicts_test() {
        assert!(Args::try_parse_from(["hufcodec", "-z", "-d", "a"]).is_err());
        assert!(Args::try_parse_from(["hufcodec", "-c", "-o", "x", "a"]).is_err());
        assert!(Args::try_parse_from(["hufcodec"]).is_err());
    }
}
