/// huffman processor options - verbosity and buffer sizing, plus logger setup
use std::{fmt::Display, fmt::Formatter};

use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::bitstream::bitreader::BUFFER_SIZE;

/// Verbosity of user information
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Settings shared by compress() and decompress().
#[derive(Debug, Clone)]
pub struct HuffOpts {
    /// Verbosity of user information. Only init_logger() reads this; compress() and
    /// decompress() log through whatever logger is installed.
    pub verbose: Verbosity,
    /// Bytes read from the input or written to the output per I/O call
    pub buffer_size: usize,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            verbose: Verbosity::Errors,
            buffer_size: BUFFER_SIZE,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Send log output to the terminal (stderr) at the level chosen in the options. Fails if a
/// logger was already installed.
pub fn init_logger(opts: &HuffOpts) -> Result<(), SetLoggerError> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        opts.verbose.level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}
