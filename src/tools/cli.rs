use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::{fmt::Display, fmt::Formatter};

use crate::compression::compress::Algorithm;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// -v shows errors only, each further v adds a level up to -vvvvv (trace).
    pub fn from_count(count: u64) -> Self {
        match count {
            0 | 1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

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

/// Which coder(s) to run
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmChoice {
    Huffman,
    ShannonFano,
    Both,
}
impl Display for AlgorithmChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman and Shannon-Fano coding of text, with entropy and compression figures",
    long_about = None)]
pub struct Args {
    /// Text to encode. One line is read from stdin when omitted
    #[clap()]
    text: Option<String>,

    /// Algorithm used to build the code table
    #[clap(short = 'a', long = "algorithm", value_enum, default_value = "huffman")]
    algorithm: AlgorithmChoice,

    /// Print the code and probability of every symbol
    #[clap(short = 't', long = "table")]
    table: bool,

    /// Suppress all log output
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Sets verbosity. -v shows very little, -vvvvv is chatty
    #[clap(short = 'v', parse(from_occurrences))]
    v: u64,
}

/// Defines all user settable options to control program behavior
#[derive(Debug, Clone)]
pub struct CoderOpts {
    /// Coders to run, in order
    pub algorithms: Vec<Algorithm>,
    /// Input text, None to read from stdin
    pub text: Option<String>,
    /// Print the per symbol table
    pub show_table: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl CoderOpts {
    pub fn new() -> Self {
        Self {
            algorithms: vec![Algorithm::Huffman],
            text: None,
            show_table: false,
            verbose: Verbosity::Errors,
        }
    }
}

impl Default for CoderOpts {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Args> for CoderOpts {
    fn from(args: Args) -> Self {
        let mut opts = CoderOpts::new();
        opts.algorithms = match args.algorithm {
            AlgorithmChoice::Huffman => vec![Algorithm::Huffman],
            AlgorithmChoice::ShannonFano => vec![Algorithm::ShannonFano],
            AlgorithmChoice::Both => vec![Algorithm::Huffman, Algorithm::ShannonFano],
        };
        opts.text = args.text;
        opts.show_table = args.table;
        opts.verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::from_count(args.v)
        };
        opts
    }
}

/// Parse the process arguments into CoderOpts.
pub fn coderopts_init() -> CoderOpts {
    CoderOpts::from(Args::parse())
}
