//! `tracing` subscriber setup for the binary. Reports go to stdout, so log
//! output is written to stderr.
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_TARGET: &str = "selector_resolver";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, 2) => Self::Debug,
            (false, _) => Self::Trace,
        }
    }

    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directive used when `RUST_LOG` is not set.
    pub fn directive(self) -> String {
        format!("{LOG_TARGET}={}", self.level())
    }
}

pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));
    let detailed = verbosity >= Verbosity::Debug;

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(detailed)
        .with_file(detailed)
        .with_line_number(detailed)
        .compact();

    match verbosity {
        Verbosity::Quiet => builder.with_writer(std::io::sink).init(),
        Verbosity::Normal => builder.without_time().init(),
        _ => builder.init(),
    }
}
