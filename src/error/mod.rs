mod io;
mod parse;
mod precondition;
mod resolution;

pub use io::SymbolSourceError;
pub use parse::ParseError;
pub use precondition::{require_not_blank, PreconditionViolation};
pub use resolution::ResolutionError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Precondition(#[from] PreconditionViolation),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    SymbolSource(#[from] SymbolSourceError),
}

pub type Result<T> = std::result::Result<T, Error>;
