use crate::format::{ParseError, SerialiseError};
use crate::loader::LoaderError;
use trove_term::TermError;

/// An error raised by [`Graph`](crate::Graph) operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A required subject, property or value is empty
    /// (or otherwise not acceptable where it was given).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// No format handler is registered for the requested format,
    /// or the handler can not parse (resp. serialise).
    #[error("unsupported format '{0}'")]
    UnsupportedFormat(String),
    /// A format handler failed to parse its input.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A format handler failed to serialise the graph.
    #[error(transparent)]
    Serialise(#[from] SerialiseError),
    /// The data could not be fetched.
    #[error(transparent)]
    Loader(#[from] LoaderError),
    /// An IRI could not be parsed or resolved.
    #[error("invalid IRI '{0}'")]
    InvalidIri(String),
    /// A term could not be built.
    #[error(transparent)]
    Term(#[from] TermError),
}

/// A result whose error is a [`GraphError`].
pub type GraphResult<T> = Result<T, GraphError>;
