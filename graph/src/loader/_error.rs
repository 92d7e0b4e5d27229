use std::io;

/// An error raised by a [`Loader`](crate::Loader).
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The requested IRI is not supported by this loader
    #[error("unsupported IRI <{0}>: {1}")]
    UnsupportedIri(String, String),
    /// The requested IRI could not be found (e.g. 404)
    #[error("IRI could not be found <{0}>")]
    NotFound(String),
    /// An IO error was encountered while loading the content
    #[error("IO error when reading <{0}>: {1}")]
    IoError(String, io::Error),
    /// The server answered with a non-success status
    #[error("HTTP request for <{0}> failed with status {1}")]
    HttpStatus(String, u16),
    /// The HTTP request could not be performed
    #[error("HTTP request for <{0}> failed: {1}")]
    Http(String, String),
    /// Can not guess the syntax of the resource
    /// (some loaders, such as [`LocalLoader`](crate::LocalLoader),
    /// do not always have access to content-type metadata)
    #[error("can not guess syntax of <{0}>")]
    CantGuessSyntax(String),
}

impl LoaderError {
    /// Return the IRI that caused this error
    pub fn iri(&self) -> &str {
        match self {
            LoaderError::UnsupportedIri(iri, _)
            | LoaderError::NotFound(iri)
            | LoaderError::IoError(iri, _)
            | LoaderError::HttpStatus(iri, _)
            | LoaderError::Http(iri, _)
            | LoaderError::CantGuessSyntax(iri) => iri,
        }
    }
}
