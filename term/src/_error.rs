/// An error raised when building a [`Term`](crate::Term) from external data.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    /// The `type` of a term descriptor is none of `uri`, `bnode`, `literal` or `typed-literal`.
    #[error("unsupported term type '{0}'")]
    UnsupportedTermType(String),
    /// The term descriptor is structurally invalid (e.g. an empty IRI).
    #[error("invalid term descriptor: {0}")]
    InvalidDescriptor(String),
}

/// An error raised by [`NamespaceRegistry::register`](crate::NamespaceRegistry::register).
#[derive(Debug, thiserror::Error)]
pub enum NamespaceError {
    /// The prefix is not a valid prefix name.
    #[error("invalid namespace prefix '{0}'")]
    InvalidPrefix(String),
    /// The namespace is not a well-formed IRI.
    #[error("invalid namespace IRI '{0}'")]
    InvalidNamespace(String),
}
