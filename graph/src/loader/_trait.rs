use super::LoaderError;

/// A loader fetches the representation of a resource identified by an IRI.
///
/// This is the only blocking operation a [`Graph`](crate::Graph) performs,
/// in [`Graph::load`](crate::Graph::load).
pub trait Loader {
    /// Get the representation of the resource identified by `iri`, with its content-type.
    ///
    /// `accept` is the value of an HTTP `Accept` header,
    /// which loaders without content negotiation are free to ignore.
    ///
    /// NB: the content-type must not contain any parameter.
    fn get(&self, iri: &str, accept: &str) -> Result<(Vec<u8>, String), LoaderError>;
}

impl<L: Loader + ?Sized> Loader for &L {
    fn get(&self, iri: &str, accept: &str) -> Result<(Vec<u8>, String), LoaderError> {
        (**self).get(iri, accept)
    }
}

impl<L: Loader + ?Sized> Loader for Box<L> {
    fn get(&self, iri: &str, accept: &str) -> Result<(Vec<u8>, String), LoaderError> {
        (**self).get(iri, accept)
    }
}

impl<L: Loader + ?Sized> Loader for std::sync::Arc<L> {
    fn get(&self, iri: &str, accept: &str) -> Result<(Vec<u8>, String), LoaderError> {
        (**self).get(iri, accept)
    }
}

/// Strip the parameters of a content-type (e.g. `; charset=utf-8`) and normalise its case.
pub fn bare_content_type(ctype: &str) -> String {
    ctype
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
