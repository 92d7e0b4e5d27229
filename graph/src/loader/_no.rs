use super::*;

/// A loader loading no resource.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLoader();

impl Loader for NoLoader {
    fn get(&self, iri: &str, _accept: &str) -> Result<(Vec<u8>, String), LoaderError> {
        Err(LoaderError::UnsupportedIri(
            iri.to_string(),
            "NoLoader can not load any IRI".into(),
        ))
    }
}
