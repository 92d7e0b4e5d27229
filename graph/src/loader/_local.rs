use super::{Loader, LoaderError};
use std::fs::read;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

/// Content-types guessed from file extensions, tried in this order for extension-less IRIs.
const EXTENSIONS: &[(&str, &str)] = &[
    ("ttl", "text/turtle"),
    ("nt", "application/n-triples"),
    ("rdf", "application/rdf+xml"),
    ("rj", "application/rdf+json"),
    ("srj", "application/sparql-results+json"),
    ("srx", "application/sparql-results+xml"),
];

/// A loader using local versions of the resources.
///
/// It guesses content-type from the file extensions,
/// and emulates content-negotiation :
/// if a resource is not found, it will try adding a few well-known extensions to it.
#[derive(Clone, Debug, Default)]
pub struct LocalLoader {
    caches: Vec<(String, PathBuf)>,
}

impl LocalLoader {
    /// Constructor
    pub fn new(caches: Vec<(String, PathBuf)>) -> Result<Self, LocalLoaderError> {
        let checked_caches = caches
            .into_iter()
            .map(|(iri, path)| Self::check(iri, path))
            .collect::<Result<Vec<(String, PathBuf)>, LocalLoaderError>>()?;
        Ok(Self {
            caches: checked_caches,
        })
    }

    /// Add a local cache to this loader.
    ///
    /// # Pre-conditions
    ///
    /// * the IRI must end with a slash (`/`)
    /// * the path must identify an existing directory
    pub fn add(&mut self, iri: &str, path: PathBuf) -> Result<(), LocalLoaderError> {
        self.caches.push(Self::check(iri.to_string(), path)?);
        Ok(())
    }

    fn check(iri: String, path: PathBuf) -> Result<(String, PathBuf), LocalLoaderError> {
        if !iri.ends_with('/') {
            Err(LocalLoaderError::IriMustEndWithSlash(iri))
        } else if !path.is_absolute() {
            Err(LocalLoaderError::PathMustBeAbsolute(path))
        } else if !path.is_dir() {
            Err(LocalLoaderError::PathMustBeDirectory(path))
        } else {
            Ok((iri, path))
        }
    }

    fn ctype(iri: &str) -> String {
        EXTENSIONS
            .iter()
            .find(|(ext, _)| {
                iri.rsplit_once('.')
                    .is_some_and(|(_, found)| found.eq_ignore_ascii_case(ext))
            })
            .map(|(_, ctype)| *ctype)
            .unwrap_or("application/octet-stream")
            .to_string()
    }
}

impl Loader for LocalLoader {
    fn get(&self, iri: &str, accept: &str) -> Result<(Vec<u8>, String), LoaderError> {
        let iri = iri.split('#').next().unwrap_or_default();
        for (ns, path) in &self.caches {
            if let Some(suffix) = iri.strip_prefix(&ns[..]) {
                let resource_path: PathBuf = path.join(Path::new(suffix));
                log::debug!("<{iri}> read from {}", resource_path.display());
                return match read(resource_path) {
                    Ok(data) => Ok((data, Self::ctype(iri))),
                    Err(e) if e.kind() == IoErrorKind::NotFound => {
                        // emulate conneg if there is no extension
                        let no_ext = iri.rfind(['.', '/']).map(|i| &iri[i..i + 1]) != Some(".");
                        if no_ext {
                            for (ext, _) in EXTENSIONS {
                                if let Ok(res) = self.get(&format!("{iri}.{ext}"), accept) {
                                    return Ok(res);
                                }
                            }
                        }
                        Err(LoaderError::NotFound(iri.to_string()))
                    }
                    Err(e) => Err(LoaderError::IoError(iri.to_string(), e)),
                };
            }
        }
        Err(LoaderError::UnsupportedIri(
            iri.to_string(),
            "no matching local path".into(),
        ))
    }
}

//

/// An error raised while constructing a [`LocalLoader`]
#[derive(Debug, thiserror::Error)]
pub enum LocalLoaderError {
    /// The IRIs mapped by [`LocalLoader`] must always end with a slash (`/`)
    #[error("IRI must end with a slash: <{0}>")]
    IriMustEndWithSlash(String),
    /// The local paths mapped by [`LocalLoader`] must always be absolute
    #[error("path must be absolute: {0}")]
    PathMustBeAbsolute(PathBuf),
    /// The local paths mapped by [`LocalLoader`] must always identify an existing directory
    #[error("path must be a directory: {0}")]
    PathMustBeDirectory(PathBuf),
}
