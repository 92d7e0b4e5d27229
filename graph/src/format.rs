//! I define the plugin traits for concrete RDF syntaxes,
//! and [`FormatRegistry`], which resolves a format from its name, MIME type or file extension.
//!
//! Concrete handlers live in other crates;
//! this crate only sees them through [`GraphParser`] and [`GraphSerialiser`].
use crate::{Graph, GraphError};
use std::fmt;
use std::sync::Arc;

/// An error raised by a [`GraphParser`].
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The data is not valid in the parsed syntax.
    #[error("syntax error: {0}")]
    Syntax(String),
    /// The data uses a feature this parser does not support.
    #[error("unsupported construct: {0}")]
    Unsupported(String),
    /// The parsed data could not be added to the graph.
    #[error("could not build graph: {0}")]
    Graph(Box<GraphError>),
}

impl From<GraphError> for ParseError {
    fn from(other: GraphError) -> Self {
        ParseError::Graph(Box::new(other))
    }
}

/// An error raised by a [`GraphSerialiser`].
#[derive(Debug, thiserror::Error)]
pub enum SerialiseError {
    /// The underlying writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The graph contains something this syntax can not express.
    #[error("can not serialise: {0}")]
    Unsupported(String),
}

/// Parses RDF data into a [`Graph`].
pub trait GraphParser: Send + Sync {
    /// Add the triples described by `data` to `graph`,
    /// resolving relative IRIs against `base`.
    ///
    /// Return the number of triples read.
    /// Blank node labels of `data` must be mapped to fresh identifiers of `graph`.
    ///
    /// NB: on error, `graph` may be left partially populated;
    /// [`Graph::parse`] takes care of discarding it.
    fn parse(&self, graph: &mut Graph, data: &[u8], base: Option<&str>) -> Result<usize, ParseError>;
}

/// Serialises a [`Graph`] into RDF data.
pub trait GraphSerialiser: Send + Sync {
    /// Serialise the whole of `graph`.
    fn serialise(&self, graph: &Graph) -> Result<Vec<u8>, SerialiseError>;
}

/// Describes an RDF syntax and the handlers able to read and write it.
#[derive(Clone)]
pub struct Format {
    name: Box<str>,
    label: Box<str>,
    mime_types: Vec<(Box<str>, f32)>,
    extensions: Vec<Box<str>>,
    parser: Option<Arc<dyn GraphParser>>,
    serialiser: Option<Arc<dyn GraphSerialiser>>,
}

impl Format {
    /// A format with no MIME type, extension nor handler.
    pub fn new(name: &str, label: &str) -> Self {
        Format {
            name: name.into(),
            label: label.into(),
            mime_types: vec![],
            extensions: vec![],
            parser: None,
            serialiser: None,
        }
    }

    /// Add a MIME type, with its quality value for the HTTP `Accept` header.
    #[must_use]
    pub fn with_mime_type(mut self, mime: &str, q: f32) -> Self {
        self.mime_types.push((mime.into(), q));
        self
    }

    /// Add a file extension (without the leading dot).
    #[must_use]
    pub fn with_extension(mut self, ext: &str) -> Self {
        self.extensions.push(ext.into());
        self
    }

    /// Set the parser of this format.
    #[must_use]
    pub fn with_parser<P: GraphParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Some(Arc::new(parser));
        self
    }

    /// Set the serialiser of this format.
    #[must_use]
    pub fn with_serialiser<S: GraphSerialiser + 'static>(mut self, serialiser: S) -> Self {
        self.serialiser = Some(Arc::new(serialiser));
        self
    }

    /// The short name of this format (e.g. `turtle`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The human-readable name of this format.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The MIME types of this format, preferred first.
    pub fn mime_types(&self) -> impl Iterator<Item = &str> {
        self.mime_types.iter().map(|(m, _)| &m[..])
    }

    /// The preferred MIME type of this format.
    pub fn default_mime_type(&self) -> Option<&str> {
        self.mime_types().next()
    }

    /// The file extensions of this format.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(|e| &e[..])
    }

    /// The parser of this format, if any.
    pub fn parser(&self) -> Option<&dyn GraphParser> {
        self.parser.as_deref()
    }

    /// The serialiser of this format, if any.
    pub fn serialiser(&self) -> Option<&dyn GraphSerialiser> {
        self.serialiser.as_deref()
    }
}

impl fmt::Debug for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Format")
            .field("name", &self.name)
            .field("mime_types", &self.mime_types)
            .field("extensions", &self.extensions)
            .field("parser", &self.parser.is_some())
            .field("serialiser", &self.serialiser.is_some())
            .finish()
    }
}

/// A set of [`Format`]s, looked up by name, MIME type or extension.
#[derive(Clone, Debug, Default)]
pub struct FormatRegistry {
    formats: Vec<Format>,
}

impl FormatRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `format`, replacing any format with the same name.
    pub fn register(&mut self, format: Format) {
        match self.formats.iter_mut().find(|f| f.name == format.name) {
            Some(slot) => *slot = format,
            None => self.formats.push(format),
        }
    }

    /// Builder-style version of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, format: Format) -> Self {
        self.register(format);
        self
    }

    /// Iterate over the registered formats, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Format> {
        self.formats.iter()
    }

    /// The format whose name is `name`.
    pub fn by_name(&self, name: &str) -> Option<&Format> {
        self.formats.iter().find(|f| &f.name[..] == name)
    }

    /// The format having `mime` as a MIME type.
    ///
    /// Parameters (anything after a `;`) and case are ignored.
    pub fn by_mime_type(&self, mime: &str) -> Option<&Format> {
        let mime = mime.split(';').next().unwrap_or_default().trim();
        self.formats
            .iter()
            .find(|f| f.mime_types().any(|m| m.eq_ignore_ascii_case(mime)))
    }

    /// The format having `ext` as a file extension (with or without leading dot).
    pub fn by_extension(&self, ext: &str) -> Option<&Format> {
        let ext = ext.trim_start_matches('.');
        self.formats
            .iter()
            .find(|f| f.extensions().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Resolve `key` as a format name, then as a MIME type, then as a file extension.
    pub fn get(&self, key: &str) -> Option<&Format> {
        self.by_name(key)
            .or_else(|| self.by_mime_type(key))
            .or_else(|| self.by_extension(key))
    }

    /// Resolve `key` like [`get`](Self::get), failing with [`GraphError::UnsupportedFormat`].
    pub fn require(&self, key: &str) -> Result<&Format, GraphError> {
        self.get(key)
            .ok_or_else(|| GraphError::UnsupportedFormat(key.to_string()))
    }

    /// Guess the format of `data` by looking at its first characters,
    /// among the registered formats.
    pub fn guess(&self, data: &[u8]) -> Option<&Format> {
        let name = sniff(data)?;
        log::debug!("data looks like {name}");
        self.by_name(name)
    }

    /// An HTTP `Accept` header listing the MIME types of all formats having a parser,
    /// with their quality values.
    pub fn accept_header(&self) -> String {
        let mut parts: Vec<String> = vec![];
        for format in self.formats.iter().filter(|f| f.parser.is_some()) {
            for (mime, q) in &format.mime_types {
                if parts.iter().any(|p| p.split(';').next() == Some(&mime[..])) {
                    continue;
                }
                if *q >= 1.0 {
                    parts.push(mime.to_string());
                } else {
                    parts.push(format!("{mime};q={q:.1}"));
                }
            }
        }
        parts.join(",")
    }
}

/// Name of the format `data` looks like: `rdfxml`, `json`, `turtle` or `ntriples`.
fn sniff(data: &[u8]) -> Option<&'static str> {
    let head = &data[..data.len().min(1024)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    if text.is_empty() {
        None
    } else if text.starts_with("<?xml") || text.starts_with("<rdf:RDF") {
        Some("rdfxml")
    } else if text.starts_with('{') || text.starts_with('[') {
        Some("json")
    } else if text.lines().any(|l| {
        let l = l.trim_start();
        l.starts_with("@prefix")
            || l.starts_with("@base")
            || l.to_ascii_uppercase().starts_with("PREFIX ")
            || l.to_ascii_uppercase().starts_with("BASE ")
    }) {
        Some("turtle")
    } else if text.starts_with('<') || text.starts_with("_:") || text.starts_with('#') {
        Some("ntriples")
    } else {
        Some("turtle")
    }
}
