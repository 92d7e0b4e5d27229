//! This crate is part of [Trove],
//! an in-memory [RDF] graph toolkit in Rust.
//!
//! It provides [`SparqlResult`], a model of the results of `ASK` and `SELECT` queries
//! parsed from their [JSON] or [XML] serialisations,
//! and [`SparqlClient`], a client of the [SPARQL1.1 protocol]
//! sending its requests through a [`Loader`].
//!
//! Example:
//! ```
//! use trove_sparql_client::SparqlResult;
//!
//! let data = br#"{
//!     "head": {"vars": ["s"]},
//!     "results": {"bindings": [{"s": {"type": "uri", "value": "http://example.org/a"}}]}
//! }"#;
//! let res = SparqlResult::parse(data, "application/sparql-results+json")?;
//! assert_eq!(res.fields(), ["s"]);
//! for row in &res {
//!     assert_eq!(row["s"].value(), "http://example.org/a");
//! }
//! # Ok::<(), trove_sparql_client::Error>(())
//! ```
//!
//! [Trove]: https://docs.rs/trove/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [JSON]: https://www.w3.org/TR/sparql11-results-json/
//! [XML]: https://www.w3.org/TR/rdf-sparql-XMLres/
//! [SPARQL1.1 protocol]: https://www.w3.org/TR/sparql11-protocol/
#![deny(missing_docs)]

use trove_graph::loader::bare_content_type;
use trove_graph::{FormatRegistry, Graph, GraphError, Loader, LoaderError};
use trove_term::TermError;
use url::Url;

pub mod results;
pub use results::{Row, SparqlResult};

/// A [SPARQL 1.1] client, querying an endpoint with `GET` requests.
///
/// [SPARQL 1.1]: https://www.w3.org/TR/sparql11-protocol/
pub struct SparqlClient {
    endpoint: Url,
    accept: Option<String>,
    loader: Box<dyn Loader>,
    formats: FormatRegistry,
}

impl SparqlClient {
    /// The default [Accept HTTP header](https://tools.ietf.org/html/rfc7231.html#section-5.3.2) used by clients.
    pub const DEFAULT_ACCEPT: &'static str = "application/sparql-results+json,application/sparql-results+xml;q=0.8,text/turtle,application/n-triples;q=0.9,application/rdf+xml;q=0.8";

    /// Create a [`SparqlClient`] on the given SPARQL-endpoint URL.
    ///
    /// Requests go through an [`HttpLoader`](trove_graph::HttpLoader)
    /// (or nowhere, without the `http_client` feature),
    /// and graphs are parsed with the formats of [`trove_rio`].
    pub fn new(endpoint: &str) -> Result<Self, Error> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            accept: None,
            loader: default_loader(),
            formats: trove_rio::formats::all(),
        })
    }

    /// Replace the [Accept HTTP header](https://tools.ietf.org/html/rfc7231.html#section-5.3.2) used by this client.
    ///
    /// This might be useful if the endpoint implements content-negotiation incorrectly.
    ///
    /// See also [`DEFAULT_ACCEPT`](Self::DEFAULT_ACCEPT)
    #[must_use]
    pub fn with_accept<T: Into<String>>(mut self, accept: T) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Replace the [`Loader`] sending the requests of this client.
    #[must_use]
    pub fn with_loader<L: Loader + 'static>(mut self, loader: L) -> Self {
        self.loader = Box::new(loader);
        self
    }

    /// Replace the formats used to parse the graphs returned by `CONSTRUCT` and `DESCRIBE` queries.
    #[must_use]
    pub fn with_formats(mut self, formats: FormatRegistry) -> Self {
        self.formats = formats;
        self
    }

    /// The URL of the endpoint.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// The [Accept HTTP header](https://tools.ietf.org/html/rfc7231.html#section-5.3.2) used by this client.
    #[must_use]
    pub fn accept(&self) -> &str {
        self.accept.as_deref().unwrap_or(Self::DEFAULT_ACCEPT)
    }

    /// Send `query` to the endpoint, and parse the response according to its content-type.
    pub fn query(&self, query: &str) -> Result<QueryResponse, Error> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("query", query);
        log::debug!("sending query to <{}>", self.endpoint);
        let (data, ctype) = self.loader.get(url.as_str(), self.accept())?;
        let ctype = bare_content_type(&ctype);
        match ctype.as_str() {
            results::JSON_MIME | results::XML_MIME => {
                Ok(QueryResponse::Result(SparqlResult::parse(&data, &ctype)?))
            }
            _ => {
                let Some(format) = self.formats.by_mime_type(&ctype) else {
                    return Err(Error::UnsupportedFormat(ctype));
                };
                log::debug!("endpoint returned a graph, parsed as {}", format.name());
                let mut graph = Graph::new();
                graph.parse(&data, Some(format.name()), Some(self.endpoint.as_str()), &self.formats)?;
                Ok(QueryResponse::Graph(graph))
            }
        }
    }
}

#[cfg(feature = "http_client")]
fn default_loader() -> Box<dyn Loader> {
    Box::new(trove_graph::HttpLoader::new())
}

#[cfg(not(feature = "http_client"))]
fn default_loader() -> Box<dyn Loader> {
    Box::new(trove_graph::NoLoader())
}

/// What a SPARQL endpoint returns.
#[derive(Debug)]
pub enum QueryResponse {
    /// The result of an `ASK` or `SELECT` query
    Result(SparqlResult),
    /// The result of a `CONSTRUCT` or `DESCRIBE` query
    Graph(Graph),
}

impl QueryResponse {
    /// The [`SparqlResult`] of this response, if any.
    pub fn into_result(self) -> Option<SparqlResult> {
        match self {
            QueryResponse::Result(res) => Some(res),
            QueryResponse::Graph(_) => None,
        }
    }

    /// The [`Graph`] of this response, if any.
    pub fn into_graph(self) -> Option<Graph> {
        match self {
            QueryResponse::Result(_) => None,
            QueryResponse::Graph(graph) => Some(graph),
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Error type produced by [`SparqlResult`] and [`SparqlClient`].
pub enum Error {
    #[error("unsupported content-type: {0}")]
    /// A result document has a MIME type that is neither a SPARQL results format nor a known RDF format.
    UnsupportedFormat(String),

    #[error("unsupported term type '{0}'")]
    /// A term of a result document is neither a `uri`, a `bnode`, a `literal` nor a `typed-literal`.
    UnsupportedTermType(String),

    #[error("unparsable SPARQL result: {0}")]
    /// A well-formed document is not a SPARQL result.
    UnparsableResult(String),

    #[error("JSON results parsing error: {0}")]
    /// Invalid JSON was found in a result document.
    Json(
        #[source]
        #[from]
        serde_json::Error,
    ),

    #[error("XML results parsing error: {0}")]
    /// Ill-formed XML was found in a result document.
    Xml(
        #[source]
        #[from]
        quick_xml::Error,
    ),

    #[error("loader error: {0}")]
    /// The endpoint could not be reached.
    Loader(
        #[source]
        #[from]
        LoaderError,
    ),

    #[error("graph error: {0}")]
    /// The graph returned by the endpoint could not be parsed.
    Graph(
        #[source]
        #[from]
        GraphError,
    ),

    #[error("invalid endpoint URL: {0}")]
    /// The endpoint is not a valid URL.
    Url(
        #[source]
        #[from]
        url::ParseError,
    ),
}

impl From<TermError> for Error {
    fn from(other: TermError) -> Error {
        match other {
            TermError::UnsupportedTermType(kind) => Error::UnsupportedTermType(kind),
            TermError::InvalidDescriptor(msg) => Error::UnparsableResult(msg),
        }
    }
}
