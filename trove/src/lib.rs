//! Trove is an in-memory [RDF] graph toolkit in Rust.
//!
//! RDF describes resources with statements (*triples*)
//! made of a subject, a property and a value.
//! A [`Graph`](graph::Graph) stores triples,
//! indexed both from their subjects and from their resource values,
//! and hands out [`Resource`](graph::Resource) handles
//! whose class is chosen from their `rdf:type`.
//!
//! This crate gathers the crates of the toolkit:
//! * [`term`]: terms, literals and namespaces;
//! * [`graph`]: the graph store, the format and transport plugin points;
//! * [`rio`]: the concrete syntaxes (N-Triples, Turtle, RDF/XML, RDF/JSON);
//! * [`sparql`]: SPARQL query results and a SPARQL protocol client.
//!
//! # Getting Started
//!
//! ```
//! use trove::prelude::*;
//!
//! let ttl = br#"
//!     @prefix foaf: <http://xmlns.com/foaf/0.1/> .
//!     <http://example.org/alice> a foaf:Person ; foaf:name "Alice" .
//! "#;
//! let mut graph = trove::parse(ttl, Some("turtle"), None)?;
//! let alice = graph.resource("http://example.org/alice", &[])?;
//! graph.add(&alice, "foaf:knows", Term::iri("http://example.org/bob"))?;
//! assert_eq!(graph.join(&alice, "foaf:name", "", None)?, "Alice");
//! assert_eq!(graph.all_of_type("foaf:Person")?, vec![alice]);
//!
//! let nt = graph.serialise("ntriples", &trove::default_formats())?;
//! println!("{}", String::from_utf8_lossy(&nt));
//! # Ok::<(), GraphError>(())
//! ```
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
#![deny(missing_docs)]

pub use trove_graph as graph;
pub use trove_rio as rio;
pub use trove_sparql_client as sparql;
pub use trove_term as term;

use trove_graph::{FormatRegistry, Graph, GraphError, Loader};

pub mod prelude;

/// A registry of every format provided by [`rio`].
pub fn default_formats() -> FormatRegistry {
    trove_rio::formats::all()
}

/// Parse `data` into a new [`Graph`], with the [`default_formats`].
///
/// `format` is a format name, MIME type or extension;
/// if it is `None`, the format is guessed from `data`.
pub fn parse(data: &[u8], format: Option<&str>, base: Option<&str>) -> Result<Graph, GraphError> {
    let mut graph = match base {
        Some(base) => Graph::with_uri(base),
        None => Graph::new(),
    };
    graph.parse(data, format, None, &default_formats())?;
    Ok(graph)
}

/// Load `uri` with `loader` into a new [`Graph`] named after it, with the [`default_formats`].
pub fn load_with<L: Loader + ?Sized>(uri: &str, loader: &L) -> Result<Graph, GraphError> {
    let mut graph = Graph::with_uri(uri);
    let count = graph.load(None, None, loader, &default_formats())?;
    log::debug!("{count} triples loaded from <{uri}>");
    Ok(graph)
}

/// Fetch `uri` over HTTP(S) into a new [`Graph`] named after it, with the [`default_formats`].
#[cfg(feature = "http_client")]
pub fn load(uri: &str) -> Result<Graph, GraphError> {
    load_with(uri, &trove_graph::HttpLoader::new())
}
