//! This crate is part of [Trove],
//! an in-memory [RDF] graph toolkit in Rust.
//!
//! It provides the concrete syntaxes plugged into a
//! [`FormatRegistry`](trove_graph::FormatRegistry):
//! N-Triples, Turtle and RDF/XML (parsed with [RIO](https://docs.rs/rio_api/)),
//! and RDF/JSON.
//!
//! # Example
//! ```
//! use trove_graph::Graph;
//!
//! let formats = trove_rio::formats::all();
//! let mut g = Graph::new();
//! let ttl = b"<http://example.org/a> <http://example.org/p> \"x\" .";
//! assert_eq!(g.parse(ttl, Some("turtle"), None, &formats)?, 1);
//! let nt = g.serialise("nt", &formats)?;
//! assert_eq!(nt, b"<http://example.org/a> <http://example.org/p> \"x\" .\n");
//! # Ok::<(), trove_graph::GraphError>(())
//! ```
//!
//! [Trove]: https://docs.rs/trove/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
#![deny(missing_docs)]

pub mod formats;
pub mod json;
pub mod parser;
pub mod serialiser;
