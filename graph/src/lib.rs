//! This crate is part of [Trove],
//! an in-memory [RDF] graph toolkit in Rust.
//!
//! It provides the [`Graph`] store, with its forward and reverse indices,
//! and everything a graph needs to talk to the outside world:
//! * [`Resource`] handles, classified through a [`TypeRegistry`];
//! * the [`format`] plugin traits and their [`FormatRegistry`];
//! * the [`Loader`] transport trait and a few [loaders](loader).
//!
//! # Example
//! ```
//! use trove_graph::{Filter, Graph};
//!
//! let mut g = Graph::new();
//! let alice = g.resource("http://example.org/alice", &["foaf:Person"])?;
//! g.add(&alice, "foaf:name", "Alice")?;
//! assert_eq!(g.len(), 2);
//! assert_eq!(g.join(&alice, "foaf:name", " ", None)?, "Alice");
//! assert_eq!(g.type_of(&alice)?.as_deref(), Some("foaf:Person"));
//! assert_eq!(g.all_of_type("foaf:Person")?, vec![alice.clone()]);
//! # Ok::<(), trove_graph::GraphError>(())
//! ```
//!
//! [Trove]: https://docs.rs/trove/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
#![deny(missing_docs)]

mod _error;
pub use _error::*;
mod _graph;
pub use _graph::*;
mod dump;
pub mod format;
pub use format::{Format, FormatRegistry, GraphParser, GraphSerialiser};
mod index;
pub mod loader;
pub use loader::{Loader, LoaderError, LocalLoader, NoLoader};
#[cfg(feature = "http_client")]
pub use loader::HttpLoader;
pub mod resource;
pub use resource::{Filter, Node, Resource, ResourceClass, TypedResource};
pub mod types;
pub use types::TypeRegistry;

pub use trove_term::{Literal, NamespaceRegistry, Term, TermKind};

#[cfg(test)]
mod test;

#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
