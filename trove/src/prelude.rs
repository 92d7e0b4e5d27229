//! Re-exports the types most programs using Trove need.
//!
//! ```
//! use trove::prelude::*;
//! ```
pub use trove_graph::{
    Filter, Format, FormatRegistry, Graph, GraphError, Loader, LoaderError, LocalLoader, NoLoader,
    Node, Resource, ResourceClass, TypeRegistry, TypedResource,
};
#[cfg(feature = "http_client")]
pub use trove_graph::HttpLoader;
pub use trove_sparql_client::{QueryResponse, SparqlClient, SparqlResult};
pub use trove_term::{Literal, NamespaceRegistry, Term};
