//! This crate is part of [Trove],
//! an in-memory [RDF] graph toolkit in Rust.
//!
//! It defines the value types shared by every other Trove crate:
//! * [`Term`], the tagged representation of an RDF term
//!   (IRI, blank node or [`Literal`]);
//! * [`Descriptor`], the `{type, value, lang?, datatype?}` shape
//!   used by RDF/JSON and SPARQL JSON results;
//! * [`NamespaceRegistry`], which expands and shortens prefixed names;
//! * the [`vocab`] modules, holding the IRIs of well-known vocabularies.
//!
//! [Trove]: https://docs.rs/trove/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
#![deny(missing_docs)]

#[macro_use]
mod _macro;
mod _error;
pub use _error::*;
mod _term;
pub use _term::*;
pub mod descriptor;
pub use descriptor::Descriptor;
pub mod dump;
pub mod literal;
pub use literal::{Literal, Scalar};
pub mod ns;
pub use ns::NamespaceRegistry;
pub mod vocab;
