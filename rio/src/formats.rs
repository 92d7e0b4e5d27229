//! [`Format`] descriptions for the syntaxes supported by this crate.
use crate::json::{RdfJsonParser, RdfJsonSerialiser};
use crate::parser::{NTriplesParser, RdfXmlParser, TurtleParser};
use crate::serialiser::{NTriplesSerialiser, RdfXmlSerialiser, TurtleSerialiser};
use trove_graph::{Format, FormatRegistry};

/// [N-Triples](https://www.w3.org/TR/n-triples/), named `ntriples`.
pub fn ntriples() -> Format {
    Format::new("ntriples", "N-Triples")
        .with_mime_type("application/n-triples", 1.0)
        .with_mime_type("text/plain", 1.0)
        .with_mime_type("text/ntriples", 1.0)
        .with_mime_type("application/ntriples", 1.0)
        .with_mime_type("application/x-ntriples", 1.0)
        .with_extension("nt")
        .with_parser(NTriplesParser)
        .with_serialiser(NTriplesSerialiser)
}

/// [Turtle](https://www.w3.org/TR/turtle/), named `turtle`.
pub fn turtle() -> Format {
    Format::new("turtle", "Turtle Terse RDF Triple Language")
        .with_mime_type("text/turtle", 0.8)
        .with_mime_type("application/turtle", 0.7)
        .with_mime_type("application/x-turtle", 0.5)
        .with_extension("ttl")
        .with_parser(TurtleParser)
        .with_serialiser(TurtleSerialiser::default())
}

/// [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/), named `rdfxml`.
pub fn rdfxml() -> Format {
    Format::new("rdfxml", "RDF/XML")
        .with_mime_type("application/rdf+xml", 0.8)
        .with_extension("rdf")
        .with_extension("xrdf")
        .with_parser(RdfXmlParser)
        .with_serialiser(RdfXmlSerialiser::default())
}

/// [RDF/JSON](https://www.w3.org/TR/rdf-json/), named `json`.
pub fn rdfjson() -> Format {
    Format::new("json", "RDF/JSON Resource-Centric")
        .with_mime_type("application/json", 1.0)
        .with_mime_type("text/json", 0.9)
        .with_mime_type("application/rdf+json", 0.9)
        .with_extension("json")
        .with_extension("rj")
        .with_parser(RdfJsonParser)
        .with_serialiser(RdfJsonSerialiser::new(true))
}

/// A registry holding every format of this crate.
pub fn all() -> FormatRegistry {
    FormatRegistry::new()
        .with(ntriples())
        .with(turtle())
        .with(rdfxml())
        .with(rdfjson())
}
