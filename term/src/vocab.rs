//! IRIs of the vocabularies the rest of Trove relies on.
//!
//! ```
//! use trove_term::vocab::{rdf, xsd};
//! assert_eq!(rdf::type_, "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
//! assert_eq!(xsd::integer, "http://www.w3.org/2001/XMLSchema#integer");
//! ```

/// The standard `rdf:` namespace.
///
/// NB: since `type` is a reserved keyword in Rust,
/// the term `rdf:type` spells `rdf::type_` (with a trailing underscore).
pub mod rdf {
    vocabulary!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        Property,
        langString,
        XMLLiteral,
        first,
        rest,
        nil,
        value;
        type_, "type"
    );
}

/// The standard `rdfs:` namespace.
pub mod rdfs {
    vocabulary!(
        "http://www.w3.org/2000/01/rdf-schema#",
        Class,
        Resource,
        comment,
        label,
        seeAlso
    );
}

/// The standard `xsd:` namespace.
pub mod xsd {
    vocabulary!(
        "http://www.w3.org/2001/XMLSchema#",
        boolean,
        date,
        dateTime,
        decimal,
        double,
        integer,
        string
    );
}

/// The `skos:` namespace.
pub mod skos {
    vocabulary!(
        "http://www.w3.org/2004/02/skos/core#",
        Concept,
        altLabel,
        prefLabel
    );
}

/// The `foaf:` namespace.
pub mod foaf {
    vocabulary!(
        "http://xmlns.com/foaf/0.1/",
        Document,
        Person,
        isPrimaryTopicOf,
        knows,
        name,
        primaryTopic
    );
}

/// The DCMI terms namespace.
pub mod dcterms {
    vocabulary!("http://purl.org/dc/terms/", identifier, title);
}

/// The legacy Dublin Core 1.1 elements namespace.
pub mod dc11 {
    vocabulary!("http://purl.org/dc/elements/1.1/", creator, title);
}
