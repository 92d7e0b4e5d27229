use crate::dump::dump_resource_value;
use crate::{Descriptor, Literal, NamespaceRegistry};
use std::fmt;

/// The three kinds of RDF [`Term`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TermKind {
    /// An IRI (a.k.a. URI resource)
    Iri,
    /// A blank node
    BlankNode,
    /// A literal
    Literal,
}

/// An RDF term.
///
/// Blank node identifiers are stored with their `_:` prefix,
/// so that the identifier of any non-literal term can be used as a subject key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// An IRI
    Iri(Box<str>),
    /// A blank node, identified by `_:` followed by a local label
    BlankNode(Box<str>),
    /// A literal
    Literal(Literal),
}

impl Term {
    /// Build an IRI term.
    pub fn iri<T: Into<Box<str>>>(iri: T) -> Self {
        Term::Iri(iri.into())
    }

    /// Build a blank node term, adding the `_:` prefix to `id` if it is missing.
    pub fn bnode(id: &str) -> Self {
        if id.starts_with("_:") {
            Term::BlankNode(id.into())
        } else {
            Term::BlankNode(format!("_:{id}").into())
        }
    }

    /// Build a blank node if `id` starts with `_:`, an IRI otherwise.
    pub fn resource(id: &str) -> Self {
        if id.starts_with("_:") {
            Term::BlankNode(id.into())
        } else {
            Term::Iri(id.into())
        }
    }

    /// The kind of this term.
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Iri(_) => TermKind::Iri,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
        }
    }

    /// Whether this term is an IRI.
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Whether this term is a blank node.
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Whether this term is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Whether this term denotes a resource (IRI or blank node),
    /// i.e. whether it can appear as a subject.
    pub fn is_resource(&self) -> bool {
        !self.is_literal()
    }

    /// The IRI or blank node identifier of this term; `None` for literals.
    pub fn id(&self) -> Option<&str> {
        match self {
            Term::Iri(id) | Term::BlankNode(id) => Some(id),
            Term::Literal(_) => None,
        }
    }

    /// This term as a [`Literal`], if it is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// The identifier of a resource, or the lexical value of a literal.
    pub fn value(&self) -> &str {
        match self {
            Term::Iri(id) | Term::BlankNode(id) => id,
            Term::Literal(lit) => lit.value(),
        }
    }

    /// The text a user should see for this term.
    pub fn display_value(&self) -> &str {
        self.value()
    }

    /// An unambiguous rendering of this term, in N-Triples style.
    pub fn to_debug_string(&self) -> String {
        match self {
            Term::Iri(iri) => format!("<{iri}>"),
            Term::BlankNode(id) => id.to_string(),
            Term::Literal(lit) => lit.to_debug_string(),
        }
    }

    /// Pretty-print this term for diagnostic dumps.
    pub fn dump_value(&self, html: bool, ns: &NamespaceRegistry) -> String {
        match self {
            Term::Iri(id) | Term::BlankNode(id) => dump_resource_value(id, html, ns),
            Term::Literal(lit) => lit.dump_value(html, ns),
        }
    }

    /// Describe this term as a `{type, value, lang?, datatype?}` [`Descriptor`].
    pub fn to_descriptor(&self) -> Descriptor {
        match self {
            Term::Iri(iri) => Descriptor::new("uri", iri),
            Term::BlankNode(id) => Descriptor::new("bnode", id),
            Term::Literal(lit) => lit.to_descriptor(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_debug_string())
    }
}

impl From<Literal> for Term {
    fn from(other: Literal) -> Term {
        Term::Literal(other)
    }
}

impl From<&Term> for Term {
    fn from(other: &Term) -> Term {
        other.clone()
    }
}

macro_rules! literal_term_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Term {
                fn from(other: $t) -> Term {
                    Term::Literal(Literal::from(other))
                }
            }
        )*
    };
}

literal_term_from!(&str, String, &String, Box<str>, i8, i16, i32, i64, u8, u16, u32, f32, f64, bool);
