//! I define [`Descriptor`], the `{type, value, lang?, datatype?}` record
//! used to exchange terms with SPARQL result documents and RDF/JSON.
use crate::{Literal, Term, TermError};
use serde::{Deserialize, Serialize};

/// A plain description of an RDF term.
///
/// `type` is one of `uri`, `bnode`, `literal` or `typed-literal`.
/// When deserializing, the language tag is accepted under `lang` or `xml:lang`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    /// The kind of term described
    #[serde(rename = "type")]
    pub kind: Box<str>,
    /// The IRI, blank node label or lexical value
    pub value: Box<str>,
    /// The language tag of a literal
    #[serde(default, alias = "xml:lang", skip_serializing_if = "Option::is_none")]
    pub lang: Option<Box<str>>,
    /// The datatype IRI of a literal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<Box<str>>,
}

impl Descriptor {
    /// A descriptor with no language tag nor datatype.
    pub fn new(kind: &str, value: &str) -> Self {
        Descriptor {
            kind: kind.into(),
            value: value.into(),
            lang: None,
            datatype: None,
        }
    }

    /// Convert this descriptor into a [`Term`].
    ///
    /// See the [`TryFrom`] implementation for the rules.
    pub fn to_term(&self) -> Result<Term, TermError> {
        Term::try_from(self.clone())
    }
}

impl TryFrom<Descriptor> for Term {
    type Error = TermError;

    /// Blank node labels are given the `_:` prefix if they lack it.
    /// For literals, empty `lang` or `datatype` are treated as absent,
    /// and no datatype is inferred from the value.
    fn try_from(other: Descriptor) -> Result<Term, TermError> {
        match &other.kind[..] {
            "uri" => {
                if other.value.is_empty() {
                    return Err(TermError::InvalidDescriptor("empty IRI".into()));
                }
                Ok(Term::Iri(other.value))
            }
            "bnode" => {
                let label = other.value.strip_prefix("_:").unwrap_or(&other.value);
                if label.is_empty() {
                    return Err(TermError::InvalidDescriptor("empty blank node label".into()));
                }
                Ok(Term::bnode(label))
            }
            "literal" | "typed-literal" => {
                let lit = match (other.lang.as_deref(), other.datatype.as_deref()) {
                    (_, Some(dt)) if !dt.is_empty() => Literal::new_dt(other.value, dt),
                    (Some(lang), _) if !lang.is_empty() => Literal::new_lang(other.value, lang),
                    _ => Literal::new(other.value),
                };
                Ok(Term::Literal(lit))
            }
            kind => Err(TermError::UnsupportedTermType(kind.to_string())),
        }
    }
}

impl From<&Term> for Descriptor {
    fn from(other: &Term) -> Descriptor {
        other.to_descriptor()
    }
}
