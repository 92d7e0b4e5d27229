//! I define [`Literal`] and the [`Scalar`] host values literals are built from.
//!
//! A literal carries a lexical value and at most one of
//! a language tag or a datatype IRI.
//! When neither is given, the datatype is guessed from the native type of the value:
//!
//! ```
//! use trove_term::{Literal, vocab::xsd};
//! assert_eq!(Literal::new(3.25).datatype(), Some(xsd::decimal));
//! assert_eq!(Literal::new(7).datatype(), Some(xsd::integer));
//! assert_eq!(Literal::new(true).datatype(), Some(xsd::boolean));
//! assert_eq!(Literal::new("plain").datatype(), None);
//! assert_eq!(Literal::new_lang("chat", "fr").datatype(), None);
//! ```
use crate::dump::escape_html;
use crate::vocab::xsd;
use crate::{Descriptor, NamespaceRegistry};
use std::borrow::Cow;
use std::fmt;

/// A native value from which a [`Literal`] can be built.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// A string; produces a plain literal.
    Str(String),
    /// An integer; produces an `xsd:integer` literal.
    Int(i64),
    /// A floating point number; produces an `xsd:decimal` literal.
    Float(f64),
    /// A boolean; produces an `xsd:boolean` literal.
    Bool(bool),
}

impl Scalar {
    /// The datatype inferred for this value when none is given explicitly.
    pub fn guess_datatype(&self) -> Option<&'static str> {
        match self {
            Scalar::Str(_) => None,
            Scalar::Int(_) => Some(xsd::integer),
            Scalar::Float(_) => Some(xsd::decimal),
            Scalar::Bool(_) => Some(xsd::boolean),
        }
    }

    /// The lexical form of this value.
    pub fn lexical_form(&self) -> String {
        match self {
            Scalar::Str(s) => s.clone(),
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

macro_rules! scalar_from {
    ($variant:ident, $conv:expr, $($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(other: $t) -> Scalar {
                    Scalar::$variant($conv(other))
                }
            }
        )*
    };
}

scalar_from!(Str, String::from, &str, String, &String, Box<str>);
scalar_from!(Int, i64::from, i8, i16, i32, i64, u8, u16, u32);
scalar_from!(Float, f64::from, f32, f64);
scalar_from!(Bool, std::convert::identity, bool);

/// An RDF literal.
///
/// Invariant: [`lang`](Self::lang) and [`datatype`](Self::datatype)
/// are never both set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    value: Box<str>,
    lang: Option<Box<str>>,
    datatype: Option<Box<str>>,
}

impl Literal {
    /// Build a literal from a native value, inferring its datatype.
    pub fn new<S: Into<Scalar>>(value: S) -> Self {
        Self::from_parts(value, None, None)
    }

    /// Build a language-tagged literal.
    ///
    /// An empty `lang` is treated as absent.
    pub fn new_lang<S: Into<Scalar>>(value: S, lang: &str) -> Self {
        Self::from_parts(value, Some(lang), None)
    }

    /// Build a literal with an explicit datatype IRI.
    ///
    /// An empty `datatype` is treated as absent.
    pub fn new_dt<S: Into<Scalar>>(value: S, datatype: &str) -> Self {
        Self::from_parts(value, None, Some(datatype))
    }

    /// Build a literal from all its optional parts.
    ///
    /// * an explicit datatype wins over (and clears) a language tag;
    /// * with neither, the datatype is inferred from the native type of `value`;
    /// * empty strings for `lang` or `datatype` count as absent.
    pub fn from_parts<S: Into<Scalar>>(value: S, lang: Option<&str>, datatype: Option<&str>) -> Self {
        let value = value.into();
        let lang = lang.filter(|l| !l.is_empty());
        let datatype = datatype.filter(|d| !d.is_empty());
        let (lang, datatype) = match (lang, datatype) {
            (_, Some(dt)) => (None, Some(Box::from(dt))),
            (Some(lang), None) => (Some(Box::from(lang)), None),
            (None, None) => (None, value.guess_datatype().map(Box::from)),
        };
        Literal {
            value: value.lexical_form().into(),
            lang,
            datatype,
        }
    }

    /// The lexical value of this literal.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The language tag of this literal, if any.
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// The full datatype IRI of this literal, if any.
    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }

    /// The datatype of this literal as a prefixed name (e.g. `xsd:integer`),
    /// or as a full IRI if `ns` can not shorten it.
    pub fn datatype_short(&self, ns: &NamespaceRegistry) -> Option<String> {
        self.datatype()
            .map(|dt| ns.shorten(dt).unwrap_or_else(|| dt.to_string()))
    }

    /// Return this literal with its datatype expanded through `ns`,
    /// so that e.g. `xsd:integer` becomes a full IRI.
    #[must_use]
    pub fn expand_datatype(mut self, ns: &NamespaceRegistry) -> Self {
        let expanded = match self.datatype.as_deref().map(|dt| ns.expand(dt)) {
            Some(Cow::Owned(dt)) => Some(dt),
            _ => None,
        };
        if let Some(dt) = expanded {
            self.datatype = Some(dt.into());
        }
        self
    }

    /// Parse the lexical value as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        self.value.trim().parse().ok()
    }

    /// Parse the lexical value as a floating point number.
    pub fn as_f64(&self) -> Option<f64> {
        self.value.trim().parse().ok()
    }

    /// Parse the lexical value as an `xsd:boolean`.
    pub fn as_bool(&self) -> Option<bool> {
        match self.value.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }

    /// The text a user should see for this literal: its bare lexical value.
    pub fn display_value(&self) -> &str {
        &self.value
    }

    /// An unambiguous rendering of this literal, in N-Triples style.
    pub fn to_debug_string(&self) -> String {
        let mut ret = format!("{:?}", &self.value[..]);
        if let Some(lang) = &self.lang {
            ret.push('@');
            ret.push_str(lang);
        } else if let Some(dt) = &self.datatype {
            ret.push_str("^^<");
            ret.push_str(dt);
            ret.push('>');
        }
        ret
    }

    /// Describe this literal as a `{type: "literal", value, lang?, datatype?}` [`Descriptor`].
    pub fn to_descriptor(&self) -> Descriptor {
        Descriptor {
            kind: "literal".into(),
            value: self.value.clone(),
            lang: self.lang.clone(),
            datatype: self.datatype.clone(),
        }
    }

    /// Pretty-print this literal for diagnostic dumps,
    /// shortening its datatype through `ns`.
    pub fn dump_value(&self, html: bool, ns: &NamespaceRegistry) -> String {
        let mut text = format!("\"{}\"", self.value);
        if let Some(lang) = &self.lang {
            text.push('@');
            text.push_str(lang);
        } else if let Some(dt) = self.datatype_short(ns) {
            text.push_str("^^");
            text.push_str(&dt);
        }
        if html {
            format!("<span style='color:black'>{}</span>", escape_html(&text))
        } else {
            text
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_debug_string())
    }
}

macro_rules! literal_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Literal {
                fn from(other: $t) -> Literal {
                    Literal::new(other)
                }
            }
        )*
    };
}

literal_from!(&str, String, &String, Box<str>, i8, i16, i32, i64, u8, u16, u32, f32, f64, bool);
