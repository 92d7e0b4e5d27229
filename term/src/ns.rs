//! I define [`NamespaceRegistry`],
//! an ordered association of short prefixes with namespace IRIs.
//!
//! # Example use
//! ```
//! use trove_term::NamespaceRegistry;
//!
//! let mut ns = NamespaceRegistry::new();
//! ns.register("ex", "http://example.org/ns#").unwrap();
//! assert_eq!(ns.expand("ex:thing"), "http://example.org/ns#thing");
//! assert_eq!(ns.shorten("http://xmlns.com/foaf/0.1/name").as_deref(), Some("foaf:name"));
//! assert_eq!(ns.expand("http://example.org/"), "http://example.org/");
//! ```
use crate::NamespaceError;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

/// The prefixes every [`NamespaceRegistry::new`] starts with.
///
/// No two entries share a namespace IRI,
/// so that [`NamespaceRegistry::shorten`] is the exact inverse of
/// [`NamespaceRegistry::expand`] for each of them.
pub const DEFAULT_NAMESPACES: &[(&str, &str)] = &[
    ("bibo", "http://purl.org/ontology/bibo/"),
    ("cc", "http://creativecommons.org/ns#"),
    ("cert", "http://www.w3.org/ns/auth/cert#"),
    ("dc11", "http://purl.org/dc/elements/1.1/"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("doap", "http://usefulinc.com/ns/doap#"),
    ("exif", "http://www.w3.org/2003/12/exif/ns#"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("geo", "http://www.w3.org/2003/01/geo/wgs84_pos#"),
    ("gr", "http://purl.org/goodrelations/v1#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("rss", "http://purl.org/rss/1.0/"),
    ("schema", "http://schema.org/"),
    ("sioc", "http://rdfs.org/sioc/ns#"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
    ("vcard", "http://www.w3.org/2006/vcard/ns#"),
    ("void", "http://rdfs.org/ns/void#"),
    ("wot", "http://xmlns.com/wot/0.1/"),
    ("xhv", "http://www.w3.org/1999/xhtml/vocab#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
];

lazy_static! {
    static ref PREFIXED_NAME: Regex = Regex::new(r"^([A-Za-z_][\w.\-]*):([\w.\-]*)$").unwrap();
    static ref PREFIX: Regex = Regex::new(r"^[A-Za-z_][\w.\-]*$").unwrap();
    static ref LOCAL_NAME: Regex = Regex::new(r"^[\w.\-]+$").unwrap();
}

/// Bidirectional mapping between short prefixes (e.g. `foaf`)
/// and full namespace IRIs (e.g. `http://xmlns.com/foaf/0.1/`).
///
/// Entries keep their registration order,
/// which makes [`shorten`](Self::shorten) deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceRegistry {
    entries: Vec<(Box<str>, Box<str>)>,
}

impl NamespaceRegistry {
    /// A registry seeded with [`DEFAULT_NAMESPACES`].
    #[must_use]
    pub fn new() -> Self {
        let entries = DEFAULT_NAMESPACES
            .iter()
            .map(|(p, n)| (Box::from(*p), Box::from(*n)))
            .collect();
        NamespaceRegistry { entries }
    }

    /// A registry with no prefix at all.
    #[must_use]
    pub fn empty() -> Self {
        NamespaceRegistry { entries: vec![] }
    }

    /// Associate `prefix` with `namespace`.
    ///
    /// If `prefix` is already registered, its namespace is replaced
    /// but the entry keeps its original position.
    ///
    /// The prefix `_` is reserved for blank node identifiers, and rejected.
    pub fn register(&mut self, prefix: &str, namespace: &str) -> Result<(), NamespaceError> {
        if prefix == "_" || !PREFIX.is_match(prefix) {
            return Err(NamespaceError::InvalidPrefix(prefix.to_string()));
        }
        if oxiri::Iri::parse(namespace).is_err() {
            return Err(NamespaceError::InvalidNamespace(namespace.to_string()));
        }
        match self.entries.iter_mut().find(|(p, _)| &p[..] == prefix) {
            Some(entry) => {
                log::trace!("prefix {prefix}: re-bound from <{}> to <{namespace}>", entry.1);
                entry.1 = namespace.into();
            }
            None => self.entries.push((prefix.into(), namespace.into())),
        }
        Ok(())
    }

    /// Remove `prefix` from this registry, returning its namespace if it was registered.
    pub fn delete(&mut self, prefix: &str) -> Option<String> {
        let i = self.entries.iter().position(|(p, _)| &p[..] == prefix)?;
        Some(self.entries.remove(i).1.into())
    }

    /// The namespace IRI registered for `prefix`, if any.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| &p[..] == prefix)
            .map(|(_, n)| &n[..])
    }

    /// Iterate over `(prefix, namespace)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, n)| (&p[..], &n[..]))
    }

    /// The number of registered prefixes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no prefix is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expand a prefixed name (e.g. `foaf:name`) into a full IRI.
    ///
    /// Anything that is not of the form `prefix:local` with a registered `prefix`
    /// (full IRIs, blank node identifiers, unknown prefixes)
    /// is returned unchanged.
    pub fn expand<'a>(&self, term: &'a str) -> Cow<'a, str> {
        if term.starts_with("_:") {
            return Cow::Borrowed(term);
        }
        if let Some(caps) = PREFIXED_NAME.captures(term) {
            if let Some(ns) = self.get(&caps[1]) {
                return Cow::Owned(format!("{ns}{}", &caps[2]));
            }
        }
        Cow::Borrowed(term)
    }

    /// The prefix of `term` if it looks like a prefixed name
    /// but its prefix is not registered, so that [`expand`](Self::expand) leaves it alone.
    pub fn unknown_prefix<'a>(&self, term: &'a str) -> Option<&'a str> {
        if term.starts_with("_:") {
            return None;
        }
        let prefix = PREFIXED_NAME.captures(term)?.get(1)?.as_str();
        self.get(prefix).is_none().then_some(prefix)
    }

    /// Split `uri` into a registered prefix and a local name.
    ///
    /// The longest matching namespace wins; among namespaces of equal length,
    /// the first registered wins.
    /// The local name must be non-empty and made only of name characters.
    pub fn split<'s, 'u>(&'s self, uri: &'u str) -> Option<(&'s str, &'u str)> {
        let mut matched = 0;
        let mut found = None;
        for (prefix, ns) in &self.entries {
            if ns.len() > matched && uri.starts_with(&ns[..]) {
                let local = &uri[ns.len()..];
                if LOCAL_NAME.is_match(local) {
                    matched = ns.len();
                    found = Some((&prefix[..], local));
                }
            }
        }
        found
    }

    /// Shorten `uri` into a prefixed name, if a registered namespace allows it.
    ///
    /// See [`split`](Self::split) for the matching rules.
    pub fn shorten(&self, uri: &str) -> Option<String> {
        self.split(uri).map(|(prefix, local)| format!("{prefix}:{local}"))
    }

    /// The prefix [`shorten`](Self::shorten) would use for `uri`, if any.
    pub fn prefix_of(&self, uri: &str) -> Option<&str> {
        self.split(uri).map(|(prefix, _)| prefix)
    }
}

impl Default for NamespaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
