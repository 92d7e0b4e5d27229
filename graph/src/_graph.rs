use crate::format::FormatRegistry;
use crate::index::Index;
use crate::loader::{Loader, LoaderError};
use crate::{Filter, GraphError, GraphResult, Node, Resource, ResourceClass, TypeRegistry};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::fmt;
use trove_term::vocab::{dc11, dcterms, foaf, rdf, rdfs, skos};
use trove_term::{Literal, NamespaceRegistry, Term};

/// An in-memory RDF graph.
///
/// Triples are stored twice:
/// in a forward index (subject → property → values),
/// and, for values that are IRIs or blank nodes,
/// in a reverse index (value → property → subjects).
/// Both indices keep subjects, properties and values in first-insertion order.
///
/// Subjects and properties can be given as prefixed names (e.g. `foaf:name`),
/// which are expanded through the [namespaces](Graph::namespaces) of the graph.
/// Reading methods also accept inverse properties,
/// spelt with a leading `^` (e.g. `^foaf:knows`),
/// which are looked up in the reverse index.
///
/// Looking up an unknown subject is not an error, it simply yields nothing.
/// Only empty subjects, properties and identifiers are rejected
/// with [`GraphError::InvalidArgument`].
#[derive(Clone, Debug, Default)]
pub struct Graph {
    uri: Option<String>,
    index: Index,
    rev_index: Index,
    bnode_count: u64,
    resources: RefCell<IndexMap<Box<str>, Resource>>,
    namespaces: NamespaceRegistry,
    types: TypeRegistry,
}

impl Graph {
    /// An empty graph with no URI,
    /// the default namespaces and an empty type registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty graph with the given URI.
    pub fn with_uri(uri: &str) -> Self {
        Graph {
            uri: Some(uri.to_string()),
            ..Self::default()
        }
    }

    /// An empty graph with explicit configuration.
    pub fn with_config(uri: Option<&str>, namespaces: NamespaceRegistry, types: TypeRegistry) -> Self {
        Graph {
            uri: uri.map(str::to_string),
            namespaces,
            types,
            ..Self::default()
        }
    }

    /// The URI of this graph, if any.
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// The namespaces used to expand and shorten IRIs in this graph.
    pub fn namespaces(&self) -> &NamespaceRegistry {
        &self.namespaces
    }

    /// Mutable access to the namespaces of this graph.
    pub fn namespaces_mut(&mut self) -> &mut NamespaceRegistry {
        &mut self.namespaces
    }

    /// The registry deciding the class of the resources of this graph.
    pub fn type_registry(&self) -> &TypeRegistry {
        &self.types
    }

    /// Mutable access to the type registry of this graph.
    ///
    /// NB: resources already materialised keep their class.
    pub fn type_registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.types
    }

    /// Get or create the resource identified by `uri`, adding it the given `types`.
    ///
    /// The class of the resource is decided the first time it is materialised,
    /// from its `rdf:type`s at that time, and never changes afterwards.
    pub fn resource<S: AsRef<str>>(&mut self, uri: S, types: &[&str]) -> GraphResult<Resource> {
        let uri = self.subject(uri.as_ref())?;
        self.add_type(&uri, types)?;
        Ok(self.materialise(&uri))
    }

    /// Resolve `reference` against `base`, then behave as [`resource`](Self::resource).
    pub fn resolve_resource(&mut self, base: &str, reference: &str, types: &[&str]) -> GraphResult<Resource> {
        let base = oxiri::Iri::parse(base).map_err(|_| GraphError::InvalidIri(base.to_string()))?;
        let uri = base
            .resolve(reference)
            .map_err(|_| GraphError::InvalidIri(reference.to_string()))?;
        self.resource(uri.as_str(), types)
    }

    /// Create a fresh blank node with the given `types`.
    pub fn new_bnode(&mut self, types: &[&str]) -> GraphResult<Resource> {
        let id = self.new_bnode_id();
        self.resource(id, types)
    }

    /// Generate a fresh blank node identifier: `_:eid1`, `_:eid2`...
    pub fn new_bnode_id(&mut self) -> String {
        self.bnode_count += 1;
        format!("_:eid{}", self.bnode_count)
    }

    /// Add the triple `(s, p, value)` unless it is already present.
    ///
    /// Return whether the graph has changed.
    /// `p` can not be an inverse property.
    pub fn add<S, V>(&mut self, s: S, p: &str, value: V) -> GraphResult<bool>
    where
        S: AsRef<str>,
        V: Into<Term>,
    {
        let s = self.subject(s.as_ref())?;
        let p = self.forward_property(p)?;
        let value = self.value(value.into())?;
        Ok(self.insert(&s, &p, value))
    }

    /// Add a literal value, inferring its datatype if needed.
    pub fn add_literal<S, L>(&mut self, s: S, p: &str, value: L) -> GraphResult<bool>
    where
        S: AsRef<str>,
        L: Into<Literal>,
    {
        self.add(s, p, value.into())
    }

    /// Add a resource value, given by its IRI, prefixed name or blank node identifier.
    pub fn add_resource<S, O>(&mut self, s: S, p: &str, o: O) -> GraphResult<bool>
    where
        S: AsRef<str>,
        O: AsRef<str>,
    {
        self.add(s, p, Term::resource(o.as_ref()))
    }

    /// Like [`add`](Self::add), but a missing value is silently ignored
    /// (after checking `s` and `p`).
    ///
    /// This suits optional variables of SPARQL results.
    pub fn add_optional<S, V>(&mut self, s: S, p: &str, value: Option<V>) -> GraphResult<bool>
    where
        S: AsRef<str>,
        V: Into<Term>,
    {
        match value {
            Some(value) => self.add(s, p, value),
            None => {
                self.subject(s.as_ref())?;
                self.forward_property(p)?;
                Ok(false)
            }
        }
    }

    /// Replace all values of `p` for `s` with `value`.
    pub fn set<S, V>(&mut self, s: S, p: &str, value: V) -> GraphResult<bool>
    where
        S: AsRef<str>,
        V: Into<Term>,
    {
        let s = self.subject(s.as_ref())?;
        let p = self.forward_property(p)?;
        let value = self.value(value.into())?;
        self.remove(&s, &p, None);
        Ok(self.insert(&s, &p, value))
    }

    /// Delete the triple `(s, p, value)`, or all values of `p` for `s` if `value` is `None`.
    ///
    /// Return the number of deleted triples.
    pub fn delete<S: AsRef<str>>(&mut self, s: S, p: &str, value: Option<&Term>) -> GraphResult<usize> {
        let s = self.subject(s.as_ref())?;
        let p = self.forward_property(p)?;
        let value = value.map(|v| self.value(v.clone())).transpose()?;
        Ok(self.remove(&s, &p, value.as_ref()))
    }

    /// The first value of `p` for `s` accepted by `filter`.
    pub fn get<S: AsRef<str>>(&self, s: S, p: &str, filter: &Filter) -> GraphResult<Option<Node>> {
        let s = self.subject(s.as_ref())?;
        let (p, inverse) = self.property(p)?;
        Ok(self
            .values_of(&s, &p, inverse)
            .iter()
            .find(|t| filter.accepts(t))
            .map(|t| self.node(t)))
    }

    /// The first value accepted by `filter` of the first property in `ps` having one.
    pub fn get_any<S: AsRef<str>>(&self, s: S, ps: &[&str], filter: &Filter) -> GraphResult<Option<Node>> {
        for p in ps {
            if let Some(node) = self.get(s.as_ref(), p, filter)? {
                return Ok(Some(node));
            }
        }
        Ok(None)
    }

    /// The first literal value of `p` for `s`, with language tag `lang` if given.
    pub fn get_literal<S: AsRef<str>>(&self, s: S, p: &str, lang: Option<&str>) -> GraphResult<Option<Literal>> {
        Ok(self
            .get(s, p, &Filter::literal(lang))?
            .and_then(Node::into_literal))
    }

    /// All values of `p` for `s` accepted by `filter`.
    pub fn all<S: AsRef<str>>(&self, s: S, p: &str, filter: &Filter) -> GraphResult<Vec<Node>> {
        let s = self.subject(s.as_ref())?;
        let (p, inverse) = self.property(p)?;
        Ok(self
            .values_of(&s, &p, inverse)
            .iter()
            .filter(|t| filter.accepts(t))
            .map(|t| self.node(t))
            .collect())
    }

    /// All literal values of `p` for `s`, with language tag `lang` if given.
    pub fn all_literals<S: AsRef<str>>(&self, s: S, p: &str, lang: Option<&str>) -> GraphResult<Vec<Literal>> {
        Ok(self
            .all(s, p, &Filter::literal(lang))?
            .into_iter()
            .filter_map(Node::into_literal)
            .collect())
    }

    /// All the resources having `type_` as an `rdf:type`.
    pub fn all_of_type(&self, type_: &str) -> GraphResult<Vec<Resource>> {
        Ok(self
            .all(type_, &format!("^{}", rdf::type_), &Filter::any())?
            .into_iter()
            .filter_map(Node::into_resource)
            .collect())
    }

    /// The literal values of `p` for `s` (with language tag `lang` if given), joined by `glue`.
    pub fn join<S: AsRef<str>>(&self, s: S, p: &str, glue: &str, lang: Option<&str>) -> GraphResult<String> {
        Ok(self
            .all_literals(s, p, lang)?
            .iter()
            .map(Literal::display_value)
            .collect::<Vec<_>>()
            .join(glue))
    }

    /// Whether `s` has at least one value for `p` (which can be an inverse property).
    pub fn has_property<S: AsRef<str>>(&self, s: S, p: &str) -> GraphResult<bool> {
        let s = self.subject(s.as_ref())?;
        let (p, inverse) = self.property(p)?;
        let index = if inverse { &self.rev_index } else { &self.index };
        Ok(index.contains(&s, &p))
    }

    /// Whether this graph contains no triple.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The number of triples in this graph.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Iterate over all triples, grouped by subject then property,
    /// in first-insertion order.
    pub fn triples(&self) -> impl Iterator<Item = (&str, &str, &Term)> {
        self.index.iter().flat_map(|(s, props)| {
            props
                .iter()
                .flat_map(move |(p, values)| values.iter().map(move |o| (s, &p[..], o)))
        })
    }

    /// Iterate over the subjects of this graph, in first-insertion order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.index.keys()
    }

    /// The properties of `s`, as prefixed names.
    ///
    /// Properties that can not be shortened are skipped.
    pub fn properties<S: AsRef<str>>(&self, s: S) -> GraphResult<Vec<String>> {
        Ok(self
            .property_uris(s)?
            .into_iter()
            .filter_map(|p| self.namespaces.shorten(p))
            .collect())
    }

    /// The full IRIs of the properties of `s`.
    pub fn property_uris<S: AsRef<str>>(&self, s: S) -> GraphResult<Vec<&str>> {
        let s = self.subject(s.as_ref())?;
        Ok(self
            .index
            .properties(&s)
            .map(|props| props.keys().map(|p| &p[..]).collect())
            .unwrap_or_default())
    }

    /// Every resource of this graph:
    /// the subjects, the IRIs and blank nodes used as values,
    /// and any other resource materialised so far.
    pub fn resources(&self) -> Vec<Resource> {
        for id in self.index.keys().chain(self.rev_index.keys()) {
            self.materialise(id);
        }
        self.resources.borrow().values().cloned().collect()
    }

    /// The resources having `value` among their values for `p`.
    ///
    /// Values are compared by kind and lexical value only,
    /// so that a plain string matches literals with any language tag or datatype.
    pub fn resources_matching<V: Into<Term>>(&self, p: &str, value: V) -> GraphResult<Vec<Resource>> {
        let (p, inverse) = self.property(p)?;
        let value = self.value(value.into())?;
        let index = if inverse { &self.rev_index } else { &self.index };
        Ok(index
            .iter()
            .filter(|(_, props)| {
                props.get(&p[..]).is_some_and(|values| {
                    values
                        .iter()
                        .any(|v| v.kind() == value.kind() && v.value() == value.value())
                })
            })
            .map(|(s, _)| self.materialise(s))
            .collect())
    }

    /// A human-readable label for `s`.
    ///
    /// This is the first literal (with language tag `lang` if given) among
    /// `skos:prefLabel`, `rdfs:label`, `foaf:name`, `dcterms:title` and `dc11:title`.
    ///
    /// No `dc` prefix is registered by default,
    /// so a property added as `dc:title` is kept as is and not found here;
    /// use `dcterms:title` or `dc11:title`, or register `dc` first.
    pub fn label<S: AsRef<str>>(&self, s: S, lang: Option<&str>) -> GraphResult<Option<Literal>> {
        let props = [skos::prefLabel, rdfs::label, foaf::name, dcterms::title, dc11::title];
        Ok(self
            .get_any(s, &props, &Filter::literal(lang))?
            .and_then(Node::into_literal))
    }

    /// The primary topic of the document `s`,
    /// via `foaf:primaryTopic` or `^foaf:isPrimaryTopicOf`.
    pub fn primary_topic<S: AsRef<str>>(&self, s: S) -> GraphResult<Option<Resource>> {
        let inverse = format!("^{}", foaf::isPrimaryTopicOf);
        let s = s.as_ref();
        for p in [foaf::primaryTopic, &inverse[..]] {
            let found = self
                .all(s, p, &Filter::any())?
                .into_iter()
                .find_map(Node::into_resource);
            if found.is_some() {
                return Ok(found);
            }
        }
        Ok(None)
    }

    /// The [`label`](Self::label) of the graph itself, named by its [`uri`](Self::uri).
    pub fn label_of_graph(&self, lang: Option<&str>) -> GraphResult<Option<Literal>> {
        self.label(self.own_uri()?, lang)
    }

    /// The [`primary_topic`](Self::primary_topic) of the graph itself.
    pub fn primary_topic_of_graph(&self) -> GraphResult<Option<Resource>> {
        self.primary_topic(self.own_uri()?)
    }

    /// The [`type_of`](Self::type_of) the graph itself.
    pub fn type_of_graph(&self) -> GraphResult<Option<String>> {
        self.type_of(self.own_uri()?)
    }

    /// The first type of `s`, as a prefixed name if possible.
    pub fn type_of<S: AsRef<str>>(&self, s: S) -> GraphResult<Option<String>> {
        Ok(self.type_as_resource(s)?.map(|t| self.short_or_full(t.id())))
    }

    /// The first type of `s`.
    pub fn type_as_resource<S: AsRef<str>>(&self, s: S) -> GraphResult<Option<Resource>> {
        Ok(self
            .all(s, rdf::type_, &Filter::any())?
            .into_iter()
            .find_map(Node::into_resource))
    }

    /// All the types of `s`, as prefixed names if possible.
    pub fn types<S: AsRef<str>>(&self, s: S) -> GraphResult<Vec<String>> {
        Ok(self
            .all(s, rdf::type_, &Filter::any())?
            .iter()
            .filter_map(Node::as_resource)
            .map(|t| self.short_or_full(t.id()))
            .collect())
    }

    /// Whether `s` has `type_` (full IRI or prefixed name) as an `rdf:type`.
    pub fn is_a<S: AsRef<str>>(&self, s: S, type_: &str) -> GraphResult<bool> {
        let s = self.subject(s.as_ref())?;
        let type_ = self.namespaces.expand(type_);
        Ok(self
            .index
            .values(&s, rdf::type_)
            .iter()
            .any(|t| t.id() == Some(&type_[..])))
    }

    /// Add each of `types` as an `rdf:type` of `s`.
    pub fn add_type<S: AsRef<str>>(&mut self, s: S, types: &[&str]) -> GraphResult<()> {
        let s = self.subject(s.as_ref())?;
        let types = types
            .iter()
            .map(|t| self.value(Term::iri(*t)))
            .collect::<GraphResult<Vec<_>>>()?;
        for t in types {
            self.insert(&s, rdf::type_, t);
        }
        Ok(())
    }

    /// Make `type_` the only `rdf:type` of `s`.
    pub fn set_type<S: AsRef<str>>(&mut self, s: S, type_: &str) -> GraphResult<()> {
        let s = self.subject(s.as_ref())?;
        let t = self.value(Term::iri(type_))?;
        self.remove(&s, rdf::type_, None);
        self.insert(&s, rdf::type_, t);
        Ok(())
    }

    /// Export the forward index as [RDF/JSON](https://www.w3.org/TR/rdf-json/):
    /// `{ subject: { property: [ {type, value, lang?, datatype?}, ... ] } }`.
    pub fn to_rdf_json(&self) -> Value {
        let mut subjects = Map::new();
        for (s, props) in self.index.iter() {
            let mut properties = Map::new();
            for (p, values) in props {
                let values = values.iter().map(descriptor_value).collect();
                properties.insert(p.to_string(), Value::Array(values));
            }
            subjects.insert(s.to_string(), Value::Object(properties));
        }
        Value::Object(subjects)
    }

    /// Parse `data` into this graph.
    ///
    /// `format` is resolved through `formats` (by name, MIME type or extension);
    /// if it is `None` or `"guess"`, the format is guessed from `data`.
    /// Relative IRIs are resolved against `base`, or the URI of this graph.
    ///
    /// Parsing is all or nothing:
    /// the graph is left untouched if the data can not be parsed.
    /// Return the number of triples read.
    pub fn parse(
        &mut self,
        data: &[u8],
        format: Option<&str>,
        base: Option<&str>,
        formats: &FormatRegistry,
    ) -> GraphResult<usize> {
        let format = match format {
            None | Some("guess") => formats
                .guess(data)
                .ok_or_else(|| GraphError::UnsupportedFormat("unrecognised data".into()))?,
            Some(key) => formats.require(key)?,
        };
        let parser = format
            .parser()
            .ok_or_else(|| GraphError::UnsupportedFormat(format.name().to_string()))?;
        let base = base.map(str::to_string).or_else(|| self.uri.clone());
        let mut staging = self.staging();
        let count = match parser.parse(&mut staging, data, base.as_deref()) {
            Ok(count) => count,
            Err(err) => {
                log::debug!("{} parser failed, graph left untouched: {err}", format.name());
                return Err(err.into());
            }
        };
        log::debug!("{count} triples parsed as {}", format.name());
        self.absorb(staging);
        Ok(count)
    }

    /// Fetch `uri` (or the URI of this graph) with `loader`, and parse the result.
    ///
    /// Unless `format` is given, it is deduced from the content-type returned by the loader,
    /// or else guessed from the data.
    pub fn load<L: Loader + ?Sized>(
        &mut self,
        uri: Option<&str>,
        format: Option<&str>,
        loader: &L,
        formats: &FormatRegistry,
    ) -> GraphResult<usize> {
        let Some(uri) = uri.map(str::to_string).or_else(|| self.uri.clone()) else {
            return Err(GraphError::InvalidArgument(
                "no URI given and the graph has none".into(),
            ));
        };
        let uri = self.namespaces.expand(&uri).into_owned();
        let (data, ctype) = loader.get(&uri, &formats.accept_header())?;
        let format = match format {
            Some(format) => format.to_string(),
            None => match formats.by_mime_type(&ctype).or_else(|| formats.guess(&data)) {
                Some(format) => format.name().to_string(),
                None => return Err(LoaderError::CantGuessSyntax(uri).into()),
            },
        };
        log::debug!("<{uri}> loaded as {ctype}, parsed as {format}");
        self.parse(&data, Some(&format), Some(&uri), formats)
    }

    /// Serialise this graph in `format` (a name, MIME type or extension known to `formats`).
    pub fn serialise(&self, format: &str, formats: &FormatRegistry) -> GraphResult<Vec<u8>> {
        let format = formats.require(format)?;
        let serialiser = format
            .serialiser()
            .ok_or_else(|| GraphError::UnsupportedFormat(format.name().to_string()))?;
        Ok(serialiser.serialise(self)?)
    }

    //

    fn own_uri(&self) -> GraphResult<&str> {
        self.uri
            .as_deref()
            .ok_or_else(|| GraphError::InvalidArgument("graph has no URI".into()))
    }

    fn subject(&self, s: &str) -> GraphResult<String> {
        if s.is_empty() {
            return Err(GraphError::InvalidArgument("subject can not be empty".into()));
        }
        Ok(self.expand(s))
    }

    fn property(&self, p: &str) -> GraphResult<(String, bool)> {
        let (p, inverse) = match p.strip_prefix('^') {
            Some(p) => (p, true),
            None => (p, false),
        };
        if p.is_empty() {
            return Err(GraphError::InvalidArgument("property can not be empty".into()));
        }
        Ok((self.expand(p), inverse))
    }

    fn expand(&self, name: &str) -> String {
        if let Some(prefix) = self.namespaces.unknown_prefix(name) {
            log::debug!("prefix {prefix:?} is not registered, {name:?} is used as is");
        }
        self.namespaces.expand(name).into_owned()
    }

    fn forward_property(&self, p: &str) -> GraphResult<String> {
        match self.property(p)? {
            (_, true) => Err(GraphError::InvalidArgument(format!(
                "inverse property {p} can only be read"
            ))),
            (p, false) => Ok(p),
        }
    }

    fn value(&self, value: Term) -> GraphResult<Term> {
        match value {
            Term::Iri(iri) if iri.is_empty() => {
                Err(GraphError::InvalidArgument("IRI can not be empty".into()))
            }
            Term::Iri(iri) => Ok(Term::Iri(self.namespaces.expand(&iri).into())),
            Term::BlankNode(id) if id.len() <= 2 => Err(GraphError::InvalidArgument(
                "blank node identifier can not be empty".into(),
            )),
            Term::Literal(lit) => Ok(Term::Literal(lit.expand_datatype(&self.namespaces))),
            other => Ok(other),
        }
    }

    fn values_of(&self, s: &str, p: &str, inverse: bool) -> &[Term] {
        if inverse {
            self.rev_index.values(s, p)
        } else {
            self.index.values(s, p)
        }
    }

    fn insert(&mut self, s: &str, p: &str, value: Term) -> bool {
        let object = value.id().map(str::to_string);
        if !self.index.insert(s, p, value) {
            return false;
        }
        if let Some(o) = object {
            self.rev_index.insert(&o, p, Term::resource(s));
        }
        true
    }

    fn remove(&mut self, s: &str, p: &str, value: Option<&Term>) -> usize {
        let removed = self
            .index
            .remove(s, p, |t| value.is_none() || value == Some(t));
        for o in removed.iter().filter_map(Term::id) {
            self.rev_index.remove(o, p, |t| t.value() == s);
        }
        removed.len()
    }

    fn node(&self, t: &Term) -> Node {
        match t {
            Term::Literal(lit) => Node::Literal(lit.clone()),
            _ => Node::Resource(self.materialise(t.value())),
        }
    }

    fn materialise(&self, id: &str) -> Resource {
        if let Some(r) = self.resources.borrow().get(id) {
            return r.clone();
        }
        let r = Resource::new(Term::resource(id), self.class_for(id));
        log::trace!("materialised {id} as {}", r.class());
        self.resources.borrow_mut().insert(id.into(), r.clone());
        r
    }

    /// The values of `p` for `s`, with no expansion nor materialisation.
    pub(crate) fn direct_values(&self, s: &str, p: &str) -> &[Term] {
        self.index.values(s, p)
    }

    /// The class `id` has, or would have if it was materialised now.
    pub(crate) fn class_of(&self, id: &str) -> ResourceClass {
        match self.resources.borrow().get(id) {
            Some(r) => r.class().clone(),
            None => self.class_for(id),
        }
    }

    fn class_for(&self, id: &str) -> ResourceClass {
        self.types
            .classify(self.index.values(id, rdf::type_).iter().filter_map(Term::id))
    }

    fn short_or_full(&self, iri: &str) -> String {
        self.namespaces
            .shorten(iri)
            .unwrap_or_else(|| iri.to_string())
    }

    /// An empty graph sharing the configuration and blank node counter of this one.
    fn staging(&self) -> Graph {
        Graph {
            uri: self.uri.clone(),
            bnode_count: self.bnode_count,
            namespaces: self.namespaces.clone(),
            types: self.types.clone(),
            ..Graph::default()
        }
    }

    fn absorb(&mut self, other: Graph) {
        self.bnode_count = other.bnode_count;
        for (s, p, o) in other.triples() {
            self.insert(s, p, o.clone());
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri().unwrap_or_default())
    }
}

fn descriptor_value(term: &Term) -> Value {
    let d = term.to_descriptor();
    let mut obj = Map::new();
    obj.insert("type".into(), Value::String(d.kind.into()));
    obj.insert("value".into(), Value::String(d.value.into()));
    if let Some(lang) = d.lang {
        obj.insert("lang".into(), Value::String(lang.into()));
    }
    if let Some(datatype) = d.datatype {
        obj.insert("datatype".into(), Value::String(datatype.into()));
    }
    Value::Object(obj)
}
