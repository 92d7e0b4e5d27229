//! Serialiser for the [Turtle](https://www.w3.org/TR/turtle/) concrete syntax of RDF.
use super::quoted_string;
use std::collections::HashSet;
use std::io::{self, Write};
use trove_graph::format::{GraphSerialiser, SerialiseError};
use trove_graph::{Graph, NamespaceRegistry, Term};
use trove_term::vocab::{rdf, xsd};

/// Turtle serialiser configuration.
#[derive(Clone, Debug)]
pub struct TurtleConfig {
    prefixes: bool,
    indentation: String,
}

impl TurtleConfig {
    /// Build a new default [`TurtleConfig`].
    pub fn new() -> Self {
        TurtleConfig {
            prefixes: true,
            indentation: "    ".to_string(),
        }
    }

    /// Whether IRIs are shortened through the namespaces of the graph,
    /// with the matching `@prefix` declarations at the top
    /// (defaults to `true`).
    pub fn prefixes(&self) -> bool {
        self.prefixes
    }

    /// Indentation of the properties following the first one of a subject
    /// (defaults to four spaces).
    pub fn indentation(&self) -> &str {
        &self.indentation
    }

    /// Transform a [`TurtleConfig`] by setting the [`prefixes`](TurtleConfig::prefixes) flag.
    pub fn with_prefixes(mut self, b: bool) -> Self {
        self.prefixes = b;
        self
    }

    /// Transform a [`TurtleConfig`] by setting the [`indentation`](TurtleConfig::indentation).
    ///
    /// # Precondition
    /// `indentation` must only contain ASCII whitespaces, otherwise this method will panic.
    pub fn with_indentation<T: ToString>(mut self, indentation: T) -> Self {
        let indentation = indentation.to_string();
        assert!(indentation.chars().all(|c| c.is_ascii_whitespace()));
        self.indentation = indentation;
        self
    }
}

impl Default for TurtleConfig {
    fn default() -> Self {
        TurtleConfig::new()
    }
}

/// Turtle serialiser.
///
/// Triples are grouped by subject, then by property,
/// in the order of the graph.
#[derive(Clone, Debug, Default)]
pub struct TurtleSerialiser {
    config: TurtleConfig,
}

impl TurtleSerialiser {
    /// Build a new Turtle serialiser with the given config.
    pub fn new_with_config(config: TurtleConfig) -> Self {
        TurtleSerialiser { config }
    }

    /// Borrow this serialiser's configuration.
    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }
}

impl GraphSerialiser for TurtleSerialiser {
    fn serialise(&self, graph: &Graph) -> Result<Vec<u8>, SerialiseError> {
        let mut writer = Writer {
            ns: graph.namespaces(),
            config: &self.config,
            used: HashSet::new(),
            body: Vec::with_capacity(graph.len() * 32),
        };
        let mut prev: Option<(&str, &str)> = None;
        for (s, p, o) in graph.triples() {
            match prev {
                Some((ps, pp)) if ps == s && pp == p => writer.body.write_all(b", ")?,
                Some((ps, _)) if ps == s => {
                    writer.body.write_all(b" ;\n")?;
                    writer.body.write_all(self.config.indentation.as_bytes())?;
                    writer.predicate(p)?;
                }
                _ => {
                    if prev.is_some() {
                        writer.body.write_all(b" .\n\n")?;
                    }
                    writer.resource(s)?;
                    writer.body.write_all(b" ")?;
                    writer.predicate(p)?;
                }
            }
            writer.term(o)?;
            prev = Some((s, p));
        }
        if prev.is_some() {
            writer.body.write_all(b" .\n")?;
        }
        log::trace!("turtle: {} prefixes used", writer.used.len());
        writer.finish()
    }
}

struct Writer<'a> {
    ns: &'a NamespaceRegistry,
    config: &'a TurtleConfig,
    used: HashSet<&'a str>,
    body: Vec<u8>,
}

impl<'a> Writer<'a> {
    fn resource(&mut self, id: &str) -> io::Result<()> {
        if id.starts_with("_:") {
            return self.body.write_all(id.as_bytes());
        }
        let ns: &'a NamespaceRegistry = self.ns;
        if self.config.prefixes {
            if let Some((prefix, local)) = ns.split(id) {
                if !local.starts_with(['.', '-']) && !local.ends_with('.') {
                    self.used.insert(prefix);
                    return write!(self.body, "{prefix}:{local}");
                }
            }
        }
        write!(self.body, "<{id}>")
    }

    fn predicate(&mut self, p: &str) -> io::Result<()> {
        if p == rdf::type_ {
            self.body.write_all(b"a ")
        } else {
            self.resource(p)?;
            self.body.write_all(b" ")
        }
    }

    fn term(&mut self, t: &Term) -> io::Result<()> {
        match t {
            Term::Iri(id) | Term::BlankNode(id) => self.resource(id),
            Term::Literal(lit) => {
                self.body.write_all(b"\"")?;
                quoted_string(&mut self.body, lit.value().as_bytes())?;
                self.body.write_all(b"\"")?;
                if let Some(lang) = lit.lang() {
                    write!(self.body, "@{lang}")
                } else if let Some(dt) = lit.datatype().filter(|dt| *dt != xsd::string) {
                    self.body.write_all(b"^^")?;
                    self.resource(dt)
                } else {
                    Ok(())
                }
            }
        }
    }

    fn finish(self) -> Result<Vec<u8>, SerialiseError> {
        let mut ret = Vec::with_capacity(self.body.len() + 64 * self.used.len());
        for (prefix, ns) in self.ns.iter().filter(|(prefix, _)| self.used.contains(prefix)) {
            writeln!(ret, "@prefix {prefix}: <{ns}> .")?;
        }
        if !ret.is_empty() {
            ret.push(b'\n');
        }
        ret.extend_from_slice(&self.body);
        Ok(ret)
    }
}
