//! Adapters turning [RIO](https://docs.rs/rio_api/) parsers into [`GraphParser`]s.
//!
//! Rio hands over triples one at a time, with borrowed terms;
//! they are copied into the graph as they come,
//! and every blank node label is mapped to a fresh identifier of the graph.
use rio_api::model::{Literal as RioLiteral, Subject, Term as RioTerm, Triple as RioTriple};
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesParser as RioNTParser, TurtleParser as RioTurtleParser};
use rio_xml::RdfXmlParser as RioRdfXmlParser;
use std::collections::HashMap;
use std::error::Error;
use trove_graph::format::{GraphParser, ParseError};
use trove_graph::{Graph, GraphError, Literal, Term};

/// N-Triples parser based on RIO.
///
/// N-Triples has no relative IRIs, so the base is ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct NTriplesParser;

impl GraphParser for NTriplesParser {
    fn parse(&self, graph: &mut Graph, data: &[u8], _base: Option<&str>) -> Result<usize, ParseError> {
        add_triples(RioNTParser::new(data), graph)
    }
}

/// Turtle parser based on RIO.
#[derive(Clone, Copy, Debug, Default)]
pub struct TurtleParser;

impl GraphParser for TurtleParser {
    fn parse(&self, graph: &mut Graph, data: &[u8], base: Option<&str>) -> Result<usize, ParseError> {
        add_triples(RioTurtleParser::new(data, parse_base(base)?), graph)
    }
}

/// RDF/XML parser based on RIO.
#[derive(Clone, Copy, Debug, Default)]
pub struct RdfXmlParser;

impl GraphParser for RdfXmlParser {
    fn parse(&self, graph: &mut Graph, data: &[u8], base: Option<&str>) -> Result<usize, ParseError> {
        add_triples(RioRdfXmlParser::new(data, parse_base(base)?), graph)
    }
}

fn parse_base(base: Option<&str>) -> Result<Option<oxiri::Iri<String>>, ParseError> {
    base.map(|b| {
        oxiri::Iri::parse(b.to_string())
            .map_err(|e| ParseError::from(GraphError::InvalidIri(format!("{b}: {e}"))))
    })
    .transpose()
}

/// Feed every triple produced by `parser` into `graph`.
fn add_triples<P>(mut parser: P, graph: &mut Graph) -> Result<usize, ParseError>
where
    P: TriplesParser,
    P::Error: Error,
{
    let mut sink = Sink::new(graph);
    parser
        .parse_all(&mut |t| -> Result<(), SinkError<P::Error>> { sink.triple(&t) })
        .map_err(|e| match e {
            SinkError::Source(e) => ParseError::Syntax(e.to_string()),
            SinkError::Graph(e) => e,
        })?;
    Ok(sink.count)
}

/// Receives Rio triples on behalf of a [`Graph`].
pub(crate) struct Sink<'g> {
    graph: &'g mut Graph,
    bnodes: HashMap<String, String>,
    count: usize,
}

impl<'g> Sink<'g> {
    pub(crate) fn new(graph: &'g mut Graph) -> Self {
        Sink {
            graph,
            bnodes: HashMap::new(),
            count: 0,
        }
    }

    /// The graph identifier standing for the blank node `label` of the parsed data.
    pub(crate) fn bnode(&mut self, label: &str) -> String {
        let graph = &mut self.graph;
        self.bnodes
            .entry(label.to_string())
            .or_insert_with(|| graph.new_bnode_id())
            .clone()
    }

    fn triple<E>(&mut self, t: &RioTriple) -> Result<(), SinkError<E>> {
        let s = match t.subject {
            Subject::NamedNode(n) => n.iri.to_string(),
            Subject::BlankNode(b) => self.bnode(b.id),
            Subject::Triple(_) => return Err(unsupported("quoted triple as subject")),
        };
        let o = match t.object {
            RioTerm::NamedNode(n) => Term::iri(n.iri),
            RioTerm::BlankNode(b) => Term::bnode(&self.bnode(b.id)),
            RioTerm::Literal(RioLiteral::Simple { value }) => Term::from(value),
            RioTerm::Literal(RioLiteral::LanguageTaggedString { value, language }) => {
                Literal::new_lang(value, language).into()
            }
            RioTerm::Literal(RioLiteral::Typed { value, datatype }) => {
                Literal::new_dt(value, datatype.iri).into()
            }
            RioTerm::Triple(_) => return Err(unsupported("quoted triple as object")),
        };
        self.add(&s, t.predicate.iri, o).map_err(SinkError::Graph)
    }

    /// Add one triple, counting it.
    pub(crate) fn add(&mut self, s: &str, p: &str, o: Term) -> Result<(), ParseError> {
        self.graph.add(s, p, o)?;
        self.count += 1;
        Ok(())
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }
}

fn unsupported<E>(what: &str) -> SinkError<E> {
    SinkError::Graph(ParseError::Unsupported(what.to_string()))
}

/// Rio requires the error type of the triple handler
/// to implement `From` the error type of the parser.
enum SinkError<E> {
    Source(E),
    Graph(ParseError),
}

impl<E: Error> From<E> for SinkError<E> {
    fn from(other: E) -> Self {
        SinkError::Source(other)
    }
}
