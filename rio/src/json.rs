//! Parser and serialiser for [RDF/JSON](https://www.w3.org/TR/rdf-json/):
//! `{ subject: { property: [ {type, value, lang?, datatype?}, ... ] } }`.
use crate::parser::Sink;
use indexmap::IndexMap;
use trove_graph::format::{GraphParser, GraphSerialiser, ParseError, SerialiseError};
use trove_graph::{Graph, GraphError, Term};
use trove_term::Descriptor;

type RdfJson = IndexMap<String, IndexMap<String, Vec<Descriptor>>>;

/// RDF/JSON parser.
///
/// Relative IRIs are not resolved, so the base is ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct RdfJsonParser;

impl GraphParser for RdfJsonParser {
    fn parse(&self, graph: &mut Graph, data: &[u8], _base: Option<&str>) -> Result<usize, ParseError> {
        let doc: RdfJson =
            serde_json::from_slice(data).map_err(|e| ParseError::Syntax(e.to_string()))?;
        let mut sink = Sink::new(graph);
        for (s, props) in doc {
            let s = match s.strip_prefix("_:") {
                Some(label) => sink.bnode(label),
                None => s.clone(),
            };
            for (p, values) in props {
                for d in values {
                    let o = match Term::try_from(d).map_err(GraphError::from)? {
                        Term::BlankNode(id) => Term::bnode(&sink.bnode(&id[2..])),
                        other => other,
                    };
                    sink.add(&s, &p, o)?;
                }
            }
        }
        Ok(sink.count())
    }
}

/// RDF/JSON serialiser.
#[derive(Clone, Copy, Debug, Default)]
pub struct RdfJsonSerialiser {
    pretty: bool,
}

impl RdfJsonSerialiser {
    /// A serialiser indenting its output if `pretty` is true.
    pub fn new(pretty: bool) -> Self {
        RdfJsonSerialiser { pretty }
    }
}

impl GraphSerialiser for RdfJsonSerialiser {
    fn serialise(&self, graph: &Graph) -> Result<Vec<u8>, SerialiseError> {
        let json = graph.to_rdf_json();
        let ret = if self.pretty {
            serde_json::to_vec_pretty(&json)
        } else {
            serde_json::to_vec(&json)
        };
        ret.map_err(|e| SerialiseError::Io(e.into()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use trove_graph::{Filter, Literal};

    const DATA: &str = r#"{
        "http://example.org/people#alice": {
            "http://xmlns.com/foaf/0.1/name": [
                {"type": "literal", "value": "Alice", "lang": "en"},
                {"type": "literal", "value": "42", "datatype": "http://www.w3.org/2001/XMLSchema#integer"}
            ],
            "http://xmlns.com/foaf/0.1/knows": [{"type": "bnode", "value": "_:x"}]
        },
        "_:x": {
            "http://xmlns.com/foaf/0.1/name": [{"type": "literal", "value": "Carol"}]
        }
    }"#;

    #[test]
    fn parse() -> Result<(), Box<dyn std::error::Error>> {
        let mut g = Graph::new();
        assert_eq!(RdfJsonParser.parse(&mut g, DATA.as_bytes(), None)?, 4);
        let alice = "http://example.org/people#alice";
        assert_eq!(
            g.all_literals(alice, "foaf:name", None)?,
            vec![
                Literal::new_lang("Alice", "en"),
                Literal::new_dt("42", "http://www.w3.org/2001/XMLSchema#integer")
            ]
        );
        let carol = g.get(alice, "foaf:knows", &Filter::any())?.and_then(|n| n.into_resource());
        let carol = carol.ok_or("no bnode")?;
        assert_eq!(carol.id(), "_:eid1");
        assert_eq!(g.join(&carol, "foaf:name", "", None)?, "Carol");
        Ok(())
    }

    #[test]
    fn parse_errors() {
        let mut g = Graph::new();
        assert!(matches!(
            RdfJsonParser.parse(&mut g, b"[1, 2]", None),
            Err(ParseError::Syntax(_))
        ));
        let bad_type = br#"{"tag:s": {"tag:p": [{"type": "triple", "value": "x"}]}}"#;
        assert!(matches!(
            RdfJsonParser.parse(&mut g, bad_type, None),
            Err(ParseError::Graph(_))
        ));
    }

    #[test]
    fn round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let mut g = Graph::new();
        RdfJsonParser.parse(&mut g, DATA.as_bytes(), None)?;
        let data = RdfJsonSerialiser::new(true).serialise(&g)?;
        let reparsed: serde_json::Value = serde_json::from_slice(&data)?;
        assert_eq!(reparsed, g.to_rdf_json());
        assert_eq!(reparsed["_:eid1"]["http://xmlns.com/foaf/0.1/name"][0]["value"], "Carol");
        Ok(())
    }
}
