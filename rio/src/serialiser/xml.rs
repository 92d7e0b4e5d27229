//! Serialiser for the [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/) concrete syntax of RDF,
//! based on [`rio_xml`].
use rio_api::formatter::TriplesFormatter;
use rio_api::model::{BlankNode, Literal as RioLiteral, NamedNode, Subject, Term as RioTerm, Triple as RioTriple};
use rio_xml::RdfXmlFormatter;
use trove_graph::format::{GraphSerialiser, SerialiseError};
use trove_graph::{Graph, Term};
use trove_term::vocab::xsd;

/// RDF/XML serialiser configuration.
#[derive(Clone, Debug, Default)]
pub struct RdfXmlConfig {
    indentation: usize,
}

impl RdfXmlConfig {
    /// Size of the indentation to use in the serialisation.
    /// (defaults to 0, meaning no indentation nor linebreaks)
    pub fn indentation(&self) -> usize {
        self.indentation
    }

    /// Build a new default [`RdfXmlConfig`]
    pub fn new() -> Self {
        Default::default()
    }

    /// Transform an [`RdfXmlConfig`] by setting the [`indentation`](RdfXmlConfig::indentation).
    pub fn with_indentation(mut self, i: usize) -> Self {
        self.indentation = i;
        self
    }
}

/// RDF/XML serialiser.
#[derive(Clone, Debug, Default)]
pub struct RdfXmlSerialiser {
    config: RdfXmlConfig,
}

impl RdfXmlSerialiser {
    /// Build a new RDF/XML serialiser with the given config.
    pub fn new_with_config(config: RdfXmlConfig) -> Self {
        RdfXmlSerialiser { config }
    }

    /// Borrow this serialiser's configuration.
    pub fn config(&self) -> &RdfXmlConfig {
        &self.config
    }
}

impl GraphSerialiser for RdfXmlSerialiser {
    fn serialise(&self, graph: &Graph) -> Result<Vec<u8>, SerialiseError> {
        let mut tf = if self.config.indentation > 0 {
            RdfXmlFormatter::with_indentation(Vec::new(), self.config.indentation)?
        } else {
            RdfXmlFormatter::new(Vec::new())?
        };
        for (s, p, o) in graph.triples() {
            tf.format(&rio_triple(s, p, o))?;
        }
        Ok(tf.finish()?)
    }
}

fn rio_triple<'a>(s: &'a str, p: &'a str, o: &'a Term) -> RioTriple<'a> {
    let subject = match s.strip_prefix("_:") {
        Some(id) => Subject::BlankNode(BlankNode { id }),
        None => Subject::NamedNode(NamedNode { iri: s }),
    };
    let object = match o {
        Term::Iri(iri) => RioTerm::NamedNode(NamedNode { iri }),
        Term::BlankNode(id) => RioTerm::BlankNode(BlankNode { id: &id[2..] }),
        Term::Literal(lit) => RioTerm::Literal(match (lit.lang(), lit.datatype()) {
            (Some(language), _) => RioLiteral::LanguageTaggedString {
                value: lit.value(),
                language,
            },
            (None, Some(dt)) if dt != xsd::string => RioLiteral::Typed {
                value: lit.value(),
                datatype: NamedNode { iri: dt },
            },
            _ => RioLiteral::Simple { value: lit.value() },
        }),
    };
    RioTriple {
        subject,
        predicate: NamedNode { iri: p },
        object,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::RdfXmlParser;
    use trove_graph::format::GraphParser;
    use trove_graph::Literal;

    #[test]
    fn round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let mut g = Graph::new();
        let me = "http://example.org/people#me";
        g.add_type(me, &["foaf:Person"])?;
        g.add(me, "foaf:name", Literal::new_lang("Pierre", "fr"))?;
        g.add_resource(me, "foaf:knows", "_:b1")?;
        g.add("_:b1", "foaf:age", 42)?;

        let data = RdfXmlSerialiser::new_with_config(RdfXmlConfig::new().with_indentation(2))
            .serialise(&g)?;
        let txt = String::from_utf8(data.clone())?;
        assert!(txt.contains("rdf:about=\"http://example.org/people#me\""));

        let mut g2 = Graph::new();
        assert_eq!(RdfXmlParser.parse(&mut g2, &data, None)?, 4);
        assert!(g2.is_a(me, "foaf:Person")?);
        assert_eq!(g2.get_literal(me, "foaf:name", Some("fr"))?.map(|l| l.value().to_string()), Some("Pierre".into()));
        let friend = g2.get(me, "foaf:knows", &trove_graph::Filter::any())?.and_then(|n| n.into_resource());
        let friend = friend.ok_or("no friend")?;
        assert!(friend.is_blank_node());
        assert_eq!(g2.get_literal(&friend, "foaf:age", None)?.and_then(|l| l.as_i64()), Some(42));
        Ok(())
    }
}
