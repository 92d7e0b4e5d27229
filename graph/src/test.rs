//! Shared fixtures, and tests of [`Graph`] as a whole.
use super::*;
use crate::format::{ParseError, SerialiseError};
use std::collections::HashMap;
use test_case::test_case;
use trove_term::vocab::{dcterms, foaf, rdf, rdfs, xsd};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub const NS: &str = "http://example.org/";
pub const PEOPLE: &str = "http://example.org/people";
pub const PEOPLE_TTL: &str = "http://example.org/people.ttl";
pub const PEOPLE_NT: &str = "http://example.org/people.nt";
pub const MYSTERY: &str = "http://example.org/mystery.dat";
pub const BLANK: &str = "http://example.org/blank.dat";
pub const FAIL: &str = "http://example.org/not_there";
pub const SUBDIR: &str = "http://example.org/subdir";

/// Number of triples in `people.nt`
pub const PEOPLE_NT_LEN: usize = 4;

const ALICE: &str = "http://example.org/people#alice";
const BOB: &str = "http://example.org/people#bob";

pub fn make_loader() -> LocalLoader {
    LocalLoader::new(vec![(
        NS.into(),
        std::path::Path::new("test").canonicalize().unwrap(),
    )])
    .unwrap()
}

/// A parser for a whitespace-separated subset of N-Triples
/// (literals can not contain spaces).
struct LineParser;

impl LineParser {
    fn term(
        tok: &str,
        graph: &mut Graph,
        bnodes: &mut HashMap<String, String>,
    ) -> Result<Term, ParseError> {
        if let Some(iri) = tok.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
            Ok(Term::iri(iri))
        } else if let Some(label) = tok.strip_prefix("_:") {
            let id = bnodes
                .entry(label.to_string())
                .or_insert_with(|| graph.new_bnode_id());
            Ok(Term::bnode(id))
        } else if tok.len() >= 2 && tok.starts_with('"') && tok.ends_with('"') {
            Ok(Term::from(&tok[1..tok.len() - 1]))
        } else {
            Err(ParseError::Syntax(format!("unexpected token {tok}")))
        }
    }
}

impl GraphParser for LineParser {
    fn parse(&self, graph: &mut Graph, data: &[u8], _base: Option<&str>) -> Result<usize, ParseError> {
        let text = std::str::from_utf8(data).map_err(|e| ParseError::Syntax(e.to_string()))?;
        let mut bnodes = HashMap::new();
        let mut count = 0;
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let parts: Vec<&str> = line.split_whitespace().collect();
            let [s, p, o, "."] = parts[..] else {
                return Err(ParseError::Syntax(format!("bad line {line}")));
            };
            let s = Self::term(s, graph, &mut bnodes)?;
            let p = Self::term(p, graph, &mut bnodes)?;
            let o = Self::term(o, graph, &mut bnodes)?;
            graph.add(s.value(), p.value(), o)?;
            count += 1;
        }
        Ok(count)
    }
}

struct LineSerialiser;

impl GraphSerialiser for LineSerialiser {
    fn serialise(&self, graph: &Graph) -> Result<Vec<u8>, SerialiseError> {
        let mut ret = String::new();
        for (s, p, o) in graph.triples() {
            ret.push_str(&format!("{} <{p}> {} .\n", Term::resource(s), o));
        }
        Ok(ret.into_bytes())
    }
}

fn make_formats() -> FormatRegistry {
    FormatRegistry::new().with(
        Format::new("ntriples", "N-Triples")
            .with_mime_type("application/n-triples", 1.0)
            .with_extension("nt")
            .with_parser(LineParser)
            .with_serialiser(LineSerialiser),
    )
}

fn make_graph() -> GraphResult<Graph> {
    let mut g = Graph::with_uri("http://example.org/people");
    let alice = g.resource(ALICE, &["foaf:Person"])?;
    g.add(&alice, "foaf:name", "Alice")?;
    g.add(&alice, "foaf:name", Literal::new_lang("Alicia", "es"))?;
    g.add_resource(&alice, "foaf:knows", BOB)?;
    g.add_literal(&alice, "foaf:age", 42)?;
    g.add_type(BOB, &["foaf:Person"])?;
    g.add(BOB, "rdfs:label", Literal::new_lang("Bob", "en"))?;
    Ok(g)
}

#[test]
fn index_symmetry() -> TestResult {
    crate::test_setup();
    let mut g = make_graph()?;
    assert!(g.has_property(BOB, "^foaf:knows")?);
    let knowers = g.all(BOB, "^foaf:knows", &Filter::any())?;
    assert_eq!(knowers.len(), 1);
    assert_eq!(knowers[0].display_value(), ALICE);

    assert_eq!(g.delete(ALICE, "foaf:knows", Some(&Term::iri(BOB)))?, 1);
    assert!(!g.has_property(BOB, "^foaf:knows")?);
    assert!(!g.has_property(ALICE, "foaf:knows")?);
    assert!(g.has_property(ALICE, "foaf:name")?);
    Ok(())
}

#[test]
fn delete_everything_removes_subject() -> TestResult {
    let mut g = make_graph()?;
    let before = g.len();
    assert_eq!(g.delete(ALICE, "foaf:name", None)?, 2);
    assert_eq!(g.len(), before - 2);
    let props: Vec<String> = g.property_uris(ALICE)?.iter().map(|p| p.to_string()).collect();
    for p in props {
        g.delete(ALICE, &p, None)?;
    }
    assert!(g.subjects().all(|s| s != ALICE));
    assert!(!g.has_property(BOB, "^foaf:knows")?);
    assert_eq!(g.all_of_type("foaf:Person")?.len(), 1);
    Ok(())
}

#[test]
fn add_is_idempotent() -> TestResult {
    let mut g = Graph::new();
    assert!(g.add(ALICE, "foaf:name", "Alice")?);
    assert!(!g.add(ALICE, "foaf:name", "Alice")?);
    assert_eq!(g.len(), 1);
    assert!(g.add(ALICE, "foaf:name", Literal::new_lang("Alice", "en"))?);
    assert!(g.add(ALICE, "foaf:name", Literal::new_dt("Alice", xsd::string))?);
    assert_eq!(g.len(), 3);
    Ok(())
}

#[test]
fn datatypes_are_expanded() -> TestResult {
    let mut g = Graph::new();
    g.add(ALICE, "ex:date", Literal::new_dt("2011-01-01", "xsd:date"))?;
    let lit = g.get_literal(ALICE, "ex:date", None)?.unwrap();
    assert_eq!(lit.datatype(), Some(xsd::date));
    assert!(!g.add(ALICE, "ex:date", Literal::new_dt("2011-01-01", xsd::date))?);
    Ok(())
}

#[test]
fn set_replaces() -> TestResult {
    let mut g = make_graph()?;
    assert!(g.set(ALICE, "foaf:name", "Alison")?);
    let names = g.all_literals(ALICE, "foaf:name", None)?;
    assert_eq!(names, vec![Literal::new("Alison")]);
    Ok(())
}

#[test]
fn bnode_ids_are_unique_and_ordered() -> TestResult {
    let mut g = Graph::new();
    assert_eq!(g.new_bnode_id(), "_:eid1");
    let b = g.new_bnode(&["foaf:Person"])?;
    assert_eq!(b.id(), "_:eid2");
    assert!(b.is_blank_node());
    assert!(g.is_a(&b, "foaf:Person")?);
    assert_eq!(Graph::new().new_bnode_id(), "_:eid1");
    Ok(())
}

#[test]
fn bnode_values_are_indexed_backward() -> TestResult {
    let mut g = Graph::new();
    let b = g.new_bnode(&[])?;
    g.add(ALICE, "foaf:knows", &b)?;
    let back = g.get(&b, "^foaf:knows", &Filter::any())?.unwrap();
    assert_eq!(back.kind(), TermKind::Iri);
    assert_eq!(back.display_value(), ALICE);
    let fwd = g.get(ALICE, "foaf:knows", &Filter::kind(TermKind::BlankNode))?;
    assert_eq!(fwd.and_then(Node::into_resource), Some(b));
    Ok(())
}

#[test]
fn bnode_ids_survive_prefix_registration() -> TestResult {
    let mut g = Graph::new();
    assert!(g.namespaces_mut().register("_", "http://example.org/bnode/").is_err());
    let b = g.new_bnode(&[])?;
    assert_eq!(b.id(), "_:eid1");
    assert!(b.is_blank_node());
    g.add_resource(&b, "foaf:knows", ALICE)?;
    let back = g.all(ALICE, "^foaf:knows", &Filter::any())?;
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].kind(), TermKind::BlankNode);
    assert_eq!(back[0].display_value(), "_:eid1");
    assert!(g.has_property("_:eid1", "foaf:knows")?);
    Ok(())
}

struct Person(Resource);

impl TypedResource for Person {
    fn class() -> ResourceClass {
        ResourceClass::new("Person")
    }
    fn from_resource(resource: Resource) -> Self {
        Person(resource)
    }
}

#[test]
fn type_directed_resources() -> TestResult {
    let mut g = Graph::new();
    g.type_registry_mut().set(foaf::Person, Person::class());
    let alice = g.resource(ALICE, &["foaf:Person"])?;
    assert_eq!(alice.class(), &Person::class());
    let person = alice.typed::<Person>().map_err(|r| r.id().to_string())?;
    assert_eq!(person.0.id(), ALICE);

    let doc = g.resource("http://example.org/doc", &["foaf:Document"])?;
    assert!(doc.class().is_generic());
    assert!(doc.typed::<Person>().is_err());
    Ok(())
}

#[test]
fn class_is_cached() -> TestResult {
    let mut g = Graph::new();
    g.type_registry_mut().set(foaf::Person, Person::class());
    let bob = g.resource(BOB, &[])?;
    assert!(bob.class().is_generic());
    g.set_type(BOB, "foaf:Person")?;
    assert!(g.resource(BOB, &[])?.class().is_generic());
    assert!(g.dump(false).contains(&format!("{BOB} (Resource)")));
    Ok(())
}

#[test_case(""; "empty subject")]
fn empty_subject(s: &str) {
    let mut g = Graph::new();
    assert!(matches!(g.add(s, "foaf:name", "x"), Err(GraphError::InvalidArgument(_))));
    assert!(matches!(g.get(s, "foaf:name", &Filter::any()), Err(GraphError::InvalidArgument(_))));
    assert!(matches!(g.resource(s, &[]), Err(GraphError::InvalidArgument(_))));
}

#[test_case(""; "empty")]
#[test_case("^"; "empty inverse")]
fn empty_property(p: &str) {
    let mut g = Graph::new();
    assert!(matches!(g.add(ALICE, p, "x"), Err(GraphError::InvalidArgument(_))));
    assert!(matches!(g.all(ALICE, p, &Filter::any()), Err(GraphError::InvalidArgument(_))));
}

#[test]
fn invalid_values() {
    let mut g = Graph::new();
    assert!(matches!(g.add(ALICE, "foaf:knows", Term::iri("")), Err(GraphError::InvalidArgument(_))));
    assert!(matches!(g.add(ALICE, "foaf:knows", Term::bnode("")), Err(GraphError::InvalidArgument(_))));
    assert!(matches!(g.add(ALICE, "^foaf:knows", Term::iri(BOB)), Err(GraphError::InvalidArgument(_))));
    assert!(matches!(g.add_type(ALICE, &["foaf:Person", ""]), Err(GraphError::InvalidArgument(_))));
    assert!(g.is_empty());
}

#[test]
fn empty_literal_is_a_value() -> TestResult {
    let mut g = Graph::new();
    assert!(g.add(ALICE, "foaf:nick", "")?);
    assert_eq!(g.get_literal(ALICE, "foaf:nick", None)?.map(|l| l.value().to_string()), Some("".into()));
    Ok(())
}

#[test]
fn missing_optional_value_is_ignored() -> TestResult {
    let mut g = Graph::new();
    assert!(!g.add_optional(ALICE, "foaf:nick", None::<&str>)?);
    assert!(g.is_empty());
    assert!(g.add_optional(ALICE, "foaf:nick", Some("Al"))?);
    assert!(matches!(g.add_optional("", "foaf:nick", None::<&str>), Err(GraphError::InvalidArgument(_))));
    Ok(())
}

#[test]
fn unknown_subjects_yield_nothing() -> TestResult {
    let g = make_graph()?;
    assert_eq!(g.get("ex:nobody", "foaf:name", &Filter::any())?, None);
    assert!(g.all("ex:nobody", "foaf:name", &Filter::any())?.is_empty());
    assert_eq!(g.label("ex:nobody", None)?, None);
    assert_eq!(g.type_of("ex:nobody")?, None);
    assert_eq!(g.dump_resource("ex:nobody", false)?, "");
    Ok(())
}

#[test]
fn filtered_lookups() -> TestResult {
    let g = make_graph()?;
    let first = g.get(ALICE, "foaf:name", &Filter::any())?.unwrap();
    assert_eq!(first.as_literal(), Some(&Literal::new("Alice")));
    assert_eq!(
        g.get_literal(ALICE, "foaf:name", Some("es"))?,
        Some(Literal::new_lang("Alicia", "es"))
    );
    assert_eq!(g.get_literal(ALICE, "foaf:name", Some("de"))?, None);
    assert_eq!(g.get(ALICE, "foaf:knows", &Filter::literal(None))?, None);
    assert_eq!(g.join(ALICE, "foaf:name", " / ", None)?, "Alice / Alicia");
    assert_eq!(g.get_literal(ALICE, "foaf:age", None)?.and_then(|l| l.as_i64()), Some(42));
    Ok(())
}

#[test]
fn get_any_prefers_earlier_properties() -> TestResult {
    let g = make_graph()?;
    let found = g.get_any(ALICE, &["foaf:nick", "foaf:age", "foaf:name"], &Filter::any())?;
    assert_eq!(found.map(|n| n.display_value().to_string()), Some("42".into()));
    Ok(())
}

#[test]
fn properties() -> TestResult {
    let mut g = make_graph()?;
    g.add(ALICE, "http://unshortenable.example/p/", "x")?;
    assert_eq!(
        g.properties(ALICE)?,
        vec!["rdf:type", "foaf:name", "foaf:knows", "foaf:age"]
    );
    assert_eq!(g.property_uris(ALICE)?.len(), 5);
    assert_eq!(g.property_uris(rdfs::label)?.len(), 0);
    Ok(())
}

#[test]
fn resources() -> TestResult {
    let mut g = make_graph()?;
    g.resource("http://example.org/lonely", &[])?;
    let ids: Vec<String> = g.resources().iter().map(|r| r.id().to_string()).collect();
    assert!(ids.contains(&ALICE.to_string()));
    assert!(ids.contains(&BOB.to_string()));
    assert!(ids.contains(&foaf::Person.to_string()));
    assert!(ids.contains(&"http://example.org/lonely".to_string()));
    assert_eq!(ids.len(), 4);
    Ok(())
}

#[test]
fn resources_matching() -> TestResult {
    let g = make_graph()?;
    let found = g.resources_matching("rdf:type", Term::iri("foaf:Person"))?;
    assert_eq!(found.len(), 2);
    let found = g.resources_matching("rdfs:label", "Bob")?;
    assert_eq!(found.iter().map(Resource::id).collect::<Vec<_>>(), vec![BOB]);
    let found = g.resources_matching("^foaf:knows", Term::iri(ALICE))?;
    assert_eq!(found.iter().map(Resource::id).collect::<Vec<_>>(), vec![BOB]);
    Ok(())
}

#[test]
fn labels() -> TestResult {
    let mut g = make_graph()?;
    assert_eq!(g.label(BOB, None)?.map(|l| l.value().to_string()), Some("Bob".into()));
    assert_eq!(g.label(ALICE, Some("es"))?.map(|l| l.value().to_string()), Some("Alicia".into()));
    g.add(ALICE, "skos:prefLabel", "Dr Alice")?;
    assert_eq!(g.label(ALICE, None)?.map(|l| l.value().to_string()), Some("Dr Alice".into()));
    g.add("ex:doc", "dc11:title", "A title")?;
    assert_eq!(g.label("ex:doc", None)?.map(|l| l.value().to_string()), Some("A title".into()));
    Ok(())
}

#[test]
fn labels_need_a_registered_dc_prefix() -> TestResult {
    crate::test_setup();
    let mut g = Graph::new();
    g.add("tag:s", "dc:title", "Hello")?;
    assert_eq!(g.property_uris("tag:s")?, vec!["dc:title"]);
    assert_eq!(g.label("tag:s", None)?, None);

    g.namespaces_mut().register("dc", dcterms::NS)?;
    g.add("tag:t", "dc:title", "Hello")?;
    assert_eq!(g.property_uris("tag:t")?, vec![dcterms::title]);
    assert_eq!(g.label("tag:t", None)?.map(|l| l.value().to_string()), Some("Hello".into()));
    Ok(())
}

#[test]
fn graph_level_helpers() -> TestResult {
    let mut g = Graph::with_uri(PEOPLE);
    assert_eq!(g.label_of_graph(None)?, None);
    g.add(PEOPLE, "dcterms:title", "People")?;
    g.add_resource(PEOPLE, "foaf:primaryTopic", ALICE)?;
    g.add_type(PEOPLE, &["foaf:Document"])?;
    assert_eq!(g.label_of_graph(None)?.map(|l| l.value().to_string()), Some("People".into()));
    assert_eq!(g.primary_topic_of_graph()?.map(|r| r.id().to_string()), Some(ALICE.into()));
    assert_eq!(g.type_of_graph()?.as_deref(), Some("foaf:Document"));
    Ok(())
}

#[test]
fn graph_level_helpers_need_a_uri() {
    let g = Graph::new();
    assert!(matches!(g.label_of_graph(None), Err(GraphError::InvalidArgument(_))));
    assert!(matches!(g.primary_topic_of_graph(), Err(GraphError::InvalidArgument(_))));
    assert!(matches!(g.type_of_graph(), Err(GraphError::InvalidArgument(_))));
}

#[test]
fn primary_topic() -> TestResult {
    let mut g = Graph::new();
    g.add_resource("ex:page", "foaf:primaryTopic", ALICE)?;
    g.add_resource(BOB, "foaf:isPrimaryTopicOf", "ex:other")?;
    assert_eq!(g.primary_topic("ex:page")?.map(|r| r.id().to_string()), Some(ALICE.into()));
    assert_eq!(g.primary_topic("ex:other")?.map(|r| r.id().to_string()), Some(BOB.into()));
    assert_eq!(g.primary_topic(ALICE)?, None);
    Ok(())
}

#[test]
fn types() -> TestResult {
    let mut g = make_graph()?;
    g.add_type(ALICE, &["http://example.org/types/Thing", "foaf:Person"])?;
    assert_eq!(g.type_of(ALICE)?.as_deref(), Some("foaf:Person"));
    assert_eq!(g.types(ALICE)?, vec!["foaf:Person", "http://example.org/types/Thing"]);
    assert!(g.is_a(ALICE, foaf::Person)?);
    assert!(!g.is_a(ALICE, "foaf:Document")?);
    assert_eq!(g.type_as_resource(ALICE)?.map(|r| r.id().to_string()), Some(foaf::Person.into()));

    g.set_type(ALICE, "foaf:Document")?;
    assert_eq!(g.types(ALICE)?, vec!["foaf:Document"]);
    assert!(g.all_of_type("foaf:Person")?.iter().all(|r| r.id() != ALICE));
    Ok(())
}

#[test_case("http://example.org/a/b", "c", "http://example.org/a/c"; "sibling")]
#[test_case("http://example.org/a/b", "../c#x", "http://example.org/c#x"; "parent")]
#[test_case("http://example.org/a/b", "http://other.org/", "http://other.org/"; "absolute")]
fn resolve_resource(base: &str, reference: &str, expected: &str) -> TestResult {
    let mut g = Graph::new();
    assert_eq!(g.resolve_resource(base, reference, &[])?.id(), expected);
    Ok(())
}

#[test]
fn resolve_resource_invalid_base() {
    let mut g = Graph::new();
    assert!(matches!(g.resolve_resource("not a base", "x", &[]), Err(GraphError::InvalidIri(_))));
}

#[test]
fn triples_are_ordered() -> TestResult {
    let g = make_graph()?;
    let triples: Vec<(&str, &str, &Term)> = g.triples().collect();
    assert_eq!(triples.len(), g.len());
    assert_eq!(triples[0], (ALICE, rdf::type_, &Term::iri(foaf::Person)));
    assert_eq!(triples[1].2, &Term::from("Alice"));
    assert_eq!(triples.last().map(|t| t.0), Some(BOB));
    Ok(())
}

#[test]
fn rdf_json() -> TestResult {
    let mut g = Graph::new();
    g.add(ALICE, "foaf:name", Literal::new_lang("Alice", "en"))?;
    g.add_resource(ALICE, "foaf:knows", "_:b1")?;
    let json = g.to_rdf_json();
    assert_eq!(
        json[ALICE][foaf::name],
        serde_json::json!([{"type": "literal", "value": "Alice", "lang": "en"}])
    );
    assert_eq!(
        json[ALICE][foaf::knows],
        serde_json::json!([{"type": "bnode", "value": "_:b1"}])
    );
    assert_eq!(json.as_object().map(|o| o.len()), Some(1));
    Ok(())
}

#[test]
fn dump_text() -> TestResult {
    let mut g = Graph::with_uri("http://example.org/g");
    g.add(ALICE, "foaf:name", "Alice")?;
    g.add_resource(ALICE, "foaf:knows", BOB)?;
    assert_eq!(
        g.dump(false),
        format!(
            "Graph: http://example.org/g\n\
             {ALICE} (Resource)\n  -> foaf:name -> \"Alice\"\n  -> foaf:knows -> {BOB}\n\n"
        )
    );
    Ok(())
}

#[test]
fn dump_html() -> TestResult {
    let g = make_graph()?;
    let html = g.dump_resource(BOB, true)?;
    assert!(html.starts_with(&format!("<div id='{BOB}'")));
    assert!(html.contains("color:green'>rdfs:label</span>"));
    assert!(html.contains("<span style='color:black'>&quot;Bob&quot;@en</span>"));
    assert!(g.dump(true).contains("Graph: http://example.org/people</div>"));
    Ok(())
}

#[test]
fn parse() -> TestResult {
    crate::test_setup();
    let mut g = Graph::new();
    let data = b"<tag:a> <tag:p> _:x .\n_:x <tag:p> \"v\" .\n";
    assert_eq!(g.parse(data, Some("ntriples"), None, &make_formats())?, 2);
    assert_eq!(g.get("tag:a", "tag:p", &Filter::any())?.map(|n| n.display_value().to_string()), Some("_:eid1".into()));
    assert_eq!(g.parse(data, None, None, &make_formats())?, 2);
    assert_eq!(g.len(), 4);
    assert_eq!(g.new_bnode_id(), "_:eid3");
    Ok(())
}

#[test]
fn parse_is_atomic() -> TestResult {
    let mut g = make_graph()?;
    let before = g.to_rdf_json();
    let data = b"<tag:a> <tag:p> _:x .\nthis is not a triple\n";
    let err = g.parse(data, Some("application/n-triples"), None, &make_formats());
    assert!(matches!(err, Err(GraphError::Parse(ParseError::Syntax(_)))));
    assert_eq!(g.to_rdf_json(), before);
    assert_eq!(g.new_bnode_id(), "_:eid1");
    Ok(())
}

#[test]
fn parse_unsupported() {
    let mut g = Graph::new();
    assert!(matches!(
        g.parse(b"", Some("turtle"), None, &make_formats()),
        Err(GraphError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        g.parse(b"  ", None, None, &make_formats()),
        Err(GraphError::UnsupportedFormat(_))
    ));
    let no_parser = FormatRegistry::new().with(Format::new("ntriples", "N-Triples"));
    assert!(matches!(
        g.parse(b"<a> <b> <c> .", Some("ntriples"), None, &no_parser),
        Err(GraphError::UnsupportedFormat(_))
    ));
}

#[test]
fn load() -> TestResult {
    crate::test_setup();
    let mut g = Graph::new();
    assert_eq!(g.load(Some(PEOPLE_NT), None, &make_loader(), &make_formats())?, PEOPLE_NT_LEN);
    assert!(g.is_a("http://example.org/people#alice", "foaf:Person")?);
    Ok(())
}

#[test]
fn load_graph_uri_and_guess() -> TestResult {
    let mut g = Graph::with_uri(MYSTERY);
    assert_eq!(g.load(None, None, &make_loader(), &make_formats())?, PEOPLE_NT_LEN);
    Ok(())
}

#[test]
fn load_explicit_format() -> TestResult {
    let mut g = Graph::new();
    let loader: &dyn Loader = &make_loader();
    assert_eq!(g.load(Some(MYSTERY), Some("nt"), loader, &make_formats())?, PEOPLE_NT_LEN);
    Ok(())
}

#[test]
fn load_failures() {
    let mut g = Graph::new();
    assert!(matches!(
        g.load(None, None, &make_loader(), &make_formats()),
        Err(GraphError::InvalidArgument(_))
    ));
    assert!(matches!(
        g.load(Some(BLANK), None, &make_loader(), &make_formats()),
        Err(GraphError::Loader(LoaderError::CantGuessSyntax(_)))
    ));
    assert!(matches!(
        g.load(Some(FAIL), None, &make_loader(), &make_formats()),
        Err(GraphError::Loader(LoaderError::NotFound(_)))
    ));
    assert!(matches!(
        g.load(Some(PEOPLE_NT), None, &NoLoader(), &make_formats()),
        Err(GraphError::Loader(LoaderError::UnsupportedIri(..)))
    ));
}

#[test]
fn serialise() -> TestResult {
    let mut g = Graph::new();
    g.add_resource("tag:a", "tag:p", "_:b")?;
    let data = g.serialise("ntriples", &make_formats())?;
    assert_eq!(String::from_utf8(data)?, "<tag:a> <tag:p> _:b .\n");
    assert!(matches!(
        g.serialise("rdfxml", &make_formats()),
        Err(GraphError::UnsupportedFormat(_))
    ));
    Ok(())
}

#[test]
fn configuration_is_per_graph() -> TestResult {
    let mut ns = NamespaceRegistry::empty();
    ns.register("ex", "http://example.org/people#")?;
    let mut g1 = Graph::with_config(None, ns, TypeRegistry::new());
    let mut g2 = Graph::new();
    g1.add("ex:alice", "ex:knows", Term::iri("ex:bob"))?;
    assert!(g1.has_property(BOB, "^ex:knows")?);
    assert_eq!(g1.namespaces().len(), 1);
    assert!(g2.namespaces_mut().get("foaf").is_some());
    assert_eq!(g2.type_registry().len(), 0);
    assert_eq!(g2.to_string(), "");
    assert_eq!(Graph::with_uri(PEOPLE).to_string(), PEOPLE);
    Ok(())
}
