//! Parse XML-formatted SPARQL results.
//!
//! The parser is lenient: namespaces are ignored, unknown elements are skipped,
//! and only ill-formed XML or a document with neither `<results>` nor `<boolean>`
//! is an error.
use super::{Row, SparqlResult};
use crate::Error;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use trove_term::{Descriptor, Term};

pub fn parse_results_document(data: &[u8]) -> Result<SparqlResult, Error> {
    let mut reader = Reader::from_reader(data);
    let mut buf = Vec::new();
    let mut parser = SparqlXmlParser::default();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => parser.open(&e, false)?,
            Event::Empty(e) => parser.open(&e, true)?,
            Event::End(_) => parser.close()?,
            Event::Text(e) => parser.text(&e.unescape()?),
            Event::CData(e) => parser.text(&String::from_utf8_lossy(&e)),
            Event::Eof => break,
            _ => (),
        }
        buf.clear();
    }
    parser.finish()
}

#[derive(Default)]
struct SparqlXmlParser {
    /// Local names of the open elements
    path: Vec<String>,
    fields: Vec<String>,
    rows: Vec<Row>,
    has_results: bool,
    boolean: Option<bool>,
    boolean_text: Option<String>,
    row: Option<Row>,
    binding: Option<Binding>,
}

struct Binding {
    name: String,
    term: Option<PendingTerm>,
    done: bool,
}

struct PendingTerm {
    kind: String,
    lang: Option<String>,
    datatype: Option<String>,
    value: String,
    depth: usize,
}

impl SparqlXmlParser {
    fn open(&mut self, e: &BytesStart<'_>, empty: bool) -> Result<(), Error> {
        let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
        let in_head = self.path.last().is_some_and(|p| p == "head");
        if !empty {
            self.path.push(name.clone());
        }
        let depth = self.path.len();

        if let Some(binding) = &mut self.binding {
            // the first child of a binding is its term, anything else is ignored
            if !binding.done && binding.term.is_none() {
                binding.term = Some(PendingTerm {
                    kind: name,
                    lang: attribute(e, "lang")?,
                    datatype: attribute(e, "datatype")?,
                    value: String::new(),
                    depth,
                });
                if empty {
                    self.end_term()?;
                }
            }
            return Ok(());
        }

        match name.as_str() {
            "variable" if in_head => {
                if let Some(var) = attribute(e, "name")? {
                    self.fields.push(var);
                }
            }
            "boolean" if self.boolean.is_none() => {
                if empty {
                    self.boolean = Some(false);
                } else {
                    self.boolean_text = Some(String::new());
                }
            }
            "results" => self.has_results = true,
            "result" if self.has_results && empty => self.rows.push(Row::new()),
            "result" if self.has_results => self.row = Some(Row::new()),
            "binding" if self.row.is_some() && !empty => {
                self.binding = attribute(e, "name")?.map(|name| Binding {
                    name,
                    term: None,
                    done: false,
                });
            }
            "sparql" | "head" | "link" | "variable" | "boolean" | "result" | "binding" => (),
            other => log::debug!("ignoring unknown element <{other}> in SPARQL results"),
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        let depth = self.path.len();
        let name = self.path.pop().unwrap_or_default();
        let closes_term = self
            .binding
            .as_ref()
            .and_then(|b| b.term.as_ref())
            .is_some_and(|t| t.depth == depth);
        if closes_term {
            return self.end_term();
        }
        match name.as_str() {
            "binding" if self.binding.is_some() => self.binding = None,
            "result" => {
                if let Some(row) = self.row.take() {
                    self.rows.push(row);
                }
            }
            "boolean" => {
                if let Some(txt) = self.boolean_text.take() {
                    self.boolean = Some(txt.trim() == "true");
                }
            }
            _ => (),
        }
        Ok(())
    }

    fn text(&mut self, txt: &str) {
        if let Some(term) = self.binding.as_mut().and_then(|b| b.term.as_mut()) {
            term.value.push_str(txt);
        } else if let Some(buf) = &mut self.boolean_text {
            buf.push_str(txt);
        }
    }

    fn end_term(&mut self) -> Result<(), Error> {
        let Some(binding) = &mut self.binding else {
            return Ok(());
        };
        binding.done = true;
        let Some(pending) = binding.term.take() else {
            return Ok(());
        };
        let descriptor = Descriptor {
            kind: pending.kind.into(),
            value: pending.value.into(),
            lang: pending.lang.map(Into::into),
            datatype: pending.datatype.map(Into::into),
        };
        let term = Term::try_from(descriptor)?;
        if let Some(row) = &mut self.row {
            row.insert(binding.name.clone(), term);
        }
        Ok(())
    }

    fn finish(self) -> Result<SparqlResult, Error> {
        if let Some(boolean) = self.boolean {
            log::debug!("XML results document is a boolean");
            Ok(SparqlResult::Boolean(boolean))
        } else if self.has_results {
            log::debug!("XML results document has {} rows", self.rows.len());
            Ok(SparqlResult::bindings(self.fields, self.rows))
        } else {
            Err(Error::UnparsableResult(
                "XML document has neither <results> nor <boolean>".into(),
            ))
        }
    }
}

/// The unescaped value of the attribute of `e` whose local name is `local_name`.
fn attribute(e: &BytesStart<'_>, local_name: &str) -> Result<Option<String>, Error> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.local_name().as_ref() == local_name.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
