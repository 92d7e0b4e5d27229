//! I define [`SparqlResult`], the outcome of a SPARQL query that is not a graph:
//! a boolean for `ASK` queries, or a table of bindings for `SELECT` queries.
use crate::Error;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;
use trove_graph::loader::bare_content_type;
use trove_term::dump::escape_html;
use trove_term::{Descriptor, NamespaceRegistry, Term};

mod xml_parser;

/// The MIME type of [SPARQL results in JSON](https://www.w3.org/TR/sparql11-results-json/).
pub const JSON_MIME: &str = "application/sparql-results+json";
/// The MIME type of [SPARQL results in XML](https://www.w3.org/TR/rdf-sparql-XMLres/).
pub const XML_MIME: &str = "application/sparql-results+xml";

/// One solution of a `SELECT` query: the terms bound to some of its variables.
///
/// Unbound variables are absent from the map.
pub type Row = IndexMap<String, Term>;

/// The result of an `ASK` or `SELECT` query.
#[derive(Clone, Debug, PartialEq)]
pub enum SparqlResult {
    /// The answer to an `ASK` query
    Boolean(bool),
    /// The solutions of a `SELECT` query
    Bindings {
        /// The projected variables, without their `?`
        fields: Vec<String>,
        /// One row per solution
        rows: Vec<Row>,
    },
}

impl SparqlResult {
    /// Parse a result document in the [JSON format](https://www.w3.org/TR/sparql11-results-json/).
    pub fn from_json(data: &[u8]) -> Result<Self, Error> {
        let doc: JsonDocument = serde_json::from_slice(data)?;
        if let Some(boolean) = doc.boolean {
            log::debug!("JSON results document is a boolean");
            return Ok(SparqlResult::Boolean(boolean));
        }
        let Some(results) = doc.results else {
            return Err(Error::UnparsableResult(
                "JSON document has neither 'boolean' nor 'results'".into(),
            ));
        };
        let rows = results
            .bindings
            .into_iter()
            .map(|binding| {
                binding
                    .into_iter()
                    .map(|(var, d)| Ok((var, Term::try_from(d)?)))
                    .collect::<Result<Row, Error>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("JSON results document has {} rows", rows.len());
        Ok(Self::bindings(doc.head.vars, rows))
    }

    /// Parse a result document in the [XML format](https://www.w3.org/TR/rdf-sparql-XMLres/).
    ///
    /// Element names are matched on their local part,
    /// and elements that play no role in the format are ignored.
    pub fn from_xml(data: &[u8]) -> Result<Self, Error> {
        xml_parser::parse_results_document(data)
    }

    /// Parse a result document according to its MIME type,
    /// which must be [`JSON_MIME`] or [`XML_MIME`] (parameters are ignored).
    pub fn parse(data: &[u8], mime: &str) -> Result<Self, Error> {
        match bare_content_type(mime).as_str() {
            JSON_MIME => Self::from_json(data),
            XML_MIME => Self::from_xml(data),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }

    /// Build a bindings result.
    /// If no `fields` are given, they are the variables of the rows, in order of appearance.
    pub(crate) fn bindings(mut fields: Vec<String>, rows: Vec<Row>) -> Self {
        if fields.is_empty() {
            for var in rows.iter().flat_map(|row| row.keys()) {
                if !fields.contains(var) {
                    fields.push(var.clone());
                }
            }
        }
        SparqlResult::Bindings { fields, rows }
    }

    /// Whether this is the result of an `ASK` query.
    pub fn is_boolean(&self) -> bool {
        matches!(self, SparqlResult::Boolean(_))
    }

    /// The answer of an `ASK` query, `None` for bindings.
    pub fn boolean(&self) -> Option<bool> {
        match self {
            SparqlResult::Boolean(b) => Some(*b),
            SparqlResult::Bindings { .. } => None,
        }
    }

    /// Whether this is a positive answer to an `ASK` query.
    pub fn is_true(&self) -> bool {
        self.boolean() == Some(true)
    }

    /// Whether this is a negative answer to an `ASK` query.
    pub fn is_false(&self) -> bool {
        self.boolean() == Some(false)
    }

    /// The variables of a `SELECT` result (empty for `ASK`).
    pub fn fields(&self) -> &[String] {
        match self {
            SparqlResult::Boolean(_) => &[],
            SparqlResult::Bindings { fields, .. } => fields,
        }
    }

    /// The number of [`fields`](Self::fields).
    pub fn num_fields(&self) -> usize {
        self.fields().len()
    }

    /// The solutions of a `SELECT` result (empty for `ASK`).
    pub fn rows(&self) -> &[Row] {
        match self {
            SparqlResult::Boolean(_) => &[],
            SparqlResult::Bindings { rows, .. } => rows,
        }
    }

    /// The number of [`rows`](Self::rows).
    pub fn num_rows(&self) -> usize {
        self.rows().len()
    }

    /// Iterate over the [`rows`](Self::rows).
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows().iter()
    }

    /// Pretty-print this result, as an HTML fragment or plain text,
    /// with IRIs shortened through the default namespaces.
    pub fn dump(&self, html: bool) -> String {
        self.dump_with(html, &NamespaceRegistry::new())
    }

    /// Pretty-print this result, with IRIs shortened through `ns`.
    ///
    /// Bindings are rendered as a table with one column per field.
    pub fn dump_with(&self, html: bool, ns: &NamespaceRegistry) -> String {
        match self {
            SparqlResult::Boolean(b) if html => {
                format!("<p>Result: <span style='font-weight:bold'>{b}</span></p>")
            }
            SparqlResult::Boolean(b) => format!("Result: {b}"),
            SparqlResult::Bindings { fields, rows } => {
                let cells: Vec<Vec<String>> = rows
                    .iter()
                    .map(|row| {
                        fields
                            .iter()
                            .map(|f| row.get(f).map(|t| t.dump_value(html, ns)).unwrap_or_default())
                            .collect()
                    })
                    .collect();
                if html {
                    dump_html_table(fields, &cells)
                } else {
                    dump_text_table(fields, &cells)
                }
            }
        }
    }
}

fn dump_html_table(fields: &[String], cells: &[Vec<String>]) -> String {
    const CELL: &str = "border:solid 1px #000;padding:4px;vertical-align:top";
    let mut html = String::from("<table class='sparql-results' style='border-collapse:collapse'><tr>");
    for f in fields {
        html.push_str(&format!(
            "<th style='{CELL};background-color:#eee;'>?{}</th>",
            escape_html(f)
        ));
    }
    html.push_str("</tr>");
    for row in cells {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td style='{CELL}'>{cell}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

fn dump_text_table(fields: &[String], cells: &[Vec<String>]) -> String {
    let widths: Vec<usize> = fields
        .iter()
        .enumerate()
        .map(|(i, f)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .fold(f.chars().count() + 1, usize::max)
        })
        .collect();
    let hr = widths.iter().fold(String::from("+"), |mut hr, w| {
        hr.push_str(&"-".repeat(w + 2));
        hr.push('+');
        hr
    });
    let mut text = format!("{hr}\n|");
    for (f, w) in fields.iter().zip(&widths) {
        text.push_str(&format!(" {:<w$} |", format!("?{f}")));
    }
    text.push_str(&format!("\n{hr}\n"));
    for row in cells {
        text.push('|');
        for (cell, w) in row.iter().zip(&widths) {
            text.push_str(&format!(" {cell:<w$} |"));
        }
        text.push('\n');
    }
    text.push_str(&hr);
    text.push('\n');
    text
}

impl fmt::Display for SparqlResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SparqlResult::Boolean(b) => write!(f, "{b}"),
            SparqlResult::Bindings { .. } => f.write_str(&self.dump(false)),
        }
    }
}

impl IntoIterator for SparqlResult {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            SparqlResult::Boolean(_) => Vec::new().into_iter(),
            SparqlResult::Bindings { rows, .. } => rows.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a SparqlResult {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Deserialize)]
struct JsonDocument {
    #[serde(default)]
    head: JsonHead,
    boolean: Option<bool>,
    results: Option<JsonResults>,
}

#[derive(Debug, Default, Deserialize)]
struct JsonHead {
    #[serde(default)]
    vars: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct JsonResults {
    #[serde(default)]
    bindings: Vec<IndexMap<String, Descriptor>>,
}
