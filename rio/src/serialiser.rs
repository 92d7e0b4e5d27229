//! Serialisers for the concrete syntaxes of RDF.
//!
//! [`NTriplesSerialiser`] is defined here,
//! the others live in their own submodule.
use std::io;
use trove_graph::format::{GraphSerialiser, SerialiseError};
use trove_graph::{Graph, Term};
use trove_term::vocab::xsd;

mod turtle;
pub use turtle::*;
mod xml;
pub use xml::*;

/// Serialiser for the [N-Triples](https://www.w3.org/TR/n-triples/) concrete syntax.
#[derive(Clone, Copy, Debug, Default)]
pub struct NTriplesSerialiser;

impl GraphSerialiser for NTriplesSerialiser {
    fn serialise(&self, graph: &Graph) -> Result<Vec<u8>, SerialiseError> {
        let mut w = Vec::with_capacity(graph.len() * 64);
        for (s, p, o) in graph.triples() {
            write_resource(&mut w, s)?;
            w.push(b' ');
            write_resource(&mut w, p)?;
            w.push(b' ');
            write_term(&mut w, o)?;
            w.extend_from_slice(b" .\n");
        }
        Ok(w)
    }
}

/// Write an IRI or a blank node identifier (with its `_:` prefix) in the N-Triples format.
pub fn write_resource<W: io::Write>(w: &mut W, id: &str) -> io::Result<()> {
    if id.starts_with("_:") {
        w.write_all(id.as_bytes())
    } else {
        w.write_all(b"<")?;
        w.write_all(id.as_bytes())?;
        w.write_all(b">")
    }
}

/// Write the given term in the N-Triples format.
pub fn write_term<W: io::Write>(w: &mut W, t: &Term) -> io::Result<()> {
    match t {
        Term::Iri(id) | Term::BlankNode(id) => write_resource(w, id),
        Term::Literal(lit) => {
            w.write_all(b"\"")?;
            quoted_string(w, lit.value().as_bytes())?;
            w.write_all(b"\"")?;
            if let Some(lang) = lit.lang() {
                w.write_all(b"@")?;
                w.write_all(lang.as_bytes())?;
            } else if let Some(dt) = lit.datatype().filter(|dt| *dt != xsd::string) {
                w.write_all(b"^^<")?;
                w.write_all(dt.as_bytes())?;
                w.write_all(b">")?;
            }
            Ok(())
        }
    }
}

/// Write `txt`, escaping what must be escaped inside a double-quoted string.
pub(crate) fn quoted_string<W: io::Write>(w: &mut W, txt: &[u8]) -> io::Result<()> {
    let mut start = 0;
    for (pos, chr) in txt.iter().copied().enumerate() {
        let escaped: &[u8] = match chr {
            b'\n' => b"\\n",
            b'\r' => b"\\r",
            b'"' => b"\\\"",
            b'\\' => b"\\\\",
            _ => continue,
        };
        w.write_all(&txt[start..pos])?;
        w.write_all(escaped)?;
        start = pos + 1;
    }
    w.write_all(&txt[start..])
}
