//! Diagnostic pretty-printing of a [`Graph`]; this is not a serialization format.
use crate::{Graph, GraphResult};
use trove_term::dump::{dump_resource_value, escape_html};

const ARROW: &str = "<span style='font-size:130%'>&rarr;</span>";

impl Graph {
    /// Pretty-print every resource of this graph and its properties, as HTML or plain text.
    pub fn dump(&self, html: bool) -> String {
        let uri = self.uri().unwrap_or_default();
        let mut ret = if html {
            format!(
                "<div style='font-family:arial; font-weight: bold; padding:0.5em; \
                 color: black; background-color:lightgrey;border:dashed 1px grey;'>\
                 Graph: {}</div>\n",
                escape_html(uri)
            )
        } else {
            format!("Graph: {uri}\n")
        };
        for s in self.subjects() {
            ret.push_str(&self.dump_subject(s, html));
        }
        ret
    }

    /// Pretty-print one resource and its properties, as HTML or plain text.
    ///
    /// The result is empty if `s` has no property.
    pub fn dump_resource<S: AsRef<str>>(&self, s: S, html: bool) -> GraphResult<String> {
        let s = self.namespaces().expand(s.as_ref()).into_owned();
        if s.is_empty() {
            return Err(crate::GraphError::InvalidArgument("subject can not be empty".into()));
        }
        Ok(self.dump_subject(&s, html))
    }

    fn dump_subject(&self, s: &str, html: bool) -> String {
        let ns = self.namespaces();
        let mut plist = vec![];
        for p in self.property_uris(s).unwrap_or_default() {
            let olist = self
                .direct_values(s, p)
                .iter()
                .map(|o| o.dump_value(html, ns))
                .collect::<Vec<_>>()
                .join(", ");
            let pstr = ns.shorten(p).unwrap_or_else(|| p.to_string());
            if html {
                plist.push(format!(
                    "{ARROW} <span style='text-decoration:none;color:green'>{}</span> {ARROW} {olist}",
                    escape_html(&pstr)
                ));
            } else {
                plist.push(format!("  -> {pstr} -> {olist}"));
            }
        }
        if plist.is_empty() {
            return String::new();
        }
        let class = self.class_of(s);
        if html {
            format!(
                "<div id='{}' style='font-family:arial; padding:0.5em; \
                 background-color:lightgrey;border:dashed 1px grey;'>\n\
                 <div>{} <span style='font-size: 0.8em'>({class})</span></div>\n\
                 <div style='padding-left: 3em'>\n\
                 <div>{}</div></div></div>\n",
                escape_html(s),
                dump_resource_value(s, true, ns),
                plist.join("</div>\n<div>")
            )
        } else {
            format!("{s} ({class})\n{}\n\n", plist.join("\n"))
        }
    }
}
