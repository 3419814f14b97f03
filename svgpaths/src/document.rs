//! Tolerant SVG document parsing, mutation and re-serialization.
//!
//! DESIGN
//! ======
//! SVG text is read with the quick-xml event reader into a small owned tree.
//! Input is user-pasted markup, so the reader runs in recovery mode rather
//! than strict XML: end-tag name checks are off, stray end tags are ignored,
//! elements left open at EOF are auto-closed, and unparseable attributes are
//! skipped. Parsing fails only when not a single element can be salvaged.
//!
//! Bare fragments (anything not starting with `<svg`) are wrapped in a
//! synthetic `<svg xmlns="…">` envelope before parsing, so a pasted `<path>`
//! on its own is accepted.
//!
//! Serialization is hand-built string output: two-space indentation,
//! attributes in stored order. Parse followed by serialize is the
//! canonicalization step callers rely on, which is why whitespace-only text
//! nodes are dropped on the way in — the indented writer owns the layout.

use std::fmt::Write;

use quick_xml::Reader;
use quick_xml::events::Event;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, thiserror::Error)]
pub enum SvgParseError {
    /// Input that even recovery could not turn into a document.
    #[error("SVG parsing failed: {0}")]
    Syntax(String),
}

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    CData(String),
}

/// One element of the parsed tree. Attribute order is preserved as
/// encountered and kept stable across mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Qualified name as written in the source, prefix included.
    pub name: String,
    attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Element name with any namespace prefix stripped.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, keeping its position when it already exists.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.attrs.iter_mut().find(|(k, _)| k == name) {
            entry.1 = value.to_owned();
        } else {
            self.attrs.push((name.to_owned(), value.to_owned()));
        }
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attrs.retain(|(k, _)| k != name);
    }

    /// All attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// An exclusively owned SVG tree, parsed fresh per operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDocument {
    root: Element,
}

impl SvgDocument {
    /// Parse SVG text, wrapping bare fragments in an `<svg>` envelope.
    ///
    /// # Errors
    ///
    /// [`SvgParseError::Syntax`] when recovery cannot salvage any element,
    /// carrying the underlying reader message.
    pub fn parse(text: &str) -> Result<Self, SvgParseError> {
        let trimmed = text.trim();
        let wrapped;
        let source = if trimmed.starts_with("<svg") {
            trimmed
        } else {
            wrapped = format!("<svg xmlns=\"{SVG_NS}\">{trimmed}</svg>");
            &wrapped
        };

        let mut reader = Reader::from_str(source);
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;
        let mut failure: Option<String> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    stack.push(element_from_tag(&e));
                }
                Ok(Event::Empty(e)) => {
                    attach(&mut stack, &mut root, element_from_tag(&e));
                }
                Ok(Event::End(e)) => {
                    // An end tag closes the nearest open element of the same
                    // name, auto-closing anything opened inside it. End tags
                    // matching nothing open are dropped.
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    if let Some(pos) = stack.iter().rposition(|el| el.name == name) {
                        while stack.len() > pos {
                            if let Some(el) = stack.pop() {
                                attach(&mut stack, &mut root, el);
                            }
                        }
                    }
                }
                Ok(Event::Text(t)) => {
                    let text = t
                        .unescape()
                        .map_or_else(|_| String::from_utf8_lossy(&t).into_owned(), |c| c.into_owned());
                    if !text.trim().is_empty() {
                        if let Some(top) = stack.last_mut() {
                            top.children.push(Node::Text(text));
                        }
                    }
                }
                Ok(Event::CData(c)) => {
                    if let Some(top) = stack.last_mut() {
                        let text = String::from_utf8_lossy(&c.into_inner()).into_owned();
                        top.children.push(Node::CData(text));
                    }
                }
                Ok(Event::Comment(c)) => {
                    if let Some(top) = stack.last_mut() {
                        let text = String::from_utf8_lossy(&c).into_owned();
                        top.children.push(Node::Comment(text));
                    }
                }
                Ok(Event::Decl(_) | Event::PI(_) | Event::DocType(_)) => {}
                Ok(Event::Eof) => break,
                Err(e) => {
                    // Recovery: keep whatever parsed before the failure.
                    failure = Some(e.to_string());
                    break;
                }
            }
        }

        // Auto-close everything still open at EOF (or at the failure point).
        while let Some(el) = stack.pop() {
            attach(&mut stack, &mut root, el);
        }

        match root {
            Some(root) => Ok(Self { root }),
            None => Err(SvgParseError::Syntax(
                failure.unwrap_or_else(|| "no element found in input".to_owned()),
            )),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Every element whose local name is `path`, in document order,
    /// regardless of namespace prefix.
    #[must_use]
    pub fn path_elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_paths(&self.root, &mut out);
        out
    }

    /// Mutable handles to the same elements, in the same order as
    /// [`Self::path_elements`].
    pub fn path_elements_mut(&mut self) -> Vec<&mut Element> {
        let mut out = Vec::new();
        collect_paths_mut(&mut self.root, &mut out);
        out
    }

    /// Render the tree back to indented SVG text.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        write_element(&self.root, &mut out, 0);
        out
    }
}

fn element_from_tag(tag: &quick_xml::events::BytesStart<'_>) -> Element {
    let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
    let mut el = Element::new(name);
    // with_checks(false): duplicate or oddly-quoted attributes are part of
    // what recovery accepts; individually unreadable ones are skipped.
    for attr in tag.attributes().with_checks(false).flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned(), |c| c.into_owned());
        // First occurrence wins for duplicated attribute names.
        if el.attribute(&key).is_none() {
            el.attrs.push((key, value));
        }
    }
    el
}

/// Attach a completed element to its parent, or promote it to document root.
/// Extra top-level elements after the first are dropped, mirroring how a
/// recovering parser keeps the first root it finds.
fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, el: Element) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(Node::Element(el));
    } else if root.is_none() {
        *root = Some(el);
    }
}

fn collect_paths<'a>(el: &'a Element, out: &mut Vec<&'a Element>) {
    if el.local_name() == "path" {
        out.push(el);
        return;
    }
    for child in &el.children {
        if let Node::Element(child_el) = child {
            collect_paths(child_el, out);
        }
    }
}

fn collect_paths_mut<'a>(el: &'a mut Element, out: &mut Vec<&'a mut Element>) {
    if el.local_name() == "path" {
        out.push(el);
        return;
    }
    for child in &mut el.children {
        if let Node::Element(child_el) = child {
            collect_paths_mut(child_el, out);
        }
    }
}

fn write_element(el: &Element, out: &mut String, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = write!(out, "{indent}<{}", el.name);
    for (key, value) in el.attributes() {
        let _ = write!(out, " {key}=\"{}\"", escape_attr(value));
    }

    if el.children.is_empty() {
        out.push_str("/>\n");
        return;
    }

    // A single text child stays inline; anything else gets block layout.
    if let [Node::Text(text)] = el.children.as_slice() {
        let _ = writeln!(out, ">{}</{}>", escape_text(text), el.name);
        return;
    }

    out.push_str(">\n");
    for child in &el.children {
        match child {
            Node::Element(child_el) => write_element(child_el, out, depth + 1),
            Node::Text(text) => {
                let _ = writeln!(out, "{indent}  {}", escape_text(text));
            }
            Node::Comment(text) => {
                let _ = writeln!(out, "{indent}  <!--{text}-->");
            }
            Node::CData(text) => {
                let _ = writeln!(out, "{indent}  <![CDATA[{text}]]>");
            }
        }
    }
    let _ = writeln!(out, "{indent}</{}>", el.name);
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
