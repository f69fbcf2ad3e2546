//! Read-only XML element tree
//!
//! KML is loosely schema'd, so the model parser walks a small DOM-like tree
//! rather than a streaming event loop. Each [`Element`] keeps its ordered child
//! elements and its own text runs; [`Element::text_content`] joins the text of
//! the whole subtree on demand, like the DOM `textContent` accessor that KML
//! producers are written against.

use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::borrow::Cow;

/// Default buffer capacity for XML parsing (4KB)
const XML_BUFFER_CAPACITY: usize = 4096;

/// Maximum element nesting accepted by [`Element::parse`]
pub const MAX_DEPTH: usize = 1024;

/// An XML element with its attributes, child elements and text content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    /// Text directly inside this element, each run tagged with the number of
    /// child elements that precede it
    text: Vec<(usize, String)>,
}

impl Element {
    /// Create an element with the given (possibly prefixed) name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a child element, builder style
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append text content, builder style
    pub fn with_text(mut self, text: impl AsRef<str>) -> Self {
        self.push_text(text.as_ref());
        self
    }

    /// Add an attribute, builder style
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Qualified tag name as written in the document (e.g. `kml:Model`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tag name with any namespace prefix stripped
    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    /// Ordered child elements
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Child element at `index`, in document order
    pub fn child(&self, index: usize) -> Option<&Element> {
        self.children.get(index)
    }

    /// First child element with the given local name
    pub fn find_child(&self, local: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.local_name() == local)
    }

    /// All text in this element's subtree, in document order, unmodified
    ///
    /// Borrowed for leaf elements with a single text run, which covers the
    /// numeric and name fields KML is made of.
    pub fn text_content(&self) -> Cow<'_, str> {
        if self.children.is_empty() {
            return match self.text.as_slice() {
                [] => Cow::Borrowed(""),
                [(_, only)] => Cow::Borrowed(only.as_str()),
                runs => Cow::Owned(runs.iter().map(|(_, text)| text.as_str()).collect()),
            };
        }

        let mut content = String::new();
        // (element, next child index, next text run index)
        let mut stack = vec![(self, 0usize, 0usize)];

        while let Some(frame) = stack.last_mut() {
            let element = frame.0;

            while let Some((position, text)) = element.text.get(frame.2) {
                if *position > frame.1 {
                    break;
                }
                content.push_str(text);
                frame.2 += 1;
            }

            match element.children.get(frame.1) {
                Some(child) => {
                    frame.1 += 1;
                    stack.push((child, 0, 0));
                }
                None => {
                    stack.pop();
                }
            }
        }

        Cow::Owned(content)
    }

    /// Attribute value looked up by local name
    pub fn attribute(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| local_name(key) == local)
            .map(|(_, value)| value.as_str())
    }

    /// Parse an XML document and return its root element
    ///
    /// Documents nested deeper than [`MAX_DEPTH`] elements are rejected.
    pub fn parse(xml: &str) -> Result<Element> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::with_capacity(XML_BUFFER_CAPACITY);

        // Open elements; the root sits at index 0
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    if root.is_some() {
                        return Err(Error::InvalidXml(
                            "Content after the document root element".to_string(),
                        ));
                    }
                    check_depth(&stack)?;
                    stack.push(start_element(e)?);
                }
                Ok(Event::Empty(ref e)) => {
                    check_depth(&stack)?;
                    let element = start_element(e)?;
                    close_element(&mut stack, &mut root, element)?;
                }
                Ok(Event::End(ref e)) => {
                    let qname = e.name();
                    let name = std::str::from_utf8(qname.as_ref())?;
                    let element = stack.pop().ok_or_else(|| {
                        Error::invalid_xml_element(name, "end tag without matching start tag")
                    })?;
                    close_element(&mut stack, &mut root, element)?;
                }
                Ok(Event::Text(ref t)) => {
                    let text = t.decode().map_err(|e| Error::InvalidXml(e.to_string()))?;
                    append_text(&mut stack, &text);
                }
                Ok(Event::CData(ref c)) => {
                    let text = std::str::from_utf8(c)?;
                    append_text(&mut stack, text);
                }
                Ok(Event::GeneralRef(ref r)) => {
                    let entity = std::str::from_utf8(r)?;
                    let resolved = resolve_reference(entity).ok_or_else(|| {
                        Error::InvalidXml(format!("Unknown entity reference '&{};'", entity))
                    })?;
                    append_text(&mut stack, &resolved);
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::Xml(e)),
                // Declarations, comments, processing instructions, doctype
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(Error::invalid_xml_element(
                open.name(),
                "element is never closed",
            ));
        }

        root.ok_or_else(|| Error::InvalidXml("Document has no root element".to_string()))
    }

    /// Append a text run, merging with a preceding run at the same position
    fn push_text(&mut self, text: &str) {
        let position = self.children.len();
        match self.text.last_mut() {
            Some((last, run)) if *last == position => run.push_str(text),
            _ => self.text.push((position, text.to_string())),
        }
    }
}

/// Strip a namespace prefix (`kml:Model` -> `Model`)
pub(crate) fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

fn check_depth(stack: &[Element]) -> Result<()> {
    if stack.len() >= MAX_DEPTH {
        return Err(Error::InvalidXml(format!(
            "Element nesting exceeds maximum depth of {}",
            MAX_DEPTH
        )));
    }
    Ok(())
}

fn start_element(e: &BytesStart) -> Result<Element> {
    let qname = e.name();
    let name = std::str::from_utf8(qname.as_ref())?;
    let mut element = Element::new(name);

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;
        element.attributes.push((key.to_string(), value.to_string()));
    }

    Ok(element)
}

fn close_element(
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
    element: Element,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(Error::invalid_xml_element(
                element.name(),
                "second root element in document",
            ));
        }
    }
    Ok(())
}

/// Text outside the root element is dropped
fn append_text(stack: &mut [Element], text: &str) {
    if let Some(open) = stack.last_mut() {
        open.push_text(text);
    }
}

fn resolve_reference(entity: &str) -> Option<String> {
    if let Some(code) = entity.strip_prefix('#') {
        let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => code.parse::<u32>().ok()?,
        };
        return char::from_u32(value).map(String::from);
    }

    quick_xml::escape::resolve_predefined_entity(entity).map(str::to_string)
}
