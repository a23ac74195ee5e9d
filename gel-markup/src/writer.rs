//! Markup serialization
//!
//! A single recursive walk renders both modes. With [`Indentation::none`] every
//! indent and newline write is skipped and the output is one line; with an
//! active indentation each element opens on its own line and nested content is
//! pushed one level in.
//!
//! Any write failure aborts the render and is returned to the caller. Callers
//! that need partial output on failure should buffer themselves.

use crate::error::MarkupError;
use crate::indent::Indentation;
use crate::node::{Attribute, Element, Node};
use std::fmt;
use std::io::Write;

/// Renders `node` into `w` starting at the given indentation.
pub fn write_node<W: Write + ?Sized>(
    node: &Node,
    indent: &Indentation,
    w: &mut W,
) -> Result<(), MarkupError> {
    match node {
        Node::Text(cdata) => write_text(cdata, indent, w),
        Node::Attribute(attribute) => write_attribute(attribute, w),
        Node::AttributeList(attributes) => {
            for attribute in attributes {
                write_attribute(attribute, w)?;
            }
            Ok(())
        }
        Node::NodeList(nodes) => {
            for child in nodes {
                write_node(child, indent, w)?;
            }
            Ok(())
        }
        Node::Element(element) => write_element(element, indent, w),
    }
}

fn write_text<W: Write + ?Sized>(
    cdata: &str,
    indent: &Indentation,
    w: &mut W,
) -> Result<(), MarkupError> {
    if cdata.is_empty() {
        return Ok(());
    }
    let pretty = indent.has_indent();
    if pretty {
        indent.write_to(w)?;
    }
    w.write_all(cdata.as_bytes())?;
    if pretty {
        w.write_all(b"\n")?;
    }
    Ok(())
}

fn write_attribute<W: Write + ?Sized>(attribute: &Attribute, w: &mut W) -> Result<(), MarkupError> {
    write!(w, " {}=\"{}\"", attribute.key, attribute.value)?;
    Ok(())
}

fn write_element<W: Write + ?Sized>(
    element: &Element,
    indent: &Indentation,
    w: &mut W,
) -> Result<(), MarkupError> {
    let pretty = indent.has_indent();
    let name = element.name();

    if pretty {
        indent.write_to(w)?;
    }
    write!(w, "<{name}")?;
    for attribute in element.attributes() {
        write_attribute(attribute, w)?;
    }

    if element.is_void() {
        w.write_all(b"/>")?;
    } else {
        w.write_all(b">")?;
        if element.has_visible_content() {
            if pretty {
                w.write_all(b"\n")?;
            }
            let next = indent.increment();
            for child in element.children() {
                write_node(child, &next, w)?;
            }
            if pretty {
                indent.write_to(w)?;
            }
        }
        write!(w, "</{name}>")?;
    }

    // Every nested element ends its own line; the root does not.
    if pretty && indent.level > 0 {
        w.write_all(b"\n")?;
    }
    Ok(())
}

impl Node {
    /// Writes the node on a single line.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<(), MarkupError> {
        write_node(self, &Indentation::none(), w)
    }

    /// Writes the node using the given indentation.
    pub fn write_with_indentation<W: Write + ?Sized>(
        &self,
        indent: &Indentation,
        w: &mut W,
    ) -> Result<(), MarkupError> {
        write_node(self, indent, w)
    }

    /// Renders the node into a `String` using the given indentation.
    pub fn render(&self, indent: &Indentation) -> Result<String, MarkupError> {
        let mut buf = Vec::new();
        write_node(self, indent, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Renders with the default two-space indentation.
    pub fn to_pretty_string(&self) -> Result<String, MarkupError> {
        self.render(&Indentation::new())
    }
}

/// Single-line rendering
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render(&Indentation::none()).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
