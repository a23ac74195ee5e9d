//! Markup construction and serialization
//!
//!     Build a tree of typed nodes (elements, text, attributes, fragments) with a fluent API and
//!     render it to a markup string, on one line or pretty-printed with indentation.
//!
//!     This is a pure lib: nothing here prints, reads env vars or assumes a shell. The only I/O is
//!     the sink handed to the serializer and the reader handed to an [`include::Inserter`].
//!
//! Architecture
//!
//!     .
//!     ├── error.rs        # MarkupError
//!     ├── tags.rs         # TagName, void/normal classification
//!     ├── indent.rs       # Indentation state
//!     ├── node.rs         # Node sum type and the `add` bucketing rules
//!     ├── fragment.rs     # Fragment (sibling lists)
//!     ├── writer.rs       # Serializer
//!     ├── tag.rs          # Tag builder
//!     ├── elements.rs     # One Tag constant per known element (generated)
//!     ├── maybe.rs        # Coercing optional values into nodes
//!     ├── include.rs      # File includes
//!     └── page.rs         # Whole-document helpers
//!
//! Core Algorithms
//!
//!     Two pieces carry real rules. `Node::add` routes a child by looking at both the parent's and
//!     the child's variant: attributes only land on elements (or attribute lists), fragments are
//!     flattened into their parent, everything else is dropped silently. The serializer is one
//!     recursive walk used for both compact and indented output; compact mode is simply an
//!     indentation that writes nothing.
//!
//!     Void elements (`br`, `img`, ...) render as `<br/>` and ignore any content. Empty text nodes
//!     keep their slot in the tree but render as nothing, including no indentation or newline.
//!
//! Escaping
//!
//!     Text and attribute values are written verbatim. Callers escape what needs escaping.
//!
//! Example
//!
//!     ```ignore
//!     use gel_markup::elements::DIV;
//!     use gel_markup::{att, text};
//!
//!     let node = DIV.add([
//!         att("class", "container"),
//!         text("text"),
//!         DIV.class("row").text(["Hello, World!"]),
//!     ]);
//!     println!("{}", node.to_pretty_string()?);
//!     ```

pub mod elements;
pub mod error;
pub mod fragment;
pub mod include;
pub mod indent;
pub mod maybe;
pub mod node;
pub mod page;
pub mod tag;
pub mod tags;
pub mod writer;

pub use error::MarkupError;
pub use fragment::Fragment;
pub use include::Inserter;
pub use indent::Indentation;
pub use maybe::{default, maybe, none, Coerce};
pub use node::{att, atts, fmt, frag, text, Attribute, Element, ElementTag, Node, NodeKind};
pub use page::html5;
pub use tag::{e, Tag};
pub use tags::{is_void, is_void_name, TagName};
pub use writer::write_node;

/// Renders a node on a single line.
pub fn render_compact(node: &Node) -> Result<String, MarkupError> {
    node.render(&Indentation::none())
}

/// Renders a node with the default two-space indentation.
pub fn render_pretty(node: &Node) -> Result<String, MarkupError> {
    node.render(&Indentation::new())
}
