//! Fluent element builder
//!
//! A [`Tag`] is an immutable builder: [`Tag::class`], [`Tag::att`] and
//! [`Tag::atts`] return a new builder carrying the extra attributes, while
//! [`Tag::add`], [`Tag::text`], [`Tag::fmt`] and [`Tag::build`] produce the
//! element [`Node`]. The constants in [`crate::elements`] are ready-made
//! builders for every known tag.
//!
//! ```ignore
//! use gel_markup::elements::{DIV, SPAN};
//!
//! let node = DIV.class("row").add([SPAN.text(["Hello, World!"])]);
//! assert_eq!(node.to_string(), r#"<div class="row"><span>Hello, World!</span></div>"#);
//! ```

use crate::node::{self, Attribute, ElementTag, Node};
use crate::tags::TagName;
use std::fmt;

/// Builder for an element of a fixed tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    tag: ElementTag,
    attributes: Vec<Attribute>,
}

impl Tag {
    /// Builder for a known tag; void classification comes from the tag table.
    pub const fn known(tag: TagName) -> Self {
        Self {
            tag: ElementTag::Known(tag),
            attributes: Vec::new(),
        }
    }

    /// Builder for an arbitrary tag name. Custom tags always get a closing tag.
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            tag: ElementTag::Custom(name.into()),
            attributes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.tag.name()
    }

    pub fn is_void(&self) -> bool {
        self.tag.is_void()
    }

    /// Attributes that will be placed on every element built from this tag
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Adds `class="<class>"`
    pub fn class(&self, class: impl Into<String>) -> Self {
        self.att("class", class)
    }

    pub fn att(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.attributes.push(Attribute::new(key, value));
        next
    }

    /// Adds attributes from `key, value, ...` pairs; a trailing unpaired key
    /// is dropped.
    pub fn atts<S: AsRef<str>>(&self, pairs: &[S]) -> Self {
        let mut next = self.clone();
        next.attributes
            .extend(node::atts(pairs).attributes().iter().cloned());
        next
    }

    /// The element with no content
    pub fn build(&self) -> Node {
        let mut element = Node::element(self.tag.clone());
        element.add(self.attributes.iter().cloned().map(Node::Attribute));
        element
    }

    /// The element with the given children routed through [`Node::add`]
    pub fn add<I>(&self, children: I) -> Node
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.build().with(children)
    }

    /// The element with one text child per string
    pub fn text<I>(&self, texts: I) -> Node
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut element = self.build();
        element.text(texts);
        element
    }

    /// The element with a single formatted text child
    pub fn fmt(&self, args: fmt::Arguments<'_>) -> Node {
        self.add([node::fmt(args)])
    }
}

impl From<Tag> for Node {
    fn from(tag: Tag) -> Self {
        tag.build()
    }
}

impl From<&Tag> for Node {
    fn from(tag: &Tag) -> Self {
        tag.build()
    }
}

/// Builder for a custom tag name, e.g. `e("my-widget")`
pub fn e(name: impl Into<String>) -> Tag {
    Tag::custom(name)
}
