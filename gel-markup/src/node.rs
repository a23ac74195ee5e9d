//! The node tree
//!
//! A [`Node`] is exactly one of five variants. Elements keep attributes and
//! content in two separate ordered sequences; everything else either holds a
//! single value or a flat list.
//!
//! Children are routed by [`Node::add`], which looks at both the parent's and
//! the child's variant:
//!
//! | parent \ child | Text / Element | NodeList        | Attribute   | AttributeList    |
//! |----------------|----------------|-----------------|-------------|------------------|
//! | Element        | content        | its kids        | attributes  | its attributes   |
//! | NodeList       | content        | its kids        | dropped     | dropped          |
//! | AttributeList  | dropped        | dropped         | appended    | its attributes   |
//! | Text           | dropped        | dropped         | dropped     | dropped          |
//! | Attribute      | dropped        | dropped         | dropped     | dropped          |
//!
//! Fragments never nest: adding a NodeList routes each of its kids instead.

use crate::tags::TagName;
use std::fmt;

/// Identity of an element: a known tag or an arbitrary custom name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementTag {
    Known(TagName),
    /// Custom tags are never void
    Custom(String),
}

impl ElementTag {
    pub fn name(&self) -> &str {
        match self {
            ElementTag::Known(tag) => tag.as_str(),
            ElementTag::Custom(name) => name,
        }
    }

    pub fn is_void(&self) -> bool {
        match self {
            ElementTag::Known(tag) => tag.is_void(),
            ElementTag::Custom(_) => false,
        }
    }
}

impl From<TagName> for ElementTag {
    fn from(tag: TagName) -> Self {
        ElementTag::Known(tag)
    }
}

/// A `key="value"` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An element with its attributes and content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: ElementTag,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<ElementTag>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &ElementTag {
        &self.tag
    }

    pub fn name(&self) -> &str {
        self.tag.name()
    }

    pub fn is_void(&self) -> bool {
        self.tag.is_void()
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Content children; never contains attributes or fragments
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// True if any child renders at least one byte.
    ///
    /// Empty text nodes still occupy a slot in [`Element::children`] but do
    /// not count here.
    pub fn has_visible_content(&self) -> bool {
        self.children
            .iter()
            .any(|child| !matches!(child, Node::Text(cdata) if cdata.is_empty()))
    }

    fn push(&mut self, child: Node) {
        match child {
            Node::Text(_) | Node::Element(_) => self.children.push(child),
            Node::NodeList(kids) => {
                for kid in kids {
                    self.push(kid);
                }
            }
            Node::Attribute(attribute) => self.attributes.push(attribute),
            Node::AttributeList(attributes) => self.attributes.extend(attributes),
        }
    }
}

/// Discriminant of a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    Element,
    Attribute,
    AttributeList,
    NodeList,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Text => "Text",
            NodeKind::Element => "Element",
            NodeKind::Attribute => "Attribute",
            NodeKind::AttributeList => "AttributeList",
            NodeKind::NodeList => "NodeList",
        };
        f.write_str(name)
    }
}

/// A node in the markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Character data, written verbatim
    Text(String),
    Element(Element),
    Attribute(Attribute),
    /// A bag of attributes waiting to be merged into an element
    AttributeList(Vec<Attribute>),
    /// Sibling content without a wrapping element
    NodeList(Vec<Node>),
}

impl Node {
    /// An element with no attributes or children
    pub fn element(tag: impl Into<ElementTag>) -> Self {
        Node::Element(Element::new(tag))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Text(_) => NodeKind::Text,
            Node::Element(_) => NodeKind::Element,
            Node::Attribute(_) => NodeKind::Attribute,
            Node::AttributeList(_) => NodeKind::AttributeList,
            Node::NodeList(_) => NodeKind::NodeList,
        }
    }

    /// Routes each child into the right slot; see the module docs for the table.
    pub fn add<I>(&mut self, children: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        for child in children {
            self.push(child.into());
        }
        self
    }

    /// Consuming form of [`Node::add`]
    pub fn with<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.add(children);
        self
    }

    /// Appends each string as its own text node, in order.
    pub fn text<I>(&mut self, texts: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.add(texts.into_iter().map(|t| Node::Text(t.into())))
    }

    fn push(&mut self, child: Node) {
        match self {
            Node::Element(element) => element.push(child),
            Node::NodeList(nodes) => push_content(nodes, child),
            Node::AttributeList(attributes) => match child {
                Node::Attribute(attribute) => attributes.push(attribute),
                Node::AttributeList(more) => attributes.extend(more),
                Node::Text(_) | Node::Element(_) | Node::NodeList(_) => {}
            },
            Node::Text(_) | Node::Attribute(_) => {}
        }
    }

    /// Content children of an element or fragment
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => element.children(),
            Node::NodeList(nodes) => nodes,
            Node::Text(_) | Node::Attribute(_) | Node::AttributeList(_) => &[],
        }
    }

    /// Attributes of an element or attribute list
    pub fn attributes(&self) -> &[Attribute] {
        match self {
            Node::Element(element) => element.attributes(),
            Node::AttributeList(attributes) => attributes,
            Node::Attribute(attribute) => std::slice::from_ref(attribute),
            Node::Text(_) | Node::NodeList(_) => &[],
        }
    }

    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Node::Element(element) => Some(element.name()),
            _ => None,
        }
    }

    pub fn cdata(&self) -> Option<&str> {
        match self {
            Node::Text(cdata) => Some(cdata),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

fn push_content(nodes: &mut Vec<Node>, child: Node) {
    match child {
        Node::Text(_) | Node::Element(_) => nodes.push(child),
        Node::NodeList(kids) => {
            for kid in kids {
                push_content(nodes, kid);
            }
        }
        Node::Attribute(_) | Node::AttributeList(_) => {}
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Attribute> for Node {
    fn from(attribute: Attribute) -> Self {
        Node::Attribute(attribute)
    }
}

impl From<&str> for Node {
    fn from(cdata: &str) -> Self {
        Node::Text(cdata.to_string())
    }
}

impl From<String> for Node {
    fn from(cdata: String) -> Self {
        Node::Text(cdata)
    }
}

/// A text node
pub fn text(cdata: impl Into<String>) -> Node {
    Node::Text(cdata.into())
}

/// A single attribute node
pub fn att(key: impl Into<String>, value: impl Into<String>) -> Node {
    Node::Attribute(Attribute::new(key, value))
}

/// Pairs up `key, value, key, value, ...` into an attribute list.
///
/// With an odd number of arguments the trailing key has no value and is
/// dropped.
pub fn atts<S: AsRef<str>>(pairs: &[S]) -> Node {
    Node::AttributeList(
        pairs
            .chunks_exact(2)
            .map(|pair| Attribute::new(pair[0].as_ref(), pair[1].as_ref()))
            .collect(),
    )
}

/// A text node from format arguments, e.g. `fmt(format_args!("{n} items"))`
pub fn fmt(args: fmt::Arguments<'_>) -> Node {
    Node::Text(args.to_string())
}

/// A fragment holding the given children, flattened through [`Node::add`]
pub fn frag<I>(children: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    Node::NodeList(Vec::new()).with(children)
}
