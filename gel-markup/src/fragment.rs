//! Sibling lists that render without a wrapping element

use crate::node::{frag, Node};

/// An ordered list of sibling nodes
///
/// Converting into a [`Node`] yields a `NodeList`, which flattens into any
/// container it is added to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(Vec<Node>);

impl Fragment {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends the given nodes, returning the grown fragment
    pub fn add<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.0.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.0.push(node.into());
    }

    /// Number of nodes held, before any flattening
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.0.iter()
    }

    pub fn to_node(&self) -> Node {
        frag(self.0.iter().cloned())
    }
}

impl From<Fragment> for Node {
    fn from(fragment: Fragment) -> Self {
        frag(fragment.0)
    }
}

impl FromIterator<Node> for Fragment {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Fragment {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{text, NodeKind};
    use crate::tag::Tag;
    use crate::tags::TagName;

    const DIV: Tag = Tag::known(TagName::Div);

    #[test]
    fn empty_fragment() {
        let fragment = Fragment::new();
        assert_eq!(fragment.len(), 0);
        assert!(fragment.is_empty());
        assert_eq!(fragment.to_node().kind(), NodeKind::NodeList);
    }

    #[test]
    fn add_grows_the_fragment() {
        let fragment = Fragment::new().add([DIV.text(["a"])]);
        assert_eq!(fragment.len(), 1);
    }

    #[test]
    fn renders_siblings_without_wrapper() {
        let fragment = Fragment::new().add([DIV.text(["a"]), DIV.text(["b"]), DIV.text(["c"])]);
        assert_eq!(
            Node::from(fragment).to_string(),
            "<div>a</div><div>b</div><div>c</div>"
        );
    }

    #[test]
    fn mixed_text_and_elements() {
        let fragment = Fragment::new().add([
            DIV.add([text("Here"), DIV.text(["See"])]),
            DIV.add([text("Freedom")]),
            text("All"),
        ]);
        assert_eq!(
            fragment.to_node().to_string(),
            "<div>Here<div>See</div></div><div>Freedom</div>All"
        );
    }

    #[test]
    fn nested_fragments_flatten_on_conversion() {
        let inner: Node = Fragment::new().add([DIV.build(), DIV.build()]).into();
        let fragment = Fragment::new().add([inner.clone(), inner]);
        assert_eq!(fragment.len(), 2);
        assert_eq!(fragment.to_node().children().len(), 4);
    }
}
