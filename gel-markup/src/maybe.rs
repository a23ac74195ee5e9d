//! Coalescing arbitrary values into nodes
//!
//! Templates often hold values that may or may not have a markup form. The
//! [`Coerce`] trait gives each type its answer: nodes, builders and fragments
//! pass through, strings become text, and everything else (including
//! `None` and `()`) has no markup form. [`maybe`] and [`default`] turn "no
//! markup form" into an empty text node, which renders as nothing.

use crate::fragment::Fragment;
use crate::node::{text, Node};
use crate::tag::Tag;

/// Conversion into a node, where some values have no markup form
pub trait Coerce {
    fn coerce(self) -> Option<Node>;
}

impl Coerce for Node {
    fn coerce(self) -> Option<Node> {
        Some(self)
    }
}

impl Coerce for &Node {
    fn coerce(self) -> Option<Node> {
        Some(self.clone())
    }
}

impl Coerce for Tag {
    fn coerce(self) -> Option<Node> {
        Some(self.into())
    }
}

impl Coerce for &Tag {
    fn coerce(self) -> Option<Node> {
        Some(self.into())
    }
}

impl Coerce for Fragment {
    fn coerce(self) -> Option<Node> {
        Some(self.into())
    }
}

impl Coerce for String {
    fn coerce(self) -> Option<Node> {
        Some(Node::Text(self))
    }
}

impl Coerce for &String {
    fn coerce(self) -> Option<Node> {
        Some(text(self.as_str()))
    }
}

impl Coerce for &str {
    fn coerce(self) -> Option<Node> {
        Some(text(self))
    }
}

impl<T: Coerce> Coerce for Option<T> {
    fn coerce(self) -> Option<Node> {
        self.and_then(Coerce::coerce)
    }
}

impl Coerce for () {
    fn coerce(self) -> Option<Node> {
        None
    }
}

macro_rules! no_markup_form {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Coerce for $ty {
                fn coerce(self) -> Option<Node> {
                    None
                }
            }
        )*
    };
}

no_markup_form!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// An empty text node
pub fn none() -> Node {
    text("")
}

/// The value's node, or an empty text node when it has no markup form.
pub fn maybe(value: impl Coerce) -> Node {
    value.coerce().unwrap_or_else(|| {
        log::debug!("value has no markup form, using an empty text node");
        none()
    })
}

/// Like [`maybe`], but tries `fallback` before giving up.
pub fn default(value: impl Coerce, fallback: impl Coerce) -> Node {
    maybe(value.coerce().or_else(|| fallback.coerce()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use crate::tags::TagName;

    #[test]
    fn maybe_number_is_empty_text() {
        let node = maybe(1);
        assert_eq!(node.kind(), NodeKind::Text);
        assert_eq!(node.to_string(), "");
        assert_eq!(node.cdata(), Some(""));
    }

    #[test]
    fn maybe_string_is_text() {
        assert_eq!(maybe("what?"), text("what?"));
        assert_eq!(maybe(String::from("owned")), text("owned"));
    }

    #[test]
    fn maybe_absent_is_empty_text() {
        assert_eq!(maybe(None::<Node>), none());
        assert_eq!(maybe(()), none());
    }

    #[test]
    fn maybe_node_passes_through() {
        assert_eq!(maybe(text("default")), text("default"));
        assert_eq!(maybe(Some("inner")), text("inner"));
    }

    #[test]
    fn maybe_tag_builds_element() {
        let node = maybe(Tag::known(TagName::Hr));
        assert_eq!(node.to_string(), "<hr/>");
    }

    #[test]
    fn default_uses_fallback_for_scalars() {
        let node = default(1, text("2"));
        assert_eq!(node.cdata(), Some("2"));
    }

    #[test]
    fn default_prefers_value() {
        assert_eq!(default("not nil", text("nil")), text("not nil"));
    }

    #[test]
    fn default_uses_fallback_for_absent_value() {
        assert_eq!(default(None::<&str>, text("nil")), text("nil"));
    }

    #[test]
    fn default_with_nothing_usable_is_empty_text() {
        assert_eq!(default(None::<String>, 3.5), none());
    }

    #[test]
    fn empty_string_is_still_a_value() {
        assert_eq!(default("", text("fallback")), text(""));
    }
}
