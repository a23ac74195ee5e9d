//! Property tests for the tree laws that must hold for any input

use gel_markup::tags::{ALL_TAGS, VOID_TAGS};
use gel_markup::{att, frag, text, Indentation, Node, TagName};
use proptest::prelude::*;
use proptest::sample::select;

fn arb_word() -> impl Strategy<Value = String> {
    "[a-z0-9-]{0,6}"
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        arb_word().prop_map(text),
        (arb_word(), arb_word()).prop_map(|(k, v)| att(k, v)),
        select(ALL_TAGS).prop_map(Node::element),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            (select(ALL_TAGS), prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(tag, kids)| Node::element(tag).with(kids)),
            prop::collection::vec(inner, 0..4).prop_map(frag),
        ]
    })
}

/// Attributes that actually reach the output
fn rendered_attributes(node: &Node) -> usize {
    match node {
        Node::Text(_) => 0,
        Node::Attribute(_) => 1,
        Node::AttributeList(attributes) => attributes.len(),
        Node::NodeList(nodes) => nodes.iter().map(rendered_attributes).sum(),
        Node::Element(element) => {
            let own = element.attributes().len();
            if element.is_void() {
                own
            } else {
                own + element.children().iter().map(rendered_attributes).sum::<usize>()
            }
        }
    }
}

proptest! {
    #[test]
    fn compact_output_adds_no_whitespace(node in arb_node()) {
        let out = node.to_string();
        prop_assert!(!out.contains('\n'));
        prop_assert!(!out.contains('\t'));
        // The only spaces are the separators in front of attribute keys.
        prop_assert_eq!(out.matches(' ').count(), rendered_attributes(&node));
    }

    #[test]
    fn fragments_flatten_into_parent(
        tag in select(ALL_TAGS),
        kids in prop::collection::vec(arb_node(), 0..5),
    ) {
        let direct = Node::element(tag).with(kids.clone());
        let through_fragment = Node::element(tag).with([frag(kids)]);
        // Only content flattens; a fragment drops attributes before they reach the parent.
        prop_assert_eq!(direct.children(), through_fragment.children());
    }

    #[test]
    fn void_elements_never_render_content(
        tag in select(VOID_TAGS),
        kids in prop::collection::vec(arb_node(), 0..5),
    ) {
        let node = Node::element(tag).with(kids);
        let attributes: String = node
            .attributes()
            .iter()
            .map(|a| format!(" {}=\"{}\"", a.key, a.value))
            .collect();
        let expected = format!("<{}{}/>", tag.as_str(), attributes);
        prop_assert_eq!(node.to_string(), expected.clone());
        prop_assert_eq!(node.to_pretty_string().unwrap(), expected);
    }

    #[test]
    fn text_never_gains_attributes(cdata in arb_word(), key in arb_word(), value in arb_word()) {
        let node = text(cdata.clone()).with([att(key, value)]);
        prop_assert!(node.attributes().is_empty());
        prop_assert_eq!(node, text(cdata));
    }

    #[test]
    fn indentation_round_trips(steps in 0usize..32, increment in 0usize..5) {
        let start = Indentation::new().with_increment(increment);
        let mut indent = start.clone();
        for _ in 0..steps {
            indent = indent.increment();
        }
        prop_assert_eq!(indent.level, steps * increment);
        for _ in 0..steps {
            indent = indent.try_decrement().unwrap();
        }
        prop_assert_eq!(&indent, &start);
        if increment > 0 {
            prop_assert!(indent.try_decrement().is_err());
        }
    }

    #[test]
    fn childless_normal_elements_close(tag in select(ALL_TAGS)) {
        let node = Node::element(tag);
        let expected = if tag.is_void() {
            format!("<{}/>", tag)
        } else {
            format!("<{tag}></{tag}>")
        };
        prop_assert_eq!(node.to_string(), expected);
    }
}

#[test]
fn fragment_drops_attributes_but_keeps_content() {
    let kids = vec![att("", ""), text("x")];
    let direct = Node::element(TagName::A).with(kids.clone());
    let through_fragment = Node::element(TagName::A).with([frag(kids)]);

    assert_eq!(direct.attributes().len(), 1);
    assert!(through_fragment.attributes().is_empty());
    assert_eq!(direct.children(), through_fragment.children());
}

#[test]
fn every_tag_name_parses_back() {
    for tag in ALL_TAGS {
        assert_eq!(tag.as_str().parse::<TagName>().unwrap(), *tag);
    }
}
