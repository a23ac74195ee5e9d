//! Rendering tests for whole trees built with the public API
//!
//! Compact output is checked with inline snapshots; indented output is compared
//! byte for byte since whitespace is the thing under test.

use gel_markup::elements::{BODY, BR, DIV, H1, HEAD, IMG, INPUT, LI, SPAN, TITLE, UL};
use gel_markup::{att, atts, default, e, frag, html5, maybe, none, text, Fragment, Indentation, Node};
use insta::assert_snapshot;

fn container() -> Node {
    DIV.add([
        att("class", "container"),
        att("id", "id-1"),
        text("text"),
        DIV.add([att("class", "row"), text("Hello, World!")]),
    ])
}

// ============================================================================
// COMPACT OUTPUT
// ============================================================================

#[test]
fn test_container_compact() {
    assert_snapshot!(
        container().to_string(),
        @r#"<div class="container" id="id-1">text<div class="row">Hello, World!</div></div>"#
    );
}

#[test]
fn test_fragment_of_divs_compact() {
    let fragment = Fragment::new().add([DIV.text(["a"]), DIV.text(["b"]), DIV.text(["c"])]);
    assert_snapshot!(Node::from(fragment).to_string(), @"<div>a</div><div>b</div><div>c</div>");
}

#[test]
fn test_attribute_list_merge_compact() {
    let node = atts(&["class", "row", "id", "id-1"]).with([att("type", "text")]);
    assert_eq!(node.to_string(), r#" class="row" id="id-1" type="text""#);
    assert_snapshot!(DIV.add([node]).to_string(), @r#"<div class="row" id="id-1" type="text"></div>"#);
}

#[test]
fn test_empty_text_inside_nested_divs() {
    let node = frag([DIV.add([DIV.add([text("2nd level")]), DIV.add([text("")])])]);
    assert_snapshot!(node.to_string(), @"<div><div>2nd level</div><div></div></div>");
}

#[test]
fn test_void_elements_inline() {
    let node = DIV.add([
        INPUT.atts(&["type", "text", "name", "q"]).build(),
        BR.build(),
        IMG.atts(&["src", "/a.png"]).add([text("never rendered")]),
    ]);
    assert_snapshot!(
        node.to_string(),
        @r#"<div><input type="text" name="q"/><br/><img src="/a.png"/></div>"#
    );
}

#[test]
fn test_custom_element_compact() {
    let node = e("x-card").class("wide").add([SPAN.text(["hi"])]);
    assert_snapshot!(node.to_string(), @r#"<x-card class="wide"><span>hi</span></x-card>"#);
}

#[test]
fn test_text_is_not_escaped() {
    let node = DIV.add([text("<b>&amp;</b>")]);
    assert_snapshot!(node.to_string(), @"<div><b>&amp;</b></div>");
}

#[test]
fn test_maybe_values_in_tree() {
    let missing: Option<&str> = None;
    let node = UL.add([
        LI.add([maybe("one")]),
        LI.add([maybe(missing)]),
        LI.add([default(missing, "fallback")]),
        LI.add([maybe(42)]),
    ]);
    assert_snapshot!(
        node.to_string(),
        @"<ul><li>one</li><li></li><li>fallback</li><li></li></ul>"
    );
}

// ============================================================================
// INDENTED OUTPUT
// ============================================================================

#[test]
fn test_container_indented() {
    let expected = "<div class=\"container\" id=\"id-1\">\n  text\n  <div class=\"row\">\n    Hello, World!\n  </div>\n</div>";
    assert_eq!(container().to_pretty_string().unwrap(), expected);
}

#[test]
fn test_demo_document_indented() {
    let page = html5(
        HEAD.add([TITLE.text(["Demo HTML Doc"])]),
        BODY.add([H1.text(["Hello, World!"])]),
    );
    let expected = "<!doctype html>\n\
                    <html>\n  \
                    <head>\n    \
                    <title>\n      Demo HTML Doc\n    </title>\n  \
                    </head>\n  \
                    <body>\n    \
                    <h1>\n      Hello, World!\n    </h1>\n  \
                    </body>\n\
                    </html>";
    assert_eq!(page.to_pretty_string().unwrap(), expected);
}

#[test]
fn test_empty_text_indented() {
    let node = DIV.add([DIV.add([text("2nd level")]), DIV.add([text(""), none()])]);
    let expected = "<div>\n  <div>\n    2nd level\n  </div>\n  <div></div>\n</div>";
    assert_eq!(node.to_pretty_string().unwrap(), expected);
}

#[test]
fn test_void_element_indented() {
    let node = DIV.add([IMG.atts(&["href", "x"]).build(), text("caption")]);
    let expected = "<div>\n  <img href=\"x\"/>\n  caption\n</div>";
    assert_eq!(node.to_pretty_string().unwrap(), expected);
}

#[test]
fn test_tab_indentation() {
    let indent = Indentation::new().with_tab("\t");
    let node = UL.add([LI.text(["a"]), LI.text(["b"])]);
    let expected = "<ul>\n\t<li>\n\t\ta\n\t</li>\n\t<li>\n\t\tb\n\t</li>\n</ul>";
    assert_eq!(node.render(&indent).unwrap(), expected);
}

#[test]
fn test_compact_matches_no_indentation() {
    let node = container();
    assert_eq!(node.render(&Indentation::none()).unwrap(), node.to_string());
    assert_eq!(gel_markup::render_compact(&node).unwrap(), node.to_string());
    assert_eq!(
        gel_markup::render_pretty(&node).unwrap(),
        node.to_pretty_string().unwrap()
    );
}

#[test]
fn test_write_to_sink() {
    let mut out = Vec::new();
    DIV.text(["text"]).write_to(&mut out).unwrap();
    assert_eq!(out, b"<div>text</div>");

    let mut out = Vec::new();
    DIV.text(["text"])
        .write_with_indentation(&Indentation::new(), &mut out)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "<div>\n  text\n</div>");
}
