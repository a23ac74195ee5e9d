//! Sample trees rendered by `gel demo`

use gel_markup::elements::{BODY, DIV, H1, HEAD, TITLE};
use gel_markup::{att, html5, text, Node};

pub const AVAILABLE_DEMOS: &[&str] = &["container", "document"];

pub const DEFAULT_DEMO: &str = "container";

/// A container div holding text and a nested row.
pub fn container() -> Node {
    DIV.add([
        att("class", "container"),
        att("id", "id-1"),
        text("text"),
        DIV.add([att("class", "row"), text("Hello, World!")]),
    ])
}

/// A minimal html5 document.
pub fn document() -> Node {
    html5(
        HEAD.add([TITLE.text(["Demo HTML Doc"])]),
        BODY.add([H1.text(["Hello, World!"])]),
    )
}

pub fn build_demo(name: &str) -> Option<Node> {
    match name {
        "container" => Some(container()),
        "document" => Some(document()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_demo_builds() {
        for name in AVAILABLE_DEMOS {
            assert!(build_demo(name).is_some(), "{name} should build");
        }
        assert!(build_demo("missing").is_none());
    }

    #[test]
    fn container_renders_compact() {
        assert_eq!(
            container().to_string(),
            r#"<div class="container" id="id-1">text<div class="row">Hello, World!</div></div>"#
        );
    }

    #[test]
    fn document_starts_with_doctype() {
        let rendered = document().to_string();
        assert!(rendered.starts_with("<!doctype html><html><head>"));
        assert!(rendered.ends_with("</body></html>"));
    }
}
