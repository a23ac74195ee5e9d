//! Whole-document helpers

use crate::elements::HTML;
use crate::node::{frag, text, Node};

pub const HTML5_DOCTYPE: &str = "<!doctype html>";

/// A doctype followed by `<html>` wrapping `head` and `body`.
pub fn html5(head: impl Into<Node>, body: impl Into<Node>) -> Node {
    frag([text(HTML5_DOCTYPE), HTML.add([head.into(), body.into()])])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{BODY, H1, HEAD, TITLE};

    #[test]
    fn compact_page() {
        let page = html5(HEAD.add([TITLE.text(["Demo"])]), BODY.add([H1.text(["Hello"])]));
        assert_eq!(
            page.to_string(),
            "<!doctype html><html><head><title>Demo</title></head><body><h1>Hello</h1></body></html>"
        );
    }

    #[test]
    fn indented_page() {
        let page = html5(HEAD.build(), BODY.text(["Hi"]));
        assert_eq!(
            page.to_pretty_string().unwrap(),
            "<!doctype html>\n<html>\n  <head></head>\n  <body>\n    Hi\n  </body>\n</html>"
        );
    }
}
