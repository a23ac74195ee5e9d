//! Element table generation
//!
//! Emits the source of `gel-markup/src/elements.rs`: one `Tag` constant per
//! known element, normal tags first, then void tags. The output is
//! deterministic so it can be checked in and diffed.

use gel_markup::tags::{TagName, ALL_TAGS, NORMAL_TAGS, VOID_TAGS};
use serde::Serialize;

const HEADER: &str = "//! Element builders, one constant per known tag.
//!
//! Generated by `gel gen-tags`; do not edit by hand.

use crate::tag::Tag;
use crate::tags::TagName;

";

/// Render the full elements module.
pub fn generate_elements_module() -> String {
    let mut out = String::from(HEADER);

    out.push_str("// Normal tags requiring a closing tag.\n");
    for tag in NORMAL_TAGS {
        out.push_str(&constant_line(*tag));
    }

    out.push_str("\n// Void elements are self-closing.\n");
    for tag in VOID_TAGS {
        out.push_str(&constant_line(*tag));
    }

    out
}

fn constant_line(tag: TagName) -> String {
    format!(
        "pub const {}: Tag = Tag::known(TagName::{});\n",
        tag.const_name(),
        tag.variant_name()
    )
}

/// One row of `gel tags` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagInfo {
    pub name: &'static str,
    pub constant: String,
    pub void: bool,
}

impl From<TagName> for TagInfo {
    fn from(tag: TagName) -> Self {
        TagInfo {
            name: tag.as_str(),
            constant: tag.const_name(),
            void: tag.is_void(),
        }
    }
}

/// Which part of the tag table to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagFilter {
    All,
    Void,
    Normal,
}

pub fn list_tags(filter: TagFilter) -> Vec<TagInfo> {
    let tags: Vec<TagName> = match filter {
        TagFilter::All => ALL_TAGS.to_vec(),
        TagFilter::Void => VOID_TAGS.to_vec(),
        TagFilter::Normal => NORMAL_TAGS.to_vec(),
    };
    tags.into_iter().map(TagInfo::from).collect()
}
