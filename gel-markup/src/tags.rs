//! Tag classification
//!
//! Every known element name is either *void* (self-closing, content is never
//! rendered) or *normal* (always emits a closing tag). The two lists below are
//! disjoint and together make up [`ALL_TAGS`]. Lookups go through a set that is
//! built once on first use and never mutated afterwards.
//!
//! The element constants in [`crate::elements`] are generated from these lists
//! by `gel gen-tags`.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

macro_rules! tag_names {
    (
        normal: [$($normal:ident => $normal_name:literal),* $(,)?],
        void: [$($void:ident => $void_name:literal),* $(,)?] $(,)?
    ) => {
        /// A known element name
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TagName {
            $($normal,)*
            $($void,)*
        }

        /// Elements that require a closing tag
        pub const NORMAL_TAGS: &[TagName] = &[$(TagName::$normal),*];

        /// Self-closing elements
        pub const VOID_TAGS: &[TagName] = &[$(TagName::$void),*];

        /// Every known element, normal tags first
        pub const ALL_TAGS: &[TagName] = &[$(TagName::$normal,)* $(TagName::$void),*];

        impl TagName {
            /// The name as it appears in markup (lower-case)
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(TagName::$normal => $normal_name,)*
                    $(TagName::$void => $void_name,)*
                }
            }

            /// The Rust identifier of the variant, e.g. `"Div"` or `"H1"`
            pub const fn variant_name(self) -> &'static str {
                match self {
                    $(TagName::$normal => stringify!($normal),)*
                    $(TagName::$void => stringify!($void),)*
                }
            }
        }
    };
}

tag_names! {
    normal: [
        A => "a",
        Abbr => "abbr",
        Address => "address",
        Article => "article",
        Aside => "aside",
        Audio => "audio",
        B => "b",
        Bdi => "bdi",
        Bdo => "bdo",
        Blockquote => "blockquote",
        Body => "body",
        Button => "button",
        Canvas => "canvas",
        Caption => "caption",
        Cite => "cite",
        Code => "code",
        Colgroup => "colgroup",
        Data => "data",
        Datalist => "datalist",
        Dd => "dd",
        Del => "del",
        Dfn => "dfn",
        Div => "div",
        Dl => "dl",
        Dt => "dt",
        Em => "em",
        Fieldset => "fieldset",
        Figcaption => "figcaption",
        Figure => "figure",
        Footer => "footer",
        Form => "form",
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        H5 => "h5",
        H6 => "h6",
        Head => "head",
        Header => "header",
        Html => "html",
        I => "i",
        Iframe => "iframe",
        Ins => "ins",
        Kbd => "kbd",
        Label => "label",
        Legend => "legend",
        Li => "li",
        Main => "main",
        Map => "map",
        Mark => "mark",
        Meter => "meter",
        Nav => "nav",
        Noscript => "noscript",
        Object => "object",
        Ol => "ol",
        Optgroup => "optgroup",
        Option => "option",
        Output => "output",
        P => "p",
        Pre => "pre",
        Progress => "progress",
        Q => "q",
        Rb => "rb",
        Rp => "rp",
        Rt => "rt",
        Rtc => "rtc",
        Ruby => "ruby",
        S => "s",
        Samp => "samp",
        Script => "script",
        Section => "section",
        Select => "select",
        Small => "small",
        Span => "span",
        Strong => "strong",
        Style => "style",
        Sub => "sub",
        Sup => "sup",
        Table => "table",
        Tbody => "tbody",
        Td => "td",
        Template => "template",
        Textarea => "textarea",
        Tfoot => "tfoot",
        Th => "th",
        Thead => "thead",
        Time => "time",
        Title => "title",
        Tr => "tr",
        U => "u",
        Ul => "ul",
        Var => "var",
        Video => "video",
    ],
    void: [
        Area => "area",
        Base => "base",
        Br => "br",
        Col => "col",
        Embed => "embed",
        Hr => "hr",
        Img => "img",
        Input => "input",
        Keygen => "keygen",
        Link => "link",
        Meta => "meta",
        Param => "param",
        Source => "source",
        Track => "track",
        Wbr => "wbr",
    ],
}

static VOID_SET: Lazy<HashSet<TagName>> = Lazy::new(|| VOID_TAGS.iter().copied().collect());

static BY_NAME: Lazy<HashMap<&'static str, TagName>> =
    Lazy::new(|| ALL_TAGS.iter().map(|tag| (tag.as_str(), *tag)).collect());

/// Returns true if the given tag is self-closing.
pub fn is_void(tag: TagName) -> bool {
    VOID_SET.contains(&tag)
}

/// Classifies a tag by its markup name (case-insensitive).
///
/// Unknown names are never void.
pub fn is_void_name(name: &str) -> bool {
    name.parse::<TagName>().map(is_void).unwrap_or(false)
}

impl TagName {
    /// Whether this element is self-closing
    pub fn is_void(self) -> bool {
        is_void(self)
    }

    /// Upper-case constant name used by the generated element table
    pub fn const_name(self) -> String {
        self.variant_name().to_uppercase()
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The name did not match any known tag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tag name '{0}'")]
pub struct UnknownTag(pub String);

impl FromStr for TagName {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_NAME
            .get(s.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}
