//! Element builders, one constant per known tag.
//!
//! Generated by `gel gen-tags`; do not edit by hand.

use crate::tag::Tag;
use crate::tags::TagName;

// Normal tags requiring a closing tag.
pub const A: Tag = Tag::known(TagName::A);
pub const ABBR: Tag = Tag::known(TagName::Abbr);
pub const ADDRESS: Tag = Tag::known(TagName::Address);
pub const ARTICLE: Tag = Tag::known(TagName::Article);
pub const ASIDE: Tag = Tag::known(TagName::Aside);
pub const AUDIO: Tag = Tag::known(TagName::Audio);
pub const B: Tag = Tag::known(TagName::B);
pub const BDI: Tag = Tag::known(TagName::Bdi);
pub const BDO: Tag = Tag::known(TagName::Bdo);
pub const BLOCKQUOTE: Tag = Tag::known(TagName::Blockquote);
pub const BODY: Tag = Tag::known(TagName::Body);
pub const BUTTON: Tag = Tag::known(TagName::Button);
pub const CANVAS: Tag = Tag::known(TagName::Canvas);
pub const CAPTION: Tag = Tag::known(TagName::Caption);
pub const CITE: Tag = Tag::known(TagName::Cite);
pub const CODE: Tag = Tag::known(TagName::Code);
pub const COLGROUP: Tag = Tag::known(TagName::Colgroup);
pub const DATA: Tag = Tag::known(TagName::Data);
pub const DATALIST: Tag = Tag::known(TagName::Datalist);
pub const DD: Tag = Tag::known(TagName::Dd);
pub const DEL: Tag = Tag::known(TagName::Del);
pub const DFN: Tag = Tag::known(TagName::Dfn);
pub const DIV: Tag = Tag::known(TagName::Div);
pub const DL: Tag = Tag::known(TagName::Dl);
pub const DT: Tag = Tag::known(TagName::Dt);
pub const EM: Tag = Tag::known(TagName::Em);
pub const FIELDSET: Tag = Tag::known(TagName::Fieldset);
pub const FIGCAPTION: Tag = Tag::known(TagName::Figcaption);
pub const FIGURE: Tag = Tag::known(TagName::Figure);
pub const FOOTER: Tag = Tag::known(TagName::Footer);
pub const FORM: Tag = Tag::known(TagName::Form);
pub const H1: Tag = Tag::known(TagName::H1);
pub const H2: Tag = Tag::known(TagName::H2);
pub const H3: Tag = Tag::known(TagName::H3);
pub const H4: Tag = Tag::known(TagName::H4);
pub const H5: Tag = Tag::known(TagName::H5);
pub const H6: Tag = Tag::known(TagName::H6);
pub const HEAD: Tag = Tag::known(TagName::Head);
pub const HEADER: Tag = Tag::known(TagName::Header);
pub const HTML: Tag = Tag::known(TagName::Html);
pub const I: Tag = Tag::known(TagName::I);
pub const IFRAME: Tag = Tag::known(TagName::Iframe);
pub const INS: Tag = Tag::known(TagName::Ins);
pub const KBD: Tag = Tag::known(TagName::Kbd);
pub const LABEL: Tag = Tag::known(TagName::Label);
pub const LEGEND: Tag = Tag::known(TagName::Legend);
pub const LI: Tag = Tag::known(TagName::Li);
pub const MAIN: Tag = Tag::known(TagName::Main);
pub const MAP: Tag = Tag::known(TagName::Map);
pub const MARK: Tag = Tag::known(TagName::Mark);
pub const METER: Tag = Tag::known(TagName::Meter);
pub const NAV: Tag = Tag::known(TagName::Nav);
pub const NOSCRIPT: Tag = Tag::known(TagName::Noscript);
pub const OBJECT: Tag = Tag::known(TagName::Object);
pub const OL: Tag = Tag::known(TagName::Ol);
pub const OPTGROUP: Tag = Tag::known(TagName::Optgroup);
pub const OPTION: Tag = Tag::known(TagName::Option);
pub const OUTPUT: Tag = Tag::known(TagName::Output);
pub const P: Tag = Tag::known(TagName::P);
pub const PRE: Tag = Tag::known(TagName::Pre);
pub const PROGRESS: Tag = Tag::known(TagName::Progress);
pub const Q: Tag = Tag::known(TagName::Q);
pub const RB: Tag = Tag::known(TagName::Rb);
pub const RP: Tag = Tag::known(TagName::Rp);
pub const RT: Tag = Tag::known(TagName::Rt);
pub const RTC: Tag = Tag::known(TagName::Rtc);
pub const RUBY: Tag = Tag::known(TagName::Ruby);
pub const S: Tag = Tag::known(TagName::S);
pub const SAMP: Tag = Tag::known(TagName::Samp);
pub const SCRIPT: Tag = Tag::known(TagName::Script);
pub const SECTION: Tag = Tag::known(TagName::Section);
pub const SELECT: Tag = Tag::known(TagName::Select);
pub const SMALL: Tag = Tag::known(TagName::Small);
pub const SPAN: Tag = Tag::known(TagName::Span);
pub const STRONG: Tag = Tag::known(TagName::Strong);
pub const STYLE: Tag = Tag::known(TagName::Style);
pub const SUB: Tag = Tag::known(TagName::Sub);
pub const SUP: Tag = Tag::known(TagName::Sup);
pub const TABLE: Tag = Tag::known(TagName::Table);
pub const TBODY: Tag = Tag::known(TagName::Tbody);
pub const TD: Tag = Tag::known(TagName::Td);
pub const TEMPLATE: Tag = Tag::known(TagName::Template);
pub const TEXTAREA: Tag = Tag::known(TagName::Textarea);
pub const TFOOT: Tag = Tag::known(TagName::Tfoot);
pub const TH: Tag = Tag::known(TagName::Th);
pub const THEAD: Tag = Tag::known(TagName::Thead);
pub const TIME: Tag = Tag::known(TagName::Time);
pub const TITLE: Tag = Tag::known(TagName::Title);
pub const TR: Tag = Tag::known(TagName::Tr);
pub const U: Tag = Tag::known(TagName::U);
pub const UL: Tag = Tag::known(TagName::Ul);
pub const VAR: Tag = Tag::known(TagName::Var);
pub const VIDEO: Tag = Tag::known(TagName::Video);

// Void elements are self-closing.
pub const AREA: Tag = Tag::known(TagName::Area);
pub const BASE: Tag = Tag::known(TagName::Base);
pub const BR: Tag = Tag::known(TagName::Br);
pub const COL: Tag = Tag::known(TagName::Col);
pub const EMBED: Tag = Tag::known(TagName::Embed);
pub const HR: Tag = Tag::known(TagName::Hr);
pub const IMG: Tag = Tag::known(TagName::Img);
pub const INPUT: Tag = Tag::known(TagName::Input);
pub const KEYGEN: Tag = Tag::known(TagName::Keygen);
pub const LINK: Tag = Tag::known(TagName::Link);
pub const META: Tag = Tag::known(TagName::Meta);
pub const PARAM: Tag = Tag::known(TagName::Param);
pub const SOURCE: Tag = Tag::known(TagName::Source);
pub const TRACK: Tag = Tag::known(TagName::Track);
pub const WBR: Tag = Tag::known(TagName::Wbr);
