use std::sync::OnceLock;

use regex::Regex;

use crate::utils::strip_tags;

fn heading_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<h([1-6])").expect("static regex is valid"))
}

/// A heading lifted out of the block tree.
///
/// The level comes from the first `<hN` opening tag in the raw markup, not
/// from any block attribute; the title is the tag-stripped text with
/// entities left untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    pub markup: String,
    pub level: u8,
    pub title: String,
}

impl Heading {
    /// Build a heading from raw block markup, trimming surrounding
    /// whitespace. Returns `None` when the markup carries no `<h1>`..`<h6>`
    /// opening tag.
    pub fn from_markup(raw: &str) -> Option<Self> {
        let markup = raw.trim();
        let level = heading_level(markup)?;
        Some(Self {
            markup: markup.to_string(),
            level,
            title: strip_tags(markup),
        })
    }
}

/// Level of the first heading tag in the markup, if any.
pub fn heading_level(markup: &str) -> Option<u8> {
    let captures = heading_tag_re().captures(markup)?;
    captures.get(1)?.as_str().parse().ok()
}
