//! Anchor slug derivation.
//!
//! The same function backs both the links in the generated list and the ids
//! injected into the heading markup; the two must always agree for a given
//! heading text. Identical titles yield identical slugs on purpose (no
//! uniqueness suffixing), so duplicate headings collide silently.

use std::sync::OnceLock;

use regex::Regex;

fn punctuation_re() -> &'static Regex {
    static PUNCT_RE: OnceLock<Regex> = OnceLock::new();
    // All Unicode punctuation except `-`, which is the slug word separator;
    // stripping it would make re-sanitizing a slug change it.
    PUNCT_RE.get_or_init(|| Regex::new(r"[\p{P}--\x2D]").expect("static regex is valid"))
}

/// Derive a URL-safe anchor slug from heading text.
pub fn sanitize_anchor(text: &str) -> String {
    // Punctuation goes first, then non-breaking-space entities. The order is
    // load-bearing: `&` and `;` count as punctuation, so an `&nbsp;` entity
    // leaves the bare word "nbsp" in the slug, and the anchor injector
    // depends on deriving the exact same slug from the same raw markup.
    let no_punctuation = punctuation_re().replace_all(text, "");
    let no_nbsp = no_punctuation.replace("&nbsp;", " ");
    let slugged = slug::slugify(no_nbsp);
    urlencoding::encode(&slugged).into_owned()
}

#[cfg(test)]
mod tests;
