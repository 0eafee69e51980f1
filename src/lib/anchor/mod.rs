//! Anchor id injection for heading markup.

use lol_html::{RewriteStrSettings, element, rewrite_str};

use crate::{sanitize::sanitize_anchor, utils::strip_tags};

/// Stamp the heading's anchor id onto its markup.
///
/// The id is derived from the whole input's tag-stripped text, which is
/// exactly what the list builder feeds into the slug sanitizer, so the
/// generated links resolve. Any existing id is overwritten. Markup that
/// cannot be rewritten comes back unchanged; a single broken heading must
/// not break the rest of the page.
pub fn inject_anchor(markup: &str) -> String {
    let anchor = sanitize_anchor(&strip_tags(markup));
    let without_nbsp = markup.replace("&nbsp;", " ");

    let handlers = ["h1", "h2", "h3", "h4", "h5", "h6"]
        .into_iter()
        .map(|tag| {
            element!(tag, |el| {
                el.set_attribute("id", &anchor)?;
                Ok(())
            })
        })
        .collect();

    match rewrite_str(
        &without_nbsp,
        RewriteStrSettings {
            element_content_handlers: handlers,
            ..RewriteStrSettings::default()
        },
    ) {
        Ok(rewritten) => rewritten,
        Err(err) => {
            tracing::warn!(%err, "failed to rewrite heading markup, leaving it as-is");
            markup.to_string()
        }
    }
}
