//! End-to-end fragment rendering.

use std::fmt::Write as _;

use crate::{
    anchor::inject_anchor,
    block::{Block, HEADING_BLOCK, ResolveBlocks},
    config::{Messages, TocConfig},
    extract::collect_headings,
    toc::build_toc,
};

/// Render the TOC fragment for a document snapshot.
///
/// This never fails past its own boundary: an empty document or a document
/// without headings comes back as a warning notice, so the host can always
/// splice the result into the page.
pub fn render(
    config: &TocConfig,
    blocks: &[Block],
    resolver: &impl ResolveBlocks,
    permalink: Option<&str>,
    messages: &Messages,
) -> String {
    if blocks.is_empty() {
        let mut html = String::new();
        if !config.hide_title {
            write!(
                html,
                "<h2 class=\"simpletoc-title\">{}</h2>",
                messages.toc_title
            )
            .unwrap();
        }
        write!(
            html,
            "<p class=\"components-notice is-warning\">{} {}</p>",
            messages.no_blocks, messages.save_first
        )
        .unwrap();
        return html;
    }

    let headings = collect_headings(blocks, resolver);
    build_toc(&headings, config, permalink, messages)
}

/// Per-block rendering hook: stamps the anchor id onto heading blocks and
/// leaves every other block untouched.
pub fn filter_heading_block(block_name: &str, content: &str) -> String {
    if block_name != HEADING_BLOCK {
        return content.to_string();
    }
    inject_anchor(content)
}
