//! Nested list building.
//!
//! Turns the flat, ordered heading sequence into one well-formed list
//! fragment. The top nesting level is the shallowest heading actually
//! present, not necessarily level 1, and filtered headings are dropped
//! without leaving a placeholder or moving the depth tracker.

use std::fmt::Write as _;

use crate::{
    config::{Messages, TocConfig},
    heading::Heading,
    sanitize::sanitize_anchor,
    utils::{escape_attr, strip_tags},
};

/// Class token that hides a heading from the list without removing it from
/// the document.
pub const HIDDEN_CLASS_MARKER: &str = "class=\"simpletoc-hidden";

/// Build the TOC fragment for an ordered heading sequence.
///
/// An empty sequence produces the title line (unless hidden) followed by a
/// warning notice instead of list markup. `permalink` is only consulted
/// when `config.use_absolute_urls` is set.
pub fn build_toc(
    headings: &[Heading],
    config: &TocConfig,
    permalink: Option<&str>,
    messages: &Messages,
) -> String {
    let mut html = String::new();
    if !config.hide_title {
        write!(
            html,
            "<h2 class=\"simpletoc-title\">{}</h2>",
            messages.toc_title
        )
        .unwrap();
    }

    if headings.is_empty() {
        write!(
            html,
            "<p class=\"components-notice is-warning\">{} {}</p>",
            messages.no_headings, messages.save_first
        )
        .unwrap();
        return html;
    }

    html.push_str(&build_list(headings, config, permalink));

    match &config.wrapper_class {
        Some(class) => {
            let class = escape_attr(&strip_tags(class));
            format!("<div class=\"{class}\">{html}</div>")
        }
        None => html,
    }
}

fn build_list(headings: &[Heading], config: &TocConfig, permalink: Option<&str>) -> String {
    let list_tag = if config.ordered { "ol" } else { "ul" };
    let link_class = if config.smooth_scroll {
        " class=\"smooth-scroll\""
    } else {
        ""
    };
    let base_url = if config.use_absolute_urls {
        permalink.unwrap_or("")
    } else {
        ""
    };

    // Top level present in the document, computed before any filtering.
    let initial = headings.iter().map(|h| h.level).min().unwrap_or(6);
    let mut current = initial;
    // Levels that still have an open <li>, innermost last. Tracking the open
    // items explicitly keeps the fragment balanced even when filtering
    // removes the headings the lookahead-based closing would have relied on.
    let mut open_items: Vec<u8> = Vec::new();

    let mut list = String::new();
    for (index, heading) in headings.iter().enumerate() {
        // Lookahead is over the raw sequence; skipped headings neither emit
        // markup nor move the depth tracker.
        let next_level = headings.get(index + 1).map(|next| next.level);

        if heading.level > config.max_level || heading.level < config.min_level {
            continue;
        }
        if heading.markup.contains(HIDDEN_CLASS_MARKER) {
            continue;
        }

        if heading.level == current {
            if open_items.last() == Some(&current) {
                list.push_str("</li>");
                open_items.pop();
            }
            list.push_str("<li>\n");
            open_items.push(current);
        } else {
            while current < heading.level {
                write!(list, "\n\t\t<{list_tag}><li>\n").unwrap();
                current += 1;
                open_items.push(current);
            }
        }

        let link = sanitize_anchor(&heading.title);
        write!(
            list,
            "<a{link_class} href=\"{base_url}#{link}\">{}</a>",
            heading.title
        )
        .unwrap();

        if let Some(next_level) = next_level {
            while current > next_level {
                if open_items.last() == Some(&current) {
                    list.push_str("</li>");
                    open_items.pop();
                }
                write!(list, "</{list_tag}>\n").unwrap();
                current -= 1;
            }
            if current == next_level && open_items.last() == Some(&current) {
                list.push_str("</li>");
                open_items.pop();
            }
        }
    }

    // Close everything back down to the top level. This also covers the
    // case where the trailing headings were filtered out and the in-loop
    // lookahead never saw the end of the sequence.
    while current > initial {
        if open_items.last() == Some(&current) {
            list.push_str("</li>");
            open_items.pop();
        }
        write!(list, "</{list_tag}>\n").unwrap();
        current -= 1;
    }
    if open_items.last() == Some(&current) {
        list.push_str("</li>");
    }

    format!("<{list_tag} class=\"simpletoc\">\n{list}</{list_tag}>")
}
