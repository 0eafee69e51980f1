use serde::Deserialize;

/// Options consumed as-is by the list builder; no UI wiring lives here.
///
/// `min_level`/`max_level` are deliberately not validated against each
/// other: contradictory bounds filter every heading and yield an empty,
/// still well-formed list.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TocConfig {
    pub hide_title: bool,
    pub ordered: bool,
    pub smooth_scroll: bool,
    pub min_level: u8,
    pub max_level: u8,
    pub use_absolute_urls: bool,
    pub wrapper_class: Option<String>,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            hide_title: false,
            ordered: false,
            smooth_scroll: false,
            min_level: 2,
            max_level: 6,
            use_absolute_urls: false,
            wrapper_class: None,
        }
    }
}

/// Localized strings for the fixed set of fragments the builder emits.
/// Defaults to English; hosts substitute their own translations.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Messages {
    pub toc_title: String,
    pub no_blocks: String,
    pub no_headings: String,
    pub save_first: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            toc_title: "Table of Contents".to_string(),
            no_blocks: "No blocks found.".to_string(),
            no_headings: "No headings found.".to_string(),
            save_first: "Save or update post first.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
