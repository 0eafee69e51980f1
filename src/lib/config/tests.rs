use super::{Messages, TocConfig};

#[test]
fn defaults_match_block_registration() {
    let config = TocConfig::default();
    assert!(!config.hide_title);
    assert!(!config.ordered);
    assert!(!config.smooth_scroll);
    assert_eq!(config.min_level, 2);
    assert_eq!(config.max_level, 6);
    assert!(!config.use_absolute_urls);
    assert_eq!(config.wrapper_class, None);
}

#[test]
fn deserializes_partial_config() {
    let config: TocConfig = serde_json::from_str(r#"{ "ordered": true, "max_level": 3 }"#).unwrap();
    assert!(config.ordered);
    assert_eq!(config.max_level, 3);
    assert_eq!(config.min_level, 2);
}

#[test]
fn messages_default_to_english() {
    let messages = Messages::default();
    assert_eq!(messages.toc_title, "Table of Contents");
    assert_eq!(messages.no_blocks, "No blocks found.");
    assert_eq!(messages.no_headings, "No headings found.");
    assert_eq!(messages.save_first, "Save or update post first.");
}
