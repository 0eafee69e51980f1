use std::collections::HashMap;

use super::{Block, NoReusableBlocks, RefId, ResolveBlocks, ResolveError};

#[test]
fn deserializes_parsed_block_json() {
    let json = r#"{
        "blockName": "core/heading",
        "attrs": { "level": 2 },
        "innerBlocks": [],
        "innerHTML": "<h2>Hi</h2>"
    }"#;
    let block: Block = serde_json::from_str(json).unwrap();
    assert!(block.is_heading());
    assert_eq!(block.inner_html, "<h2>Hi</h2>");
    assert_eq!(block.attrs.reference, None);
}

#[test]
fn deserializes_reference_attr() {
    let json = r#"{ "blockName": "core/block", "attrs": { "ref": 123 } }"#;
    let block: Block = serde_json::from_str(json).unwrap();
    assert_eq!(block.attrs.reference, Some(123));
    assert!(block.inner_blocks.is_empty());
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let block: Block = serde_json::from_str("{}").unwrap();
    assert_eq!(block, Block::default());
    assert!(!block.is_heading());
}

#[test]
fn map_resolver_returns_stored_fragments() {
    let fragment = vec![Block::heading("<h2>Stored</h2>")];
    let store: HashMap<RefId, Vec<Block>> = HashMap::from([(7, fragment.clone())]);
    assert_eq!(store.resolve(7), Ok(fragment));
    assert_eq!(store.resolve(9), Err(ResolveError::NotFound(9)));
}

#[test]
fn empty_store_never_resolves() {
    assert_eq!(NoReusableBlocks.resolve(1), Err(ResolveError::NotFound(1)));
}
