use std::{collections::HashMap, env, fs};

use color_eyre::eyre::eyre;
use libsimpletoc::{
    block::{Block, RefId},
    config::{Messages, TocConfig},
    render::render,
};
use serde::Deserialize;

/// Input document: the parsed block tree plus everything the renderer needs
/// from the host, in one JSON file.
///
/// ```json
/// {
///   "blocks": [ { "blockName": "core/heading", "innerHTML": "<h2>Intro</h2>" } ],
///   "reusable": { "7": [ { "blockName": "core/heading", "innerHTML": "<h3>Shared</h3>" } ] },
///   "permalink": "https://example.test/post/",
///   "config": { "ordered": true }
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Document {
    blocks: Vec<Block>,
    reusable: HashMap<RefId, Vec<Block>>,
    permalink: Option<String>,
    config: TocConfig,
    messages: Messages,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let path = env::args()
        .nth(1)
        .ok_or_else(|| eyre!("usage: simpletoc <document.json>"))?;
    let raw = fs::read_to_string(&path)?;
    let document: Document = serde_json::from_str(&raw)?;

    let fragment = render(
        &document.config,
        &document.blocks,
        &document.reusable,
        document.permalink.as_deref(),
        &document.messages,
    );
    println!("{fragment}");

    Ok(())
}
