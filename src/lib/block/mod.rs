//! Content blocks and the reusable-fragment boundary.
//!
//! A document snapshot arrives as a tree of [`Block`]s, the shape produced by
//! the host platform's block parser. Reusable fragments are stored outside
//! the document and show up in the tree as a bare `ref` attribute; the
//! [`ResolveBlocks`] collaborator fetches their trees on demand.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Block type tag that marks a heading leaf.
pub const HEADING_BLOCK: &str = "core/heading";

/// Identifier of a reusable fragment stored outside the document.
pub type RefId = u64;

/// One node of the parsed document tree.
///
/// A leaf carries raw markup in `inner_html`; a container carries child
/// blocks instead. A block with `attrs.reference` set stands in for an
/// externally stored fragment. The tree is read-only input, owned by the
/// caller for the duration of one build.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Block {
    pub block_name: Option<String>,
    pub attrs: BlockAttrs,
    #[serde(rename = "innerHTML")]
    pub inner_html: String,
    pub inner_blocks: Vec<Block>,
}

/// Block attributes we care about; everything else is ignored on input.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct BlockAttrs {
    #[serde(rename = "ref")]
    pub reference: Option<RefId>,
}

impl Block {
    pub fn is_heading(&self) -> bool {
        self.block_name.as_deref() == Some(HEADING_BLOCK)
    }

    /// Leaf heading block; handy for fixtures.
    pub fn heading(markup: &str) -> Self {
        Self {
            block_name: Some(HEADING_BLOCK.to_string()),
            inner_html: markup.to_string(),
            ..Self::default()
        }
    }

    /// Container block with the given children.
    pub fn group(children: Vec<Block>) -> Self {
        Self {
            block_name: Some("core/group".to_string()),
            inner_blocks: children,
            ..Self::default()
        }
    }

    /// Indirection block pointing at a reusable fragment.
    pub fn reference(reference: RefId) -> Self {
        Self {
            block_name: Some("core/block".to_string()),
            attrs: BlockAttrs {
                reference: Some(reference),
            },
            ..Self::default()
        }
    }
}

/// Fetches the node tree of a reusable fragment by reference id.
///
/// Resolution is a blocking call to the content store and is expected to
/// return a complete tree; there are no partial results.
pub trait ResolveBlocks {
    fn resolve(&self, reference: RefId) -> Result<Vec<Block>, ResolveError>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no reusable block stored under ref {0}")]
    NotFound(RefId),
}

/// In-memory fragment store; used by the CLI and in tests.
impl ResolveBlocks for HashMap<RefId, Vec<Block>> {
    fn resolve(&self, reference: RefId) -> Result<Vec<Block>, ResolveError> {
        self.get(&reference)
            .cloned()
            .ok_or(ResolveError::NotFound(reference))
    }
}

/// A document store that has no reusable fragments at all.
pub struct NoReusableBlocks;

impl ResolveBlocks for NoReusableBlocks {
    fn resolve(&self, reference: RefId) -> Result<Vec<Block>, ResolveError> {
        Err(ResolveError::NotFound(reference))
    }
}

#[cfg(test)]
mod tests;
