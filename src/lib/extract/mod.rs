//! Recursive heading discovery across the block tree.

use std::collections::HashSet;

use crate::{
    block::{Block, RefId, ResolveBlocks},
    heading::Heading,
};

/// Collect every heading in document order, following reusable-fragment
/// references through `resolver`.
///
/// A reference that cannot be resolved, or that points back into a fragment
/// currently being walked, is skipped with a warning; one broken fragment
/// must not take the whole page down.
pub fn collect_headings(blocks: &[Block], resolver: &impl ResolveBlocks) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut visiting: HashSet<RefId> = HashSet::new();
    walk(blocks, resolver, &mut visiting, &mut headings);
    headings
}

fn walk(
    blocks: &[Block],
    resolver: &impl ResolveBlocks,
    visiting: &mut HashSet<RefId>,
    out: &mut Vec<Heading>,
) {
    for block in blocks {
        if let Some(reference) = block.attrs.reference {
            if !visiting.insert(reference) {
                tracing::warn!(reference, "circular reusable block reference, skipping");
                continue;
            }
            match resolver.resolve(reference) {
                Ok(fragment) => walk(&fragment, resolver, visiting, out),
                Err(err) => {
                    tracing::warn!(reference, %err, "unresolvable reusable block, skipping");
                }
            }
            visiting.remove(&reference);
        } else if !block.inner_blocks.is_empty() {
            walk(&block.inner_blocks, resolver, visiting, out);
        } else if block.is_heading() {
            if let Some(heading) = Heading::from_markup(&block.inner_html) {
                out.push(heading);
            }
        }
    }
}
