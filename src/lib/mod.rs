//! Table of contents fragments for block-structured documents.
//!
//! The crate walks a tree of content blocks (including reusable fragments
//! referenced by id), lifts out the headings it finds, and renders a nested,
//! well-formed list of anchor links. [`anchor::inject_anchor`] stamps the
//! same slug onto the heading markup itself, so the generated links resolve
//! on the final page.
//!
//! One render is one pure function of (block tree snapshot, configuration):
//! there is no shared state between builds and no caching. The entry point
//! in [`render`] always returns a fragment string; documents without blocks
//! or without headings come back as a warning notice rather than an error.

pub mod anchor;
pub mod block;
pub mod config;
pub mod extract;
pub mod heading;
pub mod render;
pub mod sanitize;
pub mod toc;
pub mod utils;

pub use block::{Block, RefId, ResolveBlocks, ResolveError};
pub use config::{Messages, TocConfig};
pub use render::{filter_heading_block, render};
