use std::sync::LazyLock;

use regex::{Matches, Regex};

pub const DIAGRAM_MARKER: &str = "erDiagram";
pub const FENCE: &str = "```";

// non-greedy so that a block never runs past its own closing fence
static BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(DIAGRAM_MARKER),
        regex::escape(FENCE)
    ))
    .expect("block pattern is a valid regex")
});

/// Lazily yields the ER diagram blocks of a document, in order of appearance.
///
/// A block spans from a `erDiagram` marker up to the first fence that follows it.
/// The fence is dropped and the block trimmed, so every yielded block starts with the marker.
/// A marker without a closing fence yields nothing.
pub struct Blocks<'a> {
    matches: Matches<'static, 'a>,
}

impl<'a> Blocks<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            matches: BLOCK_PATTERN.find_iter(source),
        }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.matches.next()?.as_str();
        Some(block.strip_suffix(FENCE).unwrap_or(block).trim())
    }
}

pub fn blocks(document: &str) -> Blocks<'_> {
    Blocks::new(document)
}

pub fn extract_blocks(document: &str) -> Vec<String> {
    blocks(document).map(str::to_owned).collect()
}
