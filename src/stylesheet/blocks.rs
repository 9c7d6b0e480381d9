// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Stylesheet list block scanning
//!
//! A block is a `<stylesheets>` region, optionally with a dotted
//! property-qualifier prefix on the tag name (`<Scene.stylesheets>`),
//! through the matching close tag. Matching is textual: open tags are
//! found by pattern, the close tag by string search from the end of the
//! open tag. An open tag with no close tag is ignored rather than treated
//! as running to end of document.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Open tag of a stylesheet list block, qualified or bare
    static ref STYLESHEETS_OPEN: Regex =
        Regex::new(r"<((?:[A-Za-z][A-Za-z0-9]*\.)?stylesheets)\s*>").unwrap();
}

/// One stylesheet list region within a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StylesheetBlock {
    /// Byte offset of `<`
    pub start: usize,
    /// Byte offset just past the open tag
    pub content_start: usize,
    /// Byte offset of the matching `</`
    pub content_end: usize,
    /// Byte offset just past the close tag
    pub end: usize,
}

/// Scan `text` for stylesheet list blocks in document order.
pub(crate) fn stylesheet_blocks(text: &str) -> Vec<StylesheetBlock> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(m) = STYLESHEETS_OPEN.captures(&text[pos..]) {
        let (Some(open), Some(name)) = (m.get(0), m.get(1)) else {
            break;
        };
        let content_start = pos + open.end();
        let close_tag = format!("</{}>", name.as_str());

        match text[content_start..].find(&close_tag) {
            Some(rel) => {
                let content_end = content_start + rel;
                blocks.push(StylesheetBlock {
                    start: pos + open.start(),
                    content_start,
                    content_end,
                    end: content_end + close_tag.len(),
                });
                pos = content_end + close_tag.len();
            }
            None => {
                // Unterminated block, skip the open tag and keep scanning
                pos = content_start;
            }
        }
    }

    blocks
}

/// Remove every stylesheet list block, open tag through matching close tag
/// inclusive, so the renderer never sees them. The harvested URLs are
/// applied out-of-band by the caller.
pub fn strip_stylesheet_blocks(text: &str) -> String {
    let blocks = stylesheet_blocks(text);
    if blocks.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for block in &blocks {
        out.push_str(&text[last..block.start]);
        last = block.end;
    }
    out.push_str(&text[last..]);
    out
}
