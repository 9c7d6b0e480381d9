// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Stylesheet entry normalization
//!
//! FXML accepts several spellings for one stylesheet entry. Inside each
//! stylesheet list block every spelling is canonicalized to a bare
//! string-holder element, `<String>URL</String>`, so later passes only
//! ever deal with one shape. Idempotent: the canonical form itself is
//! never touched.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::blocks::stylesheet_blocks;

lazy_static! {
    /// `<String fx:value="..."/>`, either quote style, self-closing or paired
    static ref STRING_VALUE_ATTR: Regex = Regex::new(
        r#"<String\s+fx:value\s*=\s*(?:"([^"]*)"|'([^']*)')\s*(?:/>|>\s*</String\s*>)"#
    )
    .unwrap();
    /// `<URL value="..."/>`, either quote style, self-closing or paired
    static ref URL_VALUE_ATTR: Regex = Regex::new(
        r#"<URL\s+value\s*=\s*(?:"([^"]*)"|'([^']*)')\s*(?:/>|>\s*</URL\s*>)"#
    )
    .unwrap();
    /// `<URL>...</URL>` wrapping the URL as text
    static ref URL_TEXT: Regex = Regex::new(r"<URL\s*>\s*([^<]*?)\s*</URL\s*>").unwrap();
}

fn quoted_value<'a>(caps: &'a Captures) -> &'a str {
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str())
        .unwrap_or_default()
}

/// Canonicalize every entry of every stylesheet list block in `fragment`
/// to `<String>URL</String>`.
///
/// Runs once per fragment, after resource rewriting and before include
/// scanning; text outside stylesheet blocks is never modified.
pub fn normalize_stylesheet_blocks(fragment: &str) -> String {
    let blocks = stylesheet_blocks(fragment);
    if blocks.is_empty() {
        return fragment.to_string();
    }

    let mut out = String::with_capacity(fragment.len());
    let mut last = 0;
    for block in &blocks {
        out.push_str(&fragment[last..block.content_start]);
        out.push_str(&normalize_entries(
            &fragment[block.content_start..block.content_end],
        ));
        out.push_str(&fragment[block.content_end..block.end]);
        last = block.end;
    }
    out.push_str(&fragment[last..]);
    out
}

fn normalize_entries(content: &str) -> String {
    let canon = |caps: &Captures| format!("<String>{}</String>", quoted_value(caps));
    let out = STRING_VALUE_ATTR.replace_all(content, canon);
    let out = URL_VALUE_ATTR.replace_all(&out, canon);
    let out = URL_TEXT.replace_all(&out, |caps: &Captures| {
        format!("<String>{}</String>", &caps[1])
    });
    out.into_owned()
}
