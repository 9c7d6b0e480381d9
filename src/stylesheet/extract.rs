// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Stylesheet URL extraction
//!
//! Harvests every URL from every stylesheet list block of the final,
//! fully-inlined document. Blocks are visited in document order; within
//! one block URLs come out in pattern-group order (string-holder entries,
//! then URL-holder entries, then self-closing value forms), not strict
//! document order. Downstream style application depends on the resulting
//! sequence, so the grouping is kept as-is.

use lazy_static::lazy_static;
use regex::Regex;

use super::blocks::stylesheet_blocks;

lazy_static! {
    static ref STRING_ENTRY: Regex =
        Regex::new(r"<String\s*>\s*([^<]*?)\s*</String\s*>").unwrap();
    static ref URL_ENTRY: Regex = Regex::new(r"<URL\s*>\s*([^<]*?)\s*</URL\s*>").unwrap();
    static ref VALUE_ENTRY: Regex = Regex::new(
        r#"<[A-Za-z][A-Za-z0-9]*\s+(?:fx:)?value\s*=\s*(?:"([^"]*)"|'([^']*)')\s*/>"#
    )
    .unwrap();
}

/// Collect every stylesheet URL from `text` into one ordered list.
///
/// Recognizes the three entry shapes (`<String>…</String>`, `<URL>…</URL>`
/// and a self-closing element with a `value` attribute) so documents that
/// skipped normalization still extract fully. Empty entries are dropped.
pub fn extract_stylesheet_urls(text: &str) -> Vec<String> {
    let mut urls = Vec::new();

    for block in stylesheet_blocks(text) {
        let content = &text[block.content_start..block.content_end];

        for caps in STRING_ENTRY.captures_iter(content) {
            push_url(&mut urls, &caps[1]);
        }
        for caps in URL_ENTRY.captures_iter(content) {
            push_url(&mut urls, &caps[1]);
        }
        for caps in VALUE_ENTRY.captures_iter(content) {
            let value = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            push_url(&mut urls, value);
        }
    }

    urls
}

fn push_url(urls: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        urls.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_canonical_entries() {
        let xml = "<stylesheets><String>a.css</String><String>b.css</String></stylesheets>";
        let urls = extract_stylesheet_urls(xml);

        assert_eq!(urls, vec!["a.css", "b.css"]);
    }

    #[test]
    fn test_extracts_mixed_shapes() {
        let xml = r#"<stylesheets><String>a.css</String><URL>b.css</URL><URL value="c.css"/></stylesheets>"#;
        let urls = extract_stylesheet_urls(xml);

        assert_eq!(urls, vec!["a.css", "b.css", "c.css"]);
    }

    #[test]
    fn test_pattern_group_order_within_block() {
        // The URL-holder entry comes first in the document but is reported
        // after the string-holder entry. Grouping quirk, kept on purpose.
        let xml = "<stylesheets><URL>first.css</URL><String>second.css</String></stylesheets>";
        let urls = extract_stylesheet_urls(xml);

        assert_eq!(urls, vec!["second.css", "first.css"]);
    }

    #[test]
    fn test_blocks_in_document_order() {
        let xml = "<stylesheets><String>a.css</String></stylesheets>\
                   <Scene.stylesheets><String>b.css</String></Scene.stylesheets>";
        let urls = extract_stylesheet_urls(xml);

        assert_eq!(urls, vec!["a.css", "b.css"]);
    }

    #[test]
    fn test_self_closing_fx_value_form() {
        let xml = r#"<stylesheets><String fx:value="a.css"/></stylesheets>"#;
        let urls = extract_stylesheet_urls(xml);

        assert_eq!(urls, vec!["a.css"]);
    }

    #[test]
    fn test_outside_blocks_ignored() {
        let xml = r#"<String>not-a-style</String><stylesheets><String>a.css</String></stylesheets>"#;
        let urls = extract_stylesheet_urls(xml);

        assert_eq!(urls, vec!["a.css"]);
    }

    #[test]
    fn test_empty_entries_dropped() {
        let xml = "<stylesheets><String></String><String>  </String><String>a.css</String></stylesheets>";
        let urls = extract_stylesheet_urls(xml);

        assert_eq!(urls, vec!["a.css"]);
    }

    #[test]
    fn test_no_blocks() {
        assert!(extract_stylesheet_urls("<VBox/>").is_empty());
    }
}
