// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! `@`-relative resource resolution
//!
//! FXML borrows the `@` prefix to mean "resolve this path relative to the
//! document's own location". Once a document is inlined into another one
//! that convention breaks, so every `@` reference is rewritten to an
//! absolute location while the owning fragment's base is still known.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use url::Url;

use crate::sanitize::escape_xml;

lazy_static! {
    /// `@`-valued occurrences of the known resource-bearing attributes
    static ref RESOURCE_ATTR: Regex = Regex::new(
        r#"(?i)(\s)(style|value|url|source|href|src)(\s*=\s*)"@([^"]*)""#
    )
    .unwrap();
    /// `@`-valued text content of a `<String>` holder element
    static ref STRING_TEXT: Regex =
        Regex::new(r"<String\s*>\s*@([^<]*)</String\s*>").unwrap();
    /// `@`-valued text content of a `<URL>` holder element
    static ref URL_TEXT: Regex =
        Regex::new(r"<URL\s*>\s*@([^<]*)</URL\s*>").unwrap();
}

/// Rewrite every `@`-relative resource reference in `fragment` to an
/// absolute location resolved against `base`.
///
/// Covers the fixed attribute set (`style`, `value`, `url`, `source`,
/// `href`, `src`) and the text content of `<String>` and `<URL>` elements.
/// Rewritten values are re-escaped for the four reserved markup
/// characters. An occurrence whose suffix does not resolve against the
/// base is left untouched; resolution failures never abort the pass.
pub fn rewrite_resource_paths(fragment: &str, base: &Url) -> String {
    let out = RESOURCE_ATTR.replace_all(fragment, |caps: &Captures| {
        match base.join(caps[4].trim()) {
            Ok(abs) => format!(
                "{}{}{}\"{}\"",
                &caps[1],
                &caps[2],
                &caps[3],
                escape_xml(abs.as_str())
            ),
            Err(_) => caps[0].to_string(),
        }
    });
    let out = STRING_TEXT.replace_all(&out, |caps: &Captures| {
        match base.join(caps[1].trim()) {
            Ok(abs) => format!("<String>{}</String>", escape_xml(abs.as_str())),
            Err(_) => caps[0].to_string(),
        }
    });
    let out = URL_TEXT.replace_all(&out, |caps: &Captures| {
        match base.join(caps[1].trim()) {
            Ok(abs) => format!("<URL>{}</URL>", escape_xml(abs.as_str())),
            Err(_) => caps[0].to_string(),
        }
    });
    out.into_owned()
}
