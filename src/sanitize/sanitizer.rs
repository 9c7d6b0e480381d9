// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Code-bearing construct removal
//!
//! Strips everything from an FXML fragment that would require executable
//! logic at load time: `fx:script` blocks, `fx:controller` declarations,
//! `on*` event-handler attributes, `fx:id` identifiers and the `:on*`
//! bound-handler spelling. Flat text matching over the fragment; nesting
//! depth and quoting pathologies are deliberately not modeled, so the
//! node hierarchy of well-formed input is preserved byte-for-byte outside
//! the removed spans.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `<fx:script ...>...</fx:script>` spans, contents included
    static ref FX_SCRIPT: Regex =
        Regex::new(r"(?i)<fx:script[\s\S]*?</fx:script>").unwrap();
    /// `fx:controller="..."` attribute
    static ref FX_CONTROLLER: Regex =
        Regex::new(r#"(?i)\sfx:controller\s*=\s*"[^"]*""#).unwrap();
    /// Event handler attributes: onAction, onMouseClicked, ...
    static ref ON_EVENT_ATTR: Regex =
        Regex::new(r#"(?i)\son[A-Z][A-Za-z0-9]*\s*=\s*"[^"]*""#).unwrap();
    /// `fx:id="..."` attribute
    static ref FX_ID: Regex =
        Regex::new(r#"(?i)\sfx:id\s*=\s*"[^"]*""#).unwrap();
    /// Bound-handler spelling: `:onAction="${...}"` and friends
    static ref BOUND_ON_ATTR: Regex =
        Regex::new(r#"\s:on[A-Z][A-Za-z0-9]*\s*=\s*"[^"]*""#).unwrap();
}

/// Remove all code-bearing constructs from an FXML fragment.
///
/// Total over any input text, idempotent, order-sensitive in its passes:
/// script blocks go first so their attributes never reach the attribute
/// passes, then controller, handler, fx:id and bound-handler attributes.
/// No I/O, no failure path.
///
/// # Example
///
/// ```
/// let out = fxpeek::sanitize(r##"<Button fx:id="b" onAction="#go" text="Go"/>"##);
/// assert_eq!(out, r#"<Button text="Go"/>"#);
/// ```
pub fn sanitize(xml: &str) -> String {
    let out = FX_SCRIPT.replace_all(xml, "");
    let out = FX_CONTROLLER.replace_all(&out, "");
    let out = ON_EVENT_ATTR.replace_all(&out, "");
    let out = FX_ID.replace_all(&out, "");
    let out = BOUND_ON_ATTR.replace_all(&out, "");
    out.into_owned()
}

/// Escape the four reserved markup characters for embedding text in
/// attribute values or diagnostic comments.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_controller() {
        let xml = r#"<AnchorPane fx:controller="com.example.MainController" prefWidth="600">"#;
        let out = sanitize(xml);

        assert_eq!(out, r#"<AnchorPane prefWidth="600">"#);
    }

    #[test]
    fn test_removes_event_handlers() {
        let xml = r##"<Button text="Go" onAction="#handleGo" onMouseClicked="#clicked"/>"##;
        let out = sanitize(xml);

        assert_eq!(out, r#"<Button text="Go"/>"#);
    }

    #[test]
    fn test_removes_fx_id() {
        let xml = r#"<Label fx:id="statusLabel" text="Ready"/>"#;
        let out = sanitize(xml);

        assert_eq!(out, r#"<Label text="Ready"/>"#);
    }

    #[test]
    fn test_removes_script_block_with_contents() {
        let xml = "<VBox><fx:script>\nfunction f() { alert(1); }\n</fx:script><Label/></VBox>";
        let out = sanitize(xml);

        assert_eq!(out, "<VBox><Label/></VBox>");
        assert!(!out.contains("alert"));
    }

    #[test]
    fn test_removes_bound_handler_form() {
        let xml = r#"<Button :onAction="${controller.go}" text="Go"/>"#;
        let out = sanitize(xml);

        assert_eq!(out, r#"<Button text="Go"/>"#);
    }

    #[test]
    fn test_case_insensitive_attributes() {
        let xml = r##"<Pane FX:CONTROLLER="C" ONACTION="#h" Fx:Id="p"/>"##;
        let out = sanitize(xml);

        assert_eq!(out, "<Pane/>");
    }

    #[test]
    fn test_preserves_benign_attributes() {
        let xml = r#"<ImageView fitWidth="100" font="System" preserveRatio="true"/>"#;
        let out = sanitize(xml);

        assert_eq!(out, xml);
    }

    #[test]
    fn test_insensitive_pass_also_drops_lowercase_on_attributes() {
        // The handler pass is case-insensitive end to end, so a lowercase
        // "onfoo" attribute is swept up as well. Known over-match of the
        // flat-text approach; kept.
        let xml = r#"<ImageView onion="ring" fitWidth="100"/>"#;
        let out = sanitize(xml);

        assert_eq!(out, r#"<ImageView fitWidth="100"/>"#);
    }

    #[test]
    fn test_idempotent() {
        let xml = r##"<AnchorPane fx:controller="C"><Button fx:id="b" onAction="#h"/><fx:script>x()</fx:script></AnchorPane>"##;
        let once = sanitize(xml);
        let twice = sanitize(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_completeness() {
        let xml = r##"<AnchorPane fx:controller="C" fx:id="root" onKeyPressed="#k" :onAction="${c.a}"><fx:script>evil()</fx:script></AnchorPane>"##;
        let out = sanitize(xml);

        assert!(!out.contains("fx:controller"));
        assert!(!out.contains("fx:id"));
        assert!(!out.contains("onKeyPressed"));
        assert!(!out.contains(":onAction"));
        assert!(!out.contains("fx:script"));
    }

    #[test]
    fn test_total_over_arbitrary_text() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("not xml at all"), "not xml at all");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"a & <b> "c""#), "a &amp; &lt;b&gt; &quot;c&quot;");
    }
}
