// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Previewer facade
//!
//! Runs the whole pipeline for one document: sanitize-and-inline, then
//! harvest stylesheet URLs and strip their blocks. The result is ready to
//! hand to a renderer: the markup carries no code-bearing constructs and
//! no stylesheet blocks; the URL list is applied to the rendered tree
//! out-of-band.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::inline::{FetchConfig, Inliner};
use crate::stylesheet::{extract_stylesheet_urls, strip_stylesheet_blocks};

/// A sanitized, self-contained document ready for passive rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewDocument {
    /// Safe markup: sanitized, fully inlined, stylesheet blocks removed
    pub xml: String,
    /// Harvested stylesheet URLs, in extraction order
    pub stylesheets: Vec<String>,
}

/// Pipeline entry point for whole documents
pub struct Previewer {
    inliner: Inliner,
}

impl Previewer {
    /// Create a previewer with default fetch configuration
    pub fn new() -> Result<Self> {
        Ok(Self {
            inliner: Inliner::new()?,
        })
    }

    /// Create a previewer with custom fetch configuration
    pub fn with_config(config: FetchConfig) -> Result<Self> {
        Ok(Self {
            inliner: Inliner::with_config(config)?,
        })
    }

    /// Preview a document already in memory, resolving relative references
    /// against `base`.
    pub async fn preview_str(&self, xml: &str, base: &Url) -> PreviewDocument {
        let inlined = self.inliner.resolve_and_inline(xml, base).await;
        let stylesheets = extract_stylesheet_urls(&inlined);
        let xml = strip_stylesheet_blocks(&inlined);

        debug!(
            stylesheets = stylesheets.len(),
            bytes = xml.len(),
            "preview assembled"
        );
        PreviewDocument { xml, stylesheets }
    }

    /// Preview an FXML file on disk. The base location for relative
    /// references is the file's parent directory.
    pub async fn preview_file(&self, path: impl AsRef<Path>) -> Result<PreviewDocument> {
        let path = path.as_ref();
        let xml = tokio::fs::read_to_string(path).await?;
        let base = base_for_file(path)?;

        Ok(self.preview_str(&xml, &base).await)
    }
}

/// Base location for resolving a file's relative references: its parent
/// directory as a `file:` URL.
fn base_for_file(path: &Path) -> Result<Url> {
    let canonical = path
        .canonicalize()
        .map_err(|e| Error::config(format!("cannot resolve {}: {}", path.display(), e)))?;
    let parent = canonical
        .parent()
        .ok_or_else(|| Error::config(format!("no parent directory for {}", path.display())))?;

    Url::from_directory_path(parent)
        .map_err(|_| Error::config(format!("not an absolute directory: {}", parent.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_preview_file_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("main.fxml"),
            r##"<AnchorPane fx:controller="app.Main" onKeyPressed="#k">
  <stylesheets><URL value="@app.css"/></stylesheets>
  <fx:include source="header.fxml"/>
</AnchorPane>"##,
        )
        .unwrap();
        fs::write(
            dir.path().join("header.fxml"),
            r#"<ToolBar fx:id="bar"><Label text="Title"/></ToolBar>"#,
        )
        .unwrap();

        let previewer = Previewer::new().unwrap();
        let doc = previewer
            .preview_file(dir.path().join("main.fxml"))
            .await
            .unwrap();

        assert!(!doc.xml.contains("fx:controller"));
        assert!(!doc.xml.contains("fx:id"));
        assert!(!doc.xml.contains("onKeyPressed"));
        assert!(!doc.xml.contains("stylesheets"));
        assert!(doc.xml.contains(r#"<Label text="Title"/>"#));

        assert_eq!(doc.stylesheets.len(), 1);
        assert!(doc.stylesheets[0].starts_with("file://"));
        assert!(doc.stylesheets[0].ends_with("/app.css"));
    }

    #[tokio::test]
    async fn test_preview_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let previewer = Previewer::new().unwrap();

        let err = previewer
            .preview_file(dir.path().join("absent.fxml"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Config(_)) || matches!(err, Error::Io(_)));
    }

    #[tokio::test]
    async fn test_preview_str_round_trip() {
        let previewer = Previewer::new().unwrap();
        let base = Url::parse("file:///ui/").unwrap();

        let xml = r##"<VBox>
  <stylesheets>
    <String>a.css</String>
    <URL>b.css</URL>
    <URL value="c.css"/>
  </stylesheets>
  <Button text="Go" onAction="#go"/>
</VBox>"##;
        let doc = previewer.preview_str(xml, &base).await;

        assert_eq!(doc.stylesheets, vec!["a.css", "b.css", "c.css"]);
        assert!(!doc.xml.contains("stylesheets"));
        assert!(!doc.xml.contains("onAction"));
        assert!(doc.xml.contains(r#"<Button text="Go"/>"#));
    }

    #[tokio::test]
    async fn test_preview_document_serializes() {
        let doc = PreviewDocument {
            xml: "<Label/>".to_string(),
            stylesheets: vec!["a.css".to_string()],
        };

        let json = serde_json::to_string(&doc).unwrap();
        let back: PreviewDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(back.xml, "<Label/>");
        assert_eq!(back.stylesheets, vec!["a.css"]);
    }
}
