// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # fxpeek - FXML Previewer Core
//!
//! Turns an FXML document into a passive visual description that can be
//! rendered without any application code on the classpath. Pure text
//! rewriting - no DOM is built and no embedded logic survives.
//!
//! ## Pipeline
//!
//! - Sanitize: strip `fx:controller`, `on*` handlers, `fx:id`, bound
//!   handlers and whole `fx:script` blocks
//! - Rewrite: resolve `@`-relative resource paths against the document's
//!   base location
//! - Inline: recursively splice `<fx:include>` fragments in place, with
//!   cycle detection; every failure becomes an inline diagnostic comment
//! - Stylesheets: normalize list blocks to one shape, harvest the URLs
//!   and strip the blocks for out-of-band application
//!
//! ## Example
//!
//! ```rust,no_run
//! use fxpeek::Previewer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let previewer = Previewer::new()?;
//!     let doc = previewer.preview_file("ui/main.fxml").await?;
//!
//!     println!("{}", doc.xml);
//!     for url in &doc.stylesheets {
//!         println!("stylesheet: {}", url);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod inline;
pub mod preview;
pub mod rewrite;
pub mod sanitize;
pub mod stylesheet;

// Re-exports for convenience

// Sanitizer
pub use sanitize::{escape_xml, sanitize};

// Resource rewriting
pub use rewrite::rewrite_resource_paths;

// Stylesheet handling
pub use stylesheet::{
    extract_stylesheet_urls, normalize_stylesheet_blocks, strip_stylesheet_blocks,
};

// Include resolution
pub use inline::{DocumentFetcher, FetchConfig, Fetcher, Inliner, DEFAULT_USER_AGENT};

// Preview facade
pub use preview::{PreviewDocument, Previewer};

// Errors
pub use error::{Error, Result};

/// fxpeek version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
