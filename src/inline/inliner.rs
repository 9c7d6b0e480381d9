// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Recursive sanitize-and-inline
//!
//! Expands `<fx:include source="..."/>` directives in place so the final
//! document is self-contained and every fragment passes through the same
//! sanitization and rewrite passes. A visited set of absolute locations,
//! scoped to one top-level call and threaded by reference through the
//! whole descent, breaks inclusion cycles: once any branch enters a
//! location, every later occurrence anywhere in the call is suppressed.
//!
//! Per-include failures never abort the call; each one is substituted
//! with an XML comment carrying the source value and the failure reason.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::BoxFuture;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};
use url::Url;

use super::fetcher::{DocumentFetcher, FetchConfig, Fetcher};
use crate::error::{Error, Result};
use crate::rewrite::rewrite_resource_paths;
use crate::sanitize::{escape_xml, sanitize};
use crate::stylesheet::normalize_stylesheet_blocks;

lazy_static! {
    /// Inclusion directive: self-closing or with a separate close tag,
    /// other attributes allowed on either side of `source`
    static ref FX_INCLUDE: Regex = Regex::new(
        r#"(?i)<fx:include\s+([^>]*?)source\s*=\s*"([^"]+)"([^>]*?)/?>(?:</fx:include>)?"#
    )
    .unwrap();
}

/// Recursive include expansion over sanitized fragments.
///
/// Stateless between calls; each [`resolve_and_inline`] invocation owns
/// its visited set.
///
/// [`resolve_and_inline`]: Inliner::resolve_and_inline
pub struct Inliner {
    fetcher: Arc<dyn Fetcher>,
}

impl Inliner {
    /// Create an inliner with the default file/HTTP fetcher
    pub fn new() -> Result<Self> {
        Ok(Self::with_fetcher(Arc::new(DocumentFetcher::new()?)))
    }

    /// Create an inliner with a custom fetch configuration
    pub fn with_config(config: FetchConfig) -> Result<Self> {
        Ok(Self::with_fetcher(Arc::new(DocumentFetcher::with_config(
            config,
        )?)))
    }

    /// Create an inliner over a caller-supplied fetch capability
    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Sanitize `xml` and recursively inline its include directives,
    /// resolving relative references against `base`.
    ///
    /// Never fails: cycle detections and fetch or resolution failures are
    /// contained per include and written into the output as diagnostic
    /// comments.
    pub async fn resolve_and_inline(&self, xml: &str, base: &Url) -> String {
        let mut visited = HashSet::new();
        self.inline_fragment(xml, base, &mut visited).await
    }

    /// One level of the descent: sanitize, rewrite resources, normalize
    /// stylesheet blocks, then splice in every include in document order.
    fn inline_fragment<'a>(
        &'a self,
        xml: &'a str,
        base: &'a Url,
        visited: &'a mut HashSet<String>,
    ) -> BoxFuture<'a, String> {
        Box::pin(async move {
            let sanitized = sanitize(xml);
            let rewritten = rewrite_resource_paths(&sanitized, base);
            let normalized = normalize_stylesheet_blocks(&rewritten);

            let directives: Vec<(usize, usize, String)> = FX_INCLUDE
                .captures_iter(&normalized)
                .filter_map(|caps| {
                    let whole = caps.get(0)?;
                    Some((whole.start(), whole.end(), caps[2].to_string()))
                })
                .collect();

            if directives.is_empty() {
                return normalized;
            }

            let mut out = String::with_capacity(normalized.len());
            let mut last = 0;
            for (start, end, source) in directives {
                out.push_str(&normalized[last..start]);
                match self.process_include(&source, base, visited).await {
                    Ok(inlined) => out.push_str(&inlined),
                    Err(e) if e.is_cycle() => {
                        warn!(source = %source, base = %base, "include cycle detected");
                        out.push_str(&format!(
                            "<!-- fx:include cycle detected for {} -->",
                            escape_xml(&source)
                        ));
                    }
                    Err(e) => {
                        warn!(source = %source, base = %base, error = %e, "include failed");
                        out.push_str(&format!(
                            "<!-- unable to include: {} : {} -->",
                            escape_xml(&source),
                            escape_xml(&e.to_string())
                        ));
                    }
                }
                last = end;
            }
            out.push_str(&normalized[last..]);
            out
        })
    }

    /// Resolve, fetch and recursively process one include directive.
    async fn process_include(
        &self,
        source: &str,
        base: &Url,
        visited: &mut HashSet<String>,
    ) -> Result<String> {
        let location = base.join(source)?;
        let key = location.to_string();

        if visited.contains(&key) {
            return Err(Error::cycle(key));
        }
        visited.insert(key);

        debug!(source = %source, location = %location, "expanding include");
        let content = self.fetcher.fetch(&location).await?;
        Ok(self.inline_fragment(&content, &location, visited).await)
    }
}
