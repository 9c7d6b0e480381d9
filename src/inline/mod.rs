// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Include resolution and inlining
//!
//! - Fetcher trait and default file/HTTP fetcher
//! - Recursive sanitize-and-inline with cycle detection

mod fetcher;
mod inliner;

pub use fetcher::{DocumentFetcher, FetchConfig, Fetcher, DEFAULT_USER_AGENT};
pub use inliner::Inliner;
