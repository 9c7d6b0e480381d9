// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Resource path rewriting
//!
//! Rewrites `@`-relative resource references (images, media, hyperlinks,
//! stylesheet entries) into absolute locations anchored at a document's
//! base location.

mod resources;

pub use resources::rewrite_resource_paths;
