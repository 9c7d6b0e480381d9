// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Stylesheet list handling
//!
//! - Block scanning and removal
//! - Entry-shape normalization
//! - Out-of-band URL extraction

mod blocks;
mod extract;
mod normalize;

pub use blocks::strip_stylesheet_blocks;
pub use extract::extract_stylesheet_urls;
pub use normalize::normalize_stylesheet_blocks;
