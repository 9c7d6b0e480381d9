// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Document preview facade
//!
//! - Previewer: file/text entry points over the full pipeline
//! - PreviewDocument: safe markup plus harvested stylesheet URLs

mod previewer;

pub use previewer::{PreviewDocument, Previewer};
