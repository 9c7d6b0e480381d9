// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! FXML sanitization
//!
//! - Script block removal
//! - Controller, handler and fx:id attribute removal

mod sanitizer;

pub use sanitizer::{escape_xml, sanitize};
