//! The configuration document handed to fastfetch.
//!
//! Shape: `{"$schema": <url>, "padding": {...}, "modules": [...]}`.
//! fastfetch renders `modules` top to bottom in array order, so the
//! array must match flattening order exactly.

use serde::Serialize;
use serde_json::Value;

use crate::catalog::SCHEMA_URL;
use crate::error::ConfgenResult;
use crate::tree::{flatten, Node};

/// Logo padding block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Padding {
    pub left: u32,
    pub right: u32,
    pub top: u32,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            left: 3,
            right: 3,
            top: 3,
        }
    }
}

/// A complete config document: schema, padding, ordered module records.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub padding: Padding,
    pub modules: Vec<Value>,
}

impl ConfigDocument {
    /// Flatten a forest into a document.
    pub fn from_forest(forest: &[Node]) -> Self {
        Self {
            schema: SCHEMA_URL.to_string(),
            padding: Padding::default(),
            modules: flatten(forest),
        }
    }

    /// Render as pretty-printed JSON with a trailing newline.
    pub fn to_json_string(&self) -> ConfgenResult<String> {
        let mut rendered = serde_json::to_string_pretty(self)?;
        rendered.push('\n');
        Ok(rendered)
    }
}
