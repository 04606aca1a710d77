//! UI item layout model.
//!
//! The panel layout file enumerates every test point shown on the fixture
//! display, keyed by the same item/group/device addressing the protocol
//! uses. Geometry, fonts, and colors are the renderer's business and are
//! not modeled here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One configured test point on the panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemLayout {
    pub item_id: u16,
    pub group_id: u8,
    pub device_id: u16,
    /// Informational items show a value but are never pass/fail colored
    #[serde(default)]
    pub info_only: bool,
}

/// The full set of configured items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiLayout {
    pub items: Vec<ItemLayout>,
}

impl UiLayout {
    /// Load a layout from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Look up a configured item by its id.
    pub fn find(&self, item_id: u16) -> Option<&ItemLayout> {
        self.items.iter().find(|item| item.item_id == item_id)
    }
}
