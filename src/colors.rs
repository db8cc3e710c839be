//! Category Colors
//!
//! Assigns palette colors to category labels in first-seen order. Once a
//! label has a color it keeps it for the life of the assigner.
//!
//! Two assigners only agree if they see the same labels for the first time
//! in the same order.

use crate::error::ApiError;
use std::collections::HashMap;
use tracing::debug;

/// Default chip palette
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#f7e1d7", "#edbfb8", "#dedbd2", "#b0c4b1", "#4a5759", "#78290f", "#b8b8ff", "#E84393",
];

pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

/// Append-only label -> color map
#[derive(Debug, Clone)]
pub struct CategoryColors {
    palette: Vec<String>,
    assigned: HashMap<String, String>,
    next: usize,
}

impl Default for CategoryColors {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryColors {
    pub fn new() -> Self {
        Self {
            palette: default_palette(),
            assigned: HashMap::new(),
            next: 0,
        }
    }

    pub fn with_palette(palette: Vec<String>) -> Result<Self, ApiError> {
        if palette.is_empty() {
            return Err(ApiError::ConfigError(
                "Category palette must contain at least one color".to_string(),
            ));
        }
        Ok(Self {
            palette,
            assigned: HashMap::new(),
            next: 0,
        })
    }

    /// Color for `category`, assigning the next palette slot on first sight
    pub fn color_for(&mut self, category: &str) -> String {
        if let Some(color) = self.assigned.get(category) {
            return color.clone();
        }
        let color = self.palette[self.next % self.palette.len()].clone();
        self.next += 1;
        debug!(category, color = %color, "Assigned category color");
        self.assigned.insert(category.to_string(), color.clone());
        color
    }

    /// Previously assigned color, without assigning one
    pub fn assigned(&self, category: &str) -> Option<&str> {
        self.assigned.get(category).map(String::as_str)
    }

    /// Number of distinct labels seen so far
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }
}
