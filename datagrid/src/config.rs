//! Grid configuration.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::GridError;
use crate::width::{CHECKBOX_COLUMN_WIDTH, MIN_COLUMN_WIDTH, WidthValue};

/// Per-grid configuration.
///
/// Everything here is plain data and can be loaded from JSON. Callbacks are
/// installed on the [`Grid`](crate::Grid) itself.
///
/// # Examples
///
/// ```
/// use datagrid::GridConfig;
///
/// let config = GridConfig::new()
///     .page_size(25)
///     .sticky_columns([0, 1])
///     .initial_width(1, "180px");
/// assert_eq!(config.page_size, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Visual positions to pin left. Must be `0, 1, .., k-1`; anything
    /// else is cut back to its longest valid prefix with a warning.
    pub sticky_columns: Vec<usize>,

    /// Starting widths by original column index. Wins over `Header::width`.
    pub initial_column_widths: HashMap<usize, WidthValue>,

    /// Rows per page.
    pub page_size: usize,

    /// Passed through to the renderer (e.g. `"400px"`, `"none"`).
    pub max_height: Option<String>,

    /// Whether the snapshot carries pagination controls.
    pub show_pagination: bool,

    /// Floor for every resolved column width.
    pub min_column_width: u32,

    /// Default width of the checkbox column.
    pub checkbox_width: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            sticky_columns: Vec::new(),
            initial_column_widths: HashMap::new(),
            page_size: 10,
            max_height: Some("400px".to_string()),
            show_pagination: true,
            min_column_width: MIN_COLUMN_WIDTH,
            checkbox_width: CHECKBOX_COLUMN_WIDTH,
        }
    }
}

impl GridConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse a config from JSON text. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Set the sticky column request.
    pub fn sticky_columns(mut self, columns: impl IntoIterator<Item = usize>) -> Self {
        self.sticky_columns = columns.into_iter().collect();
        self
    }

    /// Set the starting width of one column.
    pub fn initial_width(mut self, column: usize, width: impl Into<WidthValue>) -> Self {
        self.initial_column_widths.insert(column, width.into());
        self
    }

    /// Set rows per page.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the max height hint.
    pub fn max_height(mut self, max_height: impl Into<String>) -> Self {
        self.max_height = Some(max_height.into());
        self
    }

    /// Omit pagination controls from snapshots.
    pub fn hide_pagination(mut self) -> Self {
        self.show_pagination = false;
        self
    }

    /// Set the minimum column width.
    pub fn min_column_width(mut self, width: u32) -> Self {
        self.min_column_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_defaults() {
        let config = GridConfig::from_json("{}").unwrap();
        assert_eq!(config, GridConfig::default());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.min_column_width, 40);
    }

    #[test]
    fn test_json_widths_accept_numbers_and_strings() {
        let config = GridConfig::from_json(
            r#"{"page_size": 5, "sticky_columns": [0, 1],
                "initial_column_widths": {"0": "150px", "2": 90}}"#,
        )
        .unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.sticky_columns, vec![0, 1]);
        assert_eq!(
            config.initial_column_widths.get(&0),
            Some(&WidthValue::from("150px"))
        );
        assert_eq!(
            config.initial_column_widths.get(&2),
            Some(&WidthValue::Pixels(90.0))
        );
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            GridConfig::from_json("{\"page_size\": \"ten\"}"),
            Err(GridError::Json(_))
        ));
    }
}
