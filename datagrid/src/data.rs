//! Table data types supplied by the caller.
//!
//! The grid never mutates a [`TableData`]; it only derives view state from it.
//! Rows are looked up by [`Header::key`], never by position, so reordering
//! columns can't move a value under the wrong label.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::width::WidthValue;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// What a column holds.
///
/// Only [`ColumnKind::Checkbox`] changes grid behavior: it becomes the
/// selection column and is never resizable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnKind {
    Checkbox,
    Text,
    Number,
    Other(String),
}

impl From<String> for ColumnKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "checkbox" => ColumnKind::Checkbox,
            "text" => ColumnKind::Text,
            "number" => ColumnKind::Number,
            _ => ColumnKind::Other(value),
        }
    }
}

impl From<ColumnKind> for String {
    fn from(kind: ColumnKind) -> Self {
        match kind {
            ColumnKind::Checkbox => "checkbox".into(),
            ColumnKind::Text => "text".into(),
            ColumnKind::Number => "number".into(),
            ColumnKind::Other(other) => other,
        }
    }
}

/// Column header definition.
///
/// # Examples
///
/// ```
/// use datagrid::{Alignment, Header};
///
/// let headers = vec![
///     Header::checkbox("select"),
///     Header::new("name", "Name").width(180),
///     Header::new("amount", "Amount").align(Alignment::Right),
/// ];
/// assert!(headers[0].is_checkbox());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Field key, unique within a table.
    pub key: String,
    /// Header text.
    #[serde(default)]
    pub label: String,
    /// Preferred width (`180`, `"180px"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<WidthValue>,
    /// Requests this column be pinned when no explicit sticky set is configured.
    #[serde(default)]
    pub sticky: bool,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ColumnKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
}

impl Header {
    /// Create a header for `key` with a display label.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width: None,
            sticky: false,
            kind: None,
            align: None,
        }
    }

    /// Create the selection checkbox column.
    pub fn checkbox(key: impl Into<String>) -> Self {
        Self::new(key, "").kind(ColumnKind::Checkbox)
    }

    /// Set the preferred width.
    pub fn width(mut self, width: impl Into<WidthValue>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Mark the column as sticky.
    pub fn sticky(mut self) -> Self {
        self.sticky = true;
        self
    }

    /// Set the column kind.
    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    /// Whether this is the selection column.
    pub fn is_checkbox(&self) -> bool {
        matches!(self.kind, Some(ColumnKind::Checkbox))
    }

    /// Effective alignment (left when unset).
    pub fn alignment(&self) -> Alignment {
        self.align.unwrap_or_default()
    }
}

/// Row identity as supplied by the caller, or a positional fallback.
///
/// Selection is keyed by the stringified form ([`RowId::key`]) but the
/// original type is what gets reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Number(i64),
    Text(String),
}

impl RowId {
    /// Stringified key used for selection lookups.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Number(n) => write!(f, "{n}"),
            RowId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RowId {
    fn from(value: i64) -> Self {
        RowId::Number(value)
    }
}

impl From<i32> for RowId {
    fn from(value: i32) -> Self {
        RowId::Number(value as i64)
    }
}

impl From<usize> for RowId {
    fn from(value: usize) -> Self {
        RowId::Number(value as i64)
    }
}

impl From<&str> for RowId {
    fn from(value: &str) -> Self {
        RowId::Text(value.to_string())
    }
}

impl From<String> for RowId {
    fn from(value: String) -> Self {
        RowId::Text(value)
    }
}

/// A displayable cell value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl CellValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Character length of the displayed text, used by the width heuristic.
    pub fn display_len(&self) -> usize {
        match self {
            CellValue::String(s) => s.chars().count(),
            other => other.to_string().chars().count(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(n) => write!(f, "{n}"),
            CellValue::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(value as i64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// One data row: an optional identity plus fields keyed by header key.
///
/// Serialized flat, e.g. `{"id": 7, "name": "Ada", "age": 36}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RowId>,
    #[serde(flatten)]
    pub fields: HashMap<String, CellValue>,
}

impl Row {
    /// Create an empty row without an explicit identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty row with an explicit identity.
    pub fn with_id(id: impl Into<RowId>) -> Self {
        Self {
            id: Some(id.into()),
            fields: HashMap::new(),
        }
    }

    /// Add a field value.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Look up the value for a header key. Missing fields read as null.
    pub fn get(&self, key: &str) -> &CellValue {
        static NULL: CellValue = CellValue::Null;
        self.fields.get(key).unwrap_or(&NULL)
    }
}

/// Headers plus rows, owned by the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableData {
    pub headers: Vec<Header>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl TableData {
    pub fn new(headers: Vec<Header>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
