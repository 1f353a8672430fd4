//! Core types for sheetview-core.
//!
//! This module defines the data shapes shared across all crates: the raw
//! [`ValuesResponse`] returned by the spreadsheet API, the normalised
//! [`Record`] and the per-cell [`CellValue`].

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A rectangular-ish grid of text cells, row-major, as returned by the
/// values endpoint. Rows may be ragged.
pub type RawGrid = Vec<Vec<String>>;

/// Body of a `GET .../values/{range}` response.
///
/// Only `values` matters to the normalizer. The API omits it entirely when the
/// requested range is empty, which is why it is optional here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<RawGrid>,
}

impl ValuesResponse {
    /// Wrap a grid in a response, the way the API returns a non-empty range.
    pub fn with_values(values: RawGrid) -> Self {
        Self {
            range: None,
            major_dimension: Some("ROWS".to_string()),
            values: Some(values),
        }
    }
}

/// The typed value of one cell after coercion.
///
/// Serialises untagged: a JSON number, a JSON string, or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    /// The row ended before this column.
    Null,
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

/// One normalised data row: field names from the header row mapped to cell
/// values, in header order.
///
/// Serialises as a JSON object whose keys follow header order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Set `field` to `value`. A field that already exists keeps its position
    /// and takes the new value.
    ///
    /// Finding an existing field is a linear scan, so building a record this
    /// way is quadratic in its width. Sheets are a few dozen columns at most;
    /// [`normalize_grid`](crate::normalize_grid) skips the scan entirely when
    /// the header row has no repeats.
    pub fn insert(&mut self, field: impl Into<String>, value: CellValue) {
        let field = field.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((field, value)),
        }
    }

    /// Append a field the caller knows is not present yet.
    pub(crate) fn push_new(&mut self, field: impl Into<String>, value: CellValue) {
        let field = field.into();
        debug_assert!(self.get(&field).is_none(), "duplicate field {field:?}");
        self.fields.push((field, value));
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in header order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        let mut record = Record::default();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, value) in &self.fields {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}
