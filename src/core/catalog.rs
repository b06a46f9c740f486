use crate::error::{Result, StrikerError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Fields tried, in order, to name a record of an array-shaped catalog.
/// Identifiers win over display names (an airport has both).
const NAME_FIELDS: [&str; 3] = ["code", "id", "name"];

/// Ordered, named records loaded wholesale from one JSON document.
///
/// Both `{"Vega": {...}, "Deneb": {...}}` and `[{"name": "Vega", ...}]` shapes
/// are accepted. Order is the document's order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: DeserializeOwned> Catalog<T> {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                StrikerError::missing_data(format!("File not found: {}", path.display()))
            }
            ErrorKind::PermissionDenied => {
                StrikerError::missing_data(format!("Permission denied: {}", path.display()))
            }
            _ => StrikerError::Io(e),
        })?;

        Self::from_json_str(&data)
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(data)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let entries = match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(name, record)| Ok((name, serde_json::from_value(record)?)))
                .collect::<Result<Vec<_>>>()?,
            Value::Array(records) => records
                .into_iter()
                .enumerate()
                .map(|(index, record)| {
                    let name = record_name(&record).unwrap_or_else(|| index.to_string());
                    Ok((name, serde_json::from_value(record)?))
                })
                .collect::<Result<Vec<_>>>()?,
            other => {
                return Err(StrikerError::missing_data(format!(
                    "expected a JSON object or array, found {}",
                    json_kind(&other)
                )))
            }
        };

        Ok(Self { entries })
    }
}

impl<T> Catalog<T> {
    pub fn new(entries: Vec<(String, T)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(String, T)] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, record)| record)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Drops the record called `name`, keeping the order of the rest.
    pub fn without(mut self, name: &str) -> Self {
        self.entries.retain(|(key, _)| key != name);
        self
    }
}

fn record_name(record: &Value) -> Option<String> {
    NAME_FIELDS
        .iter()
        .find_map(|field| record.get(field).and_then(Value::as_str))
        .map(str::to_string)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
