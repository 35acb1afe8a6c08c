//! Decoded tabular payloads served for chart rendering.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dataset::nullable;

/// One decoded row: column name to number, string or null.
pub type Row = Map<String, Value>;

/// Ordered headers plus rows. Header order decides the default axes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    #[serde(default, deserialize_with = "nullable")]
    pub headers: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub rows: Vec<Row>,
}

impl TableData {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// A cell as display text; missing and null cells render as `-`.
    pub fn cell_text(row: &Row, header: &str) -> String {
        match row.get(header) {
            None | Some(Value::Null) => "-".to_string(),
            Some(Value::String(s)) if s.is_empty() => "-".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable", rename = "type")]
    pub file_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub size: String,
}

/// Response of `/contributes/approved/{id}/data`.
///
/// The API repeats headers and rows both at the top level and under `data`,
/// depending on the version that produced the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileData {
    #[serde(default, deserialize_with = "nullable")]
    pub success: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub data: TableData,
    #[serde(default, deserialize_with = "nullable")]
    pub file_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub headers: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub rows: Vec<Row>,
    #[serde(default)]
    pub file_info: Option<FileInfo>,
}

impl FileData {
    pub fn table(&self) -> TableData {
        if !self.headers.is_empty() || !self.rows.is_empty() {
            TableData::new(self.headers.clone(), self.rows.clone())
        } else {
            self.data.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefers_top_level_table() {
        let payload: FileData = serde_json::from_value(json!({
            "success": true,
            "headers": ["A"],
            "rows": [{"A": 1}],
            "data": {"headers": ["B"], "rows": []}
        }))
        .unwrap();
        assert_eq!(payload.table().headers, vec!["A".to_string()]);
    }

    #[test]
    fn falls_back_to_nested_table() {
        let payload: FileData = serde_json::from_value(json!({
            "data": {"headers": ["B"], "rows": [{"B": "x"}]},
            "file_info": {"id": 1, "name": "b.csv", "type": "csv", "size": "1 KB"}
        }))
        .unwrap();
        let table = payload.table();
        assert_eq!(table.headers, vec!["B".to_string()]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(payload.file_info.unwrap().file_type, "csv");
    }

    #[test]
    fn blank_cells_display_as_dash() {
        let row = json!({"a": null, "b": "", "c": 4}).as_object().cloned().unwrap();
        assert_eq!(TableData::cell_text(&row, "a"), "-");
        assert_eq!(TableData::cell_text(&row, "b"), "-");
        assert_eq!(TableData::cell_text(&row, "c"), "4");
        assert_eq!(TableData::cell_text(&row, "missing"), "-");
    }
}
