//! Chart auto-configuration for decoded tables.
//!
//! Picks the category (x) column and the numeric series from the first row
//! of the table, then builds a bounded set of render rows.
//!
//! Column types are read from `rows[0]` only. A column whose first cell is
//! null or empty is classified from that cell for the whole table, even when
//! later rows hold numbers.

use log::debug;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::model::table::{Row, TableData};

/// Render rows kept after empty rows are dropped.
pub const MAX_CHART_ROWS: usize = 50;

/// Key of the x value in every render row.
pub const X_AXIS_KEY: &str = "name";

/// Label used when a row has no usable x value.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// One row ready for plotting: the x label plus one value per series.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRow {
    pub name: String,
    /// `(series key, value)` in `y_axis_keys` order. `None` when the source
    /// row had no such key.
    pub values: Vec<(String, Option<Value>)>,
}

impl RenderRow {
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.value(key).and_then(Value::as_f64)
    }
}

// Serialized flat, `{"name": ..., "<series>": ...}`, the shape chart widgets take.
impl Serialize for RenderRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry(X_AXIS_KEY, &self.name)?;
        for (key, value) in &self.values {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Always [`X_AXIS_KEY`].
    pub x_axis_key: String,
    pub y_axis_keys: Vec<String>,
    pub data: Vec<RenderRow>,
    /// The table column the x labels were taken from.
    pub original_x_axis_key: String,
}

impl ChartConfig {
    /// Largest absolute numeric value across all series, `0.0` if none.
    pub fn numeric_extent(&self) -> f64 {
        self.data
            .iter()
            .flat_map(|row| row.values.iter())
            .filter_map(|(_, v)| v.as_ref().and_then(Value::as_f64))
            .map(f64::abs)
            .fold(0.0, f64::max)
    }

    /// Whether fewer rows are rendered than the table holds.
    pub fn truncated_from(&self, total_rows: usize) -> bool {
        self.data.len() != total_rows
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn is_row_empty(row: &Row) -> bool {
    row.values().all(is_blank)
}

/// The x label for a row; falsy values (`null`, `""`, `0`, `false`, missing)
/// become [`UNKNOWN_LABEL`].
fn x_label(row: &Row, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f != 0.0) => number_label(n),
        Some(Value::Bool(true)) => "true".to_string(),
        Some(other @ (Value::Array(_) | Value::Object(_))) => other.to_string(),
        _ => UNKNOWN_LABEL.to_string(),
    }
}

// Whole floats print without a fraction, so 2020.0 labels as "2020".
fn number_label(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

/// Builds the chart configuration, or `None` for a table without rows.
pub fn configure_chart(table: &TableData) -> Option<ChartConfig> {
    let first = table.rows.first()?;

    let numeric: Vec<&String> = table
        .headers
        .iter()
        .filter(|h| matches!(first.get(h.as_str()), Some(Value::Number(_))))
        .collect();
    let categorical = table
        .headers
        .iter()
        .find(|h| matches!(first.get(h.as_str()), Some(Value::String(s)) if !s.is_empty()));

    let original_x_axis_key = categorical
        .or_else(|| table.headers.first())
        .cloned()
        .unwrap_or_default();

    let y_axis_keys: Vec<String> = if numeric.is_empty() {
        table
            .headers
            .iter()
            .filter(|h| **h != original_x_axis_key)
            .cloned()
            .collect()
    } else {
        numeric.into_iter().cloned().collect()
    };

    let data: Vec<RenderRow> = table
        .rows
        .iter()
        .filter(|row| !is_row_empty(row))
        .take(MAX_CHART_ROWS)
        .map(|row| RenderRow {
            name: x_label(row, &original_x_axis_key),
            values: y_axis_keys
                .iter()
                .map(|key| (key.clone(), row.get(key).cloned()))
                .collect(),
        })
        .collect();

    debug!(
        "chart: x={:?}, {} series, {} of {} rows",
        original_x_axis_key,
        y_axis_keys.len(),
        data.len(),
        table.rows.len()
    );

    Some(ChartConfig {
        x_axis_key: X_AXIS_KEY.to_string(),
        y_axis_keys,
        data,
        original_x_axis_key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(headers: &[&str], rows: Value) -> TableData {
        let rows = rows
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r.as_object().cloned().unwrap())
            .collect();
        TableData::new(headers.iter().map(|h| h.to_string()).collect(), rows)
    }

    #[test]
    fn empty_table_has_no_chart() {
        assert!(configure_chart(&table(&["a"], json!([]))).is_none());
    }

    #[test]
    fn picks_first_text_column_and_numeric_series() {
        let t = table(
            &["Year", "Municipality", "Population", "Households"],
            json!([
                {"Year": 2020, "Municipality": "Capas", "Population": 1, "Households": 2}
            ]),
        );
        let config = configure_chart(&t).unwrap();
        assert_eq!(config.original_x_axis_key, "Municipality");
        assert_eq!(config.y_axis_keys, vec!["Year", "Population", "Households"]);
        assert_eq!(config.x_axis_key, "name");
    }

    #[test]
    fn falls_back_to_first_header_and_remaining_columns() {
        let t = table(&["a", "b", "c"], json!([{"a": "", "b": null, "c": ""}, {"a": "x", "b": "y", "c": "z"}]));
        let config = configure_chart(&t).unwrap();
        assert_eq!(config.original_x_axis_key, "a");
        assert_eq!(config.y_axis_keys, vec!["b", "c"]);
        // The first row is fully blank, so only the second is rendered.
        assert_eq!(config.data.len(), 1);
        assert_eq!(config.data[0].name, "x");
    }

    #[test]
    fn whole_float_labels_drop_the_fraction() {
        let t = table(
            &["Year", "Rate"],
            json!([{"Year": 2020.0, "Rate": 1}, {"Year": 2021.5, "Rate": 2}, {"Year": 7, "Rate": 3}]),
        );
        let config = configure_chart(&t).unwrap();
        let names: Vec<&str> = config.data.iter().map(|r| r.name.as_str()).collect();
        // No text column, so the first header is the x axis.
        assert_eq!(names, vec!["2020", "2021.5", "7"]);
    }

    #[test]
    fn single_column_table_has_no_series() {
        let t = table(&["only"], json!([{"only": "v"}]));
        let config = configure_chart(&t).unwrap();
        assert!(config.y_axis_keys.is_empty());
        assert_eq!(config.data.len(), 1);
    }

    #[test]
    fn typing_uses_first_row_only() {
        let t = table(
            &["Town", "Count"],
            json!([{"Town": "Paniqui", "Count": null}, {"Town": "Gerona", "Count": 12}]),
        );
        let config = configure_chart(&t).unwrap();
        assert_eq!(config.y_axis_keys, vec!["Count"]);
        assert_eq!(config.data[0].value("Count"), Some(&Value::Null));
        assert_eq!(config.data[1].number("Count"), Some(12.0));
    }

    #[test]
    fn falsy_x_values_become_unknown() {
        let t = table(
            &["Label", "V"],
            json!([{"Label": "A", "V": 1}, {"Label": "", "V": 2}, {"V": 3}, {"Label": 0, "V": 4}]),
        );
        let names: Vec<String> = configure_chart(&t).unwrap().data.into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["A", "Unknown", "Unknown", "Unknown"]);
    }

    #[test]
    fn caps_rendered_rows() {
        let rows: Vec<Value> = (0..200).map(|i| json!({"k": format!("r{i}"), "v": i})).collect();
        let t = table(&["k", "v"], Value::Array(rows));
        let config = configure_chart(&t).unwrap();
        assert_eq!(config.data.len(), MAX_CHART_ROWS);
        assert!(config.truncated_from(200));
        assert_eq!(config.numeric_extent(), 49.0);
    }

    #[test]
    fn render_rows_serialize_flat() {
        let row = RenderRow {
            name: "Capas".to_string(),
            values: vec![
                ("Population".to_string(), Some(json!(10))),
                ("Area".to_string(), None),
            ],
        };
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!({"name": "Capas", "Population": 10, "Area": null})
        );
    }
}
