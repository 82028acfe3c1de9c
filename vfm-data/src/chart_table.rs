//! The column transform: rows + column name -> choropleth-ready table.
//!
//! A chart table is the two-dimensional array shape the geo chart consumes:
//! a `["State", column]` header followed by `[state, value]` pairs. States
//! whose cell holds the `Unknown` sentinel are dropped entirely so the
//! renderer paints them with its dataless color instead of zero.

use crate::rows::RowSet;
use serde::Serialize;

/// Sentinel cell value marking "no data for this state" in the source file.
pub const UNKNOWN_SENTINEL: &str = "Unknown";

/// Explicit (min, max) bounds for a color gradient.
///
/// Fairness sub-scores each have a different natural scale (some with
/// negative floors), so the range is part of the column's definition and is
/// never derived by scanning the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorRange {
    pub min: f64,
    pub max: f64,
}

impl ColorRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Chart-ready data for one selected column.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTable {
    /// Always `["State", column]`.
    pub header: [String; 2],
    /// `(state, value)` pairs in source row order.
    pub entries: Vec<(String, f64)>,
}

impl ChartTable {
    /// Total row count including the header.
    pub fn len(&self) -> usize {
        1 + self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to the nested-array JSON form the geo chart expects:
    /// `[["State", col], ["Alabama", 63.1], ...]`.
    ///
    /// NaN values (unparseable cells) serialize as `null`, which the
    /// renderer treats the same as a missing state.
    pub fn to_json(&self) -> serde_json::Value {
        let mut out = Vec::with_capacity(self.entries.len() + 1);
        out.push(serde_json::json!([self.header[0], self.header[1]]));
        for (state, value) in &self.entries {
            out.push(serde_json::json!([state, value]));
        }
        serde_json::Value::Array(out)
    }
}

/// Produce the chart table for `column` over `rows`.
///
/// Rows whose cell equals [`UNKNOWN_SENTINEL`] are excluded. Any other cell
/// is parsed as `f64`; cells that fail to parse (or a column name missing
/// from the row entirely) become `f64::NAN` rather than being filtered --
/// the source data never does this, so it is left to the renderer rather
/// than guessed at here.
pub fn chart_table(rows: &RowSet, column: &str) -> ChartTable {
    let entries = rows
        .iter()
        .filter(|row| row.get(column) != Some(UNKNOWN_SENTINEL))
        .map(|row| {
            let value = row
                .get(column)
                .and_then(|cell| cell.parse::<f64>().ok())
                .unwrap_or(f64::NAN);
            (row.state().to_string(), value)
        })
        .collect();

    ChartTable {
        header: ["State".to_string(), column.to_string()],
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::Row;

    fn rows(data: &[(&str, &str)]) -> RowSet {
        RowSet::from_rows(
            data.iter()
                .map(|(state, score)| Row::from_pairs([("State", *state), ("Score", *score)]))
                .collect(),
        )
    }

    #[test]
    fn header_names_the_column() {
        let table = chart_table(&rows(&[("Alabama", "5")]), "Score");
        assert_eq!(table.header, ["State".to_string(), "Score".to_string()]);
    }

    #[test]
    fn unknown_rows_are_excluded_entirely() {
        let table = chart_table(&rows(&[("Alabama", "5"), ("Alaska", "Unknown")]), "Score");
        assert_eq!(table.entries, vec![("Alabama".to_string(), 5.0)]);
        assert_eq!(table.len(), 2); // header + one data row
    }

    #[test]
    fn empty_row_set_yields_header_only_table() {
        let table = chart_table(&RowSet::from_rows(Vec::new()), "Anything");
        assert_eq!(table.len(), 1);
        assert!(table.is_empty());
        assert_eq!(
            table.header,
            ["State".to_string(), "Anything".to_string()]
        );
    }

    #[test]
    fn row_order_is_preserved() {
        let table = chart_table(
            &rows(&[("Wyoming", "1"), ("Alabama", "2"), ("Ohio", "3")]),
            "Score",
        );
        let states: Vec<&str> = table.entries.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(states, vec!["Wyoming", "Alabama", "Ohio"]);
    }

    #[test]
    fn transform_is_idempotent() {
        let set = rows(&[("Alabama", "5"), ("Alaska", "Unknown"), ("Ohio", "2.25")]);
        assert_eq!(chart_table(&set, "Score"), chart_table(&set, "Score"));
    }

    #[test]
    fn unparseable_cell_becomes_nan_not_filtered() {
        // Known edge case: non-numeric, non-"Unknown" cells pass through as
        // NaN instead of being dropped. The renderer's behavior for these is
        // undefined; this test pins the transform side only.
        let table = chart_table(&rows(&[("Alabama", "n/a")]), "Score");
        assert_eq!(table.entries.len(), 1);
        assert!(table.entries[0].1.is_nan());
    }

    #[test]
    fn missing_column_becomes_nan() {
        let table = chart_table(&rows(&[("Alabama", "5")]), "No Such Column");
        assert_eq!(table.entries.len(), 1);
        assert!(table.entries[0].1.is_nan());
    }

    #[test]
    fn json_shape_is_nested_arrays_with_nan_as_null() {
        let table = chart_table(&rows(&[("Alabama", "5"), ("Ohio", "bad")]), "Score");
        let json = table.to_json();
        assert_eq!(
            json[0],
            serde_json::json!(["State", "Score"])
        );
        assert_eq!(json[1], serde_json::json!(["Alabama", 5.0]));
        assert_eq!(json[2][1], serde_json::Value::Null);
    }
}
