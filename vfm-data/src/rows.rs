//! CSV parsing into an immutable per-state row snapshot.
//!
//! The source file is a header-mode CSV with one row per US state or
//! territory. Cells are kept as strings; numeric interpretation happens
//! later in the column transform so that the `Unknown` sentinel survives
//! parsing verbatim.

use std::collections::HashMap;

/// Name of the column identifying each row's state.
pub const STATE_COLUMN: &str = "State";

/// One state's data: column name -> cell string.
///
/// Cells may hold the literal sentinel `"Unknown"` where the source had no
/// data for that state.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: HashMap<String, String>,
}

impl Row {
    /// Build a row from (column, cell) pairs. Mostly useful in tests and
    /// the CSV loader.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Look up a cell by column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// The state name for this row, or `""` if the column is absent.
    pub fn state(&self) -> &str {
        self.get(STATE_COLUMN).unwrap_or("")
    }
}

/// Ordered snapshot of all parsed rows, in file order.
///
/// Created once per load and treated as read-only afterwards; chart tables
/// are derived from it, never written back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    rows: Vec<Row>,
}

impl RowSet {
    /// Wrap an already-built list of rows (tests, synthetic data).
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Parse header-mode CSV text into a row set.
    ///
    /// Each record is zipped with the header line into a column->cell map.
    /// Records with an empty `State` cell (blank trailing lines, ragged
    /// records) are skipped. A malformed record propagates as an error.
    pub fn parse(csv_data: &str) -> anyhow::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers()?.clone();

        let mut rows = Vec::new();
        let mut skipped = 0u32;
        for result in rdr.records() {
            let record = result?;
            let row = Row {
                values: headers
                    .iter()
                    .zip(record.iter())
                    .map(|(h, c)| (h.trim().to_string(), c.trim().to_string()))
                    .collect(),
            };
            if row.state().is_empty() {
                skipped += 1;
                continue;
            }
            rows.push(row);
        }

        log::info!(
            "[VFM Debug] rows: parsed {} state rows, skipped {} without a State cell",
            rows.len(),
            skipped
        );
        Ok(Self { rows })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
State,Percentage of Population that Voted,Election Security Score (out of 7)
Alabama,63.1,3.5
Alaska,68.2,Unknown
";

    #[test]
    fn parse_keeps_file_order_and_headers() {
        let rows = RowSet::parse(SAMPLE_CSV).unwrap();
        assert_eq!(rows.len(), 2);
        let states: Vec<&str> = rows.iter().map(|r| r.state()).collect();
        assert_eq!(states, vec!["Alabama", "Alaska"]);
    }

    #[test]
    fn parse_preserves_unknown_sentinel_verbatim() {
        let rows = RowSet::parse(SAMPLE_CSV).unwrap();
        let alaska = rows.iter().nth(1).unwrap();
        assert_eq!(
            alaska.get("Election Security Score (out of 7)"),
            Some("Unknown")
        );
    }

    #[test]
    fn parse_skips_rows_without_state() {
        let csv = "State,Score\nAlabama,5\n,\n";
        let rows = RowSet::parse(csv).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn missing_column_lookup_is_none() {
        let row = Row::from_pairs([("State", "Ohio")]);
        assert_eq!(row.get("No Such Column"), None);
        assert_eq!(row.state(), "Ohio");
    }

    #[test]
    fn empty_input_yields_empty_row_set() {
        let rows = RowSet::parse("").unwrap();
        assert!(rows.is_empty());
    }
}
