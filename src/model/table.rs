//! Table types.

use serde::{Deserialize, Serialize};

/// A table recovered from scattered cell elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table identifier, unique per page (`t1`, `t2`, ...)
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub table_id: String,

    /// Cell text grid, row-major
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub data: Vec<Vec<String>>,

    /// Bounds reported for the table element
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub bounds: Vec<f64>,

    /// Bounding box from the element attributes
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub bbox: Vec<f64>,

    /// Row count declared by the extraction service
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub num_rows: u32,

    /// Placement reported by the extraction service
    #[serde(default, deserialize_with = "super::lenient::or_default")]
    pub placement: String,
}

impl Table {
    /// Create a new empty table.
    pub fn new(table_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            ..Default::default()
        }
    }

    /// Set the cell grid and return self.
    pub fn with_data(mut self, data: Vec<Vec<String>>) -> Self {
        self.data = data;
        self
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns (widest row).
    pub fn column_count(&self) -> usize {
        self.data.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if any cell carries non-blank text.
    pub fn has_data(&self) -> bool {
        self.data
            .iter()
            .flatten()
            .any(|cell| !cell.trim().is_empty())
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.data
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_table_new() {
        let table = Table::new("t1");
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
        assert!(!table.has_data());
    }

    #[test]
    fn test_table_with_data() {
        let table = Table::new("t1").with_data(grid(&[&["A", "B"], &["C"]]));
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert!(table.has_data());
        assert_eq!(table.plain_text(), "A\tB\nC");
    }

    #[test]
    fn test_blank_cells_are_not_data() {
        let table = Table::new("t1").with_data(grid(&[&["", "  "], &[""]]));
        assert!(!table.is_empty());
        assert!(!table.has_data());
    }
}
