// ---------------------------------------------------------------------------
// Dataset – the uploaded table
// ---------------------------------------------------------------------------

/// A parsed CSV table. Cells keep their original text so that columns the
/// tool does not understand are written back exactly as they were read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    /// Header row, in file order.
    pub columns: Vec<String>,
    /// One entry per data row; every row has `columns.len()` cells.
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {}, column '{column}': '{value}' is not a number", .row + 1)]
    InvalidNumber {
        /// 0-based data row index; messages show it 1-based.
        row: usize,
        column: String,
        value: String,
    },
}

impl Dataset {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact (case-sensitive) name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cells of one column, top to bottom.
    #[cfg(test)]
    pub fn column_values(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }

    /// Extract three numeric columns as fixed-order feature rows.
    pub fn feature_matrix(&self, names: &[&str; 3]) -> Result<Vec<[f64; 3]>, DataError> {
        let mut indices = [0usize; 3];
        for (slot, name) in indices.iter_mut().zip(names) {
            *slot = self
                .column_index(name)
                .ok_or_else(|| DataError::MissingColumn(name.to_string()))?;
        }

        self.rows
            .iter()
            .enumerate()
            .map(|(row_no, row)| -> Result<[f64; 3], DataError> {
                let mut features = [0.0; 3];
                for (k, &col_idx) in indices.iter().enumerate() {
                    let raw = &row[col_idx];
                    features[k] = raw.trim().parse::<f64>().map_err(|_| {
                        DataError::InvalidNumber {
                            row: row_no,
                            column: names[k].to_string(),
                            value: raw.clone(),
                        }
                    })?;
                }
                Ok(features)
            })
            .collect()
    }

    /// Return a copy with `name` set to `values`. An existing column of that
    /// name is overwritten in place, otherwise the column is appended.
    ///
    /// `values` must have one entry per row.
    pub fn with_column(&self, name: &str, values: Vec<String>) -> Dataset {
        debug_assert_eq!(values.len(), self.rows.len());
        let mut out = self.clone();
        match out.column_index(name) {
            Some(idx) => {
                for (row, value) in out.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                out.columns.push(name.to_string());
                for (row, value) in out.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        out
    }
}
