//! Dense year × class frequency table

use crate::error::Result;
use crate::output::{write_batch_to_parquet, ParquetWriterConfig};
use arrow::array::{ArrayRef, Int64Array, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Column name of the year index in exported files
pub const YEAR_COLUMN: &str = "year";

/// Counts indexed by (year, class name)
///
/// Rows follow the order of the requested years, columns the order of
/// the requested class names. Every cell exists; absent matches are `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    years: Vec<i64>,
    class_names: Vec<String>,
    /// Row-major, `years.len()` rows of `class_names.len()` cells
    cells: Vec<Vec<u64>>,
}

impl FrequencyTable {
    /// Create a table with every cell set to zero
    pub fn zeroed(years: Vec<i64>, class_names: Vec<String>) -> Self {
        let cells = vec![vec![0; class_names.len()]; years.len()];
        Self {
            years,
            class_names,
            cells,
        }
    }

    pub(crate) fn increment(&mut self, row: usize, column: usize) {
        self.cells[row][column] += 1;
    }

    /// `(rows, columns)`, i.e. `(years.len(), class_names.len())`
    pub fn shape(&self) -> (usize, usize) {
        (self.years.len(), self.class_names.len())
    }

    /// Row index
    pub fn years(&self) -> &[i64] {
        &self.years
    }

    /// Column index
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// Cell for a year and class (first match if either repeats)
    pub fn get(&self, year: i64, class_name: &str) -> Option<u64> {
        let row = self.years.iter().position(|y| *y == year)?;
        let column = self.column_index(class_name)?;
        Some(self.cells[row][column])
    }

    /// All cells of a class, in year order
    pub fn column(&self, class_name: &str) -> Option<Vec<u64>> {
        let column = self.column_index(class_name)?;
        Some(self.cells.iter().map(|row| row[column]).collect())
    }

    /// All cells of a year, in class order
    pub fn row(&self, year: i64) -> Option<&[u64]> {
        let row = self.years.iter().position(|y| *y == year)?;
        Some(&self.cells[row])
    }

    /// Sum of every cell
    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }

    fn column_index(&self, class_name: &str) -> Option<usize> {
        self.class_names.iter().position(|c| c == class_name)
    }

    /// Arrow batch with one `UInt64` column per class.
    ///
    /// The batch has the same shape as the table; the year index is not
    /// a column (see [`Self::to_indexed_record_batch`]).
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        self.build_batch(Vec::new(), Vec::new())
    }

    /// Arrow batch with a leading `year` column followed by the classes
    pub fn to_indexed_record_batch(&self) -> Result<RecordBatch> {
        let year: ArrayRef = Arc::new(Int64Array::from(self.years.clone()));
        self.build_batch(
            vec![Field::new(YEAR_COLUMN, DataType::Int64, false)],
            vec![year],
        )
    }

    fn build_batch(&self, mut fields: Vec<Field>, mut columns: Vec<ArrayRef>) -> Result<RecordBatch> {
        for (index, class_name) in self.class_names.iter().enumerate() {
            fields.push(Field::new(class_name, DataType::UInt64, false));
            let values: Vec<u64> = self.cells.iter().map(|row| row[index]).collect();
            columns.push(Arc::new(UInt64Array::from(values)));
        }

        let options = RecordBatchOptions::new().with_row_count(Some(self.years.len()));
        Ok(RecordBatch::try_new_with_options(
            Arc::new(Schema::new(fields)),
            columns,
            &options,
        )?)
    }

    /// Write the table, year index included, to a Parquet file
    pub fn write_parquet(&self, path: impl AsRef<Path>) -> Result<usize> {
        let batch = self.to_indexed_record_batch()?;
        write_batch_to_parquet(path, &batch, Some(&ParquetWriterConfig::default()))
    }
}
