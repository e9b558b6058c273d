//! Output module
//!
//! Writes Arrow RecordBatches (such as an exported frequency table) to
//! Parquet files.

mod writer;

pub use writer::{write_batch_to_parquet, ParquetWriter, ParquetWriterConfig};
