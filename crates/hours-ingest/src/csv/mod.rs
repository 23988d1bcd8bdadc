//! CSV reading and writing.

mod reader;
mod writer;

pub use reader::{CsvTable, read_csv_table, read_csv_table_from};
pub use writer::{write_csv_table, write_csv_table_to};
