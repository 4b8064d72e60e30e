//! Delimited text reading.

mod reader;
mod tokenizer;

pub use reader::{MAX_SOURCE_SIZE, read_source, read_source_with_limit};
pub use tokenizer::{CsvRow, tokenize};
