//! Reading DIMACS graph files.

pub use error::{Error, ErrorKind, Malformed, Result};
pub use grammar::{parse_line, Line, LineKind};
pub use options::{BlankLines, EdgeCountPolicy, ReadOptions};
pub use reader::{read_from_file, DimacsReader, FORMAT};
pub use tokenizer::{split, tokenize};

pub mod error;

mod grammar;
mod options;
mod reader;
mod tokenizer;
