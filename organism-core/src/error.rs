use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrganismError {
    #[error("file format not supported: {path}")]
    UnsupportedFormat { path: String },

    #[error("two-file parse needs two files, got {given}")]
    NeedTwoFiles { given: usize },

    #[error("two-file parse needs one file ending in .{extension}")]
    MissingCompanion { extension: &'static str },

    #[error("missing {field} in coding region starting '{record}'")]
    MissingField {
        field: &'static str,
        record: Box<str>,
    },

    #[error("gff format error at line {line}: {msg}")]
    GffFormat { msg: &'static str, line: u64 },

    #[error("invalid coordinate '{value}' at line {line}")]
    InvalidCoordinate { value: Box<str>, line: u64 },

    #[error("gff parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type OrganismResult<T> = Result<T, OrganismError>;
