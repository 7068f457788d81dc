//! Input format dispatch by file extension.
//!
//! Matching is on the final extension only and is case sensitive, so
//! `genome.gff.gz` or `genome.GFF` are not recognised.

use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
    Gff,
    Gbff,
    Faa,
}

impl FileFormat {
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        match path.as_ref().extension()?.to_str()? {
            "gff" => Some(FileFormat::Gff),
            "gbff" => Some(FileFormat::Gbff),
            "faa" => Some(FileFormat::Faa),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Gff => "gff",
            FileFormat::Gbff => "gbff",
            FileFormat::Faa => "faa",
        }
    }
}
