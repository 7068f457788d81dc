pub mod detect;
pub mod faa;
pub mod gbff;
pub mod gff;

use indexmap::IndexMap;
use memchr::memmem;

pub use detect::FileFormat;

/// Raw coding-region fragments grouped by contig id, in first-seen contig
/// order and document order within each contig.
pub type ContigRecords<T> = IndexMap<Box<str>, Vec<T>>;

pub(crate) fn contains_marker(text: &str, marker: &str) -> bool {
    memmem::find(text.as_bytes(), marker.as_bytes()).is_some()
}
