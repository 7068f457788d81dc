//! Identifier extraction from raw annotation text.
//!
//! Canonical ids are treated as opaque matched substrings. When a record
//! carries no canonical protein id, one is synthesized from its coordinates
//! as `Protein(<start>-<end>)`, so GFF and FAA files produced by the same gene
//! caller agree on the fallback id and can still be joined.

use crate::error::{OrganismError, OrganismResult};
use regex::Regex;
use std::fmt::Display;
use std::path::Path;
use std::sync::LazyLock;

static PROTEIN_ACCESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:WP|NP|YP|XP|AP)_\d+\.\d+").expect("protein accession pattern")
});

static CONTIG_ACCESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{1,2}_[A-Z]*\d+\.\d+").expect("contig accession pattern"));

static PROTEIN_ID_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"/protein_id="([^"]+)""#).expect("protein_id pattern"));

// `[^"]` also matches newlines, so wrapped translations are captured whole.
static TRANSLATION_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"/translation="([^"]*)""#).expect("translation pattern"));

static LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<?(\d+)\.\.>?(\d+)").expect("location pattern"));

static ASSEMBLY_ACCESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"GC[FA]_\d+\.\d+").expect("assembly accession pattern"));

/// First canonical protein accession (`WP_000001.1` and friends) in `text`.
pub fn protein_accession(text: &str) -> Option<&str> {
    PROTEIN_ACCESSION.find(text).map(|m| m.as_str())
}

/// Fallback id rendered as `Protein(<start>-<end>)`.
pub fn synthesized_id(start: impl Display, end: impl Display) -> Box<str> {
    format!("Protein({start}-{end})").into_boxed_str()
}

/// Protein id for a GFF CDS row, falling back to its coordinates.
pub fn gff_protein_id(attributes: &str, start: u64, end: u64) -> Box<str> {
    match protein_accession(attributes) {
        Some(id) => id.into(),
        None => synthesized_id(start, end),
    }
}

/// Protein id for a GBFF coding region, read from its `/protein_id` qualifier.
pub fn gbff_protein_id(record: &str, start: u64, end: u64) -> Box<str> {
    match PROTEIN_ID_QUALIFIER.captures(record) {
        Some(caps) => caps[1].into(),
        None => synthesized_id(start, end),
    }
}

/// Protein id for an FAA header line.
///
/// Prodigal-style headers (`>contig_1 # 337 # 2799 # 1 # ...`) without an
/// accession use the second and third `#`-separated fields as coordinates.
/// Headers with neither fall back to their first token, so the result is
/// never empty.
pub fn faa_protein_id(header: &str) -> Box<str> {
    if let Some(id) = protein_accession(header) {
        return id.into();
    }

    let mut fields = header.split('#');
    if let (Some(_), Some(start), Some(end)) = (fields.next(), fields.next(), fields.next()) {
        return synthesized_id(start.trim(), end.trim());
    }

    match header.trim_start_matches('>').split_whitespace().next() {
        Some(token) => token.into(),
        None => synthesized_id('?', '?'),
    }
}

/// Contig id declared on a GBFF `VERSION` line.
///
/// A bare `VERSION` line yields the empty id, the same bucket that holds
/// regions seen before any `VERSION` line.
pub fn extract_contig_id(line: &str) -> Box<str> {
    if let Some(m) = CONTIG_ACCESSION.find(line) {
        return m.as_str().into();
    }
    line.trim_start_matches("VERSION")
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .into()
}

/// First `start..end` pair of a GBFF location, ignoring partial markers.
pub fn extract_coordinates(record: &str) -> OrganismResult<(u64, u64)> {
    LOCATION
        .captures(record)
        .and_then(|caps| Some((caps[1].parse().ok()?, caps[2].parse().ok()?)))
        .ok_or_else(|| missing("location", record))
}

/// Translated sequence of a GBFF coding region with line wrapping removed.
pub fn extract_translation(record: &str) -> OrganismResult<String> {
    let caps = TRANSLATION_QUALIFIER
        .captures(record)
        .ok_or_else(|| missing("translation", record))?;
    Ok(caps[1].chars().filter(|c| !c.is_whitespace()).collect())
}

/// Assembly accession (`GCF_`/`GCA_`) named in a file path, else the file
/// name up to its first dot.
pub fn extract_assembly(path: &Path) -> Option<Box<str>> {
    if let Some(m) = ASSEMBLY_ACCESSION.find(&path.to_string_lossy()) {
        return Some(m.as_str().into());
    }
    let name = path.file_name()?.to_str()?;
    let stem = name.split('.').next().unwrap_or_default();
    if stem.is_empty() {
        None
    } else {
        Some(stem.into())
    }
}

fn missing(field: &'static str, record: &str) -> OrganismError {
    OrganismError::MissingField {
        field,
        record: record.lines().next().unwrap_or_default().trim().into(),
    }
}
