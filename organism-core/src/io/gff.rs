//! Columnar (GFF) coding-region reader.
//!
//! Only rows whose feature-type column contains `CDS` are kept. Columns used:
//! contig (0), feature type (2), start (3), end (4), strand (6) and
//! attributes (8). Comment and directive lines are skipped, which also skips
//! an embedded `##FASTA` section since its rows never name a CDS.

use crate::error::{OrganismError, OrganismResult};
use crate::io::ContigRecords;
use crate::organism::Strand;
use csv::{Reader, ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const CONTIG_COL: usize = 0;
const FEATURE_COL: usize = 2;
const START_COL: usize = 3;
const END_COL: usize = 4;
const STRAND_COL: usize = 6;
const ATTRIBUTES_COL: usize = 8;

const CDS_FEATURE: &str = "CDS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GffCds {
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
    pub attributes: Box<str>,
}

pub type GffContigs = ContigRecords<GffCds>;

pub fn read_gff_from_reader<R: Read>(reader: R) -> OrganismResult<GffContigs> {
    read_gff(builder().from_reader(reader))
}

pub fn read_gff_from_path(path: impl AsRef<Path>, buffer_size: usize) -> OrganismResult<GffContigs> {
    let file = File::open(path)?;
    read_gff(builder().buffer_capacity(buffer_size).from_reader(file))
}

pub fn read_gff_from_bytes(data: &[u8]) -> OrganismResult<GffContigs> {
    read_gff_from_reader(data)
}

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'));
    builder
}

fn read_gff<R: Read>(mut reader: Reader<R>) -> OrganismResult<GffContigs> {
    let mut contigs = GffContigs::new();
    let mut record = StringRecord::new();
    let mut regions = 0usize;

    while reader.read_record(&mut record)? {
        let is_cds = record
            .get(FEATURE_COL)
            .is_some_and(|feature| feature.contains(CDS_FEATURE));
        if !is_cds {
            continue;
        }

        let line = record.position().map_or(0, |pos| pos.line());
        if record.len() <= ATTRIBUTES_COL {
            return Err(OrganismError::GffFormat {
                msg: "CDS row has fewer than 9 columns",
                line,
            });
        }

        let cds = GffCds {
            start: parse_coordinate(&record[START_COL], line)?,
            end: parse_coordinate(&record[END_COL], line)?,
            strand: Strand::from_symbol(&record[STRAND_COL]),
            attributes: record[ATTRIBUTES_COL].into(),
        };
        contigs
            .entry(record[CONTIG_COL].into())
            .or_default()
            .push(cds);
        regions += 1;
    }

    debug!(contigs = contigs.len(), regions, "read gff coding regions");
    Ok(contigs)
}

fn parse_coordinate(field: &str, line: u64) -> OrganismResult<u64> {
    field
        .trim()
        .parse()
        .map_err(|_| OrganismError::InvalidCoordinate {
            value: field.into(),
            line,
        })
}
