//! Free-text (GenBank flat file) coding-region reader.
//!
//! The feature table is segmented line by line by prefix:
//!
//! ```text
//! VERSION     NC_000913.3                      <- sets the current contig
//!      CDS             190..255                <- opens a coding region
//!                      /protein_id="NP_414542.1"  <- continuation (21 spaces)
//!      gene            337..2799               <- any other line closes it
//! ```
//!
//! A closed coding region is truncated before it is stored: the location line
//! is kept, followed by everything from the `/protein_id=` line on, or by the
//! `/pseudo` line alone, whichever comes first.

use crate::error::OrganismResult;
use crate::ids;
use crate::io::{contains_marker, ContigRecords};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use tracing::{debug, warn};

const CDS_PREFIX: &str = "     CDS ";
const CONTINUATION_PREFIX: &str = "                     ";
const VERSION_PREFIX: &str = "VERSION";
const FEATURE_INDENT: &str = "     ";

pub(crate) const PROTEIN_ID_MARKER: &str = "/protein_id=";
pub(crate) const PSEUDO_MARKER: &str = "/pseudo";

/// One truncated GBFF coding region: the location line plus the qualifier
/// lines needed to resolve it into a protein.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GbffRegion(Box<str>);

impl GbffRegion {
    /// Wraps region text as-is, without truncation.
    pub fn from_text(text: impl Into<Box<str>>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub type GbffContigs = ContigRecords<GbffRegion>;

pub fn read_gbff_from_reader<R: BufRead>(mut reader: R) -> OrganismResult<GbffContigs> {
    let mut accumulator = RegionAccumulator::default();
    let mut buf_line = String::new();
    loop {
        buf_line.clear();
        if reader.read_line(&mut buf_line)? == 0 {
            break;
        }
        accumulator.push_line(buf_line.trim_end_matches(&['\n', '\r'][..]));
    }

    let contigs = accumulator.finish();
    debug!(
        contigs = contigs.len(),
        regions = contigs.values().map(Vec::len).sum::<usize>(),
        "read gbff coding regions"
    );
    Ok(contigs)
}

pub fn read_gbff_from_path(path: impl AsRef<Path>, buffer_size: usize) -> OrganismResult<GbffContigs> {
    let file = File::open(path)?;
    read_gbff_from_reader(BufReader::with_capacity(buffer_size, file))
}

pub fn read_gbff_from_bytes(data: &[u8]) -> OrganismResult<GbffContigs> {
    read_gbff_from_reader(BufReader::new(Cursor::new(data)))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum State {
    #[default]
    Idle,
    /// Inside a feature. Only confirmed (CDS) features keep their lines.
    Accumulating { confirmed: bool },
}

#[derive(Debug, Default)]
struct RegionAccumulator {
    state: State,
    contig: Box<str>,
    current: String,
    regions: GbffContigs,
}

impl RegionAccumulator {
    fn push_line(&mut self, line: &str) {
        if line.starts_with(CDS_PREFIX) {
            self.close();
            self.state = State::Accumulating { confirmed: true };
            self.append(line);
        } else if line.starts_with(CONTINUATION_PREFIX) {
            if self.state == (State::Accumulating { confirmed: true }) {
                self.append(line);
            }
        } else if line.starts_with(VERSION_PREFIX) {
            self.close();
            self.contig = ids::extract_contig_id(line);
            if self.contig.is_empty() {
                warn!(line, "VERSION line without a contig id");
            }
            debug!(contig = %self.contig, "gbff contig");
        } else {
            self.close();
            if is_feature_key(line) {
                self.state = State::Accumulating { confirmed: false };
            }
        }
    }

    fn append(&mut self, line: &str) {
        self.current.push_str(line);
        self.current.push('\n');
    }

    fn close(&mut self) {
        let state = std::mem::take(&mut self.state);
        let record = std::mem::take(&mut self.current);
        if state != (State::Accumulating { confirmed: true }) {
            return;
        }
        if self.contig.is_empty() {
            warn!("coding region found before any VERSION line");
        }
        self.regions
            .entry(self.contig.clone())
            .or_default()
            .push(GbffRegion(truncate_region(&record)));
    }

    fn finish(mut self) -> GbffContigs {
        self.close();
        self.regions
    }
}

fn is_feature_key(line: &str) -> bool {
    line.strip_prefix(FEATURE_INDENT)
        .is_some_and(|rest| rest.starts_with(|c: char| !c.is_whitespace()))
}

fn truncate_region(record: &str) -> Box<str> {
    let mut lines = record.lines();
    let Some(first) = lines.next() else {
        return Box::default();
    };
    let rest: Vec<&str> = lines.collect();

    let mut out = String::with_capacity(record.len());
    out.push_str(first);
    out.push('\n');

    let cut = rest.iter().enumerate().find_map(|(i, line)| {
        if contains_marker(line, PROTEIN_ID_MARKER) {
            Some((i, false))
        } else if contains_marker(line, PSEUDO_MARKER) {
            Some((i, true))
        } else {
            None
        }
    });

    let kept = match cut {
        Some((i, true)) => &rest[i..=i],
        Some((i, false)) => &rest[i..],
        None => &rest[..],
    };
    for line in kept {
        out.push_str(line);
        out.push('\n');
    }
    out.into_boxed_str()
}
