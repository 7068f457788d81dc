use crate::error::OrganismResult;
use crate::ids;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use tracing::debug;

/// Protein id to amino-acid sequence, as read from an FAA file.
pub type SequenceMap = HashMap<Box<str>, Box<str>>;

/// Reads `>`-headed protein records into a [`SequenceMap`].
///
/// Ids come from [`ids::faa_protein_id`]. Sequence lines are right-trimmed and
/// concatenated. Records with an empty sequence are not stored, and a repeated
/// id keeps the last sequence read.
pub fn read_faa_from_reader<R: BufRead>(mut reader: R) -> OrganismResult<SequenceMap> {
    let mut sequences = SequenceMap::new();
    let mut id: Option<Box<str>> = None;
    let mut seq_buf = String::new();
    let mut buf_line = String::new();

    loop {
        buf_line.clear();
        if reader.read_line(&mut buf_line)? == 0 {
            break;
        }
        if buf_line.starts_with('>') {
            flush(&mut sequences, id.take(), &mut seq_buf);
            id = Some(ids::faa_protein_id(buf_line.trim_end()));
        } else {
            seq_buf.push_str(buf_line.trim_end());
        }
    }
    flush(&mut sequences, id, &mut seq_buf);

    debug!(proteins = sequences.len(), "read faa sequences");
    Ok(sequences)
}

pub fn read_faa_from_path(path: impl AsRef<Path>, buffer_size: usize) -> OrganismResult<SequenceMap> {
    let file = File::open(path)?;
    read_faa_from_reader(BufReader::with_capacity(buffer_size, file))
}

pub fn read_faa_from_bytes(data: &[u8]) -> OrganismResult<SequenceMap> {
    read_faa_from_reader(BufReader::new(Cursor::new(data)))
}

fn flush(sequences: &mut SequenceMap, id: Option<Box<str>>, seq_buf: &mut String) {
    let seq = std::mem::take(seq_buf);
    match id {
        Some(id) if !seq.is_empty() => {
            sequences.insert(id, seq.into_boxed_str());
        }
        _ => {}
    }
}
