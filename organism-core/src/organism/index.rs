use crate::config::OrganismConfig;
use crate::error::{OrganismError, OrganismResult};
use crate::ids;
use crate::io::faa::{self, SequenceMap};
use crate::io::{gbff, gff, ContigRecords, FileFormat};
use crate::organism::protein::Protein;
use crate::organism::resolve::CodingRegion;
use indexmap::IndexMap;
use std::fmt;
use std::io::{BufRead, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Proteins of one organism grouped by contig in genomic order.
///
/// Built once from an annotation file and read-only afterwards, except for
/// [`join_sequences`](Self::join_sequences), which only overwrites protein
/// sequences. For every contig `c` and index `i`,
/// `ids(c)[i] == proteins(c)[i].id()`.
#[derive(Clone, Debug)]
pub struct OrganismIndex {
    contigs_to_proteins: IndexMap<Box<str>, Vec<Protein>>,
    contigs_to_ids: IndexMap<Box<str>, Vec<Box<str>>>,
    total_regions: usize,
    coding_regions: usize,
    config: OrganismConfig,
    assembly: Option<Box<str>>,
}

impl OrganismIndex {
    pub fn new(config: OrganismConfig) -> Self {
        Self {
            contigs_to_proteins: IndexMap::new(),
            contigs_to_ids: IndexMap::new(),
            total_regions: 0,
            coding_regions: 0,
            config,
            assembly: None,
        }
    }

    pub fn from_regions<T: CodingRegion>(
        contigs: ContigRecords<T>,
        config: OrganismConfig,
    ) -> OrganismResult<Self> {
        let mut index = Self::new(config);
        index.resolve_contigs(contigs)?;
        info!(
            total_regions = index.total_regions,
            coding_regions = index.coding_regions,
            contigs = index.contig_count(),
            "built organism index"
        );
        Ok(index)
    }

    pub fn from_gff_reader<R: Read>(reader: R, config: OrganismConfig) -> OrganismResult<Self> {
        Self::from_regions(gff::read_gff_from_reader(reader)?, config)
    }

    pub fn from_gff_bytes(data: &[u8], config: OrganismConfig) -> OrganismResult<Self> {
        Self::from_regions(gff::read_gff_from_bytes(data)?, config)
    }

    pub fn from_gff_path(path: impl AsRef<Path>, config: OrganismConfig) -> OrganismResult<Self> {
        let path = path.as_ref();
        let contigs = gff::read_gff_from_path(path, config.buffer_size)?;
        let mut index = Self::from_regions(contigs, config)?;
        index.assembly = ids::extract_assembly(path);
        Ok(index)
    }

    pub fn from_gbff_reader<R: BufRead>(reader: R, config: OrganismConfig) -> OrganismResult<Self> {
        Self::from_regions(gbff::read_gbff_from_reader(reader)?, config)
    }

    pub fn from_gbff_bytes(data: &[u8], config: OrganismConfig) -> OrganismResult<Self> {
        Self::from_regions(gbff::read_gbff_from_bytes(data)?, config)
    }

    pub fn from_gbff_path(path: impl AsRef<Path>, config: OrganismConfig) -> OrganismResult<Self> {
        let path = path.as_ref();
        let contigs = gbff::read_gbff_from_path(path, config.buffer_size)?;
        let mut index = Self::from_regions(contigs, config)?;
        index.assembly = ids::extract_assembly(path);
        Ok(index)
    }

    /// Single-file build, dispatched on the `.gbff` / `.gff` extension.
    pub fn from_path(path: impl AsRef<Path>, config: OrganismConfig) -> OrganismResult<Self> {
        let path = path.as_ref();
        match FileFormat::from_path(path) {
            Some(FileFormat::Gbff) => Self::from_gbff_path(path, config),
            Some(FileFormat::Gff) => Self::from_gff_path(path, config),
            _ => Err(OrganismError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Two-file build: one `.gff` and one `.faa`, in either order.
    ///
    /// The pair is validated before anything is read. The GFF is parsed first
    /// and the FAA sequences are then joined onto its proteins by id.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P], config: OrganismConfig) -> OrganismResult<Self> {
        if paths.len() < 2 {
            return Err(OrganismError::NeedTwoFiles { given: paths.len() });
        }
        if paths.len() > 2 {
            warn!(given = paths.len(), "only the first two files are used");
        }

        let pair = [paths[0].as_ref(), paths[1].as_ref()];
        let pick = |wanted: FileFormat| {
            pair.into_iter()
                .find(|path| FileFormat::from_path(path) == Some(wanted))
                .ok_or(OrganismError::MissingCompanion {
                    extension: wanted.extension(),
                })
        };
        let gff_path = pick(FileFormat::Gff)?;
        let faa_path = pick(FileFormat::Faa)?;

        let mut index = Self::from_gff_path(gff_path, config)?;
        index.join_faa_path(faa_path)?;
        Ok(index)
    }

    /// Reads an FAA file and joins it; see [`join_sequences`](Self::join_sequences).
    pub fn join_faa_path(&mut self, path: impl AsRef<Path>) -> OrganismResult<usize> {
        let sequences = faa::read_faa_from_path(path, self.config.buffer_size)?;
        Ok(self.join_sequences(&sequences))
    }

    /// Overwrites the sequence of every protein whose id is in `sequences`.
    ///
    /// Proteins missing from the map keep their current sequence. Returns the
    /// number of proteins updated.
    pub fn join_sequences(&mut self, sequences: &SequenceMap) -> usize {
        let mut updated = 0;
        for proteins in self.contigs_to_proteins.values_mut() {
            for protein in proteins.iter_mut() {
                if let Some(sequence) = sequences.get(protein.id()) {
                    protein.set_sequence(sequence.clone());
                    updated += 1;
                }
            }
        }
        debug!(
            updated,
            available = sequences.len(),
            "joined protein sequences"
        );
        updated
    }

    pub(super) fn count_region(&mut self) {
        self.total_regions += 1;
    }

    pub(super) fn push_protein(&mut self, protein: Protein) {
        self.contigs_to_ids
            .entry(protein.contig_id().into())
            .or_default()
            .push(protein.id().into());
        self.contigs_to_proteins
            .entry(protein.contig_id().into())
            .or_default()
            .push(protein);
        self.coding_regions += 1;
    }

    /// Contig and list index of the first protein with this id.
    pub fn lookup(&self, id: &str) -> Option<(&str, usize)> {
        self.contigs_to_ids.iter().find_map(|(contig, ids)| {
            ids.iter()
                .position(|candidate| &**candidate == id)
                .map(|index| (&**contig, index))
        })
    }

    pub fn get_protein(&self, id: &str) -> Option<&Protein> {
        let (proteins, index) = self.locate(id)?;
        proteins.get(index)
    }

    pub fn protein_info(&self, id: &str) -> Option<String> {
        self.get_protein(id).map(Protein::short_info)
    }

    /// Up to `amount` proteins before `id` on its contig, in position order.
    ///
    /// With `inclusive` the window ends at `id` itself; without it the window
    /// ends just before `id` and reaches one protein further back. Empty when
    /// `id` is unknown.
    pub fn upstream(&self, id: &str, amount: usize, inclusive: bool) -> &[Protein] {
        let Some((proteins, index)) = self.locate(id) else {
            return &[];
        };
        let (left, right) = if inclusive {
            (index.saturating_sub(amount), index + 1)
        } else {
            (index.saturating_sub(amount.saturating_add(1)), index)
        };
        &proteins[left..right]
    }

    /// Up to `amount` proteins after `id` on its contig, in position order.
    ///
    /// With `inclusive` the window starts at `id` itself; without it the
    /// window starts just after `id` and reaches one protein further on.
    /// Empty when `id` is unknown.
    pub fn downstream(&self, id: &str, amount: usize, inclusive: bool) -> &[Protein] {
        let Some((proteins, index)) = self.locate(id) else {
            return &[];
        };
        let (left, right) = if inclusive {
            (index, index.saturating_add(amount).saturating_add(1))
        } else {
            (index + 1, index.saturating_add(amount).saturating_add(2))
        };
        &proteins[left..right.min(proteins.len())]
    }

    fn locate(&self, id: &str) -> Option<(&[Protein], usize)> {
        let (contig, index) = self.lookup(id)?;
        let proteins = self.contigs_to_proteins.get(contig)?;
        Some((proteins.as_slice(), index))
    }

    pub fn contigs(&self) -> &IndexMap<Box<str>, Vec<Protein>> {
        &self.contigs_to_proteins
    }

    pub fn contig_ids(&self) -> impl Iterator<Item = &str> {
        self.contigs_to_proteins.keys().map(|contig| &**contig)
    }

    pub fn proteins(&self, contig: &str) -> Option<&[Protein]> {
        self.contigs_to_proteins.get(contig).map(Vec::as_slice)
    }

    pub fn ids(&self, contig: &str) -> Option<&[Box<str>]> {
        self.contigs_to_ids.get(contig).map(Vec::as_slice)
    }

    pub fn total_regions(&self) -> usize {
        self.total_regions
    }

    pub fn coding_regions(&self) -> usize {
        self.coding_regions
    }

    pub fn contig_count(&self) -> usize {
        self.contigs_to_proteins.len()
    }

    pub fn config(&self) -> &OrganismConfig {
        &self.config
    }

    pub fn assembly(&self) -> Option<&str> {
        self.assembly.as_deref()
    }

    pub fn summary(&self) -> String {
        format!(
            "Total CDS: {}\nTotal coding CDS: {}\nContigs found: {}",
            self.total_regions,
            self.coding_regions,
            self.contig_count()
        )
    }
}

impl fmt::Display for OrganismIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        for protein in self.contigs_to_proteins.values().flatten() {
            writeln!(f, "{protein}")?;
        }
        Ok(())
    }
}
