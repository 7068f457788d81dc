//! Turns raw per-contig coding regions into positioned [`Protein`]s.

use crate::config::OrganismConfig;
use crate::error::OrganismResult;
use crate::ids;
use crate::io::gbff::{GbffRegion, PSEUDO_MARKER};
use crate::io::gff::GffCds;
use crate::io::{contains_marker, ContigRecords};
use crate::organism::index::OrganismIndex;
use crate::organism::protein::{Protein, Strand};
use tracing::debug;

const GFF_PSEUDO_MARKER: &str = "pseudo=true";
const COMPLEMENT_MARKER: &str = "complement";

/// A raw coding region as produced by one of the annotation readers.
pub trait CodingRegion {
    /// Pseudo regions are counted but never become proteins.
    fn is_pseudo(&self) -> bool;

    fn to_protein(&self, contig_id: &str, position: usize) -> OrganismResult<Protein>;
}

impl CodingRegion for GffCds {
    fn is_pseudo(&self) -> bool {
        contains_marker(&self.attributes, GFF_PSEUDO_MARKER)
    }

    fn to_protein(&self, contig_id: &str, position: usize) -> OrganismResult<Protein> {
        let id = ids::gff_protein_id(&self.attributes, self.start, self.end);
        Ok(Protein::new(
            id,
            contig_id,
            position,
            self.start,
            self.end,
            self.strand,
        ))
    }
}

impl CodingRegion for GbffRegion {
    fn is_pseudo(&self) -> bool {
        contains_marker(self.as_str(), PSEUDO_MARKER)
    }

    // A confirmed, non-pseudo region must carry a location and a translation.
    fn to_protein(&self, contig_id: &str, position: usize) -> OrganismResult<Protein> {
        let text = self.as_str();
        let translation = ids::extract_translation(text)?;
        let (start, end) = ids::extract_coordinates(text)?;
        let id = ids::gbff_protein_id(text, start, end);
        let strand = if contains_marker(text, COMPLEMENT_MARKER) {
            Strand::Reverse
        } else {
            Strand::Forward
        };
        Ok(Protein::new(id, contig_id, position, start, end, strand).with_sequence(translation))
    }
}

#[derive(Debug)]
struct PositionCounter {
    next: usize,
    count_pseudo: bool,
}

impl PositionCounter {
    fn new(config: &OrganismConfig) -> Self {
        Self {
            next: config.first_position(),
            count_pseudo: config.count_pseudo,
        }
    }

    fn skip_pseudo(&mut self) {
        if self.count_pseudo {
            self.next += 1;
        }
    }

    fn claim(&mut self) -> usize {
        let position = self.next;
        self.next += 1;
        position
    }
}

impl OrganismIndex {
    /// Walks every contig once in reader order, assigning positions from a
    /// fresh counter per contig.
    pub(crate) fn resolve_contigs<T: CodingRegion>(
        &mut self,
        contigs: ContigRecords<T>,
    ) -> OrganismResult<()> {
        for (contig_id, regions) in contigs {
            let mut counter = PositionCounter::new(self.config());
            let mut emitted = 0usize;
            for region in &regions {
                self.count_region();
                if region.is_pseudo() {
                    counter.skip_pseudo();
                    continue;
                }
                let protein = region.to_protein(&contig_id, counter.claim())?;
                self.push_protein(protein);
                emitted += 1;
            }
            debug!(
                contig = %contig_id,
                regions = regions.len(),
                emitted,
                "resolved contig"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cds(start: u64, end: u64, attributes: &str) -> GffCds {
        GffCds {
            start,
            end,
            strand: Strand::Forward,
            attributes: attributes.into(),
        }
    }

    #[test]
    fn counter_seeds_and_skips() {
        let config = OrganismConfig::new().with_position_starts_at_zero(false);
        let mut counter = PositionCounter::new(&config);
        assert_eq!(counter.claim(), 1);
        counter.skip_pseudo();
        assert_eq!(counter.claim(), 3);

        let config = config.with_count_pseudo(false);
        let mut counter = PositionCounter::new(&config);
        counter.skip_pseudo();
        assert_eq!(counter.claim(), 1);
    }

    #[test]
    fn gff_region_to_protein() {
        let region = cds(10, 50, "ID=cds1;WP_012345678.1");
        assert!(!region.is_pseudo());
        let protein = region.to_protein("NC_001", 0).unwrap();
        assert_eq!(protein.id(), "WP_012345678.1");
        assert_eq!(protein.contig_id(), "NC_001");
        assert_eq!((protein.start(), protein.end()), (10, 50));
        assert_eq!(protein.sequence(), "");
    }

    #[test]
    fn gff_pseudo_marker() {
        assert!(cds(1, 2, "ID=cds1;pseudo=true").is_pseudo());
        assert!(!cds(1, 2, "ID=cds1;pseudo=false").is_pseudo());
    }

    #[test]
    fn gbff_region_to_protein() {
        let region = GbffRegion::from_text(
            "     CDS             complement(600..900)\n                     /protein_id=\"NP_414543.1\"\n                     /translation=\"MRVL\n                     KF\"\n",
        );
        let protein = region.to_protein("NC_000913.3", 7).unwrap();
        assert_eq!(protein.id(), "NP_414543.1");
        assert_eq!(protein.position(), 7);
        assert_eq!((protein.start(), protein.end()), (600, 900));
        assert_eq!(protein.strand(), Strand::Reverse);
        assert_eq!(protein.sequence(), "MRVLKF");
    }

    #[test]
    fn gbff_region_without_translation_fails() {
        let region = GbffRegion::from_text(
            "     CDS             1..30\n                     /protein_id=\"NP_1.1\"\n",
        );
        assert!(region.to_protein("NC_1.1", 0).is_err());
    }
}
