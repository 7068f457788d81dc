use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// `-` is the reverse strand; anything else (`+`, `.`, `?`) reads as forward.
    pub fn from_symbol(symbol: &str) -> Self {
        if symbol.trim() == "-" {
            Strand::Reverse
        } else {
            Strand::Forward
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A coding protein placed on its contig.
///
/// `position` is the ordinal rank assigned while parsing and never changes.
/// `start` and `end` are kept as the source file wrote them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Protein {
    id: Box<str>,
    contig_id: Box<str>,
    sequence: Box<str>,
    position: usize,
    start: u64,
    end: u64,
    strand: Strand,
}

impl Protein {
    pub fn new(
        id: impl Into<Box<str>>,
        contig_id: impl Into<Box<str>>,
        position: usize,
        start: u64,
        end: u64,
        strand: Strand,
    ) -> Self {
        Self {
            id: id.into(),
            contig_id: contig_id.into(),
            sequence: Box::default(),
            position,
            start,
            end,
            strand,
        }
    }

    pub fn with_sequence(mut self, sequence: impl Into<Box<str>>) -> Self {
        self.sequence = sequence.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn contig_id(&self) -> &str {
        &self.contig_id
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub(crate) fn set_sequence(&mut self, sequence: Box<str>) {
        self.sequence = sequence;
    }

    /// `id  contig  position  strand`, tab separated.
    pub fn short_info(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.id, self.contig_id, self.position, self.strand
        )
    }
}

impl fmt::Display for Protein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.short_info(),
            self.start,
            self.end,
            self.sequence
        )
    }
}
