/// Build-time options for an [`OrganismIndex`](crate::organism::OrganismIndex).
///
/// Captured when the index is created and fixed for its lifetime. When two
/// indexes are compared position by position, both must agree on
/// `count_pseudo` and `position_starts_at_zero`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrganismConfig {
    /// Pseudo genes consume a position slot without producing a protein.
    pub count_pseudo: bool,
    /// First protein on a contig gets position 0 instead of 1.
    pub position_starts_at_zero: bool,
    /// Read buffer capacity used by the path-based readers.
    pub buffer_size: usize,
}

impl Default for OrganismConfig {
    fn default() -> Self {
        Self {
            count_pseudo: true,
            position_starts_at_zero: true,
            buffer_size: 8192,
        }
    }
}

impl OrganismConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count_pseudo(mut self, count_pseudo: bool) -> Self {
        self.count_pseudo = count_pseudo;
        self
    }

    pub fn with_position_starts_at_zero(mut self, starts_at_zero: bool) -> Self {
        self.position_starts_at_zero = starts_at_zero;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    pub fn first_position(&self) -> usize {
        if self.position_starts_at_zero {
            0
        } else {
            1
        }
    }
}
