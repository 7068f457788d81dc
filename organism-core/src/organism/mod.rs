pub mod index;
pub mod protein;
pub mod resolve;

pub use index::OrganismIndex;
pub use protein::{Protein, Strand};
pub use resolve::CodingRegion;
