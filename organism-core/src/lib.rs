pub mod config;
pub mod error;
pub mod ids;
pub mod io;
pub mod organism;

pub use config::OrganismConfig;
pub use error::{OrganismError, OrganismResult};
pub use organism::{OrganismIndex, Protein, Strand};
