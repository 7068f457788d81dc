use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use organism_core::error::OrganismError;

pub fn to_py_err(err: OrganismError) -> PyErr {
    match err {
        OrganismError::Io(io) => PyIOError::new_err(io.to_string()),
        err @ (OrganismError::UnsupportedFormat { .. }
        | OrganismError::NeedTwoFiles { .. }
        | OrganismError::MissingCompanion { .. }) => PyValueError::new_err(err.to_string()),
        other => PyRuntimeError::new_err(other.to_string()),
    }
}
