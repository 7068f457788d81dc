use pyo3::prelude::*;
use pyo3::types::PyModule;
use std::collections::HashMap;

use crate::utils::to_py_err;
use organism_core::io::faa;

#[pyfunction]
#[pyo3(signature = (path, buffer_size=8192))]
fn read_faa(path: &str, buffer_size: usize) -> PyResult<HashMap<String, String>> {
    let sequences = faa::read_faa_from_path(path, buffer_size.max(1)).map_err(to_py_err)?;
    Ok(sequences
        .into_iter()
        .map(|(id, seq)| (id.into_string(), seq.into_string()))
        .collect())
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(read_faa, m)?)?;
    Ok(())
}
