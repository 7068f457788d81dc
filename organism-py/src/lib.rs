use pyo3::prelude::*;

mod faa;
mod organism;
mod protein;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    protein::register(m)?;
    organism::register(m)?;
    faa::register(m)?;
    Ok(())
}
