use pyo3::prelude::*;
use pyo3::types::PyModule;

use organism_core::organism::Protein as CoreProtein;

#[pyclass(frozen)]
pub struct Protein {
    pub(crate) inner: CoreProtein,
}

impl From<CoreProtein> for Protein {
    fn from(inner: CoreProtein) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl Protein {
    #[getter]
    fn id(&self) -> &str {
        self.inner.id()
    }

    #[getter]
    fn contig_id(&self) -> &str {
        self.inner.contig_id()
    }

    #[getter]
    fn sequence(&self) -> &str {
        self.inner.sequence()
    }

    #[getter]
    fn position(&self) -> usize {
        self.inner.position()
    }

    #[getter]
    fn start(&self) -> u64 {
        self.inner.start()
    }

    #[getter]
    fn end(&self) -> u64 {
        self.inner.end()
    }

    #[getter]
    fn strand(&self) -> char {
        self.inner.strand().symbol()
    }

    fn short_info(&self) -> String {
        self.inner.short_info()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Protein(id={:?}, contig_id={:?}, position={}, start={}, end={}, strand='{}')",
            self.inner.id(),
            self.inner.contig_id(),
            self.inner.position(),
            self.inner.start(),
            self.inner.end(),
            self.inner.strand()
        )
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Protein>()?;
    Ok(())
}
