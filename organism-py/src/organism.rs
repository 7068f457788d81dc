use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyAny, PyDict, PyList, PyModule};

use crate::protein::Protein;
use crate::utils::to_py_err;
use organism_core::config::OrganismConfig;
use organism_core::organism::{OrganismIndex, Protein as CoreProtein};

/// Proteins of one organism, grouped by contig in genomic order.
///
/// `files` is a single `.gbff`/`.gff` path, or a list holding one `.gff`
/// and one `.faa` path whose sequences are joined onto the GFF proteins.
#[pyclass]
pub struct Organism {
    inner: OrganismIndex,
}

#[pymethods]
impl Organism {
    #[new]
    #[pyo3(signature = (files, count_pseudo=true, position_starts_at_zero=true, buffer_size=8192))]
    fn new(
        files: &Bound<'_, PyAny>,
        count_pseudo: bool,
        position_starts_at_zero: bool,
        buffer_size: usize,
    ) -> PyResult<Self> {
        let config = OrganismConfig::new()
            .with_count_pseudo(count_pseudo)
            .with_position_starts_at_zero(position_starts_at_zero)
            .with_buffer_size(buffer_size);

        let built = if let Ok(path) = files.extract::<String>() {
            OrganismIndex::from_path(&path, config)
        } else {
            let paths: Vec<String> = files
                .extract()
                .map_err(|_| PyTypeError::new_err("files must be a path or a list of paths"))?;
            OrganismIndex::from_paths(&paths, config)
        };
        Ok(Self {
            inner: built.map_err(to_py_err)?,
        })
    }

    #[getter]
    fn total_regions(&self) -> usize {
        self.inner.total_regions()
    }

    #[getter]
    fn coding_regions(&self) -> usize {
        self.inner.coding_regions()
    }

    #[getter]
    fn contig_count(&self) -> usize {
        self.inner.contig_count()
    }

    #[getter]
    fn assembly(&self) -> Option<&str> {
        self.inner.assembly()
    }

    #[getter]
    fn count_pseudo(&self) -> bool {
        self.inner.config().count_pseudo
    }

    #[getter]
    fn position_starts_at_zero(&self) -> bool {
        self.inner.config().position_starts_at_zero
    }

    /// `(contig_id, index)` of the protein, or `(None, None)`.
    fn lookup(&self, id: &str) -> (Option<String>, Option<usize>) {
        match self.inner.lookup(id) {
            Some((contig, index)) => (Some(contig.to_string()), Some(index)),
            None => (None, None),
        }
    }

    fn get_protein(&self, id: &str) -> Option<Protein> {
        self.inner.get_protein(id).cloned().map(Protein::from)
    }

    fn protein_info(&self, id: &str) -> Option<String> {
        self.inner.protein_info(id)
    }

    #[pyo3(signature = (id, amount, inclusive=true))]
    fn upstream(&self, id: &str, amount: usize, inclusive: bool) -> Vec<Protein> {
        to_py_proteins(self.inner.upstream(id, amount, inclusive))
    }

    #[pyo3(signature = (id, amount, inclusive=true))]
    fn downstream(&self, id: &str, amount: usize, inclusive: bool) -> Vec<Protein> {
        to_py_proteins(self.inner.downstream(id, amount, inclusive))
    }

    /// Joins FAA sequences by protein id; returns how many proteins changed.
    fn join_faa(&mut self, path: &str) -> PyResult<usize> {
        self.inner.join_faa_path(path).map_err(to_py_err)
    }

    fn contigs(&self, py: Python<'_>) -> PyResult<PyObject> {
        let dict = PyDict::new_bound(py);
        for (contig, proteins) in self.inner.contigs() {
            let list = PyList::empty_bound(py);
            for protein in proteins {
                list.append(Py::new(py, Protein::from(protein.clone()))?)?;
            }
            dict.set_item(&**contig, list)?;
        }
        Ok(dict.to_object(py))
    }

    fn summary(&self) -> String {
        self.inner.summary()
    }

    fn __len__(&self) -> usize {
        self.inner.coding_regions()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Organism(assembly={:?}, contigs={}, coding_regions={})",
            self.inner.assembly(),
            self.inner.contig_count(),
            self.inner.coding_regions()
        )
    }
}

fn to_py_proteins(proteins: &[CoreProtein]) -> Vec<Protein> {
    proteins.iter().cloned().map(Protein::from).collect()
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Organism>()?;
    Ok(())
}
