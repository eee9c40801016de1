use crate::bob::BobConfig;
use crate::compound::Compound;
use numpy::{IntoPyArray, PyArray1, PyArray2};
use pyo3::prelude::*;

#[pyclass(name = "Compound")]
#[derive(Clone)]
pub struct PyCompound(pub Compound);

#[pymethods]
impl PyCompound {
    #[staticmethod]
    fn from_xyz(file: &str) -> PyResult<Self> {
        Ok(Self(Compound::from_xyz(file)?))
    }

    #[getter]
    fn get_name(&self) -> Option<String> {
        self.0.name.clone()
    }

    #[getter]
    fn get_n(&self) -> usize {
        self.0.len()
    }

    #[getter]
    fn get_atoms(&self) -> Vec<String> {
        self.0.atoms.clone()
    }

    #[getter]
    fn get_atoms_nc<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        self.0.nuclear_charges.clone().into_pyarray(py)
    }

    #[getter]
    fn get_coordinates<'py>(&self, py: Python<'py>) -> &'py PyArray2<f64> {
        self.0.coordinates.clone().into_pyarray(py)
    }

    #[pyo3(signature = (size=None))]
    fn coulomb_matrix<'py>(&self, py: Python<'py>, size: Option<usize>) -> &'py PyArray2<f64> {
        match size {
            Some(size) => self.0.padded_coulomb_matrix(size),
            None => self.0.coulomb_matrix(),
        }
        .into_pyarray(py)
    }

    #[pyo3(signature = (size=None))]
    fn coulomb_eigenvalues<'py>(&self, py: Python<'py>, size: Option<usize>) -> &'py PyArray1<f64> {
        self.0
            .coulomb_eigenvalues(size.unwrap_or_else(|| self.0.len()))
            .into_pyarray(py)
    }

    #[pyo3(signature = (max_n=25, max_bond_len=325))]
    fn bob<'py>(
        &self,
        py: Python<'py>,
        max_n: usize,
        max_bond_len: usize,
    ) -> PyResult<&'py PyArray1<f64>> {
        let bob = self.0.bob(BobConfig::new(max_n, max_bond_len))?;
        Ok(bob.into_pyarray(py))
    }

    fn __repr__(&self) -> String {
        format!(
            "Compound(name={:?}, atoms=[{}])",
            self.0.name.as_deref().unwrap_or(""),
            self.0.atoms.join(", ")
        )
    }
}
