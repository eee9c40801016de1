use crate::bob::{BagOfBonds, BobConfig};
use crate::error::BobError;
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

mod compound;
use compound::PyCompound;

impl From<BobError> for PyErr {
    fn from(e: BobError) -> PyErr {
        PyValueError::new_err(e.to_string())
    }
}

/// Bag-of-Bonds descriptor of an interaction matrix.
#[pyfunction]
#[pyo3(signature = (c_matrix, atoms, max_n=25, max_bond_len=325))]
fn bob<'py>(
    py: Python<'py>,
    c_matrix: PyReadonlyArray2<f64>,
    atoms: Vec<String>,
    max_n: usize,
    max_bond_len: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let config = BobConfig::new(max_n, max_bond_len);
    let bob = BagOfBonds::new(config).encode(&atoms, c_matrix.as_array())?;
    Ok(bob.into_pyarray(py))
}

#[pymodule]
pub fn bag_of_bonds(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(bob, m)?)?;
    m.add_class::<PyCompound>()?;
    Ok(())
}
