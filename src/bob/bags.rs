use super::BondLabel;
use crate::error::{BobError, BobResult};
use indexmap::IndexMap;
use ndarray::ArrayView2;
use std::ops::Deref;

/// The entries of an interaction matrix grouped by bond type.
///
/// Bags keep the order in which their labels were first encountered and
/// every bag keeps its values in traversal order of the upper triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bags(IndexMap<BondLabel, Vec<f64>>);

impl Deref for Bags {
    type Target = IndexMap<BondLabel, Vec<f64>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Bags {
    type Item = <IndexMap<BondLabel, Vec<f64>> as IntoIterator>::Item;
    type IntoIter = <IndexMap<BondLabel, Vec<f64>> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Bags {
    /// Group the upper triangle (`j >= i`, row-major) of `matrix` by bond type.
    pub fn from_matrix<S: AsRef<str>>(atoms: &[S], matrix: ArrayView2<'_, f64>) -> BobResult<Self> {
        check_shape(atoms.len(), matrix)?;
        let n = atoms.len();
        let mut bags: IndexMap<BondLabel, Vec<f64>> = IndexMap::new();
        for i in 0..n {
            for j in i..n {
                bags.entry(BondLabel::from_indices(atoms, i, j))
                    .or_default()
                    .push(matrix[(i, j)]);
            }
        }
        Ok(Self(bags))
    }

    /// The largest number of values stored for a single bond type.
    pub fn max_len(&self) -> usize {
        self.0.values().map(Vec::len).max().unwrap_or(0)
    }
}

pub(crate) fn check_shape(atoms: usize, matrix: ArrayView2<'_, f64>) -> BobResult<()> {
    if matrix.nrows() != atoms || matrix.ncols() != atoms {
        return Err(BobError::shape_mismatch(atoms, matrix.shape()));
    }
    Ok(())
}
