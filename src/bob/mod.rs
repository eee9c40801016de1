use crate::error::{BobError, BobResult};
use ndarray::{s, Array1, ArrayView2};
use rayon::prelude::*;
use tracing::debug;

mod bags;
mod config;
mod label;
mod schema;
pub use bags::Bags;
pub use config::BobConfig;
pub use label::BondLabel;
pub use schema::BondSchema;

/// The Bag-of-Bonds encoder.
///
/// Converts the interaction matrix of a molecule into a zero-padded vector
/// in which every bond type of the [BondSchema] owns a block of
/// `block_width` consecutive slots. Encoding is a pure function of its
/// inputs, so a single encoder can be shared between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct BagOfBonds {
    pub config: BobConfig,
}

impl BagOfBonds {
    pub fn new(config: BobConfig) -> Self {
        Self { config }
    }

    /// Encode a single molecule given its atoms and the aligned interaction matrix.
    pub fn encode<S: AsRef<str>>(
        &self,
        atoms: &[S],
        matrix: ArrayView2<'_, f64>,
    ) -> BobResult<Array1<f64>> {
        let bags = Bags::from_matrix(atoms, matrix)?;
        let schema = BondSchema::from_atoms(atoms);
        debug!(
            atoms = atoms.len(),
            bags = bags.len(),
            schema = schema.len(),
            "encoding molecule"
        );
        let config = self.config.widened(atoms.len(), &bags, &schema);
        Self::assemble(&bags, &schema, config)
    }

    /// Encode many molecules in parallel.
    ///
    /// Every molecule gets its own result, so a malformed molecule does not
    /// affect the rest of the batch.
    pub fn encode_batch<S, M>(&self, molecules: &[(Vec<S>, M)]) -> Vec<BobResult<Array1<f64>>>
    where
        S: AsRef<str> + Sync,
        M: AsMatrix + Sync,
    {
        molecules
            .par_iter()
            .map(|(atoms, matrix)| self.encode(atoms, matrix.as_matrix()))
            .collect()
    }

    /// Lay the bags out in schema order.
    ///
    /// The values of the bond type at schema position `i` are written to the
    /// slots starting at `i * block_width`. Blocks of bond types that do not
    /// occur in the molecule stay zero. The configuration has to be large
    /// enough, see [BobConfig::widened].
    pub fn assemble(
        bags: &Bags,
        schema: &BondSchema,
        config: BobConfig,
    ) -> BobResult<Array1<f64>> {
        if let Some(label) = bags.keys().find(|l| schema.position(l).is_none()) {
            return Err(BobError::SchemaViolation(label.to_string()));
        }
        let mut bob = Array1::zeros(config.vector_length);
        for (i, label) in schema.iter().enumerate() {
            let Some(values) = bags.get(label) else {
                continue;
            };
            let start = i * config.block_width;
            if values.len() > config.block_width || start + values.len() > config.vector_length {
                return Err(BobError::MalformedInput(format!(
                    "{} values of bond type '{label}' do not fit into block {i} of {config:?}",
                    values.len()
                )));
            }
            bob.slice_mut(s![start..start + values.len()])
                .iter_mut()
                .zip(values)
                .for_each(|(b, &v)| *b = v);
        }
        Ok(bob)
    }
}

/// Anything that can be viewed as a two-dimensional interaction matrix.
pub trait AsMatrix {
    fn as_matrix(&self) -> ArrayView2<'_, f64>;
}

impl AsMatrix for ndarray::Array2<f64> {
    fn as_matrix(&self) -> ArrayView2<'_, f64> {
        self.view()
    }
}

impl<'a> AsMatrix for ArrayView2<'a, f64> {
    fn as_matrix(&self) -> ArrayView2<'_, f64> {
        self.view()
    }
}
