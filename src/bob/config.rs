use super::{Bags, BondSchema};
use crate::error::BobResult;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::warn;

/// Size of the Bag-of-Bonds descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BobConfig {
    /// Number of slots reserved for every bond type.
    pub block_width: usize,
    /// Total length of the descriptor.
    pub vector_length: usize,
}

impl Default for BobConfig {
    fn default() -> Self {
        Self {
            block_width: 25,
            vector_length: 325,
        }
    }
}

impl BobConfig {
    pub fn new(block_width: usize, vector_length: usize) -> Self {
        Self {
            block_width,
            vector_length,
        }
    }

    pub fn block_width(mut self, block_width: usize) -> Self {
        self.block_width = block_width;
        self
    }

    pub fn vector_length(mut self, vector_length: usize) -> Self {
        self.vector_length = vector_length;
        self
    }

    pub fn from_json<P: AsRef<Path>>(file: P) -> BobResult<Self> {
        Ok(serde_json::from_reader(BufReader::new(File::open(file)?))?)
    }

    pub fn to_json<P: AsRef<Path>>(&self, file: P) -> BobResult<()> {
        Ok(serde_json::to_writer_pretty(
            BufWriter::new(File::create(file)?),
            self,
        )?)
    }

    /// The configuration that is actually large enough for the given molecule.
    ///
    /// Undersized bounds are grown and reported with a warning, never truncated:
    /// the block width covers at least the number of atoms and the largest bag,
    /// the vector covers at least every upper-triangle entry and every block
    /// of the schema.
    pub fn widened(&self, n_atoms: usize, bags: &Bags, schema: &BondSchema) -> Self {
        let mut block_width = self.block_width;
        if block_width < n_atoms {
            warn!(
                n_atoms,
                block_width,
                "number of atoms exceeds block width, using the number of atoms"
            );
            block_width = n_atoms;
        }
        let max_bag = bags.max_len();
        if block_width < max_bag {
            warn!(
                max_bag,
                block_width,
                "largest bag exceeds block width, using the size of the largest bag"
            );
            block_width = max_bag;
        }

        let mut vector_length = self.vector_length;
        let n_pairs = n_atoms * (n_atoms + 1) / 2;
        if vector_length < n_pairs {
            warn!(
                n_pairs,
                vector_length,
                "number of pairs exceeds vector length, using the number of pairs"
            );
            vector_length = n_pairs;
        }
        let layout = schema.len() * block_width;
        if vector_length < layout {
            warn!(
                layout,
                vector_length,
                "bond schema does not fit into vector length, using the schema size"
            );
            vector_length = layout;
        }

        Self {
            block_width,
            vector_length,
        }
    }
}
