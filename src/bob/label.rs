use serde::{Deserialize, Serialize};
use std::fmt;

/// The bond type of a single entry of the interaction matrix.
///
/// Diagonal entries are labeled by the atom itself, off-diagonal entries by
/// the lexicographically sorted pair of atoms, so that `(a, b)` and `(b, a)`
/// share a label.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondLabel {
    Atom(String),
    Pair(String, String),
}

impl BondLabel {
    pub fn atom<S: Into<String>>(symbol: S) -> Self {
        Self::Atom(symbol.into())
    }

    pub fn pair<S: Into<String>>(a: S, b: S) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self::Pair(a, b)
        } else {
            Self::Pair(b, a)
        }
    }

    /// Label of the matrix entry `(i, j)` for the given atom list.
    pub fn from_indices<S: AsRef<str>>(atoms: &[S], i: usize, j: usize) -> Self {
        if i == j {
            Self::atom(atoms[i].as_ref())
        } else {
            Self::pair(atoms[i].as_ref(), atoms[j].as_ref())
        }
    }
}

impl fmt::Display for BondLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(a) => write!(f, "{a}"),
            Self::Pair(a, b) => write!(f, "{a}{b}"),
        }
    }
}
