use crate::bob::{BagOfBonds, BobConfig};
use crate::error::{BobError, BobResult};
use nalgebra::DMatrix;
use ndarray::{s, Array1, Array2, Axis};
use std::fs;
use std::path::Path;
use tracing::warn;

mod element;
pub use element::nuclear_charge;

/// A molecule given by its atoms and their Cartesian coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Compound {
    pub name: Option<String>,
    pub atoms: Vec<String>,
    pub nuclear_charges: Array1<f64>,
    pub coordinates: Array2<f64>,
}

impl Compound {
    pub fn new(atoms: Vec<String>, coordinates: Array2<f64>) -> BobResult<Self> {
        if coordinates.shape() != [atoms.len(), 3] {
            return Err(BobError::MalformedInput(format!(
                "{} atoms but coordinates have shape {:?}",
                atoms.len(),
                coordinates.shape()
            )));
        }
        let nuclear_charges = atoms
            .iter()
            .map(|a| {
                nuclear_charge(a)
                    .map(f64::from)
                    .ok_or_else(|| BobError::UnknownElement(a.clone()))
            })
            .collect::<BobResult<_>>()?;
        Ok(Self {
            name: None,
            atoms,
            nuclear_charges,
            coordinates,
        })
    }

    pub fn from_xyz<P: AsRef<Path>>(file: P) -> BobResult<Self> {
        let file = file.as_ref();
        let mut compound = Self::from_xyz_str(&fs::read_to_string(file)?)?;
        compound.name = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned());
        Ok(compound)
    }

    /// Parse a molecule in XYZ format: the number of atoms, a comment line,
    /// and one `symbol x y z` line per atom. Lines after the last atom are ignored.
    pub fn from_xyz_str(xyz: &str) -> BobResult<Self> {
        let mut lines = xyz.lines();
        let n: usize = lines
            .next()
            .and_then(|l| l.trim().parse().ok())
            .ok_or_else(|| BobError::xyz(1, "expected the number of atoms"))?;
        lines.next().ok_or_else(|| BobError::xyz(2, "missing comment line"))?;

        let mut atoms = Vec::with_capacity(n);
        let mut coordinates = Array2::zeros((n, 3));
        for i in 0..n {
            let line = i + 3;
            let mut fields = lines
                .next()
                .ok_or_else(|| BobError::xyz(line, format!("expected {n} atoms, found {i}")))?
                .split_whitespace();
            let symbol = fields
                .next()
                .ok_or_else(|| BobError::xyz(line, "missing element symbol"))?;
            for k in 0..3 {
                coordinates[(i, k)] = fields
                    .next()
                    .and_then(parse_coordinate)
                    .ok_or_else(|| BobError::xyz(line, "expected three coordinates"))?;
            }
            atoms.push(symbol.to_string());
        }
        Self::new(atoms, coordinates)
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// The Coulomb matrix with `0.5 Z_i^2.4` on the diagonal and
    /// `Z_i Z_j / |r_i - r_j|` elsewhere.
    pub fn coulomb_matrix(&self) -> Array2<f64> {
        let n = self.len();
        let z = &self.nuclear_charges;
        Array2::from_shape_fn((n, n), |(i, j)| {
            if i == j {
                0.5 * z[i].powf(2.4)
            } else {
                let r = &self.coordinates.index_axis(Axis(0), i)
                    - &self.coordinates.index_axis(Axis(0), j);
                z[i] * z[j] / r.dot(&r).sqrt()
            }
        })
    }

    /// The Coulomb matrix zero-padded to `size` x `size`.
    ///
    /// A `size` smaller than the number of atoms is widened to the number of atoms.
    pub fn padded_coulomb_matrix(&self, size: usize) -> Array2<f64> {
        let n = self.len();
        let size = self.padded_size(size);
        let mut cm = Array2::zeros((size, size));
        cm.slice_mut(s![..n, ..n]).assign(&self.coulomb_matrix());
        cm
    }

    /// The eigenvalues of the Coulomb matrix in descending order, zero-padded to `size`.
    pub fn coulomb_eigenvalues(&self, size: usize) -> Array1<f64> {
        let n = self.len();
        if n == 0 {
            return Array1::zeros(size);
        }
        let cm = self.coulomb_matrix();
        let mut eig: Vec<f64> = DMatrix::from_fn(n, n, |i, j| cm[(i, j)])
            .symmetric_eigenvalues()
            .iter()
            .copied()
            .collect();
        eig.sort_by(|a, b| b.total_cmp(a));
        eig.resize(self.padded_size(size), 0.0);
        Array1::from_vec(eig)
    }

    fn padded_size(&self, size: usize) -> usize {
        let n = self.len();
        if size < n {
            warn!(
                n,
                size,
                "number of atoms exceeds matrix size, using the number of atoms"
            );
            return n;
        }
        size
    }

    /// The Bag-of-Bonds descriptor of the Coulomb matrix of this compound.
    pub fn bob(&self, config: BobConfig) -> BobResult<Array1<f64>> {
        BagOfBonds::new(config).encode(&self.atoms, self.coulomb_matrix().view())
    }
}

// some xyz files (e.g. QM9) write exponents in Fortran notation
fn parse_coordinate(x: &str) -> Option<f64> {
    x.replace("*^", "e").parse().ok()
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    const WATER: &str = "3
water
O   0.000000   0.000000   0.117300
H   0.000000   0.757200  -0.469200
H   0.000000  -0.757200  -0.469200
";

    #[test]
    fn test_from_xyz_str() -> BobResult<()> {
        let water = Compound::from_xyz_str(WATER)?;
        assert_eq!(water.atoms, ["O", "H", "H"]);
        assert_eq!(water.nuclear_charges.to_vec(), [8.0, 1.0, 1.0]);
        assert_relative_eq!(water.coordinates[(1, 2)], -0.4692);
        Ok(())
    }

    #[test]
    fn test_fortran_exponent() {
        let xyz = "1\n\nC 1.0*^-3 -2.5 0.0\n";
        let c = Compound::from_xyz_str(xyz).unwrap();
        assert_relative_eq!(c.coordinates[(0, 0)], 1e-3);
    }

    #[test]
    fn test_invalid_xyz() {
        assert!(matches!(
            Compound::from_xyz_str("two\n\n"),
            Err(BobError::Xyz { line: 1, .. })
        ));
        assert!(matches!(
            Compound::from_xyz_str("2\n\nH 0 0 0\n"),
            Err(BobError::Xyz { line: 4, .. })
        ));
        assert!(matches!(
            Compound::from_xyz_str("1\n\nH 0 zero 0\n"),
            Err(BobError::Xyz { line: 3, .. })
        ));
        assert!(matches!(
            Compound::from_xyz_str("1\n\nQ 0 0 0\n"),
            Err(BobError::UnknownElement(s)) if s == "Q"
        ));
    }

    #[test]
    fn test_coulomb_matrix() -> BobResult<()> {
        let water = Compound::from_xyz_str(WATER)?;
        let cm = water.coulomb_matrix();
        let d_oh = (0.7572f64.powi(2) + 0.5865f64.powi(2)).sqrt();
        assert_relative_eq!(cm[(0, 0)], 0.5 * 8f64.powf(2.4), max_relative = 1e-12);
        assert_relative_eq!(cm[(1, 1)], 0.5);
        assert_relative_eq!(cm[(0, 1)], 8.0 / d_oh, max_relative = 1e-12);
        assert_relative_eq!(cm[(1, 2)], 1.0 / 1.5144, max_relative = 1e-12);
        assert_eq!(cm, cm.t());
        Ok(())
    }

    #[test]
    fn test_padded_coulomb_matrix() -> BobResult<()> {
        let water = Compound::from_xyz_str(WATER)?;
        let cm = water.padded_coulomb_matrix(5);
        assert_eq!(cm.dim(), (5, 5));
        assert_eq!(cm.slice(s![..3, ..3]), water.coulomb_matrix());
        assert!(cm.slice(s![3.., ..]).iter().all(|&v| v == 0.0));
        assert!(cm.slice(s![.., 3..]).iter().all(|&v| v == 0.0));
        assert_eq!(water.padded_coulomb_matrix(2), water.coulomb_matrix());
        Ok(())
    }

    #[test]
    fn test_coulomb_eigenvalues() -> BobResult<()> {
        // two hydrogens 1 Å apart: [[0.5, 1], [1, 0.5]] has eigenvalues 1.5 and -0.5
        let h2 = Compound::from_xyz_str("2\n\nH 0 0 0\nH 0 0 1\n")?;
        let eig = h2.coulomb_eigenvalues(4);
        assert_eq!(eig.len(), 4);
        assert_relative_eq!(eig[0], 1.5, max_relative = 1e-12);
        assert_relative_eq!(eig[1], -0.5, max_relative = 1e-12);
        assert_eq!(eig.slice(s![2..]).to_vec(), [0.0, 0.0]);

        let water = Compound::from_xyz_str(WATER)?;
        let eig = water.coulomb_eigenvalues(1);
        assert_eq!(eig.len(), 3);
        assert!(eig.windows(2).into_iter().all(|w| w[0] >= w[1]));
        assert_relative_eq!(eig.sum(), water.coulomb_matrix().diag().sum(), max_relative = 1e-10);
        Ok(())
    }

    #[test]
    fn test_from_xyz() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("0004.xyz");
        write!(std::fs::File::create(&path)?, "{WATER}")?;
        let water = Compound::from_xyz(&path)?;
        assert_eq!(water.name.as_deref(), Some("0004"));
        assert_eq!(water.len(), 3);
        Ok(())
    }

    #[test]
    fn test_bob() -> BobResult<()> {
        let water = Compound::from_xyz_str(WATER)?;
        let bob = water.bob(BobConfig::new(3, 15))?;
        let cm = water.coulomb_matrix();
        assert_eq!(bob[0], cm[(1, 1)]);
        assert_eq!(bob[1], cm[(2, 2)]);
        assert_eq!(bob[3], cm[(0, 0)]);
        assert_eq!(bob[6], cm[(1, 2)]);
        assert_eq!(bob[9], cm[(0, 1)]);
        assert_eq!(bob[10], cm[(0, 2)]);
        Ok(())
    }
}
