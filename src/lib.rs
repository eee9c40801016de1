//! Bag-of-Bonds descriptors for machine learning of molecular properties.
//!
//! The entries of a molecule's pairwise interaction matrix (usually the
//! Coulomb matrix) are grouped by the bond type they describe and laid out
//! in a canonical, zero-padded vector, so that descriptors of different
//! molecules with the same set of elements can be compared component-wise.
//!
//! ```
//! use bag_of_bonds::{BagOfBonds, BobConfig};
//! use ndarray::arr2;
//!
//! let atoms = ["O", "H", "H"];
//! let cm = arr2(&[[50.0, 8.0, 8.0], [8.0, 0.5, 0.3], [8.0, 0.3, 0.5]]);
//! let bob = BagOfBonds::new(BobConfig::new(3, 15)).encode(&atoms, cm.view())?;
//! assert_eq!(bob.to_vec(), [
//!     0.5, 0.5, 0.0, // H
//!     50.0, 0.0, 0.0, // O
//!     0.3, 0.0, 0.0, // HH
//!     8.0, 8.0, 0.0, // HO
//!     0.0, 0.0, 0.0, // OO
//! ]);
//! # Ok::<(), bag_of_bonds::BobError>(())
//! ```
#![warn(clippy::all)]

mod bob;
mod compound;
mod error;
pub use bob::{AsMatrix, BagOfBonds, Bags, BobConfig, BondLabel, BondSchema};
pub use compound::{nuclear_charge, Compound};
pub use error::{BobError, BobResult};

#[cfg(feature = "python")]
mod python;
