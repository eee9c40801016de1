use super::BondLabel;
use itertools::Itertools;
use std::slice::Iter;

/// The canonical order of all bond types reachable from an alphabet of atoms.
///
/// The schema contains every atom of the alphabet in ascending order,
/// followed by every unordered pair of atoms (including self-pairs) in
/// ascending order of `(first, second)`. It depends only on which atoms
/// occur, never on their positions, so molecules with the same alphabet
/// share the slot order of their descriptors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BondSchema {
    alphabet: Vec<String>,
    labels: Vec<BondLabel>,
}

impl BondSchema {
    pub fn from_atoms<S: AsRef<str>>(atoms: &[S]) -> Self {
        let alphabet: Vec<String> = atoms
            .iter()
            .map(|a| a.as_ref())
            .sorted()
            .dedup()
            .map(String::from)
            .collect();
        let atoms = alphabet.iter().map(|a| BondLabel::atom(a.as_str()));
        let pairs = alphabet
            .iter()
            .combinations_with_replacement(2)
            .map(|p| BondLabel::pair(p[0].as_str(), p[1].as_str()));
        let labels = atoms.chain(pairs).collect();
        Self { alphabet, labels }
    }

    pub fn alphabet(&self) -> &[String] {
        &self.alphabet
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, BondLabel> {
        self.labels.iter()
    }

    pub fn position(&self, label: &BondLabel) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

impl<'a> IntoIterator for &'a BondSchema {
    type Item = &'a BondLabel;
    type IntoIter = Iter<'a, BondLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn labels(schema: &BondSchema) -> Vec<String> {
        schema.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_water() {
        let schema = BondSchema::from_atoms(&["O", "H", "H"]);
        assert_eq!(schema.alphabet(), ["H", "O"]);
        assert_eq!(labels(&schema), ["H", "O", "HH", "HO", "OO"]);
    }

    #[test]
    fn test_length() {
        let schema = BondSchema::from_atoms(&["S", "C", "H", "N", "O", "C", "H"]);
        let k = 5;
        assert_eq!(schema.len(), k + k * (k + 1) / 2);
        assert_eq!(schema.position(&BondLabel::pair("H", "C")), Some(6));
        assert_eq!(schema.position(&BondLabel::atom("Cl")), None);
    }

    #[test]
    fn test_independent_of_order() {
        let a = BondSchema::from_atoms(&["C", "H", "H", "O"]);
        let b = BondSchema::from_atoms(&["O", "H", "C", "C", "C"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_atom() {
        let schema = BondSchema::from_atoms(&["Ne"]);
        assert_eq!(labels(&schema), ["Ne", "NeNe"]);
    }
}
