/// Nuclear charge of an element given its symbol, e.g. `nuclear_charge("O") == Some(8)`.
pub fn nuclear_charge(symbol: &str) -> Option<u8> {
    SYMBOLS
        .iter()
        .position(|&s| s == symbol)
        .map(|i| i as u8 + 1)
}

static SYMBOLS: [&str; 118] = [
    "H", "He", // 1-2
    "Li", "Be", "B", "C", "N", "O", "F", "Ne", // 3-10
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", // 11-18
    "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se",
    "Br", "Kr", // 19-36
    "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", "Sb", "Te",
    "I", "Xe", // 37-54
    "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb",
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At",
    "Rn", // 55-86
    "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", "Md", "No",
    "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts",
    "Og", // 87-118
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_nuclear_charge() {
        assert_eq!(nuclear_charge("H"), Some(1));
        assert_eq!(nuclear_charge("C"), Some(6));
        assert_eq!(nuclear_charge("Cl"), Some(17));
        assert_eq!(nuclear_charge("Xe"), Some(54));
        assert_eq!(nuclear_charge("Og"), Some(118));
        assert_eq!(nuclear_charge("X"), None);
        assert_eq!(nuclear_charge("cl"), None);
    }
}
