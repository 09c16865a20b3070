/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Element symbols and atomic numbers

/// Element symbols indexed by atomic number minus one
pub const ELEMENT_SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", // 1-10
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", // 11-20
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", // 21-30
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", // 31-40
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", // 41-50
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", // 51-60
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", // 61-70
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", // 71-80
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", // 81-90
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", // 91-100
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", // 101-110
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og", // 111-118
];

/// Provides element symbols for atomic numbers
pub fn element_symbol(atomic_number: i32) -> Option<&'static str> {
    if !(1..=118).contains(&atomic_number) {
        return None;
    }
    ELEMENT_SYMBOLS.get((atomic_number - 1) as usize).copied()
}

/// Provides the atomic number for a case-sensitive element symbol
pub fn atomic_number(symbol: &str) -> Option<i32> {
    ELEMENT_SYMBOLS
        .iter()
        .position(|&s| s == symbol)
        .map(|index| index as i32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_symbol() {
        assert_eq!(element_symbol(1), Some("H"));
        assert_eq!(element_symbol(29), Some("Cu"));
        assert_eq!(element_symbol(102), Some("No"));
        assert_eq!(element_symbol(118), Some("Og"));
        assert_eq!(element_symbol(0), None);
        assert_eq!(element_symbol(119), None);
        assert_eq!(element_symbol(-3), None);
    }

    #[test]
    fn test_atomic_number_round_trip() {
        for z in 1..=118 {
            let symbol = element_symbol(z).unwrap();
            assert_eq!(atomic_number(symbol), Some(z));
        }
        assert_eq!(atomic_number("cu"), None);
        assert_eq!(atomic_number("Xx"), None);
    }
}
