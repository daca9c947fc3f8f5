//! Built-in periodic table.
//!
//! 118 standard elements keyed by atomic number, plus the hydrogen isotopes
//! deuterium (`D`, id `1.2`) and tritium (`T`, id `1.3`). Isotopes are off by
//! default; when enabled they are discouraged by [`isotope_policy`] so a
//! spelling without them wins whenever one exists.

use crate::symbol::Symbol;
use crate::table::SymbolTable;
use crate::traits::Discouraged;

/// Highest standard atomic number.
pub const MAX_ATOMIC_NUMBER: u32 = 118;

/// `(symbol, name)` in atomic-number order; the id is the 1-based index.
pub const STANDARD_ELEMENTS: [(&str, &str); MAX_ATOMIC_NUMBER as usize] = [
    ("H", "Hydrogen"),
    ("He", "Helium"),
    ("Li", "Lithium"),
    ("Be", "Beryllium"),
    ("B", "Boron"),
    ("C", "Carbon"),
    ("N", "Nitrogen"),
    ("O", "Oxygen"),
    ("F", "Fluorine"),
    ("Ne", "Neon"),
    ("Na", "Sodium"),
    ("Mg", "Magnesium"),
    ("Al", "Aluminium"),
    ("Si", "Silicon"),
    ("P", "Phosphorus"),
    ("S", "Sulfur"),
    ("Cl", "Chlorine"),
    ("Ar", "Argon"),
    ("K", "Potassium"),
    ("Ca", "Calcium"),
    ("Sc", "Scandium"),
    ("Ti", "Titanium"),
    ("V", "Vanadium"),
    ("Cr", "Chromium"),
    ("Mn", "Manganese"),
    ("Fe", "Iron"),
    ("Co", "Cobalt"),
    ("Ni", "Nickel"),
    ("Cu", "Copper"),
    ("Zn", "Zinc"),
    ("Ga", "Gallium"),
    ("Ge", "Germanium"),
    ("As", "Arsenic"),
    ("Se", "Selenium"),
    ("Br", "Bromine"),
    ("Kr", "Krypton"),
    ("Rb", "Rubidium"),
    ("Sr", "Strontium"),
    ("Y", "Yttrium"),
    ("Zr", "Zirconium"),
    ("Nb", "Niobium"),
    ("Mo", "Molybdenum"),
    ("Tc", "Technetium"),
    ("Ru", "Ruthenium"),
    ("Rh", "Rhodium"),
    ("Pd", "Palladium"),
    ("Ag", "Silver"),
    ("Cd", "Cadmium"),
    ("In", "Indium"),
    ("Sn", "Tin"),
    ("Sb", "Antimony"),
    ("Te", "Tellurium"),
    ("I", "Iodine"),
    ("Xe", "Xenon"),
    ("Cs", "Cesium"),
    ("Ba", "Barium"),
    ("La", "Lanthanum"),
    ("Ce", "Cerium"),
    ("Pr", "Praseodymium"),
    ("Nd", "Neodymium"),
    ("Pm", "Promethium"),
    ("Sm", "Samarium"),
    ("Eu", "Europium"),
    ("Gd", "Gadolinium"),
    ("Tb", "Terbium"),
    ("Dy", "Dysprosium"),
    ("Ho", "Holmium"),
    ("Er", "Erbium"),
    ("Tm", "Thulium"),
    ("Yb", "Ytterbium"),
    ("Lu", "Lutetium"),
    ("Hf", "Hafnium"),
    ("Ta", "Tantalum"),
    ("W", "Tungsten"),
    ("Re", "Rhenium"),
    ("Os", "Osmium"),
    ("Ir", "Iridium"),
    ("Pt", "Platinum"),
    ("Au", "Gold"),
    ("Hg", "Mercury"),
    ("Tl", "Thallium"),
    ("Pb", "Lead"),
    ("Bi", "Bismuth"),
    ("Po", "Polonium"),
    ("At", "Astatine"),
    ("Rn", "Radon"),
    ("Fr", "Francium"),
    ("Ra", "Radium"),
    ("Ac", "Actinium"),
    ("Th", "Thorium"),
    ("Pa", "Protactinium"),
    ("U", "Uranium"),
    ("Np", "Neptunium"),
    ("Pu", "Plutonium"),
    ("Am", "Americium"),
    ("Cm", "Curium"),
    ("Bk", "Berkelium"),
    ("Cf", "Californium"),
    ("Es", "Einsteinium"),
    ("Fm", "Fermium"),
    ("Md", "Mendelevium"),
    ("No", "Nobelium"),
    ("Lr", "Lawrencium"),
    ("Rf", "Rutherfordium"),
    ("Db", "Dubnium"),
    ("Sg", "Seaborgium"),
    ("Bh", "Bohrium"),
    ("Hs", "Hassium"),
    ("Mt", "Meitnerium"),
    ("Ds", "Darmstadtium"),
    ("Rg", "Roentgenium"),
    ("Cn", "Copernicium"),
    ("Nh", "Nihonium"),
    ("Fl", "Flerovium"),
    ("Mc", "Moscovium"),
    ("Lv", "Livermorium"),
    ("Ts", "Tennessine"),
    ("Og", "Oganesson"),
];

/// `(symbol, name, id)` for the hydrogen isotopes.
pub const ISOTOPES: [(&str, &str, &str); 2] = [
    ("D", "Deuterium", "1.2"),
    ("T", "Tritium", "1.3"),
];

/// Standard elements, followed by the isotopes when `isotopes` is set.
pub fn elements(isotopes: bool) -> Vec<Symbol> {
    let standard = STANDARD_ELEMENTS
        .iter()
        .enumerate()
        .map(|(i, &(symbol, name))| Symbol::new(symbol, name, (i + 1).to_string()));
    let extra = ISOTOPES
        .iter()
        .filter(|_| isotopes)
        .map(|&(symbol, name, id)| Symbol::new(symbol, name, id));
    standard.chain(extra).collect()
}

/// The periodic table as a [`SymbolTable`].
pub fn periodic_table(isotopes: bool) -> SymbolTable {
    SymbolTable::new(elements(isotopes)).expect("built-in periodic table is well-formed")
}

/// Default policy for the periodic table: each isotope use costs 1.
pub fn isotope_policy() -> Discouraged {
    Discouraged::new(ISOTOPES.iter().map(|&(symbol, _, _)| symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CostPolicy;

    #[test]
    fn standard_table_has_118_entries_up_to_two_letters() {
        let table = periodic_table(false);
        assert_eq!(table.len(), 118);
        assert_eq!(table.max_len(), 2);
        assert_eq!(table.by_id("1").map(Symbol::text), Some("H"));
        assert_eq!(table.by_id("118").map(Symbol::text), Some("Og"));
        assert!(table.get("D").is_none());
    }

    #[test]
    fn isotopes_extend_the_table() {
        let table = periodic_table(true);
        assert_eq!(table.len(), 120);
        assert_eq!(table.get("D").map(Symbol::name), Some("Deuterium"));
        assert_eq!(table.by_id("1.3").map(Symbol::text), Some("T"));
    }

    #[test]
    fn isotope_policy_discourages_only_d_and_t() {
        let table = periodic_table(true);
        let policy = isotope_policy();
        let charged: Vec<_> = table
            .symbols()
            .filter(|s| policy.cost(s) > 0)
            .map(Symbol::text)
            .collect();
        assert_eq!(charged, vec!["D", "T"]);
    }
}
