use crate::elements::{periodic_table, ISOTOPES};
use crate::error::SpellError;
use crate::symbol::canonical;
use crate::table::SymbolTable;
use crate::traits::Discouraged;
use crate::Speller;

/// Configures a [`Speller`] with a [`Discouraged`] policy.
///
/// Without [`with_table`](Self::with_table) the built-in periodic table is
/// used. Enabling isotopes adds `D` and `T` to the table and to the
/// discouraged set.
#[derive(Clone, Debug)]
pub struct SpellerBuilder {
    table: Option<SymbolTable>,
    isotopes: bool,
    discouraged: Vec<String>,
    penalty: u32,
}

impl Default for SpellerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellerBuilder {
    pub fn new() -> Self {
        Self {
            table: None,
            isotopes: false,
            discouraged: Vec::new(),
            penalty: Discouraged::DEFAULT_PENALTY,
        }
    }
    pub fn with_isotopes(mut self, isotopes: bool) -> Self {
        self.isotopes = isotopes;
        self
    }
    pub fn with_table(mut self, table: SymbolTable) -> Self {
        self.table = Some(table);
        self
    }
    /// Discourage an extra symbol; case does not matter.
    pub fn discourage(mut self, symbol: impl AsRef<str>) -> Self {
        self.discouraged.push(canonical(symbol.as_ref()));
        self
    }
    pub fn with_penalty(mut self, penalty: u32) -> Self {
        self.penalty = penalty;
        self
    }
    /// Fails if a discouraged symbol is missing from the table.
    pub fn build(self) -> Result<Speller<Discouraged>, SpellError> {
        let table = match self.table {
            Some(table) => table,
            None => periodic_table(self.isotopes),
        };

        let mut discouraged = self.discouraged;
        if self.isotopes {
            discouraged.extend(ISOTOPES.iter().map(|&(symbol, _, _)| symbol.to_string()));
        }
        if let Some(missing) = discouraged.iter().find(|s| table.get(s).is_none()) {
            return Err(SpellError::UnknownDiscouraged {
                symbol: missing.clone(),
            });
        }

        let policy = Discouraged::new(discouraged).with_penalty(self.penalty);
        Ok(Speller::with_policy(table, policy))
    }
}
