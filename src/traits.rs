//! Cost policies.
//!
//! The segmenter is policy-agnostic: it asks a [`CostPolicy`] what each
//! symbol costs and minimises the sum. Which symbols are discouraged, and by
//! how much, is configuration.
//!
//! Any `Fn(&Symbol) -> u32` is a policy, so one-off rules need no new type:
//!
//! ```
//! use element_spell::{segment, NormalizedText, Symbol, SymbolTable};
//!
//! let table = SymbolTable::new([
//!     Symbol::new("C", "Carbon", "6"),
//!     Symbol::new("O", "Oxygen", "8"),
//!     Symbol::new("Co", "Cobalt", "27"),
//! ])
//! .unwrap();
//! let text = NormalizedText::normalize("co");
//!
//! // Penalise two-letter symbols.
//! let policy = |s: &Symbol| -> u32 { if s.char_len() == 2 { 5 } else { 0 } };
//! let seg = segment(&text, &table, &policy).unwrap();
//! assert_eq!(seg.texts(), vec!["C", "O"]);
//! ```

use std::collections::HashSet;

use crate::symbol::Symbol;

/// Per-call mapping from symbol to non-negative cost.
pub trait CostPolicy {
    /// Cost charged each time `symbol` is used.
    fn cost(&self, symbol: &Symbol) -> u32;
}

impl<F> CostPolicy for F
where
    F: Fn(&Symbol) -> u32,
{
    #[inline]
    fn cost(&self, symbol: &Symbol) -> u32 {
        self(symbol)
    }
}

/// Every symbol costs zero; the segmenter then only minimises token count.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroCost;

impl CostPolicy for ZeroCost {
    #[inline]
    fn cost(&self, _symbol: &Symbol) -> u32 {
        0
    }
}

/// Flat penalty for a set of discouraged symbols, zero for the rest.
#[derive(Clone, Debug)]
pub struct Discouraged {
    symbols: HashSet<String>,
    penalty: u32,
}

impl Discouraged {
    pub const DEFAULT_PENALTY: u32 = 1;

    /// Discourage `symbols` (canonical text) with [`Self::DEFAULT_PENALTY`].
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            penalty: Self::DEFAULT_PENALTY,
        }
    }

    pub fn with_penalty(mut self, penalty: u32) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn penalty(&self) -> u32 {
        self.penalty
    }

    pub fn contains(&self, text: &str) -> bool {
        self.symbols.contains(text)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

impl Default for Discouraged {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

impl CostPolicy for Discouraged {
    #[inline]
    fn cost(&self, symbol: &Symbol) -> u32 {
        if self.symbols.contains(symbol.text()) {
            self.penalty
        } else {
            0
        }
    }
}
