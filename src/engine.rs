//! End-to-end speller: normalize, segment, and diagnose on failure.
//!
//! [`Speller`] owns a validated [`SymbolTable`] and a [`CostPolicy`] and is
//! immutable once built, so one instance can serve any number of threads.

use crate::diagnose::{diagnose, Diagnosis};
use crate::elements::{isotope_policy, periodic_table};
use crate::error::SpellError;
use crate::format::{render, OutputMode};
use crate::normalize::NormalizedText;
use crate::segmenter::{segment, Segmentation};
use crate::table::SymbolTable;
use crate::traits::{CostPolicy, Discouraged};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of spelling one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Spelling<'t> {
    Found(Segmentation<'t>),
    Unmatched(Diagnosis),
}

impl<'t> Spelling<'t> {
    pub fn is_found(&self) -> bool {
        matches!(self, Spelling::Found(_))
    }

    pub fn segmentation(&self) -> Option<&Segmentation<'t>> {
        match self {
            Spelling::Found(seg) => Some(seg),
            Spelling::Unmatched(_) => None,
        }
    }

    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        match self {
            Spelling::Found(_) => None,
            Spelling::Unmatched(d) => Some(d),
        }
    }

    /// User-facing text: the rendered spelling or the diagnosis sentence.
    pub fn render(&self, mode: OutputMode) -> String {
        match self {
            Spelling::Found(seg) => render(seg, mode),
            Spelling::Unmatched(d) => d.to_string(),
        }
    }
}

/// Speller for a fixed table and cost policy.
///
/// ```
/// use element_spell::Speller;
///
/// let speller = Speller::elements(true);
/// let spelling = speller.spell("Dsra").unwrap();
/// let seg = spelling.segmentation().unwrap();
/// assert_eq!(seg.texts(), vec!["Ds", "Ra"]);
/// assert_eq!(seg.cost(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Speller<C = Discouraged> {
    table: SymbolTable,
    policy: C,
}

impl Speller<Discouraged> {
    /// The periodic table, with isotopes discouraged when enabled.
    pub fn elements(isotopes: bool) -> Self {
        let policy = if isotopes {
            isotope_policy()
        } else {
            Discouraged::default()
        };
        Self::with_policy(periodic_table(isotopes), policy)
    }
}

impl<C: CostPolicy> Speller<C> {
    pub fn with_policy(table: SymbolTable, policy: C) -> Self {
        Self { table, policy }
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn policy(&self) -> &C {
        &self.policy
    }

    pub fn into_parts(self) -> (SymbolTable, C) {
        (self.table, self.policy)
    }

    /// Normalize `raw` and spell it.
    pub fn spell(&self, raw: &str) -> Result<Spelling<'_>, SpellError> {
        self.spell_normalized(&NormalizedText::normalize(raw))
    }

    /// Spell text that is already normalized.
    ///
    /// `Err` only on an internal inconsistency between the two passes; a
    /// text that cannot be spelled is `Ok(Spelling::Unmatched(_))`.
    pub fn spell_normalized(&self, text: &NormalizedText) -> Result<Spelling<'_>, SpellError> {
        match segment(text, &self.table, &self.policy) {
            Some(seg) => Ok(Spelling::Found(seg)),
            None => diagnose(text, &self.table).map(Spelling::Unmatched),
        }
    }

    /// Spell `raw` and render the outcome as user-facing text.
    pub fn convert(&self, raw: &str, mode: OutputMode) -> Result<String, SpellError> {
        self.spell(raw).map(|s| s.render(mode))
    }
}

#[cfg(not(feature = "parallel"))]
impl<C: CostPolicy> Speller<C> {
    /// Spell every input, in order.
    pub fn spell_batch<S>(&self, inputs: &[S]) -> Vec<Result<Spelling<'_>, SpellError>>
    where
        S: AsRef<str>,
    {
        inputs.iter().map(|raw| self.spell(raw.as_ref())).collect()
    }
}

#[cfg(feature = "parallel")]
impl<C: CostPolicy + Sync> Speller<C> {
    /// Spell every input on the rayon pool; output order matches input order.
    pub fn spell_batch<S>(&self, inputs: &[S]) -> Vec<Result<Spelling<'_>, SpellError>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "tracing")]
        tracing::debug!(inputs = inputs.len(), "spelling batch in parallel");
        inputs.par_iter().map(|raw| self.spell(raw.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;
    use crate::traits::ZeroCost;

    #[test]
    fn spells_and_diagnoses() {
        let speller = Speller::elements(false);
        assert!(speller.spell("Geoffrey").unwrap().is_found());

        let miss = speller.spell("Hoq").unwrap();
        let d = miss.diagnosis().unwrap();
        assert_eq!(d.position, 3);
        assert_eq!(d.unmatched, "q");
    }

    #[test]
    fn convert_renders_ids_by_default_and_full_on_request() {
        let speller = Speller::elements(true);
        assert_eq!(speller.convert("HDT", OutputMode::Ids).unwrap(), "1 1.2 1.3");
        assert_eq!(
            speller.convert("HDT", OutputMode::Full).unwrap(),
            "H D T\nHydrogen Deuterium Tritium\n1 1.2 1.3"
        );
    }

    #[test]
    fn convert_reports_failure_as_text() {
        let speller = Speller::elements(false);
        assert_eq!(
            speller.convert("qqqq", OutputMode::Ids).unwrap(),
            "Conversion not possible. Letters starting at position 1 (\"qqqq\") \
             cannot be matched with element symbols."
        );
    }

    #[test]
    fn batch_preserves_order() {
        let speller = Speller::elements(false);
        let out = speller.spell_batch(&["co", "qq", ""]);
        assert_eq!(out.len(), 3);
        assert!(out[0].as_ref().unwrap().is_found());
        assert!(!out[1].as_ref().unwrap().is_found());
        assert!(out[2].as_ref().unwrap().segmentation().unwrap().is_empty());
    }

    #[test]
    fn custom_table_and_policy() {
        let table = SymbolTable::new([Symbol::new("Ab", "ab", "1"), Symbol::new("A", "a", "2")])
            .unwrap();
        let speller = Speller::with_policy(table, ZeroCost);
        let spelling = speller.spell("a-a-ab").unwrap();
        assert_eq!(spelling.segmentation().unwrap().texts(), vec!["A", "A", "Ab"]);
    }
}
