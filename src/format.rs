//! Rendering of spellings and diagnoses for people.

use std::fmt;

use crate::diagnose::Diagnosis;
use crate::segmenter::Segmentation;
use crate::symbol::Symbol;

/// How a successful spelling is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Space-separated identifiers (atomic numbers).
    #[default]
    Ids,
    /// Symbols, names and identifiers on three lines.
    Full,
}

pub fn render_symbols(seg: &Segmentation<'_>) -> String {
    join(seg, |s| s.text())
}

pub fn render_names(seg: &Segmentation<'_>) -> String {
    join(seg, |s| s.name())
}

pub fn render_ids(seg: &Segmentation<'_>) -> String {
    join(seg, |s| s.id())
}

pub fn render(seg: &Segmentation<'_>, mode: OutputMode) -> String {
    match mode {
        OutputMode::Ids => render_ids(seg),
        OutputMode::Full => format!(
            "{}\n{}\n{}",
            render_symbols(seg),
            render_names(seg),
            render_ids(seg)
        ),
    }
}

fn join<'t, F>(seg: &Segmentation<'t>, field: F) -> String
where
    F: Fn(&'t Symbol) -> &'t str,
{
    seg.symbols()
        .iter()
        .map(|&s| field(s))
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Conversion not possible. Letters starting at position {} (\"{}\") \
             cannot be matched with element symbols.",
            self.position, self.unmatched
        )
    }
}
