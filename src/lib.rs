//! Spell text with periodic-table symbols.
//!
//! Given free-form text and a dictionary of short tokens (element symbols by
//! default), find a partition of the text into tokens that reconstructs it
//! exactly, ignoring case. Among all partitions the one with the lowest total
//! cost under a [`CostPolicy`] wins, with fewer tokens breaking ties. When no
//! partition exists, [`diagnose`] reports the furthest position any valid
//! prefix reaches and the suffix that defeated it.
//!
//! ## Core idea
//! 1. Normalize the input to alphabetic characters ([`NormalizedText`]).
//! 2. Treat character positions `0..=N` as vertices and every matching symbol
//!    as a forward edge weighted by the policy.
//! 3. One left-to-right relaxation sweep with a back-pointer per position
//!    yields the optimal partition in `O(N * max_len)` time.
//!
//! ## Quick start
//! ```
//! use element_spell::{diagnose, elements::periodic_table, segment, NormalizedText, ZeroCost};
//!
//! let table = periodic_table(false);
//! let text = NormalizedText::normalize("Geoffrey");
//! let seg = segment(&text, &table, &ZeroCost).unwrap();
//! assert_eq!(seg.texts(), vec!["Ge", "O", "F", "F", "Re", "Y"]);
//!
//! let text = NormalizedText::normalize("Hoq");
//! assert!(segment(&text, &table, &ZeroCost).is_none());
//! let why = diagnose(&text, &table).unwrap();
//! assert_eq!((why.position, why.unmatched.as_str()), (3, "q"));
//! ```
//!
//! ## Layers
//! - [`segment`] and [`diagnose`]: pure functions over a table and policy.
//! - [`Speller`] / [`SpellerBuilder`]: own a table and policy, run the whole
//!   normalize / segment / diagnose pipeline, render output.
//! - [`elements`], [`format`], [`atomic_ids`]: the built-in periodic table,
//!   output rendering, and the reverse id-to-symbol direction.
//!
//! ## Features
//! - `tracing`: spans and events around both DP passes.
//! - `parallel`: [`Speller::spell_batch`] runs on the rayon pool.
//! - `cli` (default): the `to_elements` and `from_elements` binaries.
//! - `probe`: the `scale_probe` binary.

pub mod atomic_ids;
pub mod builder;
pub mod diagnose;
pub mod elements;
pub mod engine;
pub mod error;
pub mod format;
pub mod normalize;
pub mod segmenter;
pub mod symbol;
pub mod table;
pub mod traits;

pub use crate::builder::SpellerBuilder;
pub use crate::diagnose::{diagnose, Diagnosis};
pub use crate::engine::{Speller, Spelling};
pub use crate::error::{AtomicIdError, SpellError, TableError};
pub use crate::format::OutputMode;
pub use crate::normalize::NormalizedText;
pub use crate::segmenter::{segment, PathCost, Segmentation};
pub use crate::symbol::Symbol;
pub use crate::table::SymbolTable;
pub use crate::traits::{CostPolicy, Discouraged, ZeroCost};
