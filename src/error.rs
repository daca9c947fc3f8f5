//! Error types.
//!
//! A segmentation that does not exist is *not* an error: [`crate::segment`]
//! returns `None` and [`crate::diagnose`] explains why. The types here cover
//! configuration defects (malformed tables, unknown discouraged symbols),
//! malformed atomic-ID input, and disagreement between the two DP passes.

/// A symbol table was rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("symbol table has no entries")]
    Empty,

    #[error("entry #{index} has an empty symbol")]
    EmptySymbol { index: usize },

    #[error("symbol \"{symbol}\" has {len} characters, at most {max} are supported")]
    TooLong {
        symbol: String,
        len: usize,
        max: usize,
    },

    #[error("symbol \"{symbol}\" contains non-alphabetic characters")]
    NonAlphabetic { symbol: String },

    #[error("symbol \"{symbol}\" is not in canonical form (expected \"{canonical}\")")]
    NotCanonical { symbol: String, canonical: String },

    #[error("symbol \"{symbol}\" appears more than once")]
    DuplicateSymbol { symbol: String },

    #[error("identifier \"{id}\" appears more than once")]
    DuplicateId { id: String },
}

/// Failures raised while configuring or running a speller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpellError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("discouraged symbol \"{symbol}\" is not in the symbol table")]
    UnknownDiscouraged { symbol: String },

    /// The reachability pass found a full partition the segmenter missed.
    #[error(
        "internal inconsistency: text of length {len} is fully reachable \
         but no segmentation was found"
    )]
    InternalInconsistency { len: usize },
}

/// Malformed input to [`crate::atomic_ids::parse_atomic_ids`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AtomicIdError {
    #[error("No atomic IDs provided.")]
    NoIds,

    #[error("Token #{index} value {value} is out of range (1..{max}).")]
    OutOfRange {
        index: usize,
        value: String,
        max: u32,
    },

    #[error(
        "Token #{index} \"{raw}\" is not a valid atomic ID. Use 1..{max}{}.",
        isotope_hint(.isotopes_enabled)
    )]
    InvalidToken {
        index: usize,
        raw: String,
        max: u32,
        isotopes_enabled: bool,
    },
}

fn isotope_hint(isotopes_enabled: &bool) -> &'static str {
    if *isotopes_enabled {
        ""
    } else {
        " (enable --isotopes / -i for \"1.2\" / \"1.3\")"
    }
}
