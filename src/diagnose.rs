//! Failure analysis for texts the table cannot spell.
//!
//! Reachability uses the same transition rule as the segmenter but ignores
//! cost. The furthest reachable position is where every valid prefix
//! partition runs out; everything from there on is reported as unmatched.

use crate::error::SpellError;
use crate::normalize::NormalizedText;
use crate::table::SymbolTable;

/// Where matching broke down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnosis {
    /// 1-based position of the first character no prefix partition covers.
    pub position: usize,
    /// Normalized text from that position to the end.
    pub unmatched: String,
}

/// Boolean reachability over positions `0..=N`.
pub fn reachable_positions(text: &NormalizedText, table: &SymbolTable) -> Vec<bool> {
    let n = text.len();
    let mut reachable = vec![false; n + 1];
    reachable[0] = true;
    let mut scanner = table.scanner(text);
    for i in 0..n {
        if !reachable[i] {
            continue;
        }
        for (end, _) in scanner.matches_at(i) {
            reachable[end] = true;
        }
    }
    reachable
}

/// Explain why `text` has no segmentation.
///
/// Only meaningful after [`crate::segment`] returned `None`. If the whole
/// text turns out to be reachable the two passes disagree, which is reported
/// as [`SpellError::InternalInconsistency`] rather than as a diagnosis.
pub fn diagnose(text: &NormalizedText, table: &SymbolTable) -> Result<Diagnosis, SpellError> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("diagnose", len = text.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let n = text.len();
    let reachable = reachable_positions(text, table);
    // reachable[0] is always set, so rposition always finds something.
    let furthest = reachable.iter().rposition(|&r| r).unwrap_or(0);

    if furthest == n {
        #[cfg(feature = "tracing")]
        tracing::error!(len = n, "reachability pass covers text the segmenter rejected");
        return Err(SpellError::InternalInconsistency { len: n });
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(furthest, len = n, "diagnosed unmatched suffix");

    Ok(Diagnosis {
        position: furthest + 1,
        unmatched: text.suffix(furthest).to_string(),
    })
}
