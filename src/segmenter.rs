//! Minimum-cost segmentation as a shortest path over text positions.
//!
//! Positions `0..=N` are the vertices; a symbol matching characters
//! `[i, end)` is an edge `i -> end` weighted by the cost policy. Every edge
//! points forward, so a single left-to-right sweep settles each position
//! before it is expanded.
//!
//! Paths are ranked by [`PathCost`]: total policy cost first, then token
//! count. Exact ties keep the first transition discovered under the sweep
//! order (positions ascending, then symbol length ascending). That makes the
//! answer deterministic but not canonical in any deeper sense.
//!
//! Only one back-pointer per position is kept; the winning sequence is
//! rebuilt once by walking back from `N`.

use crate::normalize::NormalizedText;
use crate::symbol::Symbol;
use crate::table::SymbolTable;
use crate::traits::CostPolicy;

/// Rank of a partial path: cost, then number of tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathCost {
    pub cost: u64,
    pub count: usize,
}

impl PathCost {
    pub const ZERO: Self = Self { cost: 0, count: 0 };

    #[inline]
    fn extend(self, step: u32) -> Self {
        Self {
            cost: self.cost.saturating_add(u64::from(step)),
            count: self.count + 1,
        }
    }
}

/// A full partition of the text into table symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segmentation<'t> {
    symbols: Vec<&'t Symbol>,
    score: PathCost,
}

impl<'t> Segmentation<'t> {
    pub fn symbols(&self) -> &[&'t Symbol] {
        &self.symbols
    }

    /// Total policy cost of the chosen symbols.
    pub fn cost(&self) -> u64 {
        self.score.cost
    }

    pub fn score(&self) -> PathCost {
        self.score
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol texts in order, e.g. `["Ge", "O", "F", ...]`.
    pub fn texts(&self) -> Vec<&'t str> {
        self.symbols.iter().map(|s| s.text()).collect()
    }

    /// Concatenated symbol texts; equals the input under case-folding.
    pub fn joined(&self) -> String {
        self.symbols.iter().map(|s| s.text()).collect()
    }
}

#[derive(Clone, Copy)]
struct Cell<'t> {
    score: PathCost,
    back: Option<(usize, &'t Symbol)>,
}

/// Find the minimum-cost full partition of `text`, or `None` if the table
/// cannot spell it.
///
/// Empty text yields an empty segmentation. Runs in `O(N * max_len)` time and
/// `O(N)` space.
pub fn segment<'t, C>(
    text: &NormalizedText,
    table: &'t SymbolTable,
    policy: &C,
) -> Option<Segmentation<'t>>
where
    C: CostPolicy + ?Sized,
{
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("segment", len = text.len(), max_len = table.max_len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let n = text.len();
    let mut cells: Vec<Option<Cell<'t>>> = vec![None; n + 1];
    cells[0] = Some(Cell {
        score: PathCost::ZERO,
        back: None,
    });

    let mut scanner = table.scanner(text);
    for i in 0..n {
        let Some(here) = cells[i] else {
            continue;
        };
        for (end, sym) in scanner.matches_at(i) {
            let candidate = here.score.extend(policy.cost(sym));
            let improves = match &cells[end] {
                None => true,
                Some(there) => candidate < there.score,
            };
            if improves {
                cells[end] = Some(Cell {
                    score: candidate,
                    back: Some((i, sym)),
                });
            }
        }
    }

    let Some(best) = cells[n] else {
        #[cfg(feature = "tracing")]
        tracing::debug!(len = n, "no segmentation");
        return None;
    };

    let mut symbols = Vec::with_capacity(best.score.count);
    let mut pos = n;
    while let Some((prev, sym)) = cells[pos].and_then(|c| c.back) {
        symbols.push(sym);
        pos = prev;
    }
    debug_assert_eq!(pos, 0, "back-pointers must lead to the origin");
    symbols.reverse();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        len = n,
        tokens = best.score.count,
        cost = best.score.cost,
        "segmented"
    );

    Some(Segmentation {
        symbols,
        score: best.score,
    })
}
