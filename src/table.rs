//! Immutable symbol dictionary.
//!
//! A [`SymbolTable`] is validated once at construction, so the segmenter and
//! the failure analyzer never have to second-guess it. Both passes step
//! through the text with a [`Scanner`], which is the single definition of
//! "a token matches here".

use std::collections::HashMap;

use crate::error::TableError;
use crate::normalize::NormalizedText;
use crate::symbol::{canonical, canonical_into, Symbol};

/// Longest symbol the table accepts, in characters.
pub const MAX_SYMBOL_LEN: usize = 2;

/// Upper bound on the UTF-8 size of one character after case mapping
/// (up to three chars of four bytes).
const MAX_MAPPED_BYTES: usize = 12;

#[derive(Clone, Debug)]
pub struct SymbolTable {
    entries: Vec<Symbol>,
    by_text: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
    max_len: usize,
}

impl SymbolTable {
    /// Build a table, rejecting anything the segmenter could not use.
    ///
    /// Symbols must be non-empty, alphabetic, in canonical case, at most
    /// [`MAX_SYMBOL_LEN`] characters, and unique; identifiers must be unique.
    pub fn new<I>(symbols: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut entries = Vec::new();
        let mut by_text = HashMap::new();
        let mut by_id = HashMap::new();
        let mut max_len = 0usize;

        for (index, sym) in symbols.into_iter().enumerate() {
            let text = sym.text();
            if text.is_empty() {
                return Err(TableError::EmptySymbol { index });
            }
            if !text.chars().all(char::is_alphabetic) {
                return Err(TableError::NonAlphabetic {
                    symbol: text.to_string(),
                });
            }
            let len = sym.char_len();
            if len > MAX_SYMBOL_LEN {
                return Err(TableError::TooLong {
                    symbol: text.to_string(),
                    len,
                    max: MAX_SYMBOL_LEN,
                });
            }
            let canon = canonical(text);
            if canon != text {
                return Err(TableError::NotCanonical {
                    symbol: text.to_string(),
                    canonical: canon,
                });
            }
            if by_text.insert(canon, index).is_some() {
                return Err(TableError::DuplicateSymbol {
                    symbol: text.to_string(),
                });
            }
            if by_id.insert(sym.id().to_string(), index).is_some() {
                return Err(TableError::DuplicateId {
                    id: sym.id().to_string(),
                });
            }
            max_len = max_len.max(len);
            entries.push(sym);
        }

        if entries.is_empty() {
            return Err(TableError::Empty);
        }

        Ok(Self {
            entries,
            by_text,
            by_id,
            max_len,
        })
    }

    /// Number of entries; always at least one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a constructed table; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length in characters of the longest symbol.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Entries in insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.entries.iter()
    }

    /// Exact lookup by canonical text.
    pub fn get(&self, text: &str) -> Option<&Symbol> {
        self.by_text.get(text).map(|&i| &self.entries[i])
    }

    /// Case-insensitive lookup: `token` is canonicalised first.
    pub fn lookup(&self, token: &str) -> Option<&Symbol> {
        self.get(&canonical(token))
    }

    pub fn by_id(&self, id: &str) -> Option<&Symbol> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    /// Matching cursor over `text` for one DP sweep.
    pub fn scanner<'t, 's>(&'t self, text: &'s NormalizedText) -> Scanner<'t, 's> {
        Scanner {
            table: self,
            text,
            scratch: String::with_capacity(self.max_len * MAX_MAPPED_BYTES),
        }
    }
}

/// Finds table symbols at positions of one text.
///
/// Candidate windows are canonicalised into a single scratch buffer owned by
/// the scanner, so a sweep allocates once regardless of text length.
#[derive(Debug)]
pub struct Scanner<'t, 's> {
    table: &'t SymbolTable,
    text: &'s NormalizedText,
    scratch: String,
}

impl<'t, 's> Scanner<'t, 's> {
    /// Every symbol matching the text at position `start`, as `(end, symbol)`
    /// pairs in ascending `end` order.
    pub fn matches_at(&mut self, start: usize) -> Matches<'_, 't, 's> {
        let limit = start
            .saturating_add(self.table.max_len)
            .min(self.text.len());
        Matches {
            scanner: self,
            start,
            end: start,
            limit,
        }
    }
}

/// Iterator returned by [`Scanner::matches_at`].
///
/// Symbols borrow from the table only, so callers may keep them after the
/// scanner and text are gone.
#[derive(Debug)]
pub struct Matches<'a, 't, 's> {
    scanner: &'a mut Scanner<'t, 's>,
    start: usize,
    end: usize,
    limit: usize,
}

impl<'t> Iterator for Matches<'_, 't, '_> {
    type Item = (usize, &'t Symbol);

    fn next(&mut self) -> Option<Self::Item> {
        let table: &'t SymbolTable = self.scanner.table;
        while self.end < self.limit {
            self.end += 1;
            let scanner = &mut *self.scanner;
            canonical_into(scanner.text.slice(self.start, self.end), &mut scanner.scratch);
            if let Some(sym) = table.get(&scanner.scratch) {
                return Some((self.end, sym));
            }
        }
        None
    }
}
