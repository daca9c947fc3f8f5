//! Atomic-ID decoding: the reverse direction, ids back to symbols.
//!
//! Accepted tokens are decimal atomic numbers `1..=118` (leading zeros are
//! fine, `"007"` means `"7"`) and, when isotopes are enabled, the isotope
//! ids `"1.2"` and `"1.3"`. Blank tokens are skipped. Token indices in errors
//! are 1-based and count blank tokens too.

use crate::elements::{ISOTOPES, MAX_ATOMIC_NUMBER};
use crate::error::AtomicIdError;
use crate::table::SymbolTable;

/// Validate and canonicalise raw id tokens.
pub fn parse_atomic_ids<I, S>(tokens: I, isotopes: bool) -> Result<Vec<String>, AtomicIdError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ids = Vec::new();

    for (offset, raw) in tokens.into_iter().enumerate() {
        let index = offset + 1;
        let raw = raw.as_ref();
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }

        if token.bytes().all(|b| b.is_ascii_digit()) {
            let value = token.parse::<u64>().ok();
            match value {
                Some(v) if (1..=u64::from(MAX_ATOMIC_NUMBER)).contains(&v) => {
                    ids.push(v.to_string());
                }
                _ => {
                    return Err(AtomicIdError::OutOfRange {
                        index,
                        value: value.map_or_else(|| token.to_string(), |v| v.to_string()),
                        max: MAX_ATOMIC_NUMBER,
                    });
                }
            }
            continue;
        }

        if isotopes && ISOTOPES.iter().any(|&(_, _, id)| id == token) {
            ids.push(token.to_string());
            continue;
        }

        return Err(AtomicIdError::InvalidToken {
            index,
            raw: raw.to_string(),
            max: MAX_ATOMIC_NUMBER,
            isotopes_enabled: isotopes,
        });
    }

    if ids.is_empty() {
        return Err(AtomicIdError::NoIds);
    }
    Ok(ids)
}

/// Concatenate the symbols for already-validated `ids`.
///
/// Ids missing from `table` are skipped; [`parse_atomic_ids`] only yields ids
/// the periodic table knows.
pub fn ids_to_symbols<S: AsRef<str>>(ids: &[S], table: &SymbolTable) -> String {
    ids.iter()
        .filter_map(|id| table.by_id(id.as_ref()))
        .map(|s| s.text())
        .collect()
}

/// Parse `tokens` and spell them with `table`.
pub fn decode_ids<I, S>(
    tokens: I,
    table: &SymbolTable,
    isotopes: bool,
) -> Result<String, AtomicIdError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ids = parse_atomic_ids(tokens, isotopes)?;
    Ok(ids_to_symbols(&ids, table))
}
