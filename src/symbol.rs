//! Dictionary tokens and their canonical case form.

use std::fmt;

/// A single dictionary token, e.g. `He` / Helium / `2`.
///
/// `text` is stored in canonical form (see [`canonical`]). `id` is opaque to
/// the segmenter; the periodic table uses atomic numbers and `"1.2"`-style
/// isotope ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    text: String,
    name: String,
    id: String,
}

impl Symbol {
    pub fn new(text: impl Into<String>, name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            name: name.into(),
            id: id.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Length in characters, which is what the segmenter steps by.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Canonical case form: first character uppercase, the rest lowercase.
///
/// ```
/// use element_spell::symbol::canonical;
///
/// assert_eq!(canonical("hE"), "He");
/// assert_eq!(canonical("n"), "N");
/// assert_eq!(canonical(""), "");
/// ```
pub fn canonical(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    canonical_into(token, &mut out);
    out
}

/// [`canonical`] into a caller-owned buffer, which is cleared first.
pub fn canonical_into(token: &str, out: &mut String) {
    out.clear();
    let mut chars = token.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        for ch in chars {
            out.extend(ch.to_lowercase());
        }
    }
}
