//! Example: spell a few words with element symbols.
//!
//! Run with:
//! `cargo run --example spell`

use element_spell::{OutputMode, SpellerBuilder, Spelling};

fn main() {
    let speller = SpellerBuilder::new()
        .with_isotopes(true)
        .build()
        .expect("isotopes are part of the built-in table");

    for word in ["Geoffrey", "Dsra", "HDT", "Bacon", "Quartz"] {
        match speller.spell(word) {
            Ok(Spelling::Found(seg)) => {
                println!("{word}: {} (isotope uses: {})", seg.texts().join(" "), seg.cost());
            }
            Ok(spelling @ Spelling::Unmatched(_)) => {
                println!("{word}: {}", spelling.render(OutputMode::Ids));
            }
            Err(err) => eprintln!("{word}: {err}"),
        }
    }

    println!();
    println!("{}", speller.convert("Bacon", OutputMode::Full).unwrap_or_default());
}
