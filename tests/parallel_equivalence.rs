#![cfg(feature = "parallel")]

use element_spell::{Speller, SpellerBuilder};
use proptest::prelude::*;

proptest! {
    #[test]
    fn batch_matches_one_at_a_time(inputs in prop::collection::vec("[a-zA-Z ]{0,24}", 0..32)) {
        let speller = SpellerBuilder::new().with_isotopes(true).build().unwrap();
        let batch = speller.spell_batch(&inputs);
        prop_assert_eq!(batch.len(), inputs.len());
        for (raw, got) in inputs.iter().zip(&batch) {
            let expected = speller.spell(raw);
            prop_assert_eq!(got, &expected);
        }
    }
}

#[test]
fn speller_is_shareable_across_threads() {
    let speller = &Speller::elements(false);
    let words = ["Geoffrey", "carbon", "qq", "Bach", "neon"];
    std::thread::scope(|scope| {
        let handles: Vec<_> = words
            .iter()
            .map(|w| scope.spawn(move || speller.spell(w).unwrap().is_found()))
            .collect();
        let found: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(found, vec![true, true, false, true, true]);
    });
}
