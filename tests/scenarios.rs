use element_spell::elements::{isotope_policy, periodic_table};
use element_spell::{
    diagnose, segment, Discouraged, NormalizedText, PathCost, Speller, SpellerBuilder, ZeroCost,
};

#[test]
fn geoffrey_spells_without_isotopes() {
    let table = periodic_table(false);
    let text = NormalizedText::normalize("Geoffrey");
    assert_eq!(text.as_str(), "Geoffrey");
    let seg = segment(&text, &table, &ZeroCost).expect("Geoffrey is spellable");
    assert_eq!(seg.joined().to_lowercase(), "geoffrey");
    assert_eq!(seg.texts(), vec!["Ge", "O", "F", "F", "Re", "Y"]);
}

#[test]
fn isotope_free_spelling_wins_when_one_exists() {
    let table = periodic_table(true);
    let policy = isotope_policy();
    let seg = segment(&NormalizedText::normalize("Dsra"), &table, &policy).unwrap();
    assert_eq!(seg.texts(), vec!["Ds", "Ra"]);
    assert_eq!(seg.cost(), 0);

    // Without the policy both spellings are free and the shorter one still wins.
    let seg = segment(&NormalizedText::normalize("Dsra"), &table, &ZeroCost).unwrap();
    assert_eq!(seg.len(), 2);
}

#[test]
fn isotopes_are_used_when_unavoidable() {
    let table = periodic_table(true);
    let seg = segment(&NormalizedText::normalize("HDT"), &table, &isotope_policy()).unwrap();
    assert_eq!(seg.texts(), vec!["H", "D", "T"]);
    assert_eq!(seg.score(), PathCost { cost: 2, count: 3 });

    // "Dara" needs a lone D and then strands the final "a".
    let text = NormalizedText::normalize("Dara");
    assert!(segment(&text, &table, &isotope_policy()).is_none());
    let d = diagnose(&text, &table).unwrap();
    assert_eq!((d.position, d.unmatched.as_str()), (4, "a"));
}

#[test]
fn empty_input_is_success() {
    let table = periodic_table(false);
    for raw in ["", "   ", "1234 !?"] {
        let seg = segment(&NormalizedText::normalize(raw), &table, &ZeroCost).unwrap();
        assert!(seg.is_empty(), "{raw:?} should give an empty spelling");
    }
}

#[test]
fn unmatched_run_is_diagnosed_from_the_start() {
    let table = periodic_table(false);
    let text = NormalizedText::normalize("qqqq");
    assert!(segment(&text, &table, &ZeroCost).is_none());
    let d = diagnose(&text, &table).unwrap();
    assert_eq!(d.position, 1);
    assert_eq!(d.unmatched, "qqqq");
}

#[test]
fn diagnosis_counts_positions_after_normalization() {
    let speller = Speller::elements(false);
    let spelling = speller.spell("He l q!").unwrap();
    let d = spelling.diagnosis().unwrap();
    // normalized "Helq": He, then "l" and "lq" never match.
    assert_eq!(d.position, 3);
    assert_eq!(d.unmatched, "lq");
}

#[test]
fn equal_cost_alternatives_resolve_deterministically() {
    // "sno": S|No and Sn|O are both two zero-cost tokens.
    let table = periodic_table(false);
    let text = NormalizedText::normalize("sno");
    let first = segment(&text, &table, &ZeroCost).unwrap();
    for _ in 0..16 {
        assert_eq!(segment(&text, &table, &ZeroCost).unwrap(), first);
    }
    assert_eq!(first.score(), PathCost { cost: 0, count: 2 });
}

#[test]
fn builder_and_direct_calls_agree() {
    let speller = SpellerBuilder::new().with_isotopes(true).build().unwrap();
    let table = periodic_table(true);
    for raw in ["Dsra", "HoT", "Tidy", "Bath"] {
        let text = NormalizedText::normalize(raw);
        let direct = segment(&text, &table, &isotope_policy()).map(|s| s.texts());
        let via_speller = speller
            .spell(raw)
            .unwrap()
            .segmentation()
            .map(|s| s.texts());
        assert_eq!(direct, via_speller, "{raw}");
    }
}

#[test]
fn discouraging_a_common_symbol_changes_the_choice() {
    let table = periodic_table(false);
    let text = NormalizedText::normalize("co");
    let plain = segment(&text, &table, &ZeroCost).unwrap();
    assert_eq!(plain.texts(), vec!["Co"]);
    let avoided = segment(&text, &table, &Discouraged::new(["Co"])).unwrap();
    assert_eq!(avoided.texts(), vec!["C", "O"]);
}
