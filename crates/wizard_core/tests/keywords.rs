use wizard_core::KeywordSet;

fn assert_selection_within_list(set: &KeywordSet) {
    for keyword in set.selected() {
        assert!(set.contains(&keyword), "{keyword} selected but not listed");
    }
    assert_eq!(set.selected().len(), set.selected_count());
}

#[test]
fn seeded_keywords_start_unselected() {
    let set = KeywordSet::from_keywords(["fitness", "gym", "fitness", " "]);
    assert_eq!(set.keywords(), ["fitness", "gym"]);
    assert_eq!(set.selected_count(), 0);
}

#[test]
fn add_appends_and_auto_selects() {
    let mut set = KeywordSet::from_keywords(["a"]);
    assert!(set.add("  b  "));
    assert_eq!(set.keywords(), ["a", "b"]);
    assert!(set.is_selected("b"));
    assert!(!set.is_selected("a"));
}

#[test]
fn add_ignores_blank_and_exact_duplicates() {
    let mut set = KeywordSet::from_keywords(["Rust"]);
    assert!(!set.add("   "));
    assert!(!set.add("Rust"));
    assert!(set.add("rust"));
    assert_eq!(set.keywords(), ["Rust", "rust"]);
}

#[test]
fn remove_drops_from_list_and_selection() {
    let mut set = KeywordSet::from_keywords(["a", "b"]);
    set.select_all();
    assert!(set.remove("a"));
    assert!(!set.is_selected("a"));
    assert_eq!(set.selected(), vec!["b"]);
    assert!(!set.remove("missing"));
}

#[test]
fn toggle_requires_listed_keyword() {
    let mut set = KeywordSet::from_keywords(["a"]);
    assert!(!set.toggle("ghost"));
    assert_eq!(set.selected_count(), 0);
    assert!(set.toggle("a"));
    assert!(set.is_selected("a"));
    assert!(set.toggle("a"));
    assert!(!set.is_selected("a"));
}

#[test]
fn selected_follows_list_order() {
    let mut set = KeywordSet::from_keywords(["c", "a", "b"]);
    set.toggle("b");
    set.toggle("c");
    assert_eq!(set.selected(), vec!["c", "b"]);
    set.select_none();
    assert!(set.selected().is_empty());
}

#[test]
fn selection_stays_within_list_across_operation_sequences() {
    let words = ["alpha", "beta", "gamma", "delta"];
    let mut set = KeywordSet::from_keywords(["alpha", "beta"]);
    // Deterministic pseudo-random walk over all operations.
    let mut seed: u32 = 17;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let word = words[(seed >> 8) as usize % words.len()];
        match (seed >> 16) % 5 {
            0 => {
                set.add(word);
            }
            1 => {
                set.remove(word);
            }
            2 => {
                set.toggle(word);
            }
            3 => set.select_all(),
            _ => set.select_none(),
        }
        assert_selection_within_list(&set);
    }
}
