use std::collections::BTreeSet;

use gridpage::state::ident;

fn taken(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

#[test]
fn test_first_free_word_wins() {
    let words = ["a", "b"];
    assert_eq!(ident::allocate_from(&words, |_| false), "a");

    let used = taken(&["a"]);
    assert_eq!(ident::allocate_from(&words, |id| used.contains(id)), "b");
}

#[test]
fn test_numeric_suffix_after_exhaustion() {
    let words = ["a", "b"];

    let used = taken(&["a", "b"]);
    assert_eq!(ident::allocate_from(&words, |id| used.contains(id)), "a2");

    let used = taken(&["a", "b", "a2"]);
    assert_eq!(ident::allocate_from(&words, |id| used.contains(id)), "b2");

    let used = taken(&["a", "b", "a2", "b2"]);
    assert_eq!(ident::allocate_from(&words, |id| used.contains(id)), "a3");
}

#[test]
fn test_empty_wordlist_uses_fallback_word() {
    let words: [&str; 0] = [];
    assert_eq!(ident::allocate_from(&words, |_| false), "cell");

    let used = taken(&["cell"]);
    assert_eq!(ident::allocate_from(&words, |id| used.contains(id)), "cell2");
}

#[test]
fn test_builtin_wordlist_is_unique_and_ordered() {
    let words = ident::wordlist();
    assert!(!words.is_empty());
    assert_eq!(words[0], "apple");

    let unique: BTreeSet<&str> = words.iter().map(String::as_str).collect();
    assert_eq!(unique.len(), words.len());
}

#[test]
fn test_growing_exclusion_set_never_reuses() {
    let mut used: BTreeSet<String> = BTreeSet::new();
    let rounds = ident::wordlist().len() + 3;

    for _ in 0..rounds {
        let id = ident::allocate(|candidate| used.contains(candidate));
        assert!(used.insert(id.clone()), "identifier {id} was handed out twice");
    }

    assert!(used.contains("apple2"));
    assert!(used.contains("birch2"));
    assert!(used.contains("cedar2"));
}
