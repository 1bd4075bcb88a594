use std::sync::OnceLock;

/// Word used when a wordlist is empty.
const FALLBACK_WORD: &str = "cell";

/// The built-in ordered wordlist cell identifiers are drawn from.
pub fn wordlist() -> &'static [String] {
    WORDLIST.get_or_init(parse_wordlist)
}

/// Allocates an identifier from the built-in wordlist.
pub fn allocate(is_taken: impl Fn(&str) -> bool) -> String {
    allocate_from(wordlist(), is_taken)
}

/// Returns the first word not taken. Once every bare word is taken, the scan
/// repeats with numeric suffixes `2`, `3`, ... until a free candidate appears.
pub fn allocate_from<S: AsRef<str>>(words: &[S], is_taken: impl Fn(&str) -> bool) -> String {
    let fallback = [FALLBACK_WORD];
    let words: Vec<&str> = if words.is_empty() {
        fallback.to_vec()
    } else {
        words.iter().map(|word| word.as_ref()).collect()
    };

    if let Some(word) = words.iter().find(|word| !is_taken(word)) {
        return (*word).to_string();
    }

    let mut suffix: u64 = 2;
    loop {
        for word in &words {
            let candidate = format!("{word}{suffix}");
            if !is_taken(&candidate) {
                return candidate;
            }
        }
        suffix += 1;
    }
}

fn parse_wordlist() -> Vec<String> {
    let source = include_str!("../../assets/wordlist.json");
    serde_json::from_str(source)
        .unwrap_or_else(|err| panic!("failed to parse embedded wordlist: {err}"))
}

static WORDLIST: OnceLock<Vec<String>> = OnceLock::new();
