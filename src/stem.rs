//! Porter stemming, Step 1 only (1a followed by 1b).
//!
//! This is a direct port of the reference algorithm, including its one
//! deliberate deviation from canonical Porter: the `eed`/`eedly` rule below
//! removes 1 and 3 characters respectively (landing on `"ee"`), not the
//! canonical 0/2. That bookkeeping is intentional — see the note on
//! `step1b_eed_eedly` — and must not be "fixed".

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

#[inline]
fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

fn contains_vowel(s: &str) -> bool {
    s.chars().any(is_vowel)
}

fn first_vowel_index(s: &str) -> Option<usize> {
    s.chars().position(is_vowel)
}

/// Applies Porter Step 1a then Step 1b. Idempotent: stemming an
/// already-stemmed word returns it unchanged.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// The reference Step 1a + Step 1b stemmer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PorterStemmer;

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        step1b(&step1a(word))
    }
}

/// Step 1a: `sses`/`ss`/`us`, `ied`/`ies`, or bare `s`.
fn step1a(word: &str) -> String {
    if word.ends_with("us") || word.ends_with("ss") {
        return word.to_string();
    }
    if let Some(stem) = p1a_sses(word) {
        return stem;
    }
    if let Some(stem) = p1a_ied_ies(word) {
        return stem;
    }
    if let Some(stem) = p1a_s(word) {
        return stem;
    }
    word.to_string()
}

fn p1a_sses(word: &str) -> Option<String> {
    word.strip_suffix("sses").map(|stem| format!("{stem}ss"))
}

fn p1a_ied_ies(word: &str) -> Option<String> {
    let stem = word.strip_suffix("ied").or_else(|| word.strip_suffix("ies"))?;
    if word.len() > 4 {
        Some(format!("{stem}i"))
    } else {
        Some(format!("{stem}ie"))
    }
}

fn p1a_s(word: &str) -> Option<String> {
    let stem = word.strip_suffix('s')?;
    let mut chars = stem.chars().rev();
    let penultimate = chars.next()?; // last char of `stem`, i.e. word[-2]
    if contains_vowel(stem) && !is_vowel(penultimate) {
        Some(stem.to_string())
    } else {
        None
    }
}

/// Step 1b: `eed`/`eedly` and `ed`/`edly`/`ing`/`ingly` are mutually
/// exclusive alternatives, picked by which literal suffix is longest.
///
/// A word ending in `"eed"` (e.g. `"feed"`) also literally ends in `"ed"`,
/// so if both groups were tried independently and scored by suffix length
/// removed, a word like `"feed"` — where the `eed` rule's vowel-transition
/// condition fails and produces no change — would fall through to the `ed`
/// rule and get mangled into `"fee"`. Real Porter (and every reference
/// vector this stemmer is tested against) treats the longer literal suffix
/// as exclusive: if the word ends in `eed`/`eedly`, only that rule is
/// attempted, whether or not its condition actually holds.
fn step1b(word: &str) -> String {
    if word.ends_with("eed") || word.ends_with("eedly") {
        return step1b_eed_eedly(word)
            .map(|(_, stem)| stem)
            .unwrap_or_else(|| word.to_string());
    }
    step1b_ed_edly_ing_ingly(word)
        .map(|(_, stem)| stem)
        .unwrap_or_else(|| word.to_string())
}

/// `eed`/`eedly` → `ee`, but only if the suffix sits after the first
/// vowel-then-non-vowel transition in the stem.
///
/// The suffix-length bookkeeping here (1 for `eed`, 3 for `eedly`) is the
/// spec's deliberate deviation from canonical Porter (which would use 0/2);
/// both rules leave `"ee"` as the retained tail either way, but this is what
/// the reference implementation does and tests depend on it.
fn step1b_eed_eedly(word: &str) -> Option<(usize, String)> {
    let test_word = word
        .strip_suffix("eedly")
        .or_else(|| word.strip_suffix("eed"))?;
    let i0 = first_vowel_index(test_word)?;
    let rest = &test_word[i0..];
    let has_non_vowel_after = rest.chars().skip(1).any(|c| !is_vowel(c));
    if !has_non_vowel_after {
        return None;
    }
    if word.ends_with("eedly") {
        Some((5, word[..word.len() - 3].to_string()))
    } else {
        Some((3, word[..word.len() - 1].to_string()))
    }
}

/// `ed`/`edly`/`ing`/`ingly`, applied only if the stem (suffix removed)
/// contains a vowel, with the usual at/bl/iz, doubled-consonant, and
/// short-stem follow-up rules.
fn step1b_ed_edly_ing_ingly(word: &str) -> Option<(usize, String)> {
    let suffix_len = if word.ends_with("ingly") {
        5
    } else if word.ends_with("edly") {
        4
    } else if word.ends_with("ing") {
        3
    } else if word.ends_with("ed") {
        2
    } else {
        return None;
    };

    let test_word = &word[..word.len() - suffix_len];
    if !contains_vowel(test_word) {
        return None;
    }

    let stem = if test_word.ends_with("at") || test_word.ends_with("bl") || test_word.ends_with("iz")
    {
        format!("{test_word}e")
    } else {
        let mut chars = test_word.chars().rev();
        let last = chars.next();
        let penultimate = chars.next();
        match (last, penultimate) {
            (Some(l), Some(p)) if l == p && !matches!(l, 'l' | 's' | 'z') => {
                test_word[..test_word.len() - l.len_utf8()].to_string()
            }
            _ if test_word.chars().count() < 4 => format!("{test_word}e"),
            _ => test_word.to_string(),
        }
    };

    Some((suffix_len, stem))
}
