/// An ordered `(pattern, replacement)` pair. Patterns are ASCII and match
/// regardless of case; replacements are inserted as written.
pub type Substitution = (&'static str, &'static str);

/// `ng` + vowel is respelled as a syllable-final `ng` followed by a hard `g`.
pub const NG_CLUSTERS: &[Substitution] = &[
    (" ngw", "ng gu"),
    (" nga", "ng ga"),
    (" nge", "ng ge"),
    (" ngi", "ng gi"),
    (" ngo", "ng goh"),
    (" ngu", "ng gu"),
];

/// Final `o` and `e` are otherwise reduced by Indonesian voices.
pub const FINAL_VOWELS: &[Substitution] = &[("o ", "oh "), ("e ", "eh ")];

pub const SYLLABLE_FIXES: &[Substitution] = &[
    ("we ", "weh "),
    ("ke ", "keh "),
    ("ki ", "kih "),
    (" hi", " hih"),
    (" m ", " mh "),
    (" n ", " nh "),
    (" chw", " cw"),
    (" pw", " pu"),
    (" ks", " cksi"),
];

/// Indonesian spells the "sh" sound `sj`.
pub const CONSONANT_CLUSTERS: &[Substitution] = &[
    ("sh", "sj"),
    ("be", "beh"),
    ("swa", "sua"),
    ("mche ", "mceh"),
];

pub const M_ONSETS: &[Substitution] = &[("mcha", "m cah"), ("mcho", "m choh"), ("mw", "mu")];

/// Runs after [`CONSONANT_CLUSTERS`]: it matches the `sj` that rule produces.
pub const SJ_VOWELS: &[Substitution] = &[
    ("a sji", "ah syi"),
    ("e sji", "eh syi"),
    ("i sji", "ih syi"),
    ("o sji", "oh syi"),
    ("u sji", "uh syi"),
    (" sja", " sya"),
    (" sjo", " syo"),
    ("a sje", "ah sye"),
    ("e sje", "eh sye"),
    ("i sje", "ih sye"),
    ("o sje", "oh sye"),
    ("u sje", "uh sye"),
];

/// A lone `o` syllable picked up an `h` from [`FINAL_VOWELS`].
pub const LONE_O: &[Substitution] = &[(" oh ", " o ")];

pub const FINAL_NASALS: &[Substitution] = &[("a m ", "am "), ("a n ", "an ")];

/// Sounds Indonesian lacks, replaced by the closest ones it has.
pub const FOREIGN_SOUNDS: &[Substitution] = &[(" gh", " hr"), (" dh", " th")];

/// Every substitution group, in the order [`rewrite`] applies them.
pub const RULE_GROUPS: &[&[Substitution]] = &[
    NG_CLUSTERS,
    FINAL_VOWELS,
    SYLLABLE_FIXES,
    CONSONANT_CLUSTERS,
    M_ONSETS,
    SJ_VOWELS,
    LONE_O,
    FINAL_NASALS,
    FOREIGN_SOUNDS,
];

/// Respell a space-delimited syllable stream for an Indonesian voice.
///
/// A leading space is added so that rules anchored on a delimiter also match
/// the first syllable. Each rule rewrites the output of the previous one.
pub fn rewrite(stream: &str) -> String {
    let mut text = format!(" {stream}");
    for group in RULE_GROUPS {
        for &(pattern, replacement) in *group {
            if let Some(replaced) = replace_ignore_ascii_case(&text, pattern, replacement) {
                text = replaced;
            }
        }
    }
    text
}

/// Replace every non-overlapping match of an ASCII `pattern`, scanning left
/// to right and ignoring ASCII case.
///
/// Returns `None` when the pattern does not occur.
pub fn replace_ignore_ascii_case(haystack: &str, pattern: &str, replacement: &str) -> Option<String> {
    let needle = pattern.as_bytes();
    let bytes = haystack.as_bytes();
    if needle.is_empty() || bytes.len() < needle.len() {
        return None;
    }

    let mut out = String::new();
    let mut copied = 0;
    let mut i = 0;
    while i + needle.len() <= bytes.len() {
        if bytes[i..i + needle.len()].eq_ignore_ascii_case(needle) {
            out.push_str(&haystack[copied..i]);
            out.push_str(replacement);
            i += needle.len();
            copied = i;
        } else {
            i += 1;
        }
    }

    if copied == 0 {
        return None;
    }
    out.push_str(&haystack[copied..]);
    Some(out)
}
