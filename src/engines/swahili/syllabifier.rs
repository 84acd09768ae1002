/// Vowels of Swahili orthography. Every other character is treated as a consonant.
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

fn is_consonant_at(chars: &[char], index: usize) -> bool {
    chars.get(index).is_some_and(|&ch| !is_vowel(ch))
}

/// How a syllable ends once its vowel has been found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coda {
    /// Vowel + `n` before a consonant other than `g` or `y` (`pen·da`).
    Nasal,
    /// Vowel + `m` before a consonant (`jam·bo`).
    Bilabial,
    /// `a` + `l` before a consonant, found in Arabic loanwords (`al·ha·mi·si`).
    Lateral,
    /// The syllable ends on its vowel.
    Open,
}

impl Coda {
    /// Number of characters the syllable takes starting at its vowel.
    pub fn span(self) -> usize {
        match self {
            Coda::Open => 1,
            Coda::Nasal | Coda::Bilabial | Coda::Lateral => 2,
        }
    }
}

struct CodaRule {
    coda: Coda,
    matches: fn(&[char], usize) -> bool,
}

/// Closed-syllable exceptions in priority order. The first match wins.
const CODA_RULES: &[CodaRule] = &[
    CodaRule {
        coda: Coda::Nasal,
        matches: |w, v| {
            w.get(v + 1) == Some(&'n')
                && is_consonant_at(w, v + 2)
                && !matches!(w[v + 2], 'g' | 'y')
        },
    },
    CodaRule {
        coda: Coda::Bilabial,
        matches: |w, v| w.get(v + 1) == Some(&'m') && is_consonant_at(w, v + 2),
    },
    CodaRule {
        coda: Coda::Lateral,
        matches: |w, v| w[v] == 'a' && w.get(v + 1) == Some(&'l') && is_consonant_at(w, v + 2),
    },
];

/// Classify the end of the syllable whose vowel sits at `vowel` in `rest`.
///
/// Lookahead past the end of `rest` never matches, so a vowel at the end of
/// the word always yields [`Coda::Open`].
pub fn classify_boundary(rest: &[char], vowel: usize) -> Coda {
    CODA_RULES
        .iter()
        .find(|rule| (rule.matches)(rest, vowel))
        .map(|rule| rule.coda)
        .unwrap_or(Coda::Open)
}

struct NasalPrefix {
    nasal: char,
    precedes: fn(char) -> bool,
}

/// Syllabic nasals that split off the front of a word, checked in order.
const NASAL_PREFIXES: &[NasalPrefix] = &[
    NasalPrefix {
        nasal: 'n',
        precedes: |next| !is_vowel(next) && next != 'g',
    },
    NasalPrefix {
        nasal: 'm',
        precedes: |next| !is_vowel(next),
    },
];

/// Return the syllabic nasal prefix of `chars`, if it has one.
pub fn nasal_prefix(chars: &[char]) -> Option<char> {
    let (&first, &next) = (chars.first()?, chars.get(1)?);
    NASAL_PREFIXES
        .iter()
        .find(|prefix| prefix.nasal == first && (prefix.precedes)(next))
        .map(|prefix| prefix.nasal)
}

/// Split a Swahili word into its syllables.
///
/// The word is lowercased first. Concatenating the result gives back the
/// lowercased word; an empty word gives an empty list.
pub fn syllabify(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let mut syllables = Vec::new();
    let mut start = 0;

    if let Some(nasal) = nasal_prefix(&chars) {
        syllables.push(nasal.to_string());
        start = 1;
    }

    while start < chars.len() {
        let rest = &chars[start..];
        let Some(vowel) = rest.iter().position(|&ch| is_vowel(ch)) else {
            // No vowel left: whatever remains is one (rare) closed syllable.
            syllables.push(rest.iter().collect());
            break;
        };

        let end = vowel + classify_boundary(rest, vowel).span();
        syllables.push(rest[..end].iter().collect());
        start += end;
    }

    log::trace!("syllabified {word:?} into {syllables:?}");
    syllables
}
