//! Fixed sentiment lexicon for civic-issue text.
//!
//! Each entry maps a word to (polarity, subjectivity). Polarity is in
//! [-1, 1], subjectivity in [0, 1]. The table leans toward vocabulary that
//! shows up in local-issue reporting: infrastructure failures, safety
//! complaints, service praise. The lexicon is part of the scorer's contract —
//! changing an entry changes severity scores downstream.

/// (word, polarity, subjectivity), sorted by word for binary search.
const ENTRIES: &[(&str, f64, f64)] = &[
    ("abandoned", -0.5, 0.5),
    ("afraid", -0.6, 0.7),
    ("amazing", 0.8, 0.9),
    ("angry", -0.7, 0.8),
    ("awful", -0.9, 0.9),
    ("bad", -0.7, 0.67),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("blocked", -0.4, 0.3),
    ("broken", -0.5, 0.4),
    ("clean", 0.4, 0.4),
    ("concerned", -0.4, 0.6),
    ("crisis", -0.7, 0.5),
    ("crumbling", -0.6, 0.5),
    ("damaged", -0.5, 0.4),
    ("dangerous", -0.7, 0.6),
    ("dark", -0.3, 0.4),
    ("delayed", -0.3, 0.3),
    ("dirty", -0.6, 0.7),
    ("disappointed", -0.6, 0.8),
    ("disgusting", -0.9, 0.9),
    ("efficient", 0.5, 0.5),
    ("emergency", -0.5, 0.4),
    ("excellent", 1.0, 1.0),
    ("failed", -0.5, 0.5),
    ("failing", -0.5, 0.5),
    ("fantastic", 0.9, 0.9),
    ("filthy", -0.8, 0.9),
    ("fixed", 0.4, 0.3),
    ("flooded", -0.6, 0.4),
    ("flooding", -0.5, 0.4),
    ("friendly", 0.5, 0.6),
    ("frustrated", -0.6, 0.8),
    ("frustrating", -0.6, 0.8),
    ("good", 0.7, 0.6),
    ("grateful", 0.6, 0.7),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("hazardous", -0.7, 0.6),
    ("helpful", 0.5, 0.5),
    ("horrible", -0.9, 0.9),
    ("ignored", -0.5, 0.6),
    ("improved", 0.5, 0.5),
    ("injured", -0.6, 0.4),
    ("leaking", -0.4, 0.3),
    ("loud", -0.4, 0.6),
    ("neglected", -0.6, 0.6),
    ("noisy", -0.5, 0.7),
    ("outraged", -0.8, 0.9),
    ("overflowing", -0.5, 0.4),
    ("pleased", 0.6, 0.8),
    ("poor", -0.4, 0.6),
    ("prompt", 0.4, 0.5),
    ("quiet", 0.3, 0.5),
    ("reliable", 0.5, 0.5),
    ("repaired", 0.4, 0.3),
    ("responsive", 0.5, 0.5),
    ("safe", 0.5, 0.5),
    ("scared", -0.6, 0.7),
    ("severe", -0.6, 0.5),
    ("slow", -0.3, 0.4),
    ("smelly", -0.6, 0.8),
    ("smooth", 0.4, 0.4),
    ("stolen", -0.6, 0.4),
    ("terrible", -0.9, 0.9),
    ("thankful", 0.6, 0.7),
    ("timely", 0.4, 0.5),
    ("unacceptable", -0.8, 0.9),
    ("unbearable", -0.9, 0.9),
    ("unsafe", -0.6, 0.6),
    ("urgent", -0.4, 0.6),
    ("vandalized", -0.7, 0.5),
    ("wonderful", 1.0, 1.0),
    ("worried", -0.5, 0.7),
    ("worse", -0.6, 0.7),
    ("worst", -1.0, 1.0),
];

/// Words that invert the polarity of the entry that follows them.
const NEGATORS: &[&str] = &["cannot", "neither", "never", "no", "none", "nor", "not"];

/// Modifiers that scale the polarity of the entry that follows them.
/// Values above 1.0 intensify, below 1.0 diminish.
const MODIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("barely", 0.4),
    ("completely", 1.4),
    ("deeply", 1.3),
    ("extremely", 1.5),
    ("fairly", 0.8),
    ("highly", 1.4),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("rather", 0.9),
    ("really", 1.3),
    ("slightly", 0.5),
    ("so", 1.2),
    ("somewhat", 0.7),
    ("too", 1.2),
    ("totally", 1.4),
    ("very", 1.3),
];

/// Look up (polarity, subjectivity) for a lowercase token.
pub fn entry(word: &str) -> Option<(f64, f64)> {
    ENTRIES
        .binary_search_by_key(&word, |&(w, _, _)| w)
        .ok()
        .map(|i| (ENTRIES[i].1, ENTRIES[i].2))
}

/// True when a token negates what follows. Contracted forms ("isn't",
/// "doesn't") are covered by the `n't` suffix.
pub fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

/// Polarity multiplier when the token is an intensifier or diminisher.
pub fn modifier(word: &str) -> Option<f64> {
    MODIFIERS
        .binary_search_by_key(&word, |&(w, _)| w)
        .ok()
        .map(|i| MODIFIERS[i].1)
}
