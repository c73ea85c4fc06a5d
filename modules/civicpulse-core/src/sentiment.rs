//! Lexicon-based sentiment scoring for one text snippet.
//!
//! Pure and deterministic: no network, no shared state. Polarity and
//! subjectivity are looked up per word, adjusted for negators and
//! intensity modifiers within a two-token window, then averaged across
//! the whole text.

use civicpulse_common::{Sentiment, SentimentResult, Urgency};

use crate::lexicon;

/// Polarity above this is Positive (urgency Low).
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Polarity below this is Negative (urgency High).
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// How many preceding tokens are inspected for negators and modifiers.
const CONTEXT_WINDOW: usize = 2;

/// Negation flips the sign and dampens the magnitude ("not terrible" is
/// milder than "great").
const NEGATION_DAMPENING: f64 = -0.5;

/// Score one snippet. Empty, whitespace-only, or lexicon-miss text yields
/// neutral defaults (polarity 0, subjectivity 0) rather than failing.
pub fn score(text: &str) -> SentimentResult {
    let (polarity, subjectivity) = analyze(text);

    let (sentiment, urgency) = if polarity > POSITIVE_THRESHOLD {
        (Sentiment::Positive, Urgency::Low)
    } else if polarity < NEGATIVE_THRESHOLD {
        (Sentiment::Negative, Urgency::High)
    } else {
        (Sentiment::Neutral, Urgency::Normal)
    };

    SentimentResult {
        sentiment,
        urgency,
        severity_score: polarity * subjectivity,
        raw_subjectivity: subjectivity,
    }
}

/// Compute (polarity, subjectivity) averaged over all lexicon matches.
/// Returns (0.0, 0.0) when nothing matches.
pub fn analyze(text: &str) -> (f64, f64) {
    let tokens = tokenize(text);

    let mut polarity_sum = 0.0;
    let mut subjectivity_sum = 0.0;
    let mut matches = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        let Some((mut polarity, mut subjectivity)) = lexicon::entry(token) else {
            continue;
        };

        let window = &tokens[i.saturating_sub(CONTEXT_WINDOW)..i];
        let mut negated = false;
        let mut scale = 1.0;
        for word in window {
            if lexicon::is_negator(word) {
                // Double negation cancels
                negated = !negated;
            } else if let Some(m) = lexicon::modifier(word) {
                scale *= m;
            }
        }

        polarity *= scale;
        if scale > 1.0 {
            // Intensified statements read as more opinionated
            subjectivity = (subjectivity * scale).min(1.0);
        }
        if negated {
            polarity *= NEGATION_DAMPENING;
        }

        polarity_sum += polarity.clamp(-1.0, 1.0);
        subjectivity_sum += subjectivity.clamp(0.0, 1.0);
        matches += 1;
    }

    if matches == 0 {
        return (0.0, 0.0);
    }

    (polarity_sum / matches as f64, subjectivity_sum / matches as f64)
}

/// Lowercase word tokens. Apostrophes are kept so contractions like
/// "isn't" survive as single tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|t| !t.is_empty())
        .map(|t| t.trim_matches('\'').to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
