//! Lexicon-based compound sentiment scorer for game reviews.
//!
//! Word valences use a `[-4.0, 4.0]` scale. Per-word valences are adjusted for
//! boosters ("very"), dampeners ("slightly"), shouted words, negation within
//! the three preceding words and a contrastive "but". The summed valence is
//! squashed into `[-1.0, 1.0]` as the compound score.

use revdigest_core::SentimentScorer;

use crate::lexicon;

/// Normalization constant: `compound = sum / sqrt(sum² + ALPHA)`.
const ALPHA: f32 = 15.0;
const BOOSTER_INCREMENT: f32 = 0.293;
const CAPS_INCREMENT: f32 = 0.733;
const NEGATION_SCALAR: f32 = -0.74;
const EXCLAMATION_INCREMENT: f32 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;

/// Weight of a modifier one, two and three words before the scored word.
const MODIFIER_DECAY: [f32; 3] = [1.0, 0.95, 0.9];

const BOOSTERS: &[&str] = &[
    "absolutely",
    "completely",
    "extremely",
    "highly",
    "incredibly",
    "really",
    "so",
    "super",
    "totally",
    "truly",
    "very",
];

const DAMPENERS: &[&str] = &["barely", "kinda", "slightly", "somewhat", "sorta"];

const NEGATIONS: &[&str] = &[
    "ain't", "aren't", "can't", "cannot", "cant", "couldn't", "didn't", "didnt", "doesn't",
    "doesnt", "don't", "dont", "hardly", "hasn't", "haven't", "isn't", "isnt", "neither",
    "never", "no", "nor", "not", "nothing", "shouldn't", "wasn't", "weren't", "without",
    "won't", "wont", "wouldn't",
];

/// Full breakdown of a text's polarity.
///
/// `positive`, `negative` and `neutral` are proportions of the text and sum to
/// `1.0` for non-empty input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarityScores {
    pub compound: f32,
    pub positive: f32,
    pub negative: f32,
    pub neutral: f32,
}

/// [`SentimentScorer`] backed by [`polarity_scores`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl SentimentScorer for LexiconScorer {
    fn compound(&self, text: &str) -> f32 {
        polarity_scores(text).compound
    }
}

/// Score a text string using the review lexicon.
///
/// Returns all-zero scores for empty text.
#[must_use]
pub fn polarity_scores(text: &str) -> PolarityScores {
    let raw: Vec<&str> = text.split_whitespace().collect();
    let words: Vec<String> = raw.iter().map(|w| normalize_word(w)).collect();
    let shouting_everywhere = raw.iter().filter(|w| has_letters(w)).all(|w| is_shouted(w));

    let mut sentiments: Vec<f32> = Vec::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        let Some(mut valence) = lexicon::valence(word) else {
            sentiments.push(0.0);
            continue;
        };

        if !shouting_everywhere && is_shouted(raw[i]) {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        let window = &words[i.saturating_sub(3)..i];
        for (distance, prev) in window.iter().rev().enumerate() {
            valence += modifier_scalar(prev, valence) * MODIFIER_DECAY[distance];
        }
        if window.iter().any(|w| NEGATIONS.contains(&w.as_str())) {
            valence *= NEGATION_SCALAR;
        }

        sentiments.push(valence);
    }

    apply_but_rule(&words, &mut sentiments);

    let emphasis = exclamation_emphasis(text);
    let mut sum: f32 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }

    let (positive, negative, neutral) = proportions(&sentiments, emphasis);

    PolarityScores {
        compound: normalize(sum),
        positive,
        negative,
        neutral,
    }
}

fn normalize_word(word: &str) -> String {
    word.replace('\u{2019}', "'")
        .trim_matches(|c: char| !c.is_alphabetic())
        .to_lowercase()
}

fn has_letters(raw: &str) -> bool {
    raw.chars().filter(|c| c.is_alphabetic()).count() >= 2
}

fn is_shouted(raw: &str) -> bool {
    has_letters(raw)
        && raw
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

/// Signed adjustment a booster or dampener applies to `valence`.
fn modifier_scalar(word: &str, valence: f32) -> f32 {
    let scalar = if BOOSTERS.contains(&word) {
        BOOSTER_INCREMENT
    } else if DAMPENERS.contains(&word) {
        -BOOSTER_INCREMENT
    } else {
        return 0.0;
    };
    if valence < 0.0 {
        -scalar
    } else {
        scalar
    }
}

/// Halves sentiment before the first "but" and amplifies what follows it.
fn apply_but_rule(words: &[String], sentiments: &mut [f32]) {
    let Some(pivot) = words.iter().position(|w| w == "but") else {
        return;
    };
    for (i, s) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *s *= 0.5;
        } else if i > pivot {
            *s *= 1.5;
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn exclamation_emphasis(text: &str) -> f32 {
    let count = text.matches('!').count().min(MAX_EXCLAMATIONS);
    count as f32 * EXCLAMATION_INCREMENT
}

fn normalize(sum: f32) -> f32 {
    if sum == 0.0 {
        return 0.0;
    }
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

#[allow(clippy::cast_precision_loss)]
fn proportions(sentiments: &[f32], emphasis: f32) -> (f32, f32, f32) {
    let mut pos_sum = 0.0_f32;
    let mut neg_sum = 0.0_f32;
    let mut neutral_count = 0_usize;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neutral_count += 1;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neutral_count as f32;
    if total == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    (
        pos_sum / total,
        neg_sum.abs() / total,
        neutral_count as f32 / total,
    )
}
