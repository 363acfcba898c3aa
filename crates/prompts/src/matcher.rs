//! Choice recognition: scores free text against a closed list of choices.
//!
//! ## Scoring
//!
//! For every choice, each label (display value, synonyms, action value) is tokenized and compared
//! with the tokenized input:
//!
//! - identical token sequences score 1.0 (exact);
//! - otherwise the score is `input tokens found in the label / label tokens`, capped at 1.0;
//! - a single numeric token `n` scores 1.0 for the choice at 1-based position `n` (ordinal).
//!
//! Scores below the threshold are dropped. The best candidate wins; at equal score an exact label
//! beats an ordinal, which beats a token overlap. Candidates still tied are ambiguous and nothing
//! is recognized. Choices whose display value repeats an earlier one (after normalization) are
//! skipped, so the first occurrence wins.

use tracing::debug;

use crate::choice::{Choice, FoundChoice};
use crate::tokenizer::tokenize;

/// Minimum score a candidate needs to be recognized.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Outcome of matching one reply against a choice list.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// Exactly one best candidate cleared the threshold.
    Matched(FoundChoice),
    /// Text missing, empty, or punctuation only.
    NoInput,
    /// Text present but no choice cleared the threshold.
    NoMatch,
    /// Two or more choices tied at the top; holds their indices in list order.
    Ambiguous(Vec<usize>),
}

impl MatchOutcome {
    /// The recognized choice, if any. `NoInput`, `NoMatch`, and `Ambiguous` all yield `None`.
    pub fn found(self) -> Option<FoundChoice> {
        match self {
            MatchOutcome::Matched(found) => Some(found),
            _ => None,
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            MatchOutcome::Matched(_) => "matched",
            MatchOutcome::NoInput => "no_input",
            MatchOutcome::NoMatch => "no_match",
            MatchOutcome::Ambiguous(_) => "ambiguous",
        }
    }
}

/// How a label matched; breaks ties between equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchKind {
    Overlap,
    Ordinal,
    Exact,
}

#[derive(Debug, Clone)]
struct Candidate {
    index: usize,
    score: f32,
    kind: MatchKind,
    label: String,
}

impl Candidate {
    fn outranks(&self, other: &Candidate) -> bool {
        self.score > other.score || (self.score == other.score && self.kind > other.kind)
    }

    fn ties(&self, other: &Candidate) -> bool {
        self.score == other.score && self.kind == other.kind
    }
}

/// Scores one label against the input tokens. Returns `None` when nothing overlaps.
fn score_label(input: &[String], label: &str) -> Option<(f32, MatchKind)> {
    let label_tokens = tokenize(label);
    if label_tokens.is_empty() {
        return None;
    }
    if label_tokens == input {
        return Some((1.0, MatchKind::Exact));
    }
    let matched = input.iter().filter(|t| label_tokens.contains(t)).count();
    if matched == 0 {
        return None;
    }
    let score = (matched as f32 / label_tokens.len() as f32).min(1.0);
    Some((score, MatchKind::Overlap))
}

/// Parses a lone numeric token as a 1-based position within `len` choices.
fn ordinal_position(input: &[String], len: usize) -> Option<usize> {
    match input {
        [only] => only
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=len).contains(n))
            .map(|n| n - 1),
        _ => None,
    }
}

/// Display value as compared for duplicates: its tokens, or the trimmed lowercase value when it
/// has none (punctuation-only labels), so distinct token-less labels never collapse together.
fn dedup_key(value: &str) -> Vec<String> {
    let tokens = tokenize(value);
    if tokens.is_empty() {
        vec![value.trim().to_lowercase()]
    } else {
        tokens
    }
}

/// Matches `text` against `choices` with the given acceptance `threshold`.
pub fn match_choice(text: Option<&str>, choices: &[Choice], threshold: f32) -> MatchOutcome {
    let input = tokenize(text.unwrap_or_default());
    if input.is_empty() {
        return MatchOutcome::NoInput;
    }
    if choices.is_empty() {
        return MatchOutcome::NoMatch;
    }

    // Each position maps to the first choice sharing its normalized display value.
    let normalized: Vec<Vec<String>> = choices.iter().map(|c| dedup_key(&c.value)).collect();
    let canonical: Vec<usize> = normalized
        .iter()
        .enumerate()
        .map(|(i, n)| normalized[..i].iter().position(|m| m == n).unwrap_or(i))
        .collect();
    let ordinal = ordinal_position(&input, choices.len()).map(|i| canonical[i]);

    let mut best: Vec<Candidate> = Vec::new();
    for (index, choice) in choices.iter().enumerate() {
        if canonical[index] != index {
            debug!(index, value = %choice.value, "skipping duplicate choice");
            continue;
        }

        let mut top: Option<Candidate> = None;
        if ordinal == Some(index) {
            top = Some(Candidate {
                index,
                score: 1.0,
                kind: MatchKind::Ordinal,
                label: input[0].clone(),
            });
        }
        for label in choice.labels() {
            if let Some((score, kind)) = score_label(&input, label) {
                let candidate = Candidate {
                    index,
                    score,
                    kind,
                    label: label.to_string(),
                };
                if top.as_ref().map_or(true, |t| candidate.outranks(t)) {
                    top = Some(candidate);
                }
            }
        }

        let Some(candidate) = top.filter(|c| c.score >= threshold) else {
            continue;
        };
        match best.first() {
            Some(current) if candidate.outranks(current) => best = vec![candidate],
            Some(current) if candidate.ties(current) => best.push(candidate),
            Some(_) => {}
            None => best.push(candidate),
        }
    }

    match best.len() {
        0 => MatchOutcome::NoMatch,
        1 => {
            let winner = best.remove(0);
            MatchOutcome::Matched(FoundChoice {
                value: choices[winner.index].value.clone(),
                index: winner.index,
                score: winner.score,
                synonym: winner.label,
            })
        }
        _ => MatchOutcome::Ambiguous(best.iter().map(|c| c.index).collect()),
    }
}

/// Matches with [`DEFAULT_THRESHOLD`] and returns only the recognized choice.
pub fn find_choice(text: &str, choices: &[Choice]) -> Option<FoundChoice> {
    match_choice(Some(text), choices, DEFAULT_THRESHOLD).found()
}
