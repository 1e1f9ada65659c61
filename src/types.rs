/// An atomic unit of a witness, compared by exact value equality.
///
/// Tokens are produced by an upstream tokenizer; the aligner only ever reads
/// their textual value. No normalization or fuzzy matching is applied.
pub trait Token {
    fn value(&self) -> &str;
}

impl Token for String {
    fn value(&self) -> &str {
        self
    }
}

impl Token for &str {
    fn value(&self) -> &str {
        self
    }
}

/// Scoring rule applied per cell of the edit graph.
///
/// `predecessor_score` is the score of the highest-scoring neighbor the cell
/// extends; the origin cell extends an implicit score of zero. Swapping the
/// policy never changes which cells are visited or in what order.
pub trait ScoringPolicy {
    fn score(&self, matched: bool, predecessor_score: i32) -> i32;
}

/// Demonstration scoring: a match keeps the predecessor score, a mismatch
/// pays a flat -1. Matches are deliberately not rewarded with a positive
/// increment, and runs of matches are not distinguished from fresh ones.
// TODO: a run-aware policy (+1/+2 on match, -1/-2 on mismatch depending on
// whether the predecessor step matched) once the variant-graph builder can
// consume it.
#[derive(Debug, Default, Clone, Copy)]
pub struct MismatchPenalty;

impl ScoringPolicy for MismatchPenalty {
    fn score(&self, matched: bool, predecessor_score: i32) -> i32 {
        if matched {
            predecessor_score
        } else {
            predecessor_score - 1
        }
    }
}
