//! Recovers the aligned token pairs from a scored edit graph by walking
//! predecessor references from the bottom-right cell back to the origin.

use crate::aligner::EditGraphAligner;
use crate::error::AlignError;
use crate::types::{MismatchPenalty, ScoringPolicy, Token};

/// One step of the recovered alignment path.
#[derive(Debug, Clone, PartialEq)]
pub enum AlignmentOperation<'a, T> {
    /// Diagonal step over a token pair with equal values.
    Match { a: &'a T, b: &'a T },
    /// Diagonal step over a token pair whose values differ.
    Mismatch { a: &'a T, b: &'a T },
    /// Horizontal step: the token is present only in witness A.
    InsertA { a: &'a T },
    /// Vertical step: the token is present only in witness B.
    InsertB { b: &'a T },
}

impl<'a, T> AlignmentOperation<'a, T> {
    pub fn a(&self) -> Option<&'a T> {
        match self {
            AlignmentOperation::Match { a, .. }
            | AlignmentOperation::Mismatch { a, .. }
            | AlignmentOperation::InsertA { a } => Some(a),
            AlignmentOperation::InsertB { .. } => None,
        }
    }

    pub fn b(&self) -> Option<&'a T> {
        match self {
            AlignmentOperation::Match { b, .. }
            | AlignmentOperation::Mismatch { b, .. }
            | AlignmentOperation::InsertB { b } => Some(b),
            AlignmentOperation::InsertA { .. } => None,
        }
    }
}

/// The optimal alignment path, origin-first, plus its terminal score.
#[derive(Debug)]
pub struct Alignment<'a, T> {
    operations: Vec<AlignmentOperation<'a, T>>,
    score: i32,
}

impl<'a, T> Alignment<'a, T> {
    pub fn operations(&self) -> &[AlignmentOperation<'a, T>] {
        &self.operations
    }

    pub fn score(&self) -> i32 {
        self.score
    }
}

/// Aligns two witnesses with the default [`MismatchPenalty`] scoring.
pub fn align<'a, T: Token>(
    tokens_a: &'a [T],
    tokens_b: &'a [T],
) -> Result<Alignment<'a, T>, AlignError> {
    align_with(tokens_a, tokens_b, MismatchPenalty)
}

/// Aligns two witnesses with a caller-supplied scoring policy.
pub fn align_with<'a, T: Token, S: ScoringPolicy>(
    tokens_a: &'a [T],
    tokens_b: &'a [T],
    scoring: S,
) -> Result<Alignment<'a, T>, AlignError> {
    let mut aligner = EditGraphAligner::with_scoring(tokens_a, tokens_b, scoring)?;
    aligner.align();
    Ok(extract(&aligner))
}

fn extract<'a, T: Token, S: ScoringPolicy>(
    aligner: &EditGraphAligner<'a, T, S>,
) -> Alignment<'a, T> {
    let terminal = aligner.terminal();
    let mut operations = Vec::with_capacity(aligner.rows() + aligner.cols() - 1);
    let mut cell = terminal;
    loop {
        let node = aligner.node(cell.row, cell.col);
        let a = &aligner.tokens_a()[cell.col];
        let b = &aligner.tokens_b()[cell.row];
        let operation = match node.predecessor {
            // a horizontal step only advances witness A, a vertical step
            // only advances witness B; the origin counts as diagonal
            Some(p) if p.row == cell.row => AlignmentOperation::InsertA { a },
            Some(p) if p.col == cell.col => AlignmentOperation::InsertB { b },
            _ => {
                if a.value() == b.value() {
                    AlignmentOperation::Match { a, b }
                } else {
                    AlignmentOperation::Mismatch { a, b }
                }
            }
        };
        operations.push(operation);
        match node.predecessor {
            Some(p) => cell = p,
            None => break,
        }
    }
    operations.reverse();
    Alignment {
        operations,
        score: aligner.node(terminal.row, terminal.col).score,
    }
}
