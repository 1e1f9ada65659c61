use log::{debug, trace};

use crate::error::AlignError;
use crate::types::{MismatchPenalty, ScoringPolicy, Token};

/// Coordinate of one cell in the alignment table. Rows follow witness B,
/// columns follow witness A.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Anti-diagonal index; all of a cell's dependencies live on strictly
    /// smaller diagonals.
    pub fn diagonal(&self) -> usize {
        self.row + self.col
    }
}

/// One cell of the edit graph: the best cumulative score for the prefix pair
/// ending here, and the neighbor that score was extended from. The origin
/// cell and unscored cells carry no predecessor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Node {
    pub score: i32,
    pub predecessor: Option<Cell>,
}

/// Scores the full edit graph between two witnesses.
///
/// Every possible prefix combination is considered, so this is the reference
/// scorer a faster aligner has to agree with, not the fast path. The table
/// is written once per cell during [`align`](EditGraphAligner::align) and is
/// read-only afterwards.
pub struct EditGraphAligner<'a, T, S = MismatchPenalty> {
    tokens_a: &'a [T],
    tokens_b: &'a [T],
    rows: usize,
    cols: usize,
    scoring: S,
    table: Vec<Node>,
}

impl<'a, T: Token> EditGraphAligner<'a, T> {
    /// Builds an aligner with the default [`MismatchPenalty`] scoring.
    pub fn new(tokens_a: &'a [T], tokens_b: &'a [T]) -> Result<Self, AlignError> {
        Self::with_scoring(tokens_a, tokens_b, MismatchPenalty)
    }
}

impl<'a, T: Token, S: ScoringPolicy> EditGraphAligner<'a, T, S> {
    /// Builds an aligner with a caller-supplied scoring policy.
    ///
    /// Both witnesses must contain at least one token; a zero-area table is
    /// rejected before anything is allocated.
    pub fn with_scoring(
        tokens_a: &'a [T],
        tokens_b: &'a [T],
        scoring: S,
    ) -> Result<Self, AlignError> {
        if tokens_a.is_empty() {
            return Err(AlignError::EmptyWitnessA);
        }
        if tokens_b.is_empty() {
            return Err(AlignError::EmptyWitnessB);
        }
        let rows = tokens_b.len();
        let cols = tokens_a.len();
        Ok(EditGraphAligner {
            tokens_a,
            tokens_b,
            rows,
            cols,
            scoring,
            table: vec![Node::default(); rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tokens_a(&self) -> &'a [T] {
        self.tokens_a
    }

    pub fn tokens_b(&self) -> &'a [T] {
        self.tokens_b
    }

    pub fn node(&self, row: usize, col: usize) -> &Node {
        &self.table[row * self.cols + col]
    }

    /// Bottom-right cell; the starting point for path reconstruction.
    pub fn terminal(&self) -> Cell {
        Cell {
            row: self.rows - 1,
            col: self.cols - 1,
        }
    }

    /// Scores every cell of the table exactly once.
    pub fn align(&mut self) {
        self.traverse_diagonally();
        debug!(
            "scored {}x{} edit graph, terminal score {}",
            self.rows,
            self.cols,
            self.node(self.rows - 1, self.cols - 1).score
        );
    }

    // Cells are grouped by anti-diagonal so that each cell's up, left and
    // diagonal neighbors are finalized before the cell itself is scored.
    // Cells within one diagonal are mutually independent.
    fn traverse_diagonally(&mut self) {
        for d in 0..self.rows + self.cols - 1 {
            let first_col = (d + 1).saturating_sub(self.rows);
            let last_col = d.min(self.cols - 1);
            trace!("diagonal {d}: cols {first_col}..={last_col}");
            for col in first_col..=last_col {
                self.score_cell(d - col, col);
            }
        }
    }

    fn score_cell(&mut self, row: usize, col: usize) {
        let matched = self.tokens_a[col].value() == self.tokens_b[row].value();
        let node = if row == 0 && col == 0 {
            // The origin extends an implicit zero score and has no
            // predecessor by definition.
            Node {
                score: self.scoring.score(matched, 0),
                predecessor: None,
            }
        } else {
            let predecessor = self.best_neighbor(row, col);
            Node {
                score: self.scoring.score(matched, self.node_at(predecessor).score),
                predecessor: Some(predecessor),
            }
        };
        self.table[row * self.cols + col] = node;
    }

    /// Highest-scoring existing neighbor. Ties are resolved by a fixed
    /// priority: diagonal, then up, then left.
    fn best_neighbor(&self, row: usize, col: usize) -> Cell {
        let diagonal = (row > 0 && col > 0).then(|| Cell {
            row: row - 1,
            col: col - 1,
        });
        let up = (row > 0).then(|| Cell { row: row - 1, col });
        let left = (col > 0).then(|| Cell { row, col: col - 1 });

        let mut best: Option<Cell> = None;
        for candidate in [diagonal, up, left].into_iter().flatten() {
            let better = match best {
                Some(current) => self.node_at(candidate).score > self.node_at(current).score,
                None => true,
            };
            if better {
                best = Some(candidate);
            }
        }
        match best {
            Some(cell) => cell,
            // Every non-origin cell has a neighbor on an earlier diagonal;
            // reaching this means the traversal order is broken.
            None => unreachable!("cell ({row}, {col}) has no scored neighbor"),
        }
    }

    fn node_at(&self, cell: Cell) -> &Node {
        self.node(cell.row, cell.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligned<'a>(a: &'a [&'a str], b: &'a [&'a str]) -> EditGraphAligner<'a, &'a str> {
        let mut aligner = EditGraphAligner::new(a, b).unwrap();
        aligner.align();
        aligner
    }

    #[test]
    fn empty_witness_is_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(
            EditGraphAligner::new(&empty[..], &["a"][..]).err(),
            Some(AlignError::EmptyWitnessA)
        );
        assert_eq!(
            EditGraphAligner::new(&["a"][..], &empty[..]).err(),
            Some(AlignError::EmptyWitnessB)
        );
    }

    #[test]
    fn table_dimensions_follow_the_witnesses() {
        let aligner = aligned(&["a", "b", "c", "d"], &["x", "y", "z"]);
        assert_eq!(aligner.rows(), 3);
        assert_eq!(aligner.cols(), 4);
        assert_eq!(aligner.terminal(), Cell { row: 2, col: 3 });
    }

    #[test]
    fn single_matching_pair() {
        let aligner = aligned(&["a"], &["a"]);
        assert_eq!(aligner.node(0, 0).score, 0);
        assert_eq!(aligner.node(0, 0).predecessor, None);
    }

    #[test]
    fn single_mismatching_pair() {
        let aligner = aligned(&["a"], &["b"]);
        assert_eq!(aligner.node(0, 0).score, -1);
        assert_eq!(aligner.node(0, 0).predecessor, None);
    }

    #[test]
    fn identical_witnesses_trace_the_main_diagonal() {
        let aligner = aligned(&["a", "b", "c"], &["a", "b", "c"]);
        assert_eq!(aligner.node(2, 2).score, 0);
        assert_eq!(aligner.node(2, 2).predecessor, Some(Cell { row: 1, col: 1 }));
        assert_eq!(aligner.node(1, 1).score, 0);
        assert_eq!(aligner.node(1, 1).predecessor, Some(Cell { row: 0, col: 0 }));
        assert_eq!(aligner.node(0, 0).predecessor, None);
    }

    #[test]
    fn match_then_mismatch() {
        let aligner = aligned(&["a", "x"], &["a", "y"]);
        assert_eq!(aligner.node(0, 0).score, 0);
        assert_eq!(aligner.node(0, 1).score, -1);
        assert_eq!(aligner.node(0, 1).predecessor, Some(Cell { row: 0, col: 0 }));
        assert_eq!(aligner.node(1, 0).score, -1);
        assert_eq!(aligner.node(1, 0).predecessor, Some(Cell { row: 0, col: 0 }));
        // best path to the terminal still passes through the initial match
        assert_eq!(aligner.node(1, 1).score, -1);
        assert_eq!(aligner.node(1, 1).predecessor, Some(Cell { row: 0, col: 0 }));
    }

    #[test]
    fn ties_prefer_the_diagonal_neighbor() {
        // all three neighbors of the terminal score -1
        let aligner = aligned(&["p", "q"], &["q", "p"]);
        assert_eq!(aligner.node(0, 1).score, -1);
        assert_eq!(aligner.node(1, 0).score, -1);
        assert_eq!(aligner.node(1, 1).predecessor, Some(Cell { row: 0, col: 0 }));
    }

    #[test]
    fn every_cell_is_scored_from_an_earlier_diagonal() {
        let aligner = aligned(&["a", "b", "c", "d"], &["e", "f", "g"]);
        for row in 0..aligner.rows() {
            for col in 0..aligner.cols() {
                let here = Cell { row, col };
                let node = aligner.node(row, col);
                if row == 0 && col == 0 {
                    assert_eq!(node.predecessor, None);
                    continue;
                }
                let predecessor = node.predecessor.expect("non-origin cell was not scored");
                assert!(predecessor.row + 1 >= row && predecessor.row <= row);
                assert!(predecessor.col + 1 >= col && predecessor.col <= col);
                assert!(predecessor.diagonal() < here.diagonal());
            }
        }
    }

    #[test]
    fn mismatches_pay_one_and_matches_plateau() {
        let a = ["the", "quick", "fox"];
        let b = ["the", "slow", "fox"];
        let aligner = aligned(&a, &b);
        for row in 0..aligner.rows() {
            for col in 0..aligner.cols() {
                let node = aligner.node(row, col);
                let Some(predecessor) = node.predecessor else {
                    continue;
                };
                let base = aligner.node(predecessor.row, predecessor.col).score;
                if a[col] == b[row] {
                    assert_eq!(node.score, base);
                } else {
                    assert_eq!(node.score, base - 1);
                }
            }
        }
    }

    #[test]
    fn all_distinct_tokens_score_strictly_negative() {
        let aligner = aligned(&["a", "b", "c", "d"], &["e", "f", "g"]);
        for row in 0..aligner.rows() {
            for col in 0..aligner.cols() {
                assert!(aligner.node(row, col).score < 0);
            }
        }
    }
}
