//! Pairwise edit-graph alignment of collation witnesses.
//!
//! Two witnesses (ordered token sequences) are scored against each other in
//! a dense dynamic-programming table. Every cell records the best cumulative
//! score for the prefix pair ending there, together with the neighboring
//! cell the score was extended from. Walking those back-references from the
//! bottom-right cell recovers the aligned token pairs.
//!
//! Tokenization happens upstream: anything implementing [`Token`] can be
//! aligned, and plain `&str` slices work out of the box.
//!
//! ```
//! use witness_align::align;
//!
//! let a = ["the", "black", "cat"];
//! let b = ["the", "cat"];
//! let alignment = align(&a, &b).unwrap();
//! assert_eq!(alignment.score(), -1);
//! ```

pub mod aligner;
pub mod error;
pub mod path;
pub mod types;

pub use aligner::{Cell, EditGraphAligner, Node};
pub use error::AlignError;
pub use path::{align, align_with, Alignment, AlignmentOperation};
pub use types::{MismatchPenalty, ScoringPolicy, Token};
