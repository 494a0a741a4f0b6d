//! Backtrace over the distance table.
//!
//! The walk starts at the bottom-right cell and moves toward the origin. At
//! each step it compares the current cell `d` with its diagonal `a`, upper `b`
//! and left `c` neighbours:
//!
//! ```text
//! | a | b |
//! +---+---+
//! | c | d |
//! ```
//!
//! The first matching rule wins: deletion (`c < d`), insertion (`b < d`),
//! replacement (`a < d`), otherwise a match. This fixed order is the
//! tie-break policy between equally optimal alignments.

use log::{debug, trace};

use crate::distance::change::{ChangeKind, ChangeSet};
use crate::distance::matrix::DistanceMatrix;
use crate::keyboard::proximity::KeyboardModel;

/// Output of the backtrace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backtrace {
    /// Matrix distance plus the proximity adjustment of every replacement.
    pub distance: usize,
    /// Classified edits keyed by source position.
    pub changes: ChangeSet,
}

/// Walk `matrix` from the end to the origin, classifying edits and
/// re-weighting replacements with `keyboard`.
///
/// Deletion requires both a non-zero row and a non-zero column. Once the walk
/// reaches the top row with columns left, the insertion rule fires without a
/// target character: an empty insertion is recorded and the cursor leaves the
/// table, so leading deletions are not reported individually.
pub fn classify(
    source: &[char],
    target: &[char],
    matrix: &DistanceMatrix,
    keyboard: &KeyboardModel,
) -> Backtrace {
    let mut distance = matrix.distance();
    let mut changes = ChangeSet::new();

    let mut row = target.len() as isize;
    let mut col = source.len() as isize;

    while row + col > 0 {
        let a = matrix.cell(row - 1, col - 1);
        let b = matrix.cell(row - 1, col);
        let c = matrix.cell(row, col - 1);
        let d = matrix.cell(row, col);

        if c < d && row > 0 && col > 0 {
            let ch = char_at(source, col - 1);
            trace!("({row}, {col}) deletion of {ch:?}");
            changes.record(ChangeKind::Deletion, col - 1, ch);
            col -= 1;
        } else if b < d {
            let ch = char_at(target, row - 1);
            trace!("({row}, {col}) insertion of {ch:?}");
            changes.record(ChangeKind::Insertion, col - 1, ch);
            row -= 1;
        } else if a < d {
            let expected = char_at(source, col - 1);
            let actual = char_at(target, row - 1);
            if let (Some(expected), Some(actual)) = (expected, actual) {
                let cost = keyboard.key_cost(expected, actual);
                trace!("({row}, {col}) replacement of {expected:?} by {actual:?}, cost {cost}");
                distance += cost - 1;
            }
            changes.record(ChangeKind::Replacement, col - 1, actual);
            row -= 1;
            col -= 1;
        } else {
            row -= 1;
            col -= 1;
        }
    }

    debug!(
        "backtrace: matrix distance {}, adjusted distance {}, {} change(s)",
        matrix.distance(),
        distance,
        changes.len()
    );

    Backtrace { distance, changes }
}

fn char_at(chars: &[char], index: isize) -> Option<char> {
    usize::try_from(index)
        .ok()
        .and_then(|i| chars.get(i))
        .copied()
}
