//! Unweighted edit distance table.

use std::cmp::min;

/// Classic Levenshtein table between a source and a target.
///
/// `cell(i, j)` is the edit distance between the first `j` characters of the
/// source and the first `i` characters of the target, so the table has
/// `target.len() + 1` rows and `source.len() + 1` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    cells: Vec<Vec<usize>>,
}

impl DistanceMatrix {
    /// Build the table with unit cost for insertion, deletion and substitution.
    #[allow(clippy::needless_range_loop)]
    pub fn build(source: &[char], target: &[char]) -> Self {
        let rows = target.len();
        let cols = source.len();

        let mut cells = vec![vec![0; cols + 1]; rows + 1];

        // Initialize first row and column
        for i in 0..=rows {
            cells[i][0] = i;
        }
        for j in 0..=cols {
            cells[0][j] = j;
        }

        for i in 1..=rows {
            for j in 1..=cols {
                let cost = if source[j - 1] == target[i - 1] { 0 } else { 1 };

                cells[i][j] = min(
                    min(
                        cells[i - 1][j] + 1, // insertion
                        cells[i][j - 1] + 1, // deletion
                    ),
                    cells[i - 1][j - 1] + cost, // substitution
                );
            }
        }

        DistanceMatrix { cells }
    }

    /// Number of rows (target length + 1).
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns (source length + 1).
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Read a cell. Coordinates outside the table read as `0`.
    pub fn cell(&self, row: isize, col: isize) -> usize {
        if row < 0 || col < 0 {
            return 0;
        }
        self.cells
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .unwrap_or(0)
    }

    /// The unweighted distance between the full source and target.
    pub fn distance(&self) -> usize {
        self.cells
            .last()
            .and_then(|row| row.last())
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_distance() {
        let cases = [
            ("", "", 0),
            ("", "abc", 3),
            ("abc", "", 3),
            ("a", "a", 0),
            ("ab", "ac", 1),
            ("abc", "def", 3),
            ("kitten", "sitting", 3),
            ("search", "serach", 2),
        ];

        for (source, target, expected) in cases {
            let matrix = DistanceMatrix::build(&chars(source), &chars(target));
            assert_eq!(
                matrix.distance(),
                expected,
                "distance between {source:?} and {target:?}"
            );
        }
    }

    #[test]
    fn test_dimensions_and_borders() {
        let matrix = DistanceMatrix::build(&chars("cat"), &chars("coats"));
        assert_eq!(matrix.rows(), 6);
        assert_eq!(matrix.cols(), 4);

        for j in 0..4 {
            assert_eq!(matrix.cell(0, j), j as usize);
        }
        for i in 0..6 {
            assert_eq!(matrix.cell(i, 0), i as usize);
        }
    }

    #[test]
    fn test_out_of_bounds_reads_zero() {
        let matrix = DistanceMatrix::build(&chars("ab"), &chars("xy"));
        assert_eq!(matrix.cell(-1, 0), 0);
        assert_eq!(matrix.cell(0, -1), 0);
        assert_eq!(matrix.cell(3, 0), 0);
        assert_eq!(matrix.cell(0, 3), 0);
        assert_eq!(matrix.cell(2, 2), 2);
    }
}
