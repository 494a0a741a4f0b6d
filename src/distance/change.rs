//! Classified, position-keyed edit records.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of edit recorded at a source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Target characters inserted after the keyed source position.
    Insertion,
    /// The source character at the keyed position was removed.
    Deletion,
    /// The source character at the keyed position was replaced.
    Replacement,
    /// Part of the vocabulary only; the backtrace skips matches and never
    /// records this kind.
    Unchanged,
}

impl ChangeKind {
    /// Get the lowercase name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            ChangeKind::Insertion => "insertion",
            ChangeKind::Deletion => "deletion",
            ChangeKind::Replacement => "replacement",
            ChangeKind::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One edit at a source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Affected characters in left-to-right reading order.
    pub chars: Vec<char>,
    /// Kind of edit.
    #[serde(rename = "type")]
    pub kind: ChangeKind,
}

impl ChangeRecord {
    /// Get the affected characters joined into a string.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Edit records keyed by zero-based source position.
///
/// Insertions before the first source character are keyed at `-1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet {
    records: BTreeMap<isize, ChangeRecord>,
}

impl ChangeSet {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit at a position.
    ///
    /// The backtrace visits positions right to left, so a character recorded
    /// at an already-used position is prepended. The kind of the first record
    /// at a position is kept. `None` records the position without characters.
    pub fn record(&mut self, kind: ChangeKind, position: isize, ch: Option<char>) {
        let record = self.records.entry(position).or_insert_with(|| ChangeRecord {
            chars: Vec::new(),
            kind,
        });
        if let Some(ch) = ch {
            record.chars.insert(0, ch);
        }
    }

    /// Get the record at a position.
    pub fn get(&self, position: isize) -> Option<&ChangeRecord> {
        self.records.get(&position)
    }

    /// Number of recorded positions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in ascending position order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (isize, &ChangeRecord)> {
        self.records.iter().map(|(&position, record)| (position, record))
    }

    /// Iterate records in descending position order.
    pub fn iter_descending(&self) -> impl Iterator<Item = (isize, &ChangeRecord)> {
        self.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_prepends() {
        let mut changes = ChangeSet::new();
        changes.record(ChangeKind::Insertion, 0, Some('y'));
        changes.record(ChangeKind::Insertion, 0, Some('x'));

        assert_eq!(changes.len(), 1);
        let record = changes.get(0).unwrap();
        assert_eq!(record.chars, vec!['x', 'y']);
        assert_eq!(record.text(), "xy");
        assert_eq!(record.kind, ChangeKind::Insertion);
    }

    #[test]
    fn test_first_kind_is_kept() {
        let mut changes = ChangeSet::new();
        changes.record(ChangeKind::Insertion, 2, Some('b'));
        changes.record(ChangeKind::Replacement, 2, Some('a'));

        let record = changes.get(2).unwrap();
        assert_eq!(record.kind, ChangeKind::Insertion);
        assert_eq!(record.text(), "ab");
    }

    #[test]
    fn test_record_without_char() {
        let mut changes = ChangeSet::new();
        changes.record(ChangeKind::Insertion, 0, None);
        assert!(changes.get(0).unwrap().chars.is_empty());
    }

    #[test]
    fn test_iteration_order() {
        let mut changes = ChangeSet::new();
        changes.record(ChangeKind::Deletion, 3, Some('c'));
        changes.record(ChangeKind::Insertion, -1, Some('a'));
        changes.record(ChangeKind::Replacement, 1, Some('b'));

        let ascending: Vec<isize> = changes.iter().map(|(p, _)| p).collect();
        assert_eq!(ascending, vec![-1, 1, 3]);

        let descending: Vec<isize> = changes.iter_descending().map(|(p, _)| p).collect();
        assert_eq!(descending, vec![3, 1, -1]);
    }

    #[test]
    fn test_serialize() {
        let mut changes = ChangeSet::new();
        changes.record(ChangeKind::Replacement, 1, Some('o'));

        let json = serde_json::to_value(&changes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "1": { "chars": ["o"], "type": "replacement" } })
        );
        assert_eq!(ChangeKind::Unchanged.to_string(), "unchanged");
    }
}
