//! Classification result module

use crate::Label;

/// Number of values one label's matcher accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelScore {
    /// Label whose matcher was applied
    pub label: Label,
    /// Non-blank values the matcher accepted
    pub match_count: usize,
}

impl LabelScore {
    /// Fraction of `total_count` this label matched (0.0 when total is zero)
    pub fn ratio(&self, total_count: usize) -> f64 {
        if total_count == 0 {
            0.0
        } else {
            self.match_count as f64 / total_count as f64
        }
    }
}

/// Outcome of classifying one column
///
/// `match_count <= total_count` always holds. `total_count` counts non-blank
/// values only, so it is zero for a column with nothing but blanks (which is
/// always `Other`). For an `Other` result, `match_count` is the count of the
/// strongest label that failed to win.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// Winning label, or `Other`
    pub label: Label,
    /// Values matched by the winning (or strongest) label
    pub match_count: usize,
    /// Non-blank values considered
    pub total_count: usize,
    /// Per-label match counts, in evaluation order
    pub scores: Vec<LabelScore>,
}

impl ClassificationResult {
    /// Ratio of matched to considered values
    pub fn confidence(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.match_count as f64 / self.total_count as f64
        }
    }

    /// Whether a concrete label (anything but `Other`) won
    pub fn is_confident(&self) -> bool {
        self.label != Label::Other
    }

    /// Match count recorded for a label, if it was evaluated
    pub fn score_for(&self, label: Label) -> Option<usize> {
        self.scores
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.match_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(label: Label, match_count: usize, total_count: usize) -> ClassificationResult {
        ClassificationResult {
            label,
            match_count,
            total_count,
            scores: vec![LabelScore {
                label: Label::PhoneNumber,
                match_count,
            }],
        }
    }

    #[test]
    fn test_confidence() {
        assert_eq!(result(Label::PhoneNumber, 3, 4).confidence(), 0.75);
        assert_eq!(result(Label::Other, 0, 0).confidence(), 0.0);
    }

    #[test]
    fn test_is_confident() {
        assert!(result(Label::PhoneNumber, 4, 4).is_confident());
        assert!(!result(Label::Other, 1, 4).is_confident());
    }

    #[test]
    fn test_score_lookup() {
        let r = result(Label::PhoneNumber, 2, 2);
        assert_eq!(r.score_for(Label::PhoneNumber), Some(2));
        assert_eq!(r.score_for(Label::Date), None);
    }

    #[test]
    fn test_label_score_ratio_with_zero_total() {
        let score = LabelScore {
            label: Label::Date,
            match_count: 0,
        };
        assert_eq!(score.ratio(0), 0.0);
    }
}
