//! Type detector - majority rule over the enumerated labels with an Other fallback

use crate::config::EngineConfig;
use crate::matchers::default_matchers;
use coltype_domain::traits::ValueMatcher;
use coltype_domain::{ClassificationResult, Column, Label, LabelScore, ReferenceTables};
use tracing::debug;

/// Applies every matcher to every non-blank value of a column and picks a label
pub struct TypeDetector {
    matchers: Vec<Box<dyn ValueMatcher>>,
    min_confidence: f64,
}

impl TypeDetector {
    /// Create a detector with the standard matchers
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_matchers(default_matchers(config.phone), config.min_confidence)
    }

    /// Create a detector from an explicit, ordered matcher set
    pub fn with_matchers(matchers: Vec<Box<dyn ValueMatcher>>, min_confidence: f64) -> Self {
        Self {
            matchers,
            min_confidence,
        }
    }

    /// Classify a column
    ///
    /// Blank values are excluded from both counts. The result is `Other`
    /// when no label strictly exceeds `min_confidence` or the two strongest
    /// labels tie.
    pub fn detect(&self, column: &Column, tables: &ReferenceTables) -> ClassificationResult {
        let mut counts = vec![0usize; self.matchers.len()];
        let mut total_count = 0;

        for value in column.non_blank() {
            total_count += 1;
            for (count, matcher) in counts.iter_mut().zip(&self.matchers) {
                if matcher.matches(value, tables) {
                    *count += 1;
                }
            }
        }

        let scores: Vec<LabelScore> = self
            .matchers
            .iter()
            .zip(counts)
            .map(|(matcher, match_count)| LabelScore {
                label: matcher.label(),
                match_count,
            })
            .collect();

        let (label, match_count) = decide(&scores, total_count, self.min_confidence);

        debug!(
            column = column.name(),
            label = %label,
            match_count,
            total_count,
            "Classified column"
        );

        ClassificationResult {
            label,
            match_count,
            total_count,
            scores,
        }
    }
}

/// Rank the scores and apply the threshold and tie checks
///
/// Returns the winning label and its match count, or `Other` with the
/// strongest label's count. The ranking is stable, so equal counts keep
/// evaluation order, but equal top counts never win.
pub fn decide(scores: &[LabelScore], total_count: usize, min_confidence: f64) -> (Label, usize) {
    let mut ranked: Vec<&LabelScore> = scores.iter().collect();
    ranked.sort_by(|a, b| b.match_count.cmp(&a.match_count));

    let Some(top) = ranked.first() else {
        return (Label::Other, 0);
    };
    let runner_up = ranked.get(1).map_or(0, |s| s.match_count);

    let clears_threshold = total_count > 0 && top.ratio(total_count) > min_confidence;
    let is_unique = top.match_count > runner_up;

    if clears_threshold && is_unique {
        (top.label, top.match_count)
    } else {
        (Label::Other, top.match_count)
    }
}
