/// Source of token estimates for transcript text
pub trait TokenEstimator {
    fn estimate(&self, text: &str) -> usize;
}

/// Characters per token assumed by [`CharRatioEstimator`]
pub const CHARS_PER_TOKEN: usize = 4;

/// Approximate estimator: character count divided by four
///
/// Real tokenizers disagree with this by a wide margin on non-English text and on transcripts
/// heavy with timestamps, so budgets should leave headroom.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharRatioEstimator;

impl TokenEstimator for CharRatioEstimator {
    fn estimate(&self, text: &str) -> usize {
        text.chars().count() / CHARS_PER_TOKEN
    }
}
