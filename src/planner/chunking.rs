use serde::Serialize;

use crate::models::TranscriptUnit;

/// An ordered, non-empty group of transcripts analyzed in one model call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    units: Vec<TranscriptUnit>,
    total_tokens: usize,
}

impl Chunk {
    fn start(unit: TranscriptUnit) -> Self {
        let total_tokens = unit.estimated_tokens;
        Self { units: vec![unit], total_tokens }
    }

    fn push(&mut self, unit: TranscriptUnit) {
        self.total_tokens += unit.estimated_tokens;
        self.units.push(unit);
    }

    pub fn units(&self) -> &[TranscriptUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    /// A single transcript that alone exceeds the budget
    pub fn is_oversized_singleton(&self, budget: usize) -> bool {
        self.units.len() == 1 && self.total_tokens > budget
    }

    pub fn ordinals(&self) -> Vec<usize> {
        self.units.iter().map(|u| u.ordinal).collect()
    }

    /// Concatenate member transcripts under per-interview headers
    pub fn text(&self) -> String {
        let capacity: usize = self.units.iter().map(|u| u.text.len() + u.interview.len() + 32).sum();
        let mut text = String::with_capacity(capacity);
        for unit in &self.units {
            if !text.is_empty() {
                text.push_str("\n\n");
            }
            text.push_str(&format!("=== Interview {}: {} ===\n", unit.ordinal, unit.interview));
            text.push_str(unit.text.trim_end());
        }
        text
    }
}

/// Group transcripts into token-bounded chunks with a single sequential greedy pass
///
/// Every chunk stays within `budget` except a chunk holding exactly one transcript whose own
/// estimate already exceeds it. Input order is preserved across and within chunks.
///
/// # Examples
///
/// ```
/// use qr_ai::models::TranscriptUnit;
/// use qr_ai::planner::plan_chunks;
///
/// let units = [30, 40, 50, 10]
///     .iter()
///     .enumerate()
///     .map(|(i, t)| TranscriptUnit::new(i + 1, format!("interview-{}", i + 1), "").with_tokens(*t));
///
/// let chunks = plan_chunks(units, 100);
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].total_tokens(), 70);
/// assert_eq!(chunks[1].total_tokens(), 60);
/// ```
pub fn plan_chunks<I>(transcripts: I, budget: usize) -> Vec<Chunk>
where
    I: IntoIterator<Item = TranscriptUnit>,
{
    let mut chunks = Vec::new();
    let mut open: Option<Chunk> = None;

    for unit in transcripts {
        open = Some(match open.take() {
            Some(chunk) if chunk.total_tokens + unit.estimated_tokens > budget => {
                chunks.push(chunk);
                Chunk::start(unit)
            }
            Some(mut chunk) => {
                chunk.push(unit);
                chunk
            }
            None => Chunk::start(unit),
        });
    }

    if let Some(chunk) = open {
        chunks.push(chunk);
    }

    chunks
}
