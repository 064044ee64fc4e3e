use std::fmt;

use serde::{Deserialize, Serialize};

const LABEL_PREFIX: &str = "[Learning Goal";

/// A question every analysis must address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningGoal {
    pub index: usize,
    pub content: String,
}

impl LearningGoal {
    pub fn new(index: usize, content: impl Into<String>) -> Self {
        Self { index, content: content.into() }
    }

    /// Number goals 1..=n in the order given
    pub fn from_contents<I, S>(contents: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        contents.into_iter().enumerate().map(|(i, content)| Self::new(i + 1, content)).collect()
    }

    /// The bracketed label the model must echo back, e.g. `[Learning Goal 3]`
    pub fn label(&self) -> String {
        label_for(self.index)
    }
}

/// Canonical wire label for a goal index
pub fn label_for(index: usize) -> String {
    format!("{} {}]", LABEL_PREFIX, index)
}

impl fmt::Display for LearningGoal {
    /// Renders the `"<index>. <content>"` line embedded in prompts
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.index, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_format() {
        let goal = LearningGoal::new(3, "Why do customers churn?");
        assert_eq!(goal.label(), "[Learning Goal 3]");
    }

    #[test]
    fn test_from_contents_numbers_from_one() {
        let goals = LearningGoal::from_contents(["first", "second"]);
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].index, 1);
        assert_eq!(goals[1].index, 2);
        assert_eq!(goals[1].content, "second");
    }

    #[test]
    fn test_display_line() {
        let goal = LearningGoal::new(2, "What tools do they use?");
        assert_eq!(goal.to_string(), "2. What tools do they use?");
    }
}
