use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer for learning goals that accepts a list of strings or a single string
///
/// Older project files store an empty string before any goal is set, and hand-edited files
/// often hold one goal per line in a single string.
pub fn deserialize_learning_goals<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(s) => Ok(s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.trim().to_string()),
                other => Err(Error::custom(format!("learning goal must be a string, got {}", other))),
            })
            .filter(|goal| !matches!(goal, Ok(s) if s.is_empty()))
            .collect(),
        _ => Err(Error::custom("learning_goals must be a string or a list of strings")),
    }
}
