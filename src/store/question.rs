use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Difficulty or category tag of a question.
///
/// Numbers compare by numeric value (`1` equals `1.0`) and never equal a
/// text (`1` is not `"1"`). Numbers sort before texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Level {
    Number(Number),
    Text(String),
}

impl Level {
    pub fn int(n: i64) -> Self {
        Level::Number(Number::from(n))
    }

    /// `None` for NaN and infinities.
    pub fn float(f: f64) -> Option<Self> {
        Number::from_f64(f).map(Level::Number)
    }

    /// Reads a level from user input: numbers become `Number`, anything else `Text`.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if let Ok(n) = input.parse::<i64>() {
            return Level::int(n);
        }
        match input.parse::<f64>().ok().and_then(Level::float) {
            Some(level) => level,
            None => Level::Text(input.to_string()),
        }
    }

    /// Level held by a raw JSON value, if it is a number or a string.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Level::Number(n.clone())),
            Value::String(s) => Some(Level::Text(s.clone())),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Level::Number(n) => Value::Number(n.clone()),
            Level::Text(s) => Value::String(s.clone()),
        }
    }
}

/// Numeric value used for comparison, with `-0.0` folded into `0.0`.
fn numeric(n: &Number) -> f64 {
    let f = n.as_f64().unwrap_or_default();
    if f == 0.0 {
        0.0
    } else {
        f
    }
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Level {}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Level::Number(n) => {
                0u8.hash(state);
                numeric(n).to_bits().hash(state);
            }
            Level::Text(s) => {
                1u8.hash(state);
                s.hash(state);
            }
        }
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Level::Number(a), Level::Number(b)) => numeric(a).total_cmp(&numeric(b)),
            (Level::Text(a), Level::Text(b)) => a.cmp(b),
            (Level::Number(_), Level::Text(_)) => Ordering::Less,
            (Level::Text(_), Level::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Number(n) => write!(f, "{}", n),
            Level::Text(s) => f.write_str(s),
        }
    }
}

impl From<Number> for Level {
    fn from(n: Number) -> Self {
        Level::Number(n)
    }
}

impl From<&str> for Level {
    fn from(s: &str) -> Self {
        Level::Text(s.to_string())
    }
}

impl From<String> for Level {
    fn from(s: String) -> Self {
        Level::Text(s)
    }
}

/// A quiz question.
///
/// The record is kept exactly as received; `level` is read from its
/// `level` field. A missing, `null` or non-scalar level leaves the question
/// in place with no level, so it never matches a level filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Question {
    level: Option<Level>,
    fields: Map<String, Value>,
}

impl Question {
    pub fn new(level: impl Into<Level>) -> Self {
        let level = level.into();
        let mut fields = Map::new();
        fields.insert("level".to_string(), level.to_json());
        Self {
            level: Some(level),
            fields,
        }
    }

    /// Adds a pass-through field. Setting `level` updates the question's level.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if key == "level" {
            self.level = Level::from_json(&value);
        }
        self.fields.insert(key, value);
        self
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn is_level(&self, level: &Level) -> bool {
        self.level.as_ref() == Some(level)
    }
}

impl From<Map<String, Value>> for Question {
    fn from(fields: Map<String, Value>) -> Self {
        let level = fields.get("level").and_then(Level::from_json);
        Self { level, fields }
    }
}

impl From<Question> for Map<String, Value> {
    fn from(question: Question) -> Self {
        question.fields
    }
}

/// Reads questions from an arbitrary JSON value.
///
/// Returns `None` when `value` is not an array. Elements that are not JSON
/// objects are dropped.
pub fn questions_from_value(value: Value) -> Option<Vec<Question>> {
    let Value::Array(items) = value else {
        return None;
    };

    let total = items.len();
    let questions: Vec<Question> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(fields) => Some(Question::from(fields)),
            _ => None,
        })
        .collect();

    if questions.len() < total {
        tracing::debug!(
            dropped = total - questions.len(),
            kept = questions.len(),
            "Skipped non-object question entries"
        );
    }

    Some(questions)
}
