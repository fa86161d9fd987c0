//! Report types produced by one analysis pass

use serde::{Serialize, Serializer};
use std::fmt;

/// Coarse asymptotic time classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeComplexity {
    Constant,
    Linear,
    Quadratic,
    /// Polynomial of the given degree (3 or higher in practice)
    Polynomial(u32),
    Exponential,
}

impl fmt::Display for TimeComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeComplexity::Constant => f.write_str("O(1)"),
            TimeComplexity::Linear => f.write_str("O(n)"),
            TimeComplexity::Quadratic => f.write_str("O(n^2)"),
            TimeComplexity::Polynomial(degree) => write!(f, "O(n^{degree})"),
            TimeComplexity::Exponential => f.write_str("O(2^n)"),
        }
    }
}

impl Serialize for TimeComplexity {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Coarse asymptotic auxiliary-space classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpaceComplexity {
    Constant,
    Linear,
}

impl fmt::Display for SpaceComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceComplexity::Constant => f.write_str("O(1)"),
            SpaceComplexity::Linear => f.write_str("O(n)"),
        }
    }
}

impl Serialize for SpaceComplexity {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A flagged source location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flag {
    pub line: usize,
    pub message: String,
}

impl Flag {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Improvement suggestion emitted alongside the classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suggestion {
    /// Nested iteration can often be replaced with hash lookups
    HashNestedIteration,
    /// Recursive call sites benefit from memoization
    Memoize,
    /// Eagerly built collections can be produced lazily
    LazySequences,
    /// Nothing structural stood out
    NoMajorComplexity,
}

impl Suggestion {
    pub fn message(&self) -> &'static str {
        match self {
            Suggestion::HashNestedIteration => "reduce nested iteration via hashing/sets",
            Suggestion::Memoize => "consider memoization or dynamic programming",
            Suggestion::LazySequences => {
                "prefer lazy sequence production over eagerly materialized collections"
            }
            Suggestion::NoMajorComplexity => "no major structural complexity detected",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Suggestion {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Four-part result of one analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub time_class: TimeComplexity,
    pub space_class: SpaceComplexity,
    pub flags: Vec<Flag>,
    pub suggestions: Vec<Suggestion>,
}

impl AnalysisReport {
    /// Serialize the report as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
