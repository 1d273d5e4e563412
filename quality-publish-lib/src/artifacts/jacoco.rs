use serde::Deserialize;
use strum::{Display, EnumString};

/// A JaCoCo XML `<report>`; only the report-level totals are modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JacocoReport {
    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(rename = "counter", default)]
    pub counters: Vec<Counter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Counter {
    #[serde(rename = "@type", default)]
    pub kind: String,

    #[serde(rename = "@missed", default)]
    pub missed: i64,

    #[serde(rename = "@covered", default)]
    pub covered: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum CounterType {
    Instruction,
    Branch,
    Line,
    Complexity,
    Method,
    Class,
}

impl Counter {
    #[must_use]
    pub fn new(kind: CounterType, covered: i64, missed: i64) -> Self {
        Self {
            kind: kind.to_string(),
            missed,
            covered,
        }
    }

    /// The counter type, or `None` when JaCoCo adds a type this tool does not know.
    #[must_use]
    pub fn counter_type(&self) -> Option<CounterType> {
        self.kind.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_type_roundtrip() {
        let counter = Counter::new(CounterType::Line, 10, 2);
        assert_eq!(counter.kind, "LINE");
        assert_eq!(counter.counter_type(), Some(CounterType::Line));
    }

    #[test]
    fn test_counter_type_unknown() {
        let counter = Counter {
            kind: "PATH".to_string(),
            ..Counter::default()
        };
        assert_eq!(counter.counter_type(), None);
    }
}
