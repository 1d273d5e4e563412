use super::Severity;
use std::collections::BTreeMap;

/// The partial metric contribution of a single report.
///
/// Produced by a visitor and consumed immediately by
/// [`QualityResult::merge`](super::QualityResult::merge).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricDelta {
    entries: BTreeMap<&'static str, (i64, Severity)>,
}

impl MetricDelta {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A delta with every name present at `(0, Ok)`.
    #[must_use]
    pub fn zeroed(names: &[&'static str]) -> Self {
        Self {
            entries: names.iter().map(|&name| (name, (0, Severity::Ok))).collect(),
        }
    }

    /// Set `name` to an exact value, replacing any previous contribution.
    pub fn set(&mut self, name: &'static str, value: i64, severity: Severity) {
        _ = self.entries.insert(name, (value, severity));
    }

    /// Count one more occurrence for `name`, escalating its severity to at least `severity`.
    pub fn increment(&mut self, name: &'static str, severity: Severity) {
        let entry = self.entries.entry(name).or_insert((0, Severity::Ok));
        entry.0 += 1;
        entry.1 = entry.1.merge(severity);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<(i64, Severity)> {
        self.entries.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, i64, Severity)> + '_ {
        self.entries.iter().map(|(&name, &(value, severity))| (name, value, severity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed() {
        let delta = MetricDelta::zeroed(&["a", "b"]);
        assert_eq!(delta.len(), 2);
        assert_eq!(delta.get("a"), Some((0, Severity::Ok)));
        assert_eq!(delta.get("b"), Some((0, Severity::Ok)));
    }

    #[test]
    fn test_set_overwrites() {
        let mut delta = MetricDelta::new();
        delta.set("a", 10, Severity::Alert);
        delta.set("a", 5, Severity::Ok);
        assert_eq!(delta.get("a"), Some((5, Severity::Ok)));
    }

    #[test]
    fn test_increment_escalates() {
        let mut delta = MetricDelta::zeroed(&["a"]);
        delta.increment("a", Severity::Warning);
        delta.increment("a", Severity::Ok);
        assert_eq!(delta.get("a"), Some((2, Severity::Warning)));
    }

    #[test]
    fn test_increment_missing_name_inserts() {
        let mut delta = MetricDelta::new();
        assert!(delta.is_empty());
        delta.increment("x", Severity::Alert);
        assert_eq!(delta.get("x"), Some((1, Severity::Alert)));
    }

    #[test]
    fn test_iter_is_ordered_by_name() {
        let mut delta = MetricDelta::new();
        delta.set("z", 1, Severity::Ok);
        delta.set("a", 2, Severity::Ok);
        let names: Vec<_> = delta.iter().map(|(name, _, _)| name).collect();
        assert_eq!(names, vec!["a", "z"]);
    }
}
