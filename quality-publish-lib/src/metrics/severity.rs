use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Escalation status attached to every metric.
///
/// Variants are declared in ascending order so the derived `Ord` matches the
/// escalation lattice: `Ok < Warning < Alert`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, Display, Deserialize, Serialize)]
pub enum Severity {
    #[default]
    Ok,
    Warning,
    Alert,
}

impl Severity {
    /// Combine two observations of the same metric, never de-escalating.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// `Ok` for zero, otherwise `escalated`.
    #[must_use]
    pub fn when_nonzero(count: i64, escalated: Self) -> Self {
        if count > 0 { escalated } else { Self::Ok }
    }
}
