use core::fmt;

/// Numeric payload of a metric.
///
/// Counters are exact integers and take part in additive merging. Ratios are
/// derived percentages that are recomputed rather than merged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(i64),
    Ratio(f64),
}

impl MetricValue {
    /// Add a partial counter contribution, saturating at the `i64` bounds.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "counter contributions are far below 2^52")]
    pub fn accumulate(self, partial: i64) -> Self {
        match self {
            Self::Count(v) => Self::Count(v.saturating_add(partial)),
            Self::Ratio(r) => Self::Ratio(r + partial as f64),
        }
    }

    /// The counter value, if this is a counter.
    #[must_use]
    pub const fn as_count(self) -> Option<i64> {
        match self {
            Self::Count(v) => Some(v),
            Self::Ratio(_) => None,
        }
    }

    /// Human-readable rendering: integers as-is, ratios with three decimals.
    #[must_use]
    pub fn formatted(self) -> String {
        match self {
            Self::Count(v) => v.to_string(),
            Self::Ratio(r) => format!("{r:.3}"),
        }
    }
}

/// Exact decimal encoding used on the wire.
///
/// Ratios always carry a fractional part (`75.0`, `66.66666666666667`).
impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(v) => write!(f, "{v}"),
            Self::Ratio(r) => write!(f, "{r:?}"),
        }
    }
}
