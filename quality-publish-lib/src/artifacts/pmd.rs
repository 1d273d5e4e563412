use serde::Deserialize;

/// A PMD `<pmd>` report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PmdReport {
    #[serde(rename = "file", default)]
    pub files: Vec<PmdFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PmdFile {
    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(rename = "violation", default)]
    pub violations: Vec<PmdViolation>,
}

/// A single rule violation; PMD priorities run from 1 (highest) to 5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PmdViolation {
    #[serde(rename = "@priority", default)]
    pub priority: i64,
}

impl PmdViolation {
    #[must_use]
    pub const fn new(priority: i64) -> Self {
        Self { priority }
    }
}
