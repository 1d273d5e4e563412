use serde::Deserialize;

/// A Checkstyle `<checkstyle>` report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckstyleReport {
    #[serde(rename = "file", default)]
    pub files: Vec<CheckstyleFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckstyleFile {
    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(rename = "error", default)]
    pub errors: Vec<CheckstyleError>,
}

/// One reported problem. Checkstyle writes `error`, `warning`, `info` or `ignore`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckstyleError {
    #[serde(rename = "@severity", default)]
    pub severity: String,
}

impl CheckstyleError {
    #[must_use]
    pub fn new(severity: impl Into<String>) -> Self {
        Self { severity: severity.into() }
    }
}
