use serde::Deserialize;
use strum::{Display, EnumString};

/// A FindBugs/SpotBugs `<BugCollection>` grouped by source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FindBugsReport {
    #[serde(rename = "file", default)]
    pub files: Vec<BugFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BugFile {
    #[serde(rename = "@classname", default)]
    pub class_name: String,

    #[serde(rename = "BugInstance", default)]
    pub bugs: Vec<BugInstance>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BugInstance {
    #[serde(rename = "@priority", default)]
    pub priority: String,
}

/// The priority labels that map onto violation buckets.
///
/// Labels are matched exactly; any other spelling is unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum BugPriority {
    Blocker,
    Critical,
    Normal,
    Low,
}

impl BugInstance {
    #[must_use]
    pub fn new(priority: impl Into<String>) -> Self {
        Self { priority: priority.into() }
    }

    /// The classified priority, or `None` for labels outside [`BugPriority`].
    #[must_use]
    pub fn priority(&self) -> Option<BugPriority> {
        self.priority.parse().ok()
    }
}
