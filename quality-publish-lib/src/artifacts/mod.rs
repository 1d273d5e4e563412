//! Build artifacts and their typed report values
//!
//! Every report kind the aggregator understands is a variant of [`Artifact`].
//! The set is closed: adding a kind means adding a variant, which the
//! compiler then forces every dispatcher to handle.
//!
//! [`ArtifactKind`] names the kinds that can be discovered on disk and parsed
//! from XML. Mocha and Cucumber reports exist only as [`Artifact`] variants;
//! nothing produces them yet and the aggregator ignores them.

mod checkstyle;
mod discovery;
mod findbugs;
mod jacoco;
mod junit;
mod parse;
mod pmd;

pub use checkstyle::{CheckstyleError, CheckstyleFile, CheckstyleReport};
pub use discovery::discover;
pub use findbugs::{BugFile, BugInstance, BugPriority, FindBugsReport};
pub use jacoco::{Counter, CounterType, JacocoReport};
pub use junit::{JunitReport, parse_timestamp};
pub use parse::{load, parse};
pub use pmd::{PmdFile, PmdReport, PmdViolation};

use strum::{Display, EnumIter, EnumString};

/// Report kinds that can be discovered and parsed, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ArtifactKind {
    Junit,
    Pmd,
    Findbugs,
    Checkstyle,
    Jacoco,
}

/// A Mocha spec reporter result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MochaSpecReport;

/// A Cucumber JSON result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CucumberJsonReport;

/// One parsed report, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Junit(JunitReport),
    FindBugs(FindBugsReport),
    Pmd(PmdReport),
    Checkstyle(CheckstyleReport),
    Jacoco(JacocoReport),
    MochaSpec(MochaSpecReport),
    CucumberJson(CucumberJsonReport),
}

impl Artifact {
    /// The discoverable kind of this artifact, if it has one.
    #[must_use]
    pub const fn kind(&self) -> Option<ArtifactKind> {
        match self {
            Self::Junit(_) => Some(ArtifactKind::Junit),
            Self::FindBugs(_) => Some(ArtifactKind::Findbugs),
            Self::Pmd(_) => Some(ArtifactKind::Pmd),
            Self::Checkstyle(_) => Some(ArtifactKind::Checkstyle),
            Self::Jacoco(_) => Some(ArtifactKind::Jacoco),
            Self::MochaSpec(_) | Self::CucumberJson(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kind_processing_order() {
        let kinds: Vec<_> = ArtifactKind::iter().collect();
        assert_eq!(
            kinds,
            vec![
                ArtifactKind::Junit,
                ArtifactKind::Pmd,
                ArtifactKind::Findbugs,
                ArtifactKind::Checkstyle,
                ArtifactKind::Jacoco
            ]
        );
    }

    #[test]
    fn test_kind_display_and_parse() {
        assert_eq!(ArtifactKind::Findbugs.to_string(), "findbugs");
        assert_eq!(ArtifactKind::from_str("jacoco").unwrap(), ArtifactKind::Jacoco);
    }

    #[test]
    fn test_artifact_kind() {
        assert_eq!(Artifact::Pmd(PmdReport::default()).kind(), Some(ArtifactKind::Pmd));
        assert_eq!(Artifact::MochaSpec(MochaSpecReport).kind(), None);
        assert_eq!(Artifact::CucumberJson(CucumberJsonReport).kind(), None);
    }
}
