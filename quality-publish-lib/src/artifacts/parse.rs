use super::{Artifact, ArtifactKind, CheckstyleReport, FindBugsReport, JacocoReport, JunitReport, PmdReport};
use crate::Result;
use camino::Utf8Path;
use ohno::IntoAppError;
use serde::de::DeserializeOwned;
use std::fs;

const LOG_TARGET: &str = "     parse";

/// Deserialize one XML document into the typed report for `kind`.
///
/// Elements and attributes that are not modelled are ignored. DOCTYPE
/// declarations are skipped and external entities are never resolved.
pub fn parse(kind: ArtifactKind, xml: &str) -> Result<Artifact> {
    Ok(match kind {
        ArtifactKind::Junit => Artifact::Junit(from_xml::<JunitReport>(kind, xml)?),
        ArtifactKind::Findbugs => Artifact::FindBugs(from_xml::<FindBugsReport>(kind, xml)?),
        ArtifactKind::Pmd => Artifact::Pmd(from_xml::<PmdReport>(kind, xml)?),
        ArtifactKind::Checkstyle => Artifact::Checkstyle(from_xml::<CheckstyleReport>(kind, xml)?),
        ArtifactKind::Jacoco => Artifact::Jacoco(from_xml::<JacocoReport>(kind, xml)?),
    })
}

/// Read and parse the artifact at `path`.
pub fn load(kind: ArtifactKind, path: &Utf8Path) -> Result<Artifact> {
    log::debug!(target: LOG_TARGET, "Parsing {kind} report '{path}'");
    let xml = fs::read_to_string(path).into_app_err_with(|| format!("reading {kind} report '{path}'"))?;
    parse(kind, &xml).into_app_err_with(|| format!("parsing {kind} report '{path}'"))
}

fn from_xml<T: DeserializeOwned>(kind: ArtifactKind, xml: &str) -> Result<T> {
    quick_xml::de::from_str(xml).into_app_err_with(|| format!("malformed {kind} XML"))
}
