use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use glob::Pattern;
use ohno::IntoAppError;
use std::collections::BTreeSet;

const LOG_TARGET: &str = " discovery";

/// Find the files matching a comma-separated list of glob patterns.
///
/// Relative patterns are resolved against `root`. Only regular files are
/// returned, de-duplicated and sorted by path. An empty or blank pattern list
/// yields no files.
pub fn discover(root: &Utf8Path, patterns: &str) -> Result<Vec<Utf8PathBuf>> {
    let mut found = BTreeSet::new();

    for pattern in patterns.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let full_pattern = if Utf8Path::new(pattern).is_absolute() {
            pattern.to_string()
        } else {
            format!("{}/{pattern}", Pattern::escape(root.as_str()).trim_end_matches('/'))
        };

        log::debug!(target: LOG_TARGET, "Expanding pattern '{full_pattern}'");

        let entries = glob::glob(&full_pattern).into_app_err_with(|| format!("invalid file pattern '{pattern}'"))?;
        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    log::warn!(target: LOG_TARGET, "Skipping unreadable path while expanding '{pattern}': {e}");
                    continue;
                }
            };

            if !path.is_file() {
                continue;
            }

            match Utf8PathBuf::from_path_buf(path) {
                Ok(path) => {
                    _ = found.insert(path);
                }
                Err(path) => log::warn!(target: LOG_TARGET, "Skipping non UTF-8 path '{}'", path.display()),
            }
        }
    }

    Ok(found.into_iter().collect())
}
