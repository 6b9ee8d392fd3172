//! Source pattern expansion for file groups.
//! Configured `src` entries are either literal paths, passed through in
//! order, or glob patterns matched against the base directory.

use crate::error::{Error, Result};
use globset::{GlobBuilder, GlobMatcher};
use indexmap::IndexSet;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns true when the pattern uses glob syntax rather than naming a
/// literal path.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.chars().any(|c| matches!(c, '*' | '?' | '[' | '{'))
}

/// Expands configured source patterns into an ordered, de-duplicated list of
/// paths resolved against `base`.
///
/// Literal paths are kept even when the file is missing, so the caller can
/// warn about them. Glob patterns contribute their matches in lexicographic
/// order; `*` does not cross directory separators, `**` does. A leading `!`
/// removes previously selected entries instead of adding new ones.
///
/// # Errors
/// * `Error::GlobSetParseError` if a pattern fails to compile
pub fn expand_sources(base: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut selected: IndexSet<PathBuf> = IndexSet::new();

    for pattern in patterns {
        match pattern.strip_prefix('!') {
            Some(negated) => {
                let matcher = compile_matcher(negated)?;
                selected.retain(|path| !matcher.is_match(path));
            }
            None if is_glob_pattern(pattern) => {
                let matcher = compile_matcher(pattern)?;
                let mut matches = glob_matches(base, &matcher)?;
                matches.sort();
                for path in matches {
                    selected.insert(path);
                }
            }
            None => {
                selected.insert(PathBuf::from(pattern));
            }
        }
    }

    Ok(selected.into_iter().map(|path| base.join(path)).collect())
}

fn compile_matcher(pattern: &str) -> Result<GlobMatcher> {
    let glob = GlobBuilder::new(pattern).literal_separator(true).build()?;
    Ok(glob.compile_matcher())
}

/// Collects the files under `base` whose base-relative path matches.
fn glob_matches(base: &Path, matcher: &GlobMatcher) -> Result<Vec<PathBuf>> {
    let mut matches = Vec::new();
    for entry in WalkDir::new(base) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(base)
            .unwrap_or(entry.path())
            .to_path_buf();
        if matcher.is_match(&relative) {
            matches.push(relative);
        }
    }
    debug!("Matched {} file(s) under '{}'.", matches.len(), base.display());
    Ok(matches)
}
