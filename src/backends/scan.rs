//! Input discovery
//!
//! Uses walkdir for a single-level listing of the root directory

use std::path::Path;
use walkdir::WalkDir;

use crate::core::error::BatchError;

/// Suffix (compared case-insensitively) that marks an input file
pub const INPUT_SUFFIX: &str = ".txt";

/// Whether `name` looks like an input file
pub fn is_input_name(name: &str) -> bool {
    name.to_lowercase().ends_with(INPUT_SUFFIX)
}

/// List the `.txt` entries directly under `root`, sorted by code point.
///
/// Directories with a matching name are kept; reading them fails later with
/// a per-file diagnostic. Names listed in `exclude` are left out.
pub fn discover_inputs(root: &Path, exclude: &[&str]) -> Result<Vec<String>, BatchError> {
    let mut names = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| BatchError::ListDir {
            path: root.to_path_buf(),
            source,
        })?;

        let name = match entry.file_name().to_str() {
            Some(n) => n.to_string(),
            None => {
                log::debug!("skipping non UTF-8 name: {:?}", entry.file_name());
                continue;
            }
        };

        if !is_input_name(&name) {
            continue;
        }
        if exclude.contains(&name.as_str()) {
            log::debug!("skipping results file {}", name);
            continue;
        }

        names.push(name);
    }

    names.sort();
    log::debug!("discovered {} input file(s) in {}", names.len(), root.display());
    Ok(names)
}
