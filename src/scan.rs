//! Install-tree and build-tree scanning.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AttachError;

/// Extensions marking a file as an installed binary artifact.
pub const BINARY_EXTENSIONS: &[&str] = &["exe", "dll"];

/// Extension of the debug symbol files a build emits.
pub const SYMBOL_EXTENSION: &str = "pdb";

/// File stem (name with the extension stripped), when it is valid UTF-8.
pub(crate) fn stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

fn walk_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in: {}", dir.display()))?;
        let path = entry.path();
        if path.is_dir() {
            walk_files(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}

/// Recursively list files under `dir` with one of the given extensions.
///
/// Results are sorted so scans, copies and diagnostics come out in a
/// stable order regardless of directory iteration order.
fn find_files_with_extension(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk_files(dir, &mut files)?;
    files.retain(|p| {
        p.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| extensions.contains(&e))
    });
    files.sort();
    Ok(files)
}

/// Build the stem -> path map of binaries under the install tree.
///
/// Every `.exe` and `.dll` found recursively gets one entry. Two
/// binaries sharing a stem is a configuration error
/// ([`AttachError::DuplicateBinaryStem`]): the symbol matching that
/// follows has no way to tell which of them a symbol file belongs to.
#[must_use = "binary map should be used for symbol matching"]
pub fn collect_binaries(install_dir: &Path) -> Result<BTreeMap<String, PathBuf>> {
    let mut by_stem: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for path in find_files_with_extension(install_dir, BINARY_EXTENSIONS)? {
        if let Some(stem) = stem(&path) {
            by_stem.entry(stem.to_string()).or_default().push(path);
        }
    }

    let mut binaries = BTreeMap::new();
    for (stem, mut paths) in by_stem {
        if paths.len() > 1 {
            return Err(AttachError::DuplicateBinaryStem { stem, paths }.into());
        }
        binaries.insert(stem, paths.remove(0));
    }
    Ok(binaries)
}

/// List symbol files under the build tree that match a known binary stem.
///
/// Symbol files whose stem matches no binary are dropped without
/// comment; they belong to intermediate objects or binaries that were
/// never installed. Two matching files sharing a stem is ambiguous and
/// fails ([`AttachError::DuplicateSymbolFiles`]) before anything is
/// copied, listing every file involved in a collision.
#[must_use = "candidate symbol files should be copied"]
pub fn collect_symbol_files(
    build_dir: &Path,
    binaries: &BTreeMap<String, PathBuf>,
) -> Result<Vec<PathBuf>> {
    let candidates: Vec<PathBuf> = find_files_with_extension(build_dir, &[SYMBOL_EXTENSION])?
        .into_iter()
        .filter(|p| stem(p).is_some_and(|s| binaries.contains_key(s)))
        .collect();

    let stems: BTreeSet<&str> = candidates.iter().filter_map(|p| stem(p)).collect();
    if candidates.len() != stems.len() {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for path in &candidates {
            if let Some(stem) = stem(path) {
                *counts.entry(stem).or_default() += 1;
            }
        }
        let files = candidates
            .iter()
            .filter(|p| stem(p).is_some_and(|s| counts[s] > 1))
            .cloned()
            .collect();
        return Err(AttachError::DuplicateSymbolFiles { files }.into());
    }

    Ok(candidates)
}
