//! Errors for ambiguous symbol-to-binary matches.

use std::path::PathBuf;
use thiserror::Error;

/// The two conditions under which matching cannot proceed.
///
/// Both are fatal and surface before anything is copied. Filesystem
/// failures are not represented here; they propagate as plain
/// [`anyhow::Error`] with path context.
#[derive(Debug, Error)]
pub enum AttachError {
    /// Two or more binaries in the install tree share a stem, so a
    /// symbol file with that stem could describe any of them.
    #[error("Duplicate binaries for stem `{stem}`: {}", list_paths(.paths))]
    DuplicateBinaryStem { stem: String, paths: Vec<PathBuf> },

    /// Two or more symbol files in the build tree match the same
    /// binary stem.
    #[error("Duplicate symbol files:\n{}", list_lines(.files))]
    DuplicateSymbolFiles { files: Vec<PathBuf> },
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn list_lines(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_binary_message_lists_all_paths() {
        let err = AttachError::DuplicateBinaryStem {
            stem: "app".to_string(),
            paths: vec![PathBuf::from("bin/app.exe"), PathBuf::from("lib/app.dll")],
        };
        let msg = err.to_string();
        assert!(msg.contains("`app`"), "missing stem in: {msg}");
        assert!(msg.contains("bin/app.exe"), "missing first path in: {msg}");
        assert!(msg.contains("lib/app.dll"), "missing second path in: {msg}");
    }

    #[test]
    fn duplicate_symbols_message_lists_one_file_per_line() {
        let err = AttachError::DuplicateSymbolFiles {
            files: vec![PathBuf::from("obj/a/x.pdb"), PathBuf::from("obj/b/x.pdb")],
        };
        let msg = err.to_string();
        assert!(msg.contains("obj/a/x.pdb"));
        assert!(msg.contains("obj/b/x.pdb"));
        assert_eq!(msg.lines().count(), 3, "expected header plus two files: {msg}");
    }
}
