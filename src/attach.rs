//! Matching symbol files to binaries and copying them alongside.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::scan::{collect_binaries, collect_symbol_files, stem};

/// Copy `src` to `dest`, logging the copy to stderr first.
fn copy(src: &Path, dest: &Path) -> Result<()> {
    eprintln!("Copying {} to {}", src.display(), dest.display());
    fs::copy(src, dest)
        .with_context(|| format!("Failed to copy {} to {}", src.display(), dest.display()))?;
    Ok(())
}

/// Attach debug symbol files from `build_dir` to binaries under `install_dir`.
///
/// One synchronous scan-match-copy pass: build the stem -> binary map,
/// filter the build tree's symbol files down to those matching a
/// binary, then copy each one into its binary's directory under the
/// symbol file's own name. Existing destination files are overwritten,
/// so a second run over the same inputs reproduces the same layout.
///
/// Returns the number of files copied (zero matches is a success).
///
/// # Errors
///
/// Fails without copying anything if two binaries or two matched
/// symbol files share a stem (see [`AttachError`](crate::AttachError)),
/// or on any filesystem failure, including either directory being
/// missing or unreadable. A copy failure partway through leaves the
/// files already copied in place; there is no rollback.
pub fn attach_symbols(build_dir: &Path, install_dir: &Path) -> Result<usize> {
    let binaries = collect_binaries(install_dir)?;
    let symbols = collect_symbol_files(build_dir, &binaries)?;

    let mut copied = 0;
    for symbol in &symbols {
        // Both are Some for anything collect_symbol_files returns.
        let (Some(stem), Some(name)) = (stem(symbol), symbol.file_name()) else {
            continue;
        };
        let dest = binaries[stem].with_file_name(name);
        copy(symbol, &dest)?;
        copied += 1;
    }
    Ok(copied)
}
