//! Repository root discovery by marker directories.
//!
//! Walks a path's ancestors looking for a VCS marker (`.svn`, `.git`, `.hg`). Two
//! strategies exist: stop at the nearest ancestor holding the marker, or keep climbing
//! through an unbroken chain of marked ancestors and return the outermost one. The
//! latter models Subversion's legacy per-directory `.svn` metadata.
//!
//! A miss is an ordinary outcome (`None`), not an error: probing for the wrong VCS
//! is the common case.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateMode {
    /// First ancestor containing the marker
    Nearest,
    /// Topmost ancestor of the first contiguous run of marked directories
    OutermostContiguous,
}

/// Find the repository root owning `start` for the given marker directory name.
///
/// `start` is treated as a directory when it is one; otherwise its parent is used.
/// The start directory itself is a candidate.
pub fn find_root(marker: &str, start: &Path, mode: LocateMode) -> Option<PathBuf> {
    let first_dir = if start.is_dir() {
        Some(start)
    } else {
        start.parent()
    };

    let mut result: Option<&Path> = None;
    let mut current = first_dir;

    while let Some(dir) = current {
        let has_marker = dir.join(marker).exists();

        if result.is_some() && !has_marker {
            break;
        }

        if has_marker {
            result = Some(dir);
            if mode == LocateMode::Nearest {
                break;
            }
        }

        current = dir.parent();
    }

    match result {
        Some(root) => {
            log::debug!("Found \"{}\" root at {}", marker, root.display());
            Some(root.to_path_buf())
        }
        None => {
            log::debug!("No \"{}\" directory above {}", marker, start.display());
            None
        }
    }
}
