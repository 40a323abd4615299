//! Canonical path strings for task anchoring.
//!
//! A folder is stored exactly as [`normalize`] returns it, and searches run
//! the user's argument through the same function, so anchoring and lookup
//! agree on one string form and a plain equality check is enough.
//!
//! Resolution steps:
//! 1. a leading `~` expands to the home directory,
//! 2. relative paths are joined onto the current directory,
//! 3. existing paths are canonicalized (symlinks resolved),
//! 4. missing paths resolve leniently: the deepest existing ancestor is
//!    canonicalized and the missing tail is appended with `.`/`..` folded.

use super::error::{TaskError, TaskResult};
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Resolves `path` to its canonical absolute string form.
///
/// # Errors
///
/// Returns [`TaskError::PathResolution`] when the home or current directory
/// is unknown, an existing entry cannot be canonicalized (broken symlink,
/// permission denied), an intermediate component is not a directory, or the
/// result is not valid UTF-8.
pub fn normalize(path: impl AsRef<Path>) -> TaskResult<String> {
    let raw = path.as_ref();
    let expanded = expand_home(raw).map_err(|e| TaskError::path(raw, e))?;
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        env::current_dir().map_err(|e| TaskError::path(raw, e))?.join(expanded)
    };

    let resolved = resolve(&absolute).map_err(|e| TaskError::path(raw, e))?;
    resolved
        .into_os_string()
        .into_string()
        .map_err(|_| TaskError::path(raw, io::Error::new(io::ErrorKind::InvalidData, "path is not valid UTF-8")))
}

/// Canonical form of the process's working directory.
pub fn current_dir() -> TaskResult<String> {
    let cwd = env::current_dir().map_err(|e| TaskError::path(".", e))?;
    normalize(cwd)
}

fn expand_home(path: &Path) -> io::Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == OsStr::new("~") => {
            let home = dirs::home_dir().ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "home directory is unknown"))?;
            let rest = components.as_path();
            if rest.as_os_str().is_empty() {
                Ok(home)
            } else {
                Ok(home.join(rest))
            }
        }
        _ => Ok(path.to_path_buf()),
    }
}

fn resolve(path: &Path) -> io::Result<PathBuf> {
    // A dangling symlink still has metadata and must fail in canonicalize.
    match fs::symlink_metadata(path) {
        Ok(_) => return fs::canonicalize(path),
        Err(err) if err.kind() != io::ErrorKind::NotFound => return Err(err),
        Err(_) => {}
    }

    let folded = fold_dots(path);
    let mut base = folded.as_path();
    let mut tail = Vec::new();
    loop {
        match fs::symlink_metadata(base) {
            Ok(_) => break,
            Err(err) if err.kind() != io::ErrorKind::NotFound => return Err(err),
            Err(err) => match (base.parent(), base.file_name()) {
                (Some(parent), Some(name)) => {
                    tail.push(name);
                    base = parent;
                }
                _ => return Err(err),
            },
        }
    }

    let mut resolved = fs::canonicalize(base)?;
    for name in tail.iter().rev() {
        resolved.push(name);
    }
    Ok(resolved)
}

/// Lexically removes `.` and folds `..` into its parent.
fn fold_dots(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping at the root is a no-op, `/..` is `/`.
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
