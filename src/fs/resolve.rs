//! Path resolution: mapping request paths onto the served root.
//!
//! The request path is normalized purely syntactically (collapsing `.`,
//! `..` and repeated separators) before it is joined onto the root, so no
//! filesystem access happens here. Containment is a textual prefix check
//! against the root's string form.
//!
//! # Known limitation
//!
//! The prefix check is not symlink-aware: a symlink inside the served
//! root that points outside of it will be followed. The served tree is
//! trusted not to contain such links.

use std::path::{Path, PathBuf};

use crate::error::RequestError;

/// A request path mapped onto the served root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Normalized request path: absolute, no `.`/`..` segments, no
    /// trailing separator except for the root itself.
    pub url_path: String,

    /// The corresponding location under the served root.
    pub fs_path: PathBuf,
}

/// Resolve a raw request path against the served root.
///
/// Any `..` sequence that would climb above the root, even transiently,
/// yields [`RequestError::Forbidden`] regardless of whether the target
/// exists. The caller stats the returned path; this function never
/// touches the filesystem.
pub fn resolve(root: &Path, request_path: &str) -> Result<ResolvedPath, RequestError> {
    let segments = normalize_segments(request_path).ok_or(RequestError::Forbidden)?;

    let mut fs_path = root.to_path_buf();
    for segment in &segments {
        fs_path.push(segment);
    }

    // Textual containment check, mirroring the root's own string form.
    if !fs_path.to_string_lossy().starts_with(&*root.to_string_lossy()) {
        return Err(RequestError::Forbidden);
    }

    let url_path = if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    };

    Ok(ResolvedPath { url_path, fs_path })
}

/// Split a request path into normalized segments.
///
/// Returns `None` when a `..` segment would climb above the root.
/// Empty segments (repeated separators) and `.` segments are dropped.
fn normalize_segments(request_path: &str) -> Option<Vec<String>> {
    let mut segments: Vec<String> = Vec::new();
    for segment in request_path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other.to_string()),
        }
    }
    Some(segments)
}
