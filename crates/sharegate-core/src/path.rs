//! Remote path rules.
//!
//! Pure functions that turn the configured base path, caller-supplied folder
//! names, and uploaded filenames into share-relative paths. Remote paths use
//! `/` as separator and never carry a leading or trailing separator.

use crate::error::AppError;
use crate::result::AppResult;

/// Path handed to a listing call when the resolved path is the share root.
pub const SHARE_ROOT: &str = "/";

/// Convert backslashes to forward slashes, drop empty components, and trim
/// surrounding separators.
fn normalize(segment: &str) -> String {
    segment
        .split(['/', '\\'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Join the configured base path with a relative folder.
///
/// An empty `folder` yields the normalized base path, which may itself be
/// empty (the share root).
pub fn resolve_remote_path(base_path: &str, folder: &str) -> String {
    let base = normalize(base_path);
    let folder = normalize(folder);

    match (base.is_empty(), folder.is_empty()) {
        (_, true) => base,
        (true, false) => folder,
        (false, false) => format!("{base}/{folder}"),
    }
}

/// Path to pass to a listing call; the share root stands in for an empty path.
pub fn listing_path(resolved: &str) -> &str {
    if resolved.is_empty() {
        SHARE_ROOT
    } else {
        resolved
    }
}

/// Append a filename to a folder path, collapsing doubled separators.
pub fn join_file_path(folder_path: &str, filename: &str) -> String {
    if folder_path.is_empty() {
        return filename.to_string();
    }
    format!("{folder_path}/{filename}").replace("//", "/")
}

/// Derive the destination folder from an uploaded filename.
///
/// Naming convention: `<anything>-<FOLDER>.<ext>`. The filename is split on
/// `-`; the last segment is cut at its first `.`. Filenames without a hyphen,
/// or whose folder token is empty, yield `None`.
///
/// This is a fixed convention, not a general parser: a folder token that
/// itself contains a dot (`report-3.0.xml`) truncates to `3`.
pub fn extract_folder(filename: &str) -> Option<String> {
    let segments: Vec<&str> = filename.split('-').collect();
    if segments.len() < 2 {
        return None;
    }

    let last = segments[segments.len() - 1];
    let folder = last.split('.').next().unwrap_or_default();
    if folder.is_empty() {
        None
    } else {
        Some(folder.to_string())
    }
}

/// Split a share address such as `//host/share/...` into `(host, share)`.
pub fn parse_share_address(address: &str) -> AppResult<(String, String)> {
    let normalized = address.replace('\\', "/");
    let mut segments = normalized.trim_start_matches('/').split('/');

    match (segments.next(), segments.next()) {
        (Some(host), Some(share)) if !host.is_empty() && !share.is_empty() => {
            Ok((host.to_string(), share.to_string()))
        }
        _ => Err(AppError::configuration(format!(
            "Invalid share address format: {address}"
        ))),
    }
}

/// The host portion before the first `.`, used as the remote machine name.
pub fn bare_host_name(host: &str) -> &str {
    host.split('.').next().unwrap_or(host)
}

/// Whether `name` is usable as a single file name within a folder.
pub fn is_single_segment(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
