// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;
use std::path::PathBuf;

/// Errors that can occur when resolving a bundle file path.
#[derive(Debug, PartialEq)]
pub enum AssetPathError {
    /// Path is the empty string.
    Empty,
    /// Path is a symbolic link.
    Symlink,
    /// Path contains invalid components (e.g., ".." or is absolute).
    InvalidPath,
    /// File does not exist or cannot be accessed.
    NotFound,
    /// Path resolves outside the bundle directory.
    OutsideDirectory,
}

/// Resolves a requested file name against the bundle directory, refusing
/// anything that would escape it.
pub fn validate_asset_path(base_dir: &Path, user_path: &str) -> Result<PathBuf, AssetPathError> {
    if user_path.trim().is_empty() {
        return Err(AssetPathError::Empty);
    }

    let requested_path = PathBuf::from(user_path);
    if user_path.contains("..") || requested_path.is_absolute() {
        return Err(AssetPathError::InvalidPath);
    }

    let full_path = base_dir.join(&requested_path);
    if full_path.is_symlink() {
        return Err(AssetPathError::Symlink);
    }

    let canonical_full = full_path
        .canonicalize()
        .map_err(|_| AssetPathError::NotFound)?;
    let canonical_dir = base_dir
        .canonicalize()
        .map_err(|_| AssetPathError::NotFound)?;
    if !canonical_full.starts_with(&canonical_dir) {
        return Err(AssetPathError::OutsideDirectory);
    }
    if !canonical_full.is_file() {
        return Err(AssetPathError::NotFound);
    }

    Ok(canonical_full)
}

/// The content type served for a bundle file, or `None` for files the page
/// never loads.
pub fn asset_content_type(path: &str) -> Option<&'static str> {
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some("js") => Some("text/javascript"),
        Some("wasm") => Some("application/wasm"),
        _ => None,
    }
}
