use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Maximum transcript size: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

// Characters that are unsafe or ambiguous in a single directory or file name
const ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'*')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b':')
    .add(b'|')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b'!');

/// Encodes a project or interview name into a single safe path component
///
/// # Examples
///
/// ```
/// use qr_ai::utils::encode_name;
///
/// assert_eq!(encode_name("Churn Study/2024"), "Churn%20Study%2F2024");
/// assert_eq!(encode_name(".."), "%2E%2E");
/// ```
pub fn encode_name(name: &str) -> String {
    let encoded = utf8_percent_encode(name, ENCODE_SET).to_string();
    // A name made only of dots would still resolve to the current or parent directory
    if !encoded.is_empty() && encoded.chars().all(|c| c == '.') {
        return encoded.replace('.', "%2E");
    }
    encoded
}

/// Resolves a stored transcript path against the project directory
///
/// Absolute paths are kept. Relative paths must stay inside the project directory.
///
/// # Errors
///
/// Returns an error if a relative path contains '..' components.
pub fn resolve_in_project(project_dir: &Path, stored: &str) -> Result<PathBuf> {
    let path = PathBuf::from(stored);
    if path.is_absolute() {
        return Ok(path);
    }
    if path.components().any(|c| c == Component::ParentDir) {
        bail!("Transcript path contains '..' component: {}", stored);
    }
    Ok(project_dir.join(path))
}

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Opens a file and validates its size on the same handle
pub fn safe_open_file(path: &Path) -> Result<File> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    validate_file_size(&file, path)?;
    Ok(file)
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
