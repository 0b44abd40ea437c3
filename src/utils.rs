// src/utils.rs
use anyhow::Result;
use std::path::Path;

const MAX_FILE_NAME_LEN: usize = 100;
const MAX_STEM_LEN: usize = 96;

/// Strip path separators and shell-hostile characters, then cap the length
/// while keeping the extension.
pub fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .collect();

    if sanitized.chars().count() <= MAX_FILE_NAME_LEN {
        return sanitized;
    }

    match sanitized.rfind('.') {
        Some(dot) if dot > 0 => {
            // An extension longer than the cap leaves the result over it
            let (stem, extension) = sanitized.split_at(dot);
            let stem: String = stem.chars().take(MAX_STEM_LEN).collect();
            format!("{}{}", stem, extension)
        }
        _ => sanitized.chars().take(MAX_FILE_NAME_LEN).collect(),
    }
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Validate file extension against allowed types
pub fn validate_file_extension(filename: &str, allowed: &[&str]) -> Result<()> {
    let ext = get_file_extension(filename)
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", filename))?;

    if !allowed.contains(&ext.as_str()) {
        anyhow::bail!(
            "Unsupported file extension: {}. Allowed: {:?}",
            ext,
            allowed
        );
    }

    Ok(())
}

/// Bytes as megabytes with one decimal, for user-facing messages
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.1}MB", bytes as f64 / 1024.0 / 1024.0)
}

/// File name component of a path, lossily converted
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
