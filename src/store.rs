use crate::tree::ProcessedNode;
use icu_locale::Locale;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Load a catalog (processed tree) from a single JSON file
///
/// The JSON file holds the working copy for one locale: nested objects
/// whose leaves are `{"original": ..., "translated": ...}` records, with
/// `translated` omitted while outstanding.
///
/// # Arguments
/// * `path` - Path to the catalog file
///
/// # Returns
/// The catalog tree
///
/// # Errors
/// - File not found
/// - Invalid JSON
/// - File read errors
pub fn load_catalog_from_file(path: &Path) -> Result<ProcessedNode, String> {
    // Read the file
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read file '{}': {}", path.display(), e))?;

    // Parse the tree
    serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse catalog from '{}': {}", path.display(), e))
}

/// Save a catalog to a JSON file
///
/// Output is pretty-printed with keys in sorted order, keeping diffs of
/// successive saves readable.
///
/// # Arguments
/// * `path` - Destination file
/// * `catalog` - The catalog tree to persist
pub fn save_catalog_to_file(path: &Path, catalog: &ProcessedNode) -> Result<(), String> {
    let content = serde_json::to_string_pretty(catalog)
        .map_err(|e| format!("Failed to serialize catalog: {}", e))?;

    fs::write(path, content)
        .map_err(|e| format!("Failed to write file '{}': {}", path.display(), e))
}

/// Load all catalogs from a directory of JSON files
///
/// Scans the directory for `*.json` files. The filename (without
/// extension) is used as the locale code and must be a valid BCP 47
/// identifier; files with an invalid stem are skipped with a warning.
/// For example: `fr.json` -> locale `"fr"`, `zh-hans.json` -> `"zh-hans"`.
///
/// # Arguments
/// * `dir` - Directory path containing catalog files
///
/// # Returns
/// A HashMap mapping locale codes to catalogs
///
/// # Errors
/// - Directory not found
/// - File read/parse errors
pub fn load_all_catalogs_from_dir(dir: &Path) -> Result<HashMap<String, ProcessedNode>, String> {
    // Check if directory exists
    if !dir.exists() {
        return Err(format!("Directory not found: {}", dir.display()));
    }

    if !dir.is_dir() {
        return Err(format!("Path is not a directory: {}", dir.display()));
    }

    let mut all_catalogs = HashMap::new();

    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory '{}': {}", dir.display(), e))?;

    // Process each file
    for entry in entries {
        let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;

        let path = entry.path();

        // Only process JSON files
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        // Extract locale from filename (e.g., "fr.json" -> "fr")
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| format!("Invalid filename: {}", path.display()))?;

        // Reject stems that are not locale identifiers
        if Locale::try_from_str(stem).is_err() {
            warn!(
                "Skipping '{}': '{}' is not a valid locale code",
                path.display(),
                stem
            );
            continue;
        }

        let catalog = load_catalog_from_file(&path)?;
        all_catalogs.insert(stem.to_string(), catalog);
    }

    if all_catalogs.is_empty() {
        warn!("No catalog files found in directory {}", dir.display());
    }

    Ok(all_catalogs)
}
