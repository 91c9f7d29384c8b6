//! Shared corpora for Roster integration tests.
//!
//! `corpus/kb/` is a complete knowledge-base directory (one subdirectory per
//! entity kind). `corpus/batches/` holds single-file raw batches, each one
//! exercising a particular load or retrieval scenario.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the corpus folder.
pub fn corpus_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("corpus")
}

/// The sample knowledge-base directory.
pub fn kb_dir() -> PathBuf {
    corpus_root().join("kb")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a batch from `corpus/batches/<name>.json`.
pub fn load_batch<T: DeserializeOwned>(name: &str) -> T {
    load_fixture(&format!("batches/{name}.json"))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    corpus_root().join(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = corpus_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_is_present() {
        assert!(kb_dir().join("characters").is_dir());
        assert!(fixture_exists("batches/tank_healer.json"));
    }

    #[test]
    fn batches_parse_as_json() {
        for path in list_fixtures("batches") {
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            let value = load_fixture_value(&format!("batches/{name}"));
            assert!(value.is_object(), "{name} is not a JSON object");
        }
    }
}
