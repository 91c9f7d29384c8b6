//! JSON knowledge-base directory reader.
//!
//! Layout: `characters/*.json`, `adversaries/*.json`, `teams/*.json` under a
//! root. Each file holds one raw record or an array of them. Files whose stem
//! starts with `_` are templates and skipped. Nothing here validates records;
//! that is `EntityStore::load`'s job.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};

use roster_core::errors::ValidationError;
use roster_core::models::{EntityKind, RawRecords};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Raw records read from a knowledge-base directory.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    root: PathBuf,
    records: RawRecords,
}

impl KnowledgeBase {
    /// Read every record file under `root`. Missing kind directories are
    /// treated as empty corpora.
    pub fn from_dir(root: impl AsRef<Path>) -> Result<Self, ValidationError> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(ValidationError::Malformed {
                source_name: root.display().to_string(),
                reason: "knowledge base root is not a directory".into(),
            });
        }

        let records = RawRecords {
            characters: read_kind(&root, EntityKind::Character)?,
            adversaries: read_kind(&root, EntityKind::Adversary)?,
            teams: read_kind(&root, EntityKind::Team)?,
        };
        info!(
            root = %root.display(),
            characters = records.characters.len(),
            adversaries = records.adversaries.len(),
            teams = records.teams.len(),
            "knowledge base read"
        );
        Ok(Self { root, records })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn records(&self) -> &RawRecords {
        &self.records
    }

    pub fn into_records(self) -> RawRecords {
        self.records
    }
}

/// Shorthand for `KnowledgeBase::from_dir(root)?.into_records()`.
pub fn load_raw_records(root: impl AsRef<Path>) -> Result<RawRecords, ValidationError> {
    KnowledgeBase::from_dir(root).map(KnowledgeBase::into_records)
}

fn kind_dir(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Character => "characters",
        EntityKind::Adversary => "adversaries",
        EntityKind::Team => "teams",
    }
}

fn read_kind<T: DeserializeOwned>(root: &Path, kind: EntityKind) -> Result<Vec<T>, ValidationError> {
    let dir = root.join(kind_dir(kind));
    if !dir.is_dir() {
        warn!(dir = %dir.display(), %kind, "no record directory, treating as empty");
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    for path in record_files(&dir)? {
        let text = fs::read_to_string(&path).map_err(|e| malformed(&path, e.to_string()))?;
        let parsed: OneOrMany<T> =
            serde_json::from_str(&text).map_err(|e| malformed(&path, e.to_string()))?;
        let before = out.len();
        match parsed {
            OneOrMany::Many(items) => out.extend(items),
            OneOrMany::One(item) => out.push(item),
        }
        debug!(file = %path.display(), records = out.len() - before, "record file read");
    }
    Ok(out)
}

/// `*.json` files in `dir`, sorted by name, templates excluded.
fn record_files(dir: &Path) -> Result<Vec<PathBuf>, ValidationError> {
    let entries = fs::read_dir(dir).map_err(|e| malformed(dir, e.to_string()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| malformed(dir, e.to_string()))?.path();
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let is_template = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|s| s.starts_with('_'));
        if path.is_file() && is_json && !is_template {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn malformed(path: &Path, reason: String) -> ValidationError {
    ValidationError::Malformed {
        source_name: path.display().to_string(),
        reason,
    }
}
