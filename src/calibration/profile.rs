//! Named calibration profiles
//!
//! A profile is a snapshot of the six color centers under a name. Profiles
//! live in a single JSON document keyed by name:
//!
//! ```json
//! {
//!     "desk lamp": {
//!         "o": [17, 200, 180],
//!         "r": [3, 190, 160]
//!     }
//! }
//! ```
//!
//! The document is read and written whole; saving under an existing name
//! replaces that entry in place and new names are appended, so profiles
//! keep the order they were first saved in.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::color::{ColorTag, Hsv};
use crate::error::{Result, ScanError};

/// Calibrated center per color
pub type ColorSnapshot = BTreeMap<ColorTag, Hsv>;

/// Color centers keyed by single-character tag, as stored on disk
type StoredProfile = BTreeMap<String, Hsv>;

/// Persistent store of named color snapshots
pub trait ProfileStore {
    /// Snapshot saved under `name`, or `None` if there is none
    fn load(&self, name: &str) -> Result<Option<ColorSnapshot>>;

    /// Save `snapshot` under `name`, replacing any existing entry
    fn save(&mut self, name: &str, snapshot: &ColorSnapshot) -> Result<()>;

    /// Stored profile names, in store order
    fn names(&self) -> Result<Vec<String>>;

    /// First profile in store order, used as the startup profile
    fn first_name(&self) -> Result<Option<String>> {
        Ok(self.names()?.into_iter().next())
    }
}

/// Profile store backed by a JSON file
///
/// A missing file reads as an empty store and is created on first save.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: PathBuf,
}

/// Profiles in document order
type ProfileDocument = Vec<(String, StoredProfile)>;

impl JsonProfileStore {
    /// Store backed by the document at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<ProfileDocument> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no profile store yet");
                return Ok(ProfileDocument::new());
            }
            Err(source) => {
                return Err(ScanError::ProfileIo {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let raw: Map<String, Value> =
            serde_json::from_str(&content).map_err(|e| self.format_error(e))?;
        raw.into_iter()
            .map(|(name, value)| {
                let stored = serde_json::from_value(value).map_err(|e| self.format_error(e))?;
                Ok((name, stored))
            })
            .collect()
    }

    fn write_document(&self, document: &[(String, StoredProfile)]) -> Result<()> {
        let raw = document
            .iter()
            .map(|(name, stored)| {
                let value = serde_json::to_value(stored).map_err(|e| self.format_error(e))?;
                Ok((name.clone(), value))
            })
            .collect::<Result<Map<String, Value>>>()?;
        let json = serde_json::to_string_pretty(&raw).map_err(|e| self.format_error(e))?;
        fs::write(&self.path, json).map_err(|source| ScanError::ProfileIo {
            path: self.path.clone(),
            source,
        })
    }

    fn format_error(&self, source: serde_json::Error) -> ScanError {
        ScanError::ProfileFormat {
            path: self.path.clone(),
            source,
        }
    }
}

impl ProfileStore for JsonProfileStore {
    fn load(&self, name: &str) -> Result<Option<ColorSnapshot>> {
        Ok(self
            .read_document()?
            .into_iter()
            .find(|(stored_name, _)| stored_name == name)
            .map(|(_, stored)| to_snapshot(name, stored)))
    }

    fn save(&mut self, name: &str, snapshot: &ColorSnapshot) -> Result<()> {
        let mut document = self.read_document()?;
        upsert(&mut document, name, to_stored(snapshot));
        self.write_document(&document)?;
        debug!(path = %self.path.display(), profile = name, "profile store written");
        Ok(())
    }

    fn names(&self) -> Result<Vec<String>> {
        Ok(self
            .read_document()?
            .into_iter()
            .map(|(name, _)| name)
            .collect())
    }
}

/// In-process profile store
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    profiles: Vec<(String, ColorSnapshot)>,
}

impl MemoryProfileStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load(&self, name: &str) -> Result<Option<ColorSnapshot>> {
        Ok(self
            .profiles
            .iter()
            .find(|(stored_name, _)| stored_name == name)
            .map(|(_, snapshot)| snapshot.clone()))
    }

    fn save(&mut self, name: &str, snapshot: &ColorSnapshot) -> Result<()> {
        upsert(&mut self.profiles, name, snapshot.clone());
        Ok(())
    }

    fn names(&self) -> Result<Vec<String>> {
        Ok(self.profiles.iter().map(|(name, _)| name.clone()).collect())
    }
}

/// Replace the entry for `name` in place, or append it
fn upsert<T>(entries: &mut Vec<(String, T)>, name: &str, value: T) {
    match entries.iter_mut().find(|(stored_name, _)| stored_name == name) {
        Some((_, slot)) => *slot = value,
        None => entries.push((name.to_string(), value)),
    }
}

fn to_stored(snapshot: &ColorSnapshot) -> StoredProfile {
    snapshot
        .iter()
        .map(|(tag, center)| (tag.code().to_string(), *center))
        .collect()
}

fn to_snapshot(name: &str, stored: StoredProfile) -> ColorSnapshot {
    let mut snapshot = ColorSnapshot::new();
    for (key, center) in stored {
        let mut chars = key.chars();
        let tag = match (chars.next().and_then(ColorTag::from_code), chars.next()) {
            (Some(tag), None) if tag.is_known() => tag,
            _ => {
                warn!(profile = name, key = %key, "ignoring unrecognised color in profile");
                continue;
            }
        };
        snapshot.insert(tag, center);
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> ColorSnapshot {
        let mut snapshot = ColorSnapshot::new();
        snapshot.insert(ColorTag::Red, Hsv::new(3, 200, 180));
        snapshot.insert(ColorTag::Green, Hsv::new(65, 210, 150));
        snapshot
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryProfileStore::new();
        store.save("lamp", &sample_snapshot()).unwrap();
        assert_eq!(store.load("lamp").unwrap(), Some(sample_snapshot()));
        assert_eq!(store.load("window").unwrap(), None);
        assert_eq!(store.names().unwrap(), vec!["lamp".to_string()]);
    }

    #[test]
    fn test_memory_store_overwrites_silently() {
        let mut store = MemoryProfileStore::new();
        store.save("lamp", &sample_snapshot()).unwrap();
        store.save("lamp", &ColorSnapshot::new()).unwrap();
        assert_eq!(store.load("lamp").unwrap(), Some(ColorSnapshot::new()));
    }

    #[test]
    fn test_stored_keys_are_tag_codes() {
        let stored = to_stored(&sample_snapshot());
        let json = serde_json::to_string(&stored).unwrap();
        assert_eq!(json, r#"{"g":[65,210,150],"r":[3,200,180]}"#);
    }

    #[test]
    fn test_unrecognised_keys_are_skipped() {
        let stored: StoredProfile =
            serde_json::from_str(r#"{"r":[3,200,180],"u":[0,0,0],"purple":[150,100,100]}"#)
                .unwrap();
        let snapshot = to_snapshot("test", stored);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[&ColorTag::Red], Hsv::new(3, 200, 180));
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonProfileStore::new(dir.path().join("color_info.json"));
        assert!(store.names().unwrap().is_empty());
        assert_eq!(store.load("anything").unwrap(), None);
        assert_eq!(store.first_name().unwrap(), None);
    }

    #[test]
    fn test_json_store_keeps_other_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonProfileStore::new(dir.path().join("color_info.json"));
        store.save("lamp", &sample_snapshot()).unwrap();
        store.save("daylight", &ColorSnapshot::new()).unwrap();

        assert_eq!(
            store.names().unwrap(),
            vec!["lamp".to_string(), "daylight".to_string()]
        );
        assert_eq!(store.load("lamp").unwrap(), Some(sample_snapshot()));
    }

    #[test]
    fn test_json_store_follows_document_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("color_info.json");
        fs::write(
            &path,
            r#"{"zeta": {"r": [3, 200, 180]}, "alpha": {"g": [65, 210, 150]}}"#,
        )
        .unwrap();

        let mut store = JsonProfileStore::new(&path);
        assert_eq!(store.first_name().unwrap(), Some("zeta".to_string()));

        // Overwriting keeps the entry in place; new names go last
        store.save("alpha", &sample_snapshot()).unwrap();
        store.save("beta", &ColorSnapshot::new()).unwrap();
        store.save("zeta", &ColorSnapshot::new()).unwrap();
        assert_eq!(
            store.names().unwrap(),
            vec!["zeta".to_string(), "alpha".to_string(), "beta".to_string()]
        );
        assert_eq!(store.load("alpha").unwrap(), Some(sample_snapshot()));
    }

    #[test]
    fn test_json_store_malformed_profile_is_hard_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("color_info.json");
        fs::write(&path, r#"{"lamp": {"r": "bright"}}"#).unwrap();

        let err = JsonProfileStore::new(&path).names().unwrap_err();
        assert!(matches!(err, ScanError::ProfileFormat { .. }));
    }

    #[test]
    fn test_json_store_malformed_document_is_hard_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("color_info.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonProfileStore::new(&path);
        let err = store.load("lamp").unwrap_err();
        assert!(matches!(err, ScanError::ProfileFormat { .. }));
        assert!(!err.is_recoverable());
    }
}
