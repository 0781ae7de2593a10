//! Configuration for scan-cube sessions.
//!
//! Every field has a built-in default, so a configuration file only needs
//! to name what it changes:
//!
//! ```no_run
//! use scan_cube::ScanConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ScanConfig::from_json_file(Path::new("scan_cube.json"))?;
//!
//! // Or use defaults
//! let config = ScanConfig::default();
//! # Ok::<(), scan_cube::ScanError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::calibration::{ColorRegistry, JsonProfileStore, ProfileStore};
use crate::capture::{CaptureOrder, CaptureSession};
use crate::constants::storage::DEFAULT_PROFILE_PATH;
use crate::cube::CubeState;
use crate::error::{Result, ScanError};

/// Scanner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// JSON profile store
    pub profile_path: PathBuf,

    /// Profile loaded at startup; the first stored name when unset
    pub default_profile: Option<String>,

    /// Face order for guided capture
    pub capture_order: CaptureOrder,

    /// Start sessions in guided capture
    pub start_guided: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            profile_path: PathBuf::from(DEFAULT_PROFILE_PATH),
            default_profile: None,
            capture_order: CaptureOrder::default(),
            start_guided: false,
        }
    }
}

impl ScanConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScanError::config(format!("cannot read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ScanError::config(format!("cannot parse {}", path.display()), e)
        })?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ScanError::config("cannot serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            ScanError::config(format!("cannot write {}", path.display()), e)
        })?;
        Ok(())
    }

    /// Profile store at `profile_path`
    pub fn profile_store(&self) -> JsonProfileStore {
        JsonProfileStore::new(&self.profile_path)
    }

    /// Name of the profile to load at startup, if any
    pub fn startup_profile<P: ProfileStore + ?Sized>(&self, store: &P) -> Result<Option<String>> {
        match &self.default_profile {
            Some(name) => Ok(Some(name.clone())),
            None => store.first_name(),
        }
    }

    /// Registry calibrated from the startup profile
    ///
    /// Falls back to the built-in ranges when the store holds no profiles
    /// or lacks the configured one. Only store failures are errors.
    pub fn startup_registry<P: ProfileStore + ?Sized>(&self, store: &P) -> Result<ColorRegistry> {
        let mut registry = ColorRegistry::with_defaults();
        if let Some(name) = self.startup_profile(store)? {
            match registry.load_profile(store, &name) {
                Ok(()) => info!(profile = %name, "startup profile loaded"),
                Err(ScanError::ProfileNotFound { .. }) => {
                    warn!(profile = %name, "startup profile not found, using default ranges");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(registry)
    }

    /// New capture session over a solved cube
    pub fn capture_session(&self) -> CaptureSession {
        let mut session = CaptureSession::with_order(CubeState::solved(), self.capture_order.clone());
        if self.start_guided {
            session.start_guided();
        }
        session
    }
}
