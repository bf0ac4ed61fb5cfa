//! JSON manifest listing
//!
//! An explicit alternative to scraping directory pages. The server hosts a
//! single `manifest.json` in the projects root:
//!
//! ```json
//! {"projects": [{"folder": "entry_alpha", "thumbnail": "cover.png", "gallery": ["1.png"]}]}
//! ```

use serde::Deserialize;

use crate::error::SiteError;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub projects: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManifestEntry {
    pub folder: String,
    /// File name inside the folder; a project without one is skipped
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// File names inside the folder's gallery/ directory
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl Manifest {
    pub fn parse(json: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn folders(&self) -> Vec<String> {
        self.projects.iter().map(|entry| entry.folder.clone()).collect()
    }

    pub fn entry(&self, folder: &str) -> Option<&ManifestEntry> {
        self.projects.iter().find(|entry| entry.folder == folder)
    }
}
