//! Startup configuration
//!
//! Values are layered: command line flags (and their environment variables)
//! win over the TOML config file, which wins over built-in defaults.

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_PROJECTS_ROOT: &str = "/project_entries/";
const DEFAULT_FOLDER_MARKER: &str = "entry_";
const DEFAULT_NAV_OFFSET: f32 = 60.0;
const DEFAULT_THUMBNAIL_SIZE: u32 = 256;

/// Command line flags
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Portfolio page backed by a static file server")]
pub struct Args {
    /// Path to the TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the static file server
    #[arg(long, env = "FOLIO_BASE_URL")]
    pub base_url: Option<String>,

    /// Where the project list comes from
    #[arg(long, env = "FOLIO_LISTING", value_enum)]
    pub listing: Option<ListingSource>,

    /// Log filter (e.g. "debug" or "folio=trace")
    #[arg(long, env = "FOLIO_LOG")]
    pub log_level: Option<String>,
}

/// How project folders and images are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ListingSource {
    /// Scrape the server's HTML directory listings
    #[default]
    Directory,
    /// Read `manifest.json` from the projects root
    Manifest,
}

/// Text shown in the hero and about sections
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "My Portfolio".to_string(),
            tagline: "Things I have built".to_string(),
            about: "I build software and write about it. \
                    Browse the projects below or get in touch."
                .to_string(),
        }
    }
}

/// Contents of the config file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    base_url: Option<String>,
    projects_root: Option<String>,
    folder_marker: Option<String>,
    nav_offset: Option<f32>,
    thumbnail_size: Option<u32>,
    listing: Option<ListingSource>,
    log_level: Option<String>,
    profile: Profile,
}

impl FileConfig {
    fn parse(source: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|source| ConfigError::Toml {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Resolved configuration used by the rest of the app
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    /// Path of the projects root, always with leading and trailing slash.
    /// It is resolved below any path already on `base_url`.
    pub projects_root: String,
    /// Substring identifying project folders in the root listing
    pub folder_marker: String,
    /// Distance above a section's top at which its nav link lights up
    pub nav_offset: f32,
    pub thumbnail_size: u32,
    pub listing: ListingSource,
    pub log_level: Option<String>,
    pub profile: Profile,
}

impl Config {
    /// Build the config from flags, the config file and defaults.
    ///
    /// The default config file location is optional; a file named with
    /// `--config` must exist.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => Some(read_file(path)?),
            None => match default_config_path() {
                Some(path) if path.exists() => Some(read_file(&path)?),
                _ => None,
            },
        };

        Self::resolve(args, file.unwrap_or_default())
    }

    fn resolve(args: &Args, file: FileConfig) -> Result<Self, ConfigError> {
        let raw_url = args
            .base_url
            .clone()
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_url).map_err(|source| ConfigError::BaseUrl {
            url: raw_url.clone(),
            source,
        })?;

        let projects_root = normalize_root(
            file.projects_root
                .as_deref()
                .unwrap_or(DEFAULT_PROJECTS_ROOT),
        );

        Ok(Self {
            base_url,
            projects_root,
            folder_marker: file
                .folder_marker
                .unwrap_or_else(|| DEFAULT_FOLDER_MARKER.to_string()),
            nav_offset: file.nav_offset.unwrap_or(DEFAULT_NAV_OFFSET),
            thumbnail_size: file.thumbnail_size.unwrap_or(DEFAULT_THUMBNAIL_SIZE),
            listing: args.listing.or(file.listing).unwrap_or_default(),
            log_level: args.log_level.clone().or(file.log_level),
            profile: file.profile,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            projects_root: DEFAULT_PROJECTS_ROOT.to_string(),
            folder_marker: DEFAULT_FOLDER_MARKER.to_string(),
            nav_offset: DEFAULT_NAV_OFFSET,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            listing: ListingSource::default(),
            log_level: None,
            profile: Profile::default(),
        }
    }
}

/// ~/.config/folio/config.toml on Linux
fn default_config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("folio");
    path.push("config.toml");
    Some(path)
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    FileConfig::parse(&source, path)
}

fn normalize_root(root: &str) -> String {
    let trimmed = root.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
