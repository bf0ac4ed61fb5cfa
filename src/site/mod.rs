//! Static file server access
//!
//! This module handles:
//! - Discovering project folders in the projects root (listing.rs, manifest.rs)
//! - Loading one project's summary, source link and thumbnail
//! - Loading a project's gallery image list and gallery images
//! - Decoding thumbnails (thumbnail.rs)

pub mod listing;
pub mod manifest;
pub mod thumbnail;

use iced::futures::{SinkExt, Stream};
use iced::widget::image::Handle;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::{Config, ListingSource};
use crate::error::SiteError;
use crate::state::data::Project;
use manifest::{Manifest, MANIFEST_FILE};

const SUMMARY_FILE: &str = "summary.txt";
const SOURCE_LINK_FILE: &str = "github.txt";
const GALLERY_DIR: &str = "gallery/";

/// Progress of a project list load, one event per finished card
#[derive(Debug, Clone)]
pub enum ProjectEvent {
    Loaded(Project),
    /// The load stopped; the grid shows the error message
    Failed(String),
    Finished,
}

/// Client for the projects root on the static file server
#[derive(Debug, Clone)]
pub struct Site {
    client: reqwest::Client,
    /// Absolute URL of the projects root, ending in `/`
    root: Url,
    marker: String,
    listing: ListingSource,
    thumbnail_size: u32,
    manifest: Arc<OnceCell<Manifest>>,
}

impl Site {
    pub fn new(config: &Config) -> Result<Self, SiteError> {
        // The root is relative so a base URL with a path keeps it
        let mut base = config.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let root = join(&base, config.projects_root.trim_start_matches('/'))?;

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| SiteError::Http {
                url: root.to_string(),
                source,
            })?;

        Ok(Self {
            client,
            root,
            marker: config.folder_marker.clone(),
            listing: config.listing,
            thumbnail_size: config.thumbnail_size,
            manifest: Arc::new(OnceCell::new()),
        })
    }

    pub fn root(&self) -> &Url {
        &self.root
    }

    /// Folder identifiers in the order the server lists them
    pub async fn discover_projects(&self) -> Result<Vec<String>, SiteError> {
        let folders = match self.listing {
            ListingSource::Directory => {
                let html = self.fetch_text(self.root.clone()).await?;
                listing::project_folders(&self.root, &html, &self.marker)
            }
            ListingSource::Manifest => self.manifest().await?.folders(),
        };

        info!("🔍 Found {} project folders in {}", folders.len(), self.root);
        Ok(folders)
    }

    /// Load everything a card needs.
    ///
    /// Returns `Ok(None)` when the folder has no thumbnail image; such a
    /// project is skipped.
    pub async fn load_project(&self, folder: &str) -> Result<Option<Project>, SiteError> {
        let folder_url = self.folder_url(folder)?;

        let summary_url = join(&folder_url, SUMMARY_FILE)?;
        let source_link_url = join(&folder_url, SOURCE_LINK_FILE)?;

        let (summary, source_url) = tokio::join!(
            self.fetch_project_text(summary_url),
            self.fetch_project_text(source_link_url),
        );
        let summary = summary?;
        let source_url = source_url?;

        let thumbnail_url = match self.find_thumbnail(folder, &folder_url).await? {
            Some(url) => url,
            None => {
                error!("No image found for project {}", folder);
                return Ok(None);
            }
        };

        let thumbnail = match self.load_thumbnail(&thumbnail_url).await {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!("⚠️  Thumbnail for {} unavailable: {}", folder, e);
                None
            }
        };

        Ok(Some(Project {
            folder: folder.to_string(),
            title: listing::project_title(folder, &self.marker),
            summary: summary.trim().to_string(),
            source_url: source_url.trim().to_string(),
            thumbnail_url: thumbnail_url.to_string(),
            thumbnail,
        }))
    }

    /// Absolute URLs of every image in the folder's gallery, in listing order
    pub async fn load_gallery(&self, folder: &str) -> Result<Vec<String>, SiteError> {
        let gallery_url = join(&self.folder_url(folder)?, GALLERY_DIR)?;

        let files = match self.listing {
            ListingSource::Directory => {
                let html = self.fetch_text(gallery_url.clone()).await?;
                listing::image_files(&gallery_url, &html)
            }
            ListingSource::Manifest => self
                .manifest()
                .await?
                .entry(folder)
                .map(|entry| entry.gallery.clone())
                .unwrap_or_default(),
        };

        let images = files
            .iter()
            .map(|file| join(&gallery_url, file).map(String::from))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("🖼️  Gallery for {} has {} images", folder, images.len());
        Ok(images)
    }

    /// Fetch a full-size gallery image; iced decodes it on first draw
    pub async fn load_image(&self, url: &str) -> Result<Handle, SiteError> {
        let url = Url::parse(url).map_err(|source| SiteError::Url {
            base: String::new(),
            path: url.to_string(),
            source,
        })?;
        let bytes = self.fetch_bytes(url).await?;
        Ok(Handle::from_bytes(bytes))
    }

    async fn find_thumbnail(&self, folder: &str, folder_url: &Url) -> Result<Option<Url>, SiteError> {
        let file = match self.listing {
            ListingSource::Directory => match self.fetch_text(folder_url.clone()).await {
                Ok(html) => listing::image_files(folder_url, &html).into_iter().next(),
                // A folder the server will not list has no image links
                Err(SiteError::Status { url, status }) => {
                    warn!("⚠️  Listing {} returned {}", url, status);
                    None
                }
                Err(e) => return Err(e),
            },
            ListingSource::Manifest => self
                .manifest()
                .await?
                .entry(folder)
                .and_then(|entry| entry.thumbnail.clone())
                .filter(|file| listing::is_image(file)),
        };

        file.map(|file| join(folder_url, &file)).transpose()
    }

    async fn load_thumbnail(&self, url: &Url) -> Result<Handle, SiteError> {
        let bytes = self.fetch_bytes(url.clone()).await?;
        thumbnail::decode_thumbnail_async(bytes, self.thumbnail_size, url.to_string()).await
    }

    async fn manifest(&self) -> Result<&Manifest, SiteError> {
        self.manifest
            .get_or_try_init(|| async {
                let json = self.fetch_text(join(&self.root, MANIFEST_FILE)?).await?;
                Manifest::parse(&json)
            })
            .await
    }

    fn folder_url(&self, folder: &str) -> Result<Url, SiteError> {
        join(&self.root, &format!("{}/", folder.trim_end_matches('/')))
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, SiteError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| SiteError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SiteError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response)
    }

    async fn fetch_text(&self, url: Url) -> Result<String, SiteError> {
        let response = self.get(url.clone()).await?;
        response.text().await.map_err(|source| SiteError::Http {
            url: url.to_string(),
            source,
        })
    }

    /// Text file inside a project folder; a missing file reads as empty.
    ///
    /// Only transport failures are errors here.
    async fn fetch_project_text(&self, url: Url) -> Result<String, SiteError> {
        match self.fetch_text(url).await {
            Err(SiteError::Status { url, status }) => {
                warn!("⚠️  {} returned {}, using an empty value", url, status);
                Ok(String::new())
            }
            result => result,
        }
    }

    async fn fetch_bytes(&self, url: Url) -> Result<Vec<u8>, SiteError> {
        let response = self.get(url.clone()).await?;
        let bytes = response.bytes().await.map_err(|source| SiteError::Http {
            url: url.to_string(),
            source,
        })?;
        Ok(bytes.to_vec())
    }
}

/// Discover and load every project, one after the other.
///
/// Emits a `Loaded` event per card in discovery order, then `Finished`. Any
/// fetch failure ends the stream with `Failed`.
pub fn project_stream(site: Site) -> impl Stream<Item = ProjectEvent> {
    iced::stream::channel(16, move |mut output| async move {
        let folders = match site.discover_projects().await {
            Ok(folders) => folders,
            Err(e) => {
                let _ = output.send(ProjectEvent::Failed(e.to_string())).await;
                return;
            }
        };

        for folder in folders {
            match site.load_project(&folder).await {
                Ok(Some(project)) => {
                    let _ = output.send(ProjectEvent::Loaded(project)).await;
                }
                Ok(None) => {}
                Err(e) => {
                    let _ = output.send(ProjectEvent::Failed(e.to_string())).await;
                    return;
                }
            }
        }

        let _ = output.send(ProjectEvent::Finished).await;
    })
}

fn join(base: &Url, path: &str) -> Result<Url, SiteError> {
    base.join(path).map_err(|source| SiteError::Url {
        base: base.to_string(),
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};
    use axum::response::Html;
    use axum::routing::get;
    use axum::Router;
    use iced::futures::StreamExt;

    use super::thumbnail::png_bytes;

    fn listing_page(entries: &[&str]) -> String {
        let items: String = entries
            .iter()
            .map(|entry| format!("<li><a href=\"{entry}\">{entry}</a></li>\n"))
            .collect();
        format!("<html><body><h1>Directory listing</h1><ul>\n{items}</ul></body></html>")
    }

    fn png() -> ([(header::HeaderName, &'static str); 1], Vec<u8>) {
        ([(header::CONTENT_TYPE, "image/png")], png_bytes(400, 200))
    }

    /// entry_alpha: a complete project with a gallery
    fn alpha() -> Router {
        Router::new()
            .route(
                "/project_entries/entry_alpha/",
                get(|| async {
                    Html(listing_page(&["gallery/", "github.txt", "summary.txt", "cover.png"]))
                }),
            )
            .route("/project_entries/entry_alpha/summary.txt", get(|| async { "Alpha summary\n" }))
            .route(
                "/project_entries/entry_alpha/github.txt",
                get(|| async { "  https://github.com/me/alpha\n" }),
            )
            .route("/project_entries/entry_alpha/cover.png", get(|| async { png() }))
            .route(
                "/project_entries/entry_alpha/gallery/",
                get(|| async { Html(listing_page(&["one.PNG", "notes.txt", "two.jpeg"])) }),
            )
    }

    /// Two complete projects, one without an image, and a gallery
    fn portfolio() -> Router {
        Router::new()
            .route(
                "/project_entries/",
                get(|| async {
                    Html(listing_page(&[
                        "entry_alpha/",
                        "README.md",
                        "entry_no_image/",
                        "entry_my_project/",
                    ]))
                }),
            )
            .merge(alpha())
            .route(
                "/project_entries/entry_no_image/",
                get(|| async { Html(listing_page(&["summary.txt", "github.txt"])) }),
            )
            .route("/project_entries/entry_no_image/summary.txt", get(|| async { "nothing" }))
            .route("/project_entries/entry_no_image/github.txt", get(|| async { "https://x" }))
            .route(
                "/project_entries/entry_my_project/",
                get(|| async { Html(listing_page(&["shot.GIF"])) }),
            )
            .route("/project_entries/entry_my_project/summary.txt", get(|| async { "Mine" }))
            .route(
                "/project_entries/entry_my_project/github.txt",
                get(|| async { "https://github.com/me/mine" }),
            )
            .route(
                "/project_entries/entry_my_project/shot.GIF",
                get(|| async { (StatusCode::OK, "not really a gif") }),
            )
            .route(
                "/project_entries/manifest.json",
                get(|| async {
                    r#"{"projects": [
                        {"folder": "entry_my_project", "thumbnail": "shot.GIF"},
                        {"folder": "entry_alpha", "thumbnail": "cover.png", "gallery": ["one.PNG"]},
                        {"folder": "entry_no_image"}
                    ]}"#
                }),
            )
    }

    async fn serve(router: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Url::parse(&format!("http://{addr}")).unwrap()
    }

    async fn site(router: Router, listing: ListingSource) -> Site {
        let config = Config {
            base_url: serve(router).await,
            listing,
            ..Config::default()
        };
        Site::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_discover_in_listing_order() {
        let site = site(portfolio(), ListingSource::Directory).await;
        let folders = site.discover_projects().await.unwrap();
        assert_eq!(folders, ["entry_alpha", "entry_no_image", "entry_my_project"]);
    }

    #[tokio::test]
    async fn test_load_project() {
        let site = site(portfolio(), ListingSource::Directory).await;
        let project = site.load_project("entry_alpha").await.unwrap().unwrap();

        assert_eq!(project.title, "Alpha");
        assert_eq!(project.summary, "Alpha summary");
        assert_eq!(project.source_url, "https://github.com/me/alpha");
        assert!(project.thumbnail_url.ends_with("/project_entries/entry_alpha/cover.png"));
        assert!(project.thumbnail.is_some());
    }

    #[tokio::test]
    async fn test_project_without_image_is_skipped() {
        let site = site(portfolio(), ListingSource::Directory).await;
        assert!(site.load_project("entry_no_image").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_undecodable_thumbnail_keeps_card() {
        let site = site(portfolio(), ListingSource::Directory).await;
        let project = site.load_project("entry_my_project").await.unwrap().unwrap();
        assert_eq!(project.title, "My Project");
        assert!(project.thumbnail.is_none());
    }

    #[tokio::test]
    async fn test_stream_emits_cards_in_order() {
        let site = site(portfolio(), ListingSource::Directory).await;
        let events: Vec<_> = project_stream(site).collect().await;

        let titles: Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                ProjectEvent::Loaded(project) => Some(project.title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(titles, ["Alpha", "My Project"]);
        assert!(matches!(events.last(), Some(ProjectEvent::Finished)));
    }

    #[tokio::test]
    async fn test_broken_project_does_not_fail_the_stream() {
        // entry_broken has a summary but no listing and no github.txt
        let router = alpha()
            .route(
                "/project_entries/",
                get(|| async { Html(listing_page(&["entry_alpha/", "entry_broken/"])) }),
            )
            .route("/project_entries/entry_broken/summary.txt", get(|| async { "Broken" }));
        let site = site(router, ListingSource::Directory).await;

        assert!(site.load_project("entry_broken").await.unwrap().is_none());

        let events: Vec<_> = project_stream(site).collect().await;
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], ProjectEvent::Loaded(project) if project.title == "Alpha"));
        assert!(matches!(events[1], ProjectEvent::Finished));
    }

    #[tokio::test]
    async fn test_missing_source_link_reads_empty() {
        let router = Router::new()
            .route(
                "/project_entries/entry_solo/",
                get(|| async { Html(listing_page(&["cover.png"])) }),
            )
            .route("/project_entries/entry_solo/summary.txt", get(|| async { "Solo" }))
            .route("/project_entries/entry_solo/cover.png", get(|| async { png() }));
        let site = site(router, ListingSource::Directory).await;

        let project = site.load_project("entry_solo").await.unwrap().unwrap();
        assert_eq!(project.summary, "Solo");
        assert_eq!(project.source_url, "");
        assert!(project.thumbnail.is_some());
    }

    #[test]
    fn test_root_keeps_base_url_path() {
        let config = Config {
            base_url: Url::parse("http://files.local/site").unwrap(),
            ..Config::default()
        };
        let site = Site::new(&config).unwrap();
        assert_eq!(site.root().as_str(), "http://files.local/site/project_entries/");

        let site = Site::new(&Config::default()).unwrap();
        assert_eq!(site.root().as_str(), "http://127.0.0.1:8000/project_entries/");
    }

    #[tokio::test]
    async fn test_stream_fails_without_root_listing() {
        let site = site(Router::new(), ListingSource::Directory).await;
        let events: Vec<_> = project_stream(site).collect().await;

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], ProjectEvent::Failed(_)));
    }

    #[tokio::test]
    async fn test_stream_fails_when_server_is_down() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = Config {
            base_url: Url::parse(&format!("http://{addr}")).unwrap(),
            ..Config::default()
        };
        let site = Site::new(&config).unwrap();
        let events: Vec<_> = project_stream(site).collect().await;

        assert!(matches!(events.as_slice(), [ProjectEvent::Failed(_)]));
    }

    #[tokio::test]
    async fn test_gallery_urls() {
        let site = site(portfolio(), ListingSource::Directory).await;
        let images = site.load_gallery("entry_alpha").await.unwrap();

        assert_eq!(images.len(), 2);
        assert!(images[0].ends_with("/project_entries/entry_alpha/gallery/one.PNG"));
        assert!(images[1].ends_with("/project_entries/entry_alpha/gallery/two.jpeg"));
    }

    #[tokio::test]
    async fn test_missing_gallery_is_an_error() {
        let site = site(portfolio(), ListingSource::Directory).await;
        let result = site.load_gallery("entry_my_project").await;
        assert!(matches!(result, Err(SiteError::Status { .. })));
    }

    #[tokio::test]
    async fn test_load_gallery_image() {
        let site = site(portfolio(), ListingSource::Directory).await;
        let url = format!("{}entry_alpha/cover.png", site.root());
        assert!(site.load_image(&url).await.is_ok());
    }

    #[tokio::test]
    async fn test_manifest_listing() {
        let site = site(portfolio(), ListingSource::Manifest).await;

        let folders = site.discover_projects().await.unwrap();
        assert_eq!(folders, ["entry_my_project", "entry_alpha", "entry_no_image"]);

        assert!(site.load_project("entry_no_image").await.unwrap().is_none());
        let alpha = site.load_project("entry_alpha").await.unwrap().unwrap();
        assert!(alpha.thumbnail.is_some());

        let gallery = site.load_gallery("entry_alpha").await.unwrap();
        assert_eq!(gallery.len(), 1);
        assert!(site.load_gallery("entry_no_image").await.unwrap().is_empty());
    }
}
