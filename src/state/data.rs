//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the site loader and the UI layer.

use iced::widget::image;

/// A project discovered in the projects root
#[derive(Debug, Clone)]
pub struct Project {
    /// Folder identifier as it appears in the listing (e.g. "entry_my_project")
    pub folder: String,
    /// Display title (e.g. "My Project")
    pub title: String,
    /// Contents of summary.txt
    pub summary: String,
    /// Trimmed contents of github.txt
    pub source_url: String,
    /// Absolute URL of the thumbnail image
    pub thumbnail_url: String,
    /// Decoded thumbnail, None if the image could not be decoded
    pub thumbnail: Option<image::Handle>,
}

/// Page sections in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Anchor name of the section
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Label of the section's navigation link
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}
