//! Page geometry
//!
//! Every section is drawn at a height computed here, so the view and the
//! navigation highlighter agree on where each section starts.

use crate::state::data::Section;

/// Height of the fixed navigation bar above the scrollable page
pub const NAV_HEIGHT: f32 = 56.0;

pub const HERO_HEIGHT: f32 = 520.0;
pub const ABOUT_HEIGHT: f32 = 360.0;
pub const CONTACT_HEIGHT: f32 = 600.0;

/// Heading and intro text above the project grid
pub const PROJECTS_HEADER: f32 = 110.0;
pub const SECTION_PADDING: f32 = 40.0;

pub const CARD_WIDTH: f32 = 300.0;
pub const CARD_HEIGHT: f32 = 400.0;
pub const CARD_SPACING: f32 = 24.0;

/// Room left for the vertical scrollbar
const SCROLLBAR_ALLOWANCE: f32 = 16.0;

/// Geometry of the page for one viewport width and card count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub viewport_width: f32,
    pub card_count: usize,
}

impl PageLayout {
    pub fn new(viewport_width: f32, card_count: usize) -> Self {
        Self {
            viewport_width,
            card_count,
        }
    }

    /// How many cards fit side by side; never less than one
    pub fn cards_per_row(&self) -> usize {
        let usable = self.viewport_width - SCROLLBAR_ALLOWANCE - 2.0 * SECTION_PADDING;
        let per_row = ((usable + CARD_SPACING) / (CARD_WIDTH + CARD_SPACING)).floor();
        if per_row.is_finite() && per_row >= 1.0 {
            per_row as usize
        } else {
            1
        }
    }

    /// Width of a full row of cards
    pub fn grid_width(&self) -> f32 {
        let per_row = self.cards_per_row() as f32;
        per_row * CARD_WIDTH + (per_row - 1.0) * CARD_SPACING
    }

    /// Rows in the grid; an empty grid still reserves one row for its message
    pub fn grid_rows(&self) -> usize {
        self.card_count.div_ceil(self.cards_per_row()).max(1)
    }

    pub fn grid_height(&self) -> f32 {
        let rows = self.grid_rows() as f32;
        rows * CARD_HEIGHT + (rows - 1.0) * CARD_SPACING
    }

    pub fn section_height(&self, section: Section) -> f32 {
        match section {
            Section::Home => HERO_HEIGHT,
            Section::About => ABOUT_HEIGHT,
            Section::Projects => PROJECTS_HEADER + self.grid_height() + SECTION_PADDING,
            Section::Contact => CONTACT_HEIGHT,
        }
    }

    /// Top offset of every section within the scrollable content, in order
    pub fn section_tops(&self) -> Vec<(Section, f32)> {
        let mut top = 0.0;
        Section::ALL
            .into_iter()
            .map(|section| {
                let start = top;
                top += self.section_height(section);
                (section, start)
            })
            .collect()
    }

    pub fn top_of(&self, section: Section) -> f32 {
        self.section_tops()
            .into_iter()
            .find(|(s, _)| *s == section)
            .map(|(_, top)| top)
            .unwrap_or(0.0)
    }

    pub fn content_height(&self) -> f32 {
        Section::ALL
            .into_iter()
            .map(|section| self.section_height(section))
            .sum()
    }

    /// Largest scroll offset for a viewport of the given height
    pub fn max_scroll(&self, viewport_height: f32) -> f32 {
        (self.content_height() - viewport_height).max(0.0)
    }
}
