use super::data::Project;

/// Replaces the whole grid when the project list cannot be loaded
pub const LOAD_ERROR: &str = "Error loading projects. Please try again later.";

/// Contents of the project grid
#[derive(Debug, Clone, Default)]
pub enum ProjectGrid {
    /// Discovery still running and no card finished yet
    #[default]
    Loading,
    /// Cards in discovery order; more may still arrive
    Cards(Vec<Project>),
    /// Loading failed; only the error message is shown
    Failed,
}

impl ProjectGrid {
    /// Append a finished card.
    ///
    /// A failed grid stays failed: cards from a load that already errored
    /// are dropped.
    pub fn push(&mut self, project: Project) {
        match self {
            ProjectGrid::Loading => *self = ProjectGrid::Cards(vec![project]),
            ProjectGrid::Cards(cards) => cards.push(project),
            ProjectGrid::Failed => {}
        }
    }

    /// Replace everything with the error message
    pub fn fail(&mut self) {
        *self = ProjectGrid::Failed;
    }

    /// Called when discovery ends; an empty load leaves an empty grid
    pub fn finish(&mut self) {
        if let ProjectGrid::Loading = self {
            *self = ProjectGrid::Cards(Vec::new());
        }
    }

    pub fn cards(&self) -> &[Project] {
        match self {
            ProjectGrid::Cards(cards) => cards,
            _ => &[],
        }
    }
}
