//! User interface module
//!
//! Views are plain functions from state to `Element`s:
//! - Page geometry shared with the nav highlighter (layout.rs)
//! - Navigation bar (nav.rs)
//! - Page sections (sections.rs) and project cards (card.rs)
//! - Gallery popup (gallery.rs) and alert (alert.rs), drawn through a
//!   generic modal (modal.rs)

pub mod alert;
pub mod card;
pub mod gallery;
pub mod layout;
pub mod modal;
pub mod nav;
pub mod sections;
