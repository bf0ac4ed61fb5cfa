//! State management module
//!
//! This module holds all transient application state:
//! - Shared data structures (data.rs)
//! - Project grid contents (grid.rs)
//! - Gallery popup state (gallery.rs)
//! - Navigation highlighting and smooth scrolling (nav.rs)
//! - Contact form (contact.rs)

pub mod contact;
pub mod data;
pub mod gallery;
pub mod grid;
pub mod nav;
