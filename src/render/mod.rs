//! Turns fetched records into display fragments.
//!
//! `profile` and `repos` build plain data fragments; `html` serialises them
//! for the browser view.

pub mod html;
pub mod profile;
pub mod repos;

pub use profile::ProfileCard;
pub use repos::{RepoCard, RepoGrid, TopicTag};
