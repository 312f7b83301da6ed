//! The seam between the filter and the fuzzy-matching capability.

use crate::types::{Project, ProjectId, SearchOptions};

/// Resolves a dotted key path (e.g. `maintainer.name`) to a field value.
///
/// `None` means the field is absent for this item and is skipped by the
/// index.
pub trait Searchable {
    fn field(&self, path: &str) -> Option<&str>;
}

/// A built index over a fixed set of projects.
pub trait ProjectIndex {
    /// Returns the ids of matching projects, best match first.
    ///
    /// The empty query is not special-cased here.
    fn query(&self, text: &str) -> Vec<ProjectId>;
}

/// Builds a [`ProjectIndex`] from a dataset and search options.
pub trait IndexFactory {
    fn build(&self, projects: &[Project], options: &SearchOptions) -> Box<dyn ProjectIndex>;
}
