use crate::index::FuzzyIndex;
use cardsift_core::{IndexFactory, Project, ProjectId, ProjectIndex, SearchOptions};

/// Builds a [`FuzzyIndex`] over the dataset for the card filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyIndexFactory;

impl IndexFactory for FuzzyIndexFactory {
    fn build(&self, projects: &[Project], options: &SearchOptions) -> Box<dyn ProjectIndex> {
        Box::new(FuzzyIndex::build(projects.to_vec(), options.clone()))
    }
}

impl ProjectIndex for FuzzyIndex<Project> {
    fn query(&self, text: &str) -> Vec<ProjectId> {
        self.search(text)
            .into_iter()
            .filter_map(|hit| self.get(hit.index))
            .map(|project| project.id.clone())
            .collect()
    }
}
