//! Activation and the query-to-visibility cycle.

use crate::dataset::Dataset;
use crate::display::{self, CardElement, QueryInput, VisibilityController};
use crate::error::ActivationError;
use crate::index::{IndexFactory, ProjectIndex};
use crate::types::{FilterConfig, ProjectId};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use tracing::{debug, trace};

/// A built index paired with the cards it drives.
pub struct ProjectFilter<C> {
    index: Box<dyn ProjectIndex>,
    controller: VisibilityController<C>,
    query: String,
}

impl<C: CardElement> ProjectFilter<C> {
    pub fn new(index: Box<dyn ProjectIndex>, controller: VisibilityController<C>) -> Self {
        Self {
            index,
            controller,
            query: String::new(),
        }
    }

    /// Runs one full cycle: query the index, then re-apply visibility to
    /// every card. Returns the match set.
    pub fn handle_input(&mut self, text: &str) -> HashSet<ProjectId> {
        let has_query = !text.is_empty();
        let matches: HashSet<ProjectId> = self.index.query(text).into_iter().collect();

        trace!(query = text, matches = matches.len(), "filtering cards");

        self.controller.apply_visibility(&matches, has_query);
        self.query.clear();
        self.query.push_str(text);
        matches
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn controller(&self) -> &VisibilityController<C> {
        &self.controller
    }
}

/// Shared handle to an active filter.
///
/// The input listener holds another handle to the same filter; both run on
/// the UI thread only.
pub struct FilterHandle<C> {
    inner: Rc<RefCell<ProjectFilter<C>>>,
}

impl<C> Clone for FilterHandle<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C: CardElement> FilterHandle<C> {
    /// Runs a cycle without going through the input, e.g. to apply an
    /// initial value.
    pub fn run(&self, text: &str) -> HashSet<ProjectId> {
        self.inner.borrow_mut().handle_input(text)
    }

    pub fn query(&self) -> String {
        self.inner.borrow().query().to_string()
    }

    pub fn visible_ids(&self) -> Vec<ProjectId> {
        self.inner
            .borrow()
            .controller()
            .visible_ids()
            .cloned()
            .collect()
    }

    pub fn hidden_ids(&self) -> Vec<ProjectId> {
        self.inner
            .borrow()
            .controller()
            .hidden_ids()
            .cloned()
            .collect()
    }
}

/// Builds the index and binds the input, or reports why it could not.
///
/// Checks run in order: dataset present, dataset a non-empty sequence of
/// well-formed projects, matcher present. On error the input gets no
/// listener and no card is modified.
pub fn activate<C>(
    dataset: Option<&Value>,
    factory: Option<&dyn IndexFactory>,
    config: &FilterConfig,
    input: &mut dyn QueryInput,
    cards: Vec<(ProjectId, C)>,
) -> Result<FilterHandle<C>, ActivationError>
where
    C: CardElement + 'static,
{
    let dataset = Dataset::from_value(dataset.ok_or(ActivationError::MissingDataset)?)?;
    let factory = factory.ok_or(ActivationError::MissingMatcher)?;

    Ok(activate_with(&dataset, factory, config, input, cards))
}

/// Like [`activate`] for an already-parsed dataset and a known matcher,
/// which leaves nothing to fail.
pub fn activate_with<C>(
    dataset: &Dataset,
    factory: &dyn IndexFactory,
    config: &FilterConfig,
    input: &mut dyn QueryInput,
    cards: Vec<(ProjectId, C)>,
) -> FilterHandle<C>
where
    C: CardElement + 'static,
{
    let index = factory.build(dataset.projects(), &config.search);
    let controller = VisibilityController::new(cards, config.display.hidden_class.clone());

    debug!(
        projects = dataset.len(),
        cards = controller.len(),
        "project filter activated"
    );

    let handle = FilterHandle {
        inner: Rc::new(RefCell::new(ProjectFilter::new(index, controller))),
    };

    let listener = handle.clone();
    display::bind(input, move |text| {
        listener.run(text);
    });

    handle
}
