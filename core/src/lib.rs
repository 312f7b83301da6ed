//! Fuzzy project-card filtering.
//!
//! # Design
//!
//! - A [`ProjectIndex`] is built once from a non-empty [`Dataset`] through an
//!   injected [`IndexFactory`].
//! - Every input event re-runs the query and re-applies visibility to every
//!   tracked card. There is no diffing and no history.
//! - [`activate`] never panics on bad input; unmet preconditions come back as
//!   an [`ActivationError`] and leave the input and the cards untouched.

pub mod dataset;
pub mod display;
pub mod error;
pub mod filter;
pub mod index;
pub mod types;

pub use dataset::Dataset;
pub use display::{Card, CardElement, InputListener, QueryInput, TextInput, VisibilityController};
pub use error::{ActivationError, DatasetError};
pub use filter::{FilterHandle, ProjectFilter, activate, activate_with};
pub use index::{IndexFactory, ProjectIndex, Searchable};
pub use types::{
    ConfigError, DisplayConfig, FilterConfig, Maintainer, Project, ProjectId, ProjectIdError,
    SearchKey, SearchOptions,
};
