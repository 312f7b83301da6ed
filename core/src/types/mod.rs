pub(crate) mod config;
pub use config::{ConfigError, DisplayConfig, FilterConfig, SearchKey, SearchOptions};

pub(crate) mod project_id;
pub use project_id::{ProjectId, ProjectIdError};

pub(crate) mod project;
pub use project::{Maintainer, Project};
