mod filter;
mod search;

pub use filter::{ConfigError, DisplayConfig, FilterConfig};
pub use search::{SearchKey, SearchOptions};
