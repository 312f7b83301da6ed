//! Parsing of the project list the cards were rendered from.

use crate::error::DatasetError;
use crate::types::Project;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// A non-empty, ordered list of projects.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    projects: Vec<Project>,
}

impl Dataset {
    /// Wraps already-typed projects. Fails on an empty list.
    pub fn new(projects: Vec<Project>) -> Result<Self, DatasetError> {
        if projects.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self { projects })
    }

    /// Parses a JSON value that must be a non-empty array of projects.
    pub fn from_value(value: &Value) -> Result<Self, DatasetError> {
        let Value::Array(items) = value else {
            return Err(DatasetError::NotASequence {
                found: kind_of(value),
            });
        };

        let projects = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                Project::deserialize(item).map_err(|e| DatasetError::InvalidProject {
                    index,
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(projects)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests;
