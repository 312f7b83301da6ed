use super::ProjectId;
use crate::index::Searchable;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A project as rendered on one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: ProjectId,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub maintainer: Option<Maintainer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintainer {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

impl Project {
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            maintainer: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_maintainer(mut self, name: impl Into<String>) -> Self {
        self.maintainer = Some(Maintainer { name: name.into() });
        self
    }
}

impl Searchable for Project {
    fn field(&self, path: &str) -> Option<&str> {
        match path {
            "id" => Some(self.id.as_str()),
            "name" => Some(&self.name),
            "description" => Some(&self.description),
            "maintainer.name" => self.maintainer.as_ref().map(|m| m.name.as_str()),
            _ => None,
        }
    }
}

/// Card ids are compared as text, so numeric ids in the dataset are accepted
/// and kept as their decimal form.
fn deserialize_id<'de, D>(deserializer: D) -> Result<ProjectId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    let raw = match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    };

    ProjectId::try_new(raw).map_err(D::Error::custom)
}

/// `null` text fields are treated like blank ones, which are never indexed.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
