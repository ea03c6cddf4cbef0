// src/catalog.rs

use crate::domain::{Agent, Neighborhood, Post, Property};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::fs;
use std::hash::Hash;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const PROPERTIES_FILE: &str = "properties.json";
pub const AGENTS_FILE: &str = "agents.json";
pub const POSTS_FILE: &str = "blog.json";
pub const NEIGHBORHOODS_FILE: &str = "neighborhoods.json";

#[derive(Debug)]
pub enum DataError {
    Read { path: PathBuf, message: String },
    Parse { path: PathBuf, message: String },
    DuplicateId { collection: &'static str, id: String },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Read { path, message } => {
                write!(f, "Failed to read {}: {message}", path.display())
            }
            DataError::Parse { path, message } => {
                write!(f, "Failed to parse {}: {message}", path.display())
            }
            DataError::DuplicateId { collection, id } => {
                write!(f, "Duplicate id {id} in {collection}")
            }
        }
    }
}

impl Error for DataError {}

/// Every record collection the site renders. Loaded once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub properties: Vec<Property>,
    pub agents: Vec<Agent>,
    pub posts: Vec<Post>,
    pub neighborhoods: Vec<Neighborhood>,
}

impl Catalog {
    /// Builds a catalog, rejecting collections with repeated ids.
    pub fn new(
        properties: Vec<Property>,
        agents: Vec<Agent>,
        posts: Vec<Post>,
        neighborhoods: Vec<Neighborhood>,
    ) -> Result<Self, DataError> {
        ensure_unique("properties", properties.iter().map(|p| p.id))?;
        ensure_unique("agents", agents.iter().map(|a| a.id))?;
        ensure_unique("posts", posts.iter().map(|p| p.id))?;
        ensure_unique("neighborhoods", neighborhoods.iter().map(|n| n.id.as_str()))?;

        Ok(Self {
            properties,
            agents,
            posts,
            neighborhoods,
        })
    }

    /// Reads the four JSON fixtures from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, DataError> {
        let dir = dir.as_ref();

        let catalog = Self::new(
            read_collection(dir, PROPERTIES_FILE)?,
            read_collection(dir, AGENTS_FILE)?,
            read_collection(dir, POSTS_FILE)?,
            read_collection(dir, NEIGHBORHOODS_FILE)?,
        )?;

        info!(
            properties = catalog.properties.len(),
            agents = catalog.agents.len(),
            posts = catalog.posts.len(),
            neighborhoods = catalog.neighborhoods.len(),
            "Catalog loaded from {}",
            dir.display()
        );
        Ok(catalog)
    }

    pub fn property(&self, id: u32) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn agent(&self, id: u32) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn post(&self, id: u32) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Neighborhood names offered in the property search form.
    pub fn neighborhood_names(&self) -> Vec<&str> {
        self.neighborhoods.iter().map(|n| n.name.as_str()).collect()
    }
}

fn read_collection<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>, DataError> {
    let path = dir.join(file);
    debug!("Reading {}", path.display());

    let raw = fs::read_to_string(&path).map_err(|e| DataError::Read {
        path: path.clone(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&raw).map_err(|e| DataError::Parse {
        path,
        message: e.to_string(),
    })
}

fn ensure_unique<I>(collection: &'static str, ids: impl Iterator<Item = I>) -> Result<(), DataError>
where
    I: Eq + Hash + ToString,
{
    let mut seen = HashSet::new();
    for id in ids {
        if seen.contains(&id) {
            return Err(DataError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
        seen.insert(id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::{sample_catalog, sample_properties};

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut properties = sample_properties();
        let copy = properties[0].clone();
        properties.push(copy);

        let err = Catalog::new(properties, vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, DataError::DuplicateId { collection: "properties", .. }));
    }

    #[test]
    fn lookups_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.property(3).map(|p| p.id), Some(3));
        assert!(catalog.property(999).is_none());
        assert!(catalog.post(1).is_some());
    }

    #[test]
    fn missing_directory_is_a_read_error() {
        let err = Catalog::load("does/not/exist").unwrap_err();
        assert!(matches!(err, DataError::Read { .. }));
    }

    #[test]
    fn shipped_fixtures_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let catalog = Catalog::load(dir).expect("fixtures should load");

        assert!(!catalog.properties.is_empty());
        assert!(!catalog.agents.is_empty());
        assert!(!catalog.posts.is_empty());
        assert!(!catalog.neighborhoods.is_empty());
    }
}
