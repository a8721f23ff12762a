//! Graph configuration for waygraph
//!
//! Configuration is read from a TOML file such as:
//!
//! ```toml
//! removal = "detach"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What `remove_vertex` does with edges touching the removed vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovalPolicy {
    /// Drop the vertex's outgoing edges and every edge pointing at it
    #[default]
    Cascade,
    /// Drop the vertex and its outgoing edges; only the edges from other
    /// vertices into it are kept, and the queries skip them
    Detach,
}

/// Graph configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Vertex removal behaviour
    #[serde(default)]
    pub removal: RemovalPolicy,
}

impl GraphConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), removal = ?config.removal, "loaded config");
        Ok(config)
    }
}
