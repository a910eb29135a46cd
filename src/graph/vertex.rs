use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A named vertex. Equality and hashing are by name only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vertex {
    name: String,
}

impl Vertex {
    /// Creates a vertex with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Vertex { name: name.into() }
    }

    /// Returns the vertex name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Vertex {
    fn from(name: &str) -> Self {
        Vertex::new(name)
    }
}

impl From<String> for Vertex {
    fn from(name: String) -> Self {
        Vertex { name }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
