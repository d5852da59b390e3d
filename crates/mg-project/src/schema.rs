//! Layer schema definitions.

use mg_core::Edge;
use serde::{Deserialize, Serialize};

fn default_layer_name() -> String {
    "/".to_string()
}

/// A build-tool layer: the set of projects visible from one workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Layer {
    #[serde(default = "default_layer_name")]
    pub name: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            name: default_layer_name(),
            projects: Vec::new(),
        }
    }
}

impl Layer {
    /// Find a project by name.
    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl Project {
    /// Find a module by name.
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Dependency edges of this project: one `dependency -> module` edge per
    /// declared dependency, in module order then declaration order.
    pub fn dependency_edges(&self) -> Vec<Edge> {
        self.modules
            .iter()
            .flat_map(|module| {
                module
                    .dependencies
                    .iter()
                    .map(|dependency| Edge::new(dependency.as_str(), module.name.as_str()))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Module {
    pub name: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub binaries: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Source {
    pub directory: String,
    #[serde(default)]
    pub kind: SourceKind,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Local,
    Repo,
    #[default]
    Unknown,
}
