//! Typed view of the build-tool server's layer payload.
//!
//! The server nests every name one level deep (`id.key`, `ref.id`,
//! `dir.input`). These structs mirror that shape exactly; [`WireLayer::into_layer`]
//! flattens it into the [`Layer`] schema. Unknown fields are ignored.

use serde::Deserialize;

use crate::schema::{Layer, Module, Project, Source, SourceKind};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WireLayer {
    #[serde(default)]
    pub projects: Vec<WireProject>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WireKey {
    pub key: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WireProject {
    pub id: WireKey,
    #[serde(default)]
    pub modules: Vec<WireModule>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WireModule {
    pub id: WireKey,
    #[serde(default)]
    pub dependencies: Vec<WireDependency>,
    #[serde(default)]
    pub sources: Vec<WireSource>,
    #[serde(default)]
    pub binaries: Vec<WireBinary>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WireDependency {
    #[serde(rename = "ref")]
    pub reference: WireRef,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WireRef {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WireSource {
    pub dir: WireDir,
    #[serde(rename = "_type", default)]
    pub source_type: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WireDir {
    pub input: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WireBinary {
    pub id: WireKey,
}

impl WireLayer {
    /// Flatten the payload into a layer named `/`.
    pub fn into_layer(self) -> Layer {
        Layer {
            projects: self.projects.into_iter().map(Project::from).collect(),
            ..Layer::default()
        }
    }
}

impl From<WireProject> for Project {
    fn from(wire: WireProject) -> Self {
        Self {
            name: wire.id.key,
            modules: wire.modules.into_iter().map(Module::from).collect(),
        }
    }
}

impl From<WireModule> for Module {
    fn from(wire: WireModule) -> Self {
        Self {
            name: wire.id.key,
            dependencies: wire
                .dependencies
                .into_iter()
                .map(|d| d.reference.id)
                .collect(),
            sources: wire.sources.into_iter().map(Source::from).collect(),
            binaries: wire.binaries.into_iter().map(|b| b.id.key).collect(),
        }
    }
}

impl From<WireSource> for Source {
    fn from(wire: WireSource) -> Self {
        Self {
            directory: wire.dir.input,
            kind: source_kind(&wire.source_type),
        }
    }
}

fn source_kind(source_type: &str) -> SourceKind {
    match source_type {
        "LocalSource" => SourceKind::Local,
        "RepoSource" => SourceKind::Repo,
        _ => SourceKind::Unknown,
    }
}
