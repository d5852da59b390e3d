//! mg-project: layer file formats, validation, and dependency edge extraction.

pub mod schema;
pub mod validate;
pub mod wire;

use std::path::Path;

use tracing::debug;

pub use schema::*;
pub use validate::{ValidationError, validate_layer, validate_project};
pub use wire::WireLayer;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Cannot infer layer format from path: {path}")]
    UnknownFormat { path: String },

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encoding of a layer file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerFormat {
    /// [`Layer`] schema as YAML.
    Yaml,
    /// [`Layer`] schema as JSON.
    Json,
    /// Build-tool server payload as JSON.
    Wire,
}

impl LayerFormat {
    /// Infer the format from a file extension (`yaml`, `yml`, `json`).
    ///
    /// Server payloads are JSON too, so `Wire` is never inferred.
    pub fn from_path(path: &Path) -> ProjectResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ProjectError::UnknownFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Parse and validate a layer from a string.
pub fn parse_layer(content: &str, format: LayerFormat) -> ProjectResult<Layer> {
    let layer: Layer = match format {
        LayerFormat::Yaml => serde_yaml::from_str(content)?,
        LayerFormat::Json => serde_json::from_str(content)?,
        LayerFormat::Wire => serde_json::from_str::<WireLayer>(content)?.into_layer(),
    };
    validate_layer(&layer)?;
    debug!(
        layer = %layer.name,
        projects = layer.projects.len(),
        "parsed layer"
    );
    Ok(layer)
}

/// Load a layer, inferring the format from the extension when `format` is None.
pub fn load_layer(path: &Path, format: Option<LayerFormat>) -> ProjectResult<Layer> {
    let format = match format {
        Some(format) => format,
        None => LayerFormat::from_path(path)?,
    };
    let content = std::fs::read_to_string(path)?;
    parse_layer(&content, format)
}

pub fn load_yaml(path: &Path) -> ProjectResult<Layer> {
    load_layer(path, Some(LayerFormat::Yaml))
}

pub fn save_yaml(path: &Path, layer: &Layer) -> ProjectResult<()> {
    validate_layer(layer)?;
    let content = serde_yaml::to_string(layer)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<Layer> {
    load_layer(path, Some(LayerFormat::Json))
}

pub fn save_json(path: &Path, layer: &Layer) -> ProjectResult<()> {
    validate_layer(layer)?;
    let content = serde_json::to_string_pretty(layer)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Look up a project by name, failing with `ProjectNotFound`.
pub fn find_project<'a>(layer: &'a Layer, name: &str) -> ProjectResult<&'a Project> {
    layer
        .project(name)
        .ok_or_else(|| ProjectError::ProjectNotFound(name.to_string()))
}
