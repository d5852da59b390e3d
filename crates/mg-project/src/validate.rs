//! Layer validation logic.

use std::collections::HashSet;

use crate::schema::{Layer, Module, Project};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Empty name in {context}")]
    EmptyName { context: String },

    #[error("Duplicate dependency: {dependency} in module '{module}'")]
    DuplicateDependency { module: String, dependency: String },
}

pub fn validate_layer(layer: &Layer) -> Result<(), ValidationError> {
    let mut project_names = HashSet::new();
    for project in &layer.projects {
        if project.name.is_empty() {
            return Err(ValidationError::EmptyName {
                context: format!("layer '{}' projects", layer.name),
            });
        }
        if !project_names.insert(&project.name) {
            return Err(ValidationError::DuplicateId {
                id: project.name.clone(),
                context: format!("layer '{}' projects", layer.name),
            });
        }
        validate_project(project)?;
    }
    Ok(())
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    let mut module_names = HashSet::new();
    for module in &project.modules {
        if module.name.is_empty() {
            return Err(ValidationError::EmptyName {
                context: format!("project '{}' modules", project.name),
            });
        }
        if !module_names.insert(&module.name) {
            return Err(ValidationError::DuplicateId {
                id: module.name.clone(),
                context: format!("project '{}' modules", project.name),
            });
        }
        validate_module(module)?;
    }
    Ok(())
}

// Dependencies on names outside the project are external libraries and allowed.
fn validate_module(module: &Module) -> Result<(), ValidationError> {
    let mut dependencies = HashSet::new();
    for dependency in &module.dependencies {
        if dependency.is_empty() {
            return Err(ValidationError::EmptyName {
                context: format!("module '{}' dependencies", module.name),
            });
        }
        if !dependencies.insert(dependency) {
            return Err(ValidationError::DuplicateDependency {
                module: module.name.clone(),
                dependency: dependency.clone(),
            });
        }
    }
    Ok(())
}
