use mg_core::Edge;
use mg_graph::sort_edges;
use mg_project::schema::*;
use mg_project::{
    LayerFormat, ProjectError, find_project, load_json, load_layer, load_yaml, save_json,
    save_yaml, validate_layer,
};

fn sample_layer() -> Layer {
    Layer {
        name: "/".to_string(),
        projects: vec![Project {
            name: "web".to_string(),
            modules: vec![
                Module {
                    name: "core".to_string(),
                    dependencies: vec!["ext/json".to_string()],
                    sources: vec![Source {
                        directory: "src/core".to_string(),
                        kind: SourceKind::Local,
                    }],
                    binaries: vec!["org.example:json:1.0".to_string()],
                },
                Module {
                    name: "server".to_string(),
                    dependencies: vec!["core".to_string()],
                    sources: vec![Source {
                        directory: "src/server".to_string(),
                        kind: SourceKind::Repo,
                    }],
                    binaries: vec![],
                },
            ],
        }],
    }
}

#[test]
fn roundtrip_yaml_empty_layer() {
    let layer = Layer::default();
    validate_layer(&layer).unwrap();

    let path = std::env::temp_dir().join("mg_project_roundtrip_empty.yaml");
    save_yaml(&path, &layer).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(layer, loaded);
}

#[test]
fn roundtrip_yaml_sample_layer() {
    let layer = sample_layer();
    let path = std::env::temp_dir().join("mg_project_roundtrip_sample.yaml");
    save_yaml(&path, &layer).unwrap();

    // Format inferred from the extension
    let loaded = load_layer(&path, None).unwrap();
    assert_eq!(layer, loaded);
}

#[test]
fn roundtrip_json_sample_layer() {
    let layer = sample_layer();
    let path = std::env::temp_dir().join("mg_project_roundtrip_sample.json");
    save_json(&path, &layer).unwrap();
    let loaded = load_json(&path).unwrap();
    assert_eq!(layer, loaded);
}

#[test]
fn wire_payload_from_disk() {
    let payload = r#"{
        "projects": [{
            "id": { "key": "web" },
            "modules": [
                { "id": { "key": "core" }, "dependencies": [{ "ref": { "id": "ext/json" } }] },
                { "id": { "key": "server" }, "dependencies": [{ "ref": { "id": "core" } }] }
            ]
        }]
    }"#;
    let path = std::env::temp_dir().join("mg_project_wire_payload.json");
    std::fs::write(&path, payload).unwrap();

    let layer = load_layer(&path, Some(LayerFormat::Wire)).unwrap();
    let project = find_project(&layer, "web").unwrap();
    assert_eq!(
        project.dependency_edges(),
        vec![Edge::new("ext/json", "core"), Edge::new("core", "server")]
    );
}

#[test]
fn save_rejects_invalid_layer() {
    let mut layer = sample_layer();
    layer.projects.push(layer.projects[0].clone());

    let path = std::env::temp_dir().join("mg_project_invalid.yaml");
    let result = save_yaml(&path, &layer);
    assert!(matches!(result, Err(ProjectError::Validation(_))));
}

#[test]
fn unknown_extension() {
    let path = std::path::Path::new("layer.toml");
    assert!(matches!(
        load_layer(path, None),
        Err(ProjectError::UnknownFormat { .. })
    ));
}

#[test]
fn missing_project() {
    let layer = sample_layer();
    assert!(matches!(
        find_project(&layer, "nope"),
        Err(ProjectError::ProjectNotFound(name)) if name == "nope"
    ));
}

#[test]
fn extracted_edges_sort_downstream_first() {
    let layer = sample_layer();
    let edges = find_project(&layer, "web").unwrap().dependency_edges();
    // Order: ext/json, core, server
    assert_eq!(
        sort_edges(&edges),
        vec![Edge::new("core", "server"), Edge::new("ext/json", "core")]
    );
}
