mod error;
mod render;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use error::{CliError, CliResult};
use mg_graph::{build_graph, sort_edges_report, topological_order};
use mg_project::{Layer, LayerFormat, find_project, load_layer};

#[derive(Parser)]
#[command(name = "mg")]
#[command(about = "modgraph - Build-tool module dependency graph tool", long_about = None)]
struct Cli {
    /// Layer file format (inferred from the extension when omitted)
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate layer file syntax and structure
    Validate {
        /// Path to the layer file
        layer_path: PathBuf,
    },
    /// List projects in a layer
    Projects {
        /// Path to the layer file
        layer_path: PathBuf,
    },
    /// Print a project's dependency edges in render order
    Edges {
        /// Path to the layer file
        layer_path: PathBuf,
        /// Project name
        project: String,
        /// Print edges as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Print the topological order of a project's modules
    Order {
        /// Path to the layer file
        layer_path: PathBuf,
        /// Project name
        project: String,
    },
    /// Render a project's dependency graph as mermaid markup
    Diagram {
        /// Path to the layer file
        layer_path: PathBuf,
        /// Project name
        project: String,
        /// Output wrapping
        #[arg(long, value_enum, default_value_t = DiagramStyle::Markdown)]
        style: DiagramStyle,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Yaml,
    Json,
    /// Build-tool server payload (JSON)
    Wire,
}

impl From<FormatArg> for LayerFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => LayerFormat::Yaml,
            FormatArg::Json => LayerFormat::Json,
            FormatArg::Wire => LayerFormat::Wire,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DiagramStyle {
    Plain,
    Markdown,
    Html,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = cli.format.map(LayerFormat::from);
    match cli.command {
        Commands::Validate { layer_path } => cmd_validate(&layer_path, format),
        Commands::Projects { layer_path } => cmd_projects(&layer_path, format),
        Commands::Edges {
            layer_path,
            project,
            json,
        } => cmd_edges(&layer_path, format, &project, json),
        Commands::Order {
            layer_path,
            project,
        } => cmd_order(&layer_path, format, &project),
        Commands::Diagram {
            layer_path,
            project,
            style,
            output,
        } => cmd_diagram(&layer_path, format, &project, style, output.as_deref()),
    }
}

// Logs go to stderr so stdout stays clean for piping edges and diagrams.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(layer_path: &Path, format: Option<LayerFormat>) -> CliResult<Layer> {
    tracing::debug!(path = %layer_path.display(), "loading layer");
    Ok(load_layer(layer_path, format)?)
}

fn cmd_validate(layer_path: &Path, format: Option<LayerFormat>) -> CliResult<()> {
    println!("Validating layer: {}", layer_path.display());
    let layer = load(layer_path, format)?;
    let modules: usize = layer.projects.iter().map(|p| p.modules.len()).sum();
    println!(
        "✓ Layer '{}' is valid ({} projects, {} modules)",
        layer.name,
        layer.projects.len(),
        modules
    );
    Ok(())
}

fn cmd_projects(layer_path: &Path, format: Option<LayerFormat>) -> CliResult<()> {
    let layer = load(layer_path, format)?;

    if layer.projects.is_empty() {
        println!("No projects found in layer");
    } else {
        println!("Projects in layer '{}':", layer.name);
        for project in &layer.projects {
            println!(
                "  {} ({} modules, {} dependency edges)",
                project.name,
                project.modules.len(),
                project.dependency_edges().len()
            );
        }
    }
    Ok(())
}

fn cmd_edges(
    layer_path: &Path,
    format: Option<LayerFormat>,
    project_name: &str,
    json: bool,
) -> CliResult<()> {
    let layer = load(layer_path, format)?;
    let project = find_project(&layer, project_name)?;
    let sorted = sort_edges_report(&project.dependency_edges());

    if json {
        println!("{}", serde_json::to_string_pretty(&sorted.edges)?);
    } else {
        for edge in &sorted.edges {
            println!("{}", edge);
        }
    }
    if let Some(cycle) = &sorted.cycle {
        eprintln!("warning: {}; edges shown in declaration order", cycle);
    }
    Ok(())
}

fn cmd_order(
    layer_path: &Path,
    format: Option<LayerFormat>,
    project_name: &str,
) -> CliResult<()> {
    let layer = load(layer_path, format)?;
    let project = find_project(&layer, project_name)?;
    let graph = build_graph(&project.dependency_edges());

    match topological_order(&graph) {
        Ok(order) => {
            println!("Topological order for '{}':", project.name);
            for (rank, node) in order.sequence().iter().enumerate() {
                println!("  {:>3}  {}", rank, node);
            }
        }
        Err(cycle) => {
            println!("No valid order for '{}': {}", project.name, cycle);
        }
    }
    Ok(())
}

fn cmd_diagram(
    layer_path: &Path,
    format: Option<LayerFormat>,
    project_name: &str,
    style: DiagramStyle,
    output: Option<&Path>,
) -> CliResult<()> {
    let layer = load(layer_path, format)?;
    let project = find_project(&layer, project_name)?;
    let sorted = sort_edges_report(&project.dependency_edges());

    let markup = match style {
        DiagramStyle::Plain => render::mermaid(&sorted.edges) + "\n",
        DiagramStyle::Markdown => render::mermaid_markdown(&sorted.edges),
        DiagramStyle::Html => render::mermaid_html(&sorted.edges),
    };

    if let Some(path) = output {
        std::fs::write(path, &markup).map_err(|e| CliError::OutputWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        println!(
            "✓ Wrote diagram with {} edges to {}",
            sorted.edges.len(),
            path.display()
        );
    } else {
        print!("{}", markup);
    }
    Ok(())
}
