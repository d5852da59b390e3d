//! Mermaid diagram markup for dependency edges.
//!
//! Rendering never reorders: callers pass edges already sorted.

use mg_core::Edge;

const CONTAINER: &str = "mermaid";

/// `graph TD;` followed by one `\tfrom-->to;` line per edge.
pub fn mermaid(edges: &[Edge]) -> String {
    let lines: Vec<String> = edges
        .iter()
        .map(|e| format!("\t{}-->{};", e.from, e.to))
        .collect();
    format!("graph TD;\n{}", lines.join("\n"))
}

/// The diagram inside a `::: mermaid` markdown container.
pub fn mermaid_markdown(edges: &[Edge]) -> String {
    format!("::: {CONTAINER}\n{}\n:::\n", mermaid(edges))
}

/// The diagram as an HTML block for a mermaid-enabled page.
///
/// Angle brackets are escaped so the browser keeps the arrows as text.
pub fn mermaid_html(edges: &[Edge]) -> String {
    format!(
        "<div class=\"{CONTAINER}\">{}</div>\n",
        escape(&mermaid(edges))
    )
}

fn escape(source: &str) -> String {
    source.replace('<', "&lt;").replace('>', "&gt;")
}
