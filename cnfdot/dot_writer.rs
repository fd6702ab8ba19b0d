use std::fmt::Display;

use crate::edges::Statement;
use crate::namer::{escape, ClusterId};

pub trait Dot {
    fn draw(&self, writer: &mut DotWriter);
}

/// Assembles cluster blocks and edge statements into an undirected DOT graph.
#[derive(Debug, Clone)]
pub struct DotWriter {
    graph_name: String,

    clusters: Vec<(ClusterId, String)>,
    statements: Vec<Statement>,
}

impl DotWriter {
    #[must_use]
    pub fn new(graph_name: String) -> DotWriter {
        DotWriter {
            graph_name,
            clusters: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Add a cluster whose body consists of already rendered node declarations.
    pub fn add_cluster(&mut self, cluster: ClusterId, nodes: String) {
        self.clusters.push((cluster, nodes));
    }

    pub fn add_statements(&mut self, statements: impl IntoIterator<Item = Statement>) {
        self.statements.extend(statements);
    }

    /// # Errors
    /// Function returns an error if the writing to a file or flushing fails.
    pub fn write(&self, writer: &mut dyn std::io::Write) -> std::io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }
}

const KEYWORDS: [&str; 6] = ["strict", "graph", "digraph", "node", "edge", "subgraph"];

/// Graph names that are not plain DOT identifiers are emitted as quoted strings.
fn graph_id(name: &str) -> String {
    let mut chars = name.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(name));

    if is_identifier {
        name.to_owned()
    } else {
        format!("\"{}\"", escape(name))
    }
}

fn cluster_block(cluster: ClusterId, nodes: &str) -> String {
    format!(
        "subgraph cluster_{cluster} {{\n    color = blue;\n    label = \"clause #{cluster}\";\n    node [style = filled];\n    \n    {nodes}\n}}"
    )
}

impl Display for DotWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clusters = self
            .clusters
            .iter()
            .map(|(cluster, nodes)| cluster_block(*cluster, nodes))
            .collect::<Vec<_>>()
            .join("\n");
        let statements = self
            .statements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        write!(
            f,
            "graph {} {{\n    edge [splines = false];\n\n    {clusters}\n\n    {statements}\n}}",
            graph_id(&self.graph_name)
        )
    }
}
