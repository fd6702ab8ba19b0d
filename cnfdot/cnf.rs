//! CNF formulas decoded from JSON and their rendering to DOT.
use std::fmt::Display;

use serde_json::Value;
use tabled::{builder::Builder, grid::config::HorizontalLine, settings::Theme};

use crate::clause::Clause;
use crate::dot_writer::{Dot, DotWriter};
use crate::edges::{edge_statements, Statement};
use crate::error::{CnfDotError, Result};
use crate::literal::{Literal, Polarity};
use crate::namer::ClusterId;
use crate::options::RenderOptions;

/// Conjunction of clauses. Clause `i` of the input is drawn as cluster `i`.
#[derive(Debug, Clone)]
pub struct Cnf {
    clauses: Vec<Clause>,
    graph_name: String,
}

/// Rendered DOT graph together with its [`Statistics`].
#[derive(Debug, Clone)]
pub struct Rendered {
    pub dot: DotWriter,
    pub statistics: Statistics,
}

impl Cnf {
    #[must_use]
    pub fn new(clauses: Vec<Vec<Literal>>, options: &RenderOptions) -> Cnf {
        let clauses = clauses
            .into_iter()
            .enumerate()
            .map(|(idx, literals)| {
                Clause::new(
                    ClusterId(idx),
                    literals,
                    options.include_cluster_id_in_label,
                )
            })
            .collect();

        Cnf {
            clauses,
            graph_name: options.graph_name.clone(),
        }
    }

    /// Decode a CNF given as a JSON list of clauses, each clause being
    /// a list of `[name, polarity]` pairs.
    ///
    /// # Errors
    /// Returns an error if `input` is not valid JSON or does not have
    /// the shape of a CNF.
    #[tracing::instrument(skip_all)]
    pub fn from_json(input: &str, options: &RenderOptions) -> Result<Cnf> {
        let value: Value = serde_json::from_str(input).map_err(CnfDotError::MalformedJson)?;
        let clauses = match value {
            Value::Array(clauses) => clauses,
            other => {
                return Err(CnfDotError::NotAList {
                    found: kind(&other).to_owned(),
                })
            }
        };

        let clauses = clauses
            .iter()
            .enumerate()
            .map(|(clause, value)| parse_clause(clause, value))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(clauses = clauses.len(), "decoded CNF");
        Ok(Cnf::new(clauses, options))
    }

    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Render the CNF into a DOT document.
    #[must_use]
    pub fn to_dot(&self) -> String {
        self.render().dot.to_string()
    }

    /// Size of the graph, without rendering the document.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics::new(&self.clauses, &edge_statements(&self.clauses))
    }

    /// Draw the CNF and compute its [`Statistics`] in a single pass.
    /// Prefer this over calling [`Cnf::to_dot`] and [`Cnf::statistics`] separately.
    #[must_use]
    #[tracing::instrument(skip_all, fields(clauses = self.clauses.len()))]
    pub fn render(&self) -> Rendered {
        let mut writer = DotWriter::new(self.graph_name.clone());
        for clause in &self.clauses {
            clause.draw(&mut writer);
        }

        let statements = edge_statements(&self.clauses);
        let statistics = Statistics::new(&self.clauses, &statements);
        writer.add_statements(statements);

        Rendered {
            dot: writer,
            statistics,
        }
    }
}

fn parse_clause(clause: usize, value: &Value) -> Result<Vec<Literal>> {
    let Value::Array(literals) = value else {
        return Err(CnfDotError::MalformedClause {
            clause,
            literal: None,
            reason: format!("expected a list of literals, found {}", kind(value)),
        });
    };

    literals
        .iter()
        .enumerate()
        .map(|(literal, value)| {
            parse_literal(value).map_err(|reason| CnfDotError::MalformedClause {
                clause,
                literal: Some(literal),
                reason,
            })
        })
        .collect()
}

fn parse_literal(value: &Value) -> std::result::Result<Literal, String> {
    let pair = match value {
        Value::Array(pair) if pair.len() == 2 => pair,
        Value::Array(pair) => {
            return Err(format!(
                "expected a [name, polarity] pair, found a list of {} elements",
                pair.len()
            ))
        }
        other => return Err(format!("expected a [name, polarity] pair, found {}", kind(other))),
    };

    let Value::String(name) = &pair[0] else {
        return Err(format!("variable name must be a string, found {}", kind(&pair[0])));
    };

    let polarity = match &pair[1] {
        Value::Bool(polarity) => Polarity::from(*polarity),
        Value::Number(number) if number.as_u64() == Some(1) => Polarity::Positive,
        Value::Number(number) if number.as_u64() == Some(0) => Polarity::Negative,
        other => {
            return Err(format!(
                "polarity of '{name}' must be a boolean, found {other}"
            ))
        }
    };

    Ok(Literal::new(name, polarity))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Size of the rendered graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    pub clauses: usize,
    pub nodes: usize,
    pub edges: usize,
    /// Literal pairs not connected because they are complementary.
    pub resolved_pairs: usize,
}

impl Statistics {
    fn new(clauses: &[Clause], statements: &[Statement]) -> Statistics {
        let edges = statements.iter().filter(|s| s.is_edge()).count();
        let mut candidates = 0;
        let mut remaining: usize = clauses.iter().map(Clause::literal_count).sum();
        let nodes = remaining;
        for clause in clauses {
            remaining -= clause.literal_count();
            candidates += clause.literal_count() * remaining;
        }

        Statistics {
            clauses: clauses.len(),
            nodes,
            edges,
            resolved_pairs: candidates - edges,
        }
    }
}

impl Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(["clauses", "nodes", "edges", "resolved pairs"]);
        builder.push_record([
            self.clauses.to_string(),
            self.nodes.to_string(),
            self.edges.to_string(),
            self.resolved_pairs.to_string(),
        ]);

        let mut style = Theme::default();
        style.insert_horizontal_line(1, HorizontalLine::full('-', '-', ' ', ' '));
        let output = builder.build().with(style).to_string();
        write!(f, "{output}")
    }
}
