//! Edges between literals of different clauses.
use std::fmt::Display;

use crate::clause::Clause;
use crate::namer::{ClusterId, NodeId};

/// Statement emitted after the clusters: either an edge or a comment
/// introducing the edges of one pair of clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    PairComment(ClusterId, ClusterId),
    Edge(NodeId, NodeId),
}

impl Statement {
    #[must_use]
    pub fn is_edge(&self) -> bool {
        matches!(self, Statement::Edge(..))
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::PairComment(from, to) => write!(f, "# group{from} -> group{to}"),
            Statement::Edge(from, to) => write!(f, "{from} -- {to};"),
        }
    }
}

/// Connect every literal of `first` to every literal of `second`, skipping
/// complementary pairs.
#[must_use]
pub fn edges_between(first: &Clause, second: &Clause) -> Vec<Statement> {
    let mut edges = Vec::new();
    for (from, fst) in first.nodes() {
        for (to, snd) in second.nodes() {
            if !fst.is_complement_of(snd) {
                edges.push(Statement::Edge(from, to));
            }
        }
    }

    edges
}

/// Edge statements for every pair of distinct clauses `(i, j)` with `i < j`,
/// each pair preceded by a [`Statement::PairComment`].
#[must_use]
#[tracing::instrument(skip_all, fields(clauses = clauses.len()))]
pub fn edge_statements(clauses: &[Clause]) -> Vec<Statement> {
    let mut statements = Vec::new();
    for (idx, first) in clauses.iter().enumerate() {
        for second in &clauses[idx + 1..] {
            statements.push(Statement::PairComment(first.cluster(), second.cluster()));
            statements.extend(edges_between(first, second));
        }
    }

    tracing::debug!(
        edges = statements.iter().filter(|s| s.is_edge()).count(),
        "generated edges"
    );
    statements
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{edge_statements, edges_between, Statement};
    use crate::clause::Clause;
    use crate::literal::{Literal, Polarity};
    use crate::namer::{ClusterId, NodeId};

    fn clause(cluster: usize, literals: &[(&str, bool)]) -> Clause {
        Clause::new(
            ClusterId(cluster),
            literals
                .iter()
                .map(|(name, polarity)| Literal::new(name, Polarity::from(*polarity)))
                .collect(),
            false,
        )
    }

    fn edge(c1: usize, p1: usize, c2: usize, p2: usize) -> Statement {
        Statement::Edge(
            NodeId::new(ClusterId(c1), p1),
            NodeId::new(ClusterId(c2), p2),
        )
    }

    #[test]
    fn display() {
        assert_eq!(
            Statement::PairComment(ClusterId(0), ClusterId(2)).to_string(),
            "# group0 -> group2"
        );
        assert_eq!(edge(0, 1, 2, 0).to_string(), "n0_1 -- n2_0;");
    }

    #[test]
    fn complementary_pair_is_skipped() {
        let a = clause(0, &[("x", true)]);
        let b = clause(1, &[("x", false)]);

        assert!(edges_between(&a, &b).is_empty());
        assert_eq!(
            edge_statements(&[a, b]),
            vec![Statement::PairComment(ClusterId(0), ClusterId(1))]
        );
    }

    #[test]
    fn same_polarity_is_connected() {
        let a = clause(0, &[("x", true)]);
        let b = clause(1, &[("x", true)]);

        assert_eq!(edges_between(&a, &b), vec![edge(0, 0, 1, 0)]);
    }

    #[test]
    fn cross_product_order() {
        let a = clause(0, &[("x", true), ("y", false)]);
        let b = clause(1, &[("y", true), ("z", true)]);

        assert_eq!(
            edges_between(&a, &b),
            vec![edge(0, 0, 1, 0), edge(0, 0, 1, 1), edge(0, 1, 1, 1)]
        );
    }

    #[test]
    fn pairs_in_combination_order() {
        let clauses = [
            clause(0, &[("a", true)]),
            clause(1, &[("b", true)]),
            clause(2, &[("c", true)]),
        ];

        assert_eq!(
            edge_statements(&clauses),
            vec![
                Statement::PairComment(ClusterId(0), ClusterId(1)),
                edge(0, 0, 1, 0),
                Statement::PairComment(ClusterId(0), ClusterId(2)),
                edge(0, 0, 2, 0),
                Statement::PairComment(ClusterId(1), ClusterId(2)),
                edge(1, 0, 2, 0),
            ]
        );
    }

    #[test]
    fn empty_clause_has_no_edges() {
        let clauses = [clause(0, &[]), clause(1, &[("x", true)])];

        assert_eq!(
            edge_statements(&clauses),
            vec![Statement::PairComment(ClusterId(0), ClusterId(1))]
        );
    }

    #[test]
    fn edge_count_per_pair() {
        let a = clause(0, &[("x", true), ("y", false), ("z", true), ("x", true)]);
        let b = clause(1, &[("x", false), ("y", true), ("w", false)]);
        // Complementary pairs: (x, x') twice and (y', y).
        let complementary = 3;

        assert_eq!(
            edges_between(&a, &b).len(),
            a.literal_count() * b.literal_count() - complementary
        );
    }

    #[test]
    fn no_edges_within_a_clause() {
        let clauses = [
            clause(0, &[("x", true), ("y", true)]),
            clause(1, &[("z", true), ("w", true)]),
        ];

        for statement in edge_statements(&clauses) {
            if let Statement::Edge(from, to) = statement {
                assert!(from.cluster != to.cluster);
            }
        }
    }

    #[test]
    fn single_clause_has_no_pairs() {
        assert!(edge_statements(&[clause(0, &[("x", true)])]).is_empty());
        assert!(edge_statements(&[]).is_empty());
    }
}
