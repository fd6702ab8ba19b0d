//! Clause model: one clause of the CNF drawn as a cluster of literal nodes.
use crate::dot_writer::{Dot, DotWriter};
use crate::error::{CnfDotError, Result};
use crate::literal::Literal;
use crate::namer::{node_label, ClusterId, NodeId};

/// Single clause -- disjunction of literals, kept in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    cluster: ClusterId,
    literals: Vec<Literal>,
    include_cluster_id: bool,
}

impl Clause {
    #[must_use]
    pub fn new(cluster: ClusterId, literals: Vec<Literal>, include_cluster_id: bool) -> Clause {
        Clause {
            cluster,
            literals,
            include_cluster_id,
        }
    }

    #[must_use]
    pub fn cluster(&self) -> ClusterId {
        self.cluster
    }

    #[must_use]
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    #[must_use]
    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Identifier of the node drawn for the literal at `position`.
    ///
    /// # Errors
    /// Returns [`CnfDotError::OutOfRange`] if the clause has no literal at `position`.
    pub fn node_id(&self, position: usize) -> Result<NodeId> {
        self.literal(position)?;
        Ok(NodeId::new(self.cluster, position))
    }

    /// Label of the node drawn for the literal at `position`.
    ///
    /// # Errors
    /// Returns [`CnfDotError::OutOfRange`] if the clause has no literal at `position`.
    pub fn node_label(&self, position: usize) -> Result<String> {
        let literal = self.literal(position)?;
        Ok(self.label_of(literal))
    }

    /// Node declarations of all literals, one per line.
    #[must_use]
    pub fn rendered_nodes(&self) -> String {
        self.literals
            .iter()
            .enumerate()
            .map(|(position, literal)| {
                format!(
                    "{} [label = \"{}\"];",
                    NodeId::new(self.cluster, position),
                    self.label_of(literal)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Iterate over node identifiers together with the literals they represent.
    pub(crate) fn nodes(&self) -> impl Iterator<Item = (NodeId, &Literal)> {
        let cluster = self.cluster;
        self.literals
            .iter()
            .enumerate()
            .map(move |(position, literal)| (NodeId::new(cluster, position), literal))
    }

    fn literal(&self, position: usize) -> Result<&Literal> {
        self.literals
            .get(position)
            .ok_or(CnfDotError::OutOfRange {
                cluster: self.cluster,
                position,
                len: self.literals.len(),
            })
    }

    fn label_of(&self, literal: &Literal) -> String {
        node_label(
            literal.name(),
            literal.polarity(),
            self.cluster,
            self.include_cluster_id,
        )
    }
}

impl Dot for Clause {
    fn draw(&self, writer: &mut DotWriter) {
        writer.add_cluster(self.cluster, self.rendered_nodes());
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::Clause;
    use crate::error::CnfDotError;
    use crate::literal::{Literal, Polarity};
    use crate::namer::ClusterId;

    fn clause(cluster: usize, include_cluster_id: bool) -> Clause {
        Clause::new(
            ClusterId(cluster),
            vec![
                Literal::new("x1", Polarity::Positive),
                Literal::new("x2", Polarity::Negative),
            ],
            include_cluster_id,
        )
    }

    #[test]
    fn node_ids_and_labels() {
        let clause = clause(3, false);

        assert_eq!(clause.literal_count(), 2);
        assert_eq!(clause.node_id(0).unwrap().to_string(), "n3_0");
        assert_eq!(clause.node_id(1).unwrap().to_string(), "n3_1");
        assert_eq!(clause.node_label(0).unwrap(), "x1");
        assert_eq!(clause.node_label(1).unwrap(), "x2'");
    }

    #[test]
    fn labels_with_cluster_id() {
        let clause = clause(3, true);

        assert_eq!(clause.node_label(0).unwrap(), "x1_3");
        assert_eq!(clause.node_label(1).unwrap(), "x2'_3");
    }

    #[test]
    fn out_of_range() {
        let clause = clause(1, false);

        assert!(matches!(
            clause.node_id(2),
            Err(CnfDotError::OutOfRange {
                cluster: ClusterId(1),
                position: 2,
                len: 2
            })
        ));
        assert!(clause.node_label(7).is_err());

        let empty = Clause::new(ClusterId(0), Vec::new(), false);
        assert!(empty.is_empty());
        assert!(empty.node_id(0).is_err());
    }

    #[test]
    fn rendered_nodes() {
        assert_eq!(
            clause(0, false).rendered_nodes(),
            "n0_0 [label = \"x1\"];\nn0_1 [label = \"x2'\"];"
        );
        assert_eq!(
            Clause::new(ClusterId(0), Vec::new(), false).rendered_nodes(),
            ""
        );
    }

    #[test]
    fn duplicate_literals_get_distinct_nodes() {
        let x = Literal::new("x", Polarity::Positive);
        let clause = Clause::new(ClusterId(0), vec![x.clone(), x], false);

        assert_eq!(
            clause.rendered_nodes(),
            "n0_0 [label = \"x\"];\nn0_1 [label = \"x\"];"
        );
    }
}
