//! Naming of graph nodes and their labels.
use derive_more::derive::{Display, From};

use crate::literal::Polarity;

/// Index of a clause in the input formula. Every clause is drawn
/// as a separate cluster identified by this index.
#[derive(PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Debug, Hash, From, Display)]
#[display("{_0}")]
pub struct ClusterId(pub usize);

/// Identifier of a node in the rendered graph.
///
/// The identifier is derived only from the coordinates of a literal,
/// never from its content, so two literals share an identifier only
/// if they are the same literal of the same clause.
#[derive(PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Debug, Hash, Display)]
#[display("n{cluster}_{position}")]
pub struct NodeId {
    pub cluster: ClusterId,
    pub position: usize,
}

impl NodeId {
    #[must_use]
    pub fn new(cluster: ClusterId, position: usize) -> NodeId {
        NodeId { cluster, position }
    }
}

/// Build the visible label of a literal: `x` for a positive and `x'`
/// for a negative literal, optionally suffixed with `_{cluster}`.
#[must_use]
pub fn node_label(
    name: &str,
    polarity: Polarity,
    cluster: ClusterId,
    include_cluster_id: bool,
) -> String {
    let mut label = escape(name);
    if polarity == Polarity::Negative {
        label.push('\'');
    }

    if include_cluster_id {
        label.push_str(&format!("_{cluster}"));
    }

    label
}

/// Escape characters that would terminate a quoted DOT string.
pub(crate) fn escape(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::{node_label, ClusterId, NodeId};
    use crate::literal::Polarity;

    #[test]
    fn node_ids() {
        assert_eq!(NodeId::new(ClusterId(0), 0).to_string(), "n0_0");
        assert_eq!(NodeId::new(ClusterId(12), 3).to_string(), "n12_3");
    }

    #[test]
    fn node_ids_are_injective() {
        // `n1_11` and `n11_1` must not collide.
        let ids: HashSet<String> = (0..15)
            .flat_map(|cluster| (0..15).map(move |pos| NodeId::new(ClusterId(cluster), pos)))
            .map(|id| id.to_string())
            .collect();

        assert_eq!(ids.len(), 15 * 15);
    }

    #[test]
    fn labels() {
        assert_eq!(node_label("x", Polarity::Positive, ClusterId(2), false), "x");
        assert_eq!(node_label("x", Polarity::Negative, ClusterId(2), false), "x'");
        assert_eq!(node_label("x1", Polarity::Positive, ClusterId(2), true), "x1_2");
        assert_eq!(node_label("x1", Polarity::Negative, ClusterId(0), true), "x1'_0");
    }

    #[test]
    fn labels_are_escaped() {
        assert_eq!(
            node_label("a\"b\\c", Polarity::Positive, ClusterId(0), false),
            "a\\\"b\\\\c"
        );
        assert_eq!(node_label("{x}", Polarity::Positive, ClusterId(0), false), "{x}");
    }
}
