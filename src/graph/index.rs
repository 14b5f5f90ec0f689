use crate::flow::{Flow, FlowEdge, FlowNode, NodeKind};
use ahash::AHashMap;

/// Adjacency index over a [`Flow`], built once per operation and borrowed by
/// every traversal component.
///
/// Each declared node gets an inbound and an outbound entry even when no edge
/// touches it. Edges referencing undeclared ids are indexed too, under the
/// undeclared id, so dangling edges stay visible to the validator; iteration
/// by [`node_ids`](GraphIndex::node_ids) only ever yields declared nodes.
#[derive(Debug)]
pub struct GraphIndex<'a> {
    inbound: AHashMap<&'a str, Vec<&'a FlowEdge>>,
    outbound: AHashMap<&'a str, Vec<&'a FlowEdge>>,
    nodes: AHashMap<&'a str, &'a FlowNode>,
    positions: AHashMap<&'a str, usize>,
    order: Vec<&'a str>,
}

impl<'a> GraphIndex<'a> {
    /// Builds the index in one pass over nodes and edges.
    pub fn build(flow: &'a Flow) -> GraphIndex<'a> {
        let mut index = GraphIndex {
            inbound: AHashMap::with_capacity(flow.nodes.len()),
            outbound: AHashMap::with_capacity(flow.nodes.len()),
            nodes: AHashMap::with_capacity(flow.nodes.len()),
            positions: AHashMap::with_capacity(flow.nodes.len()),
            order: Vec::with_capacity(flow.nodes.len()),
        };

        for node in &flow.nodes {
            let id = node.id.as_str();
            if !index.positions.contains_key(id) {
                index.positions.insert(id, index.order.len());
                index.order.push(id);
                index.inbound.insert(id, Vec::new());
                index.outbound.insert(id, Vec::new());
            }
            // On duplicate ids the last declaration wins the lookup slot,
            // while the id keeps its first position in declaration order.
            index.nodes.insert(id, node);
        }

        for edge in &flow.edges {
            index.outbound.entry(edge.source.as_str()).or_default().push(edge);
            index.inbound.entry(edge.target.as_str()).or_default().push(edge);
        }

        index
    }

    /// Whether `id` was declared as a node.
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// The declared node for `id`, if any.
    pub fn node(&self, id: &str) -> Option<&'a FlowNode> {
        self.nodes.get(id).copied()
    }

    /// Dense position of a declared id in declaration order. Traversals use
    /// this numbering for their colour and visited arrays.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Edges arriving at `id`, in declaration order.
    pub fn inbound(&self, id: &str) -> &[&'a FlowEdge] {
        self.inbound.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Edges leaving `id`, in declaration order.
    pub fn outbound(&self, id: &str) -> &[&'a FlowEdge] {
        self.outbound.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Unique declared node ids, in declaration order.
    pub fn node_ids(&self) -> &[&'a str] {
        &self.order
    }

    /// Declared nodes with no inbound edges, in declaration order.
    pub fn roots(&self) -> Vec<&'a str> {
        self.order
            .iter()
            .filter(|id| self.inbound(id).is_empty())
            .copied()
            .collect()
    }

    /// Message nodes with no outgoing edges, in declaration order. These are
    /// the only nodes that end a conversation.
    pub fn terminals(&self) -> Vec<&'a str> {
        self.order
            .iter()
            .filter(|id| {
                self.node(id)
                    .is_some_and(|node| node.kind == NodeKind::Message)
                    && self.outbound(id).is_empty()
            })
            .copied()
            .collect()
    }
}
