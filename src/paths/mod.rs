use crate::flow::Flow;
use crate::graph::GraphIndex;
use serde::Serialize;

/// Ceiling on the number of steps a single enumerated path may contain.
/// Deeper branches are abandoned, keeping the enumerator bounded on cyclic
/// or adversarial graphs a caller has not validated yet.
pub const MAX_PATH_DEPTH: usize = 1000;

/// One step of an enumerated conversation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathStep {
    /// The node the conversation sits at after taking this step.
    #[serde(rename = "nodeId")]
    pub node_id: String,
    /// The branch label of the edge taken to get here. The first step of a
    /// path never has one, and unlabelled edges leave it out too.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
}

struct Frame {
    node: usize,
    next_edge: usize,
}

/// Enumerates every simple conversation path from a root to a terminal
/// message node.
///
/// Paths are emitted with roots in declaration order and depth-first
/// pre-order within each root, edges in declaration order. A node already
/// on the current path is never revisited, so cyclic graphs yield only
/// their simple paths. Edges to undeclared ids are skipped. Flows with no
/// nodes, no roots, or no terminals yield no paths at all.
///
/// Validation is not a precondition; the enumerator tolerates any graph.
pub fn enumerate_paths(flow: &Flow) -> Vec<Vec<PathStep>> {
    if flow.nodes.is_empty() {
        return Vec::new();
    }

    let index = GraphIndex::build(flow);
    let roots = index.roots();
    let terminals = index.terminals();
    if roots.is_empty() || terminals.is_empty() {
        return Vec::new();
    }

    let mut is_terminal = vec![false; index.node_ids().len()];
    for id in &terminals {
        if let Some(position) = index.position(id) {
            is_terminal[position] = true;
        }
    }

    let mut results: Vec<Vec<PathStep>> = Vec::new();
    for root in &roots {
        if let Some(start) = index.position(root) {
            walk_from(&index, start, &is_terminal, &mut results);
        }
    }
    results
}

/// Backtracking walk from one root, with an explicit frame stack instead of
/// recursion. The frame stack, the step path, and the on-path flags move in
/// lockstep: one push and one pop per visited node.
fn walk_from(
    index: &GraphIndex<'_>,
    start: usize,
    is_terminal: &[bool],
    results: &mut Vec<Vec<PathStep>>,
) {
    let ids = index.node_ids();
    let mut stack = vec![Frame {
        node: start,
        next_edge: 0,
    }];
    let mut path = vec![PathStep {
        node_id: ids[start].to_string(),
        via: None,
    }];
    let mut on_path = vec![false; ids.len()];
    on_path[start] = true;

    if is_terminal[start] {
        results.push(path.clone());
    }

    while let Some(frame) = stack.last_mut() {
        let outgoing = index.outbound(ids[frame.node]);
        if frame.next_edge >= outgoing.len() {
            on_path[frame.node] = false;
            stack.pop();
            path.pop();
            continue;
        }

        let edge = outgoing[frame.next_edge];
        frame.next_edge += 1;

        let Some(target) = index.position(&edge.target) else {
            continue;
        };
        if on_path[target] {
            continue;
        }
        // Entering the target would make the path one step deeper than the
        // ceiling allows; abandon this branch, not the whole search.
        if stack.len() + 1 > MAX_PATH_DEPTH {
            continue;
        }

        on_path[target] = true;
        stack.push(Frame {
            node: target,
            next_edge: 0,
        });
        path.push(PathStep {
            node_id: edge.target.clone(),
            via: edge.label().map(str::to_string),
        });
        if is_terminal[target] {
            results.push(path.clone());
        }
    }
}
