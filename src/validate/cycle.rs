use crate::graph::GraphIndex;
use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Color {
    White,
    Gray,
    Black,
}

struct Frame {
    node: usize,
    next_edge: usize,
}

/// Three-color depth-first search for the first cycle in the graph.
///
/// Recursion is replaced by an explicit frame stack over the index's dense
/// node positions, so detection works on arbitrarily deep graphs without
/// touching host stack limits. The frame stack doubles as the gray path:
/// when an outbound edge hits a gray node, the stack suffix from that node
/// is the cycle.
pub(super) struct CycleDetector<'a, 'f> {
    index: &'a GraphIndex<'f>,
    colors: Vec<Color>,
}

impl<'a, 'f> CycleDetector<'a, 'f> {
    pub(super) fn new(index: &'a GraphIndex<'f>) -> Self {
        CycleDetector {
            index,
            colors: vec![Color::White; index.node_ids().len()],
        }
    }

    /// Returns the first cycle found, formatted as the walk that closed it
    /// (`a -> b -> a`), or `None` when the graph is acyclic. The search
    /// starts from the given roots in order, then sweeps any node still
    /// untouched, so cycles unreachable from every root are found too.
    pub(super) fn first_cycle(mut self, roots: &[&'f str]) -> Option<String> {
        let root_positions: Vec<usize> = roots
            .iter()
            .filter_map(|id| self.index.position(id))
            .collect();

        for start in root_positions.into_iter().chain(0..self.colors.len()) {
            if self.colors[start] == Color::White {
                if let Some(cycle) = self.search(start) {
                    return Some(cycle);
                }
            }
        }
        None
    }

    fn search(&mut self, start: usize) -> Option<String> {
        let ids = self.index.node_ids();
        let mut stack = vec![Frame {
            node: start,
            next_edge: 0,
        }];
        self.colors[start] = Color::Gray;

        while let Some(frame) = stack.last_mut() {
            let outgoing = self.index.outbound(ids[frame.node]);
            if frame.next_edge >= outgoing.len() {
                self.colors[frame.node] = Color::Black;
                stack.pop();
                continue;
            }

            let edge = outgoing[frame.next_edge];
            frame.next_edge += 1;

            let Some(target) = self.index.position(&edge.target) else {
                continue;
            };
            match self.colors[target] {
                Color::Gray => return Some(format_cycle(&stack, ids, target)),
                Color::White => {
                    self.colors[target] = Color::Gray;
                    stack.push(Frame {
                        node: target,
                        next_edge: 0,
                    });
                }
                Color::Black => {}
            }
        }
        None
    }
}

fn format_cycle(stack: &[Frame], ids: &[&str], repeated: usize) -> String {
    let start = stack
        .iter()
        .position(|frame| frame.node == repeated)
        .unwrap_or(0);
    stack[start..]
        .iter()
        .map(|frame| ids[frame.node])
        .chain(std::iter::once(ids[repeated]))
        .join(" -> ")
}
