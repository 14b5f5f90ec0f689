use crate::graph::GraphIndex;

/// Forward worklist sweep over outbound edges from every root. Returns the
/// declared ids no walk reached, sorted for stable reporting. Edges pointing
/// at undeclared ids are skipped; those targets are someone else's error.
pub(super) fn find_unreachable<'f>(index: &GraphIndex<'f>, roots: &[&'f str]) -> Vec<&'f str> {
    let ids = index.node_ids();
    let mut visited = vec![false; ids.len()];
    let mut worklist: Vec<usize> = Vec::new();

    for id in roots {
        if let Some(position) = index.position(id) {
            visited[position] = true;
            worklist.push(position);
        }
    }

    while let Some(position) = worklist.pop() {
        for edge in index.outbound(ids[position]) {
            if let Some(target) = index.position(&edge.target) {
                if !visited[target] {
                    visited[target] = true;
                    worklist.push(target);
                }
            }
        }
    }

    let mut unreachable: Vec<&'f str> = ids
        .iter()
        .enumerate()
        .filter(|(position, _)| !visited[*position])
        .map(|(_, id)| *id)
        .collect();
    unreachable.sort_unstable();
    unreachable
}
