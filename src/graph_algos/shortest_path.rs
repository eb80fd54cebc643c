use log::trace;

use crate::collections::FxIndexSet;
use crate::graph::{Graph, NodeId};

/// Construct the shortest path by following parent links back from `end`
/// Returns the ordered path as a vector of nodes from the search root to `end`
///
/// The root is whichever node the last run started from, not the current selection:
/// the chain has to finish on a visited, parentless node with distance 0. An unvisited
/// end has no path and yields an empty result, including an obstacle start (which keeps
/// distance 0 but is never visited). A visited root yields a single node path.
pub fn path_to(graph: &Graph, end: NodeId) -> Vec<NodeId> {

    if !graph.node(end).is_some_and(|n| n.is_visited()) {
        return Vec::new();
    }

    // Ordered set doubles as the path and as a guard against looping on a broken chain
    let mut path: FxIndexSet<NodeId> = FxIndexSet::default();
    let mut current = end;

    // Trace back from end to the root
    loop {
        let Some(node) = graph.node(current) else {
            return Vec::new();
        };
        if !path.insert(current) {
            trace!("parent chain from {end} loops at {current}");
            return Vec::new();
        }

        match node.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }

    // A parentless node that is not a solved root means the end was never reached
    let rooted = graph.node(current).is_some_and(|n| n.is_visited() && n.distance() == 0.0);
    if !rooted {
        return Vec::new();
    }

    // The path is in reverse order, so reverse it
    path.into_iter().rev().collect()
}
