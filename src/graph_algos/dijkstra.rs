use crate::errors::GraphError;
use crate::graph::{Graph, NodeId};

use std::{collections::BinaryHeap, cmp::Ordering};
use log::{debug, trace};



/// Recompute distances, visited flags and parent links from `start`
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// With no start nothing is touched, so the previous run's state is left in place.
/// Otherwise every node is cleared first, then the frontier is drained:
/// - stale entries for visited nodes are dropped
/// - obstacles are dropped without being visited, the start included
/// - a visited node relaxes each non obstacle, unvisited neighbor using the
///   euclidean distance between their current positions
///
/// An obstacle start still ends up with distance 0, but is never visited and relaxes nothing.
pub fn compute_shortest_paths(graph: &mut Graph, start: Option<NodeId>) -> Result<(), GraphError> {

    let Some(start) = start else {
        debug!("no start node selected, keeping previous search state");
        return Ok(());
    };

    if graph.node(start).is_none() {
        return Err(GraphError::UnknownNode(start));
    }

    let nodes = graph.nodes_mut();

    // Reset phase - runs even if the start turns out to be boxed in
    for node in nodes.iter_mut() {
        node.clear_search();
    }

    // Frontier - binary heap sorts Biggest to Smallest, Frontier::cmp inverts the cost
    // Duplicate entries are allowed, the visited check discards the stale ones
    let mut frontier: BinaryHeap<Frontier> = BinaryHeap::new();

    nodes[start.0].distance = 0.0;
    frontier.push(Frontier {
        index: start.0,
        cost: 0.0,
    });

    let mut visited = 0;

    while let Some(Frontier { index, .. }) = frontier.pop() {

        let current = &mut nodes[index];
        if current.visited || current.obstacle {
            continue;
        }
        current.visited = true;
        visited += 1;

        let position = current.position;
        let distance = current.distance;

        // loop over neighbors by position so the node slice can be borrowed mutably
        for k in 0..nodes[index].neighbors.len() {
            let neighbor_index = nodes[index].neighbors[k].0;
            let neighbor = &mut nodes[neighbor_index];

            if neighbor.obstacle || neighbor.visited {
                continue;
            }

            // new cost to reach this neighbor = edge cost + current cost
            let new_cost = distance + position.distance(&neighbor.position);

            if new_cost < neighbor.distance {
                trace!("relax {} -> {}: {new_cost}", NodeId(index), NodeId(neighbor_index));
                neighbor.parent = Some(NodeId(index));
                neighbor.distance = new_cost;
                frontier.push(Frontier {
                    index: neighbor_index,
                    cost: new_cost,
                });
            }
        }
    }

    debug!("shortest paths from {start}: {visited} of {} nodes visited", nodes.len());
    Ok(())
}


/// Frontier entry
/// - ordering only needs the tentative cost and the node index
/// - lowest cost pops first, equal costs pop the higher index first
#[derive(Debug)]
struct Frontier {
    index: usize,
    cost: f64,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
            .then_with(|| self.index.cmp(&other.index))
    }
}
impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Frontier {}
