use std::f64::consts::TAU;

use crate::geometry::Point;
use super::NodeId;


/// Step sizes tried from every node when wiring the adjacency
const STEPS: [usize; 3] = [1, 2, 3];


/// Place `node_count` nodes around the origin
/// The radius is modulated by sin(3 * angle), giving a three-lobed ring rather than a circle
pub fn lobed_ring(node_count: usize, radius: f64) -> Vec<Point> {
    let slice = TAU / node_count as f64;

    (0..node_count)
        .map(|i| {
            let angle = i as f64 * slice;
            let lobe_radius = radius * (0.7 + 0.3 * (3.0 * angle).sin());
            Point::polar(lobe_radius, angle)
        })
        .collect()
}

/// Directed adjacency: node i links to (i + j) mod N for every step j that divides i
/// Edges are not mirrored, and small N can yield self loops or repeated targets.
pub fn stepped_adjacency(node_count: usize) -> Vec<Vec<NodeId>> {
    (0..node_count)
        .map(|i| {
            STEPS.iter()
                .filter(|&&j| i % j == 0)
                .map(|&j| NodeId((i + j) % node_count))
                .collect()
        })
        .collect()
}
