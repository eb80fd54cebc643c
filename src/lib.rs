//! Small spatial graph with on-demand shortest paths.
//!
//! A [`Graph`] owns a fixed set of nodes laid out on a lobed ring with directed,
//! irregular adjacency. [`compute_shortest_paths`] writes distances, visited flags
//! and parent links straight onto the nodes, and [`Session`] ties each edit
//! (toggle an obstacle, move a node, pick a start) to an immediate recompute.

mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod session;

pub use config::GraphConfig;
pub use errors::GraphError;
pub use geometry::Point;
pub use graph::{Graph, Node, NodeId};
pub use graph_algos::{compute_shortest_paths, path_to};
pub use session::{PointerButton, Session};
