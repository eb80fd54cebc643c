
pub mod dijkstra;
mod shortest_path;

pub use dijkstra::compute_shortest_paths;
pub use shortest_path::path_to;
