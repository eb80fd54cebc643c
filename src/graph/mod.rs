pub mod layout;

use std::fmt;

use log::debug;

use crate::config::GraphConfig;
use crate::errors::GraphError;
use crate::geometry::Point;


/// Stable index into the fixed node collection
/// Parent and neighbor links are stored as ids, never as references
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}


/// Vertex of the graph
/// `visited`, `distance` and `parent` are derived by the last shortest path run
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub(crate) position: Point,
    pub(crate) obstacle: bool,
    pub(crate) visited: bool,
    pub(crate) distance: f64, // f64::INFINITY when unreached
    pub(crate) parent: Option<NodeId>,
    pub(crate) neighbors: Vec<NodeId>,
}

impl Node {

    fn new(position: Point, neighbors: Vec<NodeId>) -> Self {
        Self {
            position,
            obstacle: false,
            visited: false,
            distance: f64::INFINITY,
            parent: None,
            neighbors,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_obstacle(&self) -> bool {
        self.obstacle
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// True once a finite cost from the start is known
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    pub(crate) fn clear_search(&mut self) {
        self.distance = f64::INFINITY;
        self.visited = false;
        self.parent = None;
    }
}


/// Fixed collection of nodes plus the start / end selection
///
/// Nodes are never added or removed after construction. Only obstacle flags,
/// positions and selections change, and `reset` restores the initial build.
#[derive(Clone, Debug)]
pub struct Graph {
    config: GraphConfig,
    nodes: Vec<Node>,
    initial: Vec<Node>, // Snapshot restored by reset
    start: Option<NodeId>,
    end: Option<NodeId>,
}

impl Graph {

    /// Build the lobed ring layout with stepped adjacency
    pub fn new(config: GraphConfig) -> Result<Self, GraphError> {
        config.validate()?;

        let positions = layout::lobed_ring(config.node_count, config.radius);
        let adjacency = layout::stepped_adjacency(config.node_count);

        Self::from_parts(config, positions, adjacency)
    }

    /// Build from explicit positions and directed adjacency lists
    /// `config.node_count` and `config.radius` are ignored, the node count comes from `positions`
    pub fn from_parts(config: GraphConfig, positions: Vec<Point>, adjacency: Vec<Vec<NodeId>>) -> Result<Self, GraphError> {
        if positions.len() != adjacency.len() {
            return Err(GraphError::InvalidConfig(format!(
                "{} positions but {} adjacency lists", positions.len(), adjacency.len()
            )));
        }
        if positions.is_empty() {
            return Err(GraphError::InvalidConfig("graph needs at least one node".into()));
        }

        let count = positions.len();
        if let Some(&bad) = adjacency.iter().flatten().find(|id| id.0 >= count) {
            return Err(GraphError::UnknownNode(bad));
        }

        let config = GraphConfig { node_count: count, ..config };
        config.validate()?;

        let nodes: Vec<Node> = positions.into_iter()
            .zip(adjacency)
            .map(|(position, neighbors)| Node::new(position, neighbors))
            .collect();

        Ok(Self {
            config,
            initial: nodes.clone(),
            nodes,
            start: None,
            end: None,
        })
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Ordered adjacency of `id`, as wired at construction
    pub fn neighbors(&self, id: NodeId) -> Result<&[NodeId], GraphError> {
        Ok(&self.get(id)?.neighbors)
    }

    /// Every directed edge as (from, to)
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.iter()
            .enumerate()
            .flat_map(|(i, node)| node.neighbors.iter().map(move |&to| (NodeId(i), to)))
    }

    pub fn start(&self) -> Option<NodeId> {
        self.start
    }

    pub fn end(&self) -> Option<NodeId> {
        self.end
    }

    pub fn set_obstacle(&mut self, id: NodeId, obstacle: bool) -> Result<(), GraphError> {
        self.get_mut(id)?.obstacle = obstacle;
        Ok(())
    }

    /// Flip the obstacle flag, returning the new value
    pub fn toggle_obstacle(&mut self, id: NodeId) -> Result<bool, GraphError> {
        let node = self.get_mut(id)?;
        node.obstacle = !node.obstacle;
        Ok(node.obstacle)
    }

    /// Move a node; edge weights are read from positions on the next run
    /// Non finite coordinates are stored as given, edges touching such a node never relax
    pub fn reposition(&mut self, id: NodeId, position: Point) -> Result<(), GraphError> {
        self.get_mut(id)?.position = position;
        Ok(())
    }

    /// Selecting a start leaves its obstacle flag untouched
    pub fn select_start(&mut self, id: NodeId) -> Result<(), GraphError> {
        self.get(id)?;
        self.start = Some(id);
        Ok(())
    }

    pub fn select_end(&mut self, id: NodeId) -> Result<(), GraphError> {
        self.get(id)?;
        self.end = Some(id);
        Ok(())
    }

    /// Throw away every position, obstacle flag and selection
    pub fn reset(&mut self) {
        debug!("resetting graph of {} nodes", self.initial.len());
        self.nodes = self.initial.clone();
        self.start = None;
        self.end = None;
    }

    /// First node (in index order) strictly within the pick radius of `point`
    pub fn pick(&self, point: &Point) -> Option<NodeId> {
        let limit = self.config.pick_radius * self.config.pick_radius;

        self.nodes.iter()
            .position(|node| node.position.distance_squared(point) < limit)
            .map(NodeId)
    }

    fn get(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.nodes.get(id.0).ok_or(GraphError::UnknownNode(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node, GraphError> {
        self.nodes.get_mut(id.0).ok_or(GraphError::UnknownNode(id))
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }
}
