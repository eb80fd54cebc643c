use log::debug;

use crate::config::GraphConfig;
use crate::errors::GraphError;
use crate::geometry::Point;
use crate::graph::{Graph, NodeId};
use crate::graph_algos::{compute_shortest_paths, path_to};


/// Pointer buttons the input layer forwards
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary, // select start
    Secondary, // select end
    Middle, // toggle obstacle
}


/// Owned graph plus the commands an input layer drives it with
///
/// Every command that can change the search result mutates the graph and then
/// recomputes from the current start before returning, so a renderer reading
/// the nodes between commands always sees a finished run. Selecting the end
/// and resetting do not recompute.
#[derive(Clone, Debug)]
pub struct Session {
    graph: Graph,
    dragged: Option<NodeId>,
}

impl Session {

    pub fn new(config: GraphConfig) -> Result<Self, GraphError> {
        Ok(Self::from_graph(Graph::new(config)?))
    }

    pub fn from_graph(graph: Graph) -> Self {
        Self {
            graph,
            dragged: None,
        }
    }

    /// Read only view for rendering
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn start(&self) -> Option<NodeId> {
        self.graph.start()
    }

    pub fn end(&self) -> Option<NodeId> {
        self.graph.end()
    }

    pub fn dragged(&self) -> Option<NodeId> {
        self.dragged
    }

    /// Nodes from start to the selected end, empty when there is no end or no path
    pub fn path(&self) -> Vec<NodeId> {
        self.graph.end()
            .map(|end| path_to(&self.graph, end))
            .unwrap_or_default()
    }

    pub fn toggle_obstacle(&mut self, id: NodeId) -> Result<bool, GraphError> {
        let obstacle = self.graph.toggle_obstacle(id)?;
        self.recompute()?;
        Ok(obstacle)
    }

    pub fn set_start(&mut self, id: NodeId) -> Result<(), GraphError> {
        self.graph.select_start(id)?;
        self.recompute()
    }

    /// Display only, the search does not depend on the end
    pub fn set_end(&mut self, id: NodeId) -> Result<(), GraphError> {
        self.graph.select_end(id)
    }

    pub fn reposition(&mut self, id: NodeId, position: Point) -> Result<(), GraphError> {
        self.graph.reposition(id, position)?;
        self.recompute()
    }

    /// Rebuild the initial graph, dropping selections and any drag in progress
    pub fn reset(&mut self) {
        self.graph.reset();
        self.dragged = None;
    }

    /// Apply `button`'s action to the node under `point`
    /// Returns the picked node, or None when the press missed every node
    pub fn press(&mut self, point: Point, button: PointerButton) -> Result<Option<NodeId>, GraphError> {
        let Some(id) = self.graph.pick(&point) else {
            return Ok(None);
        };

        debug!("{button:?} press on {id}");
        match button {
            PointerButton::Primary => self.set_start(id)?,
            PointerButton::Secondary => self.set_end(id)?,
            PointerButton::Middle => {
                self.toggle_obstacle(id)?;
            }
        }

        Ok(Some(id))
    }

    /// Grab the node under `point`, if any
    pub fn begin_drag(&mut self, point: Point) -> Option<NodeId> {
        self.dragged = self.graph.pick(&point);
        self.dragged
    }

    /// Move the grabbed node to `point` and recompute
    /// Returns false when nothing is being dragged
    pub fn drag_to(&mut self, point: Point) -> Result<bool, GraphError> {
        match self.dragged {
            Some(id) => {
                self.reposition(id, point)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn end_drag(&mut self) -> Option<NodeId> {
        self.dragged.take()
    }

    fn recompute(&mut self) -> Result<(), GraphError> {
        let start = self.graph.start();
        compute_shortest_paths(&mut self.graph, start)
    }
}
