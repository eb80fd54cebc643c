use crate::errors::GraphError;


/// Parameters the node collection is built (and rebuilt on reset) from
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
    pub node_count: usize,
    pub radius: f64, // Base radius of the layout before sinusoidal modulation
    pub pick_radius: f64, // How close a pointer must be to grab a node
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            node_count: 12,
            radius: 0.6,
            pick_radius: 0.03,
        }
    }
}

impl GraphConfig {

    pub fn new(node_count: usize, radius: f64) -> Self {
        Self {
            node_count,
            radius,
            ..Self::default()
        }
    }

    pub fn with_pick_radius(mut self, pick_radius: f64) -> Self {
        self.pick_radius = pick_radius;
        self
    }

    /// Reject configs the layout formula cannot place
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.node_count == 0 {
            return Err(GraphError::InvalidConfig("node_count must be at least 1".into()));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(GraphError::InvalidConfig(format!("radius {} is not a finite non-negative value", self.radius)));
        }
        if !self.pick_radius.is_finite() || self.pick_radius <= 0.0 {
            return Err(GraphError::InvalidConfig(format!("pick_radius {} must be finite and positive", self.pick_radius)));
        }
        Ok(())
    }
}
