use thiserror::Error;

use crate::graph::NodeId;


#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("invalid graph config: {0}")]
    InvalidConfig(String),
    #[error("node {0} does not exist")]
    UnknownNode(NodeId), // Index outside the fixed node collection
}
