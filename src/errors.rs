use thiserror::Error;

use crate::model::NodeId;


#[derive(Debug, Error)]
pub enum PathPlannerError {
    #[error("no path found between start and end node")]
    NoPathFound, // Open list drained before the end node was reached
    #[error("graph model contains no nodes")]
    EmptyModel,
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    #[error("a way must reference at least two nodes")]
    InvalidWay,
    #[error("parent chain from node {0} does not lead back to the start node")]
    BrokenParentChain(NodeId),
    #[error("kd-tree error: {0}")]
    KdTreeError(String),
}


impl From<kdtree::ErrorKind> for PathPlannerError {
    fn from(error: kdtree::ErrorKind) -> Self {
        PathPlannerError::KdTreeError(error.to_string())
    }
}
