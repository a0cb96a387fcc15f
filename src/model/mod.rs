pub mod route_model;

pub use route_model::RouteModel;

use crate::errors::PathPlannerError;
use crate::geometry::Point;

/// Index of a node in the model's node arena
pub type NodeId = usize;


/// Graph node - stable id plus its position on the map
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub point: Point,
}

impl Node {
    pub fn distance(&self, other: &Node) -> f64 {
        self.point.distance(&other.point)
    }
}


/// Result of a successful search, handed back to the model
/// Nodes are copies, ordered from start to end inclusive
#[derive(Clone, Debug, PartialEq)]
pub struct RoutePath {
    pub nodes: Vec<Node>,
    pub distance: f64, // real world units, already multiplied by the metric scale
}


/// Graph the route planner searches over
///
/// The model owns node geometry and adjacency. The planner only asks it
/// questions and writes the final path back through `set_path`.
pub trait GraphModel {

    /// Node closest to a position given as fractions of the map bounds
    /// Fractions outside [0, 1] are passed through as-is
    fn find_closest_node(&self, x_fraction: f64, y_fraction: f64) -> Result<NodeId, PathPlannerError>;

    /// Discover the neighbors of a node, calling it again must be a no-op
    fn populate_neighbors(&mut self, node: NodeId);

    /// Neighbors found by `populate_neighbors`, empty until then
    fn neighbors(&self, node: NodeId) -> &[NodeId];

    /// Symmetric straight line distance, used as edge cost and heuristic
    fn distance(&self, a: NodeId, b: NodeId) -> f64;

    /// Multiplier from map units to real world units
    fn metric_scale(&self) -> f64;

    fn node(&self, id: NodeId) -> Option<&Node>;

    /// Store the path found by the planner
    fn set_path(&mut self, path: RoutePath);
}
