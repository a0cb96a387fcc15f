use crate::collections::{FxIndexMap, FxIndexSet};
use crate::errors::PathPlannerError;
use crate::geometry::{Bounds, Point};
use super::{GraphModel, Node, NodeId, RoutePath};

use kdtree::KdTree;
use kdtree::distance::squared_euclidean;


/// In-memory road graph
///
/// Nodes are stored in an arena and indexed in a kd-tree for nearest lookups.
/// Roads are stored as ways, ordered lists of node ids. Two nodes are neighbors
/// when they follow each other on a way. Neighbor sets are only computed when
/// the planner expands a node.
pub struct RouteModel {
    nodes: Vec<Node>,
    ways: Vec<Vec<NodeId>>,
    node_to_ways: Vec<Vec<usize>>, // node id -> indexes into ways
    neighbors: FxIndexMap<NodeId, Vec<NodeId>>, // populated lazily
    tree: KdTree<f64, NodeId, [f64; 2]>, // point -> node id
    bounds: Option<Bounds>,
    fixed_bounds: bool,
    metric_scale: f64,
    path: Option<RoutePath>,
}

impl RouteModel {

    /// Create an empty model
    /// metric_scale converts map units into real world units (ie. meters)
    pub fn new(metric_scale: f64) -> Self {
        Self {
            nodes: Vec::new(),
            ways: Vec::new(),
            node_to_ways: Vec::new(),
            neighbors: FxIndexMap::default(),
            tree: KdTree::new(2),
            bounds: None,
            fixed_bounds: false,
            metric_scale,
            path: None,
        }
    }

    /// Add a node at (x, y), returns its id
    pub fn add_node(&mut self, x: f64, y: f64) -> Result<NodeId, PathPlannerError> {
        let id = self.nodes.len();
        let point = Point::new(x, y);

        // kd-tree rejects non finite coordinates, check it before touching anything else
        self.tree.add([x, y], id)?;

        self.nodes.push(Node { id, point });
        self.node_to_ways.push(Vec::new());

        if !self.fixed_bounds {
            match self.bounds.as_mut() {
                Some(bounds) => bounds.expand(&point),
                None => self.bounds = Some(Bounds::from_point(point)),
            }
        }

        Ok(id)
    }

    /// Add a road running through the given nodes in order
    pub fn add_way(&mut self, way: Vec<NodeId>) -> Result<(), PathPlannerError> {
        if way.len() < 2 {
            return Err(PathPlannerError::InvalidWay);
        }
        if let Some(&unknown) = way.iter().find(|&&id| id >= self.nodes.len()) {
            return Err(PathPlannerError::UnknownNode(unknown));
        }

        let way_index = self.ways.len();
        for &id in way.iter() {
            let ways = &mut self.node_to_ways[id];
            // a way can pass the same node twice (loops), register it once
            if !ways.contains(&way_index) {
                ways.push(way_index);
            }
        }
        self.ways.push(way);

        Ok(())
    }

    /// Undirected edge, a way with only two nodes
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), PathPlannerError> {
        self.add_way(vec![a, b])
    }

    /// Fix the map bounds instead of deriving them from the nodes
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
        self.fixed_bounds = true;
    }

    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Last path stored by a planner
    pub fn path(&self) -> Option<&RoutePath> {
        self.path.as_ref()
    }

    pub fn take_path(&mut self) -> Option<RoutePath> {
        self.path.take()
    }
}

impl GraphModel for RouteModel {

    fn find_closest_node(&self, x_fraction: f64, y_fraction: f64) -> Result<NodeId, PathPlannerError> {
        let bounds = self.bounds.as_ref().ok_or(PathPlannerError::EmptyModel)?;
        let target = bounds.denormalize(x_fraction, y_fraction);

        let nearest = self.tree.nearest(&[target.x, target.y], 1, &squared_euclidean)?;
        nearest
            .first()
            .map(|&(_, &id)| id)
            .ok_or(PathPlannerError::EmptyModel)
    }

    fn populate_neighbors(&mut self, node: NodeId) {
        if self.neighbors.contains_key(&node) {
            return;
        }
        let Some(way_indexes) = self.node_to_ways.get(node) else {
            return;
        };

        // Nodes directly before and after this one on every way it belongs to
        let mut found: FxIndexSet<NodeId> = FxIndexSet::default();
        for &way_index in way_indexes.iter() {
            let way = &self.ways[way_index];
            for (i, _) in way.iter().enumerate().filter(|&(_, &id)| id == node) {
                if i > 0 {
                    found.insert(way[i - 1]);
                }
                if let Some(&next) = way.get(i + 1) {
                    found.insert(next);
                }
            }
        }
        found.shift_remove(&node);

        self.neighbors.insert(node, found.into_iter().collect());
    }

    fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.neighbors.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn distance(&self, a: NodeId, b: NodeId) -> f64 {
        match (self.nodes.get(a), self.nodes.get(b)) {
            (Some(a), Some(b)) => a.distance(b),
            _ => f64::INFINITY,
        }
    }

    fn metric_scale(&self) -> f64 {
        self.metric_scale
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    fn set_path(&mut self, path: RoutePath) {
        self.path = Some(path);
    }
}
