use crate::errors::PathPlannerError;
use crate::model::{GraphModel, NodeId};
use super::final_path::construct_final_path;
use super::open_list::OpenList;
use super::{Annotation, AnnotationMap, PlannerConfig, RevisitPolicy, SearchState, SearchStats};

use tracing::{debug, trace};


/// A* route planner
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Searches a `GraphModel` between the nodes closest to two map positions.
/// Edge costs and the heuristic are both straight line distances, so the
/// heuristic never overestimates the remaining cost.
///
/// Nodes are annotated (g, h, parent) the first time they are reached and never
/// relaxed afterwards. With a consistent heuristic this rarely matters, but the
/// returned path is not guaranteed to be the shortest on every graph.
///
/// With `RevisitPolicy::Overwrite` a node's annotation can change while it sits
/// on the open list, so the next node is picked by its current g + h. Every
/// expansion there re-queues the node's own parent, which keeps the open list
/// from ever draining. The run gives up after `reached * reached` expansions,
/// `reached` being the number of nodes annotated so far.
pub struct RoutePlanner<'a, M: GraphModel> {
    model: &'a mut M,
    config: PlannerConfig,
    start: NodeId,
    end: NodeId,
    open_list: OpenList,
    annotations: AnnotationMap,
    neighbor_buf: Vec<NodeId>,
    expanded: Vec<NodeId>, // expansion order of the last run
    state: SearchState,
    stats: SearchStats,
    distance: f64,
}

impl<'a, M: GraphModel> RoutePlanner<'a, M> {

    /// Create a planner between two positions given as percentages (0-100) of the map
    pub fn new(model: &'a mut M, start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Result<Self, PathPlannerError> {
        Self::with_config(model, start_x, start_y, end_x, end_y, PlannerConfig::default())
    }

    /// Same as `new`, coordinates are divided by `config.input_range`
    pub fn with_config(model: &'a mut M, start_x: f64, start_y: f64, end_x: f64, end_y: f64, config: PlannerConfig) -> Result<Self, PathPlannerError> {
        let start = model.find_closest_node(start_x / config.input_range, start_y / config.input_range)?;
        let end = model.find_closest_node(end_x / config.input_range, end_y / config.input_range)?;

        Ok(Self {
            model,
            config,
            start,
            end,
            open_list: OpenList::new(),
            annotations: AnnotationMap::default(),
            neighbor_buf: Vec::new(),
            expanded: Vec::new(),
            state: SearchState::Idle,
            stats: SearchStats::default(),
            distance: 0.0,
        })
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn end(&self) -> NodeId {
        self.end
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Scaled length of the last path found, 0 until a run succeeds
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Annotation of a node reached during the last run
    pub fn annotation(&self, node: NodeId) -> Option<&Annotation> {
        self.annotations.get(&node)
    }

    /// Nodes in the order they were expanded during the last run
    /// Under `RevisitPolicy::Overwrite` a node can show up more than once
    pub fn expanded_nodes(&self) -> &[NodeId] {
        &self.expanded
    }

    /// Entries left on the open list, always 0 once a run has finished
    pub fn open_list_len(&self) -> usize {
        self.open_list.len()
    }

    /// Run the search
    /// On success the path is stored in the model and the distance is available on the planner
    /// Returns NoPathFound when the open list runs dry before reaching the end node
    pub fn a_star_search(&mut self) -> Result<(), PathPlannerError> {
        self.reset();
        debug!(start = self.start, end = self.end, "starting A* search");

        // Mark start node as visited and push it into the open list
        let h_value = self.calculate_h_value(self.start);
        self.annotations.insert(self.start, Annotation {
            visited: true,
            g_value: 0.0,
            h_value,
            parent: None,
        });
        self.push(self.start, h_value);
        self.state = SearchState::Searching;

        while let Some(current) = self.next_node() {

            if current == self.end {
                let path = match construct_final_path(&*self.model, &self.annotations, self.start, self.end) {
                    Ok(path) => path,
                    Err(e) => {
                        self.open_list.clear();
                        self.state = SearchState::Exhausted;
                        return Err(e);
                    }
                };
                self.distance = path.distance;
                debug!(
                    nodes = path.nodes.len(),
                    distance = path.distance,
                    expanded = self.stats.expanded,
                    pushed = self.stats.pushed,
                    "path found"
                );
                self.model.set_path(path);
                self.open_list.clear();
                self.state = SearchState::Found;
                return Ok(());
            }

            if self.expansion_limit_reached() {
                debug!(expanded = self.stats.expanded, reached = self.annotations.len(), "expansion limit reached");
                break;
            }

            self.add_neighbors(current);
        }

        debug!(expanded = self.stats.expanded, pushed = self.stats.pushed, "open list exhausted, no path");
        self.open_list.clear();
        self.state = SearchState::Exhausted;
        Err(PathPlannerError::NoPathFound)
    }

    /// Straight line distance to the end node
    pub fn calculate_h_value(&self, node: NodeId) -> f64 {
        self.model.distance(node, self.end)
    }

    /// Expand a node: annotate its neighbors and put them on the open list
    fn add_neighbors(&mut self, current: NodeId) {
        self.stats.expanded += 1;
        self.expanded.push(current);
        self.model.populate_neighbors(current);

        let current_g = self.annotations.get(&current).map_or(0.0, |a| a.g_value);

        let mut neighbors = std::mem::take(&mut self.neighbor_buf);
        neighbors.clear();
        neighbors.extend_from_slice(self.model.neighbors(current));
        trace!(node = current, g = current_g, neighbors = neighbors.len(), "expanding");

        for &neighbor in neighbors.iter() {
            let seen = self.annotations.get(&neighbor).is_some_and(|a| a.visited);
            if seen && self.config.revisit == RevisitPolicy::Skip {
                continue;
            }

            let g_value = current_g + self.model.distance(current, neighbor);
            let h_value = self.calculate_h_value(neighbor);

            // insert overwrites an earlier annotation, older open list entries go stale
            self.annotations.insert(neighbor, Annotation {
                visited: true,
                g_value,
                h_value,
                parent: Some(current),
            });
            self.push(neighbor, g_value + h_value);
        }

        self.neighbor_buf = neighbors;
    }

    /// Pop the open list node with the lowest g + h
    fn next_node(&mut self) -> Option<NodeId> {
        match self.config.revisit {
            // annotations never change once queued, the f stored at push time is current
            RevisitPolicy::Skip => self.open_list.pop(),
            RevisitPolicy::Overwrite => {
                let annotations = &self.annotations;
                self.open_list.pop_lowest_by(|node| {
                    annotations
                        .get(&node)
                        .map_or(f64::INFINITY, |a| a.g_value + a.h_value)
                })
            }
        }
    }

    /// Only bounds `Overwrite` runs, `Skip` expands each node at most once
    fn expansion_limit_reached(&self) -> bool {
        let reached = self.annotations.len();
        self.config.revisit == RevisitPolicy::Overwrite && self.stats.expanded >= reached * reached
    }

    fn push(&mut self, node: NodeId, f_cost: f64) {
        self.open_list.push(node, f_cost);
        self.stats.pushed += 1;
    }

    fn reset(&mut self) {
        self.open_list.clear();
        self.annotations.clear();
        self.expanded.clear();
        self.stats = SearchStats::default();
        self.distance = 0.0;
        self.state = SearchState::Idle;
    }
}
