pub mod a_star;
mod open_list;
mod final_path;

pub use a_star::RoutePlanner;

use crate::collections::FxIndexMap;
use crate::model::NodeId;


/// Search data attached to a node during one run
/// Kept apart from the node geometry so every run starts from a clean slate
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub visited: bool,
    pub g_value: f64, // cost from the start node
    pub h_value: f64, // estimated cost to the end node
    pub parent: Option<NodeId>, // None only for the start node
}

/// Annotations of every node reached during a run, in discovery order
pub type AnnotationMap = FxIndexMap<NodeId, Annotation>;


/// What to do with a neighbor that was already reached earlier in the run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevisitPolicy {
    /// Leave it alone, every node enters the open list once
    #[default]
    Skip,
    /// Re-annotate and push it again, earlier open list entries go stale
    Overwrite,
}


/// Planner settings
#[derive(Clone, Debug, PartialEq)]
pub struct PlannerConfig {
    pub revisit: RevisitPolicy,
    /// Span of the caller's coordinates, 100 for percentages
    pub input_range: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            revisit: RevisitPolicy::default(),
            input_range: 100.0,
        }
    }
}


/// Where a search run stands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Searching,
    Found, // end node reached, path stored in the model
    Exhausted, // open list drained, no path
}


/// Work done by the last run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize, // nodes popped and expanded
    pub pushed: usize, // open list pushes, start node included
}
