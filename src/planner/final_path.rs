use crate::errors::PathPlannerError;
use crate::model::{GraphModel, Node, NodeId, RoutePath};
use super::AnnotationMap;

use tracing::warn;


/// Construct the final path by walking parents back from the end node to the start node
/// Returns the nodes ordered from start to end, with the distance multiplied by the metric scale
/// annotations: AnnotationMap - parent links written during the search
/// start / end: NodeId - endpoints of the run
pub(crate) fn construct_final_path<M>(model: &M, annotations: &AnnotationMap, start: NodeId, end: NodeId) -> Result<RoutePath, PathPlannerError>
where
    M: GraphModel + ?Sized,
{

    let mut path: Vec<Node> = Vec::new();
    let mut distance = 0.0;
    let mut current = end;

    // Trace back from end to start
    // A chain longer than the number of reached nodes has to contain a cycle
    while current != start {
        if path.len() > annotations.len() {
            warn!(end, "parent chain loops without reaching the start node");
            return Err(PathPlannerError::BrokenParentChain(end));
        }

        let parent = annotations
            .get(&current)
            .and_then(|annotation| annotation.parent)
            .ok_or(PathPlannerError::BrokenParentChain(current))?;
        let node = model.node(current).ok_or(PathPlannerError::UnknownNode(current))?;

        distance += model.distance(current, parent);
        path.push(node.clone());
        current = parent;
    }

    let start_node = model.node(start).ok_or(PathPlannerError::UnknownNode(start))?;
    path.push(start_node.clone());

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(RoutePath {
        nodes: path,
        distance: distance * model.metric_scale(),
    })
}
