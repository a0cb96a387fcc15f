//! A* route planning over road graphs embedded in 2D space.
//!
//! A [`RouteModel`] holds the nodes, roads and map bounds. A [`RoutePlanner`]
//! picks the nodes closest to two map positions (percentages of the bounds),
//! runs A* between them and stores the resulting [`RoutePath`] back in the model.
//!
//! ```
//! use route_planner::{RouteModel, RoutePlanner};
//!
//! let mut model = RouteModel::new(1.0);
//! let a = model.add_node(0.0, 0.0)?;
//! let b = model.add_node(1.0, 0.0)?;
//! let c = model.add_node(1.0, 1.0)?;
//! model.add_edge(a, b)?;
//! model.add_edge(b, c)?;
//! model.add_edge(a, c)?;
//!
//! let mut planner = RoutePlanner::new(&mut model, 0.0, 0.0, 100.0, 100.0)?;
//! planner.a_star_search()?;
//!
//! let path = model.path().unwrap();
//! assert_eq!(path.nodes.len(), 2);
//! # Ok::<(), route_planner::PathPlannerError>(())
//! ```

mod collections;
pub mod errors;
pub mod geometry;
pub mod model;
pub mod planner;

pub use errors::PathPlannerError;
pub use model::{GraphModel, Node, NodeId, RouteModel, RoutePath};
pub use planner::{PlannerConfig, RevisitPolicy, RoutePlanner, SearchState, SearchStats};
