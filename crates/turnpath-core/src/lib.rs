//! **turnpath-core** — graph model for turn-aware path-finding.
//!
//! This crate provides the data structures the `turnpath-paths` searches
//! run over: cardinal [`Direction`]s, integer [`Point`]s and [`Range`]s, and
//! a value-keyed [`Graph`] whose nodes optionally carry one outgoing link
//! per direction.
//!
//! ```
//! use turnpath_core::{Direction, Graph};
//!
//! let mut g = Graph::orientational();
//! g.add_directed_edge("hall", "kitchen", Direction::Right, true).unwrap();
//! let kitchen = g.get("kitchen").unwrap();
//! assert_eq!(kitchen.neighbor(Direction::Left), g.node_id("hall"));
//! ```

pub mod geom;
pub mod graph;
pub mod grid;

pub use geom::{Direction, Point, Range, RangeIter, opposite};
pub use graph::{Graph, Node, NodeId, Topology, TopologyError};
