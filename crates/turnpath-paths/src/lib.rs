//! Turn-aware path-finding over orientational graphs.
//!
//! Searches run over a [`Graph`](turnpath_core::Graph) built with
//! [`Topology::Orientational`](turnpath_core::Topology), where each node has
//! at most one outgoing link per [`Direction`](turnpath_core::Direction). A
//! *turn* is a hop whose direction differs from the hop before it; the first
//! hop out of the start never counts.
//!
//! | Strategy | Result |
//! |---|---|
//! | [`BfsPathFinder`] | first goal discovered in breadth-first order |
//! | [`LeastTurnsPathFinder`] | a goal reached with the fewest turns |
//!
//! ```
//! use turnpath_core::{Graph, Point, Range};
//! use turnpath_paths::{BfsPathFinder, PathFinder};
//!
//! let g = Graph::grid(Range::new(0, 0, 3, 3), |_| true);
//! let path = PathFinder::find_path_to(&g, &Point::new(0, 0), &Point::new(2, 2), &BfsPathFinder)
//!     .unwrap()
//!     .expect("open grid is connected");
//! assert_eq!(path.hops(), 4);
//! ```

mod bfs;
mod finder;
mod least_turns;
mod path;
mod state;
mod traits;

pub use bfs::BfsPathFinder;
pub use finder::PathFinder;
pub use least_turns::LeastTurnsPathFinder;
pub use path::Path;
pub use state::SearchState;
pub use traits::{PathError, PathFindingStrategy};
