//! Building orientational graphs from rectangular grids.

use crate::geom::{Direction, Point, Range};
use crate::graph::Graph;

impl Graph<Point> {
    /// Build an orientational graph over the cells of `range`.
    ///
    /// Every cell for which `keep` returns `true` becomes a node, and each
    /// pair of orthogonally adjacent kept cells is linked in both
    /// directions. Cells outside `range` are never visited.
    pub fn grid(range: Range, keep: impl Fn(Point) -> bool) -> Self {
        let mut g = Graph::orientational();
        for p in range {
            if !keep(p) {
                continue;
            }
            let a = g.get_or_create_node(p);
            // Left and Top links are set as mirrors of the cells before us.
            for dir in [Direction::Right, Direction::Bottom] {
                let q = p.step(dir);
                if range.contains(q) && keep(q) {
                    let b = g.get_or_create_node(q);
                    g.link(a, b, dir, true);
                }
            }
        }
        g
    }
}
