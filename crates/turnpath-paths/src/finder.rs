use turnpath_core::Graph;

use crate::path::Path;
use crate::traits::{PathError, PathFindingStrategy};

/// Stateless entry point that runs a search with a caller-chosen strategy.
///
/// Call sites depend on this façade rather than on a concrete algorithm, so
/// switching between [`BfsPathFinder`](crate::BfsPathFinder) and
/// [`LeastTurnsPathFinder`](crate::LeastTurnsPathFinder) (or a custom
/// [`PathFindingStrategy`]) is a one-argument change.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathFinder;

impl PathFinder {
    /// Forward the query to `strategy`.
    pub fn find_path<T, S>(
        graph: &Graph<T>,
        start: &T,
        goal: &T,
        is_goal: impl Fn(&T, &T) -> bool,
        is_passable: impl Fn(&T) -> bool,
        strategy: &S,
    ) -> Result<Option<Path<T>>, PathError>
    where
        S: PathFindingStrategy<T> + ?Sized,
    {
        strategy.find_path(graph, start, goal, &is_goal, &is_passable)
    }

    /// Search for a node equal to `goal`, treating every node as passable.
    pub fn find_path_to<T, S>(
        graph: &Graph<T>,
        start: &T,
        goal: &T,
        strategy: &S,
    ) -> Result<Option<Path<T>>, PathError>
    where
        T: PartialEq,
        S: PathFindingStrategy<T> + ?Sized,
    {
        Self::find_path(graph, start, goal, |a, b| a == b, |_| true, strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BfsPathFinder, LeastTurnsPathFinder};
    use turnpath_core::{Direction, Point, Range};

    #[test]
    fn delegates_to_the_given_strategy() {
        let mut g = Graph::orientational();
        for (from, to, dir) in [
            ('s', 'a', Direction::Right),
            ('a', 'b', Direction::Top),
            ('b', 'g', Direction::Right),
            ('s', 'c', Direction::Top),
            ('c', 'd', Direction::Right),
            ('d', 'e', Direction::Right),
            ('e', 'g', Direction::Right),
        ] {
            g.add_directed_edge(from, to, dir, false).unwrap();
        }
        let bfs = PathFinder::find_path_to(&g, &'s', &'g', &BfsPathFinder)
            .unwrap()
            .unwrap();
        let least = PathFinder::find_path_to(&g, &'s', &'g', &LeastTurnsPathFinder)
            .unwrap()
            .unwrap();
        assert_eq!(bfs.turns(), 2);
        assert_eq!(least.turns(), 1);
    }

    #[test]
    fn strategies_work_behind_a_trait_object() {
        let g = Graph::grid(Range::new(0, 0, 4, 4), |_| true);
        let strategies: [&dyn PathFindingStrategy<Point>; 2] =
            [&BfsPathFinder, &LeastTurnsPathFinder];
        for s in strategies {
            let p = PathFinder::find_path(
                &g,
                &Point::new(0, 0),
                &Point::new(3, 0),
                |a, b| a == b,
                |p| p.y == 0,
                s,
            )
            .unwrap()
            .unwrap();
            assert_eq!(p.hops(), 3);
            assert_eq!(p.turns(), 0);
        }
    }

    #[test]
    fn no_path_is_not_an_error() {
        let g = Graph::grid(Range::new(0, 0, 3, 3), |p| p.x != 1);
        let r = PathFinder::find_path_to(&g, &Point::new(0, 0), &Point::new(2, 0), &BfsPathFinder);
        assert_eq!(r, Ok(None));
    }

    #[test]
    fn undirected_graph_surfaces_an_error() {
        let mut g = Graph::new();
        g.add_edge(Point::new(0, 0), Point::new(1, 0));
        let err = PathFinder::find_path_to(&g, &Point::new(0, 0), &Point::new(1, 0), &BfsPathFinder)
            .unwrap_err();
        assert!(err.to_string().contains("expected orientational graph"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
