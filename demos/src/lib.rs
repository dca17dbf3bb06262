//! Shared cave model for the turnpath demos.
//!
//! Carves a cave with a random walk, turns it into an orientational graph
//! and renders it, optionally with a path overlay, as ASCII.

use rand::{Rng, RngExt};
use turnpath_core::{Direction, Graph, Point, Range};
use turnpath_paths::Path;

pub const WALL: char = '#';
pub const FLOOR: char = '.';

/// A rectangular map of wall and floor cells.
pub struct Cave {
    range: Range,
    floor: Vec<bool>,
}

impl Cave {
    /// A cave that is all wall.
    pub fn solid(range: Range) -> Self {
        Self {
            range,
            floor: vec![false; range.len()],
        }
    }

    /// Carve a cave by walking randomly from the centre of `range` until
    /// `fill_pct` (0.0–1.0) of its cells are floor.
    ///
    /// Returns the cave and the number of carved cells.
    pub fn random_walk(range: Range, fill_pct: f64, rng: &mut impl Rng) -> (Self, usize) {
        let mut cave = Self::solid(range);
        let total = range.len();
        let target = (total as f64 * fill_pct) as usize;
        let mut pos = Point::new(
            range.min.x + range.width() / 2,
            range.min.y + range.height() / 2,
        );
        let mut carved = 0usize;

        // Bounded so that a tiny fill target on a huge map still terminates.
        for _ in 0..total * 8 {
            if carved >= target {
                break;
            }
            if cave.carve(pos) {
                carved += 1;
            }
            let dir = Direction::ALL[rng.random_range(0..4usize)];
            let next = pos.step(dir);
            if range.contains(next) {
                pos = next;
            }
        }
        log::debug!("carved {carved}/{total} cells in {range}");
        (cave, carved)
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    fn idx(&self, p: Point) -> Option<usize> {
        if !self.range.contains(p) {
            return None;
        }
        let x = (p.x - self.range.min.x) as usize;
        let y = (p.y - self.range.min.y) as usize;
        Some(y * self.range.width() as usize + x)
    }

    /// Turn `p` into floor. Returns `true` if it was wall before.
    pub fn carve(&mut self, p: Point) -> bool {
        match self.idx(p) {
            Some(i) if !self.floor[i] => {
                self.floor[i] = true;
                true
            }
            _ => false,
        }
    }

    /// Whether `p` is an in-range floor cell.
    pub fn is_floor(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.floor[i])
    }

    /// Floor cells in row-major order.
    pub fn floor_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.range.iter().filter(|&p| self.is_floor(p))
    }

    /// The orientational graph linking adjacent floor cells.
    pub fn graph(&self) -> Graph<Point> {
        Graph::grid(self.range, |p| self.is_floor(p))
    }

    /// Draw the cave, marking `path` cells with arrows and its ends with
    /// `S` and `G`.
    pub fn render(&self, path: Option<&Path<Point>>) -> String {
        let w = self.range.width().max(0) as usize;
        let mut rows: Vec<Vec<char>> = (self.range.min.y..self.range.max.y)
            .map(|y| {
                (self.range.min.x..self.range.max.x)
                    .map(|x| if self.is_floor(Point::new(x, y)) { FLOOR } else { WALL })
                    .collect()
            })
            .collect();

        if let Some(path) = path {
            let nodes = path.nodes();
            for (i, &p) in nodes.iter().enumerate() {
                let glyph = if i == 0 {
                    'S'
                } else if i + 1 == nodes.len() {
                    'G'
                } else {
                    nodes
                        .get(i + 1)
                        .and_then(|&n| Direction::from_delta(n - p))
                        .map_or('*', arrow)
                };
                let (x, y) = (p.x - self.range.min.x, p.y - self.range.min.y);
                if let Some(c) = rows.get_mut(y as usize).and_then(|r| r.get_mut(x as usize)) {
                    *c = glyph;
                }
            }
        }

        let mut out = String::with_capacity(rows.len() * (w + 1));
        for row in rows {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

fn arrow(dir: Direction) -> char {
    match dir {
        Direction::Left => '<',
        Direction::Right => '>',
        Direction::Top => '^',
        Direction::Bottom => 'v',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use turnpath_paths::{BfsPathFinder, PathFinder};

    #[test]
    fn random_walk_reaches_target_fill() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let range = Range::new(0, 0, 20, 10);
        let (cave, carved) = Cave::random_walk(range, 0.4, &mut rng);
        assert!(carved > 0 && carved <= 80);
        assert_eq!(cave.floor_cells().count(), carved);
        assert!(cave.is_floor(Point::new(10, 5)));
    }

    #[test]
    fn carved_floor_is_connected() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let (cave, _) = Cave::random_walk(Range::new(0, 0, 16, 8), 0.5, &mut rng);
        let g = cave.graph();
        let cells: Vec<Point> = cave.floor_cells().collect();
        let first = cells[0];
        for &p in &cells[1..] {
            let r = PathFinder::find_path_to(&g, &first, &p, &BfsPathFinder).unwrap();
            assert!(r.is_some(), "{p} unreachable");
        }
    }

    #[test]
    fn render_marks_path() {
        let mut cave = Cave::solid(Range::new(0, 0, 3, 2));
        for p in [Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)] {
            cave.carve(p);
        }
        let path = Path::new(vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)], 1);
        assert_eq!(cave.render(Some(&path)), "Sv#\n#G#\n");
        assert_eq!(cave.render(None), "..#\n#.#\n");
    }
}
