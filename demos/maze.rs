//! Carve a random cave and compare the two turn-aware strategies on it.
//!
//! Run: cargo run --bin maze -- [seed] [width] [height]

use std::error::Error;

use rand::SeedableRng;
use turnpath_core::{Point, Range};
use turnpath_demos::Cave;
use turnpath_paths::{BfsPathFinder, LeastTurnsPathFinder, PathFinder, PathFindingStrategy};

const DEFAULT_WIDTH: i32 = 40;
const DEFAULT_HEIGHT: i32 = 16;
const FILL: f64 = 0.45;

fn arg<T: std::str::FromStr>(args: &[String], i: usize, default: T) -> Result<T, Box<dyn Error>>
where
    T::Err: Error + 'static,
{
    match args.get(i) {
        Some(s) => Ok(s.parse()?),
        None => Ok(default),
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed: u64 = arg(&args, 0, 42)?;
    let width: i32 = arg(&args, 1, DEFAULT_WIDTH)?;
    let height: i32 = arg(&args, 2, DEFAULT_HEIGHT)?;
    if width < 2 || height < 2 {
        return Err(format!("map must be at least 2x2, got {width}x{height}").into());
    }

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let (cave, carved) = Cave::random_walk(Range::new(0, 0, width, height), FILL, &mut rng);
    let graph = cave.graph();

    let cells: Vec<Point> = cave.floor_cells().collect();
    let (Some(&start), Some(&goal)) = (cells.first(), cells.last()) else {
        return Err("cave has no floor".into());
    };
    println!("seed {seed}: {carved} floor cells, {start} -> {goal}\n");

    let strategies: [(&str, &dyn PathFindingStrategy<Point>); 2] = [
        ("breadth-first", &BfsPathFinder),
        ("least turns", &LeastTurnsPathFinder),
    ];
    for (name, strategy) in strategies {
        match PathFinder::find_path_to(&graph, &start, &goal, strategy)? {
            Some(path) => {
                println!("{name}: {} hops, {} turns", path.hops(), path.turns());
                println!("{}", cave.render(Some(&path)));
            }
            None => println!("{name}: no path\n"),
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
