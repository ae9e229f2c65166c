use clearance_pathfinding::obstacle_map::{Obstacle, ObstacleMap};
use clearance_pathfinding::Point;
use rand::prelude::*;

// Generates a random obstacle field, round-trips it through the black/white raster encoding
// and keeps drawing random agents (clearance radius, start and end) until one of them can
// reach its goal. The map and the path are then printed, where
// - # marks an obstacle
// - S marks the start
// - G marks the end
// - * marks the path

const M: i32 = 64;
const N: i32 = 40;
const P: usize = 10;

fn main() {
    let mut rng = StdRng::from_entropy();
    let mut map = ObstacleMap::new(M, N).unwrap();
    // Obstacle radii are at most 10% of the smaller side, overlap is allowed
    let max_radius = M.min(N) / 10;
    let obstacles = (0..P)
        .map(|_| {
            let r = rng.gen_range(1..max_radius);
            Obstacle::new(rng.gen_range(r..M - r - 1), rng.gen_range(r..N - r - 1), r)
        })
        .collect::<Vec<_>>();
    map.insert_obstacles(obstacles);

    let pixels = map.to_raster();
    let map = ObstacleMap::from_raster(M, N, &pixels).unwrap();
    let mut pathfinder = map.finalize();

    loop {
        let r = rng.gen_range(1..max_radius);
        let start = Point::new(rng.gen_range(r..M - r - 1), rng.gen_range(r..N - r - 1));
        let end = Point::new(rng.gen_range(r..M - r - 1), rng.gen_range(r..N - r - 1));
        match pathfinder.find_shortest_path(start, end, r) {
            Ok(path) => {
                println!(
                    "The shortest safe path for radius {} is {} steps long:",
                    r,
                    path.len()
                );
                break;
            }
            Err(e) => println!("{}, choosing new points", e),
        }
    }
    println!("{}", pathfinder);
}
