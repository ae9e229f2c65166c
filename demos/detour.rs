use clearance_pathfinding::obstacle_map::{Obstacle, ObstacleMap};
use clearance_pathfinding::Point;

// In this example a path is found around a disk on a 10x10 grid, first for a point agent and
// then for an agent with clearance radius 1. Cells are 4-connected.

fn main() {
    let mut map = ObstacleMap::new(10, 10).unwrap();
    map.insert_obstacle(Obstacle::new(5, 5, 3));
    println!("{}", map);
    let mut pathfinder = map.finalize();
    let start = Point::new(0, 5);
    let end = Point::new(9, 5);
    for radius in [0, 1] {
        match pathfinder.find_shortest_path(start, end, radius) {
            Ok(path) => {
                println!("Radius {}: {} cells", radius, path.len());
                println!("{}", pathfinder);
            }
            Err(e) => println!("Radius {}: {}", radius, e),
        }
    }
}
