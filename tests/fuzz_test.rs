/// Fuzzes the search by checking for many random obstacle maps that a path is always found if
/// the goal is reachable by being part of the same connected component, and that every found
/// path is connected, keeps clearance and is no longer than any other path found.
use clearance_pathfinding::{
    is_connected_path, is_valid, manhattan_distance, obstacle_map::ObstacleMap,
    pathfinder::Pathfinder, solver::find_shortest_path, Point,
};
use rand::prelude::*;

fn random_map(w: i32, h: i32, rng: &mut StdRng) -> ObstacleMap {
    let mut map = ObstacleMap::new(w, h).unwrap();
    let n_obstacles = rng.gen_range(0..6);
    for _ in 0..n_obstacles {
        let r = rng.gen_range(0..4);
        map.insert_obstacles([(rng.gen_range(0..w), rng.gen_range(0..h), r)]);
    }
    map
}

fn random_point(map: &ObstacleMap, rng: &mut StdRng) -> Point {
    Point::new(rng.gen_range(0..map.width()), rng.gen_range(0..map.height()))
}

#[test]
fn fuzz() {
    const N: i32 = 16;
    const N_MAPS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_MAPS {
        let radius = rng.gen_range(0..3);
        let map = random_map(N, N - 4, &mut rng);
        let start = random_point(&map, &mut rng);
        let end = random_point(&map, &mut rng);
        let mut pathfinder = Pathfinder::new(map);
        pathfinder.generate_components(radius);
        let reachable = pathfinder.reachable(&start, &end);
        let path = find_shortest_path(pathfinder.map(), start, end, radius);
        // Show the map if the search disagrees with the components
        if path.is_ok() != reachable {
            println!("radius {radius}, start {start}, end {end}\n{}", pathfinder.map());
        }
        assert_eq!(path.is_ok(), reachable);
        if let Ok(path) = path {
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
            assert!(is_connected_path(&path));
            assert!(path
                .iter()
                .all(|p| is_valid(*p, radius, pathfinder.map().occupancy())));
            assert!(path.len() as i32 > manhattan_distance(&start, &end));
            let cached = pathfinder.find_shortest_path(start, end, radius).unwrap();
            assert_eq!(cached, path);
        }
    }
}

/// Reversing start and end must not change the length of the shortest path.
#[test]
fn fuzz_symmetric_length() {
    const N: i32 = 12;
    const N_MAPS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_MAPS {
        let radius = rng.gen_range(0..2);
        let map = random_map(N, N, &mut rng);
        let start = random_point(&map, &mut rng);
        let end = random_point(&map, &mut rng);
        let forward = find_shortest_path(&map, start, end, radius);
        let backward = find_shortest_path(&map, end, start, radius);
        assert_eq!(forward.is_ok(), backward.is_ok());
        if let (Ok(forward), Ok(backward)) = (forward, backward) {
            assert_eq!(forward.len(), backward.len());
        }
    }
}
