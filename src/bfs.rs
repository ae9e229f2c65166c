//! This module implements a breadth-first search in the style of
//! [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html).
//! Every discovered node is stored once in an insertion-ordered map together with the index
//! of its parent, which doubles as the visited set and lets the frontier hold plain indices.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::collections::VecDeque;
use std::hash::Hash;

fn reverse_path<N>(parents: &FxIndexMap<N, usize>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut i = start;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, &parent)| {
            i = parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Returns the shortest sequence of nodes from `start` to the first node accepted by
/// `success`, both included. Successors are expanded in the order `successors` yields them
/// and a node is never expanded twice. The goal test runs on each newly discovered node, so
/// the search stops as soon as the goal enters the frontier.
pub fn bfs<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    if success(start) {
        return Some(vec![start.clone()]);
    }
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), usize::MAX);
    let mut to_see = VecDeque::new();
    to_see.push_back(0);
    while let Some(index) = to_see.pop_front() {
        let successors = match parents.get_index(index) {
            Some((node, _)) => successors(node),
            None => continue,
        };
        for successor in successors {
            let reached = success(&successor);
            if let Vacant(e) = parents.entry(successor) {
                let n = e.index();
                e.insert(index);
                if reached {
                    return Some(reverse_path(&parents, n));
                }
                to_see.push_back(n);
            }
        }
    }
    None
}
