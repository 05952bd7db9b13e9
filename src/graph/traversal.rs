//! Unweighted shortest-path search (BFS).

use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::GraphResult;

use super::Graph;

/// One step of a partial path discovered during the search.
///
/// Trails live in an arena and point at their predecessor by index; the start
/// trail has no predecessor.
#[derive(Debug)]
struct Trail<K> {
    key: K,
    prev: Option<usize>,
}

impl<K, T, M> Graph<K, T, M>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Shortest path from `start` to `end` by edge count, as node values.
    ///
    /// The path includes both endpoints, so `start == end` yields a single
    /// value. An empty vec means `end` is not reachable from `start`.
    ///
    /// Fails with `NodeNotFound` if `end` does not exist, or if `start` does
    /// not exist once the search tries to expand it.
    pub fn shortest_path(&self, start: &K, end: &K) -> GraphResult<Vec<&T>, K> {
        self.shortest_path_keys(start, end)?
            .iter()
            .map(|key| self.get_node(key))
            .collect()
    }

    /// Same as [`Graph::shortest_path`], returning the keys along the path.
    pub fn shortest_path_keys(&self, start: &K, end: &K) -> GraphResult<Vec<K>, K> {
        self.ensure_node(end)?;

        let mut trails: Vec<Trail<K>> = vec![Trail {
            key: start.clone(),
            prev: None,
        }];
        let mut queue: VecDeque<usize> = VecDeque::from([0]);
        let mut visited: HashSet<K> = HashSet::new();

        while let Some(current) = queue.pop_front() {
            let key = &trails[current].key;
            // A key can be queued several times before its first pop; only that pop counts.
            if !visited.insert(key.clone()) {
                continue;
            }

            if key == end {
                log::trace!(
                    "Found path {:?} -> {:?} after visiting {} nodes",
                    start,
                    end,
                    visited.len()
                );
                return Ok(walk_back(&trails, current));
            }

            let targets = self.get_edges(key)?;
            log::trace!("Expanding {:?} ({} edges)", key, targets.len());
            for target in targets {
                trails.push(Trail {
                    key: target.clone(),
                    prev: Some(current),
                });
                queue.push_back(trails.len() - 1);
            }
        }

        log::trace!("No path from {:?} to {:?}", start, end);
        Ok(Vec::new())
    }
}

/// Follow predecessor links from `last` back to the start, returning keys start-first.
fn walk_back<K: Clone>(trails: &[Trail<K>], last: usize) -> Vec<K> {
    let mut path = Vec::new();
    let mut cursor = Some(last);
    while let Some(index) = cursor {
        let trail = &trails[index];
        path.push(trail.key.clone());
        cursor = trail.prev;
    }
    path.reverse();
    path
}
