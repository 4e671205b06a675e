use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use crate::graph::{Graph, NodeId};

/// Result of one single-source breadth-first sweep.
///
/// Stores a parent pointer and distance per reached vertex instead of a path
/// per vertex; paths are reconstructed on demand by walking parents back to
/// the root.
#[derive(Debug, Clone)]
pub struct SweepTable {
    root: NodeId,
    /// node -> (distance, parent). The root is its own parent at distance 0.
    entries: HashMap<NodeId, (u32, NodeId)>,
}

impl SweepTable {
    /// Hop count from the root, or None if `target` was not reached.
    pub fn distance(&self, target: NodeId) -> Option<u32> {
        self.entries.get(&target).map(|&(d, _)| d)
    }

    /// Vertices on one shortest path from the root to `target`, both endpoints
    /// included. None if `target` was not reached.
    pub fn path(&self, target: NodeId) -> Option<Vec<NodeId>> {
        let &(distance, _) = self.entries.get(&target)?;
        let mut path = Vec::with_capacity(distance as usize + 1);
        let mut current = target;

        while current != self.root {
            path.push(current);
            current = self.entries[&current].1;
        }
        path.push(self.root);

        path.reverse();
        Some(path)
    }

    /// Number of vertices reached, the root included.
    pub fn reachable_count(&self) -> usize {
        self.entries.len()
    }

    /// Vertices at distance 1..=max_depth, ordered by distance then handle.
    pub fn within(&self, max_depth: u32) -> Vec<(NodeId, u32)> {
        let mut found: Vec<(NodeId, u32)> = self
            .entries
            .iter()
            .filter(|(_, &(d, _))| d > 0 && d <= max_depth)
            .map(|(&id, &(d, _))| (id, d))
            .collect();
        found.sort_by_key(|&(id, d)| (d, id));
        found
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;
        self.entries.len() * (size_of::<NodeId>() + size_of::<(u32, NodeId)>() + 8)
    }
}

/// BFS from `root` over every reachable vertex.
///
/// Neighbors are expanded in ascending handle order, so when several shortest
/// paths exist the predecessor discovered first wins. Returns None if `root`
/// is not in the graph.
pub fn sweep(graph: &Graph, root: NodeId) -> Option<SweepTable> {
    graph.label(root)?;

    let mut entries: HashMap<NodeId, (u32, NodeId)> = HashMap::new();
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();

    entries.insert(root, (0, root));
    queue.push_back((root, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for &next in graph.neighbor_ids(current) {
            if let Entry::Vacant(slot) = entries.entry(next) {
                slot.insert((depth + 1, current));
                queue.push_back((next, depth + 1));
            }
        }
    }

    Some(SweepTable { root, entries })
}

/// One-shot shortest path from `start` to `target` with early exit.
///
/// Returns None if either vertex is absent or no path exists. Uses the same
/// expansion order as `sweep`, so both agree on tie-breaks.
pub fn shortest_path(graph: &Graph, start: NodeId, target: NodeId) -> Option<Vec<NodeId>> {
    graph.label(start)?;
    graph.label(target)?;

    if start == target {
        return Some(vec![start]);
    }

    let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    parents.insert(start, start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &next in graph.neighbor_ids(current) {
            let Entry::Vacant(slot) = parents.entry(next) else {
                continue;
            };
            slot.insert(current);

            if next == target {
                let mut path = vec![target];
                let mut node = target;
                while node != start {
                    node = parents[&node];
                    path.push(node);
                }
                path.reverse();
                return Some(path);
            }

            queue.push_back(next);
        }
    }

    None
}
