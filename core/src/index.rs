use std::collections::HashMap;

use rayon::prelude::*;

use crate::graph::{Graph, NodeId};
use crate::traversal::{sweep, SweepTable};

/// All-pairs shortest paths, one sweep table per root.
///
/// Built wholesale from a graph snapshot. It does not follow later graph
/// changes; the owner discards it on mutation.
#[derive(Debug, Clone)]
pub struct PathIndex {
    tables: HashMap<NodeId, SweepTable>,
}

impl PathIndex {
    /// Sweep from every vertex. With `parallel`, roots are spread over the
    /// rayon pool; each sweep owns its table and only reads the graph.
    pub fn build(graph: &Graph, parallel: bool) -> Self {
        let roots = graph.node_ids();

        let tables: HashMap<NodeId, SweepTable> = if parallel {
            roots
                .par_iter()
                .filter_map(|&root| sweep(graph, root).map(|t| (root, t)))
                .collect()
        } else {
            roots
                .iter()
                .filter_map(|&root| sweep(graph, root).map(|t| (root, t)))
                .collect()
        };

        Self { tables }
    }

    pub fn table(&self, root: NodeId) -> Option<&SweepTable> {
        self.tables.get(&root)
    }

    /// One shortest path from `from` to `to`, endpoints included.
    pub fn path(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        self.tables.get(&from)?.path(to)
    }

    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<u32> {
        self.tables.get(&from)?.distance(to)
    }

    pub fn root_count(&self) -> usize {
        self.tables.len()
    }

    /// Ordered (source, target) pairs with a stored path, self-pairs included.
    pub fn reachable_pairs(&self) -> usize {
        self.tables.values().map(|t| t.reachable_count()).sum()
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        self.tables.values().map(|t| t.memory_usage()).sum()
    }
}
