use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::{LadderError, Result};

/// Stable vertex handle. Assigned monotonically on insertion and never reused,
/// so ascending handle order is insertion order among live vertices.
pub type NodeId = u64;

/// Undirected, unweighted graph over unique string labels.
///
/// Adjacency is keyed by handle rather than by position, so removing a vertex
/// never shifts the identity of any other vertex. Every live vertex owns an
/// adjacency entry (possibly empty) and every edge is stored in both
/// endpoints' entries.
pub struct Graph {
    nodes: BTreeMap<NodeId, String>,
    label_index: HashMap<String, NodeId>,
    adjacency: HashMap<NodeId, BTreeSet<NodeId>>,
    next_id: NodeId,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            label_index: HashMap::new(),
            adjacency: HashMap::new(),
            next_id: 0,
        }
    }

    /// Insert a vertex, returning its handle.
    pub fn insert_vertex(&mut self, label: &str) -> Result<NodeId> {
        if label.trim().is_empty() {
            return Err(LadderError::EmptyLabel);
        }
        if self.label_index.contains_key(label) {
            return Err(LadderError::DuplicateVertex(label.to_string()));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, label.to_string());
        self.label_index.insert(label.to_string(), id);
        self.adjacency.insert(id, BTreeSet::new());
        Ok(id)
    }

    /// Add a vertex with no edges. False if the label is empty or already present.
    pub fn add_vertex(&mut self, label: &str) -> bool {
        self.insert_vertex(label).is_ok()
    }

    /// Remove a vertex and every edge incident on it. False if absent.
    pub fn remove_vertex(&mut self, label: &str) -> bool {
        let Some(id) = self.label_index.remove(label) else {
            return false;
        };
        self.nodes.remove(&id);
        if let Some(neighbors) = self.adjacency.remove(&id) {
            for n in neighbors {
                if let Some(set) = self.adjacency.get_mut(&n) {
                    set.remove(&id);
                }
            }
        }
        true
    }

    /// Resolve both endpoints of a prospective edge.
    pub fn edge_endpoints(&self, a: &str, b: &str) -> Result<(NodeId, NodeId)> {
        if a == b {
            return Err(LadderError::SelfReference(a.to_string()));
        }
        let from = self
            .resolve(a)
            .ok_or_else(|| LadderError::InvalidVertex(a.to_string()))?;
        let to = self
            .resolve(b)
            .ok_or_else(|| LadderError::InvalidVertex(b.to_string()))?;
        Ok((from, to))
    }

    /// Add an undirected edge. Re-adding an existing edge succeeds without change.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        match self.edge_endpoints(a, b) {
            Ok((from, to)) => {
                self.link(from, to);
                true
            }
            Err(_) => false,
        }
    }

    /// Remove an undirected edge. Fails under the same conditions as `add_edge`.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> bool {
        match self.edge_endpoints(a, b) {
            Ok((from, to)) => {
                self.unlink(from, to);
                true
            }
            Err(_) => false,
        }
    }

    pub fn is_adjacent(&self, a: &str, b: &str) -> bool {
        match self.edge_endpoints(a, b) {
            Ok((from, to)) => self.neighbor_ids(from).contains(&to),
            Err(_) => false,
        }
    }

    /// Labels adjacent to `label`, in insertion order. Empty if absent.
    pub fn neighbors(&self, label: &str) -> Vec<String> {
        match self.resolve(label) {
            Some(id) => self
                .neighbor_ids(id)
                .iter()
                .filter_map(|n| self.nodes.get(n).cloned())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Snapshot of every label in insertion order.
    pub fn all_vertices(&self) -> Vec<String> {
        self.nodes.values().cloned().collect()
    }

    /// Link two live handles in both directions. Self-links are ignored.
    pub(crate) fn link(&mut self, a: NodeId, b: NodeId) {
        if a == b || !self.nodes.contains_key(&a) || !self.nodes.contains_key(&b) {
            return;
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
    }

    fn unlink(&mut self, a: NodeId, b: NodeId) {
        if let Some(set) = self.adjacency.get_mut(&a) {
            set.remove(&b);
        }
        if let Some(set) = self.adjacency.get_mut(&b) {
            set.remove(&a);
        }
    }

    /// Look up a vertex handle by label.
    pub fn resolve(&self, label: &str) -> Option<NodeId> {
        self.label_index.get(label).copied()
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(&id).map(|s| s.as_str())
    }

    /// Neighbor handles in ascending order. Empty set for unknown handles.
    pub fn neighbor_ids(&self, id: NodeId) -> &BTreeSet<NodeId> {
        static EMPTY: BTreeSet<NodeId> = BTreeSet::new();
        self.adjacency.get(&id).unwrap_or(&EMPTY)
    }

    /// Live handles in insertion order, paired with their labels.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.nodes.iter().map(|(&id, label)| (id, label.as_str()))
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|s| s.len()).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let label_bytes: usize = self.nodes.values().map(|s| s.capacity()).sum();
        // label stored twice: node table and label index
        let nodes_mem = self.nodes.len() * (size_of::<NodeId>() + size_of::<String>() + 40)
            + self.label_index.len() * (size_of::<NodeId>() + size_of::<String>() + 16)
            + label_bytes * 2;
        let adj_entries: usize = self.adjacency.values().map(|s| s.len()).sum();
        let adj_mem = self.adjacency.len() * (size_of::<NodeId>() + size_of::<BTreeSet<NodeId>>())
            + adj_entries * (size_of::<NodeId>() + 8);

        nodes_mem + adj_mem
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_graph(labels: &[&str]) -> Graph {
        let mut g = Graph::new();
        for l in labels {
            assert!(g.add_vertex(l));
        }
        g
    }

    fn assert_symmetric(g: &Graph) {
        let all = g.all_vertices();
        for a in &all {
            assert!(!g.is_adjacent(a, a));
            for b in &all {
                assert_eq!(g.is_adjacent(a, b), g.is_adjacent(b, a), "{a}/{b}");
            }
        }
        assert_eq!(g.adjacency.len(), g.node_count());
    }

    #[test]
    fn test_add_vertex_rejects_duplicates() {
        let mut g = make_graph(&["CAT"]);
        assert!(!g.add_vertex("CAT"));
        assert_eq!(g.node_count(), 1);
        assert!(matches!(
            g.insert_vertex("CAT"),
            Err(LadderError::DuplicateVertex(ref l)) if l == "CAT"
        ));
    }

    #[test]
    fn test_add_vertex_rejects_empty() {
        let mut g = Graph::new();
        assert!(!g.add_vertex(""));
        assert!(!g.add_vertex("   "));
        assert!(matches!(g.insert_vertex(""), Err(LadderError::EmptyLabel)));
        assert!(g.is_empty());
    }

    #[test]
    fn test_new_vertex_has_no_edges() {
        let mut g = make_graph(&["CAT", "RAT"]);
        assert!(g.add_edge("CAT", "RAT"));
        assert!(g.add_vertex("HAT"));
        assert!(g.neighbors("HAT").is_empty());
        assert!(!g.is_adjacent("HAT", "CAT"));
    }

    #[test]
    fn test_add_edge_symmetric() {
        let mut g = make_graph(&["CAT", "RAT"]);
        assert!(g.add_edge("CAT", "RAT"));
        assert!(g.is_adjacent("CAT", "RAT"));
        assert!(g.is_adjacent("RAT", "CAT"));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_idempotent() {
        let mut g = make_graph(&["CAT", "RAT"]);
        assert!(g.add_edge("CAT", "RAT"));
        assert!(g.add_edge("RAT", "CAT"));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.neighbors("CAT"), vec!["RAT"]);
    }

    #[test]
    fn test_add_edge_failures() {
        let mut g = make_graph(&["CAT"]);
        assert!(!g.add_edge("CAT", "CAT"));
        assert!(!g.add_edge("CAT", "DOG"));
        assert!(!g.add_edge("DOG", "CAT"));
        assert_eq!(g.edge_count(), 0);
        assert!(matches!(
            g.edge_endpoints("CAT", "CAT"),
            Err(LadderError::SelfReference(_))
        ));
        assert!(matches!(
            g.edge_endpoints("CAT", "DOG"),
            Err(LadderError::InvalidVertex(ref l)) if l == "DOG"
        ));
    }

    #[test]
    fn test_remove_edge() {
        let mut g = make_graph(&["CAT", "RAT", "HAT"]);
        g.add_edge("CAT", "RAT");
        g.add_edge("CAT", "HAT");
        assert!(g.remove_edge("RAT", "CAT"));
        assert!(!g.is_adjacent("CAT", "RAT"));
        assert!(g.is_adjacent("CAT", "HAT"));
        assert!(!g.remove_edge("CAT", "CAT"));
        assert!(!g.remove_edge("CAT", "DOG"));
        // removing a non-edge between live vertices is a successful no-op
        assert!(g.remove_edge("RAT", "HAT"));
        assert_symmetric(&g);
    }

    #[test]
    fn test_remove_vertex_drops_incident_edges() {
        let mut g = make_graph(&["A", "B", "C", "D"]);
        g.add_edge("A", "B");
        g.add_edge("B", "C");
        g.add_edge("C", "D");
        g.add_edge("A", "D");

        assert!(g.remove_vertex("B"));
        assert_eq!(g.all_vertices(), vec!["A", "C", "D"]);
        assert_eq!(g.neighbors("A"), vec!["D"]);
        assert_eq!(g.neighbors("C"), vec!["D"]);
        assert_eq!(g.edge_count(), 2);
        assert_symmetric(&g);
    }

    #[test]
    fn test_remove_vertex_absent_is_noop() {
        let mut g = make_graph(&["A", "B"]);
        g.add_edge("A", "B");
        assert!(!g.remove_vertex("Z"));
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_remove_then_readd_gets_fresh_handle() {
        let mut g = make_graph(&["A", "B"]);
        let old = g.resolve("A").unwrap();
        g.add_edge("A", "B");
        g.remove_vertex("A");
        let new = g.insert_vertex("A").unwrap();
        assert_ne!(old, new);
        assert!(g.neighbors("A").is_empty());
        assert!(g.neighbors("B").is_empty());
        // re-added vertex moves to the end of insertion order
        assert_eq!(g.all_vertices(), vec!["B", "A"]);
    }

    #[test]
    fn test_neighbors_in_insertion_order() {
        let mut g = make_graph(&["HUB", "Z", "M", "A"]);
        g.add_edge("HUB", "A");
        g.add_edge("HUB", "Z");
        g.add_edge("HUB", "M");
        assert_eq!(g.neighbors("HUB"), vec!["Z", "M", "A"]);
        assert!(g.neighbors("NOPE").is_empty());
    }

    #[test]
    fn test_is_adjacent_absent_and_self() {
        let g = make_graph(&["A"]);
        assert!(!g.is_adjacent("A", "A"));
        assert!(!g.is_adjacent("A", "B"));
        assert!(!g.is_adjacent("B", "C"));
    }

    #[test]
    fn test_mutation_sequence_keeps_invariants() {
        let mut g = Graph::new();
        for i in 0..20 {
            g.add_vertex(&format!("W{i}"));
        }
        for i in 0..20 {
            g.add_edge(&format!("W{i}"), &format!("W{}", (i * 7 + 3) % 20));
        }
        for i in (0..20).step_by(3) {
            assert!(g.remove_vertex(&format!("W{i}")));
        }
        g.add_vertex("W0");
        g.add_edge("W0", "W1");
        assert_eq!(g.all_vertices().len(), g.node_count());
        assert_symmetric(&g);
    }

    #[test]
    fn test_counts() {
        let mut g = make_graph(&["A", "B", "C"]);
        g.add_edge("A", "B");
        g.add_edge("A", "C");
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors("A").len(), 2);
        assert_eq!(g.neighbors("B").len(), 1);
    }

    #[test]
    fn test_memory_usage_nonzero() {
        let mut g = make_graph(&["A", "B"]);
        g.add_edge("A", "B");
        assert!(g.memory_usage() > 0);
    }
}
