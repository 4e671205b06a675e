use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::{LadderError, Result};
use crate::graph::{Graph, NodeId};
use crate::index::PathIndex;
use crate::rule::is_adjacent_words;
use crate::words::{load_words, normalize, read_words};

/// Summary of engine state.
#[derive(Debug, Clone)]
pub struct EngineStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub graph_memory_bytes: usize,
    pub precomputed: bool,
    /// Ordered pairs with a stored path, self-pairs included. None before precompute.
    pub reachable_pairs: Option<usize>,
    pub index_memory_bytes: Option<usize>,
    pub precompute_ms: Option<f64>,
}

/// Word graph plus its all-pairs shortest path index.
///
/// Lifecycle: `populate` (or `add_word`) builds the graph, `precompute`
/// sweeps it, then path and distance queries read the index. Any graph
/// change drops the index until the next `precompute`.
pub struct PathEngine {
    graph: Graph,
    index: Option<PathIndex>,
    precompute_ms: Option<f64>,
    config: EngineConfig,
}

impl PathEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            graph: Graph::new(),
            index: None,
            precompute_ms: None,
            config,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn is_precomputed(&self) -> bool {
        self.index.is_some()
    }

    /// Add every word from `words` and connect it to its one-edit neighbors.
    ///
    /// Words are normalized first; blanks and repeats are skipped. Returns the
    /// number of vertices added.
    pub fn populate<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let mut added = 0usize;
        let mut skipped = 0usize;

        for raw in words {
            match self.add_word(raw.as_ref()) {
                Ok(_) => added += 1,
                Err(e) => {
                    debug!(word = raw.as_ref(), error = %e, "skipping word");
                    skipped += 1;
                }
            }
        }

        info!(
            added,
            skipped,
            vertices = self.graph.node_count(),
            edges = self.graph.edge_count(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "populated word graph"
        );
        added
    }

    /// Populate from a line-oriented reader. Nothing is added if reading fails.
    pub fn populate_from_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let words = read_words(reader).collect::<std::io::Result<Vec<_>>>()?;
        Ok(self.populate(words))
    }

    /// Populate from a word file, one word per line.
    pub fn populate_from_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let words = load_words(path)?;
        Ok(self.populate(words))
    }

    /// Insert a single word and link it to every existing one-edit neighbor.
    pub fn add_word(&mut self, word: &str) -> Result<NodeId> {
        let word = normalize(word).ok_or(LadderError::EmptyLabel)?;
        let id = self.graph.insert_vertex(&word)?;

        // Each unordered pair is evaluated once: when its later word arrives.
        let neighbors: Vec<NodeId> = self
            .graph
            .nodes()
            .filter(|&(other, label)| other != id && is_adjacent_words(&word, label))
            .map(|(other, _)| other)
            .collect();
        for n in neighbors {
            self.graph.link(id, n);
        }

        self.invalidate();
        Ok(id)
    }

    /// Remove a word and its edges.
    pub fn remove_word(&mut self, word: &str) -> Result<()> {
        let word = normalize(word).ok_or(LadderError::EmptyLabel)?;
        if !self.graph.remove_vertex(&word) {
            return Err(LadderError::InvalidVertex(word));
        }
        self.invalidate();
        Ok(())
    }

    fn invalidate(&mut self) {
        if self.index.take().is_some() {
            debug!("graph changed, path index dropped");
        }
        self.precompute_ms = None;
    }

    /// Sweep from every vertex and store the resulting path index.
    pub fn precompute(&mut self) -> Result<()> {
        if self.graph.is_empty() {
            warn!("precompute requested on an empty vocabulary");
            return Err(LadderError::EmptyVocabulary);
        }

        let used = self.graph.memory_usage();
        let max_mb = self.config.max_memory_mb;
        if used > max_mb.saturating_mul(1024 * 1024) {
            return Err(LadderError::MemoryLimit {
                used_mb: used.div_ceil(1024 * 1024),
                max_mb,
            });
        }

        let start = Instant::now();
        let parallel = self.config.use_parallel(self.graph.node_count());
        let index = PathIndex::build(&self.graph, parallel);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        info!(
            roots = index.root_count(),
            reachable_pairs = index.reachable_pairs(),
            parallel,
            elapsed_ms,
            "precomputed shortest paths"
        );

        self.index = Some(index);
        self.precompute_ms = Some(elapsed_ms);
        Ok(())
    }

    fn index(&self) -> Result<&PathIndex> {
        self.index.as_ref().ok_or(LadderError::NotPrecomputed)
    }

    /// Normalize a query word and resolve it to its handle.
    fn resolve(&self, word: &str) -> Result<(NodeId, String)> {
        let label = normalize(word).ok_or_else(|| LadderError::InvalidVertex(word.to_string()))?;
        match self.graph.resolve(&label) {
            Some(id) => Ok((id, label)),
            None => Err(LadderError::InvalidVertex(label)),
        }
    }

    /// Words on one shortest ladder from `a` to `b`, both included.
    pub fn shortest_path(&self, a: &str, b: &str) -> Result<Vec<String>> {
        let index = self.index()?;
        let (from, from_label) = self.resolve(a)?;
        let (to, to_label) = self.resolve(b)?;
        let path = index.path(from, to).ok_or(LadderError::Unreachable {
            from: from_label,
            to: to_label,
        })?;
        Ok(path
            .into_iter()
            .filter_map(|id| self.graph.label(id).map(str::to_string))
            .collect())
    }

    /// Number of single edits on the shortest ladder from `a` to `b`.
    pub fn shortest_distance(&self, a: &str, b: &str) -> Result<usize> {
        let index = self.index()?;
        let (from, from_label) = self.resolve(a)?;
        let (to, to_label) = self.resolve(b)?;
        index
            .distance(from, to)
            .map(|d| d as usize)
            .ok_or(LadderError::Unreachable {
                from: from_label,
                to: to_label,
            })
    }

    /// Words reachable from `word` within `max_depth` edits, nearest first.
    pub fn neighborhood(&self, word: &str, max_depth: u32) -> Result<Vec<(String, u32)>> {
        let index = self.index()?;
        let (root, _) = self.resolve(word)?;
        let table = index.table(root).ok_or(LadderError::NotPrecomputed)?;
        Ok(table
            .within(max_depth)
            .into_iter()
            .filter_map(|(id, d)| self.graph.label(id).map(|l| (l.to_string(), d)))
            .collect())
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            vertex_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
            graph_memory_bytes: self.graph.memory_usage(),
            precomputed: self.is_precomputed(),
            reachable_pairs: self.index.as_ref().map(|i| i.reachable_pairs()),
            index_memory_bytes: self.index.as_ref().map(|i| i.memory_usage()),
            precompute_ms: self.precompute_ms,
        }
    }
}

impl Default for PathEngine {
    fn default() -> Self {
        Self::new()
    }
}
