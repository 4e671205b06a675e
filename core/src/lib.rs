//! word-ladder-core: In-memory word ladder engine.
//!
//! Builds an undirected graph over a vocabulary where two words are adjacent
//! when a single character substitution, insertion, or deletion turns one into
//! the other, then precomputes one shortest path between every reachable pair.
//!
//! Used by the `word-ladder` CLI and the benchmark binary, but usable
//! independently.

mod config;
mod engine;
mod error;
mod graph;
mod index;
mod rule;
mod traversal;
pub mod words;

pub use config::EngineConfig;
pub use engine::{EngineStats, PathEngine};
pub use error::{LadderError, Result};
pub use graph::{Graph, NodeId};
pub use index::PathIndex;
pub use rule::{is_adjacent_words, one_edit_apart};
pub use traversal::{shortest_path, sweep, SweepTable};
