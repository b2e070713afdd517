//! Frontier-driven path search over a [`Neighbors`] graph.
//!
//! [`find_shortest_path`] is breadth-first: every state at distance `d` is
//! expanded before any state at distance `d + 1`, so the first time the target
//! shows up as a neighbor it was reached along a minimum-length path.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::frontier::{Frontier, QueueFrontier};
use crate::neighbors::{Edge, Neighbors};
use crate::node::{Node, NodeArena};

/// `(group, entity)` steps from the node after the source up to and
/// including the target. Its length is the degrees of separation.
pub type Path = Vec<Edge>;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Emit a progress event every this many expansions. Zero disables it.
    pub progress_every: usize,
    /// Stop with no path after this many expansions.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            progress_every: 100,
            max_expansions: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub path: Option<Path>,
    /// States removed from the frontier and expanded.
    pub explored: usize,
    /// True when `max_expansions` cut the search short.
    pub exhausted_budget: bool,
}

impl SearchReport {
    pub fn degrees(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}

/// Shortest path from `source` to `target`, or `None` when they are not
/// connected. Unknown identifiers simply have no neighbors.
pub fn find_shortest_path<N>(graph: &N, source: &str, target: &str) -> Option<Path>
where
    N: Neighbors + ?Sized,
{
    search_with::<QueueFrontier, N>(graph, source, target, &SearchConfig::default()).path
}

/// Runs the search with frontier type `F`. Only a FIFO frontier guarantees a
/// shortest path; a LIFO one returns whichever path it reaches first.
///
/// `source == target` is answered with an empty path and no expansion.
pub fn search_with<F, N>(graph: &N, source: &str, target: &str, config: &SearchConfig) -> SearchReport
where
    F: Frontier,
    N: Neighbors + ?Sized,
{
    if source == target {
        return SearchReport {
            path: Some(Vec::new()),
            explored: 0,
            exhausted_budget: false,
        };
    }

    let mut frontier = F::default();
    frontier.add(Node::root(source));
    let mut arena = NodeArena::new();
    let mut explored: HashSet<String> = HashSet::new();

    while !frontier.is_empty() {
        if let Some(limit) = config.max_expansions {
            if explored.len() >= limit {
                warn!(limit, pending = frontier.len(), "expansion budget exhausted");
                return SearchReport {
                    path: None,
                    explored: explored.len(),
                    exhausted_budget: true,
                };
            }
        }

        let Ok(node) = frontier.remove() else { break };
        if !explored.insert(node.state.clone()) {
            continue;
        }
        if config.progress_every > 0 && explored.len() % config.progress_every == 0 {
            debug!(explored = explored.len(), pending = frontier.len(), "search progress");
        }

        let state = node.state.clone();
        let id = arena.push(node);

        for (group, neighbor) in graph.neighbors(&state) {
            if neighbor == target {
                let mut path = arena.trail(id);
                path.push((group, neighbor));
                info!(explored = explored.len(), degrees = path.len(), "path found");
                return SearchReport {
                    path: Some(path),
                    explored: explored.len(),
                    exhausted_budget: false,
                };
            }
            if !explored.contains(&neighbor) && !frontier.contains_state(&neighbor) {
                frontier.add(Node::child(neighbor, id, group));
            }
        }
    }

    info!(explored = explored.len(), "frontier empty, no connection");
    SearchReport {
        path: None,
        explored: explored.len(),
        exhausted_budget: false,
    }
}
