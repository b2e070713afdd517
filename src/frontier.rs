use std::collections::{HashMap, VecDeque};

use crate::error::FrontierError;
use crate::node::Node;

/// Nodes discovered but not yet expanded. Implementations differ only in
/// which node `remove` hands back.
pub trait Frontier: Default {
    /// Inserts without checking for duplicates; callers guard with
    /// [`Frontier::contains_state`].
    fn add(&mut self, node: Node);

    fn remove(&mut self) -> Result<Node, FrontierError>;

    fn contains_state(&self, state: &str) -> bool;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

// Count of pending nodes per state, so `contains_state` does not rescan the
// whole frontier on large casts. Counts (not a set) because duplicates may
// coexist transiently.
#[derive(Debug, Default)]
struct PendingStates(HashMap<String, usize>);

impl PendingStates {
    fn insert(&mut self, state: &str) {
        *self.0.entry(state.to_string()).or_default() += 1;
    }

    fn release(&mut self, state: &str) {
        if let Some(count) = self.0.get_mut(state) {
            *count -= 1;
            if *count == 0 {
                self.0.remove(state);
            }
        }
    }

    fn contains(&self, state: &str) -> bool {
        self.0.contains_key(state)
    }
}

/// Last in, first out: depth-first exploration.
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<Node>,
    pending: PendingStates,
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: Node) {
        self.pending.insert(&node.state);
        self.nodes.push(node);
    }

    fn remove(&mut self) -> Result<Node, FrontierError> {
        let node = self.nodes.pop().ok_or(FrontierError::Empty)?;
        self.pending.release(&node.state);
        Ok(node)
    }

    fn contains_state(&self, state: &str) -> bool {
        self.pending.contains(state)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// First in, first out: breadth-first exploration, which is what makes the
/// first path found a shortest one.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<Node>,
    pending: PendingStates,
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: Node) {
        self.pending.insert(&node.state);
        self.nodes.push_back(node);
    }

    fn remove(&mut self) -> Result<Node, FrontierError> {
        let node = self.nodes.pop_front().ok_or(FrontierError::Empty)?;
        self.pending.release(&node.state);
        Ok(node)
    }

    fn contains_state(&self, state: &str) -> bool {
        self.pending.contains(state)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill<F: Frontier>(states: &[&str]) -> F {
        let mut frontier = F::default();
        for state in states {
            frontier.add(Node::root(*state));
        }
        frontier
    }

    #[test]
    fn test_stack_removes_most_recent() {
        let mut frontier: StackFrontier = fill(&["A", "B", "C"]);
        assert_eq!(frontier.remove().unwrap().state, "C");
        assert_eq!(frontier.remove().unwrap().state, "B");
        frontier.add(Node::root("D"));
        assert_eq!(frontier.remove().unwrap().state, "D");
        assert_eq!(frontier.remove().unwrap().state, "A");
    }

    #[test]
    fn test_queue_removes_earliest() {
        let mut frontier: QueueFrontier = fill(&["A", "B", "C"]);
        assert_eq!(frontier.remove().unwrap().state, "A");
        frontier.add(Node::root("D"));
        assert_eq!(frontier.remove().unwrap().state, "B");
        assert_eq!(frontier.remove().unwrap().state, "C");
        assert_eq!(frontier.remove().unwrap().state, "D");
    }

    #[test]
    fn test_remove_from_empty_fails() {
        let mut stack = StackFrontier::default();
        let mut queue = QueueFrontier::default();
        assert!(stack.is_empty());
        assert!(queue.is_empty());
        assert_eq!(stack.remove(), Err(FrontierError::Empty));
        assert_eq!(queue.remove(), Err(FrontierError::Empty));
    }

    #[test]
    fn test_contains_state_tracks_pending_nodes() {
        let mut frontier: QueueFrontier = fill(&["A", "B"]);
        assert!(frontier.contains_state("A"));
        assert!(!frontier.contains_state("Z"));

        frontier.remove().unwrap();
        assert!(!frontier.contains_state("A"));
        assert!(frontier.contains_state("B"));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_duplicate_states_survive_one_removal() {
        // duplicates are the caller's problem, but they must not corrupt lookups
        let mut frontier: StackFrontier = fill(&["A", "A"]);
        frontier.remove().unwrap();
        assert!(frontier.contains_state("A"));
        frontier.remove().unwrap();
        assert!(!frontier.contains_state("A"));
        assert!(frontier.is_empty());
    }
}
