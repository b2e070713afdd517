/// Handle into a [`NodeArena`].
pub type NodeId = usize;

/// One step of the search tree: a state, the node it was reached from, and
/// the group (edge label) that connected them. The root has neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub state: String,
    pub parent: Option<NodeId>,
    pub action: Option<String>,
}

impl Node {
    pub fn root(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            parent: None,
            action: None,
        }
    }

    pub fn child(state: impl Into<String>, parent: NodeId, action: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            parent: Some(parent),
            action: Some(action.into()),
        }
    }
}

/// Expanded nodes of one search, addressed by integer handle so parent links
/// never borrow from each other.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks parent links from `id` up to the root and returns the
    /// `(action, state)` pairs in root-to-`id` order. The root itself
    /// contributes nothing since it has no action.
    pub fn trail(&self, id: NodeId) -> Vec<(String, String)> {
        let mut steps = Vec::new();
        let mut cursor = self.nodes.get(id);
        while let Some(node) = cursor {
            match (&node.action, node.parent) {
                (Some(action), Some(parent)) => {
                    steps.push((action.clone(), node.state.clone()));
                    cursor = self.nodes.get(parent);
                }
                _ => break,
            }
        }
        steps.reverse();
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_skips_root() {
        let mut arena = NodeArena::new();
        let root = arena.push(Node::root("A"));
        assert!(arena.trail(root).is_empty());
        assert_eq!(arena.get(root).unwrap().parent, None);
    }

    #[test]
    fn test_trail_reads_root_to_leaf() {
        let mut arena = NodeArena::new();
        let root = arena.push(Node::root("A"));
        let b = arena.push(Node::child("B", root, "G1"));
        let c = arena.push(Node::child("C", b, "G2"));

        assert_eq!(arena.len(), 3);
        assert_eq!(
            arena.trail(c),
            vec![
                ("G1".to_string(), "B".to_string()),
                ("G2".to_string(), "C".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_handle_gives_empty_trail() {
        let arena = NodeArena::new();
        assert!(arena.is_empty());
        assert!(arena.trail(7).is_empty());
    }
}
