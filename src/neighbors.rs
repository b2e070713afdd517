use std::collections::{HashMap, HashSet};

/// One hop in the graph: the group shared with a neighbor, and the neighbor.
pub type Edge = (String, String);

/// Lazily computed adjacency over graph states.
pub trait Neighbors {
    /// Every `(group, member)` pair reachable from `state` in one hop. States
    /// with no memberships are isolated and yield an empty set.
    fn neighbors(&self, state: &str) -> HashSet<Edge>;
}

/// The two membership tables: entity -> groups it belongs to, and
/// group -> entities in it. Read-only once built.
#[derive(Debug, Default, Clone)]
pub struct Memberships {
    entity_groups: HashMap<String, HashSet<String>>,
    group_members: HashMap<String, HashSet<String>>,
}

impl Memberships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity with no memberships yet.
    pub fn add_entity(&mut self, entity: &str) {
        self.entity_groups.entry(entity.to_string()).or_default();
    }

    /// Registers a group with no members yet.
    pub fn add_group(&mut self, group: &str) {
        self.group_members.entry(group.to_string()).or_default();
    }

    /// Records that `entity` belongs to `group`, on both sides.
    pub fn link(&mut self, entity: &str, group: &str) {
        self.entity_groups
            .entry(entity.to_string())
            .or_default()
            .insert(group.to_string());
        self.group_members
            .entry(group.to_string())
            .or_default()
            .insert(entity.to_string());
    }

    pub fn groups_of(&self, entity: &str) -> Option<&HashSet<String>> {
        self.entity_groups.get(entity)
    }

    pub fn members_of(&self, group: &str) -> Option<&HashSet<String>> {
        self.group_members.get(group)
    }

    pub fn contains_entity(&self, entity: &str) -> bool {
        self.entity_groups.contains_key(entity)
    }

    pub fn entity_count(&self) -> usize {
        self.entity_groups.len()
    }

    pub fn group_count(&self) -> usize {
        self.group_members.len()
    }
}

impl Neighbors for Memberships {
    fn neighbors(&self, state: &str) -> HashSet<Edge> {
        let mut edges = HashSet::new();
        let Some(groups) = self.entity_groups.get(state) else {
            return edges;
        };
        for group in groups {
            if let Some(members) = self.group_members.get(group) {
                for member in members {
                    edges.insert((group.clone(), member.clone()));
                }
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(group: &str, member: &str) -> Edge {
        (group.to_string(), member.to_string())
    }

    #[test]
    fn test_neighbors_cover_every_group_member() {
        let mut tables = Memberships::new();
        tables.link("A", "G1");
        tables.link("B", "G1");
        tables.link("B", "G2");
        tables.link("C", "G2");

        let from_b = tables.neighbors("B");
        let expected: HashSet<Edge> = [
            edge("G1", "A"),
            edge("G1", "B"),
            edge("G2", "B"),
            edge("G2", "C"),
        ]
        .into_iter()
        .collect();
        assert_eq!(from_b, expected); // includes B itself through both groups
    }

    #[test]
    fn test_isolated_and_unknown_entities_have_no_neighbors() {
        let mut tables = Memberships::new();
        tables.add_entity("D");
        tables.add_group("G9");

        assert!(tables.neighbors("D").is_empty());
        assert!(tables.neighbors("nobody").is_empty());
        assert!(tables.contains_entity("D"));
        assert!(!tables.contains_entity("nobody"));
        assert_eq!(tables.members_of("G9").map(HashSet::len), Some(0));
    }

    #[test]
    fn test_link_is_recorded_on_both_sides() {
        let mut tables = Memberships::new();
        tables.link("A", "G1");
        tables.link("A", "G1");

        assert_eq!(tables.entity_count(), 1);
        assert_eq!(tables.group_count(), 1);
        assert!(tables.groups_of("A").unwrap().contains("G1"));
        assert!(tables.members_of("G1").unwrap().contains("A"));
    }
}
