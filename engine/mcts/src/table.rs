//! State table with arena allocation.
//!
//! Nodes are stored in a contiguous Vec and referenced by NodeId indices;
//! a hash map resolves states to their node. Pruning compacts the arena,
//! so NodeIds are only stable between prunes.

use std::collections::HashMap;
use std::hash::Hash;

use crate::node::{NodeId, StateNode};

/// State-keyed table of UCT statistics.
#[derive(Debug, Clone)]
pub struct StateTable<S> {
    /// Arena storing all nodes
    nodes: Vec<StateNode>,

    /// State to arena index
    index: HashMap<S, NodeId>,
}

impl<S> Default for StateTable<S> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<S: Hash + Eq + Clone> StateTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the node for a state.
    #[inline]
    pub fn find(&self, state: &S) -> Option<NodeId> {
        self.index.get(state).copied()
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &StateNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut StateNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Node for `state`, allocating a fresh one if the state is new.
    pub fn get_or_insert(&mut self, state: &S, num_actions: usize, rollout: u64) -> NodeId {
        if let Some(id) = self.find(state) {
            return id;
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(StateNode::new(num_actions, rollout));
        self.index.insert(state.clone(), id);
        id
    }

    /// Number of states with statistics.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }

    /// Keep only nodes for which `keep` returns true, compacting the arena.
    /// Returns the number of nodes removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&StateNode) -> bool) -> usize {
        let before = self.nodes.len();
        let old_nodes = std::mem::take(&mut self.nodes);
        let mut remap: Vec<Option<NodeId>> = Vec::with_capacity(old_nodes.len());

        for node in old_nodes {
            if keep(&node) {
                remap.push(Some(NodeId(self.nodes.len() as u32)));
                self.nodes.push(node);
            } else {
                remap.push(None);
            }
        }

        self.index.retain(|_, id| match remap[id.0 as usize] {
            Some(new_id) => {
                *id = new_id;
                true
            }
            None => false,
        });

        before - self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table() {
        let table: StateTable<u32> = StateTable::new();
        assert!(table.is_empty());
        assert_eq!(table.find(&7), None);
    }

    #[test]
    fn test_get_or_insert_is_idempotent() {
        let mut table = StateTable::new();

        let a = table.get_or_insert(&"a", 2, 0);
        let b = table.get_or_insert(&"b", 2, 0);
        let a_again = table.get_or_insert(&"a", 2, 5);

        assert_eq!(a, NodeId(0));
        assert_eq!(b, NodeId(1));
        assert_eq!(a, a_again);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(a).last_update, 0);
        assert_eq!(table.get(a).actions.len(), 2);
    }

    #[test]
    fn test_retain_compacts_and_reindexes() {
        let mut table = StateTable::new();
        for s in 0..5u32 {
            let id = table.get_or_insert(&s, 1, 0);
            table.get_mut(id).last_update = s as u64;
        }

        let removed = table.retain(|node| node.last_update % 2 == 0);

        assert_eq!(removed, 2);
        assert_eq!(table.len(), 3);
        assert_eq!(table.find(&1), None);
        assert_eq!(table.find(&3), None);
        for s in [0u32, 2, 4] {
            let id = table.find(&s).unwrap();
            assert_eq!(table.get(id).last_update, s as u64);
        }
    }

    #[test]
    fn test_clear() {
        let mut table = StateTable::new();
        table.get_or_insert(&1u8, 3, 0);
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.find(&1), None);
    }
}
