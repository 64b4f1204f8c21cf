use crate::graph::{Graph, NodeId};
use std::collections::HashMap;

/// Builds a [`Graph`] from labelled edges. Labels become node names and ids
/// follow the order in which labels are first seen.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    ids: HashMap<String, NodeId, ahash::RandomState>,
    graph: Graph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the node labelled `label`, created if not seen before.
    pub fn node(&mut self, label: &str) -> NodeId {
        if let Some(id) = self.ids.get(label) {
            return *id;
        }
        let id = self.graph.add_named_node(label);
        self.ids.insert(label.to_string(), id);
        id
    }

    pub fn edge(&mut self, from: &str, to: &str) -> &mut Self {
        let u = self.node(from);
        let v = self.node(to);
        self.graph.link(u, v);
        self
    }

    pub fn get(&self, label: &str) -> Option<NodeId> {
        self.ids.get(label).copied()
    }

    pub fn build(self) -> Graph {
        self.graph
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for GraphBuilder {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut builder = Self::new();
        for (from, to) in iter {
            builder.edge(from, to);
        }
        builder
    }
}
