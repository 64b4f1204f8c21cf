use crate::error::{ConstructionError, Result};
use std::fmt;

/// 1-based node identity, assigned in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(id: usize) -> Option<Self> {
        if id == 0 {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 - 1
    }

    fn from_index(index: usize) -> Self {
        Self(index + 1)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: String,
    pub(crate) score: f64,
    out_edges: Vec<NodeId>,
    in_edges: Vec<NodeId>,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn out_degree(&self) -> usize {
        self.out_edges.len()
    }

    /// Targets of this node's out-edges, one entry per edge.
    pub fn out_neighbors(&self) -> &[NodeId] {
        &self.out_edges
    }

    /// Sources of this node's in-edges, one entry per edge.
    pub fn in_neighbors(&self) -> &[NodeId] {
        &self.in_edges
    }

    pub fn is_dangling(&self) -> bool {
        self.out_edges.is_empty()
    }
}

/// Arena of nodes in construction order. Edges are kept as id lists on both
/// endpoints, so topology never holds references between nodes.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_capacity),
            edge_count: 0,
        }
    }

    /// Appends a node named after its id, with the initial score of 1.0.
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.push_node(id, id.to_string())
    }

    pub fn add_named_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.push_node(id, name.into())
    }

    fn push_node(&mut self, id: NodeId, name: String) -> NodeId {
        self.nodes.push(Node {
            id,
            name,
            score: 1.0,
            out_edges: vec![],
            in_edges: vec![],
        });
        id
    }

    /// Adds the directed edge `source -> target`. Parallel edges and
    /// self-loops are kept as given.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> Result<()> {
        for id in [source, target] {
            if !self.contains(id) {
                return Err(ConstructionError::OutOfRange {
                    id: id.get(),
                    node_count: self.nodes.len(),
                }
                .into());
            }
        }
        self.link(source, target);
        Ok(())
    }

    /// `add_edge` for endpoints already known to exist.
    pub(crate) fn link(&mut self, source: NodeId, target: NodeId) {
        self.nodes[source.index()].out_edges.push(target);
        self.nodes[target.index()].in_edges.push(source);
        self.edge_count += 1;
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn out_degree(&self, id: NodeId) -> Option<usize> {
        self.node(id).map(Node::out_degree)
    }

    pub fn in_neighbors(&self, id: NodeId) -> Option<&[NodeId]> {
        self.node(id).map(Node::in_neighbors)
    }

    pub fn out_neighbors(&self, id: NodeId) -> Option<&[NodeId]> {
        self.node(id).map(Node::out_neighbors)
    }

    pub fn dangling_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().filter(|n| n.is_dangling()).map(|n| n.id)
    }

    /// Current scores in construction order.
    pub fn scores(&self) -> Vec<f64> {
        self.nodes.iter().map(|n| n.score).collect()
    }

    /// Puts every score back to its initial value of 1.0.
    pub fn reset_scores(&mut self) {
        for node in self.nodes.iter_mut() {
            node.score = 1.0;
        }
    }
}

/// Builds a graph of `node_count` nodes named `"1"..="node_count"` from
/// 1-indexed `(source, target)` pairs.
pub fn build_graph<I>(node_count: i64, edges: I) -> Result<Graph>
where
    I: IntoIterator<Item = (i64, i64)>,
{
    let n = usize::try_from(node_count)
        .map_err(|_| ConstructionError::NegativeNodeCount(node_count))?;
    let mut graph = Graph::new();
    graph
        .nodes
        .try_reserve(n)
        .map_err(|_| ConstructionError::TooManyNodes(node_count))?;
    for _ in 0..n {
        graph.add_node();
    }
    let resolve = |edge: usize, id: i64| -> Result<NodeId> {
        usize::try_from(id)
            .ok()
            .and_then(NodeId::new)
            .filter(|id| id.get() <= n)
            .ok_or_else(|| {
                ConstructionError::EdgeOutOfRange {
                    edge,
                    id,
                    node_count: n,
                }
                .into()
            })
    };
    for (edge, (source, target)) in edges.into_iter().enumerate() {
        let source = resolve(edge, source)?;
        let target = resolve(edge, target)?;
        graph.add_edge(source, target)?;
    }
    log::debug!(
        "built graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn id(x: usize) -> NodeId {
        NodeId::new(x).unwrap()
    }

    #[test]
    fn sequential_ids() {
        let mut g = Graph::new();
        let ids: Vec<_> = (0..3).map(|_| g.add_node()).collect();
        assert_eq!(ids, vec![id(1), id(2), id(3)]);
        let names: Vec<_> = g.nodes().iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["1", "2", "3"]);
        assert!(g.nodes().iter().all(|n| n.score() == 1.0));
    }

    #[test]
    fn zero_is_not_an_id() {
        assert_eq!(NodeId::new(0), None);
    }

    #[test]
    fn adjacency_both_ways() {
        let g = build_graph(3, [(1, 2), (1, 3), (3, 1), (1, 2)]).unwrap();
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.out_neighbors(id(1)).unwrap(), &[id(2), id(3), id(2)]);
        assert_eq!(g.in_neighbors(id(2)).unwrap(), &[id(1), id(1)]);
        assert_eq!(g.in_neighbors(id(1)).unwrap(), &[id(3)]);
        assert_eq!(g.out_degree(id(2)), Some(0));
        for u in g.nodes() {
            for v in u.out_neighbors() {
                let back = g.in_neighbors(*v).unwrap();
                assert!(back.contains(&u.id()));
            }
        }
    }

    #[test]
    fn self_loop() {
        let g = build_graph(1, [(1, 1)]).unwrap();
        let n = g.node(id(1)).unwrap();
        assert_eq!(n.out_neighbors(), &[id(1)]);
        assert_eq!(n.in_neighbors(), &[id(1)]);
        assert!(!n.is_dangling());
    }

    #[test]
    fn dangling() {
        let g = build_graph(3, [(1, 2)]).unwrap();
        let dangling: Vec<_> = g.dangling_nodes().collect();
        assert_eq!(dangling, vec![id(2), id(3)]);
    }

    #[test]
    fn negative_node_count() {
        let err = build_graph(-1, std::iter::empty()).unwrap_err();
        assert_eq!(
            err,
            Error::Construction(ConstructionError::NegativeNodeCount(-1))
        );
    }

    #[test]
    fn edge_out_of_range() {
        let err = build_graph(2, [(1, 2), (2, 3)]).unwrap_err();
        assert_eq!(
            err,
            Error::Construction(ConstructionError::EdgeOutOfRange {
                edge: 1,
                id: 3,
                node_count: 2
            })
        );
        let err = build_graph(2, [(0, 1)]).unwrap_err();
        assert!(matches!(
            err,
            Error::Construction(ConstructionError::EdgeOutOfRange { id: 0, .. })
        ));
        let err = build_graph(2, [(1, -4)]).unwrap_err();
        assert!(matches!(
            err,
            Error::Construction(ConstructionError::EdgeOutOfRange { id: -4, .. })
        ));
    }

    #[test]
    fn add_edge_validates() {
        let mut g = Graph::new();
        let a = g.add_node();
        let err = g.add_edge(a, id(2)).unwrap_err();
        assert_eq!(
            err,
            Error::Construction(ConstructionError::OutOfRange {
                id: 2,
                node_count: 1
            })
        );
        assert_eq!(g.edge_count(), 0);
        assert!(g.node(a).unwrap().out_neighbors().is_empty());
    }

    #[test]
    fn unsatisfiable_node_count() {
        let err = build_graph(i64::MAX, std::iter::empty()).unwrap_err();
        assert_eq!(
            err,
            Error::Construction(ConstructionError::TooManyNodes(i64::MAX))
        );
    }

    #[test]
    fn out_of_range_id_is_reported_as_is() {
        let mut g = Graph::new();
        let a = g.add_node();
        let far = id(usize::MAX);
        let err = g.add_edge(far, a).unwrap_err();
        assert_eq!(
            err,
            Error::Construction(ConstructionError::OutOfRange {
                id: usize::MAX,
                node_count: 1
            })
        );
    }

    #[test]
    fn empty() {
        let g = build_graph(0, std::iter::empty()).unwrap();
        assert!(g.is_empty());
        assert!(g.scores().is_empty());
    }

    #[test]
    fn reset() {
        let mut g = build_graph(2, [(1, 2)]).unwrap();
        g.nodes[0].score = 0.25;
        g.reset_scores();
        assert_eq!(g.scores(), vec![1.0, 1.0]);
    }
}
