use super::*;
use crate::graph::Graph;

/// Double-buffered sweep: all relaxed scores are computed from the scores
/// at the start of the pass, then written back together.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jacobi;

impl Sweep for Jacobi {
    fn sweep(&self, graph: &mut Graph, rule: &UpdateRule) {
        let relaxed: Vec<f64> = graph
            .nodes()
            .iter()
            .map(|node| rule.relax(graph, node, |p| graph.nodes[p.index()].score))
            .collect();
        for (node, score) in graph.nodes.iter_mut().zip(relaxed) {
            node.score = score;
        }
    }
}

/// In-place sweep in construction order. A node visited later in the pass
/// sees the already relaxed scores of parents visited before it.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussSeidel;

impl Sweep for GaussSeidel {
    fn sweep(&self, graph: &mut Graph, rule: &UpdateRule) {
        for i in 0..graph.nodes.len() {
            let score = rule.relax(graph, &graph.nodes[i], |p| graph.nodes[p.index()].score);
            graph.nodes[i].score = score;
        }
    }
}

impl UpdateOrder {
    pub(crate) fn sweep(self, graph: &mut Graph, rule: &UpdateRule) {
        match self {
            UpdateOrder::Jacobi => Jacobi.sweep(graph, rule),
            UpdateOrder::GaussSeidel => GaussSeidel.sweep(graph, rule),
        }
    }
}
