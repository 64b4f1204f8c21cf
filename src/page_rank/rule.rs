use super::DanglingPolicy;
use crate::graph::{Graph, Node, NodeId};

/// The per-node PageRank update for one iteration:
///
/// ```text
/// score(v) = (1 - d) / n + d * Σ_{p -> v, out(p) > 0} score(p) / out(p)
/// ```
///
/// plus, under [`DanglingPolicy::Redistribute`], `d * Σ_{out(u) = 0} score(u) / n`.
#[derive(Debug, Clone)]
pub struct UpdateRule {
    damping: f64,
    teleport: f64,
    dangling_share: f64,
}

impl UpdateRule {
    /// Fixes the constant terms of an iteration from the scores `graph`
    /// holds when it starts.
    pub fn new(graph: &Graph, damping: f64, dangling: DanglingPolicy) -> Self {
        let n = graph.node_count() as f64;
        let dangling_share = match dangling {
            DanglingPolicy::Drop => 0.0,
            DanglingPolicy::Redistribute => {
                let mass: f64 = graph
                    .nodes()
                    .iter()
                    .filter(|u| u.is_dangling())
                    .map(|u| u.score())
                    .sum();
                damping * mass / n
            }
        };
        Self {
            damping,
            teleport: (1.0 - damping) / n,
            dangling_share,
        }
    }

    /// Relaxed score of `node`, reading each parent's score through `score_of`.
    pub fn relax<F>(&self, graph: &Graph, node: &Node, score_of: F) -> f64
    where
        F: Fn(NodeId) -> f64,
    {
        let mut contribution = 0.0;
        for p in node.in_neighbors() {
            let out_degree = graph.nodes[p.index()].out_degree();
            // dangling parents contribute nothing
            if out_degree > 0 {
                contribution += score_of(*p) / out_degree as f64;
            }
        }
        self.teleport + self.dangling_share + self.damping * contribution
    }
}

/// Relaxed score of `node` in a graph of `n` nodes, reading the scores its
/// parents currently hold. Dangling mass is dropped.
pub fn update_score(graph: &Graph, node: &Node, damping: f64, n: usize) -> f64 {
    let rule = UpdateRule {
        damping,
        teleport: (1.0 - damping) / n as f64,
        dangling_share: 0.0,
    };
    rule.relax(graph, node, |p| graph.nodes[p.index()].score)
}
