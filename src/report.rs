use crate::graph::Graph;
use std::fmt;

/// `(name, score)` of every node, in construction order.
pub fn final_scores(graph: &Graph) -> Vec<(String, f64)> {
    graph
        .nodes()
        .iter()
        .map(|n| (n.name().to_string(), n.score()))
        .collect()
}

/// Renders one `Node <name>: <score>` line per node, scores to 3 decimals.
pub fn display(graph: &Graph) -> ScoreTable<'_> {
    ScoreTable { graph }
}

pub struct ScoreTable<'a> {
    graph: &'a Graph,
}

impl fmt::Display for ScoreTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.graph.nodes() {
            writeln!(f, "Node {}: {:.3}", n.name(), n.score())?;
        }
        Ok(())
    }
}
