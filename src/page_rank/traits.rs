use super::UpdateRule;
use crate::graph::Graph;

/// One relaxation pass over every node of a graph.
pub trait Sweep {
    /// Overwrites every score with its relaxed, not yet normalized, value.
    fn sweep(&self, graph: &mut Graph, rule: &UpdateRule);
}
