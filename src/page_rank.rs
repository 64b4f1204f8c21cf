mod config;
pub use self::config::*;
mod rule;
pub use self::rule::*;
mod traits;
pub use self::traits::*;
pub mod iterated;
pub use self::iterated::{Convergence, IteratedPageRank, Iterations, State, Step};
pub mod sweep;

use crate::{error::Result, graph::Graph};

/// Runs PageRank to convergence with `damping` and default settings otherwise.
pub fn compute(graph: &mut Graph, damping: f64) -> Result<Convergence> {
    IteratedPageRank::new(Config::new(damping))?.compute(graph)
}

/// One relaxation and normalization pass with `damping` and default settings
/// otherwise.
pub fn one_iteration(graph: &mut Graph, damping: f64) -> Result<()> {
    IteratedPageRank::new(Config::new(damping))?.one_iteration(graph)
}
