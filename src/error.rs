/// Malformed graph description, reported before any computation starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    #[error("node count must be non-negative, got {0}")]
    NegativeNodeCount(i64),
    #[error("cannot allocate {0} nodes")]
    TooManyNodes(i64),
    #[error("node id {id} is out of range 1..={node_count}")]
    OutOfRange { id: usize, node_count: usize },
    #[error("edge #{edge} names node {id}, which is out of range 1..={node_count}")]
    EdgeOutOfRange {
        edge: usize,
        id: i64,
        node_count: usize,
    },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    /// The score mass to normalize by is zero or not finite.
    #[error("total score {total} at iteration {iteration} over {node_count} nodes cannot be normalized")]
    DegenerateState {
        total: f64,
        iteration: usize,
        node_count: usize,
    },
    /// The iteration cap was hit. Scores left on the graph are the last
    /// normalized iterate and remain usable as a best-effort answer.
    #[error("not converged after {iterations} iterations over {node_count} nodes: max delta {max_delta:e} > epsilon {epsilon:e}")]
    NotConverged {
        iterations: usize,
        node_count: usize,
        max_delta: f64,
        epsilon: f64,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
