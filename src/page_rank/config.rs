use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_EPSILON: f64 = 1e-6;
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000;

/// Which scores a node reads from its parents within one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOrder {
    /// Every node reads its parents' scores as they were when the iteration
    /// started.
    #[default]
    Jacobi,
    /// Nodes are visited in construction order and read whatever score each
    /// parent holds at that moment, so parents visited earlier in the same
    /// iteration are already updated.
    GaussSeidel,
}

/// What happens to the score held by nodes without out-edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingPolicy {
    /// Dangling nodes feed nobody; the lost mass is absorbed by normalization.
    #[default]
    Drop,
    /// The damped mass of dangling nodes is spread uniformly over all nodes.
    Redistribute,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub damping: f64,
    pub epsilon: f64,
    /// `None` iterates until convergence with no bound.
    pub max_iterations: Option<usize>,
    pub order: UpdateOrder,
    pub dangling: DanglingPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            epsilon: DEFAULT_EPSILON,
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
            order: UpdateOrder::default(),
            dangling: DanglingPolicy::default(),
        }
    }
}

impl Config {
    pub fn new(damping: f64) -> Self {
        Self {
            damping,
            ..Self::default()
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_order(mut self, order: UpdateOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_dangling(mut self, dangling: DanglingPolicy) -> Self {
        self.dangling = dangling;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let damping = self.damping;
        if !(damping > 0.0 && damping < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "damping={damping} is not in (0, 1)"
            )));
        }
        let epsilon = self.epsilon;
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "epsilon={epsilon} is not a positive number"
            )));
        }
        if self.max_iterations == Some(0) {
            return Err(Error::InvalidConfig("max_iterations=0".to_string()));
        }
        Ok(())
    }
}
