use super::*;
use crate::{
    common::{l1_delta, max_delta},
    error::{Error, Result},
    graph::Graph,
};
use log::{debug, info, warn};

/// PageRank by repeated relaxation and normalization until no score moves
/// by more than `epsilon`.
#[derive(Debug, Clone)]
pub struct IteratedPageRank {
    config: Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Iterating,
    /// Terminal: the graph holds an iterate whose next iteration moves no
    /// score by more than epsilon.
    Converged,
}

/// Progress of a single iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// 1-based.
    pub iteration: usize,
    pub max_delta: f64,
    pub l1_delta: f64,
    pub state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Convergence {
    pub iterations: usize,
    pub max_delta: f64,
    pub l1_delta: f64,
}

impl IteratedPageRank {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Relaxes every node once and rescales the scores to sum to 1.
    ///
    /// Fails with [`Error::DegenerateState`] on an empty graph.
    pub fn one_iteration(&self, graph: &mut Graph) -> Result<()> {
        self.relax(graph, 1)
    }

    fn relax(&self, graph: &mut Graph, iteration: usize) -> Result<()> {
        let rule = UpdateRule::new(graph, self.config.damping, self.config.dangling);
        self.config.order.sweep(graph, &rule);
        normalize(graph, iteration)
    }

    /// Drives `graph` one iteration per item, ending after the first
    /// [`State::Converged`] step or the first error. No iteration cap applies.
    pub fn iterations<'g>(&self, graph: &'g mut Graph) -> Iterations<'_, 'g> {
        Iterations {
            engine: self,
            graph,
            iteration: 0,
            state: State::Iterating,
            failed: false,
        }
    }

    /// Iterates until convergence, leaving the final scores on `graph`.
    ///
    /// An empty graph is left untouched and reported as converged after zero
    /// iterations. When `max_iterations` is exceeded, returns
    /// [`Error::NotConverged`] with the last iterate kept on `graph`.
    pub fn compute(&self, graph: &mut Graph) -> Result<Convergence> {
        let node_count = graph.node_count();
        if node_count == 0 {
            debug!("empty graph, nothing to rank");
            return Ok(Convergence::default());
        }
        let epsilon = self.config.epsilon;
        let cap = self.config.max_iterations;
        let mut steps = self.iterations(graph);
        loop {
            let step = steps.step()?;
            if step.state == State::Converged {
                info!(
                    "converged after {} iterations over {} nodes: max delta {:e}",
                    step.iteration, node_count, step.max_delta
                );
                return Ok(Convergence {
                    iterations: step.iteration,
                    max_delta: step.max_delta,
                    l1_delta: step.l1_delta,
                });
            }
            if let Some(cap) = cap {
                if step.iteration >= cap {
                    warn!(
                        "gave up after {} iterations over {} nodes: max delta {:e} > {:e}",
                        step.iteration, node_count, step.max_delta, epsilon
                    );
                    return Err(Error::NotConverged {
                        iterations: step.iteration,
                        node_count,
                        max_delta: step.max_delta,
                        epsilon,
                    });
                }
            }
        }
    }
}

fn normalize(graph: &mut Graph, iteration: usize) -> Result<()> {
    let total: f64 = graph.nodes().iter().map(|n| n.score()).sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(Error::DegenerateState {
            total,
            iteration,
            node_count: graph.node_count(),
        });
    }
    for node in graph.nodes.iter_mut() {
        node.score /= total;
    }
    Ok(())
}

pub struct Iterations<'a, 'g> {
    engine: &'a IteratedPageRank,
    graph: &'g mut Graph,
    iteration: usize,
    state: State,
    failed: bool,
}

impl Iterations<'_, '_> {
    pub fn graph(&self) -> &Graph {
        &*self.graph
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Runs one more iteration, regardless of the current state.
    ///
    /// An iteration that moves no score by more than epsilon is a
    /// confirmation: it is rolled back, leaving the iterate it confirmed on
    /// the graph. The first iteration of a run never converges, as the
    /// scores it started from need not be normalized.
    pub fn step(&mut self) -> Result<Step> {
        let previous = self.graph.scores();
        self.iteration += 1;
        self.engine.relax(self.graph, self.iteration)?;
        let current = self.graph.scores();
        let max_delta = max_delta(&previous, &current);
        let l1_delta = l1_delta(&previous, &current);
        self.state = if self.iteration > 1 && max_delta <= self.engine.config.epsilon {
            for (node, score) in self.graph.nodes.iter_mut().zip(previous) {
                node.score = score;
            }
            State::Converged
        } else {
            State::Iterating
        };
        debug!(
            "iteration {}: max delta {max_delta:e}, l1 delta {l1_delta:e}",
            self.iteration
        );
        Ok(Step {
            iteration: self.iteration,
            max_delta,
            l1_delta,
            state: self.state,
        })
    }
}

impl Iterator for Iterations<'_, '_> {
    type Item = Result<Step>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.state == State::Converged {
            return None;
        }
        let step = self.step();
        self.failed = step.is_err();
        Some(step)
    }
}
