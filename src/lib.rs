mod error;
pub use self::error::*;
pub mod graph;
pub use self::graph::{build_graph, Graph, Node, NodeId};
pub mod builder;
pub use self::builder::GraphBuilder;
mod common;
pub use self::common::*;

pub mod page_rank;
pub use self::page_rank::{compute, one_iteration, Config, IteratedPageRank};
pub mod report;
pub use self::report::final_scores;
