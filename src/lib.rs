//! Word ladders ("doublets") over a labeled graph.
//!
//! [`graph::LabeledGraph`] is a directed graph of labeled vertices backed by
//! an adjacency matrix; [`path_finder`] runs breadth-first path queries over
//! it. [`doublets`] builds the word graph and answers puzzles.

pub mod config;
pub mod doublets;
pub mod error;
pub mod graph;
pub mod logging;
pub mod path_finder;
pub mod word_list;

pub use doublets::{Ladder, LadderReport, Strategy, WordGraph};
pub use error::{DoubletError, GraphError, Result};
pub use graph::{LabeledGraph, MAXIMUM};
