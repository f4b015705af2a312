//! Edge-list I/O: loading raw graphs and preparing their bipartite doubles.

pub mod edge_list;

pub use edge_list::{bipartite_double, densify, read_edge_list, write_edge_list};
