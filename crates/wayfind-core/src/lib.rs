//! Graph representations for pathfinding.
//!
//! This crate provides the data side of the wayfind stack:
//!
//! - [`Position`] — 2D integer coordinates
//! - [`GridGraph`] — an implicit graph over a rectangular grid, with
//!   switchable 4- or 8-directional movement and Chebyshev ring queries
//! - [`AdjacencyListGraph`] — an explicit directed weighted graph stored as
//!   per-vertex edge lists
//! - [`Graph`] / [`Visitable`] — the capability contract the search
//!   algorithms in `wayfind-paths` consume
//!
//! Both graph types implement [`Graph`], so the pathfinder is
//! representation-agnostic: it only ever asks for a node's neighbors and
//! whether a node may be entered.

mod adjacency;
mod geom;
mod grid;
mod traits;

pub use adjacency::{AdjacencyListGraph, Edge, EdgeList, Vertex};
pub use geom::Position;
pub use grid::{GridGraph, GridNode};
pub use traits::{Graph, Visitable};
