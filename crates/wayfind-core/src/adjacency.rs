//! Explicit adjacency-list graphs.
//!
//! An [`AdjacencyListGraph`] owns a growable arena of per-vertex edge lists;
//! a [`Vertex`] is a lightweight handle whose `index` addresses its slot in
//! that arena. Edges are directed, weighted, and grouped under their source
//! vertex. Vertices are never removed, so handle indices stay valid for the
//! life of the graph.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::traits::{Graph, Visitable};

// ---------------------------------------------------------------------------
// Vertex
// ---------------------------------------------------------------------------

/// A vertex handle: payload plus the slot index assigned at creation time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex<V> {
    pub data: V,
    pub index: usize,
}

impl<V: fmt::Display> fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.index, self.data)
    }
}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// A directed weighted edge, owned by its `from` vertex's edge list.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<V, E> {
    pub from: Vertex<V>,
    pub to: Vertex<V>,
    pub data: E,
    pub weight: f64,
}

// Weights compare and hash bitwise so Eq and Hash stay consistent.
impl<V: PartialEq, E: PartialEq> PartialEq for Edge<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.data == other.data
            && self.weight.to_bits() == other.weight.to_bits()
    }
}

impl<V: Eq, E: Eq> Eq for Edge<V, E> {}

impl<V: Hash, E: Hash> Hash for Edge<V, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.data.hash(state);
        self.weight.to_bits().hash(state);
    }
}

impl<V: fmt::Display, E> fmt::Display for Edge<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -({})-> {}", self.from, self.weight, self.to)
    }
}

// ---------------------------------------------------------------------------
// AdjacencyListGraph
// ---------------------------------------------------------------------------

/// One arena slot: a vertex and its outgoing edges.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeList<V, E> {
    pub vertex: Vertex<V>,
    pub edges: Vec<Edge<V, E>>,
}

/// A directed weighted graph stored as per-vertex edge lists.
///
/// Slot `i` of the list belongs to the vertex with `index == i`. Parallel
/// edges between the same pair of vertices are permitted; they are only
/// de-duplicated by the global [`edges`](AdjacencyListGraph::edges) accessor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyListGraph<V, E> {
    pub adjacency_list: Vec<EdgeList<V, E>>,
}

impl<V, E> Default for AdjacencyListGraph<V, E> {
    fn default() -> Self {
        Self {
            adjacency_list: Vec::new(),
        }
    }
}

impl<V, E> AdjacencyListGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Clone + Eq + Hash,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency_list: Vec::new(),
        }
    }

    /// Rebuild a graph from another one's edge set, re-creating vertices and
    /// re-adding every edge. Vertices that carry no edges are dropped.
    pub fn from_graph(graph: &AdjacencyListGraph<V, E>) -> Self {
        let mut new = Self::new();
        for edge in graph.edges() {
            let from = new.create_vertex(edge.from.data.clone());
            let to = new.create_vertex(edge.to.data.clone());
            new.add_edge(&from, &to, edge.data.clone(), edge.weight);
        }
        new
    }

    /// All vertices, in slot order.
    pub fn vertices(&self) -> Vec<Vertex<V>> {
        self.adjacency_list
            .iter()
            .map(|list| list.vertex.clone())
            .collect()
    }

    /// The global edge set, de-duplicated by value. Parallel duplicates
    /// collapse here and ordering is unspecified.
    pub fn edges(&self) -> Vec<Edge<V, E>> {
        let mut all: HashSet<Edge<V, E>> = HashSet::new();
        for list in &self.adjacency_list {
            for edge in &list.edges {
                all.insert(edge.clone());
            }
        }
        all.into_iter().collect()
    }

    /// Return the vertex holding `data`, creating it if absent.
    ///
    /// Deduplication is by payload equality via a linear scan, so equal data
    /// always maps to the same handle and the vertex count is unchanged by
    /// repeat calls.
    pub fn create_vertex(&mut self, data: V) -> Vertex<V> {
        if let Some(list) = self
            .adjacency_list
            .iter()
            .find(|list| list.vertex.data == data)
        {
            return list.vertex.clone();
        }
        let vertex = Vertex {
            data,
            index: self.adjacency_list.len(),
        };
        self.adjacency_list.push(EdgeList {
            vertex: vertex.clone(),
            edges: Vec::new(),
        });
        vertex
    }

    /// Append a directed edge `from → to`. No duplicate check: adding the
    /// same pair twice yields parallel edges.
    ///
    /// # Panics
    ///
    /// Panics if `from` is not a handle of this graph.
    pub fn add_edge(&mut self, from: &Vertex<V>, to: &Vertex<V>, data: E, weight: f64) {
        let edge = Edge {
            from: from.clone(),
            to: to.clone(),
            data,
            weight,
        };
        self.adjacency_list[from.index].edges.push(edge);
    }

    /// Remove the first edge in the source vertex's list that is value-equal
    /// to `edge` (from, to, data and weight must all match). No-op if no
    /// such edge exists.
    pub fn remove_edge(&mut self, edge: &Edge<V, E>) {
        let edges = &mut self.adjacency_list[edge.from.index].edges;
        if let Some(pos) = edges.iter().position(|e| e == edge) {
            edges.remove(pos);
        }
    }

    /// Clear every vertex's edge list. Vertices and their indices survive.
    pub fn remove_all_edges(&mut self) {
        for list in &mut self.adjacency_list {
            list.edges.clear();
        }
    }

    /// Weight of the first `from → to` edge, or `-1.0` when none exists.
    ///
    /// The sentinel assumes non-negative weights; a caller whose domain
    /// includes negative or ambiguous weights cannot distinguish "no edge"
    /// from a stored `-1.0`.
    pub fn weight_from(&self, from: &Vertex<V>, to: &Vertex<V>) -> f64 {
        self.adjacency_list[from.index]
            .edges
            .iter()
            .find(|edge| edge.to == *to)
            .map_or(-1.0, |edge| edge.weight)
    }

    /// Outgoing edges of `vertex`, empty if it has none.
    pub fn edges_from(&self, vertex: &Vertex<V>) -> &[Edge<V, E>] {
        &self.adjacency_list[vertex.index].edges
    }
}

impl<V, E> Graph for AdjacencyListGraph<V, E>
where
    V: Visitable + Clone + Eq + Hash,
    E: Clone + Eq + Hash,
{
    type Node = Vertex<V>;

    /// De-duplicated endpoints of the vertex's outgoing edges.
    ///
    /// Note this includes the queried vertex itself (its own `from` side)
    /// whenever it has at least one edge; the set is "endpoints of my
    /// edges", not strictly one-hop destinations.
    fn neighbors(&self, node: &Vertex<V>) -> Vec<Vertex<V>> {
        let mut set: HashSet<Vertex<V>> = HashSet::new();
        for edge in self.edges_from(node) {
            set.insert(edge.from.clone());
            set.insert(edge.to.clone());
        }
        set.into_iter().collect()
    }

    fn can_visit(&self, node: &Vertex<V>) -> bool {
        node.data.can_visit()
    }
}

impl<V, E> fmt::Display for AdjacencyListGraph<V, E>
where
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for list in &self.adjacency_list {
            if list.edges.is_empty() {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            first = false;
            let row: Vec<String> = list
                .edges
                .iter()
                .map(|edge| format!("{}: {}", edge.to.data, edge.weight))
                .collect();
            write!(f, "{} -> [{}]", list.vertex.data, row.join(", "))?;
        }
        Ok(())
    }
}
