//! A* shortest-path search over any [`Graph`].
//!
//! The search is set-based rather than heap-based: an insertion-ordered open
//! list, a closed set, and a cost table keyed by node identity. Selecting
//! the next node rescans the open list each iteration — a correctness-first
//! choice; the open list stays small for the graph sizes this targets.
//!
//! Cost functions return `f64` and are evaluated against the search
//! endpoints: a node's table entry stores `cost(node, start)` and
//! `cost(node, goal)`, and their sum is the priority key. With a
//! non-negative, non-overestimating `cost` the result is the shortest path;
//! an inadmissible cost degrades to a greedy search without erroring.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use wayfind_core::{AdjacencyListGraph, Graph, GridGraph, GridNode, Vertex, Visitable};

use crate::distance::euclidean;

/// Per-node search bookkeeping, live for one search only.
#[derive(Clone, Debug)]
struct NodeTableData<N> {
    distance_from_start: f64,
    distance_to_goal: f64,
    previous: Option<N>,
}

impl<N> NodeTableData<N> {
    fn total_cost(&self) -> f64 {
        self.distance_from_start + self.distance_to_goal
    }
}

/// Compute a path `from → to`, or an empty vec when `to` is unreachable.
///
/// An unvisitable goal short-circuits without searching. When the search
/// succeeds the returned sequence starts with `from` and ends with `to`
/// (a single element when they are equal).
///
/// With `reverse_direction` the algorithm searches `to → from` and reverses
/// the result — useful when the cost function is cheaper to evaluate that
/// way round; for symmetric cost functions the returned path is the same.
///
/// Ties between equal-cost open nodes resolve deterministically (earliest
/// discovered wins), but that order is not part of the contract.
pub fn astar_path<G, F>(
    graph: &G,
    from: &G::Node,
    to: &G::Node,
    cost: F,
    reverse_direction: bool,
) -> Vec<G::Node>
where
    G: Graph,
    F: Fn(&G::Node, &G::Node) -> f64,
{
    if !graph.can_visit(to) {
        return Vec::new();
    }
    if reverse_direction {
        let mut path = search(graph, to, from, &cost);
        path.reverse();
        path
    } else {
        search(graph, from, to, &cost)
    }
}

/// Grid convenience: [`astar_path`] with cost pinned to the Euclidean
/// distance between cell positions.
pub fn astar_path_on_grid<T>(
    graph: &GridGraph<T>,
    from: &GridNode<T>,
    to: &GridNode<T>,
    reverse_direction: bool,
) -> Vec<GridNode<T>>
where
    T: Visitable + Clone + Eq + Hash,
{
    astar_path(
        graph,
        from,
        to,
        |a, b| euclidean(a.position, b.position),
        reverse_direction,
    )
}

fn search<G, F>(graph: &G, from: &G::Node, to: &G::Node, cost: &F) -> Vec<G::Node>
where
    G: Graph,
    F: Fn(&G::Node, &G::Node) -> f64,
{
    if !graph.can_visit(to) {
        return Vec::new();
    }

    let mut table: HashMap<G::Node, NodeTableData<G::Node>> = HashMap::new();
    let mut closed: HashSet<G::Node> = HashSet::new();
    // Insertion-ordered so tie-breaks are reproducible.
    let mut open: Vec<G::Node> = Vec::new();

    // Register `node` as open; an existing entry survives unless the
    // candidate costs strictly less in total.
    let offer = |open: &mut Vec<G::Node>,
                 table: &mut HashMap<G::Node, NodeTableData<G::Node>>,
                 node: &G::Node,
                 previous: Option<&G::Node>| {
        if !open.contains(node) {
            open.push(node.clone());
        }
        let candidate = NodeTableData {
            distance_from_start: cost(node, from),
            distance_to_goal: cost(node, to),
            previous: previous.cloned(),
        };
        if let Some(existing) = table.get(node) {
            if existing.total_cost() <= candidate.total_cost() {
                return;
            }
        }
        table.insert(node.clone(), candidate);
    };

    offer(&mut open, &mut table, from, None);
    let mut current: Option<G::Node> = Some(from.clone());

    loop {
        let Some(this_node) = current.clone() else {
            break;
        };
        if this_node == *to {
            break;
        }

        let candidates: Vec<G::Node> = graph
            .neighbors(&this_node)
            .into_iter()
            .filter(|n| !closed.contains(n) && !open.contains(n) && graph.can_visit(n))
            .collect();
        for node in &candidates {
            offer(&mut open, &mut table, node, Some(&this_node));
        }

        closed.insert(this_node.clone());
        open.retain(|n| *n != this_node);

        // Open-set minimum by total cost; strict comparison keeps the
        // earliest-inserted node on ties.
        let mut next: Option<&G::Node> = None;
        let mut best = f64::INFINITY;
        for node in &open {
            let total = table.get(node).map_or(f64::MAX, |data| data.total_cost());
            if total < best {
                best = total;
                next = Some(node);
            }
        }
        current = next.cloned();
    }

    // `current` is the goal on success, absent when the open set ran dry.
    let Some(final_node) = current else {
        return Vec::new();
    };
    let mut path = Vec::new();
    let mut next = Some(final_node);
    while let Some(node) = next {
        next = table.get(&node).and_then(|data| data.previous.clone());
        path.push(node);
    }
    path.reverse();
    path
}

/// Pathfinding directly on an [`AdjacencyListGraph`].
pub trait Pathfind {
    type Node;

    /// Shortest path `from → to` using stored edge weights.
    fn pathfind(&self, from: &Self::Node, to: &Self::Node) -> Vec<Self::Node>;
}

impl<V, E> Pathfind for AdjacencyListGraph<V, E>
where
    V: Visitable + Clone + Eq + Hash,
    E: Clone + Eq + Hash,
{
    type Node = Vertex<V>;

    /// Runs [`astar_path`] with the weight of the first direct edge as the
    /// cost (`f64::MAX` when the pair has no direct edge).
    ///
    /// That cost is only meaningful for adjacent pairs; as a
    /// distance-to-goal estimate for distant pairs it is not admissible, so
    /// paths are best-effort rather than guaranteed-optimal on general
    /// graphs.
    fn pathfind(&self, from: &Vertex<V>, to: &Vertex<V>) -> Vec<Vertex<V>> {
        astar_path(
            self,
            from,
            to,
            |a, b| {
                self.edges_from(a)
                    .iter()
                    .find(|edge| edge.to == *b)
                    .map_or(f64::MAX, |edge| edge.weight)
            },
            false,
        )
    }
}
