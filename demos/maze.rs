//! Random-maze pathfinding demo.
//!
//! Scatters walls over a grid, runs A* corner to corner, and renders the
//! result. Run: cargo run --bin maze [seed]

use std::collections::HashSet;

use rand::{RngExt, SeedableRng};
use wayfind_core::{GridGraph, Position, Visitable};
use wayfind_paths::astar_path_on_grid;

const ROWS: usize = 12;
const COLS: usize = 24;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Terrain {
    Floor,
    Wall,
}

impl Visitable for Terrain {
    fn can_visit(&self) -> bool {
        matches!(self, Terrain::Floor)
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(7);
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let mut graph = GridGraph::new(ROWS, COLS, Terrain::Floor);
    for y in 0..ROWS as i32 {
        for x in 0..COLS as i32 {
            if rng.random_range(0..100) < 30 {
                graph.update_node(Position::new(x, y), Terrain::Wall);
            }
        }
    }

    let start = Position::new(0, 0);
    let goal = Position::new(COLS as i32 - 1, ROWS as i32 - 1);
    graph.update_node(start, Terrain::Floor);
    graph.update_node(goal, Terrain::Floor);

    log::debug!("searching {start} -> {goal} with seed {seed}");
    let path = astar_path_on_grid(&graph, &graph.node_at(start), &graph.node_at(goal), false);

    if path.is_empty() {
        println!("no path from {start} to {goal} with seed {seed}; try another seed");
        return;
    }

    let on_path: HashSet<Position> = path.iter().map(|n| n.position).collect();
    for y in 0..ROWS as i32 {
        let mut line = String::with_capacity(COLS);
        for x in 0..COLS as i32 {
            let p = Position::new(x, y);
            line.push(if on_path.contains(&p) {
                '*'
            } else if graph.node_at(p).data.can_visit() {
                '.'
            } else {
                '#'
            });
        }
        println!("{line}");
    }
    println!("{} steps (seed {seed})", path.len());
}
