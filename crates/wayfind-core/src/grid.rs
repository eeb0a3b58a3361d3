//! Implicit 2D grid graphs.
//!
//! A [`GridGraph`] stores one [`GridNode`] per cell and derives adjacency
//! from geometry instead of stored edges: neighbors are the surrounding
//! cells, with diagonal movement switchable per graph. It also answers
//! Chebyshev ring queries ([`GridGraph::nodes_in_perimeter`]) and filled
//! square queries ([`GridGraph::nodes_in_area`]).

use std::fmt;

use crate::geom::Position;
use crate::traits::{Graph, Visitable};

// ---------------------------------------------------------------------------
// GridNode
// ---------------------------------------------------------------------------

/// A cell of a [`GridGraph`]: a position paired with its payload.
///
/// Values returned from grid queries are snapshots taken at query time;
/// a later [`GridGraph::update_node`] does not alter them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridNode<T> {
    pub position: Position,
    pub data: T,
}

impl<T: fmt::Display> fmt::Display for GridNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.position, self.data)
    }
}

// ---------------------------------------------------------------------------
// GridGraph
// ---------------------------------------------------------------------------

/// A rectangular 2D grid of [`GridNode`]s, indexed `[row][col]` = `[y][x]`.
///
/// The grid is sized at construction and never resized; cell payloads are
/// replaced in place via [`update_node`](GridGraph::update_node).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridGraph<T> {
    grid: Vec<Vec<GridNode<T>>>,
    /// When `true` (the default), neighbor enumeration includes the four
    /// diagonal cells.
    pub allows_diagonals: bool,
}

impl<T> GridGraph<T> {
    /// Create a `rows` × `cols` grid with every cell set to `initial`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero; a degenerate grid cannot be used
    /// safely.
    pub fn new(rows: usize, cols: usize, initial: T) -> Self
    where
        T: Clone,
    {
        assert!(rows > 0 && cols > 0, "invalid grid size {rows}x{cols}");
        let grid = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| GridNode {
                        position: Position::new(col as i32, row as i32),
                        data: initial.clone(),
                    })
                    .collect()
            })
            .collect();
        Self {
            grid,
            allows_diagonals: true,
        }
    }

    /// Create a grid from a 2D payload array; `values[row][col]` becomes the
    /// cell at position `(col, row)`.
    ///
    /// Rows are expected to be of equal length; [`cols`](GridGraph::cols)
    /// reports the length of row 0.
    ///
    /// # Panics
    ///
    /// Panics if `values` has no rows or row 0 is empty.
    pub fn from_values(values: Vec<Vec<T>>) -> Self {
        assert!(
            !values.is_empty() && !values[0].is_empty(),
            "invalid grid size"
        );
        let grid = values
            .into_iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .into_iter()
                    .enumerate()
                    .map(|(col, data)| GridNode {
                        position: Position::new(col as i32, row as i32),
                        data,
                    })
                    .collect()
            })
            .collect();
        Self {
            grid,
            allows_diagonals: true,
        }
    }

    /// Number of rows (the Y extent).
    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Number of columns (the X extent), taken from row 0.
    #[inline]
    pub fn cols(&self) -> usize {
        self.grid[0].len()
    }

    /// Whether `position` is inside the grid bounds.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.cols()
            && (position.y as usize) < self.rows()
    }

    /// Snapshot of the cell at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds. Callers index directly; use
    /// [`contains`](GridGraph::contains) to bound-check first.
    pub fn node_at(&self, position: Position) -> GridNode<T>
    where
        T: Clone,
    {
        self.grid[position.y as usize][position.x as usize].clone()
    }

    /// Replace the payload at `position` in place. The cell keeps its
    /// position; previously returned snapshots are unaffected.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    pub fn update_node(&mut self, position: Position, value: T) {
        self.grid[position.y as usize][position.x as usize].data = value;
    }

    /// All cells within Chebyshev distance `radius` of `node`: the union of
    /// the perimeters at radius `0..=radius`, clipped to the grid.
    pub fn nodes_in_area(&self, node: &GridNode<T>, radius: i32) -> Vec<GridNode<T>>
    where
        T: Clone,
    {
        (0..=radius)
            .flat_map(|r| self.nodes_in_perimeter(node, r))
            .collect()
    }

    /// The ring of cells at Chebyshev distance exactly `radius` from `node`,
    /// clipped to the grid. Out-of-bounds cells are silently omitted; a
    /// radius of zero (or less) yields just the node itself.
    pub fn nodes_in_perimeter(&self, node: &GridNode<T>, radius: i32) -> Vec<GridNode<T>>
    where
        T: Clone,
    {
        if radius <= 0 {
            return vec![node.clone()];
        }
        let rows = self.rows() as i32;
        let cols = self.cols() as i32;
        let mut nodes = Vec::new();
        for i in [-radius, radius] {
            // Top and bottom rows span the full ring width.
            let y = node.position.y + i;
            if y >= 0 && y < rows {
                for j in -radius..=radius {
                    let x = node.position.x + j;
                    if x >= 0 && x < cols {
                        nodes.push(self.grid[y as usize][x as usize].clone());
                    }
                }
            }
            // Left and right columns get the reduced span; the corner cells
            // belong to the rows above.
            let x = node.position.x + i;
            if x >= 0 && x < cols {
                for j in -(radius - 1)..=(radius - 1) {
                    let y = node.position.y + j;
                    if y >= 0 && y < rows {
                        nodes.push(self.grid[y as usize][x as usize].clone());
                    }
                }
            }
        }
        nodes
    }
}

impl<T> Graph for GridGraph<T>
where
    T: Visitable + Clone + Eq + std::hash::Hash,
{
    type Node = GridNode<T>;

    fn neighbors(&self, node: &GridNode<T>) -> Vec<GridNode<T>> {
        if self.allows_diagonals {
            return self.nodes_in_perimeter(node, 1);
        }
        let Position { x, y } = node.position;
        let mut nodes = Vec::with_capacity(4);
        if y + 1 < self.rows() as i32 {
            nodes.push(self.grid[(y + 1) as usize][x as usize].clone());
        }
        if y - 1 >= 0 {
            nodes.push(self.grid[(y - 1) as usize][x as usize].clone());
        }
        if x + 1 < self.cols() as i32 {
            nodes.push(self.grid[y as usize][(x + 1) as usize].clone());
        }
        if x - 1 >= 0 {
            nodes.push(self.grid[y as usize][(x - 1) as usize].clone());
        }
        nodes
    }

    fn can_visit(&self, node: &GridNode<T>) -> bool {
        node.data.can_visit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl Visitable for i32 {
        fn can_visit(&self) -> bool {
            *self != 0
        }
    }

    fn test_graph() -> GridGraph<i32> {
        GridGraph::from_values(vec![
            vec![1, 1, 1, 1],
            vec![1, 0, 0, 1],
            vec![0, 1, 0, 1],
            vec![0, 0, 1, 1],
        ])
    }

    fn positions(nodes: &[GridNode<i32>]) -> Vec<Position> {
        nodes.iter().map(|n| n.position).collect()
    }

    #[test]
    fn dimensions() {
        let g = test_graph();
        assert_eq!(g.rows(), 4);
        assert_eq!(g.cols(), 4);
        let g2 = GridGraph::new(2, 7, 0);
        assert_eq!(g2.rows(), 2);
        assert_eq!(g2.cols(), 7);
    }

    #[test]
    #[should_panic(expected = "invalid grid size")]
    fn zero_rows_panics() {
        let _ = GridGraph::new(0, 3, 1);
    }

    #[test]
    #[should_panic(expected = "invalid grid size")]
    fn empty_values_panics() {
        let _ = GridGraph::<i32>::from_values(vec![]);
    }

    #[test]
    fn node_at_and_update() {
        let mut g = test_graph();
        let p = Position::new(1, 2);
        let before = g.node_at(p);
        assert_eq!(before.data, 1);
        g.update_node(p, 9);
        assert_eq!(g.node_at(p).data, 9);
        // Snapshots are not live references.
        assert_eq!(before.data, 1);
        assert_eq!(g.node_at(p).position, p);
    }

    #[test]
    #[should_panic]
    fn node_at_out_of_bounds_panics() {
        let g = test_graph();
        let _ = g.node_at(Position::new(4, 0));
    }

    #[test]
    fn perimeter_corner_radius_1() {
        let g = test_graph();
        let nodes = g.nodes_in_perimeter(&g.node_at(Position::ZERO), 1);
        assert_eq!(nodes.len(), 3);
        let ps = positions(&nodes);
        assert!(ps.contains(&Position::new(0, 1)));
        assert!(ps.contains(&Position::new(1, 0)));
        assert!(ps.contains(&Position::new(1, 1)));
    }

    #[test]
    fn perimeter_center_radius_1() {
        let g = test_graph();
        let nodes = g.nodes_in_perimeter(&g.node_at(Position::new(2, 2)), 1);
        assert_eq!(nodes.len(), 8);
        let ps = positions(&nodes);
        for (x, y) in [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)] {
            assert!(ps.contains(&Position::new(x, y)), "missing ({x},{y})");
        }
    }

    #[test]
    fn perimeter_corner_radius_2() {
        let g = test_graph();
        let nodes = g.nodes_in_perimeter(&g.node_at(Position::ZERO), 2);
        assert_eq!(nodes.len(), 5);
        let ps = positions(&nodes);
        for (x, y) in [(0, 2), (1, 2), (2, 2), (2, 1), (2, 0)] {
            assert!(ps.contains(&Position::new(x, y)), "missing ({x},{y})");
        }
    }

    #[test]
    fn perimeter_corner_radius_3() {
        let g = test_graph();
        assert_eq!(
            g.nodes_in_perimeter(&g.node_at(Position::ZERO), 3).len(),
            7
        );
    }

    #[test]
    fn perimeter_entirely_out_of_bounds() {
        let g = test_graph();
        assert_eq!(
            g.nodes_in_perimeter(&g.node_at(Position::ZERO), 4).len(),
            0
        );
    }

    #[test]
    fn perimeter_radius_0_is_self() {
        let g = test_graph();
        let nodes = g.nodes_in_perimeter(&g.node_at(Position::ZERO), 0);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].position, Position::ZERO);
    }

    #[test]
    fn area_corner() {
        let g = test_graph();
        let corner = g.node_at(Position::ZERO);
        let nodes = g.nodes_in_area(&corner, 1);
        assert_eq!(nodes.len(), 4);
        let ps = positions(&nodes);
        for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert!(ps.contains(&Position::new(x, y)), "missing ({x},{y})");
        }
        assert_eq!(g.nodes_in_area(&corner, 2).len(), 9);
    }

    #[test]
    fn orthogonal_neighbors() {
        let mut g = test_graph();
        g.allows_diagonals = false;
        let ps = positions(&g.neighbors(&g.node_at(Position::ZERO)));
        assert_eq!(ps.len(), 2);
        assert!(ps.contains(&Position::new(0, 1)));
        assert!(ps.contains(&Position::new(1, 0)));

        let ps = positions(&g.neighbors(&g.node_at(Position::new(2, 2))));
        assert_eq!(ps.len(), 4);
    }

    #[test]
    fn diagonal_neighbors_are_radius_1_perimeter() {
        let g = test_graph();
        let center = g.node_at(Position::new(2, 2));
        assert_eq!(g.neighbors(&center), g.nodes_in_perimeter(&center, 1));
    }

    #[test]
    fn can_visit_delegates_to_payload() {
        let g = test_graph();
        assert!(g.can_visit(&g.node_at(Position::ZERO)));
        assert!(!g.can_visit(&g.node_at(Position::new(1, 1))));
    }

    #[test]
    fn display_formats() {
        let g = test_graph();
        assert_eq!(g.node_at(Position::new(1, 0)).to_string(), "[(1,0):1]");
    }
}
