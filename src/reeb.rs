//! Builds the Reeb graph of cell adjacency from the extracted cells —
//! spec.md §4.6.

use log::trace;

use crate::cells::Cell;
use crate::geometry::Point;
use crate::graph::VertexId;

/// A node of the `ReebGraph`: one per extracted cell.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReebNode {
	/// The cell's vertex set, as handed over by cell extraction.
	pub cell: Cell,
	/// Arithmetic mean of the cell's member points, in the un-rotated frame
	/// — a *vertex* centroid, not the polygon's geometric centroid (kept as
	/// documented per spec.md §9 open question 1; downstream consumers
	/// depend on it).
	pub centroid: Point,
	/// Base-26 label derived from the node's 1-based index (1->A, 26->Z,
	/// 27->AA, ...).
	pub name: String,
}

/// Undirected graph of cell adjacency. Nodes are indexed by position in the
/// cell list; edges connect cells whose vertex sets share `>= 2` members —
/// spec.md §4.6 / §9 open question 3, kept as specified.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ReebGraph {
	nodes: Vec<ReebNode>,
	/// `(i, j)` with `i < j`; built by iterating cell pairs in index order,
	/// so it is already free of duplicates without needing set semantics.
	edges: Vec<(usize, usize)>,
}

impl ReebGraph {
	pub fn nodes(&self) -> &[ReebNode] {
		&self.nodes
	}

	/// Edges as `(i, j)` with `i < j`, each physical adjacency appearing once.
	pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
		self.edges.iter().copied()
	}

	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}
}

/// Base-26 label for a 1-based index: 1->A, 26->Z, 27->AA, ... matching
/// `bcd.py`'s `_int_to_alph`.
fn int_to_alph(mut x: usize) -> String {
	let mut result = Vec::new();
	while x > 0 {
		let r = (x - 1) % 26;
		x = (x - 1) / 26;
		result.push((b'A' + r as u8) as char);
	}
	result.iter().rev().collect()
}

/// Vertex centroid of a cell, in the un-rotated frame — spec.md §4.6 / §9
/// open question 1.
fn cell_centroid(points: &[Point], cell: &Cell) -> Point {
	let ids = cell.boundary();
	let sum = ids.iter().fold(Point::new(0.0, 0.0), |acc, &v| acc + points[v]);
	sum * (1.0 / ids.len() as f64)
}

/// Builds the Reeb graph from the final (un-rotated) points and the
/// extracted cells, per spec.md §4.6.
pub fn build_reeb_graph(points: &[Point], cells: Vec<Cell>) -> ReebGraph {
	let mut edges = Vec::new();
	for i in 0..cells.len() {
		for j in (i + 1)..cells.len() {
			let shared = cells[i].vertex_set().intersection(&cells[j].vertex_set()).count();
			if shared >= 2 {
				trace!("cells {} and {} share {} vertices: adjacent", i, j, shared);
				edges.push((i, j));
			}
		}
	}
	let nodes = cells
		.into_iter()
		.enumerate()
		.map(|(i, cell)| {
			let centroid = cell_centroid(points, &cell);
			let name = int_to_alph(i + 1);
			ReebNode { cell, centroid, name }
		})
		.collect();
	ReebGraph { nodes, edges }
}

#[cfg(test)]
mod test {
	use super::*;

	fn cell(ids: &[VertexId]) -> Cell {
		Cell::from_order(ids.to_vec())
	}

	#[test]
	fn int_to_alph_matches_base26_encoding() {
		assert_eq!(int_to_alph(1), "A");
		assert_eq!(int_to_alph(26), "Z");
		assert_eq!(int_to_alph(27), "AA");
		assert_eq!(int_to_alph(52), "AZ");
		assert_eq!(int_to_alph(53), "BA");
	}

	#[test]
	fn two_cells_sharing_an_edge_are_adjacent() {
		let points = vec![
			Point::new(0.0, 0.0),
			Point::new(0.0, 2.0),
			Point::new(2.0, 2.0),
			Point::new(2.0, 0.0),
			Point::new(4.0, 2.0),
			Point::new(4.0, 0.0),
		];
		let cells = vec![cell(&[0, 1, 2, 3]), cell(&[3, 2, 4, 5])];
		let rg = build_reeb_graph(&points, cells);
		assert_eq!(rg.node_count(), 2);
		assert_eq!(rg.edges().collect::<Vec<_>>(), vec![(0, 1)]);
	}

	#[test]
	fn cells_sharing_fewer_than_two_vertices_are_not_adjacent() {
		let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 1.0), Point::new(3.0, 1.0)];
		let cells = vec![cell(&[0, 1, 3]), cell(&[1, 2, 4, 5])];
		let rg = build_reeb_graph(&points, cells);
		assert_eq!(rg.edge_count(), 0);
	}

	#[test]
	fn centroid_is_the_vertex_mean() {
		let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 4.0), Point::new(4.0, 4.0), Point::new(4.0, 0.0)];
		let cells = vec![cell(&[0, 1, 2, 3])];
		let rg = build_reeb_graph(&points, cells);
		let c = rg.nodes()[0].centroid;
		assert!((c.x - 2.0).abs() < 1e-12);
		assert!((c.y - 2.0).abs() < 1e-12);
		assert_eq!(rg.nodes()[0].name, "A");
	}
}
