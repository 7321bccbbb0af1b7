//! Extracts closed cell boundaries from the augmented planar graph by
//! always turning most-clockwise — spec.md §4.5.

use std::collections::{BTreeSet, HashSet};

use log::trace;

use crate::error::BcdError;
use crate::events::EventKind;
use crate::geometry::{right_turn, signed_dot, Point};
use crate::graph::{PlanarGraph, VertexId};

/// Safety bound on a single boundary trace; exceeding it means the
/// augmented graph is malformed (a dangling chord, a non-simple input).
const MAX_PATH_STEPS: usize = 100_000;

/// A closed polygon cell, stored in the order the boundary trace discovered
/// it — not just a set — so `metrics::cell_area` can shoelace it directly
/// (spec.md §6/§9's open question on iteration order).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Cell {
	order: Vec<VertexId>,
}

impl Cell {
	/// Builds a `Cell` directly from a boundary-ordered traversal. Used by
	/// extraction and, in tests elsewhere in the crate, to build fixture
	/// cells without re-running a full traversal.
	pub(crate) fn from_order(order: Vec<VertexId>) -> Self {
		Cell { order }
	}

	/// The boundary-ordered traversal of this cell's vertex ids.
	pub fn boundary(&self) -> &[VertexId] {
		&self.order
	}

	/// The unordered vertex-id view used for deduplication and Reeb
	/// adjacency (spec.md §3/§4.6).
	pub fn vertex_set(&self) -> BTreeSet<VertexId> {
		self.order.iter().copied().collect()
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}
}

/// Traces a closed loop from every critical vertex's every outgoing
/// neighbor, deduplicating by vertex set, per spec.md §4.5.
pub fn extract_cells(points: &[Point], graph: &PlanarGraph, critical: &[(VertexId, EventKind)]) -> Result<Vec<Cell>, BcdError> {
	let mut cells = Vec::new();
	let mut seen: HashSet<BTreeSet<VertexId>> = HashSet::new();
	for &(v, _) in critical {
		let starts: Vec<VertexId> = graph.successors(v).map(|(n, _)| n).collect();
		for start in starts {
			let order = trace_loop(points, graph, v, start)?;
			let set: BTreeSet<VertexId> = order.iter().copied().collect();
			if seen.insert(set) {
				trace!("extracted cell with {} vertices from critical vertex {} via {}", order.len(), v, start);
				cells.push(Cell::from_order(order));
			}
		}
	}
	Ok(cells)
}

/// Traces the face bounded by directed edge `v -> start`, always continuing
/// via the sharpest right turn, until it returns to `start`. `prev` is reset
/// to `v` for every `start` tried — a deliberate fix over the original
/// source, which only reset it once before the outer loop (see
/// `SPEC_FULL.md` §4.5 / `DESIGN.md`).
fn trace_loop(points: &[Point], graph: &PlanarGraph, v: VertexId, start: VertexId) -> Result<Vec<VertexId>, BcdError> {
	let mut prev = v;
	let mut node = start;
	let mut order = Vec::new();
	for _ in 0..MAX_PATH_STEPS {
		let best = graph
			.successors(node)
			.map(|(c, _)| c)
			.filter(|&c| c != prev)
			.min_by(|&a, &b| {
				let ra = right_turn(points, prev, node, a);
				let rb = right_turn(points, prev, node, b);
				ra.partial_cmp(&rb)
					.unwrap_or(std::cmp::Ordering::Equal)
					.then_with(|| {
						let da = signed_dot(points, prev, node, a);
						let db = signed_dot(points, prev, node, b);
						da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
					})
					.then_with(|| a.cmp(&b))
			})
			.ok_or(BcdError::MalformedInput { vertex: node, expected: "an outgoing edge to continue cell traversal" })?;
		order.push(best);
		prev = node;
		node = best;
		if node == start {
			return Ok(order);
		}
	}
	Err(BcdError::UnclosedPath { start, limit: MAX_PATH_STEPS })
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::events::EventKind;
	use crate::graph::EdgeWeight;

	fn rectangle() -> (Vec<Point>, PlanarGraph) {
		let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 2.0), Point::new(4.0, 2.0), Point::new(4.0, 0.0)];
		let mut g = PlanarGraph::new();
		g.add_boundary_loop(&[0, 1, 2, 3], EdgeWeight::OuterBoundary);
		(points, g)
	}

	#[test]
	fn rectangle_is_a_single_cell() {
		let (points, g) = rectangle();
		let critical = vec![(0, EventKind::Open), (2, EventKind::Close)];
		let cells = extract_cells(&points, &g, &critical).unwrap();
		assert_eq!(cells.len(), 1);
		assert_eq!(cells[0].vertex_set(), [0usize, 1, 2, 3].into_iter().collect());
	}

	#[test]
	fn unclosed_path_reports_the_start_vertex() {
		// start(1) dangles into a one-way 3-cycle 2->3->4->2 that never
		// revisits 1: every vertex in the cycle has exactly one outgoing
		// edge, so `trace_loop` bounces 2,3,4,2,3,4,... forever instead of
		// closing, and must exhaust the safety bound.
		let points = vec![
			Point::new(0.0, 0.0),
			Point::new(1.0, 0.0),
			Point::new(2.0, 0.0),
			Point::new(2.0, 1.0),
			Point::new(3.0, 0.5),
		];
		let mut g = PlanarGraph::new();
		g.add_edge(0, 1, EdgeWeight::OuterBoundary);
		g.add_edge(1, 2, EdgeWeight::OuterBoundary);
		g.add_edge(2, 3, EdgeWeight::OuterBoundary);
		g.add_edge(3, 4, EdgeWeight::OuterBoundary);
		g.add_edge(4, 2, EdgeWeight::OuterBoundary);
		let critical = vec![(0, EventKind::Open)];
		let err = extract_cells(&points, &g, &critical);
		assert!(matches!(err, Err(BcdError::UnclosedPath { start: 1, limit: MAX_PATH_STEPS })));
	}
}
