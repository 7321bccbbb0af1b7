//! Boustrophedon Cellular Decomposition of a simple planar polygon (possibly
//! with holes) into x-monotone cells, plus the Reeb graph of cell adjacency.
//!
//! The entry point is [`decompose`]. Everything else in this crate —
//! geometry primitives, the planar graph, event classification, the sweep,
//! cell extraction, Reeb-graph construction, and the read-only bbox/area
//! consumer interfaces — is exported for callers who want to drive the
//! pipeline a stage at a time.

pub mod cells;
pub mod error;
pub mod events;
pub mod geometry;
pub mod graph;
pub mod metrics;
pub mod reeb;
pub mod sweep;

pub use cells::Cell;
pub use error::BcdError;
pub use events::EventKind;
pub use geometry::Point;
pub use graph::{EdgeWeight, PlanarGraph, VertexId};
pub use metrics::BBox;
pub use reeb::{ReebGraph, ReebNode};

use log::info;

/// The full output of a decomposition run: the (possibly INTERSECT-extended)
/// points and graph, the extracted cells, and their Reeb graph — spec.md §6.
#[derive(Debug, Clone)]
pub struct Decomposition {
	/// Final point array, in the original (un-rotated) frame, extended with
	/// any INTERSECT vertices inserted at SPLIT/MERGE events.
	pub points: Vec<Point>,
	/// Final augmented graph, chords included.
	pub graph: PlanarGraph,
	/// The extracted cells.
	pub cells: Vec<Cell>,
	/// The Reeb graph of cell adjacency.
	pub reeb: ReebGraph,
	/// The sweep angle this decomposition ran at.
	pub theta: f64,
}

impl Decomposition {
	/// Bounding box of every cell in the sweep-rotated frame — spec.md §6.
	pub fn cell_bboxes(&self) -> Vec<BBox> {
		metrics::cell_bboxes(&self.points, &self.cells, self.theta)
	}

	/// Shoelace area of every cell, in boundary-traversal order — spec.md §6.
	pub fn cell_areas(&self) -> Vec<f64> {
		metrics::cell_areas(&self.points, &self.cells)
	}
}

/// Runs the full pipeline of spec.md §2 at sweep angle `theta`: classify &
/// augment the graph, extract cells, rotate back, build the Reeb graph.
///
/// `points`/`graph` are consumed; the caller never observes intermediate
/// sweep state (spec.md §5).
pub fn decompose(points: Vec<Point>, graph: PlanarGraph, theta: f64) -> Result<Decomposition, BcdError> {
	let swept = sweep::sweep(&points, &graph, theta)?;
	let cells = cells::extract_cells(&swept.points, &swept.graph, &swept.critical)?;
	let unrotated = geometry::rotate(&swept.points, -theta);
	let reeb = reeb::build_reeb_graph(&unrotated, cells.clone());
	info!("decomposed polygon of {} vertices into {} cells ({} reeb edges) at theta={}", unrotated.len(), cells.len(), reeb.edge_count(), theta);
	Ok(Decomposition { points: unrotated, graph: swept.graph, cells, reeb, theta })
}
