//! Error taxonomy for the decomposition pipeline.

use crate::events::EventKind;
use crate::graph::VertexId;

/// Everything that can go wrong turning a boundary graph into cells.
///
/// Every variant carries the vertex it was raised against so a caller can
/// point back at the offending input without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum BcdError {
	/// A vertex does not have exactly one non-chord predecessor or
	/// successor, or cell extraction ran out of outgoing edges to follow.
	/// Means the boundary graph is not a simple polygon.
	#[error("vertex {vertex} has no {expected}; the boundary graph is not a simple polygon")]
	MalformedInput { vertex: VertexId, expected: &'static str },
	/// Two vertices are exactly coincident after rotation by theta.
	#[error("vertices {a} and {b} are coincident at the sweep angle; perturb theta")]
	DegenerateSweep { a: VertexId, b: VertexId },
	/// Cell-boundary traversal did not return to its start within the
	/// safety bound; the graph likely has a dangling or malformed chord.
	#[error("cell extraction from vertex {start} did not close within {limit} steps")]
	UnclosedPath { start: VertexId, limit: usize },
	/// A SPLIT/MERGE vertical probe found no edge on the given side.
	#[error("vertical probe from vertex {vertex} ({kind:?}) found no edge {side} it")]
	NumericEdge { vertex: VertexId, kind: EventKind, side: &'static str },
}
