//! Classifies a polygon vertex's local geometry into a sweep event, per
//! `SPEC_FULL.md` §4.2.

use crate::error::BcdError;
use crate::geometry::{qcross, Point};
use crate::graph::{PlanarGraph, VertexId};

/// The kind of sweep event a vertex represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EventKind {
	Open,
	Close,
	Split,
	Merge,
	Inflection,
	/// A synthetic vertex inserted on a polygon edge by chord splicing.
	/// Never returned by `classify_vertex` — assigned directly by the sweep
	/// when it creates the vertex.
	Intersect,
}

impl EventKind {
	/// Whether this event drives cell extraction (spec.md §3).
	pub fn is_critical(self) -> bool {
		matches!(self, EventKind::Open | EventKind::Close | EventKind::Split | EventKind::Merge)
	}
}

/// Classifies `v` from its two non-chord boundary neighbors, in the
/// rotated-to-sweep-direction frame `points` is expressed in.
///
/// "left"/"right" of `v` is decided lexicographically (`x`, then `y`) rather
/// than on raw `x`, so vertices that tie exactly on `x` (e.g. the two ends of
/// a vertical edge under an axis-aligned sweep) still classify unambiguously
/// — `SPEC_FULL.md` §4.2's resolution of the "small symbolic perturbation"
/// spec.md §4.1 calls for.
pub fn classify_vertex(points: &[Point], graph: &PlanarGraph, v: VertexId) -> Result<EventKind, BcdError> {
	let v_a = graph.non_chord_predecessor(v)?;
	let v_b = graph.non_chord_successor(v)?;
	let above = qcross(points, v_a, v, v_b);
	let (lower, upper) = if above { (v_b, v_a) } else { (v_a, v_b) };

	let v_key = points[v].lex_key();
	let lower_right = points[lower].lex_key() > v_key;
	let upper_right = points[upper].lex_key() > v_key;

	Ok(match (lower_right, upper_right, above) {
		(true, true, true) => EventKind::Open,
		(true, true, false) => EventKind::Split,
		(false, false, true) => EventKind::Close,
		(false, false, false) => EventKind::Merge,
		_ => EventKind::Inflection,
	})
}
