//! The plane sweep: rotate, sort by sweep coordinate, classify every vertex,
//! and splice a chord into the graph at every SPLIT/MERGE — spec.md §4.3/§4.4.

use itertools::Itertools;
use log::{debug, trace};

use crate::error::BcdError;
use crate::events::{classify_vertex, EventKind};
use crate::geometry::{intersect_vertical, rotate, Point};
use crate::graph::{EdgeWeight, PlanarGraph, VertexId};

/// The augmented state a sweep hands off to cell extraction: points and
/// graph in the rotated (sweep-direction-as-x) frame, plus the critical
/// vertices found, in sweep order.
pub struct SweepResult {
	pub points: Vec<Point>,
	pub graph: PlanarGraph,
	pub critical: Vec<(VertexId, EventKind)>,
}

/// Runs the sweep described in spec.md §4.3 at angle `theta`.
pub fn sweep(points: &[Point], graph: &PlanarGraph, theta: f64) -> Result<SweepResult, BcdError> {
	let mut points = rotate(points, theta);
	let mut graph = graph.clone();

	let mut order: Vec<VertexId> = graph.vertices().collect();
	order.sort_by_key(|&v| points[v].lex_key());
	for (a, b) in order.iter().copied().tuple_windows() {
		if points[a].lex_key() == points[b].lex_key() {
			return Err(BcdError::DegenerateSweep { a, b });
		}
	}

	let mut critical = Vec::new();
	for &v in &order {
		let kind = classify_vertex(&points, &graph, v)?;
		trace!("vertex {} classified as {:?}", v, kind);
		if matches!(kind, EventKind::Split | EventKind::Merge) {
			splice_chords(&mut points, &mut graph, v, kind)?;
		}
		if kind.is_critical() {
			critical.push((v, kind));
		}
	}
	debug!("sweep classified {} vertices ({} critical) at theta={}", order.len(), critical.len(), theta);

	Ok(SweepResult { points, graph, critical })
}

#[derive(Debug, Clone, Copy)]
enum Side {
	Above,
	Below,
}

struct Hit {
	edge: (VertexId, VertexId, EdgeWeight),
	point: Point,
}

/// Shoots a vertical probe from `v` and finds the closest edge hit strictly
/// above and strictly below it, per spec.md §4.3.
fn probe(points: &[Point], graph: &PlanarGraph, v: VertexId) -> (Option<Hit>, Option<Hit>) {
	let vx = points[v].x;
	let vy = points[v].y;
	let mut above: Option<Hit> = None;
	let mut below: Option<Hit> = None;
	for (a, b, w) in graph.all_edges() {
		let pt = match intersect_vertical(vx, points[a], points[b]) {
			Some(pt) => pt,
			None => continue,
		};
		if pt.y > vy {
			let closer = above.as_ref().map_or(true, |h| pt.y - vy < h.point.y - vy);
			if closer {
				above = Some(Hit { edge: (a, b, w), point: pt });
			}
		} else if pt.y < vy {
			let closer = below.as_ref().map_or(true, |h| vy - pt.y < vy - h.point.y);
			if closer {
				below = Some(Hit { edge: (a, b, w), point: pt });
			}
		}
	}
	(above, below)
}

/// Inserts the above/below chord pair at a SPLIT or MERGE vertex, per
/// spec.md §4.4. Both directions assign identical chord wiring for SPLIT and
/// MERGE — see `SPEC_FULL.md` §9 open question 5 and `DESIGN.md`.
fn splice_chords(points: &mut Vec<Point>, graph: &mut PlanarGraph, v: VertexId, kind: EventKind) -> Result<(), BcdError> {
	let (above, below) = probe(points, graph, v);
	let above = above.ok_or(BcdError::NumericEdge { vertex: v, kind, side: "above" })?;
	let below = below.ok_or(BcdError::NumericEdge { vertex: v, kind, side: "below" })?;
	splice_hit(points, graph, v, above, Side::Above);
	splice_hit(points, graph, v, below, Side::Below);
	Ok(())
}

fn splice_hit(points: &mut Vec<Point>, graph: &mut PlanarGraph, v: VertexId, hit: Hit, side: Side) {
	let p = points.len();
	points.push(hit.point);
	let (e0, e1, w) = hit.edge;
	graph.remove_edge(e0, e1);
	graph.add_edge(e0, p, w);
	graph.add_edge(p, e1, w);
	match side {
		Side::Above => {
			graph.add_edge(p, v, EdgeWeight::ChordForward);
			graph.add_edge(v, p, EdgeWeight::ChordReverse);
		}
		Side::Below => {
			graph.add_edge(v, p, EdgeWeight::ChordForward);
			graph.add_edge(p, v, EdgeWeight::ChordReverse);
		}
	}
	trace!("chord inserted at vertex {} ({:?}), new INTERSECT vertex {}", v, side, p);
}
