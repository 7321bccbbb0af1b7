//! The directed polygon-boundary graph the sweep classifies and augments.
//!
//! Historically this module held a generic `Graph<NId, N, E>` borrowed from a
//! road/sidewalk-plowing solver, with Dijkstra pathfinding and Tarjan SCCs.
//! None of that is needed here: cell extraction only ever walks a vertex's
//! immediate successors, so the graph is specialized down to one concrete
//! vertex id (`usize`) and one edge-weight enum, trading the old generic
//! `Edge` trait for two plain adjacency indices.

use indexmap::IndexMap;

use crate::error::BcdError;

/// A polygon vertex id: an index into the crate's `Vec<Point>`.
pub type VertexId = usize;

/// The semantic tag carried by a directed edge of a `PlanarGraph`, replacing
/// the source's numeric `weight ∈ {1,2,3,4}` with a tagged variant per
/// `SPEC_FULL.md` §3/§9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EdgeWeight {
	/// An original outer-boundary edge, as supplied by the polygon generator.
	OuterBoundary,
	/// An original hole-boundary edge, as supplied by the polygon generator.
	HoleBoundary,
	/// The "opening" direction of a chord inserted at a SPLIT/MERGE event.
	ChordForward,
	/// The companion reverse direction of a `ChordForward` chord.
	ChordReverse,
}

impl EdgeWeight {
	/// Whether this edge was inserted by chord-splicing rather than supplied
	/// by the polygon generator.
	pub fn is_chord(self) -> bool {
		matches!(self, EdgeWeight::ChordForward | EdgeWeight::ChordReverse)
	}
}

/// A directed graph over polygon vertex ids: one outgoing and one incoming
/// adjacency index, so predecessor and successor lookups are both O(1)
/// amortized. Edges are unique per ordered `(from, to)` pair; adding an edge
/// that already exists replaces its weight.
#[derive(Debug, Clone, Default)]
pub struct PlanarGraph {
	outgoing: IndexMap<VertexId, IndexMap<VertexId, EdgeWeight>>,
	incoming: IndexMap<VertexId, IndexMap<VertexId, EdgeWeight>>,
}

impl PlanarGraph {
	pub fn new() -> Self {
		Default::default()
	}

	/// Adds (or re-weights) the directed edge `from -> to`.
	pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: EdgeWeight) {
		self.outgoing.entry(from).or_default().insert(to, weight);
		self.incoming.entry(to).or_default().insert(from, weight);
		// every vertex gets an entry in both indices, even with no edges yet
		// in that direction, so `vertices()` sees it.
		self.outgoing.entry(to).or_default();
		self.incoming.entry(from).or_default();
	}

	/// Removes the directed edge `from -> to`, if present.
	pub fn remove_edge(&mut self, from: VertexId, to: VertexId) {
		if let Some(adj) = self.outgoing.get_mut(&from) {
			adj.shift_remove(&to);
		}
		if let Some(adj) = self.incoming.get_mut(&to) {
			adj.shift_remove(&from);
		}
	}

	/// Adds a closed boundary loop `ids[0] -> ids[1] -> ... -> ids[n-1] ->
	/// ids[0]`, every edge tagged `weight`. A convenience for wiring up an
	/// outer or hole loop as handed over by the (out-of-scope) polygon
	/// generator.
	pub fn add_boundary_loop(&mut self, ids: &[VertexId], weight: EdgeWeight) {
		for i in 0..ids.len() {
			self.add_edge(ids[i], ids[(i + 1) % ids.len()], weight);
		}
	}

	/// Every vertex id that has appeared in at least one edge.
	pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
		self.outgoing.keys().copied()
	}

	/// Outgoing neighbors of `v`, in insertion order.
	pub fn successors(&self, v: VertexId) -> impl Iterator<Item = (VertexId, EdgeWeight)> + '_ {
		self.outgoing.get(&v).into_iter().flat_map(|adj| adj.iter().map(|(&n, &w)| (n, w)))
	}

	/// Incoming neighbors of `v`, in insertion order.
	pub fn predecessors(&self, v: VertexId) -> impl Iterator<Item = (VertexId, EdgeWeight)> + '_ {
		self.incoming.get(&v).into_iter().flat_map(|adj| adj.iter().map(|(&n, &w)| (n, w)))
	}

	/// All directed edges currently in the graph, as `(from, to, weight)`.
	pub fn all_edges(&self) -> impl Iterator<Item = (VertexId, VertexId, EdgeWeight)> + '_ {
		self.outgoing.iter().flat_map(|(&u, adj)| adj.iter().map(move |(&v, &w)| (u, v, w)))
	}

	/// `v`'s unique non-chord predecessor along the original polygon
	/// boundary — the "original neighbor" spec.md §3/§4.2 classification is
	/// built on.
	pub fn non_chord_predecessor(&self, v: VertexId) -> Result<VertexId, BcdError> {
		self.predecessors(v).find(|(_, w)| !w.is_chord()).map(|(n, _)| n).ok_or(BcdError::MalformedInput {
			vertex: v,
			expected: "a non-chord predecessor",
		})
	}

	/// `v`'s unique non-chord successor along the original polygon boundary.
	pub fn non_chord_successor(&self, v: VertexId) -> Result<VertexId, BcdError> {
		self.successors(v).find(|(_, w)| !w.is_chord()).map(|(n, _)| n).ok_or(BcdError::MalformedInput {
			vertex: v,
			expected: "a non-chord successor",
		})
	}
}
