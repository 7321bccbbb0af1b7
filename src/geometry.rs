//! Plane geometry primitives the sweep is built from.

use noisy_float::prelude::{n64, N64};

/// A point in the plane. Stored densely in an append-only `Vec<Point>`;
/// a `VertexId` (see `graph.rs`) is an index into that vec.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Point { x, y }
	}

	/// Lexicographic sort key: (x, then y). Used throughout the sweep as
	/// the "small symbolic perturbation" that lets vertical edges (two
	/// vertices sharing an x after rotation) classify unambiguously
	/// instead of forcing every caller to avoid exact ties in theta.
	pub fn lex_key(self) -> (N64, N64) {
		(n64(self.x), n64(self.y))
	}
}

impl std::ops::Sub for Point {
	type Output = Point;
	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl std::ops::Add for Point {
	type Output = Point;
	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl std::ops::Mul<f64> for Point {
	type Output = Point;
	fn mul(self, s: f64) -> Point {
		Point::new(self.x * s, self.y * s)
	}
}

/// Rotates every point by `theta` radians about the origin.
pub fn rotate(points: &[Point], theta: f64) -> Vec<Point> {
	let (s, c) = theta.sin_cos();
	points.iter().map(|p| Point::new(p.x * c - p.y * s, p.x * s + p.y * c)).collect()
}

/// 2D cross product (the z component of the 3D cross product of the two
/// vectors extended into the plane).
pub fn cross2(a: Point, b: Point) -> f64 {
	a.x * b.y - b.x * a.y
}

/// Is `w` on or above the line through `u` and `v`, as seen looking from
/// `u` to `v`? Used to decide which of a vertex's two boundary neighbors
/// lies "above" for event classification.
pub fn qcross(points: &[Point], u: usize, v: usize, w: usize) -> bool {
	cross2(points[v] - points[u], points[v] - points[w]) >= 0.0
}

/// Signed turn at `v` going `u -> v -> w`, normalized so only the sign and
/// relative magnitude (not the vectors' lengths) matter. Positive is a
/// left turn, negative a right turn; used by cell extraction to find the
/// most-clockwise outgoing edge.
pub fn right_turn(points: &[Point], u: usize, v: usize, w: usize) -> f64 {
	let a = normalize(points[v] - points[u]);
	let b = normalize(points[w] - points[v]);
	cross2(a, b)
}

/// Signed dot product of the same two normalized vectors `right_turn`
/// computes, used only to break exact ties between candidates with equal
/// `right_turn` value: the smaller (more negative) dot is the sharper turn.
pub fn signed_dot(points: &[Point], u: usize, v: usize, w: usize) -> f64 {
	let a = normalize(points[v] - points[u]);
	let b = normalize(points[w] - points[v]);
	a.x * b.x + a.y * b.y
}

fn normalize(p: Point) -> Point {
	let len = (p.x * p.x + p.y * p.y).sqrt();
	if len == 0.0 {
		p
	} else {
		p * (1.0 / len)
	}
}

/// Where a vertical line at `x` crosses the segment `a -> b`, if `x` lies
/// strictly between `a.x` and `b.x` (an edge incident to the probing
/// vertex itself never straddles its own x, so callers don't need to
/// exclude it separately).
pub fn intersect_vertical(x: f64, a: Point, b: Point) -> Option<Point> {
	let (lo, hi) = if a.x < b.x { (a, b) } else { (b, a) };
	if x <= lo.x || x >= hi.x {
		return None;
	}
	let t = (x - a.x) / (b.x - a.x);
	Some(Point::new(x, a.y + t * (b.y - a.y)))
}
