//! Randomized property test for spec.md §8 invariant 4 (area preservation)
//! over convex polygons, using `rand` as the teacher's own dev-dependency
//! for fixture variation.

use rand::Rng;

use bcd::graph::{EdgeWeight, PlanarGraph};
use bcd::{decompose, Point};

fn polygon_area(points: &[Point]) -> f64 {
	let n = points.len();
	let mut acc = 0.0;
	for i in 0..n {
		let a = points[i];
		let b = points[(i + 1) % n];
		acc += a.x * b.y - b.x * a.y;
	}
	0.5 * acc.abs()
}

/// Points placed at distinct random angles on a circle, visited in
/// decreasing-angle order, form a simple convex polygon wound clockwise in
/// a y-up frame — matching the clockwise-outer-loop precondition.
fn random_convex_polygon(rng: &mut impl Rng, n: usize) -> Vec<Point> {
	let mut angles: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..std::f64::consts::TAU)).collect();
	angles.sort_by(|a, b| b.partial_cmp(a).unwrap());
	angles.dedup_by(|a, b| (*a - *b).abs() < 1e-6);
	angles.iter().map(|&a| Point::new(a.cos(), a.sin())).collect()
}

#[test]
fn random_convex_polygons_decompose_into_one_area_preserving_cell() {
	let mut rng = rand::thread_rng();
	let mut tried = 0;
	while tried < 20 {
		let points = random_convex_polygon(&mut rng, rng.gen_range(5..10));
		if points.len() < 3 {
			continue;
		}
		tried += 1;

		let mut g = PlanarGraph::new();
		let ids: Vec<usize> = (0..points.len()).collect();
		g.add_boundary_loop(&ids, EdgeWeight::OuterBoundary);

		let d = decompose(points.clone(), g, 0.0).expect("convex polygon should never hit a critical split/merge");
		assert_eq!(d.cells.len(), 1, "a strictly convex polygon is always a single x-monotone cell");

		let total: f64 = d.cell_areas().iter().sum();
		assert!((total - polygon_area(&points)).abs() < 1e-9, "expected area {} got {}", polygon_area(&points), total);
	}
}
