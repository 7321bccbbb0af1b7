//! Consumer interfaces over a finished decomposition — spec.md §6/§9:
//! per-cell bounding boxes in the sweep-rotated frame, and shoelace areas.
//!
//! Both are read-only analyses over `cells`/`points`; nothing here mutates
//! the decomposition. `cell_areas` iterates each cell's boundary-ordered
//! traversal (`Cell::boundary`) rather than its stored-order vertex set, so
//! the shoelace formula is correct for non-convex cells — resolving
//! `SPEC_FULL.md` §9 open question 2 instead of reproducing the source's bug.

use crate::cells::Cell;
use crate::geometry::{rotate, Point};

/// Axis-aligned bounding box of a cell in the sweep-rotated frame.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BBox {
	pub left: f64,
	pub right: f64,
	pub bottom: f64,
	pub top: f64,
}

impl BBox {
	pub fn width(&self) -> f64 {
		self.right - self.left
	}

	pub fn height(&self) -> f64 {
		self.top - self.bottom
	}
}

/// Bounding box of `cell` in the frame rotated by `theta` (the same angle
/// the decomposition swept at), per spec.md §6.
pub fn cell_bbox(points: &[Point], cell: &Cell, theta: f64) -> BBox {
	let rotated = rotate(points, theta);
	let mut left = f64::INFINITY;
	let mut right = f64::NEG_INFINITY;
	let mut bottom = f64::INFINITY;
	let mut top = f64::NEG_INFINITY;
	for &v in cell.boundary() {
		let p = rotated[v];
		left = left.min(p.x);
		right = right.max(p.x);
		bottom = bottom.min(p.y);
		top = top.max(p.y);
	}
	BBox { left, right, bottom, top }
}

/// Bounding boxes for every cell, in the same order as `cells`.
pub fn cell_bboxes(points: &[Point], cells: &[Cell], theta: f64) -> Vec<BBox> {
	cells.iter().map(|c| cell_bbox(points, c, theta)).collect()
}

/// Shoelace area of `cell`, iterated in its boundary (not storage) order —
/// spec.md §6/§9's open question, resolved.
pub fn cell_area(points: &[Point], cell: &Cell) -> f64 {
	let ids = cell.boundary();
	let n = ids.len();
	let mut acc = 0.0;
	for i in 0..n {
		let a = points[ids[i]];
		let b = points[ids[(i + 1) % n]];
		acc += a.x * b.y - b.x * a.y;
	}
	0.5 * acc.abs()
}

/// Areas for every cell, in the same order as `cells`.
pub fn cell_areas(points: &[Point], cells: &[Cell]) -> Vec<f64> {
	cells.iter().map(|c| cell_area(points, c)).collect()
}

#[cfg(test)]
mod test {
	use super::*;

	fn square() -> (Vec<Point>, Cell) {
		let points = vec![Point::new(0.0, 0.0), Point::new(0.0, 2.0), Point::new(4.0, 2.0), Point::new(4.0, 0.0)];
		(points, Cell::from_order(vec![0, 1, 2, 3]))
	}

	#[test]
	fn bbox_of_axis_aligned_rectangle() {
		let (points, cell) = square();
		let bbox = cell_bbox(&points, &cell, 0.0);
		assert_eq!(bbox.width(), 4.0);
		assert_eq!(bbox.height(), 2.0);
	}

	#[test]
	fn area_of_axis_aligned_rectangle() {
		let (points, cell) = square();
		assert!((cell_area(&points, &cell) - 8.0).abs() < 1e-9);
	}

	#[test]
	fn area_is_correct_for_non_convex_cell_in_boundary_order() {
		// L-shape: (0,0),(0,2),(1,2),(1,1),(2,1),(2,0); area = 3.
		let points = vec![
			Point::new(0.0, 0.0),
			Point::new(0.0, 2.0),
			Point::new(1.0, 2.0),
			Point::new(1.0, 1.0),
			Point::new(2.0, 1.0),
			Point::new(2.0, 0.0),
		];
		let cell = Cell::from_order(vec![0, 1, 2, 3, 4, 5]);
		assert!((cell_area(&points, &cell) - 3.0).abs() < 1e-9);
	}

	#[test]
	fn area_in_stored_but_non_boundary_order_would_be_wrong_demonstrating_the_fix() {
		// same L-shape, scrambled storage order: shoelacing this order directly
		// (the open question's original bug) does not give 3; boundary()
		// preserves the correct order so cell_area is unaffected by scrambling
		// the *input* `order` vec used to construct the cell.
		let points = vec![
			Point::new(0.0, 0.0),
			Point::new(0.0, 2.0),
			Point::new(1.0, 2.0),
			Point::new(1.0, 1.0),
			Point::new(2.0, 1.0),
			Point::new(2.0, 0.0),
		];
		let boundary_order = Cell::from_order(vec![0, 1, 2, 3, 4, 5]);
		let scrambled_storage_order = Cell::from_order(vec![3, 1, 5, 0, 2, 4]);
		assert!((cell_area(&points, &boundary_order) - 3.0).abs() < 1e-9);
		assert!((cell_area(&points, &scrambled_storage_order) - 3.0).abs() > 1e-6);
	}
}
