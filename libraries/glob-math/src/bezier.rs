use crate::utils::{bez1d, solve_quadratic};
use crate::{Bounds, Vector};

/// Return the point at the parametric value `t` on the cubic bezier with anchors `p0`, `p1` and handles `c0`, `c1`.
pub fn cubic_bezier_evaluate(p0: Vector, c0: Vector, c1: Vector, p1: Vector, t: f64) -> Vector {
	Vector::new(bez1d(p0.x, c0.x, c1.x, p1.x, t), bez1d(p0.y, c0.y, c1.y, p1.y, t))
}

/// Return the tight axis-aligned bounding box of the cubic bezier with anchors `p0`, `p1` and handles `c0`, `c1`.
///
/// Each axis is handled independently: the box starts at the two anchors and is extended by the curve's value at each root of
/// the derivative strictly inside `(0, 1)`. An axis whose derivative has no real root is monotonic and keeps the anchor extent.
pub fn cubic_bezier_bounds(p0: Vector, c0: Vector, c1: Vector, p1: Vector) -> Bounds {
	let (min_x, max_x) = axis_extent(p0.x, c0.x, c1.x, p1.x);
	let (min_y, max_y) = axis_extent(p0.y, c0.y, c1.y, p1.y);
	Bounds::new(min_x, min_y, max_x, max_y)
}

/// Minimum and maximum of one axis of a cubic bezier over `t` in `[0, 1]`.
fn axis_extent(p0: f64, c0: f64, c1: f64, p1: f64) -> (f64, f64) {
	// Start by taking min/max of endpoints
	let mut low = p0.min(p1);
	let mut high = p0.max(p1);

	// Coefficients of the derivative `at^2 + bt + c`
	let a = 3. * p1 - 9. * c1 + 9. * c0 - 3. * p0;
	let b = 6. * p0 - 12. * c0 + 6. * c1;
	let c = 3. * c0 - 3. * p0;
	let discriminant = b * b - 4. * a * c;

	for t in solve_quadratic(discriminant, 2. * a, b, c).into_iter().flatten().filter(|&t| t > 0. && t < 1.) {
		let value = bez1d(p0, c0, c1, p1, t);
		low = low.min(value);
		high = high.max(value);
	}

	(low, high)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_f64s, compare_points};

	#[test]
	fn test_evaluate_endpoints() {
		let (p0, c0, c1, p1) = (Vector::new(0., 0.), Vector::new(0., 100.), Vector::new(100., 100.), Vector::new(100., 0.));
		assert_eq!(cubic_bezier_evaluate(p0, c0, c1, p1, 0.), p0);
		assert_eq!(cubic_bezier_evaluate(p0, c0, c1, p1, 1.), p1);
		assert_eq!(cubic_bezier_evaluate(p0, c0, c1, p1, 0.5), Vector::new(50., 75.));
	}

	#[test]
	fn test_evenly_spaced_line_is_bounded_by_its_endpoints() {
		let bounds = cubic_bezier_bounds(Vector::new(0., 0.), Vector::new(10., 20.), Vector::new(20., 40.), Vector::new(30., 60.));
		assert_eq!(bounds, Bounds::new(0., 0., 30., 60.));

		let reversed = cubic_bezier_bounds(Vector::new(30., 60.), Vector::new(20., 40.), Vector::new(10., 20.), Vector::new(0., 0.));
		assert_eq!(reversed, Bounds::new(0., 0., 30., 60.));
	}

	#[test]
	fn test_arch_extends_past_anchors() {
		// Symmetric arch peaking at t = 0.5
		let bounds = cubic_bezier_bounds(Vector::new(0., 0.), Vector::new(0., 100.), Vector::new(100., 100.), Vector::new(100., 0.));
		assert!(compare_f64s(bounds.min_x, 0.));
		assert!(compare_f64s(bounds.max_x, 100.));
		assert!(compare_f64s(bounds.min_y, 0.));
		assert!(compare_f64s(bounds.max_y, 75.));
	}

	#[test]
	fn test_s_curve_has_two_extrema() {
		let (p0, c0, c1, p1) = (Vector::new(0., 0.), Vector::new(100., 100.), Vector::new(-100., 100.), Vector::new(0., 100.));
		let bounds = cubic_bezier_bounds(p0, c0, c1, p1);

		// Sample the curve densely and make sure every point is inside and the extremes are reached
		let samples: Vec<Vector> = (0..=1000).map(|step| cubic_bezier_evaluate(p0, c0, c1, p1, step as f64 / 1000.)).collect();
		assert!(samples.iter().all(|point| Bounds::new(bounds.min_x - 1e-9, bounds.min_y - 1e-9, bounds.max_x + 1e-9, bounds.max_y + 1e-9).contains(*point)));

		let sampled_min_x = samples.iter().map(|point| point.x).fold(f64::INFINITY, f64::min);
		let sampled_max_x = samples.iter().map(|point| point.x).fold(f64::NEG_INFINITY, f64::max);
		assert!(compare_f64s(bounds.min_x, sampled_min_x));
		assert!(compare_f64s(bounds.max_x, sampled_max_x));
		assert!(bounds.min_x < 0. && bounds.max_x > 0.);
	}

	#[test]
	fn test_quadratic_shaped_cubic_uses_linear_root() {
		// Handles placed so the x derivative's leading coefficient vanishes
		let (p0, c0, c1, p1) = (Vector::new(0., 0.), Vector::new(30., 0.), Vector::new(30., 0.), Vector::new(0., 0.));
		let bounds = cubic_bezier_bounds(p0, c0, c1, p1);
		assert!(compare_points(bounds.max(), Vector::new(22.5, 0.)));
		assert!(compare_points(bounds.min(), Vector::ZERO));
	}
}
