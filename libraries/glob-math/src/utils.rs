use crate::Vector;
use crate::consts::{FULL_TURN, MAX_ABSOLUTE_DIFFERENCE, STRICT_MAX_ABSOLUTE_DIFFERENCE};

/// Find the root of the linear equation `ax + b`.
pub fn solve_linear(a: f64, b: f64) -> Option<f64> {
	// There exists a root when `a` is not 0
	(a.abs() > MAX_ABSOLUTE_DIFFERENCE).then(|| -b / a)
}

/// Find the real roots of the quadratic equation `ax^2 + bx + c`.
/// Precompute the `discriminant` (`b^2 - 4ac`) and `two_times_a` arguments prior to calling this function for efficiency purposes.
///
/// When `a` is approximately zero the equation is treated as the linear `bx + c` instead of dividing by `a`.
/// A negative discriminant yields no roots.
pub fn solve_quadratic(discriminant: f64, two_times_a: f64, b: f64, c: f64) -> [Option<f64>; 2] {
	let mut roots = [None; 2];
	if two_times_a.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		roots[0] = solve_linear(b, c);
	} else if discriminant.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		roots[0] = Some(-b / two_times_a);
	} else if discriminant > 0. {
		let root_discriminant = discriminant.sqrt();
		roots[0] = Some((-b + root_discriminant) / two_times_a);
		roots[1] = Some((-b - root_discriminant) / two_times_a);
	}
	roots
}

/// Evaluate one axis of a cubic bezier with coordinates `a`, `b`, `c`, `d` at the parametric value `t`.
pub fn bez1d(a: f64, b: f64, c: f64, d: f64, t: f64) -> f64 {
	let one_minus_t = 1. - t;
	a * one_minus_t * one_minus_t * one_minus_t + 3. * b * t * one_minus_t * one_minus_t + 3. * c * t * t * one_minus_t + d * t * t * t
}

/// Signed shortest angular distance in radians from angle `a` to angle `b`.
///
/// The remainder follows `f64`'s truncating `%`, so the sign of intermediate values follows the dividend.
pub fn short_angle_dist(a: f64, b: f64) -> f64 {
	let da = (b - a) % FULL_TURN;
	((2. * da) % FULL_TURN) - da
}

/// Signed angular sweep from point `a` to point `b` as seen from `center`.
pub fn sweep(center: Vector, a: Vector, b: Vector) -> f64 {
	short_angle_dist(center.ang(a), center.ang(b))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::compare_f64s;
	use std::f64::consts::{FRAC_PI_2, PI};
	use test_case::test_case;

	fn collect_roots(roots: [Option<f64>; 2]) -> Vec<f64> {
		let mut roots: Vec<f64> = roots.into_iter().flatten().collect();
		roots.sort_unstable_by(|a, b| a.total_cmp(b));
		roots
	}

	#[test]
	fn test_solve_linear() {
		// Line that is on the x-axis
		assert!(solve_linear(0., 0.).is_none());
		// Line that is parallel to but not on the x-axis
		assert!(solve_linear(0., 1.).is_none());
		// Line with a non-zero slope
		assert_eq!(solve_linear(2., -8.), Some(4.));
	}

	#[test]
	fn test_solve_quadratic() {
		// x^2 - 1
		assert_eq!(collect_roots(solve_quadratic(4., 2., 0., -1.)), vec![-1., 1.]);
		// x^2 - 2x + 1 has a double root
		assert_eq!(collect_roots(solve_quadratic(0., 2., -2., 1.)), vec![1.]);
		// x^2 + 1 has no real roots
		assert!(collect_roots(solve_quadratic(-4., 2., 0., 1.)).is_empty());
		// 0x^2 + 2x - 1 falls back to the linear root
		assert_eq!(collect_roots(solve_quadratic(4., 0., 2., -1.)), vec![0.5]);
		// 0x^2 + 0x + 3 has no roots at all
		assert!(collect_roots(solve_quadratic(0., 0., 0., 3.)).is_empty());
	}

	#[test]
	fn test_bez1d() {
		assert_eq!(bez1d(0., 1., 2., 3., 0.), 0.);
		assert_eq!(bez1d(0., 1., 2., 3., 1.), 3.);
		assert_eq!(bez1d(0., 1., 2., 3., 0.5), 1.5);
		assert_eq!(bez1d(0., 10., 10., 0., 0.5), 7.5);
	}

	#[test_case(0., FRAC_PI_2, FRAC_PI_2 ; "quarter turn forward")]
	#[test_case(FRAC_PI_2, 0., -FRAC_PI_2 ; "quarter turn backward")]
	#[test_case(-3., 3., 6. - 2. * PI ; "wraps across the negative x-axis")]
	#[test_case(3., -3., 2. * PI - 6. ; "wraps back across the negative x-axis")]
	#[test_case(1., 1., 0. ; "no turn")]
	fn test_short_angle_dist(a: f64, b: f64, expected: f64) {
		assert!(compare_f64s(short_angle_dist(a, b), expected));
	}

	#[test]
	fn test_sweep() {
		let center = Vector::ZERO;
		assert!(sweep(center, Vector::new(1., 0.), Vector::new(0., 1.)) > 0.);
		assert!(sweep(center, Vector::new(0., 1.), Vector::new(1., 0.)) < 0.);
	}
}
