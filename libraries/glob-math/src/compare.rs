use crate::Vector;
use crate::consts::MAX_ABSOLUTE_DIFFERENCE;

/// Compare two `f64` numbers against the default max absolute value difference.
pub fn compare_f64s(f1: f64, f2: f64) -> bool {
	(f1 - f2).abs() < MAX_ABSOLUTE_DIFFERENCE
}

/// Compare the x and y components of two points against the default max absolute value difference.
pub fn compare_points(p1: Vector, p2: Vector) -> bool {
	p1.abs_diff_eq(p2, MAX_ABSOLUTE_DIFFERENCE)
}
