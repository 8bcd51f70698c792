use crate::Vector;

use serde::{Deserialize, Serialize};

/// Selects one of the two tangent points a circle has toward an external point.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Side {
	/// Adds the perpendicular offset to the chord midpoint.
	Positive,
	/// Subtracts the perpendicular offset from the chord midpoint.
	Negative,
}

/// Find the point on the circle (`center`, `radius`) where a line through `point` touches the circle tangentially.
///
/// The tangent point is where the circle meets a second circle whose diameter is the segment from `center` to `point`
/// (any point on that second circle sees the segment at a right angle). The two circles are intersected with the standard
/// circle-circle formula and `side` picks one of the two intersections.
///
/// Returns `None` when the circles do not intersect, which happens whenever `point` lies strictly inside the circle or coincides with its center.
pub fn circle_tangent_to_point(center: Vector, radius: f64, point: Vector, side: Side) -> Option<Vector> {
	let other_center = center.lrp(point, 0.5);
	let other_radius = center.dist(other_center);
	let delta = other_center - center;
	let d = delta.len();

	// Also rejects NaN inputs, which fail every comparison
	if !(d <= radius + other_radius && d >= (radius - other_radius).abs()) || d == 0. {
		return None;
	}

	let a = (radius * radius - other_radius * other_radius + d * d) / (2. * d);
	let n = 1. / d;
	let chord_midpoint = center + delta * (a * n);
	let h = (radius * radius - a * a).max(0.).sqrt();
	let offset = delta.per() * (h * n);

	Some(match side {
		Side::Positive => chord_midpoint + offset,
		Side::Negative => chord_midpoint - offset,
	})
}
