use crate::GeometryError;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D point or direction with value semantics.
///
/// Every operation takes its operands by value and returns a new `Vector`; the assignment operators are the only in-place forms.
/// Operations that divide by a length or a scalar come in two flavors: the plain form documents its nonzero precondition and
/// produces non-finite components when it is violated, while the `try_` form reports a [`GeometryError`] instead.
///
/// A `Vector` serializes as the two-element array `[x, y]`.
#[derive(Copy, Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Vector {
	pub x: f64,
	pub y: f64,
}

impl Vector {
	pub const ZERO: Self = Self::new(0., 0.);

	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn to_array(self) -> [f64; 2] {
		[self.x, self.y]
	}

	/// The vector pointing from `self` to `b`, that is `b - self`.
	pub fn vec(self, b: Self) -> Self {
		b - self
	}

	pub fn dot(self, b: Self) -> f64 {
		self.x * b.x + self.y * b.y
	}

	/// The scalar 2D cross product (the z component of the 3D cross product).
	pub fn cross(self, b: Self) -> f64 {
		self.x * b.y - self.y * b.x
	}

	/// Scalar projection of `self` onto `b`. Requires `b` to have a nonzero length.
	pub fn pry(self, b: Self) -> f64 {
		self.dot(b) / b.len()
	}

	pub fn try_pry(self, b: Self) -> Result<f64, GeometryError> {
		let length = b.len();
		if length == 0. {
			return Err(GeometryError::ZeroLength);
		}
		Ok(self.dot(b) / length)
	}

	pub fn len(self) -> f64 {
		self.x.hypot(self.y)
	}

	pub fn len2(self) -> f64 {
		self.x * self.x + self.y * self.y
	}

	/// The unit vector in the same direction. Requires a nonzero length.
	pub fn uni(self) -> Self {
		self / self.len()
	}

	pub fn try_uni(self) -> Result<Self, GeometryError> {
		let length = self.len();
		if length == 0. || !length.is_finite() {
			return Err(GeometryError::ZeroLength);
		}
		Ok(self / length)
	}

	/// Unit direction from `b` toward `self`. Requires the two points to be distinct.
	pub fn tangent(self, b: Self) -> Self {
		(self - b).uni()
	}

	pub fn try_tangent(self, b: Self) -> Result<Self, GeometryError> {
		(self - b).try_uni()
	}

	pub fn dist2(self, b: Self) -> f64 {
		(self - b).len2()
	}

	pub fn dist(self, b: Self) -> f64 {
		(b.x - self.x).hypot(b.y - self.y)
	}

	/// Angle in radians of the direction from `self` to `b`, in the range `(-π, π]`.
	pub fn ang(self, b: Self) -> f64 {
		(b.y - self.y).atan2(b.x - self.x)
	}

	/// Midpoint between `self` and `b`.
	pub fn med(self, b: Self) -> Self {
		(self + b) * 0.5
	}

	/// Linear interpolation from `self` (at `t = 0`) to `b` (at `t = 1`).
	pub fn lrp(self, b: Self, t: f64) -> Self {
		self + (b - self) * t
	}

	/// Moves `self` toward `b` by the distance `d`. Requires the two points to be distinct.
	pub fn nudge(self, b: Self, d: f64) -> Self {
		self + (b - self).uni() * d
	}

	/// Rotates around the origin by `angle` radians.
	pub fn rot(self, angle: f64) -> Self {
		DVec2::from_angle(angle).rotate(self.into()).into()
	}

	/// Rotates around `pivot` by `angle` radians.
	pub fn rot_around(self, pivot: Self, angle: f64) -> Self {
		(self - pivot).rot(angle) + pivot
	}

	/// The perpendicular `(y, -x)`, a quarter turn clockwise in a y-up frame.
	pub fn per(self) -> Self {
		Self::new(self.y, -self.x)
	}

	pub fn abs(self) -> Self {
		Self::new(self.x.abs(), self.y.abs())
	}

	pub fn try_div_scalar(self, divisor: f64) -> Result<Self, GeometryError> {
		if divisor == 0. {
			return Err(GeometryError::DivisionByZero);
		}
		Ok(self / divisor)
	}

	/// Signed area test of `point` against the directed line from `a` to `b`.
	/// Positive when `point` lies to the left of the line in a y-up frame, negative to the right, zero when collinear.
	pub fn is_left(point: Self, a: Self, b: Self) -> f64 {
		(b - a).cross(point - a)
	}

	/// Signed angle in radians swept from `a` to `b` as seen from `center`, in the range `(-π, π]`.
	pub fn ang3(center: Self, a: Self, b: Self) -> f64 {
		let v1 = a - center;
		let v2 = b - center;
		v1.cross(v2).atan2(v1.dot(v2))
	}

	/// Whether turning from `a` to `b` around `center` is clockwise in a y-down (screen) frame.
	pub fn clockwise(center: Self, a: Self, b: Self) -> bool {
		(a - center).cross(b - center) > 0.
	}

	pub fn is_finite(self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}

	/// Compare both components independently with a provided max absolute value difference.
	pub fn abs_diff_eq(self, other: Self, max_abs_diff: f64) -> bool {
		(self.x - other.x).abs() < max_abs_diff && (self.y - other.y).abs() < max_abs_diff
	}
}

impl Display for Vector {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		write!(f, "[{}, {}]", self.x, self.y)
	}
}

impl From<DVec2> for Vector {
	fn from(value: DVec2) -> Self {
		Self::new(value.x, value.y)
	}
}

impl From<Vector> for DVec2 {
	fn from(value: Vector) -> Self {
		DVec2::new(value.x, value.y)
	}
}

impl From<[f64; 2]> for Vector {
	fn from([x, y]: [f64; 2]) -> Self {
		Self::new(x, y)
	}
}

impl From<Vector> for [f64; 2] {
	fn from(value: Vector) -> Self {
		value.to_array()
	}
}

impl From<(f64, f64)> for Vector {
	fn from((x, y): (f64, f64)) -> Self {
		Self::new(x, y)
	}
}

impl Add for Vector {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Vector {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self::new(self.x - rhs.x, self.y - rhs.y)
	}
}

/// Component-wise multiplication.
impl Mul for Vector {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self {
		Self::new(self.x * rhs.x, self.y * rhs.y)
	}
}

impl Mul<f64> for Vector {
	type Output = Self;

	fn mul(self, rhs: f64) -> Self {
		Self::new(self.x * rhs, self.y * rhs)
	}
}

impl Mul<Vector> for f64 {
	type Output = Vector;

	fn mul(self, rhs: Vector) -> Vector {
		rhs * self
	}
}

/// Component-wise division. Requires both components of `rhs` to be nonzero.
impl Div for Vector {
	type Output = Self;

	fn div(self, rhs: Self) -> Self {
		Self::new(self.x / rhs.x, self.y / rhs.y)
	}
}

/// Scalar division. Requires a nonzero divisor, see [`Vector::try_div_scalar`].
impl Div<f64> for Vector {
	type Output = Self;

	fn div(self, rhs: f64) -> Self {
		Self::new(self.x / rhs, self.y / rhs)
	}
}

impl Neg for Vector {
	type Output = Self;

	fn neg(self) -> Self {
		Self::new(-self.x, -self.y)
	}
}

impl AddAssign for Vector {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl SubAssign for Vector {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl MulAssign<f64> for Vector {
	fn mul_assign(&mut self, rhs: f64) {
		*self = *self * rhs;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_f64s, compare_points};
	use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

	#[test]
	fn test_arithmetic() {
		let a = Vector::new(3., 4.);
		let b = Vector::new(1., -2.);

		assert_eq!(a + b, Vector::new(4., 2.));
		assert_eq!(a - b, Vector::new(2., 6.));
		assert_eq!(a * b, Vector::new(3., -8.));
		assert_eq!(a / b, Vector::new(3., -2.));
		assert_eq!(a * 2., Vector::new(6., 8.));
		assert_eq!(2. * a, Vector::new(6., 8.));
		assert_eq!(a / 2., Vector::new(1.5, 2.));
		assert_eq!(-a, Vector::new(-3., -4.));
		assert_eq!(Vector::new(-3., 4.).abs(), Vector::new(3., 4.));
		assert_eq!(a.vec(b), b - a);
	}

	#[test]
	fn test_assignment_operators_do_not_touch_copies() {
		let original = Vector::new(1., 1.);
		let mut moved = original;
		moved += Vector::new(2., 3.);
		moved -= Vector::new(1., 1.);
		moved *= 2.;

		assert_eq!(moved, Vector::new(4., 6.));
		assert_eq!(original, Vector::new(1., 1.));
	}

	#[test]
	fn test_products() {
		let a = Vector::new(3., 4.);
		let b = Vector::new(2., 1.);

		assert_eq!(a.dot(b), 10.);
		assert_eq!(a.cross(b), -5.);
		assert_eq!(b.cross(a), 5.);
		assert!(compare_f64s(a.pry(Vector::new(10., 0.)), 3.));
		assert_eq!(a.try_pry(Vector::ZERO), Err(GeometryError::ZeroLength));
	}

	#[test]
	fn test_lengths_and_distances() {
		let a = Vector::new(3., 4.);

		assert_eq!(a.len(), 5.);
		assert_eq!(a.len2(), 25.);
		assert_eq!(Vector::ZERO.dist(a), 5.);
		assert_eq!(Vector::ZERO.dist2(a), 25.);
		assert!(compare_points(a.uni(), Vector::new(0.6, 0.8)));
		assert!(compare_points(a.tangent(Vector::ZERO), Vector::new(0.6, 0.8)));
	}

	#[test]
	fn test_zero_length_is_reported() {
		assert_eq!(Vector::ZERO.try_uni(), Err(GeometryError::ZeroLength));
		assert_eq!(Vector::new(2., 2.).try_tangent(Vector::new(2., 2.)), Err(GeometryError::ZeroLength));
		assert_eq!(Vector::new(1., 1.).try_div_scalar(0.), Err(GeometryError::DivisionByZero));
		assert!(!Vector::ZERO.uni().is_finite());
	}

	#[test]
	fn test_angles() {
		let origin = Vector::ZERO;

		assert!(compare_f64s(origin.ang(Vector::new(1., 0.)), 0.));
		assert!(compare_f64s(origin.ang(Vector::new(0., 1.)), FRAC_PI_2));
		assert!(compare_f64s(origin.ang(Vector::new(-1., 0.)), PI));
		assert!(compare_f64s(Vector::ang3(origin, Vector::new(1., 0.), Vector::new(1., 1.)), FRAC_PI_4));
		assert!(compare_f64s(Vector::ang3(origin, Vector::new(1., 1.), Vector::new(1., 0.)), -FRAC_PI_4));
	}

	#[test]
	fn test_interpolation() {
		let a = Vector::new(0., 10.);
		let b = Vector::new(10., 30.);

		assert_eq!(a.med(b), Vector::new(5., 20.));
		assert_eq!(a.lrp(b, 0.), a);
		assert_eq!(a.lrp(b, 1.), b);
		assert_eq!(a.lrp(b, 0.25), Vector::new(2.5, 15.));
		assert!(compare_points(Vector::ZERO.nudge(Vector::new(0., 10.), 3.), Vector::new(0., 3.)));
	}

	#[test]
	fn test_rotation() {
		let a = Vector::new(2., 1.);

		assert!(compare_points(a.rot(FRAC_PI_2), Vector::new(-1., 2.)));
		assert!(compare_points(a.rot(-FRAC_PI_2), a.per()));
		assert!(compare_points(Vector::new(2., 0.).rot_around(Vector::new(1., 0.), PI), Vector::ZERO));
		assert_eq!(Vector::new(3., 5.).per(), Vector::new(5., -3.));
	}

	#[test]
	fn test_orientation() {
		let a = Vector::ZERO;
		let b = Vector::new(10., 0.);

		assert!(Vector::is_left(Vector::new(5., 5.), a, b) > 0.);
		assert!(Vector::is_left(Vector::new(5., -5.), a, b) < 0.);
		assert_eq!(Vector::is_left(Vector::new(20., 0.), a, b), 0.);
		assert!(Vector::clockwise(a, b, Vector::new(0., 10.)));
		assert!(!Vector::clockwise(a, Vector::new(0., 10.), b));
	}

	#[test]
	fn test_conversions() {
		let a = Vector::new(1.5, -2.);

		assert_eq!(DVec2::from(a), DVec2::new(1.5, -2.));
		assert_eq!(Vector::from(DVec2::new(1.5, -2.)), a);
		assert_eq!(<[f64; 2]>::from(a), [1.5, -2.]);
		assert_eq!(Vector::from([1.5, -2.]), a);
		assert_eq!(Vector::from((1.5, -2.)), a);
		assert_eq!(a.to_string(), "[1.5, -2]");
	}
}
